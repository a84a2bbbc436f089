//! Reflective symmetry detection for closed 2D polygons.
//!
//! The detector resamples a polygon by inserting edge midpoints, then tests
//! every vertex/midpoint as a pivot: translate the pivot to the origin, rotate
//! the opposite point onto the x-axis, and compare points equidistant from the
//! pivot on both sides with a distance tolerance.
//!
//! Layout
//! - `point`: the `Point` value type and the mirror-match predicate.
//! - `transform`: in-place translation/rotation and caller-side rigid motions.
//! - `symmetry`: doubling, the detector, observers and the event trace.
//! - `shapes`: preset polygons, regular polygons and seeded random samplers.
//!
//! API Policy
//! - The crate is consumed by the CLI and the Python bindings in this
//!   workspace. Breaking changes are fine when they simplify either caller.

pub mod api;
pub mod point;
pub mod shapes;
pub mod symmetry;
pub mod transform;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use point::{points_match, Point};
pub use symmetry::{lines_of_symmetry, Axis, Symmetry, SymmetryCfg, SymmetryError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::point::{points_match, Point};
    pub use crate::shapes::rand::{
        draw_mirrored_polygon, draw_polygon_radial, RadialCfg, ReplayToken, VertexCount,
    };
    pub use crate::shapes::{regular_polygon, Preset};
    pub use crate::symmetry::{
        double_points, lines_of_symmetry, Axis, Callbacks, Event, EventKind, EventLog,
        ObservedSymmetry, Observer, Symmetry, SymmetryCfg, SymmetryError,
    };
    pub use crate::transform::{rotate_degrees, translate, RigidMotion};
}
