//! Curated surface for the CLI and the Python bindings.
//!
//! Prefer these re-exports over reaching into submodules so both callers stay
//! aligned when the internal layout moves.

// Points and transforms
pub use crate::point::{points_match, Point};
pub use crate::transform::{rotate_degrees, translate, RigidMotion};
// Detection
pub use crate::symmetry::{
    double_points, lines_of_symmetry, Axis, Callbacks, Event, EventKind, EventLog,
    ObservedSymmetry, Observer, Symmetry, SymmetryCfg, SymmetryError,
};
// Shapes
pub use crate::shapes::rand::{
    draw_mirrored_polygon, draw_polygon_radial, RadialCfg, ReplayToken, VertexCount,
};
pub use crate::shapes::{regular_polygon, Preset};
