//! Lines of symmetry for closed polygons.
//!
//! Purpose
//! - Report every axis of reflective symmetry that passes through two points of
//!   the doubled polygon (vertices plus edge midpoints) at opposite positions.
//! - Expose the intermediate working states (original, translated, rotated,
//!   confirmed) to observers, or as an owned event list, without any coupling
//!   to how a caller renders them.
//!
//! Algorithm (per candidate `i` in `0..n`, with `2n` doubled points)
//! - Copy the doubled points, translate so point `i` sits at the origin.
//! - Rotate so the opposite point `i + n` lies on the x-axis.
//! - Compare `(x, |y|)` of points `i - m` and `i + m` for all `m < n`
//!   (indices wrap); the axis holds iff every pair is within tolerance.
//!
//! Conventions
//! - The rotation angle is `-atan2(dy, dx)` in degrees, the screen-space
//!   (y-down) convention. Regular polygons of any orientation pass with it.
//! - Coincident axes reported from different candidates are not merged.
//!
//! Code cross-refs: `Point`, `points_match`, `transform::{translate,rotate_degrees}`

mod detect;
mod doubled;
mod observer;
mod types;

pub use detect::{lines_of_symmetry, ObservedSymmetry, Symmetry};
pub use doubled::double_points;
pub use observer::{Callbacks, Event, EventKind, EventLog, Observer};
pub use types::{Axis, SymmetryCfg, SymmetryError};

#[cfg(test)]
mod tests;
