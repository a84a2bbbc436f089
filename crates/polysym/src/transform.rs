//! Rigid transforms on point slices.
//!
//! - `translate`, `rotate_degrees`: in-place, used on the detector's working
//!   copies.
//! - `RigidMotion`: caller-side offset + rotation that returns a fresh copy.

use crate::point::Point;
use nalgebra::{Rotation2, Vector2};

/// Shift every point by `(dx, dy)`.
pub fn translate(points: &mut [Point], dx: f64, dy: f64) {
    let t = Vector2::new(dx, dy);
    for p in points.iter_mut() {
        *p = Point::from(p.to_vector() + t);
    }
}

/// Rotate every point about the origin by `degrees`:
/// `x' = x cos θ − y sin θ`, `y' = x sin θ + y cos θ`.
pub fn rotate_degrees(points: &mut [Point], degrees: f64) {
    let rot = Rotation2::new(degrees.to_radians());
    for p in points.iter_mut() {
        *p = Point::from(rot * p.to_vector());
    }
}

/// Offset then rotate about the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RigidMotion {
    pub dx: f64,
    pub dy: f64,
    pub degrees: f64,
}

impl RigidMotion {
    #[inline]
    pub fn new(dx: f64, dy: f64, degrees: f64) -> Self {
        Self { dx, dy, degrees }
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0 && self.degrees == 0.0
    }

    /// Transformed copy of `points`; the input is left untouched.
    pub fn apply(&self, points: &[Point]) -> Vec<Point> {
        let mut out = points.to_vec();
        translate(&mut out, self.dx, self.dy);
        rotate_degrees(&mut out, self.degrees);
        out
    }
}
