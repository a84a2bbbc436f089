//! The detector: validation, degenerate short-circuit and the candidate loop.

use super::doubled::double_points;
use super::observer::{Callbacks, Event, EventLog, Observer};
use super::types::{Axis, SymmetryCfg, SymmetryError};
use crate::point::{points_match, Point};
use crate::transform::{rotate_degrees, translate};

/// Symmetry detector over a fixed polygon.
///
/// The polygon is copied at construction and never mutated; each `detect*`
/// call recomputes from it, so repeated calls agree.
#[derive(Clone, Debug)]
pub struct Symmetry {
    points: Vec<Point>,
    cfg: SymmetryCfg,
}

impl Symmetry {
    /// Detector with default tolerances.
    pub fn new(points: impl Into<Vec<Point>>) -> Result<Self, SymmetryError> {
        Self::with_cfg(points, SymmetryCfg::default())
    }

    /// Errors
    /// - `InvalidInput` for an empty polygon, a non-finite coordinate (when
    ///   `cfg.reject_non_finite`), or an invalid `cfg`.
    pub fn with_cfg(
        points: impl Into<Vec<Point>>,
        cfg: SymmetryCfg,
    ) -> Result<Self, SymmetryError> {
        let points = points.into();
        cfg.validate()?;
        if points.is_empty() {
            return Err(SymmetryError::invalid("polygon has no vertices"));
        }
        if cfg.reject_non_finite {
            if let Some(k) = points.iter().position(|p| !p.is_finite()) {
                return Err(SymmetryError::invalid(format!(
                    "vertex {k} is not finite: {}",
                    points[k]
                )));
            }
        }
        Ok(Self { points, cfg })
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Detector with default tolerances and the four hooks attached up front.
    pub fn with_callbacks<'a>(
        points: impl Into<Vec<Point>>,
        callbacks: Callbacks<'a>,
    ) -> Result<ObservedSymmetry<'a>, SymmetryError> {
        Ok(Self::new(points)?.observe(callbacks))
    }

    /// Attach `callbacks`; every later `detect` on the result notifies them.
    pub fn observe<'a>(self, callbacks: Callbacks<'a>) -> ObservedSymmetry<'a> {
        ObservedSymmetry {
            inner: self,
            callbacks,
        }
    }

    /// Vertices interleaved with edge midpoints.
    pub fn doubled(&self) -> Vec<Point> {
        double_points(&self.points)
    }

    /// Confirmed axes in ascending candidate order.
    pub fn detect(&self) -> Vec<Axis> {
        self.detect_with(&mut ())
    }

    /// Axes plus the full event sequence, in emission order.
    pub fn trace(&self) -> (Vec<Axis>, Vec<Event>) {
        let mut log = EventLog::new();
        let axes = self.detect_with(&mut log);
        (axes, log.into_events())
    }

    /// Run detection, notifying `obs` synchronously at every stage.
    pub fn detect_with<O: Observer + ?Sized>(&self, obs: &mut O) -> Vec<Axis> {
        if is_degenerate(&self.points, self.cfg.eps_area) {
            tracing::debug!(
                vertices = self.points.len(),
                "degenerate polygon, no symmetry"
            );
            return Vec::new();
        }

        let doubled = double_points(&self.points);
        let half = doubled.len() / 2;
        let mut axes = Vec::new();

        for index in 0..half {
            obs.on_original(index, &doubled);

            let mut work = doubled.clone();
            let pf = work[index];
            translate(&mut work, -pf.x, -pf.y);
            obs.on_translate(index, &work);

            let opposite = index + half;
            let angle = axis_angle_degrees(work[index], work[opposite]);
            rotate_degrees(&mut work, angle);
            obs.on_rotate(index, &work);

            let symmetrical = is_mirrored(&work, index, half, self.cfg.tolerance);
            tracing::trace!(index, angle, symmetrical, "candidate");
            if symmetrical {
                let axis = Axis::new(index, doubled[index], doubled[opposite]);
                obs.on_symmetry(index, axis.from, axis.to);
                axes.push(axis);
            }
        }

        tracing::debug!(
            vertices = self.points.len(),
            candidates = half,
            axes = axes.len(),
            "symmetry detection done"
        );
        axes
    }
}

/// A detector that owns its callbacks.
pub struct ObservedSymmetry<'a> {
    inner: Symmetry,
    callbacks: Callbacks<'a>,
}

impl<'a> ObservedSymmetry<'a> {
    #[inline]
    pub fn symmetry(&self) -> &Symmetry {
        &self.inner
    }

    /// Same result as `Symmetry::detect`, with the stored callbacks notified.
    pub fn detect(&mut self) -> Vec<Axis> {
        self.inner.detect_with(&mut self.callbacks)
    }

    pub fn into_parts(self) -> (Symmetry, Callbacks<'a>) {
        (self.inner, self.callbacks)
    }
}

/// One-shot detection with default tolerances.
pub fn lines_of_symmetry(points: &[Point]) -> Result<Vec<Axis>, SymmetryError> {
    Ok(Symmetry::new(points)?.detect())
}

/// Rotation (degrees) that brings `to` onto the x-axis through `from`.
#[inline]
pub(super) fn axis_angle_degrees(from: Point, to: Point) -> f64 {
    -(to.y - from.y).atan2(to.x - from.x).to_degrees()
}

/// Compare folded points `pivot - m` and `pivot + m` for every `m < half`.
///
/// All pairs are evaluated; the verdict is the conjunction.
pub(super) fn is_mirrored(work: &[Point], pivot: usize, half: usize, tolerance: f64) -> bool {
    let len = work.len();
    let mut symmetrical = true;
    for m in 0..half {
        let below = work[wrap_index(pivot as isize - m as isize, len)];
        let above = work[(pivot + m) % len];
        symmetrical &= points_match(below.folded(), above.folded(), tolerance);
    }
    symmetrical
}

/// Non-negative `k mod len`.
#[inline]
pub(super) fn wrap_index(k: isize, len: usize) -> usize {
    k.rem_euclid(len as isize) as usize
}

/// Fewer than 3 distinct vertices, or (relative) zero area.
pub(super) fn is_degenerate(points: &[Point], eps_area: f64) -> bool {
    let mut distinct: Vec<Point> = Vec::with_capacity(3);
    for &p in points {
        if !distinct.contains(&p) {
            distinct.push(p);
            if distinct.len() == 3 {
                break;
            }
        }
    }
    if distinct.len() < 3 {
        return true;
    }
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    let diag_sq = (max_x - min_x).powi(2) + (max_y - min_y).powi(2);
    signed_area(points).abs() <= eps_area * diag_sq
}

/// Shoelace area, positive for counterclockwise order.
pub(super) fn signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    let twice: f64 = (0..n)
        .map(|k| {
            let a = points[k];
            let b = points[(k + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum();
    twice / 2.0
}
