//! Detector value types, configuration and errors.

use crate::point::Point;
use std::fmt;

/// Detector configuration (tolerances and validation switches).
#[derive(Clone, Copy, Debug)]
pub struct SymmetryCfg {
    /// Mirror-match distance, in input units. Pairs match iff `dist < tolerance`.
    pub tolerance: f64,
    /// Reject NaN/Inf coordinates at construction.
    pub reject_non_finite: bool,
    /// Relative area threshold: polygons with `|area| <= eps_area * diag²`
    /// (diag = bounding-box diagonal) are treated as degenerate.
    pub eps_area: f64,
}

impl Default for SymmetryCfg {
    fn default() -> Self {
        Self {
            tolerance: 5.0,
            reject_non_finite: true,
            eps_area: 1e-9,
        }
    }
}

impl SymmetryCfg {
    pub(crate) fn validate(&self) -> Result<(), SymmetryError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(SymmetryError::invalid(format!(
                "tolerance must be finite and > 0, got {}",
                self.tolerance
            )));
        }
        if !self.eps_area.is_finite() || self.eps_area < 0.0 {
            return Err(SymmetryError::invalid(format!(
                "eps_area must be finite and >= 0, got {}",
                self.eps_area
            )));
        }
        Ok(())
    }
}

/// A confirmed axis, as the two original doubled-polygon points it passes
/// through. `index` is the candidate (pivot) position in the doubled sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Axis {
    pub index: usize,
    pub from: Point,
    pub to: Point,
}

impl Axis {
    #[inline]
    pub fn new(index: usize, from: Point, to: Point) -> Self {
        Self { index, from, to }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Error type for detector construction.
#[derive(Debug, Clone, PartialEq)]
pub enum SymmetryError {
    InvalidInput { reason: String },
}

impl SymmetryError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SymmetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => write!(f, "invalid input: {reason}"),
        }
    }
}

impl std::error::Error for SymmetryError {}
