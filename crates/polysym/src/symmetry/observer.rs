//! Observation hooks for the detector's intermediate states.
//!
//! - `Observer`: four synchronous hooks, all defaulting to no-ops.
//! - `Callbacks`: four optional closures, attached one by one.
//! - `EventLog`: records owned copies as `Event`s for deferred consumption.
//!
//! Payload slices are borrowed for the duration of the call only; observers
//! that need them later must copy.

use crate::point::Point;

/// Receives intermediate states during `Symmetry::detect_with`.
pub trait Observer {
    /// Doubled points before any transform.
    fn on_original(&mut self, _index: usize, _points: &[Point]) {}
    /// Working copy with the pivot translated to the origin.
    fn on_translate(&mut self, _index: usize, _points: &[Point]) {}
    /// Working copy with the opposite point rotated onto the x-axis.
    fn on_rotate(&mut self, _index: usize, _points: &[Point]) {}
    /// A confirmed axis, as original (untransformed) points.
    fn on_symmetry(&mut self, _index: usize, _from: Point, _to: Point) {}
}

/// Null observer.
impl Observer for () {}

type PointsHook<'a> = Box<dyn FnMut(usize, &[Point]) + 'a>;
type AxisHook<'a> = Box<dyn FnMut(usize, Point, Point) + 'a>;

/// Optional closure per hook. Unset hooks are skipped.
#[derive(Default)]
pub struct Callbacks<'a> {
    original: Option<PointsHook<'a>>,
    translate: Option<PointsHook<'a>>,
    rotate: Option<PointsHook<'a>>,
    symmetry: Option<AxisHook<'a>>,
}

impl<'a> Callbacks<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_original(mut self, f: impl FnMut(usize, &[Point]) + 'a) -> Self {
        self.original = Some(Box::new(f));
        self
    }

    pub fn on_translate(mut self, f: impl FnMut(usize, &[Point]) + 'a) -> Self {
        self.translate = Some(Box::new(f));
        self
    }

    pub fn on_rotate(mut self, f: impl FnMut(usize, &[Point]) + 'a) -> Self {
        self.rotate = Some(Box::new(f));
        self
    }

    pub fn on_symmetry(mut self, f: impl FnMut(usize, Point, Point) + 'a) -> Self {
        self.symmetry = Some(Box::new(f));
        self
    }
}

impl Observer for Callbacks<'_> {
    fn on_original(&mut self, index: usize, points: &[Point]) {
        if let Some(f) = self.original.as_mut() {
            f(index, points);
        }
    }
    fn on_translate(&mut self, index: usize, points: &[Point]) {
        if let Some(f) = self.translate.as_mut() {
            f(index, points);
        }
    }
    fn on_rotate(&mut self, index: usize, points: &[Point]) {
        if let Some(f) = self.rotate.as_mut() {
            f(index, points);
        }
    }
    fn on_symmetry(&mut self, index: usize, from: Point, to: Point) {
        if let Some(f) = self.symmetry.as_mut() {
            f(index, from, to);
        }
    }
}

/// Stage of a recorded event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EventKind {
    Original,
    Translated,
    Rotated,
    SymmetryFound,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Original => "original",
            EventKind::Translated => "translated",
            EventKind::Rotated => "rotated",
            EventKind::SymmetryFound => "symmetry_found",
        }
    }
}

/// Owned snapshot of one hook invocation. For `SymmetryFound`, `points` is
/// `[from, to]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    pub kind: EventKind,
    pub index: usize,
    pub points: Vec<Point>,
}

/// Observer that records every hook as an `Event`.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    pub events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    fn push(&mut self, kind: EventKind, index: usize, points: Vec<Point>) {
        self.events.push(Event {
            kind,
            index,
            points,
        });
    }
}

impl Observer for EventLog {
    fn on_original(&mut self, index: usize, points: &[Point]) {
        self.push(EventKind::Original, index, points.to_vec());
    }
    fn on_translate(&mut self, index: usize, points: &[Point]) {
        self.push(EventKind::Translated, index, points.to_vec());
    }
    fn on_rotate(&mut self, index: usize, points: &[Point]) {
        self.push(EventKind::Rotated, index, points.to_vec());
    }
    fn on_symmetry(&mut self, index: usize, from: Point, to: Point) {
        self.push(EventKind::SymmetryFound, index, vec![from, to]);
    }
}
