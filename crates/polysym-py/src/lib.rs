//! PyO3 bindings for `polysym`.
//!
//! Notes
//! - Keep bindings thin: points cross the boundary as `(x, y)` tuples, axes
//!   as `(index, from, to)`, events as `(kind, index, points)`.
//! - Rendering stays on the Python side; `trace` hands over the full event
//!   list so a UI can replay it on its own draw cadence.

mod common;

use common::{map_symmetry_err, to_points, to_py_axis, to_py_point, PyAxis, PyPoint};
use polysym::api::{double_points as double_points_rs, Preset, Symmetry, SymmetryCfg};
use pyo3::prelude::*;

type PyEvent = (&'static str, usize, Vec<PyPoint>);

fn detector(points: Vec<PyPoint>, tolerance: f64) -> PyResult<Symmetry> {
    let cfg = SymmetryCfg {
        tolerance,
        ..SymmetryCfg::default()
    };
    Symmetry::with_cfg(to_points(points), cfg).map_err(map_symmetry_err)
}

/// Axes of reflective symmetry as `(index, (x, y), (x, y))`.
#[pyfunction]
#[pyo3(signature = (points, tolerance = 5.0))]
fn lines_of_symmetry(points: Vec<PyPoint>, tolerance: f64) -> PyResult<Vec<PyAxis>> {
    let det = detector(points, tolerance)?;
    Ok(det.detect().iter().map(to_py_axis).collect())
}

/// Axes plus every intermediate stage, in emission order.
#[pyfunction]
#[pyo3(signature = (points, tolerance = 5.0))]
fn trace(points: Vec<PyPoint>, tolerance: f64) -> PyResult<(Vec<PyAxis>, Vec<PyEvent>)> {
    let det = detector(points, tolerance)?;
    let (axes, events) = det.trace();
    let events = events
        .into_iter()
        .map(|e| {
            let pts = e.points.into_iter().map(to_py_point).collect();
            (e.kind.as_str(), e.index, pts)
        })
        .collect();
    Ok((axes.iter().map(to_py_axis).collect(), events))
}

/// Vertices interleaved with edge midpoints.
#[pyfunction]
fn double_points(points: Vec<PyPoint>) -> Vec<PyPoint> {
    double_points_rs(&to_points(points))
        .into_iter()
        .map(to_py_point)
        .collect()
}

/// Vertices of a named preset shape.
#[pyfunction]
fn preset(name: &str) -> PyResult<Vec<PyPoint>> {
    let p: Preset = name.parse().map_err(common::map_symmetry_err)?;
    Ok(p.points().into_iter().map(to_py_point).collect())
}

#[pymodule]
fn polysym_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(lines_of_symmetry, m)?)?;
    m.add_function(wrap_pyfunction!(trace, m)?)?;
    m.add_function(wrap_pyfunction!(double_points, m)?)?;
    m.add_function(wrap_pyfunction!(preset, m)?)?;
    m.add("VERSION", polysym::VERSION)?;
    Ok(())
}
