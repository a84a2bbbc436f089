use polysym::api::{Axis, Point, SymmetryError};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub type PyPoint = (f64, f64);
pub type PyAxis = (usize, PyPoint, PyPoint);

#[inline]
pub fn to_points(raw: Vec<PyPoint>) -> Vec<Point> {
    raw.into_iter().map(Point::from).collect()
}

#[inline]
pub fn to_py_point(p: Point) -> PyPoint {
    (p.x, p.y)
}

pub fn to_py_axis(a: &Axis) -> PyAxis {
    (a.index, to_py_point(a.from), to_py_point(a.to))
}

pub fn map_symmetry_err(err: SymmetryError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
