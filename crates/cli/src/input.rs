//! Polygon sources: presets by name or JSON files.
//!
//! Accepted file shape: a JSON array whose items are either `[x, y]` pairs or
//! `{"x": .., "y": ..}` objects (mixing is allowed).

use anyhow::{bail, Context, Result};
use polysym::api::{Point, Preset};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPoint {
    Pair([f64; 2]),
    Object(Point),
}

impl From<RawPoint> for Point {
    fn from(raw: RawPoint) -> Self {
        match raw {
            RawPoint::Pair([x, y]) => Point::new(x, y),
            RawPoint::Object(p) => p,
        }
    }
}

pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    let raw: Vec<RawPoint> =
        serde_json::from_str(text).context("expected a JSON array of [x, y] or {x, y} points")?;
    Ok(raw.into_iter().map(Point::from).collect())
}

pub fn load_points(path: &Path) -> Result<Vec<Point>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_points(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Resolve exactly one of `--shape` / `--input`; returns a label and the points.
pub fn resolve(shape: Option<&str>, input: Option<&Path>) -> Result<(String, Vec<Point>)> {
    match (shape, input) {
        (Some(name), None) => {
            let preset: Preset = name.parse()?;
            Ok((preset.name().to_string(), preset.points()))
        }
        (None, Some(path)) => Ok((path.display().to_string(), load_points(path)?)),
        (Some(_), Some(_)) => bail!("pass either --shape or --input, not both"),
        (None, None) => bail!("one of --shape or --input is required"),
    }
}
