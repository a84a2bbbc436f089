//! Preset and generated polygons.
//!
//! - `Preset`: the fixed demo shapes (coordinates in screen units).
//! - `regular_polygon`: vertices on a circle, counterclockwise.
//! - `rand`: seeded random samplers for tests and benches.

pub mod rand;

use crate::point::Point;
use crate::symmetry::SymmetryError;
use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

/// Named demo polygons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    Square,
    Rectangle,
    Triangle,
    Pentagon,
    Hexagon,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Square,
        Preset::Rectangle,
        Preset::Triangle,
        Preset::Pentagon,
        Preset::Hexagon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Square => "Square",
            Preset::Rectangle => "Rectangle",
            Preset::Triangle => "Triangle",
            Preset::Pentagon => "Pentagon",
            Preset::Hexagon => "Hexagon",
        }
    }

    pub fn points(self) -> Vec<Point> {
        let raw: &[(f64, f64)] = match self {
            Preset::Square => &[(0.0, 0.0), (0.0, 100.0), (100.0, 100.0), (100.0, 0.0)],
            Preset::Rectangle => &[(0.0, 0.0), (0.0, 150.0), (100.0, 150.0), (100.0, 0.0)],
            Preset::Triangle => {
                return vec![
                    Point::new(0.0, 0.0),
                    Point::new(100.0, 100.0 * 3f64.sqrt()),
                    Point::new(200.0, 0.0),
                ]
            }
            Preset::Pentagon => &[
                (-124.0, -69.0),
                (-132.0, -245.0),
                (-304.5, -290.0),
                (-400.0, -141.5),
                (-288.0, -5.0),
            ],
            Preset::Hexagon => &[
                (-101.5, -127.0),
                (-156.0, -267.0),
                (-304.5, -290.0),
                (-398.5, -173.0),
                (-344.0, -33.0),
                (-196.0, -10.0),
            ],
        };
        raw.iter().copied().map(Point::from).collect()
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = SymmetryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SymmetryError::InvalidInput {
                reason: format!("unknown shape '{s}'"),
            })
    }
}

/// `n` vertices on the circle of `radius` around `center`, starting at
/// `phase_degrees`, counterclockwise. Returns an empty vec for `n == 0`.
pub fn regular_polygon(n: usize, radius: f64, center: Point, phase_degrees: f64) -> Vec<Point> {
    let phase = phase_degrees.to_radians();
    let delta = TAU / n.max(1) as f64;
    (0..n)
        .map(|k| {
            let th = phase + k as f64 * delta;
            Point::new(center.x + radius * th.cos(), center.y + radius * th.sin())
        })
        .collect()
}
