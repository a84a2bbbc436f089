//! Random star-shaped polygons (radial jitter + replay tokens).
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, keep the angular order. The result is simple and
//!   star-shaped around `center`, but generally not convex.
//! - `draw_mirrored_polygon` builds one half and reflects it across the
//!   x-axis, so vertex 0 and vertex `n/2` span a guaranteed axis.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use crate::point::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`,
    /// with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    pub center: Point,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 100.0,
            center: Point::new(0.0, 0.0),
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

#[inline]
fn jittered_radius<R: Rng>(rng: &mut R, r0: f64, rj: f64) -> f64 {
    let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
    (1.0 + u).max(1e-6) * r0
}

#[inline]
fn polar(center: Point, th: f64, r: f64) -> Point {
    Point::new(center.x + th.cos() * r, center.y + th.sin() * r)
}

/// Draw a random star-shaped polygon, vertices in counterclockwise order.
pub fn draw_polygon_radial(cfg: RadialCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = 2.0 * PI / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * 2.0 * PI
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let base = phase + (k as f64) * delta;
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            base + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    angles
        .into_iter()
        .map(|th| polar(cfg.center, th, jittered_radius(&mut rng, r0, rj)))
        .collect()
}

/// Draw a polygon mirror-symmetric about the horizontal line through
/// `cfg.center`.
///
/// Layout: vertex 0 at angle 0, `k` jittered vertices in (0, π), a vertex at
/// π, then the reflections of the `k` upper vertices. Always `2k + 2 >= 4`
/// vertices; `cfg.vertex_count` is rounded up to even. `random_phase` is
/// ignored (the axis stays horizontal).
pub fn draw_mirrored_polygon(cfg: RadialCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng).max(4);
    let k = n.div_ceil(2) - 1;
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = PI / ((k + 1) as f64);

    let r_first = jittered_radius(&mut rng, r0, rj);
    let upper: Vec<(f64, f64)> = (1..=k)
        .map(|j| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = (j as f64) * delta + jitter;
            (th, jittered_radius(&mut rng, r0, rj))
        })
        .collect();
    let r_last = jittered_radius(&mut rng, r0, rj);

    let mut pts = Vec::with_capacity(2 * k + 2);
    pts.push(polar(cfg.center, 0.0, r_first));
    pts.extend(upper.iter().map(|&(th, r)| polar(cfg.center, th, r)));
    pts.push(polar(cfg.center, PI, r_last));
    pts.extend(upper.iter().rev().map(|&(th, r)| {
        let p = polar(cfg.center, th, r);
        // exact reflection, not a recomputed angle
        Point::new(p.x, 2.0 * cfg.center.y - p.y)
    }));
    pts
}
