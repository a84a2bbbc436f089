use crate::point::Point;

/// Insert the midpoint after every vertex, closing with the wrap-around edge.
///
/// Output has length `2n` and `out[2i] == points[i]`.
pub fn double_points(points: &[Point]) -> Vec<Point> {
    let mut out = Vec::with_capacity(points.len() * 2);
    for (k, &p) in points.iter().enumerate() {
        let next = points[(k + 1) % points.len()];
        out.push(p);
        out.push(p.midpoint(next));
    }
    out
}
