//! Point-in-polygon predicates over vertex sequences (closed, boundary-inclusive).

use super::types::{Point, EPS};

/// Whether `p` lies within `EPS` of the closed segment `ab`.
pub fn on_segment(a: Point, b: Point, p: Point) -> bool {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 == 0.0 {
        return (p - a).norm() < EPS;
    }
    let t = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
    (a + ab * t - p).norm() < EPS
}

/// Closed containment: boundary (within `EPS`) or interior by the even-odd rule.
///
/// Degenerate inputs: an empty slice contains nothing, one vertex contains
/// only its neighbourhood, two vertices contain their segment.
pub fn polygon_contains(vertices: &[Point], p: Point) -> bool {
    let n = vertices.len();
    match n {
        0 => return false,
        1 => return (vertices[0] - p).norm() < EPS,
        2 => return on_segment(vertices[0], vertices[1], p),
        _ => {}
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[j];
        if on_segment(a, b, p) {
            return true;
        }
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Closed containment in the triangle `abc`.
#[inline]
pub fn triangle_contains(a: Point, b: Point, c: Point, p: Point) -> bool {
    polygon_contains(&[a, b, c], p)
}

/// Whether `p` lies strictly inside (beyond `EPS` from the boundary).
pub fn polygon_strictly_contains(vertices: &[Point], p: Point) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    let on_boundary = (0..vertices.len())
        .any(|i| on_segment(vertices[i], vertices[(i + 1) % vertices.len()], p));
    !on_boundary && polygon_contains(vertices, p)
}
