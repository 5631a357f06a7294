//! Basic 2D types and the shared tolerance.
//!
//! - `Point`: plain `(x, y)` pair; equality is exact (used for membership and lookup).
//! - `EPS`: tolerance for every geometric comparison in this module.
//! - `DegenerateLineError`: a line was requested through two coincident points.
//!
//! Code cross-refs: `line::Line`, `polygon::polygon_contains`

use std::fmt;

use nalgebra::Vector2;

/// Planar point in screen coordinates (y grows downward).
pub type Point = Vector2<f64>;

/// Tolerance for geometric predicates (containment, verticality, near-zero slope).
///
/// Tuned for pixel-scale inputs; the sampler draws integer coordinates.
pub const EPS: f64 = 0.01;

/// Construct a point from coordinates.
#[inline]
pub fn pt(x: f64, y: f64) -> Point {
    Vector2::new(x, y)
}

/// A line through two coincident points has no direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DegenerateLineError {
    pub point: Point,
}

impl fmt::Display for DegenerateLineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "degenerate line: both points are ({}, {})",
            self.point.x, self.point.y
        )
    }
}

impl std::error::Error for DegenerateLineError {}
