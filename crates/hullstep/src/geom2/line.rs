//! Slope/intercept lines with explicit vertical handling.
//!
//! Conventions
//! - A line remembers the two points it was built from (`p1`, `p2`); the hull
//!   engine uses them as the oriented edge endpoints.
//! - Vertical lines (|Δx| < EPS) carry only `x_intercept`, taken from `p2.x`.
//! - "Above" is screen-oriented: a point is above a non-vertical line when its y
//!   is smaller than the line's value at the same x.
//!
//! Known quirks kept on purpose
//! - The x-intercept of a non-vertical line is only stored when `gradient >= EPS`,
//!   so lines with negative slope have none. Nothing in the engine reads it for
//!   non-vertical lines.
//! - Coincident lines intersect "at" the origin.

use std::fmt;

use super::types::{pt, DegenerateLineError, Point, EPS};

/// Immutable planar line.
///
/// Invariants:
/// - vertical: `gradient == None`, `y_intercept == None`, `x_intercept == Some(p2.x)`;
/// - non-vertical: `gradient` and `y_intercept` set; `x_intercept` set iff `gradient >= EPS`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    gradient: Option<f64>,
    y_intercept: Option<f64>,
    x_intercept: Option<f64>,
    p1: Point,
    p2: Point,
}

impl Line {
    /// Line `y = gradient * x + y_intercept`, anchored at `x = 0` and `x = 1`.
    pub fn new(gradient: f64, y_intercept: f64) -> Self {
        Self {
            gradient: Some(gradient),
            y_intercept: Some(y_intercept),
            x_intercept: x_intercept_of(gradient, y_intercept),
            p1: pt(0.0, y_intercept),
            p2: pt(1.0, gradient + y_intercept),
        }
    }

    /// Line through `p1` and `p2` (oriented `p1 -> p2`).
    pub fn from_points(p1: Point, p2: Point) -> Result<Self, DegenerateLineError> {
        if p1 == p2 {
            return Err(DegenerateLineError { point: p1 });
        }
        let dx = p2.x - p1.x;
        if dx.abs() < EPS {
            return Ok(Self {
                gradient: None,
                y_intercept: None,
                x_intercept: Some(p2.x),
                p1,
                p2,
            });
        }
        let m = (p2.y - p1.y) / dx;
        let b = p1.y - m * p1.x;
        Ok(Self {
            gradient: Some(m),
            y_intercept: Some(b),
            x_intercept: x_intercept_of(m, b),
            p1,
            p2,
        })
    }

    /// Same points, opposite orientation.
    pub fn reversed(&self) -> Result<Self, DegenerateLineError> {
        Self::from_points(self.p2, self.p1)
    }

    #[inline]
    pub fn gradient(&self) -> Option<f64> {
        self.gradient
    }
    #[inline]
    pub fn y_intercept(&self) -> Option<f64> {
        self.y_intercept
    }
    #[inline]
    pub fn x_intercept(&self) -> Option<f64> {
        self.x_intercept
    }
    #[inline]
    pub fn p1(&self) -> Point {
        self.p1
    }
    #[inline]
    pub fn p2(&self) -> Point {
        self.p2
    }
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.gradient.is_none()
    }

    /// The line's y at `x`; `None` for vertical lines.
    #[inline]
    pub fn image_at(&self, x: f64) -> Option<f64> {
        let (m, b) = self.slope_form()?;
        Some(m * x + b)
    }

    /// Whether `p` lies on the line within `EPS` (vertical residual, or horizontal for vertical lines).
    pub fn contains(&self, p: Point) -> bool {
        match (self.slope_form(), self.x_intercept) {
            (Some((m, b)), _) => (p.y - (m * p.x + b)).abs() < EPS,
            (None, Some(x0)) => (p.x - x0).abs() < EPS,
            (None, None) => false,
        }
    }

    /// Perpendicular Euclidean distance from `p`.
    ///
    /// For vertical lines an offset below `EPS` snaps to exactly `0.0`.
    pub fn distance_to_point(&self, p: Point) -> f64 {
        match self.slope_form() {
            Some((m, b)) => (-m * p.x + p.y - b).abs() / (m * m + 1.0).sqrt(),
            None => {
                let dx = (self.vertical_x() - p.x).abs();
                if dx < EPS {
                    0.0
                } else {
                    dx
                }
            }
        }
    }

    /// Screen-oriented sidedness: vertical lines report points to their left,
    /// others report points with smaller y than the line.
    pub fn is_above(&self, p: Point) -> bool {
        match self.slope_form() {
            Some((m, b)) => m * p.x + b > p.y,
            None => self.vertical_x() > p.x,
        }
    }

    /// Intersection point with `other`.
    ///
    /// - `None` when both lines are vertical, or when they are parallel (equal gradients, distinct intercepts).
    /// - Coincident lines (gradients and intercepts EPS-equal) return the origin.
    pub fn intersection(&self, other: &Line) -> Option<Point> {
        match (self.slope_form(), other.slope_form()) {
            (None, None) => None,
            (None, Some((m, b))) => {
                let x = self.vertical_x();
                Some(pt(x, m * x + b))
            }
            (Some((m, b)), None) => {
                let x = other.vertical_x();
                Some(pt(x, m * x + b))
            }
            (Some((m1, b1)), Some((m2, b2))) => {
                if (b2 - b1).abs() < EPS && (m1 - m2).abs() < EPS {
                    return Some(pt(0.0, 0.0));
                }
                if m1 == m2 {
                    return None;
                }
                let x = (b2 - b1) / (m1 - m2);
                Some(pt(x, m1 * x + b1))
            }
        }
    }

    #[inline]
    fn slope_form(&self) -> Option<(f64, f64)> {
        Some((self.gradient?, self.y_intercept?))
    }

    /// x of a vertical line. Only called once `slope_form()` returned `None`.
    #[inline]
    fn vertical_x(&self) -> f64 {
        self.x_intercept.unwrap_or(self.p2.x)
    }
}

/// Literal one-sided guard: near-zero *and negative* slopes get no x-intercept.
#[inline]
fn x_intercept_of(m: f64, b: f64) -> Option<f64> {
    if m < EPS {
        None
    } else {
        Some(-b / m)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slope_form() {
            Some((m, b)) => write!(f, "y = {m}x + ({b})"),
            None => write!(f, "x = {}", self.vertical_x()),
        }
    }
}
