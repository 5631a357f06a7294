//! Planar geometry for the stepwise hull.
//!
//! Purpose
//! - `Line`: slope/intercept line through two points with screen-oriented
//!   sidedness, perpendicular distance, containment and intersection.
//! - Closed point-in-polygon tests used to prune candidates against the live hull.
//!
//! All predicates share one tolerance, `EPS`.
//!
//! Code cross-refs: `engine::HullEngine` (sole stateful consumer)

pub mod line;
pub mod polygon;
mod types;

pub use line::Line;
pub use polygon::{on_segment, polygon_contains, polygon_strictly_contains, triangle_contains};
pub use types::{pt, DegenerateLineError, Point, EPS};
