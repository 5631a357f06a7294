//! Stepwise convex hulls.
//!
//! QuickHull with its recursion reified as an explicit work stack, so the hull
//! of a planar point set can be built one visible vertex at a time.
//!
//! Layout
//! - `geom2`: lines, sidedness, distances, closed point-in-polygon tests.
//! - `engine`: the stepwise engine, its views and a cadence-free driver.
//! - `sample`: reproducible point sets inside a drawing area.

pub mod engine;
pub mod geom2;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::engine::{
        Driver, EngineError, EventLog, HullEngine, HullEvent, HullView, NullView, Phase,
        StepResult, TickOutcome, WorkItem,
    };
    pub use crate::geom2::{pt, DegenerateLineError, Line, Point, EPS};
    pub use crate::sample::{draw_points, ReplayToken, SampleCfg, SampleError};
}
