//! Stepwise QuickHull engine.
//!
//! Purpose
//! - Build the convex hull of a planar point set one visible vertex at a time,
//!   so a caller can single-step, run on a timer, pause, reset and replay.
//!
//! Model
//! - The QuickHull recursion is an explicit LIFO stack of `WorkItem`s (edge plus
//!   the candidate points beyond it). `step()` pops exactly one item.
//! - The hull is a cyclic vertex sequence that only grows, by insertion in front
//!   of the edge's second endpoint.
//! - Mutations are reported to a `HullView`; `Driver` decides the cadence.
//!
//! Code cross-refs: `geom2::{Line, polygon_contains, triangle_contains}`

mod driver;
mod stepper;
mod types;
mod view;

pub use driver::{Driver, TickOutcome};
pub use stepper::HullEngine;
pub use types::{EngineError, EngineState, Phase, StepResult, WorkItem};
pub use view::{replay_events, EventLog, HullEvent, HullView, NullView};
