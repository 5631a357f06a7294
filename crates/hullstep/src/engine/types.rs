//! Data types for the stepwise engine: work items, step results, errors.
//!
//! Kept small and explicit to make `step` and `driver` easy to read.

use std::fmt;

use crate::geom2::{DegenerateLineError, Line, Point};

/// One pending QuickHull sub-problem: an outward-facing edge and the points beyond it.
///
/// `edge.p1()` and `edge.p2()` are the hull vertices bounding the region.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkItem {
    pub edge: Line,
    pub candidates: Vec<Point>,
}

/// Outcome of a single `step()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// One vertex was inserted; the hull now has `hull_len` vertices.
    Advanced { hull_len: usize },
    /// A work item was consumed without finding a vertex.
    NoOp,
    /// The pending stack is empty.
    Finished,
}

/// Lifecycle phase derived from the engine state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Active,
    Done,
}

/// Engine state. Owned by `HullEngine`; others only get shared references.
#[derive(Clone, Debug, Default)]
pub struct EngineState {
    pub input_points: Vec<Point>,
    pub hull: Vec<Point>,
    pub pending: Vec<WorkItem>,
    pub initialized: bool,
}

impl EngineState {
    pub fn new(input_points: Vec<Point>) -> Self {
        Self {
            input_points,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> Phase {
        match (self.initialized, self.pending.is_empty()) {
            (false, _) => Phase::Uninitialized,
            (true, false) => Phase::Active,
            (true, true) => Phase::Done,
        }
    }
}

/// Recoverable engine errors. Precondition violations panic instead.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineError {
    TooFewPoints { count: usize },
    DegenerateLine(DegenerateLineError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewPoints { count } => {
                write!(f, "need at least two points to start a hull, got {count}")
            }
            Self::DegenerateLine(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DegenerateLine(e) => Some(e),
            Self::TooFewPoints { .. } => None,
        }
    }
}

impl From<DegenerateLineError> for EngineError {
    fn from(e: DegenerateLineError) -> Self {
        Self::DegenerateLine(e)
    }
}
