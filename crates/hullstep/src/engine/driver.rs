//! Cadence-free driver: manual steps, timer ticks, run/pause state.
//!
//! The driver owns no clock. Callers decide when to call `tick()` (e.g. from a
//! timer) or `next_step()` (e.g. from a button).

use crate::geom2::Point;

use super::stepper::HullEngine;
use super::types::{EngineError, StepResult};
use super::view::HullView;

/// What one driver action achieved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The engine was initialized; the hull holds the two x-extremes.
    Initialized { hull_len: usize },
    /// The hull gained a vertex.
    Grew { hull_len: usize },
    /// A single raw step consumed a work item without growing the hull.
    Consumed,
    /// Nothing left to do.
    Finished,
    /// `tick()` while paused.
    Paused,
}

/// Drives a `HullEngine` one visible step at a time.
#[derive(Debug)]
pub struct Driver<V: HullView> {
    engine: HullEngine<V>,
    running: bool,
    ticks: u64,
}

impl<V: HullView> Driver<V> {
    pub fn new(engine: HullEngine<V>) -> Self {
        Self {
            engine,
            running: false,
            ticks: 0,
        }
    }

    #[inline]
    pub fn engine(&self) -> &HullEngine<V> {
        &self.engine
    }
    #[inline]
    pub fn view_mut(&mut self) -> &mut V {
        self.engine.view_mut()
    }
    pub fn into_engine(self) -> HullEngine<V> {
        self.engine
    }
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }
    /// Number of driver actions that did work since the last reset.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Manual step: initialize on first use, otherwise step until the hull grows
    /// or the stack drains.
    pub fn next_step(&mut self) -> Result<TickOutcome, EngineError> {
        if !self.engine.is_initialized() {
            self.engine.initialize()?;
            self.ticks += 1;
            return Ok(TickOutcome::Initialized {
                hull_len: self.engine.hull().len(),
            });
        }
        loop {
            match self.engine.step()? {
                StepResult::Advanced { hull_len } => {
                    self.ticks += 1;
                    return Ok(TickOutcome::Grew { hull_len });
                }
                StepResult::NoOp => continue,
                StepResult::Finished => return Ok(TickOutcome::Finished),
            }
        }
    }

    /// Timer tick: like `next_step`, but only while running. Stops on `Finished`.
    pub fn tick(&mut self) -> Result<TickOutcome, EngineError> {
        if !self.running {
            return Ok(TickOutcome::Paused);
        }
        let outcome = self.next_step()?;
        if outcome == TickOutcome::Finished {
            self.running = false;
        }
        Ok(outcome)
    }

    /// One raw `step()`, initializing first if needed. Exposes `NoOp` steps as `Consumed`.
    pub fn step_once(&mut self) -> Result<TickOutcome, EngineError> {
        if !self.engine.is_initialized() {
            return self.next_step();
        }
        let outcome = match self.engine.step()? {
            StepResult::Advanced { hull_len } => TickOutcome::Grew { hull_len },
            StepResult::NoOp => TickOutcome::Consumed,
            StepResult::Finished => return Ok(TickOutcome::Finished),
        };
        self.ticks += 1;
        Ok(outcome)
    }

    /// Start timed running, initializing the engine if needed.
    pub fn start(&mut self) -> Result<(), EngineError> {
        if !self.engine.is_initialized() {
            self.engine.initialize()?;
            self.ticks += 1;
        }
        self.running = true;
        Ok(())
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Tick until finished. Returns how many ticks grew the hull.
    pub fn run_to_end(&mut self) -> Result<u64, EngineError> {
        self.start()?;
        let before = self.ticks;
        while self.tick()? != TickOutcome::Finished {}
        Ok(self.ticks - before)
    }

    /// Replace the point set and start over.
    pub fn regenerate(&mut self, points: Vec<Point>) {
        self.restart(points);
    }

    /// Append points to the current set and start over.
    pub fn add_points(&mut self, extra: impl IntoIterator<Item = Point>) {
        let mut points = self.engine.input_points().to_vec();
        points.extend(extra);
        self.restart(points);
    }

    /// Drop all points and start over.
    pub fn clear(&mut self) {
        self.restart(Vec::new());
    }

    fn restart(&mut self, points: Vec<Point>) {
        self.running = false;
        self.ticks = 0;
        self.engine.reset(points);
    }
}
