//! Work-stack QuickHull: one bounded unit of work per `step()`.

use crate::geom2::{polygon_contains, triangle_contains, Line, Point};

use super::types::{EngineError, EngineState, Phase, StepResult, WorkItem};
use super::view::{HullView, NullView};

/// Stepwise QuickHull over a fixed point set.
///
/// The recursion of QuickHull lives in `state.pending` (LIFO), so the hull can be
/// advanced one vertex at a time, paused, and reset.
#[derive(Debug)]
pub struct HullEngine<V: HullView = NullView> {
    state: EngineState,
    view: V,
}

impl HullEngine<NullView> {
    pub fn new(points: Vec<Point>) -> Self {
        Self::with_view(points, NullView)
    }
}

impl<V: HullView> HullEngine<V> {
    pub fn with_view(points: Vec<Point>, view: V) -> Self {
        Self {
            state: EngineState::new(points),
            view,
        }
    }

    #[inline]
    pub fn input_points(&self) -> &[Point] {
        &self.state.input_points
    }
    #[inline]
    pub fn hull(&self) -> &[Point] {
        &self.state.hull
    }
    #[inline]
    pub fn pending(&self) -> &[WorkItem] {
        &self.state.pending
    }
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.state.initialized
    }
    #[inline]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }
    #[inline]
    pub fn view(&self) -> &V {
        &self.view
    }
    #[inline]
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
    pub fn into_view(self) -> V {
        self.view
    }

    /// Seed the hull with the x-extremes and queue both sides of the base edge.
    ///
    /// Panics if already initialized (call `reset` first).
    pub fn initialize(&mut self) -> Result<(), EngineError> {
        assert!(
            !self.state.initialized,
            "initialize() called twice without reset()"
        );
        let points = &self.state.input_points;
        if points.len() < 2 {
            return Err(EngineError::TooFewPoints {
                count: points.len(),
            });
        }
        let (left, right) = x_extremes(points);
        let base = Line::from_points(left, right)?;
        let back = base.reversed()?;

        let mut above = Vec::new();
        let mut below = Vec::new();
        for &p in points {
            if p == left || p == right {
                continue;
            }
            if base.is_above(p) {
                above.push(p);
            } else {
                below.push(p);
            }
        }

        self.insert_vertex(0, left);
        self.insert_vertex(1, right);
        // LIFO: the forward edge (below side) is expanded first.
        self.state.pending.push(WorkItem {
            edge: back,
            candidates: above,
        });
        self.state.pending.push(WorkItem {
            edge: base,
            candidates: below,
        });
        self.state.initialized = true;
        Ok(())
    }

    /// Process the top work item.
    ///
    /// Either commits one vertex insertion with its stack updates, or only pops
    /// the item (`NoOp`). On error nothing is mutated. Panics before `initialize`.
    pub fn step(&mut self) -> Result<StepResult, EngineError> {
        assert!(self.state.initialized, "step() called before initialize()");
        let Some(item) = self.state.pending.last() else {
            return Ok(StepResult::Finished);
        };
        let expansion = expand(&self.state.hull, item)?;
        self.state.pending.pop();
        let Some(exp) = expansion else {
            return Ok(StepResult::NoOp);
        };

        let index = self
            .state
            .hull
            .iter()
            .position(|&v| v == exp.before)
            .expect("work item edges end at hull vertices");
        self.insert_vertex(index, exp.vertex);
        for child in [exp.second, exp.first] {
            if !child.candidates.is_empty() {
                self.state.pending.push(child);
            }
        }
        Ok(StepResult::Advanced {
            hull_len: self.state.hull.len(),
        })
    }

    /// Back to `Uninitialized` with a new point set.
    pub fn reset(&mut self, points: Vec<Point>) {
        self.state = EngineState::new(points);
        self.view.on_hull_reset();
        self.view.on_points_changed(&self.state.input_points);
    }

    fn insert_vertex(&mut self, index: usize, p: Point) {
        self.state.hull.insert(index, p);
        self.view.on_vertex_inserted(index, p);
    }
}

/// First point with minimal x and first point with maximal x (strict comparisons).
fn x_extremes(points: &[Point]) -> (Point, Point) {
    let mut left = points[0];
    let mut right = points[0];
    for &p in &points[1..] {
        if p.x < left.x {
            left = p;
        }
        if p.x > right.x {
            right = p;
        }
    }
    (left, right)
}

/// Planned vertex insertion computed without touching engine state.
struct Expansion {
    vertex: Point,
    /// Hull vertex the new one is inserted in front of.
    before: Point,
    first: WorkItem,
    second: WorkItem,
}

/// Prune, pick the farthest candidate, and split the rest across the two new edges.
fn expand(hull: &[Point], item: &WorkItem) -> Result<Option<Expansion>, EngineError> {
    let edge = &item.edge;
    let survivors: Vec<Point> = item
        .candidates
        .iter()
        .copied()
        .filter(|&p| !polygon_contains(hull, p))
        .collect();

    let mut farthest: Option<Point> = None;
    let mut best = -1.0;
    for &p in &survivors {
        let d = edge.distance_to_point(p);
        if d > best {
            best = d;
            farthest = Some(p);
        }
    }
    let Some(f) = farthest else {
        return Ok(None);
    };

    let (a, b) = (edge.p1(), edge.p2());
    let first_edge = Line::from_points(a, f)?;
    let second_edge = Line::from_points(f, b)?;
    let f_above = edge.is_above(f);
    let first_outer = outer_side(&first_edge, b, f_above);
    let second_outer = outer_side(&second_edge, a, f_above);

    let mut first = Vec::new();
    let mut second = Vec::new();
    for &p in &survivors {
        if p == f || triangle_contains(a, f, b, p) {
            continue;
        }
        if first_edge.is_above(p) == first_outer {
            first.push(p);
        }
        if second_edge.is_above(p) == second_outer {
            second.push(p);
        }
    }

    Ok(Some(Expansion {
        vertex: f,
        before: b,
        first: WorkItem {
            edge: first_edge,
            candidates: first,
        },
        second: WorkItem {
            edge: second_edge,
            candidates: second,
        },
    }))
}

/// `is_above` value marking the outer side of a sub-edge: the side away from the
/// triangle's third vertex. A third vertex on the sub-edge falls back to the
/// side the new vertex was found on.
#[inline]
fn outer_side(sub_edge: &Line, opposite: Point, vertex_above: bool) -> bool {
    if sub_edge.contains(opposite) {
        vertex_above
    } else {
        !sub_edge.is_above(opposite)
    }
}
