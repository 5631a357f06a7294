//! Notification sinks for hull mutations.

use crate::geom2::Point;

/// Passive observer of the engine. Every callback defaults to a no-op.
pub trait HullView {
    fn on_vertex_inserted(&mut self, _index: usize, _point: Point) {}
    fn on_hull_reset(&mut self) {}
    fn on_points_changed(&mut self, _points: &[Point]) {}
}

/// View that ignores all notifications.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullView;

impl HullView for NullView {}

impl<V: HullView + ?Sized> HullView for &mut V {
    fn on_vertex_inserted(&mut self, index: usize, point: Point) {
        (**self).on_vertex_inserted(index, point)
    }
    fn on_hull_reset(&mut self) {
        (**self).on_hull_reset()
    }
    fn on_points_changed(&mut self, points: &[Point]) {
        (**self).on_points_changed(points)
    }
}

/// Recorded notification.
#[derive(Clone, Debug, PartialEq)]
pub enum HullEvent {
    VertexInserted { index: usize, point: Point },
    HullReset,
    PointsChanged { count: usize },
}

/// View that records every notification in order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    pub events: Vec<HullEvent>,
}

impl EventLog {
    /// Take the recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<HullEvent> {
        std::mem::take(&mut self.events)
    }
}

impl HullView for EventLog {
    fn on_vertex_inserted(&mut self, index: usize, point: Point) {
        self.events.push(HullEvent::VertexInserted { index, point });
    }
    fn on_hull_reset(&mut self) {
        self.events.push(HullEvent::HullReset);
    }
    fn on_points_changed(&mut self, points: &[Point]) {
        self.events.push(HullEvent::PointsChanged {
            count: points.len(),
        });
    }
}

/// Rebuild the hull a view would display from a sequence of events.
///
/// Returns `None` if an insertion index is out of range.
pub fn replay_events<'a, I>(events: I) -> Option<Vec<Point>>
where
    I: IntoIterator<Item = &'a HullEvent>,
{
    let mut hull = Vec::new();
    for ev in events {
        match *ev {
            HullEvent::VertexInserted { index, point } => {
                if index > hull.len() {
                    return None;
                }
                hull.insert(index, point);
            }
            HullEvent::HullReset => hull.clear(),
            HullEvent::PointsChanged { .. } => {}
        }
    }
    Some(hull)
}
