use hullstep::engine::HullView;
use hullstep::geom2::Point;

/// Logs every hull notification as a structured `debug` event.
#[derive(Debug, Default)]
pub struct TracingView {
    pub inserted: usize,
}

impl HullView for TracingView {
    fn on_vertex_inserted(&mut self, index: usize, point: Point) {
        self.inserted += 1;
        tracing::debug!(index, x = point.x, y = point.y, "vertex_inserted");
    }

    fn on_hull_reset(&mut self) {
        self.inserted = 0;
        tracing::debug!("hull_reset");
    }

    fn on_points_changed(&mut self, points: &[Point]) {
        tracing::debug!(count = points.len(), "points_changed");
    }
}
