pub mod common;
pub mod config;
pub mod error;
pub mod markers;
pub mod sink;
pub mod transform;

pub use crate::common::types::{Color, Point, PoseMatrix};
pub use crate::config::{AxesOptions, ClearOptions, GraspOptions, MarkerOptions, PointsOptions};
pub use crate::error::{Result, VizError};
pub use crate::markers::{Marker, MarkerAction, MarkerKind};
pub use crate::sink::{MarkerSink, RecordingSink};
pub use crate::transform::{BoxExtent, Pose};

use nalgebra::DMatrix;

/// Draws markers into a sink
///
/// Every draw call builds its markers first and only sends them once the
/// whole set was built, so an invalid input never leaves a partial shape
/// behind. Each call returns the ids it sent.
pub struct DrawFunctions<S: MarkerSink> {
    sink: S,
}

impl<S: MarkerSink> DrawFunctions<S> {
    /// Create a new drawing helper around `sink`
    pub fn new(sink: S) -> Self {
        DrawFunctions { sink }
    }

    /// Get a reference to the sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Get a mutable reference to the sink
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the helper and hand back its sink
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn send_all<I: IntoIterator<Item = Marker>>(&mut self, markers: I) -> Vec<i32> {
        markers
            .into_iter()
            .map(|marker| {
                tracing::debug!(
                    ns = %marker.ns,
                    id = marker.id,
                    kind = ?marker.kind,
                    action = ?marker.action,
                    "Sending marker"
                );
                let id = marker.id;
                self.sink.send(marker);
                id
            })
            .collect()
    }

    /// Draw a set of points as one points marker
    pub fn draw_points(&mut self, points: &[Point], options: &PointsOptions) -> Result<Vec<i32>> {
        let marker = markers::build_points_marker(points, options)?;
        let ids = self.send_all([marker]);
        tracing::info!("Published {} points", points.len());
        Ok(ids)
    }

    /// Draw the columns of a 3xN or 4xN matrix as points
    pub fn draw_points_matrix(&mut self, points: &DMatrix<f64>, options: &PointsOptions) -> Result<Vec<i32>> {
        let points = transform::points_from_matrix(points)?;
        self.draw_points(&points, options)
    }

    /// Draw the x, y and z axes of `pose` as red, green and blue arrows
    pub fn draw_axes(&mut self, pose: &PoseMatrix, options: &AxesOptions) -> Result<Vec<i32>> {
        let markers = markers::build_axes_markers(pose, options)?;
        let ids = self.send_all(markers);
        tracing::info!(ns = %options.ns, "Published axes {:?}", ids);
        Ok(ids)
    }

    /// Draw a sphere of radius `radius` at `pose`
    pub fn draw_sphere(&mut self, pose: &PoseMatrix, radius: f64, options: &MarkerOptions) -> Result<Vec<i32>> {
        let marker = markers::build_sphere_marker(pose, radius, options)?;
        let ids = self.send_all([marker]);
        tracing::info!(ns = %options.ns, id = options.id, "Published sphere of radius {}", radius);
        Ok(ids)
    }

    /// Draw a box at `pose`
    pub fn draw_box(&mut self, pose: &PoseMatrix, extent: &BoxExtent, options: &MarkerOptions) -> Result<Vec<i32>> {
        let marker = markers::build_box_marker(pose, extent, options)?;
        let ids = self.send_all([marker]);
        tracing::info!(ns = %options.ns, id = options.id, "Published box {:?}", extent.dims());
        Ok(ids)
    }

    /// Draw a cylinder at `pose`; the pose's z axis is the cylinder axis
    pub fn draw_cylinder(
        &mut self,
        pose: &PoseMatrix,
        radius: f64,
        length: f64,
        options: &MarkerOptions,
    ) -> Result<Vec<i32>> {
        let marker = markers::build_cylinder_marker(pose, radius, length, options)?;
        let ids = self.send_all([marker]);
        tracing::info!(
            ns = %options.ns,
            id = options.id,
            "Published cylinder radius={} length={}",
            radius,
            length
        );
        Ok(ids)
    }

    /// Draw grasps as x, y and z arrows, the first one larger
    pub fn draw_grasps(&mut self, grasps: &[Pose], options: &GraspOptions) -> Result<Vec<i32>> {
        let markers = markers::build_grasp_markers(grasps, options)?;
        let ids = self.send_all(markers);
        tracing::info!(ns = %options.ns, "Published {} grasps", grasps.len());
        Ok(ids)
    }

    /// Remove a points marker
    pub fn clear_points(&mut self, frame: &str, ns: &str, id: i32) -> Vec<i32> {
        self.send_all([markers::clear_points(frame, ns, id)])
    }

    /// Remove every grasp arrow with an id below `options.num`
    pub fn clear_grasps(&mut self, options: &ClearOptions) -> Result<Vec<i32>> {
        let markers = markers::clear_grasps(options)?;
        let ids = self.send_all(markers);
        tracing::info!(ns = %options.ns, "Cleared {} grasp ids", ids.len());
        Ok(ids)
    }

    /// Remove exactly the markers `ids` previously returned by a draw call
    pub fn clear_ids(&mut self, kind: MarkerKind, frame: &str, ns: &str, ids: &[i32]) -> Vec<i32> {
        self.send_all(markers::clear_ids(kind, frame, ns, ids))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_build_sends_nothing() {
        let mut draw = DrawFunctions::new(RecordingSink::new());
        let options = MarkerOptions::spheres().with_opacity(2.0);
        assert!(draw.draw_sphere(&PoseMatrix::identity(), 0.1, &options).is_err());
        assert!(draw.sink().is_empty());
    }

    #[test]
    fn into_sink_keeps_sent_markers() {
        let mut draw = DrawFunctions::new(RecordingSink::new());
        draw.clear_points("katana_base_link", "points", 0);
        let sink = draw.into_sink();
        assert_eq!(sink.len(), 1);
        assert!(sink.markers()[0].is_delete());
    }

    #[test]
    fn draw_returns_sent_ids() {
        let mut draw = DrawFunctions::new(RecordingSink::new());
        let ids = draw
            .draw_axes(&PoseMatrix::identity(), &AxesOptions::default().with_id(3))
            .unwrap();
        assert_eq!(ids, vec![3, 4, 5]);
        assert_eq!(draw.sink().len(), 3);
    }
}
