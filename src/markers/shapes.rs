//! Single-shape markers

use super::{build_marker, Marker, MarkerKind};
use crate::common::types::{Point, PoseMatrix};
use crate::config::{positive, MarkerOptions, PointsOptions};
use crate::error::{Result, VizError};
use crate::transform::{self, BoxExtent};
use nalgebra::UnitQuaternion;

/// Sphere of `radius` centered on the pose origin
pub fn build_sphere_marker(pose: &PoseMatrix, radius: f64, options: &MarkerOptions) -> Result<Marker> {
    positive("sphere radius", radius)?;
    let (position, orientation) = transform::decompose(pose);
    let diameter = radius * 2.0;
    build_marker(
        MarkerKind::Sphere,
        &[diameter, diameter, diameter],
        options,
        position,
        orientation,
    )
}

/// Box described in the pose's frame.
///
/// The box center is moved into the parent frame by `pose`, so a corner
/// extent that does not straddle the origin is drawn offset accordingly.
pub fn build_box_marker(pose: &PoseMatrix, extent: &BoxExtent, options: &MarkerOptions) -> Result<Marker> {
    let center = transform::transform_point(pose, &extent.center());
    let orientation = transform::quaternion_from_rotation(&transform::rotation_block(pose));
    let dims = extent.dims();
    if dims.iter().any(|d| !d.is_finite() || *d < 0.0) {
        return Err(VizError::invalid(format!(
            "box dimensions must be finite and non-negative, got [{}, {}, {}]",
            dims.x, dims.y, dims.z
        )));
    }
    build_marker(
        MarkerKind::Cube,
        &[dims.x, dims.y, dims.z],
        options,
        center,
        orientation,
    )
}

/// Cylinder along the pose's z axis
pub fn build_cylinder_marker(
    pose: &PoseMatrix,
    radius: f64,
    length: f64,
    options: &MarkerOptions,
) -> Result<Marker> {
    positive("cylinder radius", radius)?;
    positive("cylinder length", length)?;
    let (position, orientation) = transform::decompose(pose);
    let diameter = radius * 2.0;
    build_marker(
        MarkerKind::Cylinder,
        &[diameter, diameter, length],
        options,
        position,
        orientation,
    )
}

/// One points marker holding `points` in order
pub fn build_points_marker(points: &[Point], options: &PointsOptions) -> Result<Marker> {
    options.validate()?;
    let size = options.size;
    let mut marker = build_marker(
        MarkerKind::Points,
        &[size, size, size],
        &options.marker,
        Point::origin(),
        UnitQuaternion::identity(),
    )?;
    marker.points = points.to_vec();
    Ok(marker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;
    use std::f64::consts::FRAC_PI_2;

    fn translated(x: f64, y: f64, z: f64) -> PoseMatrix {
        transform::compose(&Point::new(x, y, z), &UnitQuaternion::identity())
    }

    #[test]
    fn sphere_scale_is_diameter() {
        let marker = build_sphere_marker(&translated(-0.3, 0.0, -1.0), 0.1, &MarkerOptions::spheres()).unwrap();
        assert_eq!(marker.kind, MarkerKind::Sphere);
        assert_relative_eq!(marker.scale, Vector3::new(0.2, 0.2, 0.2));
        assert_relative_eq!(marker.pose.position, Point::new(-0.3, 0.0, -1.0));
        assert_eq!(marker.ns, "spheres");
    }

    #[test]
    fn cylinder_scale_uses_length_on_z() {
        let marker =
            build_cylinder_marker(&translated(0.0, 0.0, -1.0), 0.1, 0.3, &MarkerOptions::cylinders()).unwrap();
        assert_eq!(marker.kind, MarkerKind::Cylinder);
        assert_relative_eq!(marker.scale, Vector3::new(0.2, 0.2, 0.3));
    }

    #[test]
    fn box_from_dimensions_sits_on_pose_origin() {
        let extent = BoxExtent::dimensions(0.1, 0.2, 0.3);
        let marker = build_box_marker(&translated(0.3, 0.0, -1.0), &extent, &MarkerOptions::boxes()).unwrap();
        assert_eq!(marker.kind, MarkerKind::Cube);
        assert_relative_eq!(marker.scale, Vector3::new(0.1, 0.2, 0.3));
        assert_relative_eq!(marker.pose.position, Point::new(0.3, 0.0, -1.0));
    }

    #[test]
    fn box_corner_center_is_transformed_into_parent_frame() {
        let quat = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2);
        let pose = transform::compose(&Point::new(1.0, 0.0, 0.0), &quat);
        let extent = BoxExtent::corners(Point::new(0.0, 0.0, 0.0), Point::new(2.0, 4.0, 6.0));

        let marker = build_box_marker(&pose, &extent, &MarkerOptions::boxes()).unwrap();

        // Local center (1, 2, 3) rotated a quarter turn about z, then shifted
        assert_relative_eq!(marker.pose.position, Point::new(-1.0, 1.0, 3.0), epsilon = 1e-12);
        assert_relative_eq!(marker.pose.orientation.angle_to(&quat), 0.0, epsilon = 1e-9);
        assert_relative_eq!(marker.scale, Vector3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn points_are_kept_verbatim_and_in_order() {
        let points = vec![
            Point::new(0.8, 0.0, -1.0),
            Point::new(0.9, 0.0, -1.0),
            Point::new(1.0, 0.0, -1.0),
            Point::new(0.9, 0.1, -1.0),
        ];
        let marker = build_points_marker(&points, &PointsOptions::default()).unwrap();
        assert_eq!(marker.kind, MarkerKind::Points);
        assert_eq!(marker.points, points);
        assert_relative_eq!(marker.scale, Vector3::new(0.005, 0.005, 0.005));
        assert_eq!(marker.color.a, 1.0);
    }

    #[test]
    fn sphere_and_cylinder_reject_bad_sizes() {
        let pose = PoseMatrix::identity();
        for radius in [-0.1, 0.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                build_sphere_marker(&pose, radius, &MarkerOptions::spheres()),
                Err(VizError::InvalidInput(_))
            ));
        }

        let cylinders = MarkerOptions::cylinders();
        assert!(build_cylinder_marker(&pose, f64::NAN, 0.3, &cylinders).is_err());
        assert!(build_cylinder_marker(&pose, 0.1, -1.0, &cylinders).is_err());
        assert!(build_cylinder_marker(&pose, -0.1, 0.3, &cylinders).is_err());
        assert!(build_cylinder_marker(&pose, 0.1, 0.3, &cylinders).is_ok());
    }

    #[test]
    fn box_rejects_inverted_or_non_finite_extent() {
        let pose = PoseMatrix::identity();
        let inverted = BoxExtent::corners(Point::new(2.0, 0.0, 0.0), Point::new(0.0, 1.0, 1.0));
        assert!(matches!(
            build_box_marker(&pose, &inverted, &MarkerOptions::boxes()),
            Err(VizError::InvalidInput(_))
        ));

        let nan = BoxExtent::dimensions(0.1, f64::NAN, 0.3);
        assert!(build_box_marker(&pose, &nan, &MarkerOptions::boxes()).is_err());
    }

    #[test]
    fn points_reject_non_positive_size() {
        let options = PointsOptions::default().with_size(0.0);
        assert!(build_points_marker(&[Point::origin()], &options).is_err());
    }
}
