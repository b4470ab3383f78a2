//! Transform utilities
//!
//! Conversions between 4x4 homogeneous pose matrices and
//! (position, quaternion) pairs, plus the small pieces of geometry the
//! marker builders need: axis endpoints, box extents and point lists.

pub mod box_geometry;

pub use self::box_geometry::BoxExtent;

use crate::common::types::{Point, PoseMatrix};
use crate::error::{Result, VizError};
use nalgebra::{DMatrix, Matrix3, Quaternion, UnitQuaternion, Vector3};

/// A position and a unit quaternion orientation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Point,
    pub orientation: UnitQuaternion<f64>,
}

impl Pose {
    pub fn new(position: Point, orientation: UnitQuaternion<f64>) -> Self {
        Pose {
            position,
            orientation,
        }
    }

    /// Pose at `position` with identity orientation
    pub fn from_position(position: Point) -> Self {
        Pose::new(position, UnitQuaternion::identity())
    }

    pub fn from_matrix(mat: &PoseMatrix) -> Self {
        let (position, orientation) = decompose(mat);
        Pose::new(position, orientation)
    }

    pub fn to_matrix(&self) -> PoseMatrix {
        compose(&self.position, &self.orientation)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Pose::from_position(Point::origin())
    }
}

/// One of the three local axes of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Column of the rotation block holding this axis
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl TryFrom<usize> for Axis {
    type Error = VizError;

    fn try_from(index: usize) -> Result<Self> {
        match index {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            _ => Err(VizError::invalid(format!(
                "axis index must be 0, 1 or 2, got {}",
                index
            ))),
        }
    }
}

/// Top-left 3x3 rotation block of a pose matrix
pub fn rotation_block(mat: &PoseMatrix) -> Matrix3<f64> {
    Matrix3::from_fn(|r, c| mat[(r, c)])
}

/// Translation held in the last column of a pose matrix
pub fn translation(mat: &PoseMatrix) -> Point {
    Point::new(mat[(0, 3)], mat[(1, 3)], mat[(2, 3)])
}

/// Split a pose matrix into its position and orientation.
///
/// The quaternion is extracted with trace-based branch selection: the
/// largest of the trace and the three diagonal terms is used as the pivot,
/// so the divisor never approaches zero for a valid rotation.
pub fn decompose(mat: &PoseMatrix) -> (Point, UnitQuaternion<f64>) {
    (translation(mat), quaternion_from_rotation(&rotation_block(mat)))
}

/// Quaternion of an orthonormal rotation matrix
pub fn quaternion_from_rotation(r: &Matrix3<f64>) -> UnitQuaternion<f64> {
    let (r00, r11, r22) = (r[(0, 0)], r[(1, 1)], r[(2, 2)]);
    let trace = r00 + r11 + r22;

    let (w, x, y, z) = if trace > 0.0 {
        let s = (trace + 1.0).sqrt() * 2.0;
        (
            0.25 * s,
            (r[(2, 1)] - r[(1, 2)]) / s,
            (r[(0, 2)] - r[(2, 0)]) / s,
            (r[(1, 0)] - r[(0, 1)]) / s,
        )
    } else if r00 > r11 && r00 > r22 {
        let s = (1.0 + r00 - r11 - r22).sqrt() * 2.0;
        (
            (r[(2, 1)] - r[(1, 2)]) / s,
            0.25 * s,
            (r[(0, 1)] + r[(1, 0)]) / s,
            (r[(0, 2)] + r[(2, 0)]) / s,
        )
    } else if r11 > r22 {
        let s = (1.0 + r11 - r00 - r22).sqrt() * 2.0;
        (
            (r[(0, 2)] - r[(2, 0)]) / s,
            (r[(0, 1)] + r[(1, 0)]) / s,
            0.25 * s,
            (r[(1, 2)] + r[(2, 1)]) / s,
        )
    } else {
        let s = (1.0 + r22 - r00 - r11).sqrt() * 2.0;
        (
            (r[(1, 0)] - r[(0, 1)]) / s,
            (r[(0, 2)] + r[(2, 0)]) / s,
            (r[(1, 2)] + r[(2, 1)]) / s,
            0.25 * s,
        )
    };

    // Renormalize to absorb round-off from a nearly orthonormal input
    UnitQuaternion::from_quaternion(Quaternion::new(w, x, y, z))
}

/// Pure rotation matrix of a quaternion
pub fn quaternion_matrix(quat: &UnitQuaternion<f64>) -> PoseMatrix {
    quat.to_homogeneous()
}

/// Build a pose matrix from a position and orientation
pub fn compose(position: &Point, quat: &UnitQuaternion<f64>) -> PoseMatrix {
    let mut mat = quaternion_matrix(quat);
    mat[(0, 3)] = position.x;
    mat[(1, 3)] = position.y;
    mat[(2, 3)] = position.z;
    mat
}

/// Apply a pose matrix to a point expressed in the pose's frame
pub fn transform_point(mat: &PoseMatrix, point: &Point) -> Point {
    let rotated = rotation_block(mat) * point.coords;
    translation(mat) + rotated
}

/// Origin of the pose plus `length` along the given local axis
pub fn axis_endpoint(mat: &PoseMatrix, axis: Axis, length: f64) -> Point {
    let column: Vector3<f64> = rotation_block(mat).column(axis.index()).into_owned();
    translation(mat) + column * length
}

/// Convert a 3xN or 4xN matrix of column points into a point list.
///
/// A fourth (homogeneous) row is ignored; columns keep their order.
pub fn points_from_matrix(points: &DMatrix<f64>) -> Result<Vec<Point>> {
    if points.nrows() != 3 && points.nrows() != 4 {
        return Err(VizError::invalid(format!(
            "point matrix must have 3 or 4 rows, got {}",
            points.nrows()
        )));
    }

    Ok(points
        .column_iter()
        .map(|col| Point::new(col[0], col[1], col[2]))
        .collect())
}
