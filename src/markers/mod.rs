//! Marker builder
//!
//! Pure construction of marker records. Nothing in here publishes; the
//! markers are handed to a [`MarkerSink`](crate::sink::MarkerSink) by the
//! caller.

pub mod clear;
pub mod composite;
pub mod shapes;

pub use self::clear::{build_delete_marker, clear_grasps, clear_ids, clear_points};
pub use self::composite::{build_axes_markers, build_grasp_markers, GraspStyle};
pub use self::shapes::{
    build_box_marker, build_cylinder_marker, build_points_marker, build_sphere_marker,
};

use crate::common::types::{Color, Point};
use crate::config::MarkerOptions;
use crate::error::{Result, VizError};
use crate::transform::Pose;
use nalgebra::{UnitQuaternion, Vector3};
use std::time::Duration;

/// Shape of a marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Points,
    Arrow,
    Cube,
    Sphere,
    Cylinder,
}

impl MarkerKind {
    /// `visualization_msgs/Marker` type value
    pub fn wire_type(self) -> i32 {
        match self {
            MarkerKind::Arrow => 0,
            MarkerKind::Cube => 1,
            MarkerKind::Sphere => 2,
            MarkerKind::Cylinder => 3,
            MarkerKind::Points => 8,
        }
    }

    /// Number of scale values the kind expects
    pub fn scale_arity(self) -> usize {
        3
    }
}

/// What the consumer should do with a marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerAction {
    Add,
    Delete,
}

impl MarkerAction {
    /// `visualization_msgs/Marker` action value
    pub fn wire_action(self) -> i32 {
        match self {
            MarkerAction::Add => 0,
            MarkerAction::Delete => 2,
        }
    }
}

/// A renderable primitive addressed by namespace and id
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub kind: MarkerKind,
    pub action: MarkerAction,
    pub frame_id: String,
    pub ns: String,
    pub id: i32,
    pub scale: Vector3<f64>,
    pub color: Color,
    pub pose: Pose,
    /// Zero means the marker never expires
    pub lifetime: Duration,
    /// Vertices for points markers, start and end for arrows
    pub points: Vec<Point>,
}

impl Marker {
    /// Empty marker of `kind` with an identity pose and zero scale
    pub fn new(kind: MarkerKind, action: MarkerAction, frame_id: &str, ns: &str, id: i32) -> Self {
        Marker {
            kind,
            action,
            frame_id: frame_id.to_string(),
            ns: ns.to_string(),
            id,
            scale: Vector3::zeros(),
            color: Color::default(),
            pose: Pose::default(),
            lifetime: Duration::ZERO,
            points: Vec::new(),
        }
    }

    pub fn is_delete(&self) -> bool {
        self.action == MarkerAction::Delete
    }
}

/// Fill in an add-action marker.
///
/// `dims` is the scale along x, y and z and must have exactly three
/// entries.
pub fn build_marker(
    kind: MarkerKind,
    dims: &[f64],
    options: &MarkerOptions,
    position: Point,
    orientation: UnitQuaternion<f64>,
) -> Result<Marker> {
    if dims.len() != kind.scale_arity() {
        return Err(VizError::invalid(format!(
            "{:?} marker needs {} scale values, got {}",
            kind,
            kind.scale_arity(),
            dims.len()
        )));
    }
    options.validate()?;

    let mut marker = Marker::new(kind, MarkerAction::Add, &options.frame, &options.ns, options.id);
    marker.scale = Vector3::new(dims[0], dims[1], dims[2]);
    marker.color = options.rgba();
    marker.lifetime = options.lifetime;
    marker.pose = Pose::new(position, orientation);
    Ok(marker)
}
