//! Multi-marker shapes: coordinate axes and grasps

use super::{Marker, MarkerAction, MarkerKind};
use crate::common::types::{Color, Point, PoseMatrix};
use crate::config::{AxesOptions, GraspOptions};
use crate::error::{Result, VizError};
use crate::transform::{self, Axis, Pose};
use nalgebra::Vector3;
use std::time::Duration;

/// Axis colors: x red, y green, z blue
const AXIS_COLORS: [Color; 3] = [Color::RED, Color::GREEN, Color::BLUE];

/// Shaft diameter, head diameter, head length of axes arrows
const AXES_ARROW_SCALE: [f64; 3] = [0.01, 0.02, 0.0];

/// Grasp arrow lengths along x, y and z before the style's length factor
const GRASP_ARROW_LENGTHS: [f64; 3] = [0.05, 0.02, 0.02];

/// Ids reserved per grasp; only the first three are drawn
pub const IDS_PER_GRASP: i32 = 4;

/// Arrow scale and length factor used for one grasp
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraspStyle {
    pub scale: [f64; 3],
    pub length_factor: f64,
}

impl GraspStyle {
    /// The first grasp of a sequence
    pub const PRIMARY: GraspStyle = GraspStyle {
        scale: [0.015, 0.025, 0.025],
        length_factor: 1.5,
    };

    /// Every grasp after the first
    pub const SECONDARY: GraspStyle = GraspStyle {
        scale: [0.01, 0.015, 0.015],
        length_factor: 1.0,
    };

    pub fn for_index(index: usize) -> Self {
        if index == 0 {
            GraspStyle::PRIMARY
        } else {
            GraspStyle::SECONDARY
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn arrow(
    frame: &str,
    ns: &str,
    id: i32,
    scale: [f64; 3],
    color: Color,
    lifetime: Duration,
    start: Point,
    end: Point,
) -> Marker {
    let mut marker = Marker::new(MarkerKind::Arrow, MarkerAction::Add, frame, ns, id);
    marker.scale = Vector3::from(scale);
    marker.color = color;
    marker.lifetime = lifetime;
    marker.points = vec![start, end];
    marker
}

/// Three arrows along the pose's local x, y and z axes.
///
/// Arrow `i` gets id `options.id + i` and the matching red/green/blue color.
pub fn build_axes_markers(pose: &PoseMatrix, options: &AxesOptions) -> Result<[Marker; 3]> {
    options.validate()?;
    let start = transform::translation(pose);

    Ok(Axis::ALL.map(|axis| {
        let i = axis.index();
        let end = transform::axis_endpoint(pose, axis, options.lengths[i]);
        arrow(
            &options.frame,
            &options.ns,
            options.id + i as i32,
            AXES_ARROW_SCALE,
            AXIS_COLORS[i],
            options.lifetime,
            start,
            end,
        )
    }))
}

/// Three persistent arrows per grasp, in grasp order.
///
/// Grasp `n` uses ids `4n`, `4n + 1` and `4n + 2`; `4n + 3` stays free so
/// consumers can rely on fixed four-wide id blocks.
pub fn build_grasp_markers(grasps: &[Pose], options: &GraspOptions) -> Result<Vec<Marker>> {
    if grasps.len() > (i32::MAX / IDS_PER_GRASP) as usize {
        return Err(VizError::invalid(format!(
            "{} grasps overflow the marker id range",
            grasps.len()
        )));
    }

    let mut markers = Vec::with_capacity(grasps.len() * 3);
    for (grasp_num, grasp) in grasps.iter().enumerate() {
        let style = GraspStyle::for_index(grasp_num);
        let mat = grasp.to_matrix();
        let base_id = grasp_num as i32 * IDS_PER_GRASP;

        for axis in Axis::ALL {
            let i = axis.index();
            let length = GRASP_ARROW_LENGTHS[i] * style.length_factor;
            markers.push(arrow(
                &options.frame,
                &options.ns,
                base_id + i as i32,
                style.scale,
                AXIS_COLORS[i],
                Duration::ZERO,
                grasp.position,
                transform::axis_endpoint(&mat, axis, length),
            ));
        }
    }
    Ok(markers)
}
