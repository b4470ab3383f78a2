//! ROS 2 marker publisher
//!
//! Converts markers into `visualization_msgs/Marker` messages and publishes
//! them on a topic rviz subscribes to.

use super::MarkerSink;
use crate::markers::Marker;
use crate::transform::Pose;
use builtin_interfaces::msg::{Duration as RosDuration, Time};
use geometry_msgs::msg::{Point as RosPoint, Pose as RosPose, Quaternion, Vector3};
use nalgebra::{Point3, UnitQuaternion};
use rclrs::QOS_PROFILE_DEFAULT;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use std_msgs::msg::{ColorRGBA, Header};
use visualization_msgs::msg::Marker as RosMarker;

/// Topic rviz listens on by default
pub const DEFAULT_MARKER_TOPIC: &str = "visualization_marker";

fn to_ros_duration(duration: Duration) -> RosDuration {
    RosDuration {
        sec: duration.as_secs().min(i32::MAX as u64) as i32,
        nanosec: duration.subsec_nanos(),
    }
}

fn stamp_now() -> Time {
    let since_epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    Time {
        sec: since_epoch.as_secs().min(i32::MAX as u64) as i32,
        nanosec: since_epoch.subsec_nanos(),
    }
}

fn to_ros_point(point: &Point3<f64>) -> RosPoint {
    RosPoint {
        x: point.x,
        y: point.y,
        z: point.z,
    }
}

fn to_ros_pose(pose: &Pose) -> RosPose {
    let q = pose.orientation.quaternion();
    RosPose {
        position: to_ros_point(&pose.position),
        orientation: Quaternion {
            x: q.i,
            y: q.j,
            z: q.k,
            w: q.w,
        },
    }
}

/// Grasp poses arriving as `geometry_msgs/Pose`, e.g. from a grasp planner
impl From<&RosPose> for Pose {
    fn from(pose: &RosPose) -> Self {
        let o = &pose.orientation;
        Pose::new(
            Point3::new(pose.position.x, pose.position.y, pose.position.z),
            UnitQuaternion::from_quaternion(nalgebra::Quaternion::new(o.w, o.x, o.y, o.z)),
        )
    }
}

/// Build the wire message for `marker` with the given header stamp
pub fn to_ros_marker(marker: &Marker, stamp: Time) -> RosMarker {
    RosMarker {
        header: Header {
            stamp,
            frame_id: marker.frame_id.clone(),
        },
        ns: marker.ns.clone(),
        id: marker.id,
        type_: marker.kind.wire_type(),
        action: marker.action.wire_action(),
        pose: to_ros_pose(&marker.pose),
        scale: Vector3 {
            x: marker.scale.x,
            y: marker.scale.y,
            z: marker.scale.z,
        },
        color: ColorRGBA {
            r: marker.color.r,
            g: marker.color.g,
            b: marker.color.b,
            a: marker.color.a,
        },
        lifetime: to_ros_duration(marker.lifetime),
        points: marker.points.iter().map(to_ros_point).collect(),
        ..Default::default()
    }
}

/// Sink publishing on a `visualization_msgs/Marker` topic
pub struct RosMarkerSink {
    publisher: Arc<rclrs::Publisher<RosMarker>>,
}

impl RosMarkerSink {
    /// Create a marker publisher on `topic` owned by `node`
    pub fn new(node: &rclrs::Node, topic: &str) -> Result<Self, rclrs::RclrsError> {
        let publisher = node.create_publisher::<RosMarker>(topic, QOS_PROFILE_DEFAULT)?;
        Ok(RosMarkerSink { publisher })
    }
}

impl MarkerSink for RosMarkerSink {
    fn send(&mut self, marker: Marker) {
        let msg = to_ros_marker(&marker, stamp_now());
        if let Err(e) = self.publisher.publish(&msg) {
            tracing::warn!(ns = %marker.ns, id = marker.id, "Failed to publish marker: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PointsOptions;
    use crate::markers::{build_points_marker, clear_points};

    #[test]
    fn points_marker_converts_to_wire_message() {
        let points = vec![Point3::new(0.8, 0.0, -1.0), Point3::new(0.9, 0.1, -1.0)];
        let marker = build_points_marker(&points, &PointsOptions::default()).unwrap();
        let msg = to_ros_marker(&marker, Time { sec: 5, nanosec: 7 });

        assert_eq!(msg.header.frame_id, "kinect_link");
        assert_eq!(msg.header.stamp.sec, 5);
        assert_eq!(msg.ns, "points");
        assert_eq!(msg.type_, 8);
        assert_eq!(msg.action, 0);
        assert_eq!(msg.lifetime.sec, 20);
        assert_eq!(msg.points.len(), 2);
        assert_eq!(msg.points[1].y, 0.1);
        assert_eq!(msg.pose.orientation.w, 1.0);
        assert_eq!(msg.color.b, 1.0);
    }

    #[test]
    fn delete_marker_converts_action() {
        let msg = to_ros_marker(&clear_points("katana_base_link", "points", 0), Time { sec: 0, nanosec: 0 });
        assert_eq!(msg.action, 2);
        assert_eq!(msg.type_, 8);
    }

    #[test]
    fn lifetime_seconds_clamp_to_i32() {
        let long = to_ros_duration(Duration::new(u64::MAX, 250));
        assert_eq!(long.sec, i32::MAX);
        assert_eq!(long.nanosec, 250);

        let edge = to_ros_duration(Duration::new(i32::MAX as u64 + 1, 0));
        assert_eq!(edge.sec, i32::MAX);

        let short = to_ros_duration(Duration::from_millis(1500));
        assert_eq!((short.sec, short.nanosec), (1, 500_000_000));

        let persistent = to_ros_duration(Duration::ZERO);
        assert_eq!((persistent.sec, persistent.nanosec), (0, 0));
    }

    #[test]
    fn ros_pose_round_trips() {
        let pose = Pose::new(
            Point3::new(0.6, 0.0, -1.0),
            UnitQuaternion::from_euler_angles(0.1, 0.2, 0.3),
        );
        let back = Pose::from(&to_ros_pose(&pose));
        assert!((back.position - pose.position).norm() < 1e-12);
        assert!(back.orientation.angle_to(&pose.orientation) < 1e-9);
    }
}
