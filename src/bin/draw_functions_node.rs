use anyhow::{Error, Result};
use rclrs::{Context, CreateBasicExecutor, Node, RclrsErrorFilter, SpinOptions};
use rviz_draw::sink::ros::{RosMarkerSink, DEFAULT_MARKER_TOPIC};
use rviz_draw::{
    BoxExtent, DrawFunctions, GraspOptions, MarkerOptions, PointsOptions, Pose, PoseMatrix,
};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Redraws the demo scene once per period
struct DrawFunctionsNode {
    node: Arc<Node>,
    running: Arc<Mutex<bool>>,
}

impl DrawFunctionsNode {
    pub fn new(executor: &rclrs::Executor, name: &str) -> Result<Arc<Self>, rclrs::RclrsError> {
        // Create a node using the executor
        let node = executor.create_node(name)?;

        // Marker topic, overridable from the environment
        let topic =
            std::env::var("DRAW_MARKER_TOPIC").unwrap_or_else(|_| DEFAULT_MARKER_TOPIC.to_string());
        tracing::info!("Publishing markers on {}", topic);

        // Create publisher for the markers
        let sink = RosMarkerSink::new(&node, &topic)?;
        let mut draw = DrawFunctions::new(sink);

        // Create the node instance with a running flag
        let running = Arc::new(Mutex::new(true));
        let draw_functions_node = Arc::new(DrawFunctionsNode {
            node,
            running: Arc::clone(&running),
        });

        // Start a thread to periodically redraw the scene
        thread::spawn(move || {
            while running.lock().map(|r| *r).unwrap_or(false) {
                if let Err(e) = draw_scene(&mut draw) {
                    tracing::error!("Failed to draw scene: {}", e);
                }
                thread::sleep(Duration::from_secs(1)); // 1 Hz
            }
        });

        Ok(draw_functions_node)
    }
}

impl Drop for DrawFunctionsNode {
    fn drop(&mut self) {
        // Stop the redraw thread when the node is dropped
        if let Ok(mut running) = self.running.lock() {
            *running = false;
        }
    }
}

/// Points, a box, a cylinder, a sphere and a grasp lined up along x
fn draw_scene(draw: &mut DrawFunctions<RosMarkerSink>) -> rviz_draw::Result<()> {
    let mut pose_mat = PoseMatrix::identity();
    pose_mat[(2, 3)] = -1.0;

    let points = [
        rviz_draw::Point::new(0.8, 0.0, -1.0),
        rviz_draw::Point::new(0.9, 0.0, -1.0),
        rviz_draw::Point::new(1.0, 0.0, -1.0),
        rviz_draw::Point::new(0.9, 0.1, -1.0),
    ];
    let mut points_options = PointsOptions::default();
    points_options.marker.frame = "katana_base_link".to_string();
    draw.draw_points(&points, &points_options)?;

    pose_mat[(0, 3)] = 0.3;
    draw.draw_box(&pose_mat, &BoxExtent::dimensions(0.1, 0.2, 0.3), &MarkerOptions::boxes())?;

    pose_mat[(0, 3)] = 0.0;
    draw.draw_cylinder(&pose_mat, 0.1, 0.3, &MarkerOptions::cylinders())?;

    pose_mat[(0, 3)] = -0.3;
    draw.draw_sphere(&pose_mat, 0.1, &MarkerOptions::spheres())?;

    pose_mat[(0, 3)] = 0.6;
    draw.draw_grasps(&[Pose::from_matrix(&pose_mat)], &GraspOptions::default())?;

    Ok(())
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Initializing draw functions node...");

    // Create the ROS 2 context and executor
    let mut executor = Context::default_from_env()?.create_basic_executor();

    let draw_functions_node = DrawFunctionsNode::new(&executor, "draw_functions")?;
    tracing::info!(
        "Draw functions node {} initialized. Starting to spin...",
        draw_functions_node.node.name()
    );

    // Spin the executor to process callbacks
    executor
        .spin(SpinOptions::default())
        .first_error()
        .map_err(|err| err.into())
}
