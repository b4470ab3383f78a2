use rviz_draw::{
    markers::MarkerAction, BoxExtent, DrawFunctions, GraspOptions, MarkerOptions,
    PointsOptions, PoseMatrix, RecordingSink,
};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("Building demo scene into a recording sink...");

    let mut draw = DrawFunctions::new(RecordingSink::new());

    let mut pose_mat = PoseMatrix::identity();
    pose_mat[(2, 3)] = -1.0;

    let points = nalgebra::DMatrix::from_row_slice(
        3,
        4,
        &[
            0.8, 0.9, 1.0, 0.9, //
            0.0, 0.0, 0.0, 0.1, //
            -1.0, -1.0, -1.0, -1.0,
        ],
    );
    draw.draw_points_matrix(
        &points,
        &PointsOptions::default().with_marker(MarkerOptions::new("katana_base_link", "points")),
    )?;

    pose_mat[(0, 3)] = 0.3;
    draw.draw_box(&pose_mat, &BoxExtent::dimensions(0.1, 0.2, 0.3), &MarkerOptions::boxes())?;

    pose_mat[(0, 3)] = 0.0;
    draw.draw_cylinder(&pose_mat, 0.1, 0.3, &MarkerOptions::cylinders())?;

    pose_mat[(0, 3)] = -0.3;
    draw.draw_sphere(&pose_mat, 0.1, &MarkerOptions::spheres())?;

    pose_mat[(0, 3)] = 0.6;
    let grasp = rviz_draw::Pose::from_matrix(&pose_mat);
    let grasp_ids = draw.draw_grasps(&[grasp], &GraspOptions::default())?;

    draw.clear_ids(
        rviz_draw::MarkerKind::Arrow,
        "katana_base_link",
        "grasps",
        &grasp_ids,
    );

    let sink = draw.into_sink();
    for marker in sink.markers() {
        let action = match marker.action {
            MarkerAction::Add => "add",
            MarkerAction::Delete => "delete",
        };
        let position = marker.pose.position;
        println!(
            "{:<6} {:?} {}/{} in {} at ({:.2}, {:.2}, {:.2}) with {} points",
            action,
            marker.kind,
            marker.ns,
            marker.id,
            marker.frame_id,
            position.x,
            position.y,
            position.z,
            marker.points.len()
        );
    }

    println!("Built {} markers", sink.len());
    Ok(())
}
