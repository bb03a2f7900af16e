//! Parallax demo — simulated head tracking in front of a desk monitor.
//!
//! No window and no tracker: the head follows a scripted path and every
//! cycle the stage recomputes the off-axis projection, which is printed
//! as the frustum tangents and the off-center skew terms.

use glam::{Quat, Vec3};
use parallax_projection::parallax::{
    Camera, DisplaySurface, Pose, Stage, StageConfig,
};
use parallax_projection::{parallax_error, parallax_info};

const SOURCE: &str = "parallax::demo";

/// 27" 16:9 monitor, in metres
const MONITOR_WIDTH: f32 = 0.598;
const MONITOR_HEIGHT: f32 = 0.336;

const FRAMES: usize = 12;

fn main() {
    if let Err(e) = run() {
        parallax_error!(SOURCE, "Demo failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> parallax_projection::parallax::Result<()> {
    let mut stage = Stage::with_config(StageConfig {
        log_each_update: true,
        ..StageConfig::default()
    })?;

    // Monitor standing on the desk, tilted back by 10°
    let monitor = DisplaySurface::new(
        Pose::new(Vec3::new(0.0, 0.35, 0.0), Quat::from_rotation_x(10f32.to_radians())),
        MONITOR_WIDTH,
        MONITOR_HEIGHT,
    )?;
    let monitor_key = stage.add_display(monitor);

    let head_start = monitor.position() - monitor.forward() * 0.6;
    let head = stage.add_camera(Camera::new(Pose::from_position(head_start), 50.0), monitor_key)?;

    for frame in 0..FRAMES {
        // Head sways on an ellipse parallel to the screen and leans in and out
        let t = frame as f32 / FRAMES as f32 * std::f32::consts::TAU;
        let eye = head_start
            + monitor.pose().right() * (0.15 * t.cos())
            + monitor.pose().up() * (0.05 * t.sin())
            - monitor.forward() * (0.1 * (2.0 * t).sin());

        if let Some(camera) = stage.camera_mut(head) {
            camera.set_position(eye);
        }

        let report = stage.update();
        for (key, error) in &report.failures {
            parallax_error!(SOURCE, "Camera {:?} not updated: {}", key, error);
        }

        if let Some(projection) = stage.last_projection(head) {
            let tangents = projection.frustum().tangents();
            let m = projection.projection_matrix();
            parallax_info!(
                SOURCE,
                "frame {:2} eye=({:+.3}, {:+.3}, {:+.3}) dist={:.3} tan[l={:+.3} r={:+.3} b={:+.3} t={:+.3}] skew=({:+.3}, {:+.3})",
                frame,
                eye.x,
                eye.y,
                eye.z,
                projection.display_distance(),
                tangents.x,
                tangents.y,
                tangents.z,
                tangents.w,
                m.row(0)[2],
                m.row(1)[2]
            );
        }
    }

    Ok(())
}
