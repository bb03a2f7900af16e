/// Tests for Stage
///
/// Display/camera lifecycle via SlotMap keys, binding, and the
/// per-cycle update with partial failures.

use glam::{Mat4, Quat, Vec3};
use crate::camera::Camera;
use crate::display::DisplaySurface;
use crate::error::Error;
use crate::math::Pose;
use crate::projection::ProjectorConfig;
use super::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn monitor_at(position: Vec3) -> DisplaySurface {
    DisplaySurface::new(Pose::from_position(position), 0.6, 0.34).unwrap()
}

fn eye_at(position: Vec3) -> Camera {
    Camera::new(Pose::from_position(position), 100.0)
}

// ============================================================================
// Displays
// ============================================================================

#[test]
fn test_stage_new_is_empty() {
    let mut stage = Stage::new();
    assert_eq!(stage.display_count(), 0);
    assert_eq!(stage.camera_count(), 0);
    assert!(stage.update().is_ok());
}

#[test]
fn test_add_and_remove_display() {
    let mut stage = Stage::new();
    let key = stage.add_display(monitor_at(Vec3::ZERO));

    assert_eq!(stage.display_count(), 1);
    assert_eq!(stage.display(key).unwrap().width(), 0.6);
    assert_eq!(stage.display_keys().collect::<Vec<_>>(), vec![key]);

    let removed = stage.remove_display(key).unwrap();
    assert_eq!(removed.height(), 0.34);
    assert!(stage.display(key).is_none());
    assert!(stage.remove_display(key).is_none());
}

#[test]
fn test_display_mut_moves_display() {
    let mut stage = Stage::new();
    let key = stage.add_display(monitor_at(Vec3::ZERO));

    stage.display_mut(key).unwrap().set_position(Vec3::new(0.0, 0.5, 0.0));
    assert_eq!(stage.display(key).unwrap().position(), Vec3::new(0.0, 0.5, 0.0));
}

// ============================================================================
// Cameras
// ============================================================================

#[test]
fn test_add_camera_requires_existing_display() {
    let mut stage = Stage::new();
    let display = stage.add_display(monitor_at(Vec3::ZERO));
    stage.remove_display(display);

    let result = stage.add_camera(eye_at(Vec3::new(0.0, 0.0, -0.6)), display);
    assert!(matches!(result, Err(Error::InvalidKey(_))));
    assert_eq!(stage.camera_count(), 0);
}

#[test]
fn test_add_and_remove_camera() {
    let mut stage = Stage::new();
    let display = stage.add_display(monitor_at(Vec3::ZERO));
    let camera = stage.add_camera(eye_at(Vec3::new(0.0, 0.0, -0.6)), display).unwrap();

    assert_eq!(stage.camera_count(), 1);
    assert_eq!(stage.bound_display(camera), Some(display));
    assert_eq!(stage.camera_keys().count(), 1);
    assert!(stage.last_projection(camera).is_none());

    let removed = stage.remove_camera(camera).unwrap();
    assert_eq!(removed.position(), Vec3::new(0.0, 0.0, -0.6));
    assert!(stage.camera(camera).is_none());
    assert!(stage.remove_camera(camera).is_none());
}

// ============================================================================
// Update
// ============================================================================

#[test]
fn test_update_writes_every_camera() {
    let mut stage = Stage::new();
    let display = stage.add_display(monitor_at(Vec3::new(0.0, 0.4, 0.0)));
    let left_eye = stage.add_camera(eye_at(Vec3::new(-0.03, 0.4, -0.6)), display).unwrap();
    let right_eye = stage.add_camera(eye_at(Vec3::new(0.03, 0.4, -0.6)), display).unwrap();

    let report = stage.update();

    assert!(report.is_ok());
    assert_eq!(report.updated.len(), 2);
    assert!(report.updated.contains(&left_eye));
    assert!(report.updated.contains(&right_eye));

    let left = *stage.camera(left_eye).unwrap().projection_matrix();
    let right = *stage.camera(right_eye).unwrap().projection_matrix();
    assert_ne!(left, Mat4::IDENTITY);
    assert_ne!(left, right);

    // Mirror-image eyes give opposite horizontal skew
    assert!((left.row(0)[2] + right.row(0)[2]).abs() < 1e-5);

    let projection = stage.last_projection(left_eye).unwrap();
    assert!((projection.display_distance() - 0.6).abs() < 1e-5);
    assert_eq!(projection.projection_matrix(), &left);
}

#[test]
fn test_update_aligns_camera_rotation() {
    let mut stage = Stage::new();
    let rotation = Quat::from_rotation_y(0.3);
    let display = stage.add_display(
        DisplaySurface::new(Pose::new(Vec3::new(0.0, 0.0, 1.0), rotation), 1.0, 1.0).unwrap(),
    );
    let camera = stage.add_camera(eye_at(Vec3::ZERO), display).unwrap();

    assert!(stage.update().is_ok());
    assert_eq!(stage.camera(camera).unwrap().rotation(), rotation);
}

#[test]
fn test_update_reports_failing_pairs_and_updates_the_rest() {
    let mut stage = Stage::new();
    let display = stage.add_display(monitor_at(Vec3::ZERO));
    let good = stage.add_camera(eye_at(Vec3::new(0.0, 0.0, -0.6)), display).unwrap();
    // Behind the display plane
    let behind = stage.add_camera(eye_at(Vec3::new(0.0, 0.0, 0.6)), display).unwrap();

    let report = stage.update();

    assert!(!report.is_ok());
    assert_eq!(report.updated, vec![good]);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].0, behind);
    assert!(matches!(report.failures[0].1, Error::DegenerateFrustum(_)));

    assert_eq!(*stage.camera(behind).unwrap().projection_matrix(), Mat4::IDENTITY);
    assert!(stage.last_projection(behind).is_none());
}

#[test]
fn test_update_with_removed_display_fails_with_invalid_key() {
    let mut stage = Stage::new();
    let display = stage.add_display(monitor_at(Vec3::ZERO));
    let camera = stage.add_camera(eye_at(Vec3::new(0.0, 0.0, -0.6)), display).unwrap();
    assert!(stage.update().is_ok());
    let before = *stage.camera(camera).unwrap().projection_matrix();

    stage.remove_display(display);
    let report = stage.update();

    assert!(matches!(report.failures[0].1, Error::InvalidKey(_)));
    // Previous projection kept
    assert_eq!(*stage.camera(camera).unwrap().projection_matrix(), before);
}

#[test]
fn test_tracker_movement_between_updates() {
    let mut stage = Stage::new();
    let display = stage.add_display(monitor_at(Vec3::ZERO));
    let camera = stage.add_camera(eye_at(Vec3::new(0.0, 0.0, -0.6)), display).unwrap();

    stage.update();
    let centered = *stage.last_projection(camera).unwrap().frustum();

    stage.camera_mut(camera).unwrap().set_position(Vec3::new(0.1, 0.0, -0.6));
    stage.update();
    let moved = *stage.last_projection(camera).unwrap().frustum();

    assert!(moved.left() < centered.left());
    assert!(moved.right() < centered.right());
}

// ============================================================================
// Binding
// ============================================================================

#[test]
fn test_bind_switches_display() {
    let mut stage = Stage::new();
    let near = stage.add_display(monitor_at(Vec3::ZERO));
    let far = stage.add_display(monitor_at(Vec3::new(0.0, 0.0, 2.0)));
    let camera = stage.add_camera(eye_at(Vec3::new(0.0, 0.0, -0.5)), near).unwrap();

    stage.update();
    assert!((stage.last_projection(camera).unwrap().display_distance() - 0.5).abs() < 1e-5);

    stage.bind(camera, far).unwrap();
    assert_eq!(stage.bound_display(camera), Some(far));
    assert!(stage.last_projection(camera).is_none());

    stage.update();
    assert!((stage.last_projection(camera).unwrap().display_distance() - 2.5).abs() < 1e-5);
}

#[test]
fn test_bind_rejects_unknown_keys() {
    let mut stage = Stage::new();
    let display = stage.add_display(monitor_at(Vec3::ZERO));
    let camera = stage.add_camera(eye_at(Vec3::new(0.0, 0.0, -0.5)), display).unwrap();

    let gone = stage.add_display(monitor_at(Vec3::ONE));
    stage.remove_display(gone);
    assert!(matches!(stage.bind(camera, gone), Err(Error::InvalidKey(_))));

    stage.remove_camera(camera);
    assert!(matches!(stage.bind(camera, display), Err(Error::InvalidKey(_))));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_with_config() {
    let config = StageConfig {
        projector: ProjectorConfig { near_clip: 0.1 },
        log_each_update: true,
    };
    let mut stage = Stage::with_config(config).unwrap();
    assert_eq!(stage.config(), &config);

    let display = stage.add_display(monitor_at(Vec3::ZERO));
    let camera = stage.add_camera(eye_at(Vec3::new(0.0, 0.0, -0.6)), display).unwrap();
    stage.update();

    assert!((stage.last_projection(camera).unwrap().frustum().near() - 0.1).abs() < 1e-5);
}

#[test]
fn test_with_invalid_config() {
    let config = StageConfig {
        projector: ProjectorConfig { near_clip: -1.0 },
        ..StageConfig::default()
    };
    assert!(matches!(Stage::with_config(config), Err(Error::InvalidConfig(_))));
}
