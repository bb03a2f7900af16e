/// Camera — tracked eye with a settable projection.
///
/// The Camera computes nothing beyond its own pose matrices. Trackers
/// set its position, `OffAxisProjector::apply()` overwrites its rotation
/// and projection matrix once per cycle.

use glam::{Mat4, Quat, Vec3};
use crate::math::Pose;

/// Tracked camera. A passive data container.
///
/// The projection matrix starts as identity and is only meaningful
/// after the first successful projector update.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pose: Pose,
    far_clip: f32,
    projection_matrix: Mat4,
}

impl Camera {
    /// Create a camera at `pose` with the given far clip distance.
    pub fn new(pose: Pose, far_clip: f32) -> Self {
        Self {
            pose,
            far_clip,
            projection_matrix: Mat4::IDENTITY,
        }
    }

    // ===== GETTERS =====

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn position(&self) -> Vec3 {
        self.pose.position
    }

    pub fn rotation(&self) -> Quat {
        self.pose.rotation
    }

    /// View direction (local +Z in world space).
    pub fn forward(&self) -> Vec3 {
        self.pose.forward()
    }

    /// Far clip distance, used unscaled by the projector.
    pub fn far_clip(&self) -> f32 {
        self.far_clip
    }

    /// World-to-local transform of the current pose.
    pub fn world_to_local(&self) -> Mat4 {
        self.pose.world_to_local()
    }

    /// View matrix: `world_to_local()` with Z negated, so view space
    /// looks down -Z as the off-center projection expects.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_scale(Vec3::new(1.0, 1.0, -1.0)) * self.world_to_local()
    }

    /// Projection matrix last written by the projector.
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix()
    }

    // ===== SETTERS — store, compute nothing =====

    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    /// Set the tracked eye position.
    pub fn set_position(&mut self, position: Vec3) {
        self.pose.position = position;
    }

    pub fn set_rotation(&mut self, rotation: Quat) {
        self.pose.rotation = rotation;
    }

    pub fn set_far_clip(&mut self, far_clip: f32) {
        self.far_clip = far_clip;
    }

    /// Set the projection matrix.
    pub fn set_projection(&mut self, matrix: Mat4) {
        self.projection_matrix = matrix;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
