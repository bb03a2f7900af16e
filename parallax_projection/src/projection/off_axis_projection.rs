/// OffAxisProjection — result of one projector evaluation.
///
/// Ephemeral: computed fresh each cycle, never updated in place.

use glam::{Mat4, Quat, Vec3};
use crate::math::Pose;
use super::frustum::FrustumParams;

/// Everything one evaluation produces: the rotation the camera must take,
/// the normalised frustum, the real eye-to-display distance, and the
/// projection matrix built from the frustum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffAxisProjection {
    camera_position: Vec3,
    camera_rotation: Quat,
    frustum: FrustumParams,
    display_distance: f32,
    projection_matrix: Mat4,
}

impl OffAxisProjection {
    pub(crate) fn new(
        camera_position: Vec3,
        camera_rotation: Quat,
        frustum: FrustumParams,
        display_distance: f32,
    ) -> Self {
        Self {
            camera_position,
            camera_rotation,
            frustum,
            display_distance,
            projection_matrix: frustum.projection_matrix(),
        }
    }

    /// Rotation the camera must be given (the display's rotation).
    pub fn camera_rotation(&self) -> Quat {
        self.camera_rotation
    }

    /// Camera pose the projection was computed for, after alignment.
    pub fn camera_pose(&self) -> Pose {
        Pose::new(self.camera_position, self.camera_rotation)
    }

    /// Frustum with the near plane moved to the configured near clip.
    pub fn frustum(&self) -> &FrustumParams {
        &self.frustum
    }

    /// Perpendicular distance from the eye to the display plane,
    /// before normalisation.
    pub fn display_distance(&self) -> f32 {
        self.display_distance
    }

    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Diagnostic: world-space rays from the camera to the four frustum
    /// corners at `display_distance()`.
    ///
    /// Order: bottom-left, top-left, top-right, bottom-right. For a valid
    /// projection, `camera position + ray` is the matching display corner.
    pub fn frustum_corners(&self) -> [Vec3; 4] {
        self.frustum
            .corners_at_depth(self.display_distance)
            .map(|local| self.camera_rotation * local)
    }

    /// Diagnostic: world-space end points of `frustum_corners()`.
    pub fn frustum_corner_points(&self) -> [Vec3; 4] {
        self.frustum_corners().map(|ray| self.camera_position + ray)
    }
}
