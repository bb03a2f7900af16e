/// OffAxisProjector — per-cycle asymmetric frustum for a tracked eye.
///
/// Each evaluation:
/// 1. gives the camera the display's rotation, so the display is frontal
///    in camera-local space,
/// 2. expresses the display center and normal in camera-local space,
/// 3. takes the perpendicular distance to the display plane as near,
/// 4. takes the camera's far clip as far,
/// 5. derives left/right/bottom/top from the local display center and
///    the display size,
/// 6. scales the four extents so the near plane sits exactly at the
///    configured near clip (far is left as is),
/// 7. builds the off-center perspective matrix.
///
/// `compute()` is pure and logs nothing on success. `apply()` writes the
/// result into a camera.

use glam::Vec3;
use crate::camera::Camera;
use crate::display::DisplaySurface;
use crate::error::{Error, Result};
use crate::math::Pose;
use super::config::ProjectorConfig;
use super::frustum::FrustumParams;
use super::off_axis_projection::OffAxisProjection;

const LOG_SOURCE: &str = "parallax::OffAxisProjector";

/// Stateless between calls: holds configuration only.
#[derive(Debug, Clone, Copy, Default)]
pub struct OffAxisProjector {
    config: ProjectorConfig,
}

impl OffAxisProjector {
    /// Projector with the default configuration (near clip 0.01).
    pub fn new() -> Self {
        Self::default()
    }

    /// Projector with a custom configuration.
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfig` if the near clip is not a positive finite number.
    pub fn with_config(config: ProjectorConfig) -> Result<Self> {
        config.validate().map_err(log_and_return_error)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ProjectorConfig {
        &self.config
    }

    /// Compute the projection for an eye at `camera_pose` looking through
    /// `display`. Only the camera's position is used; its rotation is
    /// replaced by the display's.
    ///
    /// # Errors
    ///
    /// `Error::DegenerateFrustum` if the eye is on or behind the display
    /// plane, or if the resulting frustum is degenerate (e.g. `far_clip`
    /// not beyond the normalised near plane). Errors are logged before
    /// being returned.
    pub fn compute(
        &self,
        camera_pose: &Pose,
        display: &DisplaySurface,
        far_clip: f32,
    ) -> Result<OffAxisProjection> {
        let aligned = camera_pose.with_rotation(display.rotation());
        let world_to_local = aligned.world_to_local();

        let local_position = world_to_local.transform_point3(display.position());
        let local_forward = world_to_local.transform_vector3(display.forward());

        // Foot of the perpendicular from the eye (local origin) to the display plane
        let normal = local_forward.normalize_or_zero();
        let signed_distance = normal.dot(local_position);
        if !(signed_distance.is_finite() && signed_distance > 0.0) {
            return Err(log_and_return_error(Error::DegenerateFrustum(format!(
                "eye at {} is {} from the display plane (must be in front of it)",
                camera_pose.position, signed_distance
            ))));
        }
        let closest: Vec3 = normal * signed_distance;
        let display_distance = closest.length();

        let half = display.size() * 0.5;
        let scale = self.config.near_clip / display_distance;

        let frustum = FrustumParams::new(
            (local_position.x - half.x) * scale,
            (local_position.x + half.x) * scale,
            (local_position.y - half.y) * scale,
            (local_position.y + half.y) * scale,
            self.config.near_clip,
            far_clip,
        )
        .map_err(log_and_return_error)?;

        Ok(OffAxisProjection::new(
            camera_pose.position,
            display.rotation(),
            frustum,
            display_distance,
        ))
    }

    /// Compute the projection for `camera` and write the aligned rotation
    /// and the projection matrix into it.
    ///
    /// On error the camera is left untouched.
    pub fn apply(&self, camera: &mut Camera, display: &DisplaySurface) -> Result<OffAxisProjection> {
        let projection = self.compute(camera.pose(), display, camera.far_clip())?;
        camera.set_rotation(projection.camera_rotation());
        camera.set_projection(*projection.projection_matrix());
        Ok(projection)
    }
}

fn log_and_return_error(error: Error) -> Error {
    crate::parallax_error!(LOG_SOURCE, "{}", error);
    error
}

#[cfg(test)]
#[path = "projector_tests.rs"]
mod tests;
