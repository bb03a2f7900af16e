/// Projector configuration.

use crate::error::{Error, Result};

/// Default normalised near-plane distance: 1 cm in metre units.
pub const DEFAULT_NEAR_CLIP: f32 = 0.01;

/// Off-axis projector configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectorConfig {
    /// Distance the near plane is moved to, whatever the real distance
    /// between the eye and the display. The far plane is not rescaled.
    pub near_clip: f32,
}

impl Default for ProjectorConfig {
    fn default() -> Self {
        Self {
            near_clip: DEFAULT_NEAR_CLIP,
        }
    }
}

impl ProjectorConfig {
    /// Check that the configuration can produce a valid frustum.
    pub fn validate(&self) -> Result<()> {
        if !(self.near_clip.is_finite() && self.near_clip > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "near_clip must be a positive finite number, got {}",
                self.near_clip
            )));
        }
        Ok(())
    }
}
