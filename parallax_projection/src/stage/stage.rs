/// Stage — displays and the tracked cameras looking through them.
///
/// Uses SlotMaps for O(1) insert/remove with stable keys. Each camera is
/// bound to exactly one display; several cameras may share a display.
/// `update()` recomputes every camera once per cycle. Pairs are
/// independent: a failing pair is reported and skipped, the others are
/// still updated.

use slotmap::{new_key_type, SlotMap};
use crate::camera::Camera;
use crate::display::DisplaySurface;
use crate::error::{Error, Result};
use crate::projection::{OffAxisProjection, OffAxisProjector, ProjectorConfig};

const LOG_SOURCE: &str = "parallax::Stage";

new_key_type! {
    /// Stable key of a display in a Stage.
    pub struct DisplayKey;

    /// Stable key of a camera in a Stage.
    pub struct CameraKey;
}

/// Stage configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageConfig {
    /// Configuration of the projector shared by all cameras
    pub projector: ProjectorConfig,
    /// Log every successful camera update at DEBUG level
    pub log_each_update: bool,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            projector: ProjectorConfig::default(),
            log_each_update: false,
        }
    }
}

/// A camera and the display it looks through.
#[derive(Debug, Clone)]
struct CameraBinding {
    camera: Camera,
    display: DisplayKey,
    last_projection: Option<OffAxisProjection>,
}

/// Outcome of one `Stage::update()`.
#[derive(Debug, Clone, Default)]
pub struct UpdateReport {
    /// Cameras whose projection was rewritten this cycle
    pub updated: Vec<CameraKey>,
    /// Cameras left untouched, with the reason
    pub failures: Vec<(CameraKey, Error)>,
}

impl UpdateReport {
    /// True if every camera was updated.
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Collection of displays and bound cameras, updated together.
pub struct Stage {
    config: StageConfig,
    projector: OffAxisProjector,
    displays: SlotMap<DisplayKey, DisplaySurface>,
    cameras: SlotMap<CameraKey, CameraBinding>,
}

impl Stage {
    /// Empty stage with the default configuration.
    pub fn new() -> Self {
        Self {
            config: StageConfig::default(),
            projector: OffAxisProjector::new(),
            displays: SlotMap::with_key(),
            cameras: SlotMap::with_key(),
        }
    }

    /// Empty stage with a custom configuration.
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfig` if the projector configuration is invalid.
    pub fn with_config(config: StageConfig) -> Result<Self> {
        let projector = OffAxisProjector::with_config(config.projector)?;
        Ok(Self {
            config,
            projector,
            displays: SlotMap::with_key(),
            cameras: SlotMap::with_key(),
        })
    }

    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    // ===== DISPLAYS =====

    /// Add a display. The key stays valid until the display is removed.
    pub fn add_display(&mut self, display: DisplaySurface) -> DisplayKey {
        let key = self.displays.insert(display);
        crate::parallax_info!(
            LOG_SOURCE,
            "Display {:?} added ({} x {})",
            key,
            display.width(),
            display.height()
        );
        key
    }

    /// Remove a display.
    ///
    /// Cameras still bound to it are kept; they fail with
    /// `Error::InvalidKey` on every update until rebound.
    pub fn remove_display(&mut self, key: DisplayKey) -> Option<DisplaySurface> {
        let removed = self.displays.remove(key);
        if removed.is_some() {
            let orphans = self.cameras.values().filter(|b| b.display == key).count();
            if orphans > 0 {
                crate::parallax_warn!(
                    LOG_SOURCE,
                    "Display {:?} removed while {} camera(s) are still bound to it",
                    key,
                    orphans
                );
            } else {
                crate::parallax_info!(LOG_SOURCE, "Display {:?} removed", key);
            }
        }
        removed
    }

    pub fn display(&self, key: DisplayKey) -> Option<&DisplaySurface> {
        self.displays.get(key)
    }

    /// Mutable access for trackers moving the display.
    pub fn display_mut(&mut self, key: DisplayKey) -> Option<&mut DisplaySurface> {
        self.displays.get_mut(key)
    }

    pub fn display_count(&self) -> usize {
        self.displays.len()
    }

    /// Iterate over all display keys.
    pub fn display_keys(&self) -> impl Iterator<Item = DisplayKey> + '_ {
        self.displays.keys()
    }

    // ===== CAMERAS =====

    /// Add a camera looking through `display`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidKey` if `display` is not in this stage.
    pub fn add_camera(&mut self, camera: Camera, display: DisplayKey) -> Result<CameraKey> {
        self.check_display(display)?;
        let key = self.cameras.insert(CameraBinding {
            camera,
            display,
            last_projection: None,
        });
        crate::parallax_info!(LOG_SOURCE, "Camera {:?} added, bound to display {:?}", key, display);
        Ok(key)
    }

    pub fn remove_camera(&mut self, key: CameraKey) -> Option<Camera> {
        let removed = self.cameras.remove(key).map(|b| b.camera);
        if removed.is_some() {
            crate::parallax_info!(LOG_SOURCE, "Camera {:?} removed", key);
        }
        removed
    }

    pub fn camera(&self, key: CameraKey) -> Option<&Camera> {
        self.cameras.get(key).map(|b| &b.camera)
    }

    /// Mutable access for trackers moving the camera.
    pub fn camera_mut(&mut self, key: CameraKey) -> Option<&mut Camera> {
        self.cameras.get_mut(key).map(|b| &mut b.camera)
    }

    pub fn camera_count(&self) -> usize {
        self.cameras.len()
    }

    /// Iterate over all camera keys.
    pub fn camera_keys(&self) -> impl Iterator<Item = CameraKey> + '_ {
        self.cameras.keys()
    }

    /// Display the camera is bound to (the key may be stale).
    pub fn bound_display(&self, camera: CameraKey) -> Option<DisplayKey> {
        self.cameras.get(camera).map(|b| b.display)
    }

    /// Rebind a camera to another display.
    ///
    /// # Errors
    ///
    /// `Error::InvalidKey` if either key is not in this stage.
    pub fn bind(&mut self, camera: CameraKey, display: DisplayKey) -> Result<()> {
        self.check_display(display)?;
        let binding = self.cameras.get_mut(camera).ok_or_else(|| {
            log_and_return_error(Error::InvalidKey(format!("camera {:?} not found", camera)))
        })?;
        binding.display = display;
        binding.last_projection = None;
        Ok(())
    }

    /// Most recent successful projection of a camera.
    pub fn last_projection(&self, camera: CameraKey) -> Option<&OffAxisProjection> {
        self.cameras.get(camera).and_then(|b| b.last_projection.as_ref())
    }

    // ===== PER-CYCLE UPDATE =====

    /// Recompute the projection of every camera.
    ///
    /// Call once per cycle, after trackers have moved displays and cameras
    /// and before rendering. Failing cameras keep their previous rotation
    /// and projection.
    pub fn update(&mut self) -> UpdateReport {
        let mut report = UpdateReport::default();

        for (key, binding) in self.cameras.iter_mut() {
            let result = match self.displays.get(binding.display) {
                Some(display) => self.projector.apply(&mut binding.camera, display),
                None => Err(log_and_return_error(Error::InvalidKey(format!(
                    "camera {:?} is bound to missing display {:?}",
                    key, binding.display
                )))),
            };

            match result {
                Ok(projection) => {
                    if self.config.log_each_update {
                        crate::parallax_debug!(
                            LOG_SOURCE,
                            "Camera {:?} updated, display distance {:.4}",
                            key,
                            projection.display_distance()
                        );
                    }
                    binding.last_projection = Some(projection);
                    report.updated.push(key);
                }
                Err(error) => report.failures.push((key, error)),
            }
        }

        report
    }

    fn check_display(&self, display: DisplayKey) -> Result<()> {
        if self.displays.contains_key(display) {
            Ok(())
        } else {
            Err(log_and_return_error(Error::InvalidKey(format!(
                "display {:?} not found",
                display
            ))))
        }
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}

fn log_and_return_error(error: Error) -> Error {
    crate::parallax_error!(LOG_SOURCE, "{}", error);
    error
}

#[cfg(test)]
#[path = "stage_tests.rs"]
mod tests;
