/*!
# Parallax Projection

Off-axis (asymmetric) perspective projection for a tracked eye looking
through a physical display, so rendered content appears to sit behind
the screen like a window ("fish-tank" parallax).

## Architecture

- **DisplaySurface**: the physical screen rectangle (pose + size)
- **Camera**: the tracked eye (pose + far clip + projection matrix)
- **OffAxisProjector**: derives the frustum and projection matrix each cycle
- **FrustumParams**: validated off-center frustum and its matrix
- **Stage**: several display/camera pairs updated together

## Per-cycle usage

```no_run
use parallax_projection::parallax::{Camera, DisplaySurface, OffAxisProjector, Pose};
use parallax_projection::glam::Vec3;

let display = DisplaySurface::new(Pose::IDENTITY, 0.6, 0.34)?;
let mut camera = Camera::new(Pose::from_position(Vec3::new(0.0, 0.0, -0.6)), 100.0);
let projector = OffAxisProjector::new();

// After trackers have moved the camera, before rendering:
let projection = projector.apply(&mut camera, &display)?;
println!("{}", projection.display_distance());
# Ok::<(), parallax_projection::parallax::Error>(())
```
*/

// Internal modules
mod error;
pub mod log;
pub mod math;
pub mod display;
pub mod camera;
pub mod projection;
pub mod stage;

// Main parallax namespace module
pub mod parallax {
    // Error types
    pub use crate::error::{Error, Result};

    // Core types
    pub use crate::math::Pose;
    pub use crate::display::{Corner, DisplaySurface};
    pub use crate::camera::Camera;
    pub use crate::projection::{
        perspective_off_center, FrustumParams, OffAxisProjection, OffAxisProjector,
        ProjectorConfig, DEFAULT_NEAR_CLIP,
    };
    pub use crate::stage::{CameraKey, DisplayKey, Stage, StageConfig, UpdateReport};

    // Logging sub-module (types and sink control, NOT macros)
    pub mod log {
        pub use crate::log::{reset_logger, set_logger, DefaultLogger, LogEntry, LogSeverity, Logger};
    }
}

// Re-export math library at crate root
pub use glam;
