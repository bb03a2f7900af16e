//! Stage module — several display/camera pairs updated together.

mod stage;

pub use stage::{CameraKey, DisplayKey, Stage, StageConfig, UpdateReport};
