//! Camera module — the tracked eye.
//!
//! A passive data container. Trackers drive its position; the
//! off-axis projector drives its rotation and projection matrix.

mod camera;

pub use camera::Camera;
