//! Projection module — off-axis frustum derivation and matrix building.
//!
//! Everything here is a pure function of the current display and camera
//! poses. Results are plain values produced fresh every cycle.

mod config;
mod frustum;
mod off_axis_projection;
mod projector;

pub use config::{ProjectorConfig, DEFAULT_NEAR_CLIP};
pub use frustum::{perspective_off_center, FrustumParams};
pub use off_axis_projection::OffAxisProjection;
pub use projector::OffAxisProjector;
