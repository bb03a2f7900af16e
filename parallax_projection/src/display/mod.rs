//! Display module — the physical screen rectangle.
//!
//! A passive geometric description. Trackers own and move it; the
//! projector only reads it.

mod display_surface;

pub use display_surface::{Corner, DisplaySurface};
