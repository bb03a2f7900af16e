//! Rigid pose math shared by displays and cameras.

mod pose;

pub use pose::Pose;
