//! Error types for the parallax projection library
//!
//! Every failure here is a configuration or programmer error: the
//! computation is a pure function of the current poses, so nothing
//! is transient and nothing is retried.

use std::fmt;

/// Result type for parallax projection operations
pub type Result<T> = std::result::Result<T, Error>;

/// Parallax projection errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Display size is non-positive or not finite
    InvalidDisplay(String),

    /// Frustum parameters would divide by zero or flip sign
    /// (camera on or behind the display plane, empty extents, far <= near)
    DegenerateFrustum(String),

    /// Projector or stage configuration is unusable
    InvalidConfig(String),

    /// Unknown display or camera key
    InvalidKey(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDisplay(msg) => write!(f, "Invalid display: {}", msg),
            Error::DegenerateFrustum(msg) => write!(f, "Degenerate frustum: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::InvalidKey(msg) => write!(f, "Invalid key: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
