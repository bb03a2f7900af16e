/// DisplaySurface — physical screen rectangle in world space.
///
/// Width and height are the physical size of the screen in world units
/// (typically metres). Corners are derived on every query from the live
/// pose, so tracker updates are visible immediately.

use glam::{Quat, Vec2, Vec3};
use crate::error::{Error, Result};
use crate::math::Pose;

/// One of the four display corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// All corners, in the order returned by `DisplaySurface::corners()`.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Unit offset from the center: x in {-1, 1}, y in {-1, 1}.
    fn sign(self) -> Vec2 {
        match self {
            Corner::TopLeft => Vec2::new(-1.0, 1.0),
            Corner::TopRight => Vec2::new(1.0, 1.0),
            Corner::BottomLeft => Vec2::new(-1.0, -1.0),
            Corner::BottomRight => Vec2::new(1.0, -1.0),
        }
    }
}

/// Physical display rectangle.
///
/// Invariant: width and height are finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplaySurface {
    pose: Pose,
    size: Vec2,
}

impl DisplaySurface {
    /// Create a display.
    ///
    /// # Errors
    ///
    /// `Error::InvalidDisplay` if `width` or `height` is not a finite,
    /// strictly positive number.
    pub fn new(pose: Pose, width: f32, height: f32) -> Result<Self> {
        validate_size(width, height)?;
        Ok(Self {
            pose,
            size: Vec2::new(width, height),
        })
    }

    // ===== GETTERS =====

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Physical size as (width, height).
    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn position(&self) -> Vec3 {
        self.pose.position
    }

    pub fn rotation(&self) -> Quat {
        self.pose.rotation
    }

    /// Plane normal: the display's local +Z in world space.
    pub fn forward(&self) -> Vec3 {
        self.pose.forward()
    }

    /// World-space corner: `position + rotation * (±width/2, ±height/2, 0)`.
    pub fn corner(&self, which: Corner) -> Vec3 {
        let half = which.sign() * self.size * 0.5;
        self.pose.transform_point(half.extend(0.0))
    }

    /// All four corners: top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self) -> [Vec3; 4] {
        Corner::ALL.map(|c| self.corner(c))
    }

    // ===== SETTERS (tracker updates) =====

    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.pose.position = position;
    }

    pub fn set_rotation(&mut self, rotation: Quat) {
        self.pose.rotation = rotation;
    }

    /// Change the physical size. On error the display keeps its old size.
    pub fn set_size(&mut self, width: f32, height: f32) -> Result<()> {
        validate_size(width, height)?;
        self.size = Vec2::new(width, height);
        Ok(())
    }
}

fn validate_size(width: f32, height: f32) -> Result<()> {
    if !(width.is_finite() && width > 0.0) {
        return Err(Error::InvalidDisplay(format!(
            "width must be a positive finite number, got {}",
            width
        )));
    }
    if !(height.is_finite() && height > 0.0) {
        return Err(Error::InvalidDisplay(format!(
            "height must be a positive finite number, got {}",
            height
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "display_surface_tests.rs"]
mod tests;
