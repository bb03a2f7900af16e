/// Pose — rigid world transform (position + unit rotation).
///
/// Shared convention for displays and cameras: local +Z is forward,
/// +Y is up, +X is right. No scale.

use glam::{Mat4, Quat, Vec3};

/// Position and orientation of a tracked object in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// World position
    pub position: Vec3,
    /// World orientation (unit quaternion)
    pub rotation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    /// Pose at the world origin with no rotation.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Pose at `position` with no rotation.
    pub fn from_position(position: Vec3) -> Self {
        Self::new(position, Quat::IDENTITY)
    }

    /// Same position, different orientation.
    pub fn with_rotation(&self, rotation: Quat) -> Self {
        Self::new(self.position, rotation)
    }

    /// Local +Z in world space.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Local +Y in world space. With `right()`, used to place a tracked
    /// eye relative to a display.
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Local +X in world space.
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// World-to-local matrix. For a camera this is its view matrix.
    ///
    /// Built from the conjugate rotation rather than a general inverse,
    /// which is exact for a rigid transform.
    pub fn world_to_local(&self) -> Mat4 {
        let inverse_rotation = self.rotation.inverse();
        Mat4::from_rotation_translation(inverse_rotation, inverse_rotation * -self.position)
    }

    /// Transform a local-space point to world space.
    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.position + self.rotation * local
    }
}

#[cfg(test)]
#[path = "pose_tests.rs"]
mod tests;
