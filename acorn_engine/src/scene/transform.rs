/// World transform of a renderable: translation, rotation and scale.

use glam::{EulerRot, Mat4, Quat, Vec3};

/// Position, rotation and scale of an object in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub fn new(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self { position, rotation, scale }
    }

    /// Identity transform moved to `position`
    pub fn from_position(position: Vec3) -> Self {
        Self { position, ..Self::default() }
    }

    /// Build a transform from Euler angles in radians (applied Y, then X, then Z)
    pub fn from_euler(position: Vec3, yaw: f32, pitch: f32, roll: f32, scale: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::from_euler(EulerRot::YXZ, yaw, pitch, roll),
            scale,
        }
    }

    /// World matrix (scale, then rotation, then translation)
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
