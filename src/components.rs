use glam::{Mat4, Quat, Vec3};
use hecs::Entity;

/// Local transform of a node relative to its parent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.translation)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Ordered child nodes. The first child is significant for the camera rig.
#[derive(Debug, Clone, Default)]
pub struct Children(pub Vec<Entity>);

/// Back-reference to the owning node
#[derive(Debug, Clone, Copy)]
pub struct Parent(pub Entity);

/// Marker for the rig's base node (yaw + map position)
#[derive(Debug, Clone, Copy)]
pub struct RigRoot;

/// Marker for the node carrying the camera pitch
#[derive(Debug, Clone, Copy)]
pub struct Swivel;

/// Marker for the node carrying the zoom distance
#[derive(Debug, Clone, Copy)]
pub struct Stick;
