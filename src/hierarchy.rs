//! Transform hierarchy for the camera rig.
//!
//! The rig is three nodes in the ECS world: root (yaw + map position),
//! swivel (pitch) and stick (zoom distance). Each node only ever carries a
//! single-axis rotation, which keeps the Euler helpers below exact.

use crate::components::{Children, Parent, RigRoot, Stick, Swivel, Transform};
use crate::error::RigError;
use glam::{Mat4, Quat, Vec3};
use hecs::{Entity, World};

/// Handles to the three rig nodes, resolved once from the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RigNodes {
    pub root: Entity,
    pub swivel: Entity,
    pub stick: Entity,
}

impl RigNodes {
    /// Resolve swivel (first child of root) and stick (first child of swivel).
    /// Fails if either link is missing or any node lacks a transform.
    pub fn resolve(world: &World, root: Entity) -> Result<Self, RigError> {
        let swivel = first_child(world, root).ok_or(RigError::MissingSwivel)?;
        let stick = first_child(world, swivel).ok_or(RigError::MissingStick)?;

        for (entity, name) in [(root, "root"), (swivel, "swivel"), (stick, "stick")] {
            if !world.satisfies::<&Transform>(entity).unwrap_or(false) {
                return Err(RigError::MissingTransform(name));
            }
        }

        Ok(Self { root, swivel, stick })
    }
}

/// Spawn root -> swivel -> stick with identity local transforms.
/// Returns the root entity.
pub fn spawn_rig(world: &mut World, position: Vec3) -> Entity {
    let stick = world.spawn((Transform::IDENTITY, Stick));
    let swivel = world.spawn((Transform::IDENTITY, Swivel, Children(vec![stick])));
    let root = world.spawn((
        Transform::from_translation(position),
        RigRoot,
        Children(vec![swivel]),
    ));

    let _ = world.insert_one(stick, Parent(swivel));
    let _ = world.insert_one(swivel, Parent(root));

    root
}

pub fn first_child(world: &World, entity: Entity) -> Option<Entity> {
    world
        .get::<&Children>(entity)
        .ok()
        .and_then(|children| children.0.first().copied())
}

/// Copy of a node's local transform
pub fn local_transform(world: &World, entity: Entity) -> Option<Transform> {
    world.get::<&Transform>(entity).ok().map(|t| *t)
}

/// Overwrite a node's local transform. Missing nodes are ignored.
pub fn set_local_transform(world: &mut World, entity: Entity, transform: Transform) {
    if let Ok(mut t) = world.get::<&mut Transform>(entity) {
        *t = transform;
    }
}

/// Compose local transforms up the parent chain.
pub fn world_matrix(world: &World, entity: Entity) -> Option<Mat4> {
    let mut matrix = local_transform(world, entity)?.local_matrix();
    let mut current = entity;

    while let Some(parent) = world.get::<&Parent>(current).ok().map(|p| p.0) {
        matrix = local_transform(world, parent)?.local_matrix() * matrix;
        current = parent;
    }

    Some(matrix)
}

/// World-space position of a node's origin
pub fn world_position(world: &World, entity: Entity) -> Option<Vec3> {
    world_matrix(world, entity).map(|m| m.transform_point3(Vec3::ZERO))
}

/// Pitch-only rotation (about +X), in degrees
pub fn pitch_rotation(degrees: f32) -> Quat {
    Quat::from_rotation_x(degrees.to_radians())
}

/// Yaw-only rotation (about +Y), in degrees
pub fn yaw_rotation(degrees: f32) -> Quat {
    Quat::from_rotation_y(degrees.to_radians())
}

/// Pitch of a rotation about X, reported in [0, 360) like an engine's
/// Euler readout. Only exact for pitch-only rotations.
pub fn pitch_degrees(rotation: Quat) -> f32 {
    let angle = 2.0 * rotation.x.atan2(rotation.w);
    angle.to_degrees().rem_euclid(360.0)
}
