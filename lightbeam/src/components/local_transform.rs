//! The position of an entity within the simulation

use glam::{Affine3A, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// The component's position in the game simulation.
///
/// Pointer entities use this as the pose of the controller (or gaze) the laser
/// is attached to. Reticle entities have theirs overwritten each tick by
/// [`crate::systems::pointer_visuals_system`].
#[derive(Clone, PartialEq, Debug, Copy, Deserialize, Serialize)]
pub struct LocalTransform {
    /// The translation of the entity
    pub translation: Vec3,
    /// The rotation of the entity
    pub rotation: Quat,
    /// The non-uniform scale of the entity
    pub scale: Vec3,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl LocalTransform {
    /// The direction the entity is facing. Forward is -Z, as in OpenXR.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Convenience function to convert the `LocalTransform` into an [`Affine3A`]
    pub fn to_affine(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// Update the translation and rotation from an [`Affine3A`], leaving scale untouched
    pub fn update_from_affine(&mut self, affine: &Affine3A) {
        let (_, rotation, translation) = affine.to_scale_rotation_translation();
        self.translation = translation;
        self.rotation = rotation;
    }
}
