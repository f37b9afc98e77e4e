use glam::{Quat, Vec3};

use crate::components::LocalTransform;

#[inline]
/// Convert a host-engine pose into a [`LocalTransform`]
pub fn transform_from_pose(
    position: mint::Vector3<f32>,
    orientation: mint::Quaternion<f32>,
) -> LocalTransform {
    LocalTransform {
        translation: Vec3::from(position),
        rotation: Quat::from(orientation),
        scale: Vec3::ONE,
    }
}

#[inline]
/// Convert a [`LocalTransform`] into a host-engine pose
pub fn pose_from_transform(
    transform: &LocalTransform,
) -> (mint::Vector3<f32>, mint::Quaternion<f32>) {
    (
        transform.translation.into(),
        transform.rotation.into(),
    )
}
