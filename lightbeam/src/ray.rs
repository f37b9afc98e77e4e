use glam::Vec3;
use serde::{Deserialize, Serialize};

/// The directed line representing the user's aim, from controller or gaze.
///
/// A pointer that isn't aiming at anything carries the null ray: zero origin
/// and zero direction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Ray {
    /// Where the ray starts
    pub origin: Vec3,
    /// Where the ray is headed. Not required to be normalized.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// The point at `origin + direction * t`
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::vec3;

    #[test]
    fn test_point_at() {
        let ray = Ray::new(vec3(0.0, 1.0, 0.0), vec3(0.0, 0.0, -2.0));
        assert_relative_eq!(ray.point_at(0.5), vec3(0.0, 1.0, -1.0));

        // The null ray goes nowhere.
        assert_relative_eq!(Ray::default().point_at(100.0), Vec3::ZERO);
    }
}
