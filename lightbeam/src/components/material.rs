//! How an entity should look when rendered

use glam::Vec4;
use serde::{Deserialize, Serialize};

/// A component that instructs the renderer how an entity should look when rendered.
///
/// Colors are linear RGBA factors. This is the slice of a full PBR material
/// that pointer interaction cares about; hosts with richer material systems
/// can mirror `base_color_factor` into their own representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// The base color of the material
    pub base_color_factor: Vec4,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            base_color_factor: Vec4::ONE,
        }
    }
}

impl Material {
    /// Convenience function to create a material with the given base color
    pub fn from_color(base_color_factor: Vec4) -> Self {
        Self { base_color_factor }
    }
}
