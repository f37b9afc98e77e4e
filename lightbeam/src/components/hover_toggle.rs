//! Hover and click color feedback for targetable entities

use glam::Vec4;

use super::Material;

/// The capability set of something the pointer can land on.
///
/// [`HoverToggle`] implements this; hosts can implement it for their own
/// target components and reuse [`crate::systems::pointer_input_system`]'s
/// event ordering.
pub trait PointerTarget {
    /// The pointer has started hovering this entity
    fn on_pointer_enter(&mut self, material: &mut Material);
    /// The pointer has stopped hovering this entity
    fn on_pointer_exit(&mut self, material: &mut Material);
    /// The user clicked this entity
    fn on_pointer_click(&mut self, material: &mut Material);
}

/// A component added to an entity to toggle its [`Material`] color under the
/// pointer.
///
/// On enter the entity lights up with `highlight_color`; on exit it returns
/// to whatever color it had before the first enter. A click inverts the color
/// currently on display, so clicking twice puts things back the way they
/// were. Requires [`crate::systems::pointer_input_system`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverToggle {
    /// The color shown while the pointer hovers the entity
    pub highlight_color: Vec4,
    /// The color the entity had before the first enter. Kept across
    /// exits and cleared only by [`HoverToggle::reset`].
    pub initial_color: Option<Vec4>,
}

impl Default for HoverToggle {
    fn default() -> Self {
        Self {
            highlight_color: Vec4::new(0.0, 1.0, 0.0, 1.0),
            initial_color: None,
        }
    }
}

impl HoverToggle {
    /// Create a toggle with the given highlight color
    pub fn new(highlight_color: Vec4) -> Self {
        Self {
            highlight_color,
            initial_color: None,
        }
    }

    /// Forget the cached original color. The next enter will cache whatever
    /// color the material has then.
    pub fn reset(&mut self) {
        self.initial_color = None;
    }
}

impl PointerTarget for HoverToggle {
    fn on_pointer_enter(&mut self, material: &mut Material) {
        self.initial_color.get_or_insert(material.base_color_factor);
        material.base_color_factor = self.highlight_color;
    }

    fn on_pointer_exit(&mut self, material: &mut Material) {
        if let Some(initial_color) = self.initial_color {
            material.base_color_factor = initial_color;
        }
    }

    fn on_pointer_click(&mut self, material: &mut Material) {
        let color = material.base_color_factor;
        material.base_color_factor = Vec4::new(
            1.0 - color.x,
            1.0 - color.y,
            1.0 - color.z,
            color.w,
        );
    }
}
