//! Per-frame pointer input fed in by the host

use glam::Vec3;
use hecs::Entity;

use crate::Ray;

/// What the host's raycast found this frame
#[derive(Debug, Clone, Copy)]
pub struct RaycastHit {
    /// The entity the pointer ray landed on
    pub target: Entity,
    /// Where the ray met the target
    pub position: Vec3,
    /// The ray that produced the hit
    pub ray: Ray,
    /// Can the target be interacted with?
    pub is_interactive: bool,
}

/// The state of the pointer's input, updated once per frame by the host.
///
/// The context keeps the previous frame's state so that
/// [`crate::systems::pointer_input_system`] can turn level changes into
/// edges: enter/exit on target changes, press/release on the trigger, and
/// enable/disable on the input module.
#[derive(Debug)]
pub struct PointerInputContext {
    hit: Option<RaycastHit>,
    hovered_target: Option<Entity>,
    trigger_button: bool,
    trigger_button_prev: bool,
    module_enabled: bool,
    module_enabled_prev: bool,
}

impl Default for PointerInputContext {
    fn default() -> Self {
        Self {
            hit: None,
            hovered_target: None,
            trigger_button: false,
            trigger_button_prev: false,
            module_enabled: true,
            module_enabled_prev: true,
        }
    }
}

impl PointerInputContext {
    /// Record this frame's input. Call once per frame, before running
    /// [`crate::systems::pointer_input_system`].
    pub fn update(&mut self, hit: Option<RaycastHit>, trigger_button: bool, module_enabled: bool) {
        self.trigger_button_prev = self.trigger_button;
        self.trigger_button = trigger_button;
        self.module_enabled_prev = self.module_enabled;
        self.module_enabled = module_enabled;
        self.hit = hit;
    }

    /// This frame's raycast result
    pub fn hit(&self) -> Option<&RaycastHit> {
        self.hit.as_ref()
    }

    /// The entity the pointer was over after the last event dispatch
    pub fn hovered_target(&self) -> Option<Entity> {
        self.hovered_target
    }

    pub(crate) fn set_hovered_target(&mut self, target: Option<Entity>) {
        self.hovered_target = target;
    }

    /// Is the trigger held down?
    pub fn trigger_button(&self) -> bool {
        self.trigger_button
    }

    /// Did the trigger go from not pressed to pressed this frame?
    pub fn trigger_just_pressed(&self) -> bool {
        self.trigger_button && !self.trigger_button_prev
    }

    /// Did the trigger go from pressed to not pressed this frame?
    pub fn trigger_just_released(&self) -> bool {
        !self.trigger_button && self.trigger_button_prev
    }

    /// Is the input module driving the pointer active?
    pub fn module_enabled(&self) -> bool {
        self.module_enabled
    }

    /// Did the input module become active this frame?
    pub fn module_just_enabled(&self) -> bool {
        self.module_enabled && !self.module_enabled_prev
    }

    /// Did the input module become inactive this frame?
    pub fn module_just_disabled(&self) -> bool {
        !self.module_enabled && self.module_enabled_prev
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_edges() {
        let mut input_context = PointerInputContext::default();
        assert!(!input_context.trigger_just_pressed());

        input_context.update(None, true, true);
        assert!(input_context.trigger_just_pressed());
        assert!(!input_context.trigger_just_released());

        input_context.update(None, true, true);
        assert!(!input_context.trigger_just_pressed());

        input_context.update(None, false, true);
        assert!(input_context.trigger_just_released());
    }

    #[test]
    fn test_module_edges() {
        let mut input_context = PointerInputContext::default();

        // The module starts out enabled, so no edge on the first frame.
        input_context.update(None, false, true);
        assert!(!input_context.module_just_enabled());

        input_context.update(None, false, false);
        assert!(input_context.module_just_disabled());

        input_context.update(None, false, true);
        assert!(input_context.module_just_enabled());
    }
}
