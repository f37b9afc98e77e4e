//! The laser pointer visual and its per-frame state

use glam::{Vec3, Vec4};
use hecs::Entity;
use serde::{Deserialize, Serialize};

use crate::{LightbeamError, LightbeamResult, Ray, RETICLE_SIZE, Z_OFFSET_EPSILON};

/// Configuration for a [`LaserPointer`], fixed once the pointer is set up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerConfig {
    /// Color of the laser pointer including alpha transparency
    pub laser_color: Vec4,
    /// Maximum distance of the laser (meters). Sensible values are 0-10.
    pub max_laser_distance: f32,
    /// Maximum distance of the reticle (meters). Sensible values are 0.4-10.
    pub max_reticle_distance: f32,
    /// Size of the reticle in meters as seen from 1 meter away
    pub reticle_size: f32,
    /// Offset a renderer can apply to keep the reticle from z-fighting its target (meters)
    pub z_offset_epsilon: f32,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            laser_color: Vec4::new(1.0, 1.0, 1.0, 0.25),
            max_laser_distance: 0.75,
            max_reticle_distance: 2.5,
            reticle_size: RETICLE_SIZE,
            z_offset_epsilon: Z_OFFSET_EPSILON,
        }
    }
}

impl PointerConfig {
    /// Check that distances and sizes are within their documented ranges.
    ///
    /// The placement math never calls this - it treats its inputs as well
    /// formed. Hosts that build configurations from user input or files can
    /// call it once at setup.
    pub fn validate(&self) -> LightbeamResult<()> {
        if !(self.max_laser_distance > 0.0 && self.max_laser_distance <= 10.0) {
            return Err(LightbeamError::InvalidConfigurationError(
                "max_laser_distance must be within (0, 10]",
            ));
        }
        if !(self.max_reticle_distance >= 0.4 && self.max_reticle_distance <= 10.0) {
            return Err(LightbeamError::InvalidConfigurationError(
                "max_reticle_distance must be within [0.4, 10]",
            ));
        }
        if !(self.reticle_size > 0.0) {
            return Err(LightbeamError::InvalidConfigurationError(
                "reticle_size must be positive",
            ));
        }
        Ok(())
    }
}

/// The pointer's view of the current intersection, written by the input
/// callbacks and read by [`crate::systems::pointer_visuals_system`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerState {
    /// Is the pointer currently over a target?
    pub is_intersecting: bool,
    /// The point where the pointer ray met the target
    pub intersection_point: Vec3,
    /// The ray that produced the intersection
    pub intersection_ray: Ray,
}

impl PointerState {
    fn set(&mut self, intersection_point: Vec3, intersection_ray: Ray) {
        self.intersection_point = intersection_point;
        self.intersection_ray = intersection_ray;
    }
}

/// Where the reticle should be drawn this frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReticlePlacement {
    /// World-space position of the reticle
    pub position: Vec3,
    /// Uniform scale that keeps the reticle a constant apparent size on screen
    pub scale: f32,
}

/// The laser line to be drawn this frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LaserSegment {
    /// Start of the line, at the pointer origin
    pub start: Vec3,
    /// End of the line
    pub end: Vec3,
    /// Color at the start of the line
    pub near_color: Vec4,
    /// Color at the end of the line
    pub far_color: Vec4,
}

/// A component added to an entity to draw a laser pointer from its
/// [`super::LocalTransform`].
///
/// The laser visual is important to help users locate their cursor when it's
/// not directly in their field of view. Requires
/// [`crate::systems::pointer_visuals_system`].
#[derive(Debug, Clone)]
pub struct LaserPointer {
    /// The pointer's fixed configuration
    pub config: PointerConfig,
    /// What the pointer is currently intersecting
    pub state: PointerState,
    /// An optional entity whose [`super::LocalTransform`] is moved to the
    /// reticle placement each tick
    pub reticle: Option<Entity>,
    /// Should the host renderer draw the laser? Toggled by the input module;
    /// placement keeps running either way.
    pub visible: bool,
    /// The suggested rendering alpha value of the laser's near end. Held at
    /// 1.0; a hook for fading the laser out when the controller is near the
    /// user's face.
    pub alpha_value: f32,
    /// The reticle placement computed this tick
    pub reticle_placement: ReticlePlacement,
    /// The laser segment computed this tick
    pub segment: LaserSegment,
}

impl Default for LaserPointer {
    fn default() -> Self {
        Self {
            config: Default::default(),
            state: Default::default(),
            reticle: None,
            visible: true,
            alpha_value: 1.0,
            reticle_placement: Default::default(),
            segment: Default::default(),
        }
    }
}

impl LaserPointer {
    /// Create a laser pointer with the given configuration
    pub fn new(config: PointerConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Attach a reticle entity to the pointer
    pub fn with_reticle(mut self, reticle: Entity) -> Self {
        self.reticle = Some(reticle);
        self
    }
}

/// The capability set of a pointer visual, called by the host's input module.
///
/// [`LaserPointer`] implements this; hosts with their own visuals can
/// implement it instead and reuse the same input plumbing.
pub trait PointerVisual {
    /// The pointer has started intersecting `target`
    fn on_pointer_enter(
        &mut self,
        target: Entity,
        intersection_point: Vec3,
        intersection_ray: Ray,
        is_interactive: bool,
    );

    /// The pointer is still intersecting `target`, one call per frame
    fn on_pointer_hover(
        &mut self,
        target: Entity,
        intersection_point: Vec3,
        intersection_ray: Ray,
        is_interactive: bool,
    );

    /// The pointer has stopped intersecting `target`
    fn on_pointer_exit(&mut self, target: Entity);

    /// The user has pressed the pointer down on the target. Implementations
    /// can add visual feedback such as laser or cursor color changes here;
    /// the default does nothing.
    fn on_pointer_press(&mut self) {}

    /// The user has released the pointer from the target. Implementations
    /// can add visual feedback such as laser or cursor color changes here;
    /// the default does nothing.
    fn on_pointer_release(&mut self) {}

    /// The input module driving this pointer has been enabled
    fn on_input_module_enabled(&mut self);

    /// The input module driving this pointer has been disabled
    fn on_input_module_disabled(&mut self);

    /// How far the pointer can reach
    fn max_pointer_distance(&self) -> f32;

    /// The inner and outer radius of the pointer at its origin, for hosts
    /// that raycast with a cone or sphere. The default is a point pointer.
    fn pointer_radius(&self) -> (f32, f32) {
        (0.0, 0.0)
    }
}

impl PointerVisual for LaserPointer {
    fn on_pointer_enter(
        &mut self,
        _target: Entity,
        intersection_point: Vec3,
        intersection_ray: Ray,
        _is_interactive: bool,
    ) {
        self.state.set(intersection_point, intersection_ray);
        self.state.is_intersecting = true;
    }

    fn on_pointer_hover(
        &mut self,
        _target: Entity,
        intersection_point: Vec3,
        intersection_ray: Ray,
        _is_interactive: bool,
    ) {
        self.state.set(intersection_point, intersection_ray);
    }

    fn on_pointer_exit(&mut self, _target: Entity) {
        self.state = PointerState::default();
    }

    fn on_input_module_enabled(&mut self) {
        self.visible = true;
    }

    fn on_input_module_disabled(&mut self) {
        self.visible = false;
    }

    fn max_pointer_distance(&self) -> f32 {
        self.config.max_reticle_distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec3;

    #[test]
    fn test_defaults() {
        let config = PointerConfig::default();
        assert_eq!(config.laser_color, Vec4::new(1.0, 1.0, 1.0, 0.25));
        assert_eq!(config.max_laser_distance, 0.75);
        assert_eq!(config.max_reticle_distance, 2.5);
        assert_eq!(config.reticle_size, RETICLE_SIZE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        assert!(PointerConfig::default().validate().is_ok());

        let config = PointerConfig {
            max_laser_distance: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = PointerConfig {
            max_reticle_distance: 0.2,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = PointerConfig {
            reticle_size: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_round_trip() {
        let config = PointerConfig {
            laser_color: Vec4::new(0.0, 0.5, 1.0, 0.25),
            max_laser_distance: 5.0,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: PointerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_exit_resets_state() {
        let mut pointer = LaserPointer::default();
        let mut world = hecs::World::new();
        let target = world.spawn(());

        let ray = Ray::new(Vec3::ZERO, vec3(0.0, 0.0, -1.0));
        pointer.on_pointer_enter(target, vec3(0.0, 0.0, -1.0), ray, true);
        assert!(pointer.state.is_intersecting);

        pointer.on_pointer_exit(target);
        assert_eq!(pointer.state, PointerState::default());
    }
}
