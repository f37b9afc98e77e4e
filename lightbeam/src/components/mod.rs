pub mod hover_toggle;
pub mod laser_pointer;
pub mod local_transform;
pub mod material;

pub use hover_toggle::{HoverToggle, PointerTarget};
pub use laser_pointer::{
    LaserPointer, LaserSegment, PointerConfig, PointerState, PointerVisual, ReticlePlacement,
};
pub use local_transform::LocalTransform;
pub use material::Material;
