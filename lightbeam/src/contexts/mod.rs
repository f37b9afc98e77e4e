pub mod input_context;

pub use input_context::{PointerInputContext, RaycastHit};
