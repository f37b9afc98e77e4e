#![deny(missing_docs)]

//! Welcome to lightbeam!
//!
//! lightbeam is a small toolkit for drawing VR laser pointers. It takes the intersection your
//! input system found this frame and works out what the host renderer should draw: a reticle
//! transform that keeps a constant apparent size on screen, and a laser line segment with a
//! near and far color.
//!
//! The crate is built around [`hecs`]: attach a [`components::LaserPointer`] to an entity with
//! a [`components::LocalTransform`], feed a [`contexts::PointerInputContext`] each frame, then
//! run [`systems::pointer_input_system`] followed by [`systems::pointer_visuals_system`].
//! Rendering, input devices and scene raycasting stay in the host application - lightbeam only
//! decides where things go.

pub use glam;
pub use hecs;
pub use lightbeam_error::LightbeamError;
pub use mint;
pub use ray::Ray;

/// Components are data that are used to update the simulation and interact with the external world
pub mod components;
/// Contexts are wrappers around external state that the host application feeds in each frame
pub mod contexts;
mod lightbeam_error;
mod ray;
/// Systems are functions called each frame to update either the external state or the current simulation
pub mod systems;
/// Kitchen sink utility functions
pub mod util;

/// lightbeam result type
pub type LightbeamResult<T> = std::result::Result<T, LightbeamError>;

/// Size of the reticle in meters as seen from 1 meter away
pub const RETICLE_SIZE: f32 = 0.01;

/// Small offset to prevent z-fighting of the reticle (meters)
pub const Z_OFFSET_EPSILON: f32 = 0.1;
