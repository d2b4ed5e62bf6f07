//! Sphere-versus-heightfield contact physics
//!
//! Generates triangle terrain from closed-form height profiles, finds the face
//! supporting a point from above, and advances a sphere over it one frame at a
//! time, reporting the contact normal together with the projection and the
//! reflection of the incoming velocity.
//!
//! # Modules
//!
//! - [`math`]: vector and triangle helpers with explicit degenerate-input policies
//! - [`terrain`]: profiles, faces and terrain generation
//! - [`ground`]: topmost-face queries beneath a horizontal position
//! - [`BodyController`]: per-frame integration and contact resolution
//! - [`ContactWorld`]: terrain plus body, the surface a presentation layer drives

mod body;
mod config;
mod controller;
mod error;
pub mod ground;
mod input;
mod legacy;
pub mod math;
pub mod terrain;
mod walk;
mod world;

// Only compile WASM bindings when "wasm" feature is enabled
#[cfg(feature = "wasm")]
mod wasm;

pub use body::{BodyState, ContactVectors};
pub use config::{ControllerConfig, MotionMode, RecoveryBounds};
pub use controller::{BodyController, ContactEvent, StepOutput};
pub use error::{Result, TerrainError};
pub use ground::{query_ground, GroundHit};
pub use input::DirectionalInput;
pub use legacy::{LEGACY_PREFILTER_THRESHOLD, LEGACY_PUSH_EPS};
pub use terrain::{Face, FaceId, Terrain, TerrainParams, TerrainProfile};
pub use world::ContactWorld;

// Re-export for convenience
pub use glam;

#[cfg(feature = "wasm")]
pub use wasm::WasmContactWorld;
