//! Host seam - the rendering/physics engine seen from the core.
//!
//! The core never owns bodies. It creates them through `SceneBackend` and
//! reads or writes their physical state through `PhysicsBackend`; every such
//! write made on behalf of a pointer interaction goes through the
//! interaction controller.

mod command;
mod memory;

use glam::Vec3;
use serde::Serialize;

use crate::domain::block::Dimensions;
use crate::domain::config::MaterialProps;

pub use command::{BodyCommand, CommandBackend};
pub use memory::{BodyHandle, MemoryBackend, MemoryBody};

/// Mass and position access on engine-owned bodies.
pub trait PhysicsBackend {
    type Handle: Copy + Eq + std::fmt::Debug;

    /// `None` when the handle no longer names a body.
    fn mass(&self, body: Self::Handle) -> Option<f32>;
    fn set_mass(&mut self, body: Self::Handle, mass: f32);

    fn position(&self, body: Self::Handle) -> Option<Vec3>;
    fn set_position(&mut self, body: Self::Handle, position: Vec3);
}

/// Body creation primitive.
pub trait SceneBackend: PhysicsBackend {
    fn create_box(&mut self, desc: &BodyDesc) -> Self::Handle;
}

/// Everything the host needs to instantiate one box body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BodyDesc {
    /// Pick tag: `BLOCK_NAME` for tower blocks, `GROUND_NAME` for the ground.
    pub name: &'static str,
    pub dimensions: Dimensions,
    pub position: Vec3,
    /// Euler angles, radians.
    pub rotation: Vec3,
    pub material: MaterialProps,
    /// Index into the generated layout; `None` for non-block bodies.
    pub block_index: Option<usize>,
}
