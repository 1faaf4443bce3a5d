use glam::Vec3;

use crate::systems::interaction::PickResult;

use super::{BodyDesc, PhysicsBackend, SceneBackend};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub u32);

/// Live state of one body in a `MemoryBackend`.
#[derive(Clone, Debug)]
pub struct MemoryBody {
    pub desc: BodyDesc,
    pub mass: f32,
    pub position: Vec3,
}

/// Backend that keeps bodies in a `Vec` without simulating them.
///
/// Used by native hosts that drive their own stepping and by the tests.
#[derive(Default)]
pub struct MemoryBackend {
    bodies: Vec<MemoryBody>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&MemoryBody> {
        self.bodies.get(handle.0 as usize)
    }

    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &MemoryBody)> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(i, b)| (BodyHandle(i as u32), b))
    }

    /// Pick result as the host's ray picker would report a hit on `handle`.
    pub fn pick(&self, handle: BodyHandle) -> PickResult<BodyHandle> {
        match self.body(handle) {
            Some(body) => PickResult::hit(handle, body.desc.name),
            None => PickResult::miss(),
        }
    }

    /// Handle of the body created for layout block `index`.
    pub fn block_handle(&self, index: usize) -> Option<BodyHandle> {
        self.bodies()
            .find(|(_, b)| b.desc.block_index == Some(index))
            .map(|(h, _)| h)
    }
}

impl PhysicsBackend for MemoryBackend {
    type Handle = BodyHandle;

    fn mass(&self, body: BodyHandle) -> Option<f32> {
        self.body(body).map(|b| b.mass)
    }

    fn set_mass(&mut self, body: BodyHandle, mass: f32) {
        if let Some(b) = self.bodies.get_mut(body.0 as usize) {
            b.mass = mass;
        }
    }

    fn position(&self, body: BodyHandle) -> Option<Vec3> {
        self.body(body).map(|b| b.position)
    }

    fn set_position(&mut self, body: BodyHandle, position: Vec3) {
        if let Some(b) = self.bodies.get_mut(body.0 as usize) {
            b.position = position;
        }
    }
}

impl SceneBackend for MemoryBackend {
    fn create_box(&mut self, desc: &BodyDesc) -> BodyHandle {
        let handle = BodyHandle(self.bodies.len() as u32);
        self.bodies.push(MemoryBody {
            desc: desc.clone(),
            mass: desc.material.mass,
            position: desc.position,
        });
        handle
    }
}
