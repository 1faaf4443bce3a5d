use std::collections::HashMap;

use glam::Vec3;
use serde::Serialize;

use super::PhysicsBackend;

/// A mutation the host must apply to one of its bodies.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum BodyCommand {
    SetMass { body: u32, mass: f32 },
    SetPosition { body: u32, position: Vec3 },
}

#[derive(Clone, Copy, Debug, Default)]
struct ObservedBody {
    mass: Option<f32>,
    position: Option<Vec3>,
}

/// Backend for hosts that cannot be called back synchronously.
///
/// The host reports the state it observed for a body (`observe_*`) before
/// forwarding an event; writes are cached and queued as `BodyCommand`s that
/// the host drains and applies after the event returns.
#[derive(Default)]
pub struct CommandBackend {
    observed: HashMap<u32, ObservedBody>,
    pending: Vec<BodyCommand>,
}

impl CommandBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe_mass(&mut self, body: u32, mass: f32) {
        self.observed.entry(body).or_default().mass = Some(mass);
    }

    pub fn observe_position(&mut self, body: u32, position: Vec3) {
        self.observed.entry(body).or_default().position = Some(position);
    }

    /// Drop what was observed for `body` (e.g. after the host disposed it).
    pub fn forget(&mut self, body: u32) {
        self.observed.remove(&body);
    }

    pub fn is_observed(&self, body: u32) -> bool {
        self.observed.contains_key(&body)
    }

    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }

    pub fn pending(&self) -> &[BodyCommand] {
        &self.pending
    }

    pub fn drain(&mut self) -> Vec<BodyCommand> {
        std::mem::take(&mut self.pending)
    }

    pub fn drain_json(&mut self) -> String {
        let commands = self.drain();
        serde_json::to_string(&commands).unwrap_or_else(|_| "[]".to_string())
    }
}

impl PhysicsBackend for CommandBackend {
    type Handle = u32;

    fn mass(&self, body: u32) -> Option<f32> {
        self.observed.get(&body)?.mass
    }

    fn set_mass(&mut self, body: u32, mass: f32) {
        self.observed.entry(body).or_default().mass = Some(mass);
        self.pending.push(BodyCommand::SetMass { body, mass });
    }

    fn position(&self, body: u32) -> Option<Vec3> {
        self.observed.get(&body)?.position
    }

    fn set_position(&mut self, body: u32, position: Vec3) {
        self.observed.entry(body).or_default().position = Some(position);
        self.pending.push(BodyCommand::SetPosition { body, position });
    }
}
