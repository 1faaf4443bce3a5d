//! Tower - one configured tower and its live interaction state.
//!
//! `TowerCore` is the Rust-side owner: config, generated layout, the
//! interaction controller and the command queue the host drains.
//! `Tower` (facade.rs) is the wasm-bindgen wrapper the JS host talks to.
//!
//! Host body ids are opaque `u32`s chosen by the host. Before forwarding a
//! pointer event the host reports what it observed about the picked body;
//! mutations come back through `drain_commands_json`.

use glam::Vec3;

use crate::domain::block::BlockSpec;
use crate::domain::config::TowerConfig;
use crate::domain::error::TowerResult;
use crate::systems::backend::{BodyCommand, CommandBackend};
use crate::systems::interaction::{InteractionController, Transition};
use crate::systems::scene::SceneDescriptor;

#[path = "stats/clock.rs"]
mod clock;
#[path = "stats/tower_stats.rs"]
mod tower_stats;
#[path = "init/init.rs"]
mod init;
#[path = "events/events.rs"]
mod events;
mod facade;

pub use facade::{preset_config_json, Tower};
pub use tower_stats::TowerStats;

pub struct TowerCore {
    config: TowerConfig,
    specs: Vec<BlockSpec>,
    controller: InteractionController<u32>,
    backend: CommandBackend,
    stats: TowerStats,
}

impl TowerCore {
    /// Validate `config` and generate its layout.
    pub fn new(config: TowerConfig) -> TowerResult<Self> {
        init::create_tower_core(config)
    }

    pub fn from_preset(name: &str) -> TowerResult<Self> {
        Self::new(TowerConfig::preset_by_name(name)?)
    }

    pub fn from_json(json: &str) -> TowerResult<Self> {
        Self::new(TowerConfig::from_json(json)?)
    }

    pub fn config(&self) -> &TowerConfig { &self.config }

    pub fn specs(&self) -> &[BlockSpec] { &self.specs }

    pub fn block_count(&self) -> usize { self.specs.len() }

    pub fn block_specs_json(&self) -> String {
        serde_json::to_string(&self.specs).unwrap_or_else(|_| "[]".to_string())
    }

    /// `[x, y, z, rotation_y]` per block, in layout order.
    pub fn block_transforms(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.specs.len() * 4);
        for spec in &self.specs {
            out.extend_from_slice(&[spec.position.x, spec.position.y, spec.position.z, spec.rotation_y]);
        }
        out
    }

    pub fn scene_descriptor(&self) -> SceneDescriptor {
        crate::systems::scene::describe_scene(&self.config, &self.specs)
    }

    pub fn on_pointer_down(&mut self, button: i16) {
        events::pointer_down(self, button)
    }

    /// Forward a pick. `mass` and `position` are what the host currently sees
    /// on `body`; they are ignored for non-block picks.
    pub fn on_grab_start(&mut self, body: u32, name: &str, mass: f32, position: Vec3) -> Transition<u32> {
        events::grab_start(self, Some((body, name, mass, position)))
    }

    /// Pointer went down over empty space.
    pub fn on_grab_miss(&mut self) -> Transition<u32> {
        events::grab_start(self, None)
    }

    /// `position` is where the host's drag primitive moved the held block.
    pub fn on_drag_update(&mut self, position: Vec3) -> Transition<u32> {
        events::drag_update(self, position)
    }

    pub fn on_grab_end(&mut self) -> Transition<u32> {
        events::grab_end(self)
    }

    pub fn pending_commands(&self) -> &[BodyCommand] {
        self.backend.pending()
    }

    pub fn drain_commands(&mut self) -> Vec<BodyCommand> {
        self.backend.drain()
    }

    pub fn drain_commands_json(&mut self) -> String {
        self.backend.drain_json()
    }

    pub fn is_holding(&self) -> bool { self.controller.is_holding() }

    pub fn held_block(&self) -> Option<u32> { self.controller.held() }

    pub fn stats(&self) -> TowerStats { self.stats.clone() }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
