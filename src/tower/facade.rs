use glam::Vec3;
use wasm_bindgen::prelude::*;

use crate::domain::config::TowerConfig;
use crate::systems::interaction::{IgnoreReason, Transition};

use super::tower_stats::TowerStats;
use super::TowerCore;

/// Short name of a transition for the JS side.
fn transition_name(transition: &Transition<u32>) -> &'static str {
    match transition {
        Transition::Grabbed { replaced: None, .. } => "grabbed",
        Transition::Grabbed { replaced: Some(_), .. } => "regrabbed",
        Transition::Released { .. } => "released",
        Transition::Clamped { .. } => "clamped",
        Transition::Ignored(IgnoreReason::EmptyPick) => "ignored:empty_pick",
        Transition::Ignored(IgnoreReason::NotABlock) => "ignored:not_a_block",
        Transition::Ignored(IgnoreReason::GateClosed) => "ignored:gate_closed",
        Transition::Ignored(IgnoreReason::UnknownBody) => "ignored:unknown_body",
        Transition::Ignored(IgnoreReason::NotHolding) => "ignored:not_holding",
        Transition::Ignored(IgnoreReason::Unconstrained) => "ignored:unconstrained",
    }
}

#[wasm_bindgen]
pub struct Tower {
    core: TowerCore,
}

#[wasm_bindgen]
impl Tower {
    /// Create a tower from a preset name: `classic`, `heavy` or `tabletop`.
    #[wasm_bindgen(constructor)]
    pub fn new(preset: &str) -> Result<Tower, JsValue> {
        let core = TowerCore::from_preset(preset).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: String) -> Result<Tower, JsValue> {
        let core = TowerCore::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn block_count(&self) -> usize { self.core.block_count() }

    #[wasm_bindgen(getter)]
    pub fn level_count(&self) -> u32 { self.core.config().level_count }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    pub fn block_specs_json(&self) -> String {
        self.core.block_specs_json()
    }

    /// Packed `[x, y, z, rotation_y]` per block (Float32Array on the JS side)
    pub fn block_transforms(&self) -> Vec<f32> {
        self.core.block_transforms()
    }

    pub fn scene_descriptor_json(&self) -> String {
        self.core.scene_descriptor().to_json()
    }

    /// `button` is `PointerEvent.button`
    pub fn on_pointer_down(&mut self, button: i16) {
        self.core.on_pointer_down(button);
    }

    /// Forward a ray-pick hit together with the body's current mass and position
    pub fn on_grab_start(&mut self, body: u32, name: &str, mass: f32, x: f32, y: f32, z: f32) -> String {
        let t = self.core.on_grab_start(body, name, mass, Vec3::new(x, y, z));
        transition_name(&t).to_string()
    }

    /// Forward a pick that hit nothing
    pub fn on_grab_miss(&mut self) -> String {
        let t = self.core.on_grab_miss();
        transition_name(&t).to_string()
    }

    pub fn on_drag_update(&mut self, x: f32, y: f32, z: f32) -> String {
        let t = self.core.on_drag_update(Vec3::new(x, y, z));
        transition_name(&t).to_string()
    }

    pub fn on_grab_end(&mut self) -> String {
        let t = self.core.on_grab_end();
        transition_name(&t).to_string()
    }

    /// Pending `set_mass` / `set_position` commands as a JSON array; clears the queue.
    pub fn drain_commands_json(&mut self) -> String {
        self.core.drain_commands_json()
    }

    #[wasm_bindgen(getter)]
    pub fn is_holding(&self) -> bool { self.core.is_holding() }

    /// Host id of the held block, if any
    #[wasm_bindgen(getter)]
    pub fn held_block(&self) -> Option<u32> { self.core.held_block() }

    pub fn stats(&self) -> TowerStats {
        self.core.stats()
    }

    pub fn reset_stats(&mut self) {
        self.core.reset_stats();
    }
}

/// Default config for a preset as JSON, for hosts that want to tweak it
/// before calling `Tower.fromConfigJson`.
#[wasm_bindgen]
pub fn preset_config_json(preset: &str) -> Result<String, JsValue> {
    TowerConfig::preset_by_name(preset)
        .map(|c| c.to_json())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
