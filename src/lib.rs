//! Jenga Engine - tower layout and grab/drag interaction core
//!
//! The rendering/physics engine lives on the host side (Babylon.js or
//! three.js in the browser, or a native engine through the backend traits).
//! This crate decides where every block goes and what happens to a block's
//! physics while the user holds it.
//!
//! Architecture:
//! - domain/   - Block blueprints, configuration, errors
//! - systems/  - Layout generator, interaction controller, host backends, scene assembly
//! - tower/    - Tower core and the wasm-bindgen facade

pub mod domain;
pub mod systems;
pub mod tower;

pub use domain::block::{BlockSpec, Dimensions, BLOCK_NAME, GROUND_NAME, QUARTER_TURN};
pub use domain::config::{DragConstraint, TowerConfig, TowerVariant};
pub use domain::error::{TowerError, TowerResult};
pub use systems::interaction::{GrabState, InteractionController, PickResult, Transition};
pub use systems::layout::generate_tower;
pub use tower::{Tower, TowerCore, TowerStats};

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook and `log` output to the browser console
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(target_arch = "wasm32")]
    {
        // A second init (hot reload) keeps the first logger.
        let _ = console_log::init_with_level(log::Level::Info);
    }

    web_sys::console::log_1(&"🧱 Jenga WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Rotation of even levels, radians
#[wasm_bindgen]
pub fn quarter_turn() -> f32 {
    QUARTER_TURN
}

#[wasm_bindgen]
pub fn block_name() -> String {
    BLOCK_NAME.to_string()
}

#[wasm_bindgen]
pub fn ground_name() -> String {
    GROUND_NAME.to_string()
}
