use wasm_bindgen::prelude::*;

use crate::systems::interaction::{IgnoreReason, Transition};

/// Counters over the lifetime of one tower, plus layout build time.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TowerStats {
    pub(super) build_ms: f64,
    pub(super) blocks_built: u32,
    pub(super) grabs: u32,
    pub(super) implicit_releases: u32,
    pub(super) releases: u32,
    pub(super) clamps: u32,
    pub(super) ignored_picks: u32,
    pub(super) ignored_releases: u32,
    pub(super) gated_grabs: u32,
}

impl TowerStats {
    pub(crate) fn reset(&mut self) {
        *self = TowerStats::default();
    }

    pub(crate) fn record<H>(&mut self, transition: &Transition<H>) {
        match transition {
            Transition::Grabbed { replaced, .. } => {
                self.grabs += 1;
                if replaced.is_some() {
                    self.implicit_releases += 1;
                }
            }
            Transition::Released { .. } => self.releases += 1,
            Transition::Clamped { .. } => self.clamps += 1,
            Transition::Ignored(IgnoreReason::EmptyPick)
            | Transition::Ignored(IgnoreReason::NotABlock)
            | Transition::Ignored(IgnoreReason::UnknownBody) => self.ignored_picks += 1,
            Transition::Ignored(IgnoreReason::GateClosed) => self.gated_grabs += 1,
            Transition::Ignored(IgnoreReason::NotHolding) => self.ignored_releases += 1,
            Transition::Ignored(IgnoreReason::Unconstrained) => {}
        }
    }
}

#[wasm_bindgen]
impl TowerStats {
    #[wasm_bindgen(getter)]
    pub fn build_ms(&self) -> f64 { self.build_ms }
    #[wasm_bindgen(getter)]
    pub fn blocks_built(&self) -> u32 { self.blocks_built }
    #[wasm_bindgen(getter)]
    pub fn grabs(&self) -> u32 { self.grabs }
    #[wasm_bindgen(getter)]
    pub fn implicit_releases(&self) -> u32 { self.implicit_releases }
    #[wasm_bindgen(getter)]
    pub fn releases(&self) -> u32 { self.releases }
    #[wasm_bindgen(getter)]
    pub fn clamps(&self) -> u32 { self.clamps }
    #[wasm_bindgen(getter)]
    pub fn ignored_picks(&self) -> u32 { self.ignored_picks }
    #[wasm_bindgen(getter)]
    pub fn ignored_releases(&self) -> u32 { self.ignored_releases }
    #[wasm_bindgen(getter)]
    pub fn gated_grabs(&self) -> u32 { self.gated_grabs }
}
