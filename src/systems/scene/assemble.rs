use glam::Vec3;

use crate::domain::block::{BlockSpec, BLOCK_NAME, GROUND_NAME};
use crate::domain::config::TowerConfig;
use crate::systems::backend::{BodyDesc, SceneBackend};

/// Handles of the bodies created for one tower.
#[derive(Clone, Debug)]
pub struct TowerScene<H> {
    pub ground: H,
    /// One handle per block, in layout order.
    pub blocks: Vec<H>,
}

impl<H: Copy + Eq> TowerScene<H> {
    /// Layout index of the block behind `handle`.
    pub fn block_index(&self, handle: H) -> Option<usize> {
        self.blocks.iter().position(|&h| h == handle)
    }

    pub fn body_count(&self) -> usize {
        self.blocks.len() + 1
    }
}

pub fn ground_desc(config: &TowerConfig) -> BodyDesc {
    BodyDesc {
        name: GROUND_NAME,
        dimensions: config.ground.dimensions,
        position: Vec3::new(0.0, config.ground.position_y, 0.0),
        rotation: Vec3::ZERO,
        material: config.ground.material,
        block_index: None,
    }
}

pub fn block_desc(config: &TowerConfig, spec: &BlockSpec) -> BodyDesc {
    BodyDesc {
        name: BLOCK_NAME,
        dimensions: spec.dimensions,
        position: spec.position,
        rotation: spec.rotation(),
        material: config.block_material,
        block_index: Some(spec.index),
    }
}

/// Create the ground, then every block in layout order.
pub fn build_scene<B: SceneBackend>(
    config: &TowerConfig,
    specs: &[BlockSpec],
    backend: &mut B,
) -> TowerScene<B::Handle> {
    let ground = backend.create_box(&ground_desc(config));
    let blocks = specs
        .iter()
        .map(|spec| backend.create_box(&block_desc(config, spec)))
        .collect::<Vec<_>>();

    log::info!(
        "built {} tower: {} levels, {} blocks",
        config.variant.name(),
        config.level_count,
        blocks.len()
    );

    TowerScene { ground, blocks }
}
