use crate::domain::config::TowerConfig;
use crate::domain::error::TowerResult;
use crate::systems::backend::CommandBackend;
use crate::systems::interaction::InteractionController;
use crate::systems::layout::generate_tower;

use super::clock::timed;
use super::TowerCore;
use super::TowerStats;

pub(super) fn create_tower_core(config: TowerConfig) -> TowerResult<TowerCore> {
    let (specs, build_ms) = timed(|| generate_tower(&config));
    let specs = specs?;

    let stats = TowerStats {
        build_ms,
        blocks_built: specs.len() as u32,
        ..TowerStats::default()
    };

    log::info!(
        "{} tower ready: {} blocks in {:.3} ms, drag {:?}",
        config.variant.name(),
        specs.len(),
        build_ms,
        config.drag_constraint
    );

    Ok(TowerCore {
        controller: InteractionController::new(config.drag_constraint),
        backend: CommandBackend::new(),
        config,
        specs,
        stats,
    })
}
