use crate::domain::block::{BlockSpec, BLOCKS_PER_LEVEL};
use crate::domain::config::TowerConfig;

/// Blocks of one level, relying on level-major ordering.
/// Returns an empty slice for level 0 or levels above the tower.
pub fn blocks_at_level(specs: &[BlockSpec], level: u32) -> &[BlockSpec] {
    if level == 0 {
        return &[];
    }
    let start = (level as usize - 1) * BLOCKS_PER_LEVEL;
    let end = start + BLOCKS_PER_LEVEL;
    specs.get(start..end).unwrap_or(&[])
}

/// Block at `len / 2`; the host uses it as the camera focus.
pub fn middle_block(specs: &[BlockSpec]) -> Option<&BlockSpec> {
    specs.get(specs.len() / 2)
}

/// Height of the top face of the highest level, or 0 for an empty tower.
pub fn tower_height(config: &TowerConfig) -> f32 {
    if config.level_count == 0 {
        return 0.0;
    }
    config.level_count as f32 + config.block_dimensions.height / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::layout::generate_tower;

    #[test]
    fn level_slices() {
        let config = TowerConfig { level_count: 5, ..TowerConfig::classic() };
        let specs = generate_tower(&config).unwrap();

        assert!(blocks_at_level(&specs, 0).is_empty());
        assert!(blocks_at_level(&specs, 6).is_empty());
        let third = blocks_at_level(&specs, 3);
        assert_eq!(third.len(), 3);
        assert!(third.iter().all(|s| s.level == 3));
    }

    #[test]
    fn middle_of_default_tower() {
        let config = TowerConfig::classic();
        let specs = generate_tower(&config).unwrap();
        let mid = middle_block(&specs).unwrap();
        assert_eq!(mid.index, 27);
        assert_eq!(mid.level, 10);
        assert!(middle_block(&[]).is_none());
    }

    #[test]
    fn height_of_top_face() {
        assert_eq!(tower_height(&TowerConfig::classic()), 18.5);
        let empty = TowerConfig { level_count: 0, ..TowerConfig::classic() };
        assert_eq!(tower_height(&empty), 0.0);
    }
}
