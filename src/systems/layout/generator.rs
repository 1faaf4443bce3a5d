use glam::Vec3;

use crate::domain::block::{BlockSpec, BLOCKS_PER_LEVEL, QUARTER_TURN};
use crate::domain::config::TowerConfig;
use crate::domain::error::TowerResult;

/// The three lateral offsets of a level, in emission order.
#[inline]
pub fn slot_offsets(spacing: f32) -> [f32; BLOCKS_PER_LEVEL] {
    [-spacing, 0.0, spacing]
}

/// Build the blueprint of every block in the tower.
///
/// Fails only when `config` does not validate. A zero level count yields an
/// empty tower; zero spacing yields coincident blocks, which is left to the
/// physics engine to sort out.
pub fn generate_tower(config: &TowerConfig) -> TowerResult<Vec<BlockSpec>> {
    config.validate()?;

    let mut specs = Vec::with_capacity(config.level_count as usize * BLOCKS_PER_LEVEL);
    let offsets = slot_offsets(config.spacing);

    for level in 1..=config.level_count {
        let even = level % 2 == 0;
        let rotation_y = if even { QUARTER_TURN } else { 0.0 };
        let y = level as f32;

        for (slot, &offset) in offsets.iter().enumerate() {
            let position = if even {
                Vec3::new(0.0, y, offset)
            } else {
                Vec3::new(offset, y, 0.0)
            };

            specs.push(BlockSpec {
                index: specs.len(),
                level,
                slot: slot as u8,
                rotation_y,
                position,
                dimensions: config.block_dimensions,
            });
        }
    }

    Ok(specs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::TowerError;

    fn config(levels: u32, spacing: f32) -> TowerConfig {
        TowerConfig {
            level_count: levels,
            spacing,
            ..TowerConfig::classic()
        }
    }

    #[test]
    fn two_level_tower_matches_expected_layout() {
        let specs = generate_tower(&config(2, 2.5)).unwrap();
        let positions: Vec<Vec3> = specs.iter().map(|s| s.position).collect();
        assert_eq!(
            positions,
            vec![
                Vec3::new(-2.5, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(2.5, 1.0, 0.0),
                Vec3::new(0.0, 2.0, -2.5),
                Vec3::new(0.0, 2.0, 0.0),
                Vec3::new(0.0, 2.0, 2.5),
            ]
        );
        assert!(specs[..3].iter().all(|s| s.rotation_y == 0.0 && s.level == 1));
        assert!(specs[3..].iter().all(|s| s.rotation_y == QUARTER_TURN && s.level == 2));
    }

    #[test]
    fn zero_levels_is_empty() {
        let specs = generate_tower(&config(0, 2.5)).unwrap();
        assert!(specs.is_empty());
    }

    #[test]
    fn zero_spacing_stacks_coincident_blocks() {
        let specs = generate_tower(&config(1, 0.0)).unwrap();
        assert_eq!(specs.len(), 3);
        assert!(specs.iter().all(|s| s.position == Vec3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn indices_and_slots_follow_emission_order() {
        let specs = generate_tower(&config(4, 1.75)).unwrap();
        for (i, spec) in specs.iter().enumerate() {
            assert_eq!(spec.index, i);
            assert_eq!(spec.slot as usize, i % 3);
        }
    }

    #[test]
    fn invalid_config_fails_before_generating() {
        let mut bad = config(3, 2.5);
        bad.block_dimensions.width = -1.0;
        assert!(matches!(
            generate_tower(&bad),
            Err(TowerError::InvalidDimension { field: "block.width", .. })
        ));
    }
}
