use std::fs;

use jenga_engine::{generate_tower, TowerConfig, TowerVariant};

#[test]
fn preset_files_parse_and_match_builtin_presets() {
    for variant in [TowerVariant::Classic, TowerVariant::Heavy, TowerVariant::Tabletop] {
        let path = format!("presets/{}.json", variant.name());
        let json = fs::read_to_string(&path).expect("preset file should exist");

        let config = TowerConfig::from_json(&json).expect("preset should parse and validate");
        let builtin = TowerConfig::preset(variant);

        assert_eq!(config.variant, variant);
        assert_eq!(config.level_count, builtin.level_count);
        assert_eq!(config.spacing, builtin.spacing);
        assert_eq!(config.block_dimensions, builtin.block_dimensions);
        assert_eq!(config.block_material, builtin.block_material);
        assert_eq!(config.drag_constraint, builtin.drag_constraint);
        assert_eq!(config.ground.material, builtin.ground.material);

        // Same layout as the built-in preset.
        assert_eq!(generate_tower(&config).unwrap(), generate_tower(&builtin).unwrap());
    }
}

#[test]
fn builtin_presets_survive_json() {
    let config = TowerConfig::tabletop();
    let back = TowerConfig::from_json(&config.to_json()).unwrap();
    assert_eq!(back, config);
}
