//! Tower configuration and the built-in variant presets.
//!
//! Three presets mirror the scenes the tower has shipped with:
//! - `classic`:  wide blocks, light, kinematic grab
//! - `heavy`:    same layout, heavier and slicker blocks
//! - `tabletop`: narrower blocks on a small floor, height-locked drag
//!
//! JSON configs may omit any field. `variant` is resolved first (default
//! `classic`) and every missing field takes that preset's value; nested
//! objects are overlaid field by field.

use std::str::FromStr;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::block::Dimensions;
use super::error::{TowerError, TowerResult};

pub const DEFAULT_LEVEL_COUNT: u32 = 18;
pub const MAX_LEVELS: u32 = 10_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TowerVariant {
    #[default]
    Classic,
    Heavy,
    Tabletop,
}

impl TowerVariant {
    pub fn name(&self) -> &'static str {
        match self {
            TowerVariant::Classic => "classic",
            TowerVariant::Heavy => "heavy",
            TowerVariant::Tabletop => "tabletop",
        }
    }
}

impl FromStr for TowerVariant {
    type Err = TowerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(TowerVariant::Classic),
            "heavy" => Ok(TowerVariant::Heavy),
            "tabletop" => Ok(TowerVariant::Tabletop),
            other => Err(TowerError::UnknownPreset(other.to_string())),
        }
    }
}

/// How a grabbed block is kept from being lifted out of the stack.
///
/// `Kinematic` zeroes the block's mass while held, so it ignores collisions
/// and follows the pointer. `HeightLock` keeps the block simulated but pins
/// its `y` on every drag update, so it still collides horizontally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragConstraint {
    #[default]
    Kinematic,
    HeightLock,
}

/// Rigid-body material passed to the host when it creates a body.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialProps {
    pub mass: f32,
    pub friction: f32,
    pub restitution: f32,
}

impl MaterialProps {
    pub const fn new(mass: f32, friction: f32, restitution: f32) -> Self {
        Self { mass, friction, restitution }
    }

    /// `fields` names mass, friction and restitution in error messages.
    fn validate(&self, fields: [&'static str; 3]) -> TowerResult<()> {
        let [mass_field, friction_field, restitution_field] = fields;
        for (field, value) in [(mass_field, self.mass), (friction_field, self.friction)] {
            if !value.is_finite() || value < 0.0 {
                return Err(TowerError::InvalidMaterial { field, value });
            }
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(TowerError::InvalidMaterial {
                field: restitution_field,
                value: self.restitution,
            });
        }
        Ok(())
    }
}

/// Linear RGB colour, components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color3 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color3 {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self { r, g, b }
    }

    pub const PURPLE: Color3 = Color3::new(0.5, 0.0, 0.5);
    pub const WHITE: Color3 = Color3::new(1.0, 1.0, 1.0);
}

/// Static ground body. `position_y` is the centre of the box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroundConfig {
    pub dimensions: Dimensions,
    pub position_y: f32,
    pub material: MaterialProps,
    pub color: Color3,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CameraRig {
    /// Orbiting camera around `target`; `position` overrides the orbit angles at startup.
    ArcRotate {
        alpha: f32,
        beta: f32,
        radius: f32,
        position: Vec3,
        target: Vec3,
    },
    Perspective {
        fov_deg: f32,
        near: f32,
        far: f32,
        position: Vec3,
        target: Vec3,
        /// Orbit controls cannot tilt below this polar angle (radians).
        max_polar_angle: f32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LightRig {
    Directional {
        direction: Vec3,
        position: Vec3,
        shadow_map_size: u32,
    },
    Hemisphere {
        sky: Color3,
        ground: Color3,
        intensity: f32,
    },
}

/// Everything the tower needs at startup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TowerConfig {
    pub variant: TowerVariant,
    pub level_count: u32,
    /// Distance between neighbouring slot centres within a level.
    pub spacing: f32,
    pub block_dimensions: Dimensions,
    pub block_material: MaterialProps,
    pub drag_constraint: DragConstraint,
    pub ground: GroundConfig,
    pub camera: CameraRig,
    pub light: LightRig,
    pub clear_color: Color3,
}

impl Default for TowerConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl TowerConfig {
    pub fn preset(variant: TowerVariant) -> Self {
        match variant {
            TowerVariant::Classic => Self::classic(),
            TowerVariant::Heavy => Self::heavy(),
            TowerVariant::Tabletop => Self::tabletop(),
        }
    }

    pub fn preset_by_name(name: &str) -> TowerResult<Self> {
        Ok(Self::preset(name.parse()?))
    }

    pub fn classic() -> Self {
        Self {
            variant: TowerVariant::Classic,
            level_count: DEFAULT_LEVEL_COUNT,
            spacing: 2.5,
            block_dimensions: Dimensions::new(2.0, 1.0, 7.0),
            block_material: MaterialProps::new(10.0, 0.5, 0.3),
            drag_constraint: DragConstraint::Kinematic,
            ground: GroundConfig {
                dimensions: Dimensions::new(1000.0, 1.0, 1000.0),
                position_y: 0.0,
                material: MaterialProps::new(0.0, 1.0, 0.5),
                color: Color3::new(0.5, 0.5, 0.5),
            },
            camera: CameraRig::ArcRotate {
                alpha: 3.0 * std::f32::consts::PI / 2.0,
                beta: std::f32::consts::FRAC_PI_2,
                radius: 50.0,
                position: Vec3::new(0.0, 40.0, 40.0),
                target: Vec3::ZERO,
            },
            light: LightRig::Directional {
                direction: Vec3::new(0.2, -1.0, 0.0),
                position: Vec3::new(0.0, 80.0, 0.0),
                shadow_map_size: 2048,
            },
            clear_color: Color3::PURPLE,
        }
    }

    pub fn heavy() -> Self {
        let mut config = Self::classic();
        config.variant = TowerVariant::Heavy;
        config.block_material = MaterialProps::new(20.0, 0.3, 0.3);
        config.ground.material = MaterialProps::new(0.0, 0.5, 0.5);
        if let CameraRig::ArcRotate { position, .. } = &mut config.camera {
            *position = Vec3::new(0.0, 30.0, 30.0);
        }
        config
    }

    pub fn tabletop() -> Self {
        Self {
            variant: TowerVariant::Tabletop,
            level_count: DEFAULT_LEVEL_COUNT,
            spacing: 1.75,
            block_dimensions: Dimensions::new(1.5, 1.0, 5.0),
            block_material: MaterialProps::new(10.0, 0.5, 0.3),
            drag_constraint: DragConstraint::HeightLock,
            ground: GroundConfig {
                dimensions: Dimensions::new(25.0, 0.02, 25.0),
                position_y: 0.48,
                material: MaterialProps::new(0.0, 1.0, 0.5),
                color: Color3::WHITE,
            },
            camera: CameraRig::Perspective {
                fov_deg: 50.0,
                near: 0.1,
                far: 1000.0,
                position: Vec3::new(0.0, 25.0, 25.0),
                target: Vec3::new(0.0, 10.0, 0.0),
                max_polar_angle: 1.5,
            },
            light: LightRig::Hemisphere {
                sky: Color3::from_hex(0xFFFFFF),
                ground: Color3::from_hex(0x080820),
                intensity: 1.2,
            },
            clear_color: Color3::WHITE,
        }
    }

    /// Parse and validate a JSON config, filling gaps from the named variant's preset.
    pub fn from_json(json: &str) -> TowerResult<Self> {
        let patch: Value = serde_json::from_str(json)?;
        let variant = match patch.get("variant") {
            Some(v) => TowerVariant::deserialize(v)?,
            None => TowerVariant::default(),
        };

        let mut merged = serde_json::to_value(Self::preset(variant))?;
        overlay(&mut merged, patch);
        let config = TowerConfig::deserialize(merged)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Reject configurations that would silently produce degenerate geometry.
    pub fn validate(&self) -> TowerResult<()> {
        if self.level_count > MAX_LEVELS {
            return Err(TowerError::TooManyLevels {
                requested: self.level_count,
                max: MAX_LEVELS,
            });
        }
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(TowerError::InvalidSpacing(self.spacing));
        }

        check_dimensions(&self.block_dimensions, ["block.width", "block.height", "block.depth"])?;
        check_dimensions(&self.ground.dimensions, ["ground.width", "ground.height", "ground.depth"])?;

        self.block_material
            .validate(["block.mass", "block.friction", "block.restitution"])?;
        self.ground
            .material
            .validate(["ground.mass", "ground.friction", "ground.restitution"])?;
        Ok(())
    }
}

/// Write `patch` over `base`. Objects merge key by key; a tagged object whose
/// `kind` changes, and any non-object value, replaces the base outright.
fn overlay(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(target), Value::Object(fields))
            if !fields.contains_key("kind") || target.get("kind") == fields.get("kind") =>
        {
            for (key, value) in fields {
                match target.get_mut(&key) {
                    Some(slot) => overlay(slot, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

fn check_dimensions(dims: &Dimensions, fields: [&'static str; 3]) -> TowerResult<()> {
    let values = [dims.width, dims.height, dims.depth];
    for (field, value) in fields.into_iter().zip(values) {
        if !value.is_finite() || value <= 0.0 {
            return Err(TowerError::InvalidDimension { field, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_validate() {
        for variant in [TowerVariant::Classic, TowerVariant::Heavy, TowerVariant::Tabletop] {
            let config = TowerConfig::preset(variant);
            assert!(config.validate().is_ok(), "{} should validate", variant.name());
            assert_eq!(config.variant, variant);
        }
    }

    #[test]
    fn preset_names_parse_case_insensitively() {
        assert_eq!("Heavy".parse::<TowerVariant>().unwrap(), TowerVariant::Heavy);
        assert!(matches!(
            TowerConfig::preset_by_name("wobbly"),
            Err(TowerError::UnknownPreset(name)) if name == "wobbly"
        ));
    }

    #[test]
    fn partial_json_falls_back_to_classic() {
        let config = TowerConfig::from_json(r#"{"level_count": 2, "spacing": 2.5}"#).unwrap();
        assert_eq!(config.level_count, 2);
        assert_eq!(config.block_material.mass, 10.0);
        assert_eq!(config.drag_constraint, DragConstraint::Kinematic);
    }

    #[test]
    fn variant_only_json_matches_its_preset() {
        for variant in [TowerVariant::Classic, TowerVariant::Heavy, TowerVariant::Tabletop] {
            let json = format!(r#"{{"variant": "{}"}}"#, variant.name());
            assert_eq!(TowerConfig::from_json(&json).unwrap(), TowerConfig::preset(variant));
        }
    }

    #[test]
    fn partial_json_keeps_variant_defaults() {
        let config = TowerConfig::from_json(r#"{"variant": "heavy", "level_count": 4}"#).unwrap();
        assert_eq!(config.level_count, 4);
        assert_eq!(config.block_material, MaterialProps::new(20.0, 0.3, 0.3));
        assert_eq!(config.ground.material.friction, 0.5);

        let config = TowerConfig::from_json(
            r#"{"variant": "tabletop", "block_material": {"mass": 12.0}, "ground": {"color": {"r": 0.0, "g": 0.0, "b": 0.0}}}"#,
        )
        .unwrap();
        assert_eq!(config.spacing, 1.75);
        assert_eq!(config.block_dimensions, Dimensions::new(1.5, 1.0, 5.0));
        assert_eq!(config.drag_constraint, DragConstraint::HeightLock);
        assert_eq!(config.block_material, MaterialProps::new(12.0, 0.5, 0.3));
        assert_eq!(config.ground.position_y, 0.48);
        assert_eq!(config.ground.color, Color3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn camera_kind_change_replaces_the_rig() {
        let config = TowerConfig::from_json(
            r#"{"variant": "tabletop", "camera": {"kind": "arc_rotate", "alpha": 0.0, "beta": 1.0, "radius": 30.0, "position": [0.0, 20.0, 20.0], "target": [0.0, 0.0, 0.0]}}"#,
        )
        .unwrap();
        assert!(matches!(config.camera, CameraRig::ArcRotate { radius, .. } if radius == 30.0));
    }

    #[test]
    fn unknown_variant_is_a_parse_error() {
        let err = TowerConfig::from_json(r#"{"variant": "jumbo"}"#).unwrap_err();
        assert!(matches!(err, TowerError::ConfigParse(_)));
    }

    #[test]
    fn negative_level_count_is_a_parse_error() {
        let err = TowerConfig::from_json(r#"{"level_count": -3}"#).unwrap_err();
        assert!(matches!(err, TowerError::ConfigParse(_)));
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let mut config = TowerConfig::classic();
        config.block_dimensions.height = 0.0;
        match config.validate() {
            Err(TowerError::InvalidDimension { field, value }) => {
                assert_eq!(field, "block.height");
                assert_eq!(value, 0.0);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn restitution_above_one_is_rejected() {
        let mut config = TowerConfig::classic();
        config.ground.material.restitution = 1.5;
        assert!(matches!(
            config.validate(),
            Err(TowerError::InvalidMaterial { field: "ground.restitution", .. })
        ));
    }

    #[test]
    fn too_many_levels_is_rejected() {
        let mut config = TowerConfig::classic();
        config.level_count = MAX_LEVELS + 1;
        assert!(matches!(
            config.validate(),
            Err(TowerError::TooManyLevels { requested: 10_001, max: MAX_LEVELS })
        ));

        config.level_count = MAX_LEVELS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn bad_spacing_is_rejected() {
        for spacing in [-1.0, f32::NAN, f32::INFINITY] {
            let mut config = TowerConfig::classic();
            config.spacing = spacing;
            assert!(
                matches!(config.validate(), Err(TowerError::InvalidSpacing(_))),
                "spacing {} should be rejected",
                spacing
            );
        }
    }

    #[test]
    fn non_finite_dimension_is_rejected() {
        let mut config = TowerConfig::tabletop();
        config.ground.dimensions.depth = f32::INFINITY;
        assert!(matches!(
            config.validate(),
            Err(TowerError::InvalidDimension { field: "ground.depth", .. })
        ));
    }

    #[test]
    fn bad_mass_or_friction_is_rejected() {
        let mut config = TowerConfig::classic();
        config.block_material.mass = -1.0;
        assert!(matches!(
            config.validate(),
            Err(TowerError::InvalidMaterial { field: "block.mass", .. })
        ));

        let mut config = TowerConfig::heavy();
        config.block_material.friction = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(TowerError::InvalidMaterial { field: "block.friction", .. })
        ));
    }

    #[test]
    fn hex_colour_decodes() {
        let c = Color3::from_hex(0x080820);
        assert!((c.r - 8.0 / 255.0).abs() < 1e-6);
        assert!((c.b - 32.0 / 255.0).abs() < 1e-6);
    }
}
