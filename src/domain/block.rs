//! Block blueprints produced by the layout generator.
//!
//! A `BlockSpec` is immutable once generated. The host turns it into an
//! engine-owned body whose physical state is mutable.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Rotation applied to even levels so alternating rows interlock.
pub const QUARTER_TURN: f32 = std::f32::consts::FRAC_PI_2;

/// Number of blocks in one level.
pub const BLOCKS_PER_LEVEL: usize = 3;

/// Name the scene assigns to every tower block. Picks are matched against it.
pub const BLOCK_NAME: &str = "Box";

/// Name the scene assigns to the static ground body.
pub const GROUND_NAME: &str = "Ground";

/// Width/height/depth of a box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Dimensions {
    pub const fn new(width: f32, height: f32, depth: f32) -> Self {
        Self { width, height, depth }
    }

    pub fn as_vec3(&self) -> Vec3 {
        Vec3::new(self.width, self.height, self.depth)
    }
}

/// Blueprint for one tower block.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlockSpec {
    /// Position in the generated sequence (level-major, then slot).
    pub index: usize,
    /// 1-indexed row in the tower.
    pub level: u32,
    /// Slot within the level: 0 => -spacing, 1 => 0, 2 => +spacing.
    pub slot: u8,
    /// Rotation about the vertical axis, radians.
    pub rotation_y: f32,
    pub position: Vec3,
    pub dimensions: Dimensions,
}

impl BlockSpec {
    #[inline]
    pub fn is_even_level(&self) -> bool {
        self.level % 2 == 0
    }

    /// Euler rotation `(x, y, z)` as the host applies it.
    pub fn rotation(&self) -> Vec3 {
        Vec3::new(0.0, self.rotation_y, 0.0)
    }
}
