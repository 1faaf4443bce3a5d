//! Tower layout - deterministic placement of every block.
//!
//! Odd levels lie along X, even levels are turned a quarter and lie along Z,
//! three blocks per level. Output order is level-major, then slot order
//! `-spacing, 0, +spacing`; callers index into it by position.

mod generator;
mod query;

pub use generator::{generate_tower, slot_offsets};
pub use query::{blocks_at_level, middle_block, tower_height};
