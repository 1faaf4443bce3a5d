use thiserror::Error;

/// Errors raised while loading or validating a tower configuration.
///
/// Event handling never produces these: picks on empty space or releases with
/// nothing held are ignored, not reported.
#[derive(Error, Debug)]
pub enum TowerError {
    /// A block or ground dimension is zero, negative or not finite.
    #[error("invalid dimension `{field}`: {value} (must be finite and > 0)")]
    InvalidDimension { field: &'static str, value: f32 },

    /// Slot spacing is negative or not finite.
    #[error("invalid slot spacing: {0} (must be finite and >= 0)")]
    InvalidSpacing(f32),

    /// Mass, friction or restitution out of range.
    #[error("invalid material `{field}`: {value}")]
    InvalidMaterial { field: &'static str, value: f32 },

    #[error("too many levels: {requested} (max {max})")]
    TooManyLevels { requested: u32, max: u32 },

    #[error("unknown preset `{0}` (expected classic, heavy or tabletop)")]
    UnknownPreset(String),

    /// Malformed configuration JSON.
    #[error("failed to parse tower config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type TowerResult<T> = Result<T, TowerError>;
