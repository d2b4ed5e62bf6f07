//! Error types for terrain generation

use thiserror::Error;

/// Result type for terrain operations
pub type Result<T> = std::result::Result<T, TerrainError>;

/// Configuration mistakes caught when a terrain batch is generated.
///
/// Geometric edge cases during a simulation step are never errors; they show up
/// as `None` or zero vectors instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TerrainError {
    /// Grid must have at least one cell per side
    #[error("terrain divisions must be at least 1")]
    ZeroDivisions,

    /// Face count `2 * divisions²` would not fit a `u32` face id
    #[error("terrain divisions {0} produce more faces than a face id can address")]
    TooManyDivisions(u32),

    /// Horizontal extent must be finite and positive
    #[error("terrain size must be finite and positive, got {0}")]
    InvalidSize(f32),

    /// Height scale must be finite
    #[error("terrain height scale must be finite, got {0}")]
    InvalidHeightScale(f32),

    /// Profile name did not match any known terrain profile
    #[error("unknown terrain profile: {0}")]
    UnknownProfile(String),
}
