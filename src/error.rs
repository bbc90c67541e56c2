//! Error types for configuration loading and export.
//!
//! Generation itself never fails once a configuration has been validated;
//! rejected placements are policy skips, not errors.

use std::sync::Arc;

use thiserror::Error;

use crate::biomes::BiomeId;

/// A configuration that the pipeline refuses to run with.
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    /// World dimensions must be non-zero.
    #[error("invalid world size {width}x{height}")]
    InvalidWorldSize { width: usize, height: usize },

    /// Sea level row outside the grid.
    #[error("sea level {sea_level} is outside 0..{height}")]
    InvalidSeaLevel { sea_level: i32, height: usize },

    /// No biomes configured.
    #[error("biome table is empty")]
    EmptyBiomeTable,

    /// Every biome has zero selection weight.
    #[error("total biome selection weight is zero")]
    ZeroTotalWeight,

    /// Negative or non-finite selection weight.
    #[error("biome {biome:?} has invalid selection weight {weight}")]
    InvalidWeight { biome: BiomeId, weight: f64 },

    /// Segment sizes must be positive and ordered.
    #[error("biome {biome:?} has invalid segment size range {min_size}..={max_size}")]
    InvalidSegmentSize {
        biome: BiomeId,
        min_size: i64,
        max_size: i64,
    },

    /// Frequencies are divisors in the height formula.
    #[error("biome {biome:?} has non-positive terrain frequency")]
    InvalidFrequency { biome: BiomeId },

    /// Probabilities must lie in 0.0..=1.0.
    #[error("biome {biome:?} has {field} = {value} outside 0..=1")]
    InvalidProbability {
        biome: BiomeId,
        field: &'static str,
        value: f64,
    },

    /// Surface rows the terrain shape can reach, outside what the grid tolerates.
    #[error("biome {biome:?} reaches surface rows {lowest}..={highest}, outside {min}..={max}")]
    InvalidTerrainRange {
        biome: BiomeId,
        lowest: f64,
        highest: f64,
        min: f64,
        max: f64,
    },

    /// The same biome id appears twice.
    #[error("biome {0:?} is configured more than once")]
    DuplicateBiome(BiomeId),

    #[error("failed to read config: {0}")]
    Io(#[source] Arc<std::io::Error>),

    #[error("failed to parse config: {0}")]
    Parse(#[source] Arc<serde_json::Error>),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(Arc::new(err))
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(Arc::new(err))
    }
}

/// Failures while writing debug exports.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("image export failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json export failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid export scale {0}")]
    InvalidScale(u32),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
