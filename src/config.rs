//! World configuration surface.
//!
//! A `WorldConfig` is validated once, before the pipeline starts. Anything
//! degenerate (empty biome table, non-positive run sizes, zero weights) is
//! rejected here so generation itself never has to handle it.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::biomes::{default_biomes, BiomeConfig};
use crate::error::{ConfigError, ConfigResult};

/// Reference world width in columns
pub const DEFAULT_WIDTH: usize = 4096;
/// Reference world height in rows
pub const DEFAULT_HEIGHT: usize = 256;
/// Largest accepted world height in rows
pub const MAX_HEIGHT: usize = (i32::MAX / 4) as usize;
/// Rows at or below this index that sit above the surface fill with water
pub const DEFAULT_SEA_LEVEL: i32 = 118;

fn default_width() -> usize {
    DEFAULT_WIDTH
}

fn default_height() -> usize {
    DEFAULT_HEIGHT
}

fn default_sea_level() -> i32 {
    DEFAULT_SEA_LEVEL
}

/// Everything the pipeline needs besides the seed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,
    #[serde(default = "default_sea_level")]
    pub sea_level: i32,
    #[serde(default = "default_biomes")]
    pub biomes: Vec<BiomeConfig>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            sea_level: DEFAULT_SEA_LEVEL,
            biomes: default_biomes(),
        }
    }
}

impl WorldConfig {
    /// Reference biome table at a custom size.
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: WorldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn from_json_file(path: &Path) -> ConfigResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Reject configurations the pipeline cannot run with.
    pub fn validate(&self) -> ConfigResult<()> {
        // Surface rows may reach twice the height, and still need headroom as i32
        if self.width == 0 || self.height < 2 || self.width > i32::MAX as usize || self.height > MAX_HEIGHT {
            return Err(ConfigError::InvalidWorldSize {
                width: self.width,
                height: self.height,
            });
        }

        if self.sea_level < 0 || self.sea_level >= self.height as i32 {
            return Err(ConfigError::InvalidSeaLevel {
                sea_level: self.sea_level,
                height: self.height,
            });
        }

        if self.biomes.is_empty() {
            return Err(ConfigError::EmptyBiomeTable);
        }

        let mut seen = HashSet::new();
        for biome in &self.biomes {
            if !seen.insert(biome.id) {
                return Err(ConfigError::DuplicateBiome(biome.id));
            }
            validate_biome(biome, self.height)?;
        }

        let total_weight: f64 = self.biomes.iter().map(|b| b.weight).sum();
        if total_weight <= 0.0 {
            return Err(ConfigError::ZeroTotalWeight);
        }

        Ok(())
    }
}

fn validate_biome(biome: &BiomeConfig, height: usize) -> ConfigResult<()> {
    if !biome.weight.is_finite() || biome.weight < 0.0 {
        return Err(ConfigError::InvalidWeight {
            biome: biome.id,
            weight: biome.weight,
        });
    }

    if biome.min_size <= 0 || biome.max_size <= 0 || biome.min_size > biome.max_size {
        return Err(ConfigError::InvalidSegmentSize {
            biome: biome.id,
            min_size: biome.min_size,
            max_size: biome.max_size,
        });
    }

    let shape = &biome.shape;
    if !(shape.large_frequency > 0.0 && shape.small_frequency > 0.0) {
        return Err(ConfigError::InvalidFrequency { biome: biome.id });
    }

    // Surfaces may sit above the sky or below the bedrock, within reason
    let lowest = biome.base_height - shape.max_relief();
    let highest = biome.base_height + shape.max_relief();
    let (min, max) = (-(height as f64), 2.0 * height as f64);
    if !(lowest.is_finite() && highest.is_finite() && lowest >= min && highest <= max) {
        return Err(ConfigError::InvalidTerrainRange {
            biome: biome.id,
            lowest,
            highest,
            min,
            max,
        });
    }

    let probabilities = [
        ("ores.coal", biome.ores.coal),
        ("ores.gold", biome.ores.gold),
        ("ores.dirt_pocket", biome.ores.dirt_pocket),
        ("vegetation_chance", biome.vegetation_chance),
    ];
    for (field, value) in probabilities {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigError::InvalidProbability {
                biome: biome.id,
                field,
                value,
            });
        }
    }

    Ok(())
}
