//! Per-column surface height synthesis.
//!
//! Heights are row indices of the surface tile in a y-down grid: larger
//! values mean the surface sits deeper. Each column is a pure function of
//! its index and the biome's terrain shape, two summed sine layers.

use serde::{Deserialize, Serialize};

/// Two-layer sinusoidal terrain profile.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainShape {
    /// Amplitude of the slow, rolling layer (tiles)
    pub large_amplitude: f64,
    /// Amplitude of the fast, bumpy layer (tiles)
    pub small_amplitude: f64,
    /// Period divisor of the rolling layer (columns per radian)
    pub large_frequency: f64,
    /// Period divisor of the bumpy layer (columns per radian)
    pub small_frequency: f64,
}

impl Default for TerrainShape {
    fn default() -> Self {
        Self {
            large_amplitude: 12.0,
            small_amplitude: 3.0,
            large_frequency: 30.0,
            small_frequency: 8.0,
        }
    }
}

impl TerrainShape {
    /// A shape with no relief at all.
    pub fn flat() -> Self {
        Self {
            large_amplitude: 0.0,
            small_amplitude: 0.0,
            ..Self::default()
        }
    }

    /// Upper bound on `|h(x) - h(x-1)|` for raw (unsmoothed) columns.
    ///
    /// The derivative of `a * sin(x / f)` is at most `a / f`; flooring adds
    /// at most one more tile.
    pub fn max_column_step(&self) -> i32 {
        let slope = self.large_amplitude.abs() / self.large_frequency
            + self.small_amplitude.abs() / self.small_frequency;
        slope.ceil() as i32 + 1
    }

    /// Largest distance the surface can stray from the base height.
    pub fn max_relief(&self) -> f64 {
        self.large_amplitude.abs() + self.small_amplitude.abs()
    }
}

/// Surface row for column `x`.
///
/// `floor(base + sin(x / large_freq) * large_amp + sin(x / small_freq) * small_amp)`
pub fn column_height(x: i32, base_height: f64, shape: &TerrainShape) -> i32 {
    let x = x as f64;
    let h = base_height
        + (x / shape.large_frequency).sin() * shape.large_amplitude
        + (x / shape.small_frequency).sin() * shape.small_amplitude;
    h.floor() as i32
}

/// Raw heights for the columns `start..start + len`.
pub fn generate_heights(start: usize, len: usize, base_height: f64, shape: &TerrainShape) -> Vec<i32> {
    (start..start + len)
        .map(|x| column_height(x as i32, base_height, shape))
        .collect()
}
