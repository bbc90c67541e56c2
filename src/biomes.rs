//! Biome definitions and column segmentation.
//!
//! The world is split into contiguous runs of columns, each drawn by weight
//! from the biome table and given its own terrain shape. Where two runs meet
//! the surface is ramped so the slope stays bounded.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::heightmap::{generate_heights, TerrainShape};
use crate::painters::trees::TreeKind;
use crate::tilemap::wrap;
use crate::tiles::TileType;

/// Maximum number of columns a seam ramp spans.
pub const SEAM_RAMP: usize = 8;

/// Biome identifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BiomeId {
    Plains,
    Forest,
    Desert,
    Snow,
    Ocean,
    Mountains,
    Wasteland,
    Jungle,
}

impl BiomeId {
    pub fn display_name(&self) -> &'static str {
        match self {
            BiomeId::Plains => "Plains",
            BiomeId::Forest => "Forest",
            BiomeId::Desert => "Desert",
            BiomeId::Snow => "Snow",
            BiomeId::Ocean => "Ocean",
            BiomeId::Mountains => "Mountains",
            BiomeId::Wasteland => "Wasteland",
            BiomeId::Jungle => "Jungle",
        }
    }

    pub fn ascii_char(&self) -> char {
        match self {
            BiomeId::Plains => 'p',
            BiomeId::Forest => 'f',
            BiomeId::Desert => 'd',
            BiomeId::Snow => 's',
            BiomeId::Ocean => 'o',
            BiomeId::Mountains => 'm',
            BiomeId::Wasteland => 'w',
            BiomeId::Jungle => 'j',
        }
    }
}

/// Per-tile substitution probabilities in the deep stone band.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OreRates {
    pub coal: f64,
    /// Only applies more than 15 rows below the surface
    pub gold: f64,
    pub dirt_pocket: f64,
}

impl Default for OreRates {
    fn default() -> Self {
        Self {
            coal: 0.02,
            gold: 0.004,
            dirt_pocket: 0.01,
        }
    }
}

fn default_surface() -> TileType {
    TileType::Grass
}

fn default_subsurface() -> TileType {
    TileType::Dirt
}

fn default_true() -> bool {
    true
}

/// Configuration of a single biome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BiomeConfig {
    pub id: BiomeId,
    /// Mean surface row
    pub base_height: f64,
    #[serde(default)]
    pub shape: TerrainShape,
    /// Relative selection weight
    pub weight: f64,
    /// Shortest run of columns
    pub min_size: i64,
    /// Longest run of columns
    pub max_size: i64,
    #[serde(default)]
    pub ores: OreRates,
    #[serde(default = "default_surface")]
    pub surface: TileType,
    #[serde(default = "default_subsurface")]
    pub subsurface: TileType,
    #[serde(default)]
    pub vegetation: Option<TreeKind>,
    /// Chance per surface column of scheduling a tree
    #[serde(default)]
    pub vegetation_chance: f64,
    /// Ponds and waterfalls may be placed here
    #[serde(default = "default_true")]
    pub water_valid: bool,
}

impl BiomeConfig {
    pub fn new(id: BiomeId, base_height: f64, weight: f64, min_size: i64, max_size: i64) -> Self {
        Self {
            id,
            base_height,
            shape: TerrainShape::default(),
            weight,
            min_size,
            max_size,
            ores: OreRates::default(),
            surface: default_surface(),
            subsurface: default_subsurface(),
            vegetation: None,
            vegetation_chance: 0.0,
            water_valid: true,
        }
    }

    pub fn with_shape(mut self, shape: TerrainShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_ores(mut self, coal: f64, gold: f64) -> Self {
        self.ores.coal = coal;
        self.ores.gold = gold;
        self
    }

    pub fn with_soil(mut self, surface: TileType, subsurface: TileType) -> Self {
        self.surface = surface;
        self.subsurface = subsurface;
        self
    }

    pub fn with_vegetation(mut self, kind: TreeKind, chance: f64) -> Self {
        self.vegetation = Some(kind);
        self.vegetation_chance = chance;
        self
    }

    pub fn without_water(mut self) -> Self {
        self.water_valid = false;
        self
    }
}

/// The shipped biome table.
pub fn default_biomes() -> Vec<BiomeConfig> {
    let shape = |large_amplitude, small_amplitude, large_frequency, small_frequency| TerrainShape {
        large_amplitude,
        small_amplitude,
        large_frequency,
        small_frequency,
    };

    vec![
        BiomeConfig::new(BiomeId::Plains, 100.0, 3.0, 80, 200)
            .with_shape(shape(8.0, 2.0, 30.0, 8.0))
            .with_vegetation(TreeKind::Oak, 0.03),
        BiomeConfig::new(BiomeId::Forest, 98.0, 3.0, 80, 200)
            .with_vegetation(TreeKind::Oak, 0.15),
        BiomeConfig::new(BiomeId::Desert, 104.0, 2.0, 60, 160)
            .with_shape(shape(6.0, 2.0, 34.0, 9.0))
            .with_ores(0.015, 0.008)
            .with_soil(TileType::Sand, TileType::Sand)
            .with_vegetation(TreeKind::Cactus, 0.04)
            .without_water(),
        BiomeConfig::new(BiomeId::Snow, 92.0, 2.0, 60, 160)
            .with_soil(TileType::Snow, TileType::Dirt)
            .with_vegetation(TreeKind::Pine, 0.08)
            .without_water(),
        BiomeConfig::new(BiomeId::Ocean, 140.0, 1.5, 80, 160)
            .with_shape(shape(4.0, 2.0, 40.0, 10.0))
            .with_ores(0.01, 0.002)
            .with_soil(TileType::Sand, TileType::Sand)
            .without_water(),
        BiomeConfig::new(BiomeId::Mountains, 72.0, 1.5, 60, 140)
            .with_shape(shape(22.0, 5.0, 24.0, 7.0))
            .with_ores(0.035, 0.01)
            .with_vegetation(TreeKind::Pine, 0.04),
        BiomeConfig::new(BiomeId::Wasteland, 106.0, 1.0, 60, 140)
            .with_shape(shape(5.0, 3.0, 30.0, 6.0))
            .with_soil(TileType::Dirt, TileType::Dirt)
            .with_vegetation(TreeKind::Dead, 0.02),
        BiomeConfig::new(BiomeId::Jungle, 96.0, 1.0, 80, 180)
            .with_shape(shape(10.0, 4.0, 28.0, 8.0))
            .with_vegetation(TreeKind::Jungle, 0.10),
    ]
}

/// A contiguous column range sharing one biome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BiomeRun {
    pub biome: BiomeId,
    pub start: usize,
    pub len: usize,
}

impl BiomeRun {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Output of segmentation: the height field and biome map.
#[derive(Clone, Debug)]
pub struct BiomeLayout {
    pub heights: Vec<i32>,
    pub biome_by_column: Vec<BiomeId>,
    pub runs: Vec<BiomeRun>,
}

impl BiomeLayout {
    pub fn width(&self) -> usize {
        self.heights.len()
    }

    /// Surface row at column `x`, wrapping horizontally.
    pub fn height_at(&self, x: i32) -> i32 {
        self.heights[wrap(x, self.heights.len())]
    }

    /// Biome at column `x`, wrapping horizontally.
    pub fn biome_at(&self, x: i32) -> BiomeId {
        self.biome_by_column[wrap(x, self.biome_by_column.len())]
    }
}

/// Look up a biome config by id.
pub fn find_biome(biomes: &[BiomeConfig], id: BiomeId) -> Option<&BiomeConfig> {
    biomes.iter().find(|b| b.id == id)
}

/// Weighted random pick from the biome table.
fn pick_biome<'a>(biomes: &'a [BiomeConfig], total_weight: f64, rng: &mut ChaCha8Rng) -> &'a BiomeConfig {
    let mut roll = rng.gen::<f64>() * total_weight;
    for biome in biomes {
        if roll < biome.weight {
            return biome;
        }
        roll -= biome.weight;
    }
    // Float drift can leave a sliver past the last bucket
    biomes
        .iter()
        .rev()
        .find(|b| b.weight > 0.0)
        .unwrap_or(&biomes[biomes.len() - 1])
}

/// Split `width` columns into biome runs and synthesize the height field.
///
/// `biomes` must already be validated (non-empty, positive sizes, positive
/// total weight).
pub fn segment_biomes(width: usize, biomes: &[BiomeConfig], rng: &mut ChaCha8Rng) -> BiomeLayout {
    debug_assert!(!biomes.is_empty());
    let total_weight: f64 = biomes.iter().map(|b| b.weight).sum();

    let mut heights: Vec<i32> = Vec::with_capacity(width);
    let mut biome_by_column: Vec<BiomeId> = Vec::with_capacity(width);
    let mut runs = Vec::new();

    while heights.len() < width {
        let biome = pick_biome(biomes, total_weight, rng);
        let start = heights.len();
        let remaining = width - start;

        let min_size = biome.min_size.max(1) as usize;
        let max_size = (biome.max_size.max(1) as usize).max(min_size);
        let len = rng.gen_range(min_size..=max_size).min(remaining);

        heights.extend(generate_heights(start, len, biome.base_height, &biome.shape));
        biome_by_column.extend(std::iter::repeat(biome.id).take(len));

        if start > 0 {
            smooth_seam(&mut heights, start, len);
        }

        runs.push(BiomeRun {
            biome: biome.id,
            start,
            len,
        });
    }

    BiomeLayout {
        heights,
        biome_by_column,
        runs,
    }
}

/// Ramp the surface across the seam at `start`.
///
/// If the new run begins deeper than the previous column, its first columns
/// are ramped; otherwise the tail of the previous run is bent toward the new
/// run's first column.
fn smooth_seam(heights: &mut [i32], start: usize, run_len: usize) {
    let prev = heights[start - 1];
    let first = heights[start];

    if first > prev {
        let n = SEAM_RAMP.min(run_len);
        let end = heights[start + n - 1];
        for i in 0..n {
            let t = (i + 1) as f64 / n as f64;
            heights[start + i] = lerp(prev, end, t);
        }
    } else if first < prev {
        let m = SEAM_RAMP.min(start);
        // With fewer than `SEAM_RAMP` columns behind the seam, every one of
        // them bends, starting from the first column's own value
        let (from, first_col) = if start > m {
            (heights[start - m - 1], start - m)
        } else {
            (heights[0], 0)
        };
        let span = (m + 1) as f64;
        for (i, c) in (first_col..start).enumerate() {
            let t = (i + 1) as f64 / span;
            heights[c] = lerp(from, first, t);
        }
    }
}

fn lerp(a: i32, b: i32, t: f64) -> i32 {
    (a as f64 + (b - a) as f64 * t).round() as i32
}
