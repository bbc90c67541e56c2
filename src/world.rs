//! World container and the generation pipeline
//!
//! Stages run in a fixed order, each over the whole world, each with its own
//! RNG derived from the master seed:
//!
//! 1. segment biomes and build the height field (no grid writes)
//! 2. fill columns
//! 3. cave pockets
//! 4. ocean rifts
//! 5. ponds
//! 6. waterfalls
//! 7. trees from the sites collected during the fill
//! 8. scanned structures, then singletons

use std::time::{Duration, Instant};

use log::info;

use crate::biomes::{segment_biomes, BiomeId, BiomeLayout};
use crate::carving::{carve_caves, carve_ponds, carve_rifts, carve_waterfalls, CarveParams, Rift};
use crate::config::WorldConfig;
use crate::error::ConfigResult;
use crate::seeds::WorldSeeds;
use crate::stats::WorldStats;
use crate::structures::{place_structures, PlacedStructure, StructureParams};
use crate::terrain::{fill_columns, plant_vegetation};
use crate::tilemap::Tilemap;
use crate::tiles::TileType;

/// Everything tunable about the pipeline that is not part of the world config.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenerationParams {
    pub carving: CarveParams,
    pub structures: StructureParams,
}

/// A generated world
pub struct World {
    /// Seeds used for generation (allows recreation)
    pub seeds: WorldSeeds,
    pub config: WorldConfig,
    pub grid: Tilemap<TileType>,
    pub layout: BiomeLayout,
    pub rifts: Vec<Rift>,
    pub structures: Vec<PlacedStructure>,
    pub stats: WorldStats,
    /// Wall-clock time per stage, in pipeline order
    pub timings: Vec<(&'static str, Duration)>,
}

impl World {
    /// Convenience accessor for master seed
    pub fn seed(&self) -> u64 {
        self.seeds.master
    }

    pub fn width(&self) -> usize {
        self.grid.width
    }

    pub fn height(&self) -> usize {
        self.grid.height
    }

    /// Tile at any coordinate; both axes wrap.
    pub fn get_tile(&self, x: i32, y: i32) -> TileType {
        *self.grid.get(x, y)
    }

    /// Overwrite a tile; both axes wrap.
    pub fn set_tile(&mut self, x: i32, y: i32, tile: TileType) {
        self.grid.set(x, y, tile);
    }

    /// Surface row of column `x`, as generated (before carving).
    pub fn surface_at(&self, x: i32) -> i32 {
        self.layout.height_at(x)
    }

    pub fn biome_at(&self, x: i32) -> BiomeId {
        self.layout.biome_at(x)
    }
}

/// Generate a world from a config and a master seed with default pipeline parameters.
pub fn generate_world(config: &WorldConfig, seed: u64) -> ConfigResult<World> {
    generate_world_with(config, WorldSeeds::from_master(seed), &GenerationParams::default())
}

/// Generate a world with explicit stage seeds and pipeline parameters.
///
/// The config is validated first; a valid config always yields a world.
pub fn generate_world_with(config: &WorldConfig, seeds: WorldSeeds, params: &GenerationParams) -> ConfigResult<World> {
    config.validate()?;

    let mut timings = Vec::new();
    let mut stats = WorldStats::default();
    let sea_level = config.sea_level;

    info!(
        "Generating {}x{} world (seed {}, sea level {})",
        config.width, config.height, seeds.master, sea_level
    );

    // Stage 1: biomes and heights
    let start = Instant::now();
    let mut rng = WorldSeeds::rng(seeds.terrain);
    let layout = segment_biomes(config.width, &config.biomes, &mut rng);
    timings.push(("biomes", start.elapsed()));
    info!("Segmented {} biome runs", layout.runs.len());

    // Stage 2: column fill
    let start = Instant::now();
    let mut grid = Tilemap::new(config.width, config.height);
    let mut rng = WorldSeeds::rng(seeds.fill);
    let fill = fill_columns(&mut grid, &layout, &config.biomes, sea_level, &mut rng);
    timings.push(("fill", start.elapsed()));
    info!(
        "Filled columns: {} coal, {} gold, {} vegetation sites",
        fill.coal,
        fill.gold,
        fill.vegetation.len()
    );

    // Stage 3: caves
    let start = Instant::now();
    let mut rng = WorldSeeds::rng(seeds.caves);
    stats.caves = carve_caves(&mut grid, &layout, &params.carving.caves, &mut rng);
    timings.push(("caves", start.elapsed()));
    info!("Carved {} cave pockets", stats.caves);

    // Stages 4-6: water features share one stream
    let start = Instant::now();
    let mut rng = WorldSeeds::rng(seeds.water);
    let rifts = carve_rifts(&mut grid, &layout, &params.carving.rifts, &mut rng);
    stats.ponds = carve_ponds(&mut grid, &layout, &config.biomes, sea_level, &params.carving.ponds, &mut rng);
    stats.waterfalls = carve_waterfalls(
        &mut grid,
        &layout,
        &config.biomes,
        sea_level,
        &params.carving.waterfalls,
        &mut rng,
    )
    .len();
    stats.rifts = rifts.len();
    timings.push(("water", start.elapsed()));
    info!(
        "Carved {} rifts, {} ponds, {} waterfalls",
        stats.rifts, stats.ponds, stats.waterfalls
    );

    // Stage 7: trees
    let start = Instant::now();
    let mut rng = WorldSeeds::rng(seeds.vegetation);
    stats.trees = plant_vegetation(&mut grid, &fill.vegetation, &mut rng);
    timings.push(("vegetation", start.elapsed()));
    info!("Planted {} of {} trees", stats.trees, fill.vegetation.len());

    // Stage 8: structures
    let start = Instant::now();
    let mut rng = WorldSeeds::rng(seeds.structures);
    let structures = place_structures(&mut grid, &layout, sea_level, &params.structures, &mut rng);
    timings.push(("structures", start.elapsed()));
    info!("Placed {} structures", structures.len());

    stats.coal_seeded = fill.coal;
    stats.gold_seeded = fill.gold;
    stats.record_grid(&grid);
    stats.record_layout(&layout);
    stats.record_structures(&structures);

    let total: Duration = timings.iter().map(|(_, d)| *d).sum();
    info!("World generated in {:.1} ms", total.as_secs_f64() * 1000.0);

    Ok(World {
        seeds,
        config: config.clone(),
        grid,
        layout,
        rifts,
        structures,
        stats,
        timings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    fn small_config() -> WorldConfig {
        WorldConfig::with_size(1024, 256)
    }

    #[test]
    fn test_generate_small_world() {
        let world = generate_world(&small_config(), 42).expect("valid config");
        assert_eq!(world.width(), 1024);
        assert_eq!(world.height(), 256);
        assert_eq!(world.seed(), 42);
        assert_eq!(world.timings.len(), 6);
        for x in 0..1024 {
            assert_eq!(world.get_tile(x, 255), TileType::Bedrock);
        }
    }

    #[test]
    fn test_get_tile_wraps() {
        let world = generate_world(&small_config(), 7).expect("valid config");
        assert_eq!(world.get_tile(-1, 10), world.get_tile(1023, 10));
        assert_eq!(world.get_tile(1024 + 5, 300), world.get_tile(5, 44));
    }

    #[test]
    fn test_set_tile_wraps() {
        let mut world = generate_world(&small_config(), 7).expect("valid config");
        world.set_tile(-2, -1, TileType::GoldBlock);
        assert_eq!(world.get_tile(1022, 255), TileType::GoldBlock);
    }

    #[test]
    fn test_invalid_config_rejected_before_generation() {
        let mut config = small_config();
        config.biomes.clear();
        assert!(matches!(generate_world(&config, 1), Err(ConfigError::EmptyBiomeTable)));
    }

    #[test]
    fn test_stage_seed_override_only_changes_that_stage() {
        let config = small_config();
        let params = GenerationParams::default();
        let base = generate_world_with(&config, WorldSeeds::from_master(9), &params).expect("valid config");
        let seeds = WorldSeeds::builder(9).structures(12345).build();
        let other = generate_world_with(&config, seeds, &params).expect("valid config");
        assert_eq!(base.layout.heights, other.layout.heights);
        assert_eq!(base.stats.caves, other.stats.caves);
    }
}
