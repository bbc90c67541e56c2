//! Column fill: turns the height field into tiles.
//!
//! Each column is walked top to bottom once. Sky rows become air (or water
//! below sea level), the surface row takes the biome's surface tile, a thin
//! soil band follows, and everything deeper is stone with scattered ore.
//! The bottom row is always bedrock.

use std::collections::HashMap;

use log::warn;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::biomes::{BiomeConfig, BiomeId, BiomeLayout};
use crate::painters::trees::{paint_tree, TreeKind};
use crate::tilemap::{TileAccess, Tilemap};
use crate::tiles::TileType;

/// Rows of subsurface soil below the surface tile
pub const SOIL_DEPTH: i32 = 5;
/// Gold only appears this many rows below the surface
pub const GOLD_MIN_DEPTH: i32 = 15;

/// A surface column that rolled a tree during the fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VegetationSite {
    pub x: i32,
    pub ground_y: i32,
    pub kind: TreeKind,
}

/// What the fill produced besides the grid contents.
#[derive(Clone, Debug, Default)]
pub struct FillReport {
    pub vegetation: Vec<VegetationSite>,
    pub coal: usize,
    pub gold: usize,
    pub dirt_pockets: usize,
}

/// Fill every cell of `grid` from the height field and biome map.
///
/// `grid` must be `layout.width()` columns wide.
pub fn fill_columns(
    grid: &mut Tilemap<TileType>,
    layout: &BiomeLayout,
    biomes: &[BiomeConfig],
    sea_level: i32,
    rng: &mut ChaCha8Rng,
) -> FillReport {
    let lookup: HashMap<BiomeId, &BiomeConfig> = biomes.iter().map(|b| (b.id, b)).collect();
    let height = grid.height as i32;
    let mut report = FillReport::default();

    for (x, (&surface, biome_id)) in layout.heights.iter().zip(&layout.biome_by_column).enumerate() {
        let Some(biome) = lookup.get(biome_id) else {
            warn!("column {} references unconfigured biome {:?}", x, biome_id);
            continue;
        };
        let x = x as i32;

        for y in 0..height {
            let tile = if y == height - 1 {
                TileType::Bedrock
            } else if y > surface + SOIL_DEPTH {
                deep_tile(y - surface, biome, rng, &mut report)
            } else if y > surface {
                biome.subsurface
            } else if y == surface {
                if surface <= sea_level {
                    roll_vegetation(x, surface, biome, rng, &mut report);
                }
                biome.surface
            } else if y >= sea_level {
                TileType::Water
            } else {
                TileType::Air
            };
            grid.set(x, y, tile);
        }
    }

    report
}

/// Deep band: one independent draw per tile.
fn deep_tile(depth: i32, biome: &BiomeConfig, rng: &mut ChaCha8Rng, report: &mut FillReport) -> TileType {
    let gold = if depth > GOLD_MIN_DEPTH { biome.ores.gold } else { 0.0 };
    let roll = rng.gen::<f64>();

    if roll < gold {
        report.gold += 1;
        TileType::GoldOre
    } else if roll < gold + biome.ores.coal {
        report.coal += 1;
        TileType::CoalOre
    } else if roll < gold + biome.ores.coal + biome.ores.dirt_pocket {
        report.dirt_pockets += 1;
        TileType::Dirt
    } else {
        TileType::Stone
    }
}

fn roll_vegetation(x: i32, surface: i32, biome: &BiomeConfig, rng: &mut ChaCha8Rng, report: &mut FillReport) {
    let Some(kind) = biome.vegetation else {
        return;
    };
    if biome.vegetation_chance > 0.0 && rng.gen_bool(biome.vegetation_chance) {
        report.vegetation.push(VegetationSite {
            x,
            ground_y: surface,
            kind,
        });
    }
}

/// Paint the trees scheduled during the fill.
///
/// A site is skipped if the tree would poke out of the top of the world, if
/// its ground is no longer solid, or if the cell above is no longer open
/// (a pond or structure got there first). Returns the number planted.
pub fn plant_vegetation<A: TileAccess>(access: &mut A, sites: &[VegetationSite], rng: &mut ChaCha8Rng) -> usize {
    let mut planted = 0;
    for site in sites {
        if site.ground_y - site.kind.max_height() < 0 {
            log::trace!("tree at column {} would leave the top of the world", site.x);
            continue;
        }
        if !access.get(site.x, site.ground_y).is_solid() || !access.get(site.x, site.ground_y - 1).is_replaceable() {
            log::trace!("tree at column {} lost its ground", site.x);
            continue;
        }
        paint_tree(access, site.kind, site.x, site.ground_y, rng);
        planted += 1;
    }
    planted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biomes::BiomeRun;
    use crate::heightmap::TerrainShape;
    use rand::SeedableRng;

    fn single_biome_layout(width: usize, surface: i32, id: BiomeId) -> BiomeLayout {
        BiomeLayout {
            heights: vec![surface; width],
            biome_by_column: vec![id; width],
            runs: vec![BiomeRun {
                biome: id,
                start: 0,
                len: width,
            }],
        }
    }

    fn plains() -> BiomeConfig {
        BiomeConfig::new(BiomeId::Plains, 40.0, 1.0, 10, 20).with_shape(TerrainShape::flat())
    }

    #[test]
    fn test_column_bands() {
        let layout = single_biome_layout(32, 20, BiomeId::Plains);
        let mut grid = Tilemap::new(32, 64);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        fill_columns(&mut grid, &layout, &[plains()], 60, &mut rng);

        for x in 0..32 {
            for y in 0..20 {
                assert_eq!(*grid.get(x, y), TileType::Air);
            }
            assert_eq!(*grid.get(x, 20), TileType::Grass);
            for y in 21..=25 {
                assert_eq!(*grid.get(x, y), TileType::Dirt);
            }
            for y in 26..63 {
                let tile = *grid.get(x, y);
                assert!(matches!(
                    tile,
                    TileType::Stone | TileType::CoalOre | TileType::GoldOre | TileType::Dirt
                ));
                if tile == TileType::GoldOre {
                    assert!(y > 20 + GOLD_MIN_DEPTH);
                }
            }
            assert_eq!(*grid.get(x, 63), TileType::Bedrock);
        }
    }

    #[test]
    fn test_sea_level_floods_low_columns() {
        let layout = single_biome_layout(16, 40, BiomeId::Plains);
        let mut grid = Tilemap::new(16, 64);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        fill_columns(&mut grid, &layout, &[plains()], 30, &mut rng);

        assert_eq!(*grid.get(3, 29), TileType::Air);
        assert_eq!(*grid.get(3, 30), TileType::Water);
        assert_eq!(*grid.get(3, 39), TileType::Water);
        assert_eq!(*grid.get(3, 40), TileType::Grass);
    }

    #[test]
    fn test_ore_density_tracks_config() {
        let biome = plains().with_ores(0.05, 0.01);
        let layout = single_biome_layout(512, 10, BiomeId::Plains);
        let mut grid = Tilemap::new(512, 256);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let report = fill_columns(&mut grid, &layout, &[biome], 5, &mut rng);

        let deep_cells = 512.0 * (255 - 16) as f64;
        let coal_rate = report.coal as f64 / deep_cells;
        assert!((coal_rate - 0.05).abs() < 0.005, "coal rate {}", coal_rate);
        assert!(report.gold > 0);
        assert!(report.coal > report.gold);
    }

    #[test]
    fn test_vegetation_sites_planted_after_fill() {
        let biome = plains().with_vegetation(TreeKind::Oak, 1.0);
        let layout = single_biome_layout(64, 30, BiomeId::Plains);
        let mut grid = Tilemap::new(64, 64);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let report = fill_columns(&mut grid, &layout, &[biome], 60, &mut rng);
        assert_eq!(report.vegetation.len(), 64);

        let planted = plant_vegetation(&mut grid, &report.vegetation[..1], &mut rng);
        assert_eq!(planted, 1);
        assert_eq!(*grid.get(0, 29), TileType::Wood);
        // Trunk sits on untouched ground
        assert_eq!(*grid.get(0, 30), TileType::Grass);
    }

    #[test]
    fn test_no_vegetation_under_water() {
        let biome = plains().with_vegetation(TreeKind::Oak, 1.0);
        let layout = single_biome_layout(16, 40, BiomeId::Plains);
        let mut grid = Tilemap::new(16, 64);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let report = fill_columns(&mut grid, &layout, &[biome], 30, &mut rng);
        assert!(report.vegetation.is_empty());
    }

    #[test]
    fn test_tree_skipped_when_too_close_to_top() {
        let mut grid = Tilemap::new_with(16, 32, TileType::Air);
        grid.set(4, 3, TileType::Grass);
        let sites = [VegetationSite {
            x: 4,
            ground_y: 3,
            kind: TreeKind::Oak,
        }];
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(plant_vegetation(&mut grid, &sites, &mut rng), 0);
        assert_eq!(*grid.get(4, 2), TileType::Air);
    }
}
