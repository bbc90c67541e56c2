//! Cave pockets: small circular voids in the deep band.

use log::trace;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::biomes::BiomeLayout;
use crate::painters::shapes::filled_circle;
use crate::tilemap::TileAccess;
use crate::tiles::TileType;

use super::params::CaveParams;

/// Carve one pocket centered at `(center_x, center_y)`.
///
/// Rows outside `0..height-1` are clipped rather than wrapped, so the
/// bedrock row and the sky are never touched. Only breakable solids are
/// removed. Returns the number of cells turned to air.
pub fn carve_cave_pocket<A: TileAccess>(access: &mut A, center_x: i32, center_y: i32, radius: i32) -> usize {
    let last_row = access.height() as i32 - 2;
    let mut carved = 0;
    for (x, y) in filled_circle(center_x, center_y, radius) {
        if y < 0 || y > last_row {
            continue;
        }
        let props = access.get(x, y).properties();
        if props.solid && !props.unbreakable {
            access.set(x, y, TileType::Air);
            carved += 1;
        }
    }
    carved
}

/// Scatter pockets across the world. Returns the number carved.
pub fn carve_caves<A: TileAccess>(
    access: &mut A,
    layout: &BiomeLayout,
    params: &CaveParams,
    rng: &mut ChaCha8Rng,
) -> usize {
    let width = layout.width();
    let height = access.height() as i32;
    let attempts = (width as f64 * params.pockets_per_1000_columns / 1000.0).round() as usize;
    let mut pockets = 0;

    for _ in 0..attempts {
        let x = rng.gen_range(0..width) as i32;
        let radius = rng.gen_range(params.min_radius..=params.max_radius);
        let lowest = layout.height_at(x) + params.min_depth;
        let deepest = height - 2 - radius;
        if lowest > deepest {
            trace!("no room for a cave pocket under column {}", x);
            continue;
        }
        let y = rng.gen_range(lowest..=deepest);
        if carve_cave_pocket(access, x, y, radius) > 0 {
            pockets += 1;
        }
    }

    pockets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biomes::{BiomeId, BiomeRun};
    use crate::tilemap::Tilemap;
    use rand::SeedableRng;

    fn stone_map() -> Tilemap<TileType> {
        let mut map = Tilemap::new_with(32, 32, TileType::Stone);
        for x in 0..32 {
            map.set(x, 31, TileType::Bedrock);
        }
        map
    }

    #[test]
    fn test_pocket_carves_air() {
        let mut map = stone_map();
        let carved = carve_cave_pocket(&mut map, 16, 16, 3);
        assert!(carved > 0);
        assert_eq!(*map.get(16, 16), TileType::Air);
        assert_eq!(*map.get(16, 20), TileType::Stone);
    }

    #[test]
    fn test_pocket_at_bedrock_keeps_bedrock() {
        let mut map = stone_map();
        carve_cave_pocket(&mut map, 10, 31, 4);
        carve_cave_pocket(&mut map, 20, 34, 4);
        for x in 0..32 {
            assert_eq!(*map.get(x, 31), TileType::Bedrock);
        }
        // Clipped, not wrapped onto the top rows
        for x in 0..32 {
            assert_eq!(*map.get(x, 0), TileType::Stone);
        }
        // Rows just above bedrock are fair game
        assert_eq!(*map.get(10, 30), TileType::Air);
    }

    #[test]
    fn test_pocket_leaves_water_alone() {
        let mut map = stone_map();
        map.set(16, 16, TileType::Water);
        carve_cave_pocket(&mut map, 16, 16, 2);
        assert_eq!(*map.get(16, 16), TileType::Water);
    }

    #[test]
    fn test_scan_keeps_pockets_below_min_depth() {
        let width = 300;
        let surface = 20;
        let layout = BiomeLayout {
            heights: vec![surface; width],
            biome_by_column: vec![BiomeId::Plains; width],
            runs: vec![BiomeRun {
                biome: BiomeId::Plains,
                start: 0,
                len: width,
            }],
        };
        let params = CaveParams {
            pockets_per_1000_columns: 400.0,
            ..CaveParams::default()
        };

        for seed in 0..5u64 {
            let mut map = Tilemap::new_with(width, 64, TileType::Air);
            for x in 0..width as i32 {
                for y in surface..63 {
                    map.set(x, y, TileType::Stone);
                }
                map.set(x, 63, TileType::Bedrock);
            }
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let pockets = carve_caves(&mut map, &layout, &params, &mut rng);
            assert!(pockets > 50);

            let shallowest = surface + params.min_depth - params.max_radius;
            for x in 0..width as i32 {
                for y in surface..shallowest {
                    assert_eq!(*map.get(x, y), TileType::Stone, "air at ({}, {})", x, y);
                }
                assert_eq!(*map.get(x, 63), TileType::Bedrock);
            }
        }
    }
}
