//! Sky painters: floating islands and the giant floating ruin.
//!
//! Anchored on the top surface row of the island, `(x, top_y)`.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::tilemap::TileAccess;
use crate::tiles::TileType;

use super::buildings::paint_ruin_walls;
use super::trees::{paint_tree, TreeKind};
use super::Footprint;

pub const FOOTPRINT_FLOATING_ISLAND: Footprint = Footprint::new(10, 10, 7);
pub const FOOTPRINT_GIANT_RUIN: Footprint = Footprint::new(20, 8, 14);

/// Inverted cone of earth: grass cap, dirt, then a stone keel.
fn paint_island_body<A: TileAccess>(access: &mut A, x: i32, top_y: i32, radius: i32, depth: i32, rng: &mut ChaCha8Rng) {
    for row in 0..=depth {
        let taper = radius * row / depth.max(1);
        let jitter = if row > 0 { rng.gen_range(0..=1) } else { 0 };
        let half = (radius - taper - jitter).max(0);
        let tile = match row {
            0 => TileType::Grass,
            1 | 2 => TileType::Dirt,
            _ => TileType::Stone,
        };
        for dx in -half..=half {
            access.set_breakable(x + dx, top_y + row, tile);
        }
    }
}

pub fn paint_floating_island<A: TileAccess>(access: &mut A, x: i32, top_y: i32, rng: &mut ChaCha8Rng) {
    let radius = rng.gen_range(6..=10);
    let depth = radius * 2 / 3;
    paint_island_body(access, x, top_y, radius, depth, rng);

    if rng.gen_bool(0.5) {
        let offset = rng.gen_range(-radius / 2..=radius / 2);
        paint_tree(access, TreeKind::Oak, x + offset, top_y, rng);
    }
}

/// Island big enough to carry a ruined hall, with a gold vein in its keel.
pub fn paint_giant_floating_ruin<A: TileAccess>(access: &mut A, x: i32, top_y: i32, rng: &mut ChaCha8Rng) {
    let radius = rng.gen_range(16..=20);
    let depth = radius * 2 / 3;
    paint_island_body(access, x, top_y, radius, depth, rng);

    let hall = rng.gen_range(21..=27);
    paint_ruin_walls(access, x - hall / 2, top_y, hall, 7, rng);

    for row in depth / 2..depth {
        if rng.gen_bool(0.5) {
            access.set_breakable(x + rng.gen_range(-1..=1), top_y + row, TileType::GoldOre);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tilemap::Tilemap;
    use rand::SeedableRng;

    fn changed_cells(map: &Tilemap<TileType>) -> Vec<(i32, i32)> {
        map.iter()
            .filter(|(_, _, t)| **t != TileType::Air)
            .map(|(x, y, _)| (x as i32, y as i32))
            .collect()
    }

    #[test]
    fn test_island_within_footprint() {
        for seed in 0..30u64 {
            let mut map = Tilemap::new_with(64, 64, TileType::Air);
            paint_floating_island(&mut map, 32, 30, &mut ChaCha8Rng::seed_from_u64(seed));
            let cells = changed_cells(&map);
            assert!(!cells.is_empty());
            for (x, y) in cells {
                assert!(FOOTPRINT_FLOATING_ISLAND.contains(32, 30, x, y), "({}, {}) escapes", x, y);
            }
            assert_eq!(*map.get(32, 30), TileType::Grass);
        }
    }

    #[test]
    fn test_giant_ruin_within_footprint() {
        for seed in 0..30u64 {
            let mut map = Tilemap::new_with(96, 96, TileType::Air);
            paint_giant_floating_ruin(&mut map, 48, 40, &mut ChaCha8Rng::seed_from_u64(seed));
            for (x, y) in changed_cells(&map) {
                assert!(FOOTPRINT_GIANT_RUIN.contains(48, 40, x, y), "({}, {}) escapes", x, y);
            }
        }
    }
}
