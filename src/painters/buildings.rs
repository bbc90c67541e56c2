//! Man-made structure painters: ruins, monoliths, bunkers, pyramids.
//!
//! Each painter is anchored on a surface cell `(x, ground_y)` and keeps its
//! writes inside the footprint published in `FOOTPRINT_*` below. Unbreakable
//! tiles are never overwritten.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::tilemap::TileAccess;
use crate::tiles::TileType;

use super::shapes::{paint_rect, paint_room};
use super::Footprint;

pub const FOOTPRINT_MONOLITH: Footprint = Footprint::new(1, 11, 2);
pub const FOOTPRINT_RUINS: Footprint = Footprint::new(8, 6, 1);
pub const FOOTPRINT_BUNKER: Footprint = Footprint::new(7, 0, 14);
pub const FOOTPRINT_PYRAMID: Footprint = Footprint::new(17, 16, 3);

/// Obsidian pillar, two tiles wide, sunk two rows into the ground.
pub fn paint_monolith<A: TileAccess>(access: &mut A, x: i32, ground_y: i32, rng: &mut ChaCha8Rng) {
    let height = rng.gen_range(6..=10);
    paint_rect(access, x, ground_y - height, 2, height + 2, TileType::Obsidian);

    if rng.gen_bool(0.25) {
        access.set_breakable(x, ground_y - height - 1, TileType::GoldBlock);
    }
}

/// Crumbling brick walls on a brick floor.
pub fn paint_ruins<A: TileAccess>(access: &mut A, x: i32, ground_y: i32, rng: &mut ChaCha8Rng) {
    let width = rng.gen_range(9..=15);
    paint_ruin_walls(access, x - width / 2, ground_y, width, 5, rng);
}

/// Shared ruin layout: floor row at `floor_y`, walls at both ends, a few
/// stub pillars between, everything above the floor cleared first.
pub(super) fn paint_ruin_walls<A: TileAccess>(
    access: &mut A,
    left: i32,
    floor_y: i32,
    width: i32,
    max_wall: i32,
    rng: &mut ChaCha8Rng,
) {
    // Clear the interior so walls stand free
    paint_rect(access, left, floor_y - max_wall, width, max_wall, TileType::Air);

    for dx in 0..width {
        let tile = if rng.gen_bool(0.3) { TileType::MossyBrick } else { TileType::Brick };
        access.set_breakable(left + dx, floor_y, tile);
    }

    let mut columns = vec![left, left + width - 1];
    let mut pillar = left + rng.gen_range(2..=4);
    while pillar < left + width - 2 {
        columns.push(pillar);
        pillar += rng.gen_range(3..=5);
    }

    for (i, &wx) in columns.iter().enumerate() {
        let wall_height = if i < 2 {
            rng.gen_range(2..=max_wall)
        } else {
            rng.gen_range(0..=max_wall / 2)
        };
        for dy in 1..=wall_height {
            // Missing bricks
            if rng.gen_bool(0.2) {
                continue;
            }
            let tile = if rng.gen_bool(0.3) { TileType::MossyBrick } else { TileType::Brick };
            access.set_breakable(wx, floor_y - dy, tile);
        }
    }
}

/// Buried concrete room reached by a shaft from the surface.
pub fn paint_bunker<A: TileAccess>(access: &mut A, x: i32, ground_y: i32, rng: &mut ChaCha8Rng) {
    let width = rng.gen_range(9..=13);
    let height = rng.gen_range(5..=7);
    let top = ground_y + 6;
    let left = x - width / 2;

    paint_room(access, left, top, width, height, TileType::Concrete, TileType::Air);

    // Shaft: air column lined with concrete
    for y in ground_y..=top {
        access.set_breakable(x - 1, y, TileType::Concrete);
        access.set_breakable(x + 1, y, TileType::Concrete);
        access.set_breakable(x, y, TileType::Air);
    }

    let corner = if rng.gen_bool(0.5) { left + 1 } else { left + width - 2 };
    access.set_breakable(corner, top + height - 2, TileType::GoldBlock);
}

/// Stepped sandstone pyramid with a treasure chamber and side entrance.
pub fn paint_pyramid<A: TileAccess>(access: &mut A, x: i32, ground_y: i32, rng: &mut ChaCha8Rng) {
    let half = rng.gen_range(12..=16);

    // Foundation so the base never floats over a dip
    paint_rect(access, x - half, ground_y + 1, half * 2 + 1, 2, TileType::Sandstone);

    for i in 0..=half {
        let row_half = half - i;
        for dx in -row_half..=row_half {
            access.set_breakable(x + dx, ground_y - i, TileType::Sandstone);
        }
    }

    // Chamber
    let chamber_floor = ground_y - 2;
    paint_rect(access, x - 2, chamber_floor - 3, 5, 3, TileType::Air);
    access.set_breakable(x, chamber_floor - 1, TileType::GoldBlock);

    // Entrance corridor from one flank into the chamber
    let side = if rng.gen_bool(0.5) { 1 } else { -1 };
    for step in 3..=half {
        access.set_breakable(x + side * step, chamber_floor - 1, TileType::Air);
        access.set_breakable(x + side * step, chamber_floor - 2, TileType::Air);
    }
}
