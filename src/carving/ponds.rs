//! Surface ponds in biomes that hold water.

use log::{debug, trace};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::biomes::{find_biome, BiomeConfig, BiomeLayout};
use crate::painters::shapes::paint_pond;
use crate::tilemap::TileAccess;

use super::params::PondParams;

/// True when the ground around `x` is level enough to hold a pond.
pub fn is_flat_enough(layout: &BiomeLayout, x: i32, max_gradient: i32) -> bool {
    (layout.height_at(x - 2) - layout.height_at(x + 2)).abs() < max_gradient
}

/// Try to sink a pond into the surface at column `x`.
///
/// Rejected without touching the grid when the terrain is too steep or the
/// surface row is not strictly inside the world.
pub fn try_place_pond<A: TileAccess>(
    access: &mut A,
    layout: &BiomeLayout,
    x: i32,
    radius: i32,
    max_gradient: i32,
) -> bool {
    if !is_flat_enough(layout, x, max_gradient) {
        trace!("pond at column {} rejected: too steep", x);
        return false;
    }
    let surface = layout.height_at(x);
    if surface < 1 || surface > access.height() as i32 - 2 {
        return false;
    }
    paint_pond(access, x, surface, radius) > 0
}

/// Scan the world for pond sites. Returns the number of ponds placed.
pub fn carve_ponds<A: TileAccess>(
    access: &mut A,
    layout: &BiomeLayout,
    biomes: &[BiomeConfig],
    sea_level: i32,
    params: &PondParams,
    rng: &mut ChaCha8Rng,
) -> usize {
    let width = layout.width();
    let mut placed = 0;
    let mut x = 0;

    while x < width {
        let column = x as i32;
        let water_valid = find_biome(biomes, layout.biome_at(column)).is_some_and(|b| b.water_valid);
        // Columns already under the sea need no pond
        if !water_valid || layout.height_at(column) > sea_level || !rng.gen_bool(params.chance) {
            x += 1;
            continue;
        }

        let radius = rng.gen_range(params.min_radius..=params.max_radius);
        if try_place_pond(access, layout, column, radius, params.max_gradient) {
            debug!("pond r={} at column {}", radius, column);
            placed += 1;
            x += params.spacing.max(1);
        } else {
            x += 1;
        }
    }

    placed
}
