//! Waterfalls over cliff edges.
//!
//! A cliff is a drop of more than `cliff_threshold` rows within a few
//! columns. The waterfall is a small source pond, a channel to the brink of
//! the steepest step, and a single column of water traced down its face.

use log::debug;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::biomes::{find_biome, BiomeConfig, BiomeLayout};
use crate::painters::shapes::paint_pond;
use crate::tilemap::TileAccess;
use crate::tiles::TileType;

use super::params::WaterfallParams;

/// A drop found next to a candidate source column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cliff {
    /// +1 when the ground falls away to the right, -1 to the left
    pub dir: i32,
    /// Offset from the source of the column the water falls down: the
    /// steepest single-column step on the way to the drop
    pub lip: i32,
}

/// Look for a drop of more than `threshold` rows within `search_radius`
/// columns of `x`, right side first at each distance.
pub fn find_cliff(layout: &BiomeLayout, x: i32, threshold: i32, search_radius: i32) -> Option<Cliff> {
    let top = layout.height_at(x);
    for offset in 1..=search_radius {
        for dir in [1, -1] {
            if layout.height_at(x + dir * offset) - top > threshold {
                return Some(Cliff {
                    dir,
                    lip: steepest_step(layout, x, dir, offset),
                });
            }
        }
    }
    None
}

/// Offset in `1..=reach` with the largest drop from its neighbour toward `x`.
fn steepest_step(layout: &BiomeLayout, x: i32, dir: i32, reach: i32) -> i32 {
    let mut best = (1, i32::MIN);
    for k in 1..=reach {
        let step = layout.height_at(x + dir * k) - layout.height_at(x + dir * (k - 1));
        if step > best.1 {
            best = (k, step);
        }
    }
    best.0
}

/// Fill air with water straight down from `(x, top)`.
///
/// Stops at the first non-air tile or the bedrock row, whichever is first.
pub fn trace_fall<A: TileAccess>(access: &mut A, x: i32, top: i32) -> usize {
    let last_row = access.height() as i32 - 2;
    let mut filled = 0;
    let mut y = top.max(0);
    while y <= last_row && access.get(x, y) == TileType::Air {
        access.set(x, y, TileType::Water);
        filled += 1;
        y += 1;
    }
    filled
}

/// Place a waterfall whose source sits on column `x` above `cliff`.
///
/// The source pond feeds a channel cut into the surface up to the brink,
/// and the fall is traced down the lip column from the brink's surface row.
/// Returns the number of cells turned to water.
pub fn place_waterfall<A: TileAccess>(
    access: &mut A,
    layout: &BiomeLayout,
    x: i32,
    cliff: Cliff,
    params: &WaterfallParams,
) -> usize {
    let last_row = access.height() as i32 - 2;
    let top = layout.height_at(x);
    if top < 1 || top > last_row || cliff.lip < 1 {
        return 0;
    }

    let mut filled = paint_pond(access, x, top, params.source_radius);

    // Channel along the surface from the pond to the brink
    for k in 1..cliff.lip {
        let cx = x + cliff.dir * k;
        let cy = layout.height_at(cx);
        if (0..=last_row).contains(&cy) && access.get(cx, cy).is_solid() {
            access.set_breakable(cx, cy, TileType::Water);
            filled += 1;
        }
    }

    let brink = layout.height_at(x + cliff.dir * (cliff.lip - 1));
    filled + trace_fall(access, x + cliff.dir * cliff.lip, brink)
}

/// Scan for cliffs and drop waterfalls on some of them.
///
/// Returns the source column of every waterfall placed, left to right.
pub fn carve_waterfalls<A: TileAccess>(
    access: &mut A,
    layout: &BiomeLayout,
    biomes: &[BiomeConfig],
    sea_level: i32,
    params: &WaterfallParams,
    rng: &mut ChaCha8Rng,
) -> Vec<i32> {
    let width = layout.width();
    let mut sources = Vec::new();
    let mut x = 0;

    while x < width {
        let column = x as i32;
        let water_valid = find_biome(biomes, layout.biome_at(column)).is_some_and(|b| b.water_valid);
        let cliff = if water_valid && layout.height_at(column) < sea_level {
            find_cliff(layout, column, params.cliff_threshold, params.search_radius)
        } else {
            None
        };

        match cliff {
            Some(cliff) if rng.gen_bool(params.chance) => {
                let cells = place_waterfall(access, layout, column, cliff, params);
                if cells > 0 {
                    debug!("waterfall at column {} ({} cells)", column, cells);
                    sources.push(column);
                    x += params.cooldown.max(1);
                    continue;
                }
                x += 1;
            }
            _ => x += 1,
        }
    }

    sources
}
