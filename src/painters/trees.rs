//! Tree painters.
//!
//! Trees grow upward from the row above `ground_y`. Trunks and leaves only
//! fill replaceable cells (air, leaves, saplings), so a tree never cuts into
//! terrain, water or another structure.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::tilemap::TileAccess;
use crate::tiles::TileType;

use super::shapes::{filled_circle, flattened_ellipse};

/// Tree variants
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TreeKind {
    Oak,
    Pine,
    Cactus,
    Dead,
    Jungle,
}

impl TreeKind {
    /// Tallest possible tree of this kind, counted in rows above the ground.
    pub fn max_height(&self) -> i32 {
        match self {
            TreeKind::Oak => 10,
            TreeKind::Pine => 11,
            TreeKind::Cactus => 5,
            TreeKind::Dead => 8,
            TreeKind::Jungle => 17,
        }
    }

    /// Widest canopy half-width.
    pub fn max_half_width(&self) -> i32 {
        match self {
            TreeKind::Oak => 3,
            TreeKind::Pine => 3,
            TreeKind::Cactus => 1,
            TreeKind::Dead => 3,
            TreeKind::Jungle => 5,
        }
    }

    /// Tree suited to the ground tile a sapling sits on.
    pub fn for_ground(ground: TileType) -> Option<TreeKind> {
        match ground {
            TileType::Grass | TileType::Dirt => Some(TreeKind::Oak),
            TileType::Snow => Some(TreeKind::Pine),
            TileType::Sand => Some(TreeKind::Cactus),
            _ => None,
        }
    }
}

/// Paint a tree of `kind` standing on the tile at `(x, ground_y)`.
pub fn paint_tree<A: TileAccess>(access: &mut A, kind: TreeKind, x: i32, ground_y: i32, rng: &mut ChaCha8Rng) {
    match kind {
        TreeKind::Oak => paint_oak(access, x, ground_y, rng),
        TreeKind::Pine => paint_pine(access, x, ground_y, rng),
        TreeKind::Cactus => paint_cactus(access, x, ground_y, rng),
        TreeKind::Dead => paint_dead_tree(access, x, ground_y, rng),
        TreeKind::Jungle => paint_jungle_tree(access, x, ground_y, rng),
    }
}

/// Column of wood from the ground up; returns the top trunk row.
fn paint_trunk<A: TileAccess>(access: &mut A, x: i32, ground_y: i32, height: i32) -> i32 {
    for i in 1..=height {
        access.set_if_replaceable(x, ground_y - i, TileType::Wood);
    }
    ground_y - height
}

fn paint_oak<A: TileAccess>(access: &mut A, x: i32, ground_y: i32, rng: &mut ChaCha8Rng) {
    let trunk = rng.gen_range(4..=6);
    let top = paint_trunk(access, x, ground_y, trunk);
    let radius = rng.gen_range(2..=3);

    for (lx, ly) in filled_circle(x, top - 1, radius) {
        // Ragged edge
        if (lx - x).abs() == radius && rng.gen_bool(0.4) {
            continue;
        }
        access.set_if_replaceable(lx, ly, TileType::Leaves);
    }
}

fn paint_pine<A: TileAccess>(access: &mut A, x: i32, ground_y: i32, rng: &mut ChaCha8Rng) {
    let trunk = rng.gen_range(6..=9);
    let top = paint_trunk(access, x, ground_y, trunk);

    // Cone of leaves from the crown down, widening every second row
    let layers = rng.gen_range(5..=7);
    for layer in 0..layers {
        let half_width = ((layer + 1) / 2).min(3);
        let y = top - 2 + layer;
        for dx in -half_width..=half_width {
            access.set_if_replaceable(x + dx, y, TileType::Leaves);
        }
    }
}

fn paint_cactus<A: TileAccess>(access: &mut A, x: i32, ground_y: i32, rng: &mut ChaCha8Rng) {
    let height = rng.gen_range(2..=4);
    for i in 1..=height {
        access.set_if_replaceable(x, ground_y - i, TileType::Cactus);
    }

    if height >= 3 && rng.gen_bool(0.5) {
        let side = if rng.gen_bool(0.5) { -1 } else { 1 };
        let arm_y = ground_y - 2;
        access.set_if_replaceable(x + side, arm_y, TileType::Cactus);
        access.set_if_replaceable(x + side, arm_y - 1, TileType::Cactus);
    }
}

fn paint_dead_tree<A: TileAccess>(access: &mut A, x: i32, ground_y: i32, rng: &mut ChaCha8Rng) {
    let trunk = rng.gen_range(3..=6);
    let top = paint_trunk(access, x, ground_y, trunk);

    let branches = rng.gen_range(1..=3);
    for _ in 0..branches {
        let side = if rng.gen_bool(0.5) { -1 } else { 1 };
        let start_y = rng.gen_range(top..=(ground_y - 2).max(top));
        let length = rng.gen_range(1..=3);
        for step in 1..=length {
            access.set_if_replaceable(x + side * step, start_y - step + 1, TileType::Wood);
        }
    }
}

fn paint_jungle_tree<A: TileAccess>(access: &mut A, x: i32, ground_y: i32, rng: &mut ChaCha8Rng) {
    let trunk = rng.gen_range(8..=13);
    let top = paint_trunk(access, x, ground_y, trunk);
    let radius = rng.gen_range(4..=5);

    for (lx, ly) in flattened_ellipse(x, top - 1, radius) {
        access.set_if_replaceable(lx, ly, TileType::Leaves);
    }

    // Hanging vines off the canopy rim
    for dx in [-radius + 1, radius - 1] {
        if rng.gen_bool(0.6) {
            let length = rng.gen_range(1..=3);
            for dy in 1..=length {
                access.set_if_replaceable(x + dx, top + dy, TileType::Leaves);
            }
        }
    }
}

/// Grow the sapling at `(x, y)` into a tree suited to the tile beneath it.
///
/// Returns false (and leaves the grid untouched) if there is no sapling or
/// the ground cannot support a tree.
pub fn grow_sapling<A: TileAccess>(access: &mut A, x: i32, y: i32, rng: &mut ChaCha8Rng) -> bool {
    if access.get(x, y) != TileType::Sapling {
        return false;
    }
    let Some(kind) = TreeKind::for_ground(access.get(x, y + 1)) else {
        return false;
    };

    access.set(x, y, TileType::Air);
    paint_tree(access, kind, x, y + 1, rng);
    true
}
