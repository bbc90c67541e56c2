//! Geometric point sets and the basic stamping primitives built on them.
//!
//! Point generators return raw (unwrapped) coordinates; the accessor wraps
//! them when they are written.

use crate::tilemap::TileAccess;
use crate::tiles::TileType;

/// Generate points forming a filled circle
pub fn filled_circle(center_x: i32, center_y: i32, radius: i32) -> Vec<(i32, i32)> {
    let mut points = Vec::new();

    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                points.push((center_x + dx, center_y + dy));
            }
        }
    }

    points
}

/// Generate an ellipse squashed to half height: `dx² + 4·dy² <= r²`
pub fn flattened_ellipse(center_x: i32, center_y: i32, radius: i32) -> Vec<(i32, i32)> {
    let mut points = Vec::new();
    let half = radius / 2;

    for dy in -half..=half {
        for dx in -radius..=radius {
            if dx * dx + dy * dy * 4 <= radius * radius {
                points.push((center_x + dx, center_y + dy));
            }
        }
    }

    points
}

/// Stamp a filled circle of `tile`. Unbreakable tiles are left alone.
///
/// Returns the number of cells changed.
pub fn paint_blob<A: TileAccess>(access: &mut A, center_x: i32, center_y: i32, radius: i32, tile: TileType) -> usize {
    let mut changed = 0;
    for (x, y) in filled_circle(center_x, center_y, radius) {
        let current = access.get(x, y);
        if current != tile && !current.properties().unbreakable {
            access.set(x, y, tile);
            changed += 1;
        }
    }
    changed
}

/// Stamp the lower half of a flattened ellipse as water, replacing terrain.
///
/// Only cells at or below `center_y` that currently hold breakable solid
/// ground are flooded, so the pond never hangs in open air.
pub fn paint_pond<A: TileAccess>(access: &mut A, center_x: i32, center_y: i32, radius: i32) -> usize {
    let mut changed = 0;
    for (x, y) in flattened_ellipse(center_x, center_y, radius) {
        if y < center_y {
            continue;
        }
        let current = access.get(x, y);
        let props = current.properties();
        if props.solid && !props.unbreakable {
            access.set(x, y, TileType::Water);
            changed += 1;
        }
    }
    changed
}

/// Stamp an axis-aligned rectangle, top-left at `(x, y)`.
pub fn paint_rect<A: TileAccess>(access: &mut A, x: i32, y: i32, width: i32, height: i32, tile: TileType) {
    for dy in 0..height {
        for dx in 0..width {
            access.set_breakable(x + dx, y + dy, tile);
        }
    }
}

/// Stamp the outline of a rectangle with `wall`, filling the inside with `interior`.
pub fn paint_room<A: TileAccess>(
    access: &mut A,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    wall: TileType,
    interior: TileType,
) {
    for dy in 0..height {
        for dx in 0..width {
            let edge = dx == 0 || dy == 0 || dx == width - 1 || dy == height - 1;
            access.set_breakable(x + dx, y + dy, if edge { wall } else { interior });
        }
    }
}
