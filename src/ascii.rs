//! ASCII rendering and export for generated worlds
//!
//! One character per tile, one line per row, preceded by a header and a
//! biome ruler and followed by a legend and the world stats.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::Local;

use crate::tilemap::Tilemap;
use crate::tiles::TileType;
use crate::world::World;

/// Render rows `rows` of the grid, one line per row.
pub fn render_ascii_map(grid: &Tilemap<TileType>, rows: std::ops::Range<usize>) -> String {
    let rows = rows.start.min(grid.height)..rows.end.min(grid.height);
    let mut result = String::with_capacity((grid.width + 1) * rows.len());
    for y in rows {
        for x in 0..grid.width {
            result.push(grid.get(x as i32, y as i32).ascii_char());
        }
        result.push('\n');
    }
    result
}

/// One character per column naming its biome.
pub fn biome_ruler(world: &World) -> String {
    (0..world.width() as i32).map(|x| world.biome_at(x).ascii_char()).collect()
}

/// Generate legend for tile characters
pub fn tile_legend() -> String {
    let mut legend = String::from("=== TILE LEGEND ===\n");
    for chunk in TileType::ALL.chunks(4) {
        let line: Vec<String> = chunk
            .iter()
            .map(|t| format!("{} {:<12}", t.ascii_char(), t.display_name()))
            .collect();
        legend.push_str("  ");
        legend.push_str(line.join(" ").trim_end());
        legend.push('\n');
    }
    legend
}

/// Write the whole world to a text file.
pub fn export_world_file(world: &World, path: &Path) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);

    writeln!(file, "=== TILEWORLD ===")?;
    writeln!(file, "Seed: {}", world.seed())?;
    writeln!(file, "Size: {}x{}", world.width(), world.height())?;
    writeln!(file, "Sea level: {}", world.config.sea_level)?;
    writeln!(file, "Generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(file)?;

    writeln!(file, "=== BIOMES ===")?;
    writeln!(file, "{}", biome_ruler(world))?;
    writeln!(file)?;

    writeln!(file, "=== MAP ===")?;
    write!(file, "{}", render_ascii_map(&world.grid, 0..world.height()))?;
    writeln!(file)?;

    write!(file, "{}", tile_legend())?;
    writeln!(file)?;

    writeln!(file, "=== STATISTICS ===")?;
    writeln!(file, "{}", world.stats.summary())?;
    let total = (world.width() * world.height()) as f64;
    for (name, count) in &world.stats.tiles {
        writeln!(file, "  {:14} {:>9} ({:>5.1}%)", name, count, 100.0 * *count as f64 / total)?;
    }

    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_rows() {
        let mut grid = Tilemap::new_with(4, 3, TileType::Air);
        grid.set(0, 2, TileType::Bedrock);
        grid.set(3, 1, TileType::Water);
        let text = render_ascii_map(&grid, 0..3);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].chars().nth(3), Some(TileType::Water.ascii_char()));
        assert_eq!(lines[2].chars().next(), Some(TileType::Bedrock.ascii_char()));
    }

    #[test]
    fn test_render_clamps_range() {
        let grid = Tilemap::new_with(2, 2, TileType::Air);
        assert_eq!(render_ascii_map(&grid, 1..10).lines().count(), 1);
    }

    #[test]
    fn test_legend_lists_every_tile() {
        let legend = tile_legend();
        for tile in TileType::ALL {
            assert!(legend.contains(tile.display_name()));
        }
    }
}
