//! Image and JSON export

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};

use crate::biomes::BiomeId;
use crate::carving::Rift;
use crate::error::ExportError;
use crate::stats::WorldStats;
use crate::structures::PlacedStructure;
use crate::tilemap::Tilemap;
use crate::tiles::TileType;
use crate::world::World;

/// Render the tile grid with one `scale x scale` block per tile.
pub fn render_tiles(grid: &Tilemap<TileType>, scale: u32) -> Result<RgbImage, ExportError> {
    let scaled = |n: usize| u32::try_from(n).ok().and_then(|n| n.checked_mul(scale));
    let (Some(width), Some(height)) = (scaled(grid.width), scaled(grid.height)) else {
        return Err(ExportError::InvalidScale(scale));
    };
    // Three channels per pixel must fit in one buffer
    let bytes = (width as usize).checked_mul(height as usize).and_then(|n| n.checked_mul(3));
    if scale == 0 || bytes.is_none() {
        return Err(ExportError::InvalidScale(scale));
    }
    let mut img: RgbImage = ImageBuffer::new(width, height);

    for (x, y, tile) in grid.iter() {
        let color = Rgb(tile.color());
        for dy in 0..scale {
            for dx in 0..scale {
                img.put_pixel(x as u32 * scale + dx, y as u32 * scale + dy, color);
            }
        }
    }

    Ok(img)
}

/// Export the world as a PNG.
pub fn export_png(world: &World, path: &Path, scale: u32) -> Result<(), ExportError> {
    let img = render_tiles(&world.grid, scale)?;
    img.save(path)?;
    Ok(())
}

/// Export a thin strip coloured by each column's biome.
pub fn export_biome_strip(world: &World, path: &Path, strip_height: u32) -> Result<(), ExportError> {
    let width = world.width() as u32;
    let mut img: RgbImage = ImageBuffer::new(width, strip_height.max(1));
    for x in 0..width {
        let biome = world.biome_at(x as i32);
        let color = biome_color(biome);
        for y in 0..strip_height.max(1) {
            img.put_pixel(x, y, Rgb(color));
        }
    }
    img.save(path)?;
    Ok(())
}

fn biome_color(biome: BiomeId) -> [u8; 3] {
    match biome {
        BiomeId::Plains => [124, 186, 84],
        BiomeId::Forest => [34, 110, 46],
        BiomeId::Desert => [222, 200, 130],
        BiomeId::Snow => [235, 240, 250],
        BiomeId::Ocean => [40, 90, 200],
        BiomeId::Mountains => [130, 120, 110],
        BiomeId::Wasteland => [120, 100, 80],
        BiomeId::Jungle => [20, 140, 60],
    }
}

/// Write the world's stats and structure list as pretty JSON.
pub fn export_stats_json(world: &World, path: &Path) -> Result<(), ExportError> {
    #[derive(serde::Serialize)]
    struct Report<'a> {
        seed: u64,
        width: usize,
        height: usize,
        sea_level: i32,
        stats: &'a WorldStats,
        structures: &'a [PlacedStructure],
        rifts: &'a [Rift],
    }

    let report = Report {
        seed: world.seed(),
        width: world.width(),
        height: world.height(),
        sea_level: world.config.sea_level,
        stats: &world.stats,
        structures: &world.structures,
        rifts: &world.rifts,
    };

    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &report)?;
    Ok(())
}
