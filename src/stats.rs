//! Summary statistics for a generated world.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::biomes::BiomeLayout;
use crate::structures::PlacedStructure;
use crate::tilemap::Tilemap;
use crate::tiles::TileType;

/// Counts gathered while generating. Keys are display names so the JSON
/// reads without a lookup table.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct WorldStats {
    pub tiles: BTreeMap<String, usize>,
    pub biome_runs: usize,
    pub biome_columns: BTreeMap<String, usize>,
    pub structures: BTreeMap<String, usize>,
    pub caves: usize,
    pub rifts: usize,
    pub ponds: usize,
    pub waterfalls: usize,
    pub trees: usize,
    /// Ore placed by the fill, before carving removed any
    pub coal_seeded: usize,
    pub gold_seeded: usize,
    pub min_surface: i32,
    pub max_surface: i32,
}

impl WorldStats {
    /// Tile histogram over the whole grid.
    pub fn record_grid(&mut self, grid: &Tilemap<TileType>) {
        let mut counts = [0usize; TileType::ALL.len()];
        for tile in grid.as_slice() {
            counts[tile.code() as usize] += 1;
        }
        self.tiles = TileType::ALL
            .iter()
            .zip(counts)
            .filter(|(_, n)| *n > 0)
            .map(|(tile, n)| (tile.display_name().to_string(), n))
            .collect();
    }

    pub fn record_layout(&mut self, layout: &BiomeLayout) {
        self.biome_runs = layout.runs.len();
        self.biome_columns.clear();
        for run in &layout.runs {
            *self.biome_columns.entry(run.biome.display_name().to_string()).or_default() += run.len;
        }
        self.min_surface = layout.heights.iter().copied().min().unwrap_or(0);
        self.max_surface = layout.heights.iter().copied().max().unwrap_or(0);
    }

    pub fn record_structures(&mut self, structures: &[PlacedStructure]) {
        self.structures.clear();
        for s in structures {
            *self.structures.entry(s.kind.display_name().to_string()).or_default() += 1;
        }
    }

    pub fn tile_count(&self, tile: TileType) -> usize {
        self.tiles.get(tile.display_name()).copied().unwrap_or(0)
    }

    /// Human-readable summary, one item per line.
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Biome runs: {}", self.biome_runs),
            format!("Surface rows: {}..={}", self.min_surface, self.max_surface),
            format!(
                "Caves: {}  Rifts: {}  Ponds: {}  Waterfalls: {}  Trees: {}",
                self.caves, self.rifts, self.ponds, self.waterfalls, self.trees
            ),
        ];
        for (name, count) in &self.structures {
            lines.push(format!("  {}: {}", name, count));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biomes::{BiomeId, BiomeRun};
    use crate::structures::StructureKind;

    #[test]
    fn test_tile_histogram() {
        let mut grid = Tilemap::new_with(4, 4, TileType::Stone);
        grid.set(0, 0, TileType::Air);
        grid.set(1, 0, TileType::Air);
        let mut stats = WorldStats::default();
        stats.record_grid(&grid);
        assert_eq!(stats.tile_count(TileType::Air), 2);
        assert_eq!(stats.tile_count(TileType::Stone), 14);
        assert_eq!(stats.tile_count(TileType::Water), 0);
        assert_eq!(stats.tiles.len(), 2);
    }

    #[test]
    fn test_layout_and_structures() {
        let layout = BiomeLayout {
            heights: vec![10, 12, 9, 11],
            biome_by_column: vec![BiomeId::Plains, BiomeId::Plains, BiomeId::Desert, BiomeId::Desert],
            runs: vec![
                BiomeRun { biome: BiomeId::Plains, start: 0, len: 2 },
                BiomeRun { biome: BiomeId::Desert, start: 2, len: 2 },
            ],
        };
        let mut stats = WorldStats::default();
        stats.record_layout(&layout);
        stats.record_structures(&[
            PlacedStructure { kind: StructureKind::Ruins, x: 0, y: 10 },
            PlacedStructure { kind: StructureKind::Ruins, x: 2, y: 9 },
        ]);

        assert_eq!(stats.biome_runs, 2);
        assert_eq!(stats.min_surface, 9);
        assert_eq!(stats.max_surface, 12);
        assert_eq!(stats.structures.get("Ruins"), Some(&2));

        let json = serde_json::to_string(&stats).expect("stats serialize");
        assert!(json.contains("\"biome_runs\":2"));
        assert!(stats.summary().contains("Ruins: 2"));
    }
}
