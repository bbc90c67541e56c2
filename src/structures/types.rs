//! Structure kinds and placement rules
//!
//! Defines what can be placed, which layer of the world it claims, and the
//! per-column scan rules that decide where it may appear.

use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::biomes::BiomeId;
use crate::painters::buildings::{
    paint_bunker, paint_monolith, paint_pyramid, paint_ruins, FOOTPRINT_BUNKER, FOOTPRINT_MONOLITH,
    FOOTPRINT_PYRAMID, FOOTPRINT_RUINS,
};
use crate::painters::islands::{
    paint_floating_island, paint_giant_floating_ruin, FOOTPRINT_FLOATING_ISLAND, FOOTPRINT_GIANT_RUIN,
};
use crate::painters::Footprint;
use crate::tilemap::TileAccess;

/// Vertical band a structure occupies. Footprints only conflict within a layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layer {
    /// Standing on the surface
    Surface,
    /// Buried below the surface
    Underground,
    /// Floating well above the surface
    Sky,
}

/// Type of structure
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureKind {
    /// Obsidian pillar (3 columns)
    Monolith,
    /// Broken brick walls (9-15 columns)
    Ruins,
    /// Concrete room under a shaft (9-13 columns)
    Bunker,
    /// Small island hanging in the sky (13-21 columns)
    FloatingIsland,
    /// Sandstone pyramid, once per world
    Pyramid,
    /// Large sky island with a ruined hall, once per world
    GiantFloatingRuin,
}

impl StructureKind {
    pub const ALL: [StructureKind; 6] = [
        StructureKind::Monolith,
        StructureKind::Ruins,
        StructureKind::Bunker,
        StructureKind::FloatingIsland,
        StructureKind::Pyramid,
        StructureKind::GiantFloatingRuin,
    ];

    pub fn layer(&self) -> Layer {
        match self {
            StructureKind::Monolith | StructureKind::Ruins | StructureKind::Pyramid => Layer::Surface,
            StructureKind::Bunker => Layer::Underground,
            StructureKind::FloatingIsland | StructureKind::GiantFloatingRuin => Layer::Sky,
        }
    }

    /// Bounding box of the painter's writes around the anchor.
    pub fn footprint(&self) -> Footprint {
        match self {
            StructureKind::Monolith => FOOTPRINT_MONOLITH,
            StructureKind::Ruins => FOOTPRINT_RUINS,
            StructureKind::Bunker => FOOTPRINT_BUNKER,
            StructureKind::FloatingIsland => FOOTPRINT_FLOATING_ISLAND,
            StructureKind::Pyramid => FOOTPRINT_PYRAMID,
            StructureKind::GiantFloatingRuin => FOOTPRINT_GIANT_RUIN,
        }
    }

    /// Anchor row for a structure over a column whose surface is `surface`.
    pub fn anchor_row(&self, surface: i32) -> i32 {
        match self {
            StructureKind::FloatingIsland => surface - 45,
            StructureKind::GiantFloatingRuin => surface - 60,
            _ => surface,
        }
    }

    pub fn paint<A: TileAccess>(&self, access: &mut A, x: i32, y: i32, rng: &mut ChaCha8Rng) {
        match self {
            StructureKind::Monolith => paint_monolith(access, x, y, rng),
            StructureKind::Ruins => paint_ruins(access, x, y, rng),
            StructureKind::Bunker => paint_bunker(access, x, y, rng),
            StructureKind::FloatingIsland => paint_floating_island(access, x, y, rng),
            StructureKind::Pyramid => paint_pyramid(access, x, y, rng),
            StructureKind::GiantFloatingRuin => paint_giant_floating_ruin(access, x, y, rng),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StructureKind::Monolith => "Monolith",
            StructureKind::Ruins => "Ruins",
            StructureKind::Bunker => "Bunker",
            StructureKind::FloatingIsland => "Floating Island",
            StructureKind::Pyramid => "Ancient Pyramid",
            StructureKind::GiantFloatingRuin => "Giant Floating Ruin",
        }
    }
}

/// Scan rule: in `biomes`, each column rolls `chance`; a placement skips the
/// scan ahead `skip` columns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureRule {
    pub kind: StructureKind,
    pub biomes: Vec<BiomeId>,
    pub chance: f64,
    pub skip: usize,
}

impl FeatureRule {
    pub fn new(kind: StructureKind, biomes: &[BiomeId], chance: f64, skip: usize) -> Self {
        Self {
            kind,
            biomes: biomes.to_vec(),
            chance,
            skip,
        }
    }

    pub fn allows(&self, biome: BiomeId) -> bool {
        self.biomes.contains(&biome)
    }
}

/// Shipped scan rules.
pub fn default_rules() -> Vec<FeatureRule> {
    use BiomeId::*;
    vec![
        FeatureRule::new(StructureKind::Monolith, &[Plains, Wasteland, Snow], 0.004, 48),
        FeatureRule::new(StructureKind::Ruins, &[Plains, Forest, Desert, Jungle], 0.003, 64),
        FeatureRule::new(StructureKind::Bunker, &[Wasteland, Mountains, Snow], 0.002, 96),
        FeatureRule::new(
            StructureKind::FloatingIsland,
            &[Plains, Forest, Jungle, Ocean, Mountains],
            0.002,
            120,
        ),
    ]
}

/// A structure that made it into the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PlacedStructure {
    pub kind: StructureKind,
    /// Anchor column
    pub x: i32,
    /// Anchor row
    pub y: i32,
}

impl PlacedStructure {
    pub fn layer(&self) -> Layer {
        self.kind.layer()
    }

    /// Inclusive column span, unwrapped.
    pub fn columns(&self) -> (i32, i32) {
        self.kind.footprint().columns(self.x)
    }
}
