//! Placement checks: vertical bounds and per-layer footprint claims
//!
//! A candidate is rejected (never an error) when its footprint would leave
//! the rows `0..height-1`, when a surface structure would stand under the
//! sea, or when its columns overlap a structure already placed on the same
//! layer.

use log::trace;
use rand_chacha::ChaCha8Rng;

use crate::biomes::BiomeLayout;
use crate::painters::Footprint;
use crate::tilemap::TileAccess;

use super::types::{Layer, PlacedStructure, StructureKind};

/// True if the footprint stays above the bedrock row and below row 0.
pub fn fits_vertically(footprint: Footprint, anchor_y: i32, world_height: usize) -> bool {
    let (top, bottom) = footprint.rows(anchor_y);
    top >= 0 && bottom <= world_height as i32 - 2
}

/// Inclusive column spans overlap on a ring of `width` columns.
pub fn spans_overlap(a: (i32, i32), b: (i32, i32), width: usize) -> bool {
    let w = width as i32;
    if a.1 - a.0 + 1 >= w || b.1 - b.0 + 1 >= w {
        return true;
    }
    (-2..=2).any(|k| a.0 <= b.1 + k * w && b.0 + k * w <= a.1)
}

/// Column spans claimed so far, per layer.
#[derive(Clone, Debug)]
pub struct Claims {
    width: usize,
    spans: Vec<(Layer, (i32, i32))>,
}

impl Claims {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            spans: Vec::new(),
        }
    }

    pub fn is_free(&self, layer: Layer, span: (i32, i32)) -> bool {
        !self
            .spans
            .iter()
            .any(|(l, claimed)| *l == layer && spans_overlap(*claimed, span, self.width))
    }

    pub fn claim(&mut self, layer: Layer, span: (i32, i32)) {
        self.spans.push((layer, span));
    }
}

/// Check a candidate at column `x` and paint it if it passes.
pub fn try_place<A: TileAccess>(
    access: &mut A,
    layout: &BiomeLayout,
    claims: &mut Claims,
    kind: StructureKind,
    x: i32,
    sea_level: i32,
    rng: &mut ChaCha8Rng,
) -> Option<PlacedStructure> {
    let surface = layout.height_at(x);
    let y = kind.anchor_row(surface);
    let footprint = kind.footprint();

    if !fits_vertically(footprint, y, access.height()) {
        trace!("{} at column {} rejected: out of vertical bounds", kind.display_name(), x);
        return None;
    }
    if kind.layer() != Layer::Sky && surface > sea_level {
        trace!("{} at column {} rejected: under water", kind.display_name(), x);
        return None;
    }

    let placed = PlacedStructure { kind, x, y };
    if !claims.is_free(kind.layer(), placed.columns()) {
        trace!("{} at column {} rejected: overlaps a claim", kind.display_name(), x);
        return None;
    }

    kind.paint(access, x, y, rng);
    claims.claim(kind.layer(), placed.columns());
    Some(placed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biomes::{BiomeId, BiomeRun};
    use crate::tilemap::Tilemap;
    use crate::tiles::TileType;
    use rand::SeedableRng;

    fn flat_layout(width: usize, surface: i32) -> BiomeLayout {
        BiomeLayout {
            heights: vec![surface; width],
            biome_by_column: vec![BiomeId::Plains; width],
            runs: vec![BiomeRun {
                biome: BiomeId::Plains,
                start: 0,
                len: width,
            }],
        }
    }

    #[test]
    fn test_fits_vertically() {
        let fp = Footprint::new(2, 5, 3);
        assert!(fits_vertically(fp, 5, 20));
        assert!(!fits_vertically(fp, 4, 20));
        // Bottom row 18 is the last row above bedrock
        assert!(fits_vertically(fp, 15, 20));
        assert!(!fits_vertically(fp, 16, 20));
    }

    #[test]
    fn test_spans_overlap_across_seam() {
        assert!(spans_overlap((0, 4), (3, 8), 100));
        assert!(!spans_overlap((0, 4), (5, 8), 100));
        assert!(spans_overlap((-3, 2), (97, 99), 100));
        assert!(spans_overlap((98, 102), (0, 1), 100));
        assert!(!spans_overlap((98, 102), (3, 6), 100));
    }

    #[test]
    fn test_claims_are_per_layer() {
        let mut claims = Claims::new(200);
        claims.claim(Layer::Surface, (10, 20));
        assert!(!claims.is_free(Layer::Surface, (15, 25)));
        assert!(claims.is_free(Layer::Sky, (15, 25)));
        assert!(claims.is_free(Layer::Surface, (21, 30)));
    }

    #[test]
    fn test_try_place_rejects_out_of_bounds() {
        let layout = flat_layout(64, 5);
        let mut map = Tilemap::new_with(64, 64, TileType::Stone);
        let before = map.clone();
        let mut claims = Claims::new(64);
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        // Monolith needs 11 rows of sky
        let placed = try_place(&mut map, &layout, &mut claims, StructureKind::Monolith, 20, 60, &mut rng);
        assert!(placed.is_none());
        assert_eq!(map.as_slice(), before.as_slice());
    }

    #[test]
    fn test_try_place_rejects_overlap() {
        let layout = flat_layout(128, 40);
        let mut map = Tilemap::new_with(128, 64, TileType::Air);
        let mut claims = Claims::new(128);
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        assert!(try_place(&mut map, &layout, &mut claims, StructureKind::Ruins, 30, 50, &mut rng).is_some());
        assert!(try_place(&mut map, &layout, &mut claims, StructureKind::Ruins, 40, 50, &mut rng).is_none());
        assert!(try_place(&mut map, &layout, &mut claims, StructureKind::Ruins, 47, 50, &mut rng).is_some());
        // Different layer, same columns
        assert!(try_place(&mut map, &layout, &mut claims, StructureKind::Bunker, 30, 50, &mut rng).is_some());
    }

    #[test]
    fn test_surface_structures_stay_dry() {
        let layout = flat_layout(64, 40);
        let mut map = Tilemap::new_with(64, 64, TileType::Air);
        let mut claims = Claims::new(64);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let placed = try_place(&mut map, &layout, &mut claims, StructureKind::Ruins, 20, 30, &mut rng);
        assert!(placed.is_none());
    }
}
