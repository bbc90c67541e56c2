//! Structure and feature placement
//!
//! Two passes over the finished terrain:
//! 1. Each [`FeatureRule`] scans the columns left to right. A column in an
//!    allowed biome rolls the rule's chance; a successful placement skips the
//!    scan ahead by the rule's `skip`, so structures of one kind never
//!    originate closer than that (the seam included).
//! 2. Singletons (the ancient pyramid and the giant floating ruin) sweep the
//!    middle half of the world from a random column and take the first one
//!    that fits.
//!
//! Rejected candidates are dropped silently; see [`placement`].

pub mod placement;
pub mod types;

use log::debug;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::biomes::BiomeLayout;
use crate::tilemap::TileAccess;

pub use placement::{fits_vertically, spans_overlap, try_place, Claims};
pub use types::{default_rules, FeatureRule, Layer, PlacedStructure, StructureKind};

/// Placement configuration
#[derive(Clone, Debug, PartialEq)]
pub struct StructureParams {
    pub rules: Vec<FeatureRule>,
    /// Placed once per world after the scan
    pub singletons: Vec<StructureKind>,
}

impl Default for StructureParams {
    fn default() -> Self {
        Self {
            rules: default_rules(),
            singletons: vec![StructureKind::Pyramid, StructureKind::GiantFloatingRuin],
        }
    }
}

/// Run one rule's scan, returning what it placed.
pub fn scan_rule<A: TileAccess>(
    access: &mut A,
    layout: &BiomeLayout,
    claims: &mut Claims,
    rule: &FeatureRule,
    sea_level: i32,
    rng: &mut ChaCha8Rng,
) -> Vec<PlacedStructure> {
    let width = layout.width();
    let skip = rule.skip.max(1);
    let mut placed = Vec::new();
    let mut end = width;
    let mut x = 0;

    while x < end {
        let column = x as i32;
        if !rule.allows(layout.biome_at(column)) || !rng.gen_bool(rule.chance) {
            x += 1;
            continue;
        }

        match try_place(access, layout, claims, rule.kind, column, sea_level, rng) {
            Some(structure) => {
                debug!("{} at ({}, {})", rule.kind.display_name(), structure.x, structure.y);
                if placed.is_empty() {
                    // Keep the last origin `skip` columns short of the first one across the seam
                    end = end.min((x + width).saturating_sub(skip));
                }
                placed.push(structure);
                x += skip;
            }
            None => x += 1,
        }
    }

    placed
}

/// Place a singleton in the middle half of the world.
///
/// The sweep starts at a random column and walks the whole middle half,
/// wrapping within it, until a column passes [`try_place`]. `None` only when
/// no column in that range can take the structure.
pub fn place_singleton<A: TileAccess>(
    access: &mut A,
    layout: &BiomeLayout,
    claims: &mut Claims,
    kind: StructureKind,
    sea_level: i32,
    rng: &mut ChaCha8Rng,
) -> Option<PlacedStructure> {
    let width = layout.width();
    let lo = width / 4;
    let hi = (3 * width / 4).max(lo);
    let span = hi - lo + 1;
    let offset = rng.gen_range(0..span);

    for i in 0..span {
        let x = (lo + (offset + i) % span) as i32;
        if let Some(s) = try_place(access, layout, claims, kind, x, sea_level, rng) {
            debug!("{} at ({}, {})", kind.display_name(), s.x, s.y);
            return Some(s);
        }
    }

    debug!("{} skipped: no column in {}..={} fits", kind.display_name(), lo, hi);
    None
}

/// Place every scanned feature, then the singletons.
pub fn place_structures<A: TileAccess>(
    access: &mut A,
    layout: &BiomeLayout,
    sea_level: i32,
    params: &StructureParams,
    rng: &mut ChaCha8Rng,
) -> Vec<PlacedStructure> {
    let mut claims = Claims::new(layout.width());
    let mut placed = Vec::new();

    for rule in &params.rules {
        placed.extend(scan_rule(access, layout, &mut claims, rule, sea_level, rng));
    }
    for &kind in &params.singletons {
        placed.extend(place_singleton(access, layout, &mut claims, kind, sea_level, rng));
    }

    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biomes::{BiomeId, BiomeRun};
    use crate::tilemap::{wrap, Tilemap};
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

    fn ring_distance(a: i32, b: i32, width: usize) -> usize {
        let d = wrap(a - b, width);
        d.min(width - d)
    }

    #[test]
    fn test_same_kind_spacing() {
        let width = 1000;
        let layout = flat_layout(width, 80);
        let rule = FeatureRule::new(StructureKind::Monolith, &[BiomeId::Plains], 0.5, 48);

        for seed in 0..20u64 {
            let mut map = Tilemap::new_with(width, 128, TileType::Air);
            let mut claims = Claims::new(width);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let placed = scan_rule(&mut map, &layout, &mut claims, &rule, 100, &mut rng);
            assert!(placed.len() > 5);

            for (i, a) in placed.iter().enumerate() {
                for b in &placed[i + 1..] {
                    assert!(ring_distance(a.x, b.x, width) >= 48, "{} and {} too close", a.x, b.x);
                }
            }
        }
    }

    #[test]
    fn test_rule_respects_biomes() {
        let width = 400;
        let mut layout = flat_layout(width, 80);
        layout.biome_by_column[..200].fill(BiomeId::Desert);
        let rule = FeatureRule::new(StructureKind::Monolith, &[BiomeId::Plains], 1.0, 10);
        let mut map = Tilemap::new_with(width, 128, TileType::Air);
        let mut claims = Claims::new(width);
        let placed = scan_rule(&mut map, &layout, &mut claims, &rule, 100, &mut ChaCha8Rng::seed_from_u64(1));
        assert!(!placed.is_empty());
        assert!(placed.iter().all(|s| s.x >= 200));
    }

    #[test]
    fn test_singletons_in_middle_half() {
        let width = 800;
        let layout = flat_layout(width, 100);
        for seed in 0..20u64 {
            let mut map = Tilemap::new_with(width, 200, TileType::Air);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let params = StructureParams {
                rules: Vec::new(),
                ..StructureParams::default()
            };
            let placed = place_structures(&mut map, &layout, 150, &params, &mut rng);
            assert_eq!(placed.len(), 2);
            for s in placed {
                assert!(s.x >= 200 && s.x <= 600);
            }
        }
    }

    #[test]
    fn test_singleton_finds_dry_free_column() {
        let width = 800;
        let mut layout = flat_layout(width, 160);
        // Only 300..=360 is above the sea
        layout.heights[300..=360].fill(100);
        for seed in 0..10u64 {
            let mut map = Tilemap::new_with(width, 200, TileType::Air);
            let mut claims = Claims::new(width);
            claims.claim(Layer::Surface, (300, 320));
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let placed = place_singleton(&mut map, &layout, &mut claims, StructureKind::Pyramid, 150, &mut rng)
                .expect("a dry column is free");
            let (left, _) = placed.columns();
            assert!(left > 320, "overlaps the claim at {}", placed.x);
            assert!(layout.heights[placed.x as usize] <= 150);
        }
    }

    #[test]
    fn test_singleton_skipped_when_no_room() {
        let layout = flat_layout(400, 10);
        let mut map = Tilemap::new_with(400, 64, TileType::Air);
        let mut claims = Claims::new(400);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let placed = place_singleton(&mut map, &layout, &mut claims, StructureKind::Pyramid, 50, &mut rng);
        assert!(placed.is_none());
    }
}
