//! Ocean rifts: parabolic trenches cut into the sea floor.

use log::{debug, trace};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::biomes::{BiomeId, BiomeLayout};
use crate::tilemap::TileAccess;
use crate::tiles::TileType;

use super::params::RiftParams;

/// A carved rift, by starting column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Rift {
    pub start: i32,
    pub width: i32,
    pub depth: i32,
}

/// True if every column in `from..=to` is ocean.
fn ocean_span(layout: &BiomeLayout, from: i32, to: i32) -> bool {
    (from..=to).all(|x| layout.biome_at(x) == BiomeId::Ocean)
}

/// Depth of the trench at offset `i` of a rift `width` wide.
pub fn rift_profile(i: i32, width: i32, depth: i32) -> i32 {
    let t = 2.0 * (i as f64 + 0.5) / width as f64 - 1.0;
    (depth as f64 * (1.0 - t * t)).round() as i32
}

/// Carve a single rift. Cells down to the trench floor become water; floor
/// cells may turn to coal. The bedrock row and the row above it are kept.
pub fn carve_rift<A: TileAccess>(
    access: &mut A,
    layout: &BiomeLayout,
    rift: Rift,
    floor_coal_chance: f64,
    rng: &mut ChaCha8Rng,
) {
    let floor_limit = access.height() as i32 - 2;
    for i in 0..rift.width {
        let x = rift.start + i;
        let surface = layout.height_at(x);
        let bottom = (surface + rift_profile(i, rift.width, rift.depth)).min(floor_limit - 1);

        for y in surface.max(0)..=bottom {
            access.set_breakable(x, y, TileType::Water);
        }
        // No coal under a trench that carved nothing
        if rng.gen_bool(floor_coal_chance) && bottom >= surface.max(0) {
            access.set_breakable(x, bottom + 1, TileType::CoalOre);
        }
    }
}

/// Scan ocean runs for rift sites.
pub fn carve_rifts<A: TileAccess>(
    access: &mut A,
    layout: &BiomeLayout,
    params: &RiftParams,
    rng: &mut ChaCha8Rng,
) -> Vec<Rift> {
    let width = layout.width();
    let mut rifts = Vec::new();
    let mut x = 0;

    while x < width {
        let start = x as i32;
        if layout.biome_at(start) != BiomeId::Ocean || !rng.gen_bool(params.chance) {
            x += 1;
            continue;
        }

        let rift_width = rng.gen_range(params.min_width..=params.max_width);
        if !ocean_span(layout, start - params.margin, start + rift_width - 1 + params.margin) {
            trace!("rift at column {} rejected: ocean too narrow", start);
            x += 1;
            continue;
        }

        let rift = Rift {
            start,
            width: rift_width,
            depth: rng.gen_range(params.min_depth..=params.max_depth),
        };
        carve_rift(access, layout, rift, params.floor_coal_chance, rng);
        debug!("rift {}x{} at column {}", rift.width, rift.depth, rift.start);
        rifts.push(rift);

        x += rift_width as usize + params.cooldown;
    }

    rifts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biomes::BiomeRun;
    use crate::tilemap::Tilemap;
    use rand::SeedableRng;

    fn mixed_layout() -> BiomeLayout {
        // 40 plains, 80 ocean, 40 plains
        let mut biome_by_column = vec![BiomeId::Plains; 40];
        biome_by_column.extend(vec![BiomeId::Ocean; 80]);
        biome_by_column.extend(vec![BiomeId::Plains; 40]);
        BiomeLayout {
            heights: vec![30; 160],
            biome_by_column,
            runs: vec![
                BiomeRun { biome: BiomeId::Plains, start: 0, len: 40 },
                BiomeRun { biome: BiomeId::Ocean, start: 40, len: 80 },
                BiomeRun { biome: BiomeId::Plains, start: 120, len: 40 },
            ],
        }
    }

    fn sea_floor(width: usize) -> Tilemap<TileType> {
        let mut map = Tilemap::new_with(width, 80, TileType::Water);
        for x in 0..width as i32 {
            for y in 30..79 {
                map.set(x, y, TileType::Sand);
            }
            map.set(x, 79, TileType::Bedrock);
        }
        map
    }

    #[test]
    fn test_profile_is_deepest_in_the_middle() {
        let depths: Vec<i32> = (0..10).map(|i| rift_profile(i, 10, 20)).collect();
        assert!(depths[4] >= depths[0]);
        assert!(depths[5] >= depths[9]);
        assert_eq!(depths[0], depths[9]);
        assert!(depths.iter().all(|&d| d <= 20 && d >= 0));
    }

    #[test]
    fn test_rifts_stay_inside_ocean_margins() {
        let layout = mixed_layout();
        let params = RiftParams {
            chance: 1.0,
            ..RiftParams::default()
        };
        for seed in 0..20u64 {
            let mut map = sea_floor(160);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let rifts = carve_rifts(&mut map, &layout, &params, &mut rng);
            assert!(!rifts.is_empty());
            for rift in &rifts {
                assert!(rift.start - params.margin >= 40);
                assert!(rift.start + rift.width - 1 + params.margin < 120);
            }
            for x in (0..40).chain(120..160) {
                assert_eq!(*map.get(x, 30), TileType::Sand);
            }
        }
    }

    #[test]
    fn test_cooldown_between_rifts() {
        let layout = mixed_layout();
        let params = RiftParams {
            chance: 1.0,
            cooldown: 10,
            ..RiftParams::default()
        };
        let mut map = sea_floor(160);
        let rifts = carve_rifts(&mut map, &layout, &params, &mut ChaCha8Rng::seed_from_u64(3));
        for pair in rifts.windows(2) {
            assert!(pair[1].start >= pair[0].start + pair[0].width + 10);
        }
    }

    #[test]
    fn test_rift_keeps_bedrock() {
        let layout = mixed_layout();
        let mut map = sea_floor(160);
        let rift = Rift { start: 60, width: 10, depth: 1000 };
        carve_rift(&mut map, &layout, rift, 1.0, &mut ChaCha8Rng::seed_from_u64(0));
        for x in 60..70 {
            assert_eq!(*map.get(x, 79), TileType::Bedrock);
            assert_eq!(*map.get(x, 78), TileType::CoalOre);
        }
    }
}
