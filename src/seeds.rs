//! Seed management for world generation
//!
//! Every pipeline stage gets its own seed derived from the master seed, so
//! tweaking one stage (say, ore rates) does not reshuffle the others.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeds for each generation stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldSeeds {
    /// Master seed (used for display/reference)
    pub master: u64,
    /// Biome segmentation and height field
    pub terrain: u64,
    /// Column fill (ores, dirt pockets, vegetation sites)
    pub fill: u64,
    /// Cave pockets
    pub caves: u64,
    /// Rifts, ponds and waterfalls
    pub water: u64,
    /// Tree painting
    pub vegetation: u64,
    /// Structure placement and painting
    pub structures: u64,
}

impl WorldSeeds {
    /// Create seeds from a master seed, deriving all sub-seeds deterministically.
    pub fn from_master(master: u64) -> Self {
        Self {
            master,
            terrain: derive_seed(master, "terrain"),
            fill: derive_seed(master, "fill"),
            caves: derive_seed(master, "caves"),
            water: derive_seed(master, "water"),
            vegetation: derive_seed(master, "vegetation"),
            structures: derive_seed(master, "structures"),
        }
    }

    /// Create a builder for customizing individual seeds
    pub fn builder(master: u64) -> WorldSeedsBuilder {
        WorldSeedsBuilder::new(master)
    }

    /// Fresh RNG handle for a stage seed.
    pub fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }
}

/// Builder for customizing individual seeds while deriving others from master
pub struct WorldSeedsBuilder {
    seeds: WorldSeeds,
}

impl WorldSeedsBuilder {
    pub fn new(master: u64) -> Self {
        Self {
            seeds: WorldSeeds::from_master(master),
        }
    }

    pub fn terrain(mut self, seed: u64) -> Self {
        self.seeds.terrain = seed;
        self
    }

    pub fn fill(mut self, seed: u64) -> Self {
        self.seeds.fill = seed;
        self
    }

    pub fn caves(mut self, seed: u64) -> Self {
        self.seeds.caves = seed;
        self
    }

    pub fn water(mut self, seed: u64) -> Self {
        self.seeds.water = seed;
        self
    }

    pub fn vegetation(mut self, seed: u64) -> Self {
        self.seeds.vegetation = seed;
        self
    }

    pub fn structures(mut self, seed: u64) -> Self {
        self.seeds.structures = seed;
        self
    }

    /// Build the final WorldSeeds
    pub fn build(self) -> WorldSeeds {
        self.seeds
    }
}

/// Derive a sub-seed from a master seed and a stage name.
///
/// FNV-1a over the name, mixed with the master through splitmix64; stable
/// across toolchains so a seed reproduces the same world everywhere.
fn derive_seed(master: u64, stage: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in stage.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    splitmix64(master ^ hash)
}

fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

impl std::fmt::Display for WorldSeeds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "WorldSeeds {{ master: {}, terrain: {}, fill: {}, caves: {}, water: {}, \
             vegetation: {}, structures: {} }}",
            self.master, self.terrain, self.fill, self.caves, self.water, self.vegetation, self.structures,
        )
    }
}
