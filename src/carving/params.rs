//! Tunables for the cave and water carvers

/// Cave pocket parameters
#[derive(Clone, Debug, PartialEq)]
pub struct CaveParams {
    /// Pocket attempts per 1000 columns
    pub pockets_per_1000_columns: f64,
    pub min_radius: i32,
    pub max_radius: i32,
    /// Minimum rows between the surface and a pocket center
    pub min_depth: i32,
}

impl Default for CaveParams {
    fn default() -> Self {
        Self {
            pockets_per_1000_columns: 60.0,
            min_radius: 2,
            max_radius: 4,
            min_depth: 8,
        }
    }
}

/// Pond parameters
#[derive(Clone, Debug, PartialEq)]
pub struct PondParams {
    /// Chance per eligible column
    pub chance: f64,
    pub min_radius: i32,
    pub max_radius: i32,
    /// Columns skipped after a pond is placed
    pub spacing: usize,
    /// Ponds need `|h(x-2) - h(x+2)|` strictly below this
    pub max_gradient: i32,
}

impl Default for PondParams {
    fn default() -> Self {
        Self {
            chance: 0.006,
            min_radius: 3,
            max_radius: 6,
            spacing: 24,
            max_gradient: 3,
        }
    }
}

/// Ocean rift parameters
#[derive(Clone, Debug, PartialEq)]
pub struct RiftParams {
    /// Chance per ocean column
    pub chance: f64,
    pub min_width: i32,
    pub max_width: i32,
    pub min_depth: i32,
    pub max_depth: i32,
    /// Ocean columns required on each side of the rift
    pub margin: i32,
    /// Columns skipped after a rift
    pub cooldown: usize,
    /// Chance that a floor cell becomes coal
    pub floor_coal_chance: f64,
}

impl Default for RiftParams {
    fn default() -> Self {
        Self {
            chance: 0.02,
            min_width: 6,
            max_width: 12,
            min_depth: 10,
            max_depth: 24,
            margin: 6,
            cooldown: 40,
            floor_coal_chance: 0.3,
        }
    }
}

/// Waterfall parameters
#[derive(Clone, Debug, PartialEq)]
pub struct WaterfallParams {
    /// Minimum drop, in rows, that counts as a cliff
    pub cliff_threshold: i32,
    /// How far from the lip the drop may start
    pub search_radius: i32,
    /// Chance a detected cliff gets a waterfall
    pub chance: f64,
    pub source_radius: i32,
    /// Columns skipped after a waterfall
    pub cooldown: usize,
}

impl Default for WaterfallParams {
    fn default() -> Self {
        Self {
            cliff_threshold: 8,
            search_radius: 5,
            chance: 0.35,
            source_radius: 3,
            cooldown: 30,
        }
    }
}

/// All carver parameters
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CarveParams {
    pub caves: CaveParams,
    pub ponds: PondParams,
    pub rifts: RiftParams,
    pub waterfalls: WaterfallParams,
}
