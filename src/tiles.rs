//! Tile types and the static tile property table.
//!
//! The property table is the single source of truth for solidity,
//! transparency and drops; generation, physics and rendering all read it.

use serde::{Deserialize, Serialize};

/// Broad material class, used for tool/sound selection by consumers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialType {
    None,
    Soil,
    Stone,
    Ore,
    Wood,
    Plant,
    Liquid,
    Masonry,
    Metal,
}

/// Static properties of a tile type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileProperties {
    /// Collides with entities
    pub solid: bool,
    /// Lets light through and may be overlapped by placement checks
    pub transparent: bool,
    /// Can never be broken or dropped
    pub unbreakable: bool,
    pub material: MaterialType,
    /// Item dropped when broken
    pub drop: Option<TileType>,
}

/// Tile type codes stored in the world grid.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TileType {
    #[default]
    Air = 0,
    Grass = 1,
    Dirt = 2,
    Stone = 3,
    Bedrock = 4,
    Water = 5,
    CoalOre = 6,
    GoldOre = 7,
    Sand = 8,
    Snow = 9,
    Ice = 10,
    Wood = 11,
    Leaves = 12,
    Cactus = 13,
    Sapling = 14,
    Brick = 15,
    MossyBrick = 16,
    Obsidian = 17,
    Sandstone = 18,
    Concrete = 19,
    GoldBlock = 20,
}

impl TileType {
    /// Every tile type, in code order.
    pub const ALL: [TileType; 21] = [
        TileType::Air,
        TileType::Grass,
        TileType::Dirt,
        TileType::Stone,
        TileType::Bedrock,
        TileType::Water,
        TileType::CoalOre,
        TileType::GoldOre,
        TileType::Sand,
        TileType::Snow,
        TileType::Ice,
        TileType::Wood,
        TileType::Leaves,
        TileType::Cactus,
        TileType::Sapling,
        TileType::Brick,
        TileType::MossyBrick,
        TileType::Obsidian,
        TileType::Sandstone,
        TileType::Concrete,
        TileType::GoldBlock,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Look up a tile by its grid code. Returns `None` for undefined codes.
    pub fn from_code(code: u8) -> Option<TileType> {
        Self::ALL.get(code as usize).copied()
    }

    /// Row of the static property table for this tile.
    pub fn properties(self) -> TileProperties {
        use MaterialType as M;
        use TileType as T;

        let (solid, transparent, unbreakable, material, drop) = match self {
            T::Air => (false, true, false, M::None, None),
            T::Grass => (true, false, false, M::Soil, Some(T::Dirt)),
            T::Dirt => (true, false, false, M::Soil, Some(T::Dirt)),
            T::Stone => (true, false, false, M::Stone, Some(T::Stone)),
            T::Bedrock => (true, false, true, M::Stone, None),
            T::Water => (false, true, false, M::Liquid, None),
            T::CoalOre => (true, false, false, M::Ore, Some(T::CoalOre)),
            T::GoldOre => (true, false, false, M::Ore, Some(T::GoldOre)),
            T::Sand => (true, false, false, M::Soil, Some(T::Sand)),
            T::Snow => (true, false, false, M::Soil, Some(T::Snow)),
            T::Ice => (true, true, false, M::Stone, None),
            T::Wood => (false, true, false, M::Wood, Some(T::Wood)),
            T::Leaves => (false, true, false, M::Plant, Some(T::Sapling)),
            T::Cactus => (true, false, false, M::Plant, Some(T::Cactus)),
            T::Sapling => (false, true, false, M::Plant, Some(T::Sapling)),
            T::Brick => (true, false, false, M::Masonry, Some(T::Brick)),
            T::MossyBrick => (true, false, false, M::Masonry, Some(T::Brick)),
            T::Obsidian => (true, false, true, M::Stone, None),
            T::Sandstone => (true, false, false, M::Masonry, Some(T::Sandstone)),
            T::Concrete => (true, false, false, M::Metal, Some(T::Concrete)),
            T::GoldBlock => (true, false, false, M::Metal, Some(T::GoldBlock)),
        };

        TileProperties {
            solid,
            transparent,
            unbreakable,
            material,
            drop,
        }
    }

    pub fn is_solid(self) -> bool {
        self.properties().solid
    }

    pub fn is_liquid(self) -> bool {
        self.properties().material == MaterialType::Liquid
    }

    /// Can a placement overwrite this cell without destroying anything solid.
    pub fn is_replaceable(self) -> bool {
        let props = self.properties();
        props.transparent && !props.solid && !props.unbreakable && !self.is_liquid()
            && matches!(props.material, MaterialType::None | MaterialType::Plant)
    }

    /// RGB color for image export
    pub fn color(self) -> [u8; 3] {
        match self {
            TileType::Air => [135, 196, 235],
            TileType::Grass => [86, 160, 62],
            TileType::Dirt => [121, 85, 58],
            TileType::Stone => [112, 112, 118],
            TileType::Bedrock => [30, 28, 32],
            TileType::Water => [45, 95, 200],
            TileType::CoalOre => [40, 40, 44],
            TileType::GoldOre => [222, 184, 52],
            TileType::Sand => [219, 201, 140],
            TileType::Snow => [240, 246, 250],
            TileType::Ice => [170, 210, 235],
            TileType::Wood => [102, 72, 40],
            TileType::Leaves => [50, 120, 45],
            TileType::Cactus => [70, 140, 60],
            TileType::Sapling => [110, 170, 80],
            TileType::Brick => [150, 70, 55],
            TileType::MossyBrick => [95, 110, 70],
            TileType::Obsidian => [35, 20, 50],
            TileType::Sandstone => [200, 170, 110],
            TileType::Concrete => [150, 150, 145],
            TileType::GoldBlock => [250, 210, 60],
        }
    }

    /// ASCII character for text dumps
    pub fn ascii_char(self) -> char {
        match self {
            TileType::Air => ' ',
            TileType::Grass => '"',
            TileType::Dirt => '%',
            TileType::Stone => '#',
            TileType::Bedrock => '=',
            TileType::Water => '~',
            TileType::CoalOre => 'c',
            TileType::GoldOre => 'g',
            TileType::Sand => ':',
            TileType::Snow => '*',
            TileType::Ice => 'i',
            TileType::Wood => '|',
            TileType::Leaves => '&',
            TileType::Cactus => '!',
            TileType::Sapling => ',',
            TileType::Brick => 'B',
            TileType::MossyBrick => 'b',
            TileType::Obsidian => 'O',
            TileType::Sandstone => 'S',
            TileType::Concrete => 'C',
            TileType::GoldBlock => '$',
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TileType::Air => "Air",
            TileType::Grass => "Grass",
            TileType::Dirt => "Dirt",
            TileType::Stone => "Stone",
            TileType::Bedrock => "Bedrock",
            TileType::Water => "Water",
            TileType::CoalOre => "Coal Ore",
            TileType::GoldOre => "Gold Ore",
            TileType::Sand => "Sand",
            TileType::Snow => "Snow",
            TileType::Ice => "Ice",
            TileType::Wood => "Wood",
            TileType::Leaves => "Leaves",
            TileType::Cactus => "Cactus",
            TileType::Sapling => "Sapling",
            TileType::Brick => "Brick",
            TileType::MossyBrick => "Mossy Brick",
            TileType::Obsidian => "Obsidian",
            TileType::Sandstone => "Sandstone",
            TileType::Concrete => "Concrete",
            TileType::GoldBlock => "Gold Block",
        }
    }
}
