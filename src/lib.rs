//! Procedural 2D tile-world generator
//!
//! Re-exports modules for use by binaries and tools.

pub mod ascii;
pub mod biomes;
pub mod carving;
pub mod config;
pub mod error;
pub mod export;
pub mod heightmap;
pub mod painters;
pub mod seeds;
pub mod stats;
pub mod structures;
pub mod terrain;
pub mod tilemap;
pub mod tiles;
pub mod world;

pub use config::WorldConfig;
pub use error::{ConfigError, ExportError};
pub use seeds::WorldSeeds;
pub use tiles::TileType;
pub use world::{generate_world, generate_world_with, GenerationParams, World};
