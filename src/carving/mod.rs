//! Carvers that remove terrain after the column fill
//!
//! - **Caves**: air pockets in the deep band
//! - **Rifts**: parabolic trenches in ocean floors
//! - **Ponds**: water sunk into level ground
//! - **Waterfalls**: source pond plus a bounded fall down a cliff face
//!
//! Carvers run in that order, each over the whole world, and only through
//! [`TileAccess`](crate::tilemap::TileAccess).

pub mod caves;
pub mod params;
pub mod ponds;
pub mod rifts;
pub mod waterfalls;

pub use caves::{carve_cave_pocket, carve_caves};
pub use params::{CarveParams, CaveParams, PondParams, RiftParams, WaterfallParams};
pub use ponds::{carve_ponds, try_place_pond};
pub use rifts::{carve_rifts, Rift};
pub use waterfalls::{carve_waterfalls, find_cliff, place_waterfall, Cliff};
