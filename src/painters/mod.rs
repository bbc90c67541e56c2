//! Stateless stamping primitives.
//!
//! Painters mutate the world only through a [`TileAccess`](crate::tilemap::TileAccess)
//! and explicit coordinates. They know nothing about biomes or placement
//! probabilities; any jitter they need comes from the RNG handle passed in.
//! Coordinates near the world edge are fine, the accessor wraps them.

pub mod buildings;
pub mod islands;
pub mod shapes;
pub mod trees;

/// Bounding box of a painter's writes relative to its anchor cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Footprint {
    /// Columns either side of the anchor
    pub half_width: i32,
    /// Rows above the anchor
    pub above: i32,
    /// Rows below the anchor
    pub below: i32,
}

impl Footprint {
    pub const fn new(half_width: i32, above: i32, below: i32) -> Self {
        Self {
            half_width,
            above,
            below,
        }
    }

    pub fn contains(&self, anchor_x: i32, anchor_y: i32, x: i32, y: i32) -> bool {
        (x - anchor_x).abs() <= self.half_width && y >= anchor_y - self.above && y <= anchor_y + self.below
    }

    /// Inclusive column span for an anchor.
    pub fn columns(&self, anchor_x: i32) -> (i32, i32) {
        (anchor_x - self.half_width, anchor_x + self.half_width)
    }

    /// Inclusive row span for an anchor.
    pub fn rows(&self, anchor_y: i32) -> (i32, i32) {
        (anchor_y - self.above, anchor_y + self.below)
    }
}
