//! Dense 2D tile storage with toroidal wrapping on both axes.
//!
//! Every coordinate is valid: reads and writes outside `0..width` /
//! `0..height` wrap around, so the world is edge-to-edge continuous.

use crate::tiles::TileType;

/// Normalize `v` into `0..max` (Euclidean modulo).
///
/// `wrap(-1, 10) == 9`, `wrap(10, 10) == 0`.
#[inline]
pub fn wrap(v: i32, max: usize) -> usize {
    v.rem_euclid(max as i32) as usize
}

/// A 2D grid stored row-major in a flat buffer, wrapping on both axes.
#[derive(Clone, Debug)]
pub struct Tilemap<T> {
    pub width: usize,
    pub height: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Tilemap<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); width * height],
        }
    }
}

impl<T: Clone> Tilemap<T> {
    pub fn new_with(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Get the index into the data array, wrapping both axes.
    fn index(&self, x: i32, y: i32) -> usize {
        wrap(y, self.height) * self.width + wrap(x, self.width)
    }

    pub fn get(&self, x: i32, y: i32) -> &T {
        &self.data[self.index(x, y)]
    }

    pub fn set(&mut self, x: i32, y: i32, value: T) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    /// Iterate over all cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let width = self.width;
        self.data.iter().enumerate().map(move |(idx, val)| {
            let x = idx % width;
            let y = idx / width;
            (x, y, val)
        })
    }

    /// Raw row-major view of the buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

/// Narrow read/write capability handed to painters and carvers.
///
/// Implementors must wrap out-of-range coordinates; callers may pass any
/// `i32` pair.
pub trait TileAccess {
    fn get(&self, x: i32, y: i32) -> TileType;
    fn set(&mut self, x: i32, y: i32, tile: TileType);
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Set only if the current tile may be broken.
    fn set_breakable(&mut self, x: i32, y: i32, tile: TileType) {
        if !self.get(x, y).properties().unbreakable {
            self.set(x, y, tile);
        }
    }

    /// Set only if the current tile is replaceable (air or plant cover).
    fn set_if_replaceable(&mut self, x: i32, y: i32, tile: TileType) {
        if self.get(x, y).is_replaceable() {
            self.set(x, y, tile);
        }
    }
}

impl TileAccess for Tilemap<TileType> {
    fn get(&self, x: i32, y: i32) -> TileType {
        *Tilemap::get(self, x, y)
    }

    fn set(&mut self, x: i32, y: i32, tile: TileType) {
        Tilemap::set(self, x, y, tile);
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_matches_euclidean_modulo() {
        assert_eq!(wrap(0, 10), 0);
        assert_eq!(wrap(9, 10), 9);
        assert_eq!(wrap(10, 10), 0);
        assert_eq!(wrap(-1, 10), 9);
        assert_eq!(wrap(-10, 10), 0);
        assert_eq!(wrap(-11, 10), 9);
    }

    #[test]
    fn test_wrap_stable_under_offsets() {
        let width = 37usize;
        let height = 11usize;
        for v in -200i32..200 {
            for k in -5i32..=5 {
                assert_eq!(wrap(v + k * width as i32, width), wrap(v, width));
                assert_eq!(wrap(v + k * height as i32, height), wrap(v, height));
            }
        }
    }

    #[test]
    fn test_get_set_wrap_both_axes() {
        let mut map = Tilemap::new_with(8, 4, 0u8);
        map.set(-1, -1, 7);
        assert_eq!(*map.get(7, 3), 7);
        assert_eq!(*map.get(15, 7), 7);

        map.set(8, 4, 3);
        assert_eq!(*map.get(0, 0), 3);
    }

    #[test]
    fn test_accessor_respects_unbreakable() {
        let mut map = Tilemap::new_with(4, 4, TileType::Stone);
        map.set(1, 3, TileType::Bedrock);

        map.set_breakable(1, 3, TileType::Air);
        map.set_breakable(2, 3, TileType::Air);

        assert_eq!(TileAccess::get(&map, 1, 3), TileType::Bedrock);
        assert_eq!(TileAccess::get(&map, 2, 3), TileType::Air);
    }
}
