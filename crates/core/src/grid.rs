//! Grid module - the static tile map of a level
//!
//! Uses a flat row-major array for cache locality.
//! Coordinates: (x, y) with the origin at the lower-left tile and +y pointing up.
//! Row `y` is stored at `y * width`, so row 0 is the bottom row.

use crate::types::{Pos, Tile};

/// Static map of a level: walls and empty floor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    /// Flat array of tiles, row-major order (y * width + x)
    tiles: Vec<Tile>,
}

impl Grid {
    /// Create an all-empty grid
    pub fn new(width: i32, height: i32) -> Self {
        let len = (width.max(0) as usize) * (height.max(0) as usize);
        Self {
            width: width.max(0),
            height: height.max(0),
            tiles: vec![Tile::Empty; len],
        }
    }

    /// Calculate flat index from a position, `None` when off-grid
    #[inline(always)]
    fn index(&self, pos: Pos) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        Some((pos.y as usize) * (self.width as usize) + (pos.x as usize))
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// True when `pos` lies inside `[0, width) x [0, height)`
    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Tile at `pos`, `None` when off-grid
    pub fn get(&self, pos: Pos) -> Option<Tile> {
        self.index(pos).map(|idx| self.tiles[idx])
    }

    /// Set tile at `pos`. Returns false if off-grid
    pub fn set(&mut self, pos: Pos, tile: Tile) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.tiles[idx] = tile;
                true
            }
            None => false,
        }
    }

    /// Walls and off-grid cells both block movement
    pub fn is_blocked(&self, pos: Pos) -> bool {
        !matches!(self.get(pos), Some(Tile::Empty))
    }

    pub fn is_wall(&self, pos: Pos) -> bool {
        matches!(self.get(pos), Some(Tile::Wall))
    }

    /// Clamp each axis of `pos` independently into the grid
    pub fn clamp(&self, pos: Pos) -> Pos {
        Pos::new(
            pos.x.clamp(0, (self.width - 1).max(0)),
            pos.y.clamp(0, (self.height - 1).max(0)),
        )
    }
}
