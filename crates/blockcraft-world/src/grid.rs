//! Grid: fixed-size tile storage with bounds-safe access.

use blockcraft_core::tile::TileKind;
use blockcraft_core::types::TilePos;

/// Fixed-size 2D tile array.
///
/// Reads outside the grid return Stone, so the world behaves as if it
/// were enclosed by a solid wall. Writes outside the grid are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    /// Row-major, index = y * width + x.
    tiles: Vec<TileKind>,
}

impl Grid {
    /// Create an all-Air grid. Dimensions below 1 are raised to 1.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            tiles: vec![TileKind::Air; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// Tile at `(x, y)`, or Stone outside the grid.
    pub fn get(&self, x: i32, y: i32) -> TileKind {
        self.index(x, y).map_or(TileKind::Stone, |i| self.tiles[i])
    }

    pub fn get_at(&self, pos: TilePos) -> TileKind {
        self.get(pos.x, pos.y)
    }

    /// Write a tile. Returns false (and changes nothing) outside the grid.
    pub fn set(&mut self, x: i32, y: i32, kind: TileKind) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.tiles[i] = kind;
                true
            }
            None => false,
        }
    }

    pub fn set_at(&mut self, pos: TilePos, kind: TileKind) -> bool {
        self.set(pos.x, pos.y, kind)
    }

    /// Overwrite every tile with `kind`.
    pub fn fill(&mut self, kind: TileKind) {
        self.tiles.fill(kind);
    }

    /// One row of tiles, west to east. Empty outside the grid.
    pub fn row(&self, y: i32) -> &[TileKind] {
        if y < 0 || y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.tiles[start..start + self.width as usize]
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> &[TileKind] {
        &self.tiles
    }

    /// Number of tiles holding `kind`.
    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|t| **t == kind).count()
    }
}
