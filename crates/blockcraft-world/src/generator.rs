//! Seeded procedural world generation.
//!
//! The stream is consumed in a fixed order so that the same seed always
//! produces the same tiles:
//!
//! 1. Per column, west to east: surface bump, then one ore roll for every
//!    tile below the dirt layer, then the pool roll (plus a width roll when
//!    a pool starts), then the tree roll. Grass and dirt rows draw no ore
//!    roll, so streams do not line up with generators that roll every row.
//! 2. Per boulder: center x, center y, radius, then one fill roll for every
//!    in-bounds cell inside the circle, row by row.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use blockcraft_core::constants::*;
use blockcraft_core::tile::TileKind;

use crate::grid::Grid;

/// The deterministic stream for a world seed.
pub fn seeded_stream(seed: i64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed as u64)
}

impl Grid {
    /// Build and generate a grid from a seed alone.
    pub fn generated(width: i32, height: i32, seed: i64) -> Self {
        let mut grid = Grid::new(width, height);
        generate(&mut grid, &mut seeded_stream(seed));
        grid
    }
}

/// Row of the undisturbed ground surface.
pub fn base_ground(height: i32) -> i32 {
    (height as f64 * GROUND_LEVEL_FRACTION).floor() as i32
}

/// Regenerate every tile of `grid` from `rng`.
pub fn generate<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    grid.fill(TileKind::Air);

    let base = base_ground(grid.height());

    for x in 0..grid.width() {
        let bump = rng.gen_range(-SURFACE_BUMP..=SURFACE_BUMP);
        let ground_y = (base + bump)
            .min(grid.height() - SURFACE_MARGIN)
            .max(SURFACE_MARGIN);

        fill_column(grid, rng, x, ground_y);
        maybe_pool(grid, rng, x, ground_y);
        maybe_tree(grid, rng, x, ground_y);
    }

    scatter_boulders(grid, rng, base);
}

/// Grass on the surface, a dirt layer, then stone with the odd gold tile.
fn fill_column<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R, x: i32, ground_y: i32) {
    for y in ground_y..grid.height() {
        let kind = if y == ground_y {
            TileKind::Grass
        } else if y <= ground_y + DIRT_DEPTH {
            TileKind::Dirt
        } else if rng.gen_range(0..ORE_ROLL_RANGE) == GOLD_ROLL {
            TileKind::Gold
        } else {
            TileKind::Stone
        };
        grid.set(x, y, kind);
    }
}

/// Water along the row above the surface, starting here and running east.
/// Only Air is flooded.
fn maybe_pool<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R, x: i32, ground_y: i32) {
    if !rng.gen_bool(POOL_CHANCE) {
        return;
    }
    let pool_y = ground_y - 1;
    let pool_width = rng.gen_range(POOL_MIN_WIDTH..POOL_MAX_WIDTH);
    if pool_y < 0 {
        return;
    }
    for px in x..(x + pool_width).min(grid.width()) {
        if grid.get(px, pool_y) == TileKind::Air {
            grid.set(px, pool_y, TileKind::Water);
        }
    }
}

/// A two-tile log standing on solid ground, if both cells are free.
fn maybe_tree<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R, x: i32, ground_y: i32) {
    if !rng.gen_bool(TREE_CHANCE) {
        return;
    }
    let trunk = ground_y - 1;
    let crown = trunk - 1;
    if trunk < 2 {
        return;
    }
    if grid.get(x, trunk) == TileKind::Air
        && grid.get(x, crown) == TileKind::Air
        && grid.get(x, trunk + 1).is_solid()
    {
        grid.set(x, trunk, TileKind::Log);
        grid.set(x, crown, TileKind::Log);
    }
}

/// Round stone clusters floating above the surface.
fn scatter_boulders<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R, base: i32) {
    // Tiny worlds have no sky band; fall back to the top row.
    let sky = (base - 2).max(1);

    for _ in 0..BOULDER_COUNT {
        let cx = rng.gen_range(0..grid.width());
        let cy = rng.gen_range(0..sky);
        let r = rng.gen_range(BOULDER_MIN_RADIUS..=BOULDER_MAX_RADIUS);

        for y in cy - r..=cy + r {
            for x in cx - r..=cx + r {
                let (dx, dy) = (x - cx, y - cy);
                if dx * dx + dy * dy > r * r || !grid.in_bounds(x, y) {
                    continue;
                }
                let fill = rng.gen_bool(BOULDER_FILL_CHANCE);
                if fill && grid.get(x, y) == TileKind::Air {
                    grid.set(x, y, TileKind::Stone);
                }
            }
        }
    }
}
