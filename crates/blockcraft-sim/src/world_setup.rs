//! Entity spawn factories for a freshly generated world.

use glam::DVec2;

use blockcraft_core::constants::{CREATURE_SPAWN_OFFSET, SPAWN_SEARCH_RADIUS};
use blockcraft_core::tile::TileKind;
use blockcraft_core::types::{Position, TilePos};
use blockcraft_world::Grid;

use crate::entity::{Creature, Player};

/// Center of the first open tile near the middle of the grid.
///
/// Searches squares of growing radius around the middle tile, row by row,
/// skipping solid tiles and water. Falls back to the middle tile when the
/// whole search area is blocked.
pub fn find_spawn(grid: &Grid) -> Position {
    let middle = TilePos::new(grid.width() / 2, grid.height() / 2);

    for r in 0..SPAWN_SEARCH_RADIUS {
        for dy in -r..=r {
            for dx in -r..=r {
                let tile = middle.offset(dx, dy);
                if !grid.in_bounds(tile.x, tile.y) {
                    continue;
                }
                let kind = grid.get_at(tile);
                if kind.is_solid() || kind == TileKind::Water {
                    continue;
                }
                return tile.center();
            }
        }
    }

    middle.center()
}

/// The player at the spawn point with the starting inventory.
pub fn spawn_player(grid: &Grid) -> Player {
    Player::new(find_spawn(grid))
}

/// The creature, a few tiles east of `player`, centred on its tile.
pub fn spawn_creature(player: Position) -> Creature {
    let tile = TilePos::containing(player + DVec2::new(CREATURE_SPAWN_OFFSET, 0.0));
    Creature::new(tile.center())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Mobile;

    #[test]
    fn test_spawn_in_open_world_is_middle() {
        let grid = Grid::new(20, 10);
        assert_eq!(find_spawn(&grid), DVec2::new(10.5, 5.5));
    }

    #[test]
    fn test_spawn_skips_solid_and_water() {
        let mut grid = Grid::new(9, 9);
        grid.fill(TileKind::Stone);
        grid.set(4, 4, TileKind::Water);
        grid.set(5, 5, TileKind::Air);
        assert_eq!(find_spawn(&grid), DVec2::new(5.5, 5.5));
    }

    #[test]
    fn test_spawn_falls_back_to_middle() {
        let mut grid = Grid::new(9, 9);
        grid.fill(TileKind::Dirt);
        assert_eq!(find_spawn(&grid), DVec2::new(4.5, 4.5));
    }

    #[test]
    fn test_spawn_in_generated_world_is_open() {
        let grid = Grid::generated(220, 120, 1337);
        let spawn = find_spawn(&grid);
        let kind = grid.get_at(TilePos::containing(spawn));
        assert!(!kind.is_solid());
        assert_ne!(kind, TileKind::Water);
    }

    #[test]
    fn test_creature_spawns_east_of_player() {
        let creature = spawn_creature(DVec2::new(10.5, 5.5));
        assert_eq!(creature.position(), DVec2::new(16.5, 5.5));
        let creature = spawn_creature(DVec2::new(10.2, 5.9));
        assert_eq!(creature.position(), DVec2::new(16.5, 5.5));
    }
}
