//! Mining and placing: the only ways tiles change during play.
//!
//! Both return whether the action was applied. A rejected action
//! (out of reach, wrong tile, nothing to place) changes nothing.

use blockcraft_core::tile::TileKind;
use blockcraft_world::Grid;

use crate::entity::{Mobile, Player};

/// Mine the tile at `(x, y)` into the player's inventory.
pub fn mine(grid: &mut Grid, player: &mut Player, x: i32, y: i32) -> bool {
    if !player.can_reach(x, y) {
        log::debug!("mine ({x}, {y}) rejected: out of reach");
        return false;
    }

    let kind = grid.get(x, y);
    if kind == TileKind::Air || !kind.is_mineable() {
        log::debug!("mine ({x}, {y}) rejected: {kind:?} is not mineable");
        return false;
    }

    // In reach does not imply in bounds; the boundary wall is not real stone.
    if !grid.set(x, y, TileKind::Air) {
        return false;
    }
    player.inventory_mut().add(kind, 1);
    true
}

/// Place one `kind` from the player's inventory at `(x, y)`.
pub fn place(grid: &mut Grid, player: &mut Player, x: i32, y: i32, kind: TileKind) -> bool {
    if kind == TileKind::Air {
        return false;
    }
    if !player.can_reach(x, y) {
        log::debug!("place ({x}, {y}) rejected: out of reach");
        return false;
    }
    if !grid.in_bounds(x, y) || grid.get(x, y) != TileKind::Air {
        log::debug!("place ({x}, {y}) rejected: tile occupied");
        return false;
    }
    if !player.inventory_mut().take(kind, 1) {
        log::debug!("place ({x}, {y}) rejected: no {kind:?} left");
        return false;
    }

    grid.set(x, y, kind);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    fn setup() -> (Grid, Player) {
        let mut grid = Grid::new(12, 12);
        for x in 0..12 {
            grid.set(x, 8, TileKind::Dirt);
        }
        grid.set(6, 7, TileKind::Water);
        grid.set(7, 8, TileKind::Gold);
        (grid, Player::new(DVec2::new(5.5, 6.5)))
    }

    #[test]
    fn test_mine_adds_to_inventory() {
        let (mut grid, mut player) = setup();
        assert!(mine(&mut grid, &mut player, 5, 8));
        assert_eq!(grid.get(5, 8), TileKind::Air);
        assert_eq!(player.inventory().get(TileKind::Dirt), 26);
    }

    #[test]
    fn test_mine_gold() {
        let (mut grid, mut player) = setup();
        assert!(mine(&mut grid, &mut player, 7, 8));
        assert_eq!(player.inventory().get(TileKind::Gold), 1);
    }

    #[test]
    fn test_mine_rejects_air_water_and_far_tiles() {
        let (mut grid, mut player) = setup();
        let before = (grid.clone(), player.clone());
        assert!(!mine(&mut grid, &mut player, 5, 5));
        assert!(!mine(&mut grid, &mut player, 6, 7));
        assert!(!mine(&mut grid, &mut player, 11, 8));
        assert_eq!((grid, player), before);
    }

    #[test]
    fn test_mine_boundary_wall_is_rejected() {
        let mut grid = Grid::new(4, 4);
        let mut player = Player::new(DVec2::new(0.5, 0.5));
        assert!(!mine(&mut grid, &mut player, -1, 0));
        assert_eq!(player.inventory().get(TileKind::Stone), 0);
    }

    #[test]
    fn test_place_consumes_inventory() {
        let (mut grid, mut player) = setup();
        assert!(place(&mut grid, &mut player, 4, 7, TileKind::Planks));
        assert_eq!(grid.get(4, 7), TileKind::Planks);
        assert_eq!(player.inventory().get(TileKind::Planks), 11);
    }

    #[test]
    fn test_place_rejections_leave_state_alone() {
        let (mut grid, mut player) = setup();
        let before = (grid.clone(), player.clone());
        // Occupied by dirt, by water, nothing held, air, out of reach, outside grid.
        assert!(!place(&mut grid, &mut player, 5, 8, TileKind::Dirt));
        assert!(!place(&mut grid, &mut player, 6, 7, TileKind::Dirt));
        assert!(!place(&mut grid, &mut player, 4, 7, TileKind::Stone));
        assert!(!place(&mut grid, &mut player, 4, 7, TileKind::Air));
        assert!(!place(&mut grid, &mut player, 11, 2, TileKind::Dirt));
        let mut edge_player = player.clone();
        edge_player.set_position(DVec2::new(0.5, 0.5));
        assert!(!place(&mut grid, &mut edge_player, -1, 0, TileKind::Dirt));
        assert_eq!(edge_player.inventory(), player.inventory());
        assert_eq!((grid, player), before);
    }

    #[test]
    fn test_place_last_item_removes_entry() {
        let (mut grid, mut player) = setup();
        assert!(mine(&mut grid, &mut player, 7, 8));
        assert!(place(&mut grid, &mut player, 7, 8, TileKind::Gold));
        assert_eq!(player.inventory().get(TileKind::Gold), 0);
        assert!(player.inventory().iter().all(|(k, _)| k != TileKind::Gold));
        assert!(!place(&mut grid, &mut player, 4, 7, TileKind::Gold));
    }

    #[test]
    fn test_mine_then_place_is_inverse() {
        let (mut grid, mut player) = setup();
        let before = (grid.clone(), player.clone());
        assert!(mine(&mut grid, &mut player, 6, 8));
        assert!(place(&mut grid, &mut player, 6, 8, TileKind::Dirt));
        assert_eq!((grid, player), before);
    }
}
