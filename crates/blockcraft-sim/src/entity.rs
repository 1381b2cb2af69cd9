//! Mobile entities: the player and the wandering creature.
//!
//! Both share the [`Mobile`] capability (position, reach, collision-aware
//! walking, render kind) and differ only in the state they carry.

use glam::DVec2;

use blockcraft_core::constants::{REACH, WALK_SPEED};
use blockcraft_core::enums::EntityKind;
use blockcraft_core::inventory::Inventory;
use blockcraft_core::state::EntityView;
use blockcraft_core::types::{Position, TilePos};
use blockcraft_world::Grid;

use crate::systems::movement;

/// Shared behaviour of anything that moves through the grid.
pub trait Mobile {
    fn kind(&self) -> EntityKind;

    fn position(&self) -> Position;

    fn set_position(&mut self, pos: Position);

    /// Walking speed in tiles per second.
    fn speed(&self) -> f64 {
        WALK_SPEED
    }

    fn color(&self) -> [f32; 4] {
        self.kind().color()
    }

    /// Tile containing the entity's center.
    fn tile(&self) -> TilePos {
        TilePos::containing(self.position())
    }

    /// Whether the center of tile `(x, y)` is within reach.
    fn can_reach(&self, x: i32, y: i32) -> bool {
        let d = TilePos::new(x, y).center() - self.position();
        d.length_squared() <= REACH * REACH
    }

    /// Walk toward `direction` for `dt` seconds, sliding along walls.
    fn walk(&mut self, grid: &Grid, direction: DVec2, dt: f64) {
        let next = movement::walk(grid, self.position(), direction, self.speed(), dt);
        self.set_position(next);
    }

    fn view(&self) -> EntityView {
        EntityView {
            kind: self.kind(),
            position: self.position(),
        }
    }
}

/// The player: a position plus inventory and hotbar selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    position: Position,
    inventory: Inventory,
    selected_index: usize,
}

impl Player {
    /// A player at `position` with the starting inventory.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            inventory: Inventory::starting(),
            selected_index: 0,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Select slot `index` of a hotbar with `hotbar_len` slots, wrapping in
    /// both directions.
    pub fn set_selected_index(&mut self, index: i32, hotbar_len: usize) {
        self.selected_index = if hotbar_len == 0 {
            0
        } else {
            (index as i64).rem_euclid(hotbar_len as i64) as usize
        };
    }
}

impl Mobile for Player {
    fn kind(&self) -> EntityKind {
        EntityKind::Player
    }

    fn position(&self) -> Position {
        self.position
    }

    fn set_position(&mut self, pos: Position) {
        self.position = pos;
    }
}

/// The wandering creature. Steps one whole tile at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Creature {
    position: Position,
    /// Seconds until the next step attempt.
    pub move_cooldown: f64,
}

impl Creature {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            move_cooldown: 0.0,
        }
    }
}

impl Mobile for Creature {
    fn kind(&self) -> EntityKind {
        EntityKind::Creature
    }

    fn position(&self) -> Position {
        self.position
    }

    fn set_position(&mut self, pos: Position) {
        self.position = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockcraft_core::constants::HOTBAR;

    #[test]
    fn test_selection_wraps_both_ways() {
        let mut player = Player::new(DVec2::new(0.5, 0.5));
        player.set_selected_index(-1, HOTBAR.len());
        assert_eq!(player.selected_index(), 5);
        player.set_selected_index(6, HOTBAR.len());
        assert_eq!(player.selected_index(), 0);
        player.set_selected_index(-13, HOTBAR.len());
        assert_eq!(player.selected_index(), 5);
        player.set_selected_index(i32::MIN, HOTBAR.len());
        assert!(player.selected_index() < HOTBAR.len());
    }

    #[test]
    fn test_selection_with_empty_hotbar() {
        let mut player = Player::new(DVec2::ZERO);
        player.set_selected_index(3, 0);
        assert_eq!(player.selected_index(), 0);
    }

    #[test]
    fn test_reach_boundary() {
        let player = Player::new(DVec2::new(10.5, 10.5));
        // Tile centers exactly 4 tiles away are reachable.
        assert!(player.can_reach(14, 10));
        assert!(player.can_reach(10, 6));
        assert!(!player.can_reach(15, 10));
        // (13, 13): distance sqrt(18) > 4.
        assert!(!player.can_reach(13, 13));
        assert!(player.can_reach(12, 12));
    }

    #[test]
    fn test_kinds_and_colors() {
        let player = Player::new(DVec2::ZERO);
        let creature = Creature::new(DVec2::ZERO);
        assert_eq!(player.kind(), EntityKind::Player);
        assert_eq!(creature.kind(), EntityKind::Creature);
        assert_eq!(creature.color(), EntityKind::Creature.color());
        assert_eq!(player.view().kind, EntityKind::Player);
    }

    #[test]
    fn test_walk_uses_shared_speed() {
        let grid = Grid::new(20, 20);
        let mut creature = Creature::new(DVec2::new(5.5, 5.5));
        assert_eq!(creature.speed(), WALK_SPEED);
        creature.walk(&grid, DVec2::X, 0.1);
        assert!((creature.position().x - (5.5 + WALK_SPEED * 0.1)).abs() < 1e-12);
    }

    #[test]
    fn test_tile_of_position() {
        let creature = Creature::new(DVec2::new(3.5, 7.5));
        assert_eq!(creature.tile(), TilePos::new(3, 7));
    }
}
