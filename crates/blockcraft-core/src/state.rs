//! Simulation snapshot: the complete entity state handed to observers
//! after each tick. Tiles are not included; renderers query the grid.

use serde::{Deserialize, Serialize};

use crate::enums::EntityKind;
use crate::tile::TileKind;
use crate::types::{Position, SimTime};

/// Read-only view of the simulation after a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub seed: i64,
    pub width: i32,
    pub height: i32,
    pub player: PlayerView,
    pub creature: EntityView,
}

/// A mobile entity as seen by a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub kind: EntityKind,
    pub position: Position,
}

/// The player, including hotbar and inventory state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub entity: EntityView,
    pub selected_index: usize,
    pub selected_tile: TileKind,
    pub hotbar: Vec<TileKind>,
    /// Held items in tile declaration order.
    pub inventory: Vec<InventoryEntry>,
}

/// One inventory line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub kind: TileKind,
    pub count: u32,
}
