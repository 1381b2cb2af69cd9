//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Walk in a direction for this tick. The vector is normalized by the
    /// simulation, so only its direction matters. The last one queued wins.
    MovePlayer { dx: f64, dy: f64 },
    /// Mine the tile at the given coordinates.
    Mine { x: i32, y: i32 },
    /// Place the selected hotbar tile at the given coordinates.
    Place { x: i32, y: i32 },
    /// Select a hotbar slot (wraps around).
    SelectSlot { index: i32 },
    /// Move the hotbar selection by `delta` slots (wraps around).
    CycleSlot { delta: i32 },
}
