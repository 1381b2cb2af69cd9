//! Snapshot builder: collects entity state into a [`SimSnapshot`] for
//! renderers and tools.

use blockcraft_core::state::{InventoryEntry, PlayerView, SimSnapshot};
use blockcraft_core::tile::TileKind;
use blockcraft_core::types::SimTime;
use blockcraft_world::Grid;

use crate::entity::{Creature, Mobile, Player};

/// Build a snapshot of the current state.
pub fn build_snapshot(
    time: SimTime,
    seed: i64,
    grid: &Grid,
    player: &Player,
    creature: &Creature,
    hotbar: &[TileKind],
) -> SimSnapshot {
    let selected_index = player.selected_index();
    let selected_tile = hotbar
        .get(selected_index)
        .copied()
        .unwrap_or(TileKind::Air);

    let inventory = player
        .inventory()
        .iter()
        .map(|(kind, count)| InventoryEntry { kind, count })
        .collect();

    SimSnapshot {
        time,
        seed,
        width: grid.width(),
        height: grid.height(),
        player: PlayerView {
            entity: player.view(),
            selected_index,
            selected_tile,
            hotbar: hotbar.to_vec(),
            inventory,
        },
        creature: creature.view(),
    }
}
