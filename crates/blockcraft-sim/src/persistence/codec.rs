//! Text codec for the `BC2D:1` save format.
//!
//! ```text
//! BC2D:1
//! w=<width>
//! h=<height>
//! seed=<seed>
//! player=<x>,<y>
//! sel=<selected slot>
//! inv=<KIND>:<count>,...
//! tiles:
//! <height rows of width tile characters>
//! ```
//!
//! Fields appear in exactly this order. Decoding validates the whole text
//! before building anything, so a malformed save never yields a partial
//! simulation.

use std::str::{FromStr, Lines};

use glam::DVec2;

use blockcraft_core::constants::SAVE_HEADER;
use blockcraft_core::inventory::Inventory;
use blockcraft_core::tile::TileKind;

use super::error::{SaveError, SaveResult};
use crate::engine::{SimConfig, Simulation};
use crate::entity::Mobile;

/// Encode `sim` as save text. Every line, the last row included, ends in `\n`.
pub fn encode(sim: &Simulation) -> String {
    let grid = sim.grid();
    let player = sim.player();
    let position = player.position();

    let inventory = player
        .inventory()
        .iter()
        .map(|(kind, count)| format!("{}:{count}", kind.name()))
        .collect::<Vec<_>>()
        .join(",");

    let row_bytes = (grid.width() as usize + 1) * grid.height() as usize;
    let mut out = String::with_capacity(128 + row_bytes);
    out.push_str(SAVE_HEADER);
    out.push('\n');
    out.push_str(&format!("w={}\n", grid.width()));
    out.push_str(&format!("h={}\n", grid.height()));
    out.push_str(&format!("seed={}\n", sim.seed()));
    out.push_str(&format!("player={},{}\n", position.x, position.y));
    out.push_str(&format!("sel={}\n", sim.selected_index()));
    out.push_str(&format!("inv={inventory}\n"));
    out.push_str("tiles:\n");
    for y in 0..grid.height() {
        out.extend(grid.row(y).iter().map(|kind| kind.save_char()));
        out.push('\n');
    }
    out
}

/// Decode save text into a fresh simulation.
///
/// The world is regenerated from the stored seed and size, then every tile
/// is overwritten with the stored rows. The creature respawns next to the
/// loaded player.
pub fn decode(text: &str) -> SaveResult<Simulation> {
    let mut lines = text.lines();

    let header = lines.next().unwrap_or("").trim();
    if header != SAVE_HEADER {
        return Err(SaveError::BadHeader(header.to_string()));
    }

    let width: i32 = parse("w", field(&mut lines, "w")?)?;
    let height: i32 = parse("h", field(&mut lines, "h")?)?;
    if width <= 0 || height <= 0 {
        return Err(SaveError::InvalidDimensions { width, height });
    }
    let seed: i64 = parse("seed", field(&mut lines, "seed")?)?;
    let position = parse_position(field(&mut lines, "player")?)?;
    let selected: i32 = parse("sel", field(&mut lines, "sel")?)?;
    let inventory = parse_inventory(field(&mut lines, "inv")?)?;

    if lines.next().map(str::trim) != Some("tiles:") {
        return Err(SaveError::MissingField("tiles"));
    }
    let rows = parse_rows(&mut lines, width as usize, height as usize)?;

    let mut sim = Simulation::new(
        SimConfig::default()
            .with_seed(seed)
            .with_size(width, height),
    );
    let grid = sim.grid_mut();
    for (y, row) in rows.iter().enumerate() {
        for (x, &kind) in row.iter().enumerate() {
            grid.set(x as i32, y as i32, kind);
        }
    }
    let player = sim.player_mut();
    player.set_position(position);
    *player.inventory_mut() = inventory;
    sim.set_selected_index(selected);
    sim.respawn_creature();

    Ok(sim)
}

/// Next line, which must read `key=value`. Returns the value.
fn field<'a>(lines: &mut Lines<'a>, key: &'static str) -> SaveResult<&'a str> {
    lines
        .next()
        .map(str::trim)
        .and_then(|line| line.strip_prefix(key))
        .and_then(|rest| rest.strip_prefix('='))
        .ok_or(SaveError::MissingField(key))
}

fn parse<T: FromStr>(field: &'static str, value: &str) -> SaveResult<T> {
    value.trim().parse().map_err(|_| SaveError::InvalidValue {
        field,
        value: value.to_string(),
    })
}

fn parse_position(value: &str) -> SaveResult<DVec2> {
    let invalid = || SaveError::InvalidValue {
        field: "player",
        value: value.to_string(),
    };
    let (x, y) = value.split_once(',').ok_or_else(invalid)?;
    let position = DVec2::new(parse("player", x)?, parse("player", y)?);
    if !position.is_finite() {
        return Err(invalid());
    }
    Ok(position)
}

fn parse_inventory(value: &str) -> SaveResult<Inventory> {
    let mut inventory = Inventory::empty();
    for entry in value.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (name, count) = entry
            .split_once(':')
            .ok_or_else(|| SaveError::InvalidValue {
                field: "inv",
                value: entry.to_string(),
            })?;
        let kind = TileKind::from_name(name.trim())
            .ok_or_else(|| SaveError::UnknownItem(name.trim().to_string()))?;
        inventory.add(kind, parse("inv", count)?);
    }
    Ok(inventory)
}

/// Read exactly `height` rows of `width` tiles. Blank lines may follow.
fn parse_rows(
    lines: &mut Lines<'_>,
    width: usize,
    height: usize,
) -> SaveResult<Vec<Vec<TileKind>>> {
    let mut rows = Vec::new();
    for row in 0..height {
        let line = lines.next().ok_or(SaveError::RowCount {
            expected: height,
            found: row,
        })?;
        let found = line.chars().count();
        if found != width {
            return Err(SaveError::RowLength {
                row,
                expected: width,
                found,
            });
        }
        rows.push(line.chars().map(TileKind::from_save_char).collect());
    }

    let extra = lines.filter(|line| !line.trim().is_empty()).count();
    if extra > 0 {
        return Err(SaveError::RowCount {
            expected: height,
            found: height + extra,
        });
    }
    Ok(rows)
}
