//! Creature wandering behaviour.
//!
//! Every time its cooldown runs out the creature rolls a new cooldown and a
//! cardinal direction from the shared stream, then tries a single-tile step.
//! A rejected step is not retried until the next cooldown expiry.

use rand::Rng;

use blockcraft_core::constants::*;
use blockcraft_core::enums::Direction;
use blockcraft_core::types::Position;
use blockcraft_world::Grid;

use crate::entity::{Creature, Mobile};

/// Outcome of one creature update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Still cooling down; nothing was drawn from the stream.
    Waiting,
    /// Stepped one tile in the given direction.
    Moved(Direction),
    /// Tried the given direction but the destination was not enterable.
    Blocked(Direction),
}

/// Advance the creature's cooldown by `dt` and step when it expires.
pub fn run<R: Rng + ?Sized>(
    creature: &mut Creature,
    grid: &Grid,
    rng: &mut R,
    player: Position,
    dt: f64,
) -> StepOutcome {
    creature.move_cooldown -= dt;
    if creature.move_cooldown > 0.0 {
        return StepOutcome::Waiting;
    }

    creature.move_cooldown =
        rng.gen_range(CREATURE_COOLDOWN_MIN..CREATURE_COOLDOWN_MIN + CREATURE_COOLDOWN_SPREAD);
    let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];

    let (dx, dy) = direction.offset();
    let target = creature.tile().offset(dx, dy);

    if !grid.in_bounds(target.x, target.y) || grid.get_at(target).is_solid() {
        return StepOutcome::Blocked(direction);
    }

    let destination = target.center();
    let gap = (player - destination).abs();
    if gap.x < CREATURE_PLAYER_CLEARANCE && gap.y < CREATURE_PLAYER_CLEARANCE {
        log::debug!("creature step {direction:?} blocked by player");
        return StepOutcome::Blocked(direction);
    }

    creature.set_position(destination);
    StepOutcome::Moved(direction)
}
