//! Systems that operate on the simulation each tick.
//!
//! Systems are plain functions over the pieces of state they touch.
//! They do not own state; the engine does.

pub mod creature_ai;
pub mod interaction;
pub mod movement;
pub mod snapshot;
