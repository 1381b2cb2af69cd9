//! Simulation engine for BlockCraft.
//!
//! Owns the grid, the player, the creature and the deterministic random
//! stream, runs systems once per tick, and saves/loads the whole state
//! in the versioned text format.

pub mod engine;
pub mod entity;
pub mod persistence;
pub mod systems;
pub mod world_setup;

pub use blockcraft_core as core;
pub use blockcraft_world as world;
pub use engine::{SimConfig, Simulation};
pub use entity::{Creature, Mobile, Player};
pub use persistence::{SaveError, SaveResult};
