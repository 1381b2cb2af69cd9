//! Core types and definitions for the BlockCraft simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! tile kinds and their properties, the inventory, commands, snapshot
//! views, and tuning constants. It has no dependency on any rendering
//! or windowing layer.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod inventory;
pub mod state;
pub mod tile;
pub mod types;

pub use inventory::Inventory;
pub use tile::{TileCatalog, TileKind, TileProps, CATALOG};
