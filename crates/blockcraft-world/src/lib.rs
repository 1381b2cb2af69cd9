//! Tile world for BlockCraft.
//!
//! Bounds-safe tile storage, the seeded procedural generator,
//! and collider overlap tests against the grid.

pub use blockcraft_core as core;

pub mod collision;
pub mod generator;
pub mod grid;

// Re-export key types for convenience.
pub use collision::{collider_overlaps_solid, sweep_axis, Axis};
pub use generator::{generate, seeded_stream};
pub use grid::Grid;
