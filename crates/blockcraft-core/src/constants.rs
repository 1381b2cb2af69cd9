//! Simulation constants and tuning parameters.

use crate::tile::TileKind;

// --- Timing ---

/// Upper bound on the elapsed time fed into a single tick (seconds).
/// Larger steps could carry an entity through a one-tile wall.
pub const MAX_TICK_DT: f64 = 1.0 / 20.0;

// --- World defaults ---

/// Default world width in tiles.
pub const DEFAULT_WORLD_WIDTH: i32 = 220;

/// Default world height in tiles.
pub const DEFAULT_WORLD_HEIGHT: i32 = 120;

/// Default world seed.
pub const DEFAULT_SEED: i64 = 1337;

// --- Generation ---

/// Fraction of the world height at which the ground surface sits.
pub const GROUND_LEVEL_FRACTION: f64 = 0.62;

/// Maximum surface deviation from the base ground level (tiles, either way).
pub const SURFACE_BUMP: i32 = 2;

/// Minimum distance between the surface and the top/bottom edge (tiles).
pub const SURFACE_MARGIN: i32 = 4;

/// Number of dirt rows directly beneath the grass layer.
pub const DIRT_DEPTH: i32 = 2;

/// Exclusive upper bound of the ore roll for each deep tile.
pub const ORE_ROLL_RANGE: u32 = 50;

/// Ore roll value that yields gold.
pub const GOLD_ROLL: u32 = 1;

/// Chance per column to start a surface water pool.
pub const POOL_CHANCE: f64 = 0.05;

/// Minimum water pool width (tiles).
pub const POOL_MIN_WIDTH: i32 = 4;

/// Exclusive upper bound of the water pool width (tiles).
pub const POOL_MAX_WIDTH: i32 = 12;

/// Chance per column to grow a tree.
pub const TREE_CHANCE: f64 = 0.07;

/// Number of boulder clusters scattered above ground.
pub const BOULDER_COUNT: u32 = 60;

/// Smallest boulder radius (tiles).
pub const BOULDER_MIN_RADIUS: i32 = 1;

/// Largest boulder radius (tiles, inclusive).
pub const BOULDER_MAX_RADIUS: i32 = 2;

/// Chance for each air cell inside a boulder to become stone.
pub const BOULDER_FILL_CHANCE: f64 = 0.65;

// --- Entities ---

/// Walking speed of a mobile entity moved with `Mobile::walk` (tiles per second).
pub const WALK_SPEED: f64 = 5.0;

/// Half-width of the square collider (tiles).
pub const COLLIDER_RADIUS: f64 = 0.28;

/// Maximum distance at which a tile can be mined or placed (tiles).
pub const REACH: f64 = 4.0;

/// Maximum ring radius searched for a safe spawn tile.
pub const SPAWN_SEARCH_RADIUS: i32 = 40;

/// Creature spawn offset east of the player (tiles).
pub const CREATURE_SPAWN_OFFSET: f64 = 6.0;

/// Creature step cooldown base (seconds).
pub const CREATURE_COOLDOWN_MIN: f64 = 0.25;

/// Random extra cooldown added to the base, drawn from `[0, spread)` (seconds).
pub const CREATURE_COOLDOWN_SPREAD: f64 = 0.25;

/// Creature refuses to step within this distance of the player on both axes.
pub const CREATURE_PLAYER_CLEARANCE: f64 = 0.5;

// --- Inventory ---

/// Items a new player starts with.
pub const STARTING_ITEMS: [(TileKind, u32); 2] = [(TileKind::Dirt, 25), (TileKind::Planks, 12)];

/// The placeable palette, in slot order.
pub const HOTBAR: [TileKind; 6] = [
    TileKind::Dirt,
    TileKind::Grass,
    TileKind::Stone,
    TileKind::Log,
    TileKind::Planks,
    TileKind::Water,
];

// --- Persistence ---

/// First line of every save file.
pub const SAVE_HEADER: &str = "BC2D:1";

/// Default save file name.
pub const DEFAULT_SAVE_FILE: &str = "savegame.bc2d";
