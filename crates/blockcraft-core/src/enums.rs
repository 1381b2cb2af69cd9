//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Kind of mobile entity, used by renderers to pick a look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Creature,
}

impl EntityKind {
    /// RGBA tint for renderers.
    pub fn color(self) -> [f32; 4] {
        match self {
            EntityKind::Player => [0.95, 0.35, 0.30, 1.0],
            EntityKind::Creature => [0.70, 0.30, 0.85, 1.0],
        }
    }
}

/// Cardinal step direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    East,
    West,
    South,
    North,
}

impl Direction {
    /// Directions indexed by a uniform roll in `0..4`.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::South,
        Direction::North,
    ];

    /// Tile offset of one step (y grows with the row index).
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::South => (0, 1),
            Direction::North => (0, -1),
        }
    }
}
