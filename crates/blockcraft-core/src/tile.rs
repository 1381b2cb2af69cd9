//! Tile kinds and the immutable tile property table.

use serde::{Deserialize, Serialize};

/// Every kind of tile a grid cell can hold.
///
/// Declaration order is significant: it is the iteration order of
/// [`TileKind::ALL`] and therefore the order inventory entries are saved in.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum TileKind {
    #[default]
    Air,
    Grass,
    Dirt,
    Stone,
    Water,
    Log,
    Planks,
    Gold,
}

/// Physical and display properties of a tile kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileProps {
    /// Blocks entity movement.
    pub solid: bool,
    /// Can be removed by mining.
    pub mineable: bool,
    /// RGBA tint for renderers.
    pub color: [f32; 4],
}

/// Lookup table from tile kind to its properties.
#[derive(Debug)]
pub struct TileCatalog {
    props: [TileProps; TileKind::COUNT],
}

/// The process-wide tile table.
pub static CATALOG: TileCatalog = TileCatalog {
    props: [
        // Air
        TileProps {
            solid: false,
            mineable: false,
            color: [0.0, 0.0, 0.0, 0.0],
        },
        // Grass
        TileProps {
            solid: true,
            mineable: true,
            color: [0.25, 0.75, 0.25, 1.0],
        },
        // Dirt
        TileProps {
            solid: true,
            mineable: true,
            color: [0.55, 0.37, 0.20, 1.0],
        },
        // Stone
        TileProps {
            solid: true,
            mineable: true,
            color: [0.55, 0.55, 0.60, 1.0],
        },
        // Water
        TileProps {
            solid: false,
            mineable: false,
            color: [0.20, 0.45, 0.90, 1.0],
        },
        // Log
        TileProps {
            solid: true,
            mineable: true,
            color: [0.55, 0.30, 0.12, 1.0],
        },
        // Planks
        TileProps {
            solid: true,
            mineable: true,
            color: [0.80, 0.65, 0.35, 1.0],
        },
        // Gold
        TileProps {
            solid: true,
            mineable: true,
            color: [0.95, 0.80, 0.20, 1.0],
        },
    ],
};

impl TileCatalog {
    /// Properties of `kind`.
    pub fn props(&self, kind: TileKind) -> &TileProps {
        &self.props[kind as usize]
    }
}

impl TileKind {
    /// Number of tile kinds.
    pub const COUNT: usize = 8;

    /// All tile kinds in declaration order.
    pub const ALL: [TileKind; Self::COUNT] = [
        TileKind::Air,
        TileKind::Grass,
        TileKind::Dirt,
        TileKind::Stone,
        TileKind::Water,
        TileKind::Log,
        TileKind::Planks,
        TileKind::Gold,
    ];

    pub fn props(self) -> &'static TileProps {
        CATALOG.props(self)
    }

    pub fn is_solid(self) -> bool {
        self.props().solid
    }

    pub fn is_mineable(self) -> bool {
        self.props().mineable
    }

    /// Character used for this kind in the save file tile block.
    pub fn save_char(self) -> char {
        match self {
            TileKind::Air => '.',
            TileKind::Grass => 'g',
            TileKind::Dirt => 'd',
            TileKind::Stone => 's',
            TileKind::Water => 'w',
            TileKind::Log => 'l',
            TileKind::Planks => 'p',
            TileKind::Gold => 'G',
        }
    }

    /// Inverse of [`TileKind::save_char`]. Unknown characters read as Air.
    pub fn from_save_char(c: char) -> TileKind {
        match c {
            'g' => TileKind::Grass,
            'd' => TileKind::Dirt,
            's' => TileKind::Stone,
            'w' => TileKind::Water,
            'l' => TileKind::Log,
            'p' => TileKind::Planks,
            'G' => TileKind::Gold,
            _ => TileKind::Air,
        }
    }

    /// Upper-case name used for inventory entries in save files.
    pub fn name(self) -> &'static str {
        match self {
            TileKind::Air => "AIR",
            TileKind::Grass => "GRASS",
            TileKind::Dirt => "DIRT",
            TileKind::Stone => "STONE",
            TileKind::Water => "WATER",
            TileKind::Log => "LOG",
            TileKind::Planks => "PLANKS",
            TileKind::Gold => "GOLD",
        }
    }

    /// Strict inverse of [`TileKind::name`].
    pub fn from_name(name: &str) -> Option<TileKind> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}
