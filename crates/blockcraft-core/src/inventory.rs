//! Player inventory: a multiset of tile kinds.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::STARTING_ITEMS;
use crate::tile::TileKind;

/// Counts of held tile kinds. A kind that is absent is held zero times;
/// entries that drop to zero are removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    counts: BTreeMap<TileKind, u32>,
}

impl Inventory {
    /// An inventory with nothing in it.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The inventory a new player starts with.
    pub fn starting() -> Self {
        let mut inventory = Self::empty();
        for (kind, amount) in STARTING_ITEMS {
            inventory.add(kind, amount);
        }
        inventory
    }

    /// Number of `kind` held.
    pub fn get(&self, kind: TileKind) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Add `amount` of `kind`. Adding zero is a no-op.
    pub fn add(&mut self, kind: TileKind, amount: u32) {
        if amount == 0 {
            return;
        }
        let count = self.counts.entry(kind).or_insert(0);
        *count = count.saturating_add(amount);
    }

    /// Remove `amount` of `kind`. Returns false and leaves the inventory
    /// untouched if fewer than `amount` are held.
    pub fn take(&mut self, kind: TileKind, amount: u32) -> bool {
        let have = self.get(kind);
        if have < amount {
            return false;
        }
        let left = have - amount;
        if left == 0 {
            self.counts.remove(&kind);
        } else {
            self.counts.insert(kind, left);
        }
        true
    }

    /// Held kinds and counts in tile declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (TileKind, u32)> + '_ {
        self.counts.iter().map(|(kind, count)| (*kind, *count))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct kinds held.
    pub fn len(&self) -> usize {
        self.counts.len()
    }
}
