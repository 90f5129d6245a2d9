use std::collections::BTreeMap;

use deathchest_core::BlockPos;
use serde::{Deserialize, Serialize};

use crate::DeathChest;

/// Per-world map of placed death chests.
/// Uses BTreeMap for deterministic iteration order (position-sorted).
///
/// One registry exists per world instance; registries share no state.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct DeathChestRegistry {
    chests: BTreeMap<BlockPos, DeathChest>,
}

impl DeathChestRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked death chests.
    pub fn len(&self) -> usize {
        self.chests.len()
    }

    /// Returns true when no chests are tracked.
    pub fn is_empty(&self) -> bool {
        self.chests.is_empty()
    }

    /// Record a placed death chest, keyed by its canonical position.
    ///
    /// Returns the record previously stored at that position, if any.
    pub fn insert(&mut self, chest: DeathChest) -> Option<DeathChest> {
        self.chests.insert(chest.pos, chest)
    }

    /// Look up the record at `pos`.
    pub fn get(&self, pos: BlockPos) -> Option<&DeathChest> {
        self.chests.get(&pos)
    }

    /// Remove and return the record at `pos`, or `None` when another path
    /// already removed it.
    pub fn remove(&mut self, pos: BlockPos) -> Option<DeathChest> {
        self.chests.remove(&pos)
    }

    /// Iterate records in position order.
    pub fn iter(&self) -> impl Iterator<Item = &DeathChest> {
        self.chests.values()
    }

    /// Clone the current records into a stable, position-ordered snapshot.
    ///
    /// Sweeps iterate the snapshot so removals cannot perturb iteration.
    pub fn snapshot(&self) -> Vec<DeathChest> {
        self.chests.values().cloned().collect()
    }
}
