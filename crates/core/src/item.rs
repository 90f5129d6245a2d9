//! Item stacks as they appear in death chest inventories.

use serde::{Deserialize, Serialize};

/// Item identifier referencing the item registry.
pub type ItemId = u16;

/// A stack of items occupying one inventory slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    /// Item type identifier.
    pub item_id: ItemId,
    /// Number of items in this stack (1-64 typically).
    pub count: u8,
    /// Optional item metadata (damage, enchantments, etc.).
    pub metadata: Option<Vec<u8>>,
}

impl ItemStack {
    /// Create a new item stack.
    pub fn new(item_id: ItemId, count: u8) -> Self {
        Self {
            item_id,
            count,
            metadata: None,
        }
    }

    /// Create an item stack with metadata.
    pub fn with_metadata(item_id: ItemId, count: u8, metadata: Vec<u8>) -> Self {
        Self {
            item_id,
            count,
            metadata: Some(metadata),
        }
    }

    /// Whether this stack holds no items.
    ///
    /// Empty stacks can appear when gameplay drains a slot in place rather
    /// than clearing it.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
