use deathchest_core::{BlockPos, DyeColor, ItemStack, PlayerId, Tick};
use serde::{Deserialize, Serialize};

/// Number of slots in a single chest inventory (3 rows × 9 columns).
pub const CHEST_SLOT_COUNT: usize = 27;

/// Persisted inventory state for a chest block entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChestState {
    pub slots: [Option<ItemStack>; CHEST_SLOT_COUNT],
}

impl Default for ChestState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChestState {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    /// Fill slots in order from `items`, returning the stacks that did not fit.
    pub fn fill(&mut self, items: impl IntoIterator<Item = ItemStack>) -> Vec<ItemStack> {
        let mut items = items.into_iter();
        for slot in self.slots.iter_mut() {
            if slot.is_none() {
                match items.next() {
                    Some(stack) => *slot = Some(stack),
                    None => break,
                }
            }
        }
        items.collect()
    }
}

/// The container block variants a death chest can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerKind {
    /// A plain chest.
    Chest,
    /// A dyed shulker box.
    ShulkerBox(DyeColor),
}

/// One placed death chest.
///
/// `pos` is always the canonical west half; a double chest's second half is
/// derived as `pos.east()` and never gets its own record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeathChest {
    pub pos: BlockPos,
    pub double: bool,
    pub owner: PlayerId,
    pub placed_at: Tick,
}

impl DeathChest {
    pub fn new(pos: BlockPos, double: bool, owner: PlayerId, placed_at: Tick) -> Self {
        Self {
            pos,
            double,
            owner,
            placed_at,
        }
    }

    /// The east half, when this record is a double chest.
    pub fn second_half(&self) -> Option<BlockPos> {
        self.double.then(|| self.pos.east())
    }
}
