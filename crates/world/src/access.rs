//! Seams onto the running world.
//!
//! The simulation owns blocks, chunks, and block entities; this crate only
//! needs the narrow views below. Implementations are provided by the host
//! (and by the test kit's in-memory fake).

use deathchest_core::{BlockPos, ChunkPos, ItemStack};

use crate::{ChestState, ContainerKind};

/// Read access to one container block entity's slots.
pub trait Container {
    /// Number of inventory slots.
    fn slot_count(&self) -> usize;

    /// The stack in `slot`, or `None` for an empty slot.
    fn item(&self, slot: usize) -> Option<&ItemStack>;

    /// True when every slot is empty.
    fn is_empty(&self) -> bool {
        (0..self.slot_count()).all(|slot| self.item(slot).map_or(true, ItemStack::is_empty))
    }
}

impl Container for ChestState {
    fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn item(&self, slot: usize) -> Option<&ItemStack> {
        self.slots.get(slot).and_then(Option::as_ref)
    }
}

/// Access to world state from a single world's simulation thread.
pub trait WorldAccess {
    /// Whether the chunk is resident in memory.
    ///
    /// Must never force a chunk load; sweeps call this every tick for every
    /// tracked chest.
    fn is_chunk_loaded(&self, chunk: ChunkPos) -> bool;

    /// The container block entity at `pos`, if the block there is a
    /// lootable container.
    fn container(&self, pos: BlockPos) -> Option<&dyn Container>;

    /// Mutable slots of the container at `pos`, if present.
    fn container_mut(&mut self, pos: BlockPos) -> Option<&mut ChestState>;

    /// Replace the block at `pos` with air.
    fn clear_block(&mut self, pos: BlockPos);

    /// Whether a container block may be placed at `pos` (air, grass, and
    /// other replaceable blocks).
    fn is_replaceable(&self, pos: BlockPos) -> bool;

    /// Place a container block of the given kind at `pos` with a fresh,
    /// empty inventory.
    fn place_container(&mut self, pos: BlockPos, kind: ContainerKind);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_chest_state_is_empty_container() {
        let state = ChestState::new();
        assert_eq!(state.slot_count(), 27);
        assert!(state.is_empty());
    }

    #[test]
    fn container_with_stack_is_not_empty() {
        let mut state = ChestState::new();
        state.slots[26] = Some(ItemStack::new(1, 1));
        assert!(!state.is_empty());
        assert!(state.item(26).is_some());
        assert!(state.item(0).is_none());
    }

    #[test]
    fn zero_count_stacks_count_as_empty() {
        let mut state = ChestState::new();
        state.slots[0] = Some(ItemStack::new(1, 0));
        assert!(state.is_empty());
    }
}
