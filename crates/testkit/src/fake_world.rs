use std::cell::Cell;
use std::collections::{BTreeMap, BTreeSet};

use deathchest_core::{BlockPos, ChunkPos, ItemStack};
use deathchest_world::{ChestState, Container, ContainerKind, WorldAccess};

#[derive(Debug, Clone)]
enum Block {
    Container { kind: ContainerKind, state: ChestState },
    Solid,
}

/// In-memory [`WorldAccess`] implementation.
///
/// Every chunk is loaded unless explicitly unloaded. Absent blocks are air.
/// Accesses to blocks in unloaded chunks are counted so tests can assert
/// that sweeps never touch unloaded state.
#[derive(Debug, Default)]
pub struct FakeWorld {
    unloaded_chunks: BTreeSet<ChunkPos>,
    blocks: BTreeMap<BlockPos, Block>,
    unloaded_accesses: Cell<usize>,
}

impl FakeWorld {
    /// An empty world with every chunk loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a chunk as not resident in memory.
    pub fn unload_chunk(&mut self, chunk: ChunkPos) {
        self.unloaded_chunks.insert(chunk);
    }

    /// Place an empty plain chest at `pos`.
    pub fn place_chest(&mut self, pos: BlockPos) {
        self.place_container(pos, ContainerKind::Chest);
    }

    /// Put a stack into a container slot. Panics if there is no container.
    pub fn put_item(&mut self, pos: BlockPos, slot: usize, stack: ItemStack) {
        match self.blocks.get_mut(&pos) {
            Some(Block::Container { state, .. }) => state.slots[slot] = Some(stack),
            _ => panic!("no container at {pos}"),
        }
    }

    /// Fill `pos` with a non-container, non-replaceable block.
    pub fn set_solid(&mut self, pos: BlockPos) {
        self.blocks.insert(pos, Block::Solid);
    }

    /// True when `pos` holds no block.
    pub fn is_air(&self, pos: BlockPos) -> bool {
        !self.blocks.contains_key(&pos)
    }

    /// The container kind at `pos`, if any.
    pub fn container_kind(&self, pos: BlockPos) -> Option<ContainerKind> {
        match self.blocks.get(&pos) {
            Some(Block::Container { kind, .. }) => Some(*kind),
            _ => None,
        }
    }

    /// How many block accesses hit unloaded chunks.
    pub fn unloaded_accesses(&self) -> usize {
        self.unloaded_accesses.get()
    }

    fn note_access(&self, pos: BlockPos) {
        if self.unloaded_chunks.contains(&pos.chunk()) {
            self.unloaded_accesses.set(self.unloaded_accesses.get() + 1);
        }
    }
}

impl WorldAccess for FakeWorld {
    fn is_chunk_loaded(&self, chunk: ChunkPos) -> bool {
        !self.unloaded_chunks.contains(&chunk)
    }

    fn container(&self, pos: BlockPos) -> Option<&dyn Container> {
        self.note_access(pos);
        match self.blocks.get(&pos) {
            Some(Block::Container { state, .. }) => Some(state),
            _ => None,
        }
    }

    fn container_mut(&mut self, pos: BlockPos) -> Option<&mut ChestState> {
        self.note_access(pos);
        match self.blocks.get_mut(&pos) {
            Some(Block::Container { state, .. }) => Some(state),
            _ => None,
        }
    }

    fn clear_block(&mut self, pos: BlockPos) {
        self.note_access(pos);
        self.blocks.remove(&pos);
    }

    fn is_replaceable(&self, pos: BlockPos) -> bool {
        self.note_access(pos);
        !self.blocks.contains_key(&pos)
    }

    fn place_container(&mut self, pos: BlockPos, kind: ContainerKind) {
        self.note_access(pos);
        self.blocks.insert(
            pos,
            Block::Container {
                kind,
                state: ChestState::new(),
            },
        );
    }
}
