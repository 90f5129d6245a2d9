//! Per-tick sweep that removes death chests once they have been emptied.

use deathchest_core::BlockPos;
use deathchest_world::{DeathChestRegistry, WorldAccess};
use tracing::debug;

use crate::config::Config;

/// Scan the world's death chests and remove every record whose container is
/// loaded and fully empty, clearing the chest block(s) it occupies.
///
/// Runs once per world tick on that world's simulation thread. Disabled
/// entirely by `misc.death_chests_disappear_when_emptied`.
pub fn on_world_tick<W: WorldAccess>(
    world: &mut W,
    registry: &mut DeathChestRegistry,
    config: &Config,
) {
    if !config.misc.death_chests_disappear_when_emptied {
        return;
    }

    let emptied = collect_emptied(world, registry);
    apply_removals(world, registry, &emptied);
}

/// First pass: read-only scan over the registry. The collected positions
/// form a stable snapshot, so the mutating pass cannot perturb iteration.
fn collect_emptied<W: WorldAccess>(world: &W, registry: &DeathChestRegistry) -> Vec<BlockPos> {
    let mut emptied = Vec::new();

    for chest in registry.iter() {
        // Make sure we don't unnecessarily load any chunks.
        if !world.is_chunk_loaded(chest.pos.chunk()) {
            continue;
        }

        // The block may already be broken or replaced by other gameplay.
        let container = match world.container(chest.pos) {
            Some(container) => container,
            None => continue,
        };

        if container.is_empty() {
            emptied.push(chest.pos);
        }
    }

    emptied
}

/// Second pass: removal from the registry and block clearing as one logical
/// unit per record. A record that vanished since the scan was handled by
/// another path, so its blocks are left alone.
fn apply_removals<W: WorldAccess>(
    world: &mut W,
    registry: &mut DeathChestRegistry,
    emptied: &[BlockPos],
) {
    for &pos in emptied {
        let chest = match registry.remove(pos) {
            Some(chest) => chest,
            None => continue,
        };

        world.clear_block(chest.pos);
        if let Some(second) = chest.second_half() {
            world.clear_block(second);
        }

        debug!("Removed emptied death chest at {}", chest.pos);
    }
}
