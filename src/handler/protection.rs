//! Death chest protection rules.

use deathchest_core::{PlayerProfile, Tick};
use deathchest_world::DeathChest;

use crate::config::Config;

/// Whether `profile` may open or break `chest` at tick `now`.
///
/// Owners always may. Everyone may once protection is disabled or the
/// protection period has elapsed (a period of 0 protects indefinitely).
/// Creative mode and a high enough permission level bypass protection when
/// the corresponding options allow it.
pub fn can_interact(
    chest: &DeathChest,
    profile: &PlayerProfile,
    now: Tick,
    config: &Config,
) -> bool {
    if !config.protection.enabled {
        return true;
    }

    if chest.owner == profile.id {
        return true;
    }

    let period = config.protection.period;
    if period > 0 && now >= chest.placed_at.saturating_add(period) {
        return true;
    }

    if config.protection.bypass_if_creative && profile.creative {
        return true;
    }

    profile.permission_level >= config.protection.bypass_permission_level
}

/// Whether breaking a death chest drops a chest item.
pub fn break_drops_chest(config: &Config) -> bool {
    config.misc.drop_death_chests
}
