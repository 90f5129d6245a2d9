//! Death chest placement when a player drops their items on death.

use deathchest_core::{BlockPos, DeathChestType, ItemStack, PlayerProfile, Tick};
use deathchest_world::{
    ContainerKind, DeathChest, DeathChestRegistry, GameRules, WorldAccess, CHEST_SLOT_COUNT,
};
use tracing::debug;

use crate::config::Config;

/// What a successful placement produced.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementOutcome {
    /// Canonical (west) position of the placed chest.
    pub pos: BlockPos,
    /// Whether an east half was placed as well.
    pub double: bool,
    /// Chat message for the dead player, unless disabled by config.
    pub message: Option<String>,
    /// Stacks that did not fit in the placed container(s). The caller is
    /// expected to drop these as regular item entities.
    pub leftover: Vec<ItemStack>,
}

/// Capture a dead player's drops into a freshly placed death chest.
///
/// Returns `None` without touching the world when there is nothing to
/// store, the spawn game rule resolves false, or no location within the
/// configured search radius can hold a container.
pub fn on_player_drop_all_items<W: WorldAccess>(
    world: &mut W,
    registry: &mut DeathChestRegistry,
    rules: &GameRules,
    profile: &PlayerProfile,
    death_pos: BlockPos,
    drops: Vec<ItemStack>,
    now: Tick,
    config: &Config,
) -> Option<PlacementOutcome> {
    if drops.is_empty() {
        return None;
    }

    if !rules.resolve(
        &config.misc.game_rule_name,
        config.misc.game_rule_default_value,
    ) {
        return None;
    }

    let want_double = config.spawning.chest_type == DeathChestType::SingleOrDouble
        && drops.len() > CHEST_SLOT_COUNT;
    let (pos, double) = find_location(
        world,
        death_pos,
        config.spawning.location_search_radius,
        want_double,
    )?;

    let kind = match config.spawning.chest_type {
        DeathChestType::ShulkerBox => ContainerKind::ShulkerBox(config.spawning.shulker_box_color),
        DeathChestType::SingleOnly | DeathChestType::SingleOrDouble => ContainerKind::Chest,
    };

    world.place_container(pos, kind);
    if double {
        world.place_container(pos.east(), kind);
    }

    // Fill west first, then east; stacks past the capacity go back to the
    // caller as leftovers.
    let mut remaining = drops;
    if let Some(state) = world.container_mut(pos) {
        remaining = state.fill(remaining);
    }
    if double {
        if let Some(state) = world.container_mut(pos.east()) {
            remaining = state.fill(remaining);
        }
    }

    registry.insert(DeathChest::new(pos, double, profile.id, now));
    debug!("Placed death chest for {} at {}", profile.id, pos);

    Some(PlacementOutcome {
        pos,
        double,
        message: format_message(&config.spawning.chat_message, pos),
        leftover: remaining,
    })
}

/// Find the nearest position that can hold the chest, scanning shells of
/// increasing Chebyshev distance from the death position in a fixed order.
///
/// When a double chest is wanted but no east-adjacent pair fits, the
/// nearest single-width spot is used instead.
fn find_location<W: WorldAccess>(
    world: &W,
    origin: BlockPos,
    radius: i32,
    double: bool,
) -> Option<(BlockPos, bool)> {
    let mut single_fallback = None;

    for r in 0..=radius {
        for dy in -r..=r {
            for dx in -r..=r {
                for dz in -r..=r {
                    if dx.abs().max(dy.abs()).max(dz.abs()) != r {
                        continue;
                    }
                    let pos = BlockPos::new(origin.x + dx, origin.y + dy, origin.z + dz);
                    if !world.is_replaceable(pos) {
                        continue;
                    }
                    if !double {
                        return Some((pos, false));
                    }
                    if world.is_replaceable(pos.east()) {
                        return Some((pos, true));
                    }
                    if single_fallback.is_none() {
                        single_fallback = Some(pos);
                    }
                }
            }
        }
    }

    single_fallback.map(|pos| (pos, false))
}

/// Substitute the X, Y, Z coordinates for the first three `%d` placeholders.
/// An empty template disables the message.
fn format_message(template: &str, pos: BlockPos) -> Option<String> {
    if template.is_empty() {
        return None;
    }

    let mut message = String::with_capacity(template.len());
    let mut rest = template;
    for value in [pos.x, pos.y, pos.z] {
        match rest.split_once("%d") {
            Some((head, tail)) => {
                message.push_str(head);
                message.push_str(&value.to_string());
                rest = tail;
            }
            None => break,
        }
    }
    message.push_str(rest);
    Some(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deathchest_core::{DyeColor, PlayerId};
    use deathchest_testkit::FakeWorld;
    use deathchest_world::Container;

    fn drops(count: usize) -> Vec<ItemStack> {
        (0..count).map(|n| ItemStack::new(n as u16, 1)).collect()
    }

    fn place(
        world: &mut FakeWorld,
        registry: &mut DeathChestRegistry,
        drop_count: usize,
        config: &Config,
    ) -> Option<PlacementOutcome> {
        on_player_drop_all_items(
            world,
            registry,
            &GameRules::new(),
            &PlayerProfile::survival(PlayerId(9)),
            BlockPos::new(0, 64, 0),
            drops(drop_count),
            Tick(40),
            config,
        )
    }

    #[test]
    fn small_drop_list_gets_a_single_chest_at_the_death_position() {
        let mut world = FakeWorld::new();
        let mut registry = DeathChestRegistry::new();

        let outcome = place(&mut world, &mut registry, 5, &Config::default()).unwrap();

        assert_eq!(outcome.pos, BlockPos::new(0, 64, 0));
        assert!(!outcome.double);
        assert!(outcome.leftover.is_empty());
        let record = registry.get(outcome.pos).unwrap();
        assert_eq!(record.owner, PlayerId(9));
        assert_eq!(record.placed_at, Tick(40));
        let container = world.container(outcome.pos).unwrap();
        assert_eq!(container.item(4).unwrap().item_id, 4);
    }

    #[test]
    fn overflowing_drops_get_a_double_chest() {
        let mut world = FakeWorld::new();
        let mut registry = DeathChestRegistry::new();

        let outcome = place(&mut world, &mut registry, 40, &Config::default()).unwrap();

        assert!(outcome.double);
        assert!(outcome.leftover.is_empty());
        assert!(world.container(outcome.pos.east()).is_some());
        // One registry entry covers both halves.
        assert_eq!(registry.len(), 1);
        let east = world.container(outcome.pos.east()).unwrap();
        assert_eq!(east.item(0).unwrap().item_id, CHEST_SLOT_COUNT as u16);
    }

    #[test]
    fn single_only_type_never_widens() {
        let mut world = FakeWorld::new();
        let mut registry = DeathChestRegistry::new();
        let mut config = Config::default();
        config.spawning.chest_type = DeathChestType::SingleOnly;

        let outcome = place(&mut world, &mut registry, 40, &config).unwrap();

        assert!(!outcome.double);
        assert_eq!(outcome.leftover.len(), 40 - CHEST_SLOT_COUNT);
    }

    #[test]
    fn empty_drop_list_places_nothing() {
        let mut world = FakeWorld::new();
        let mut registry = DeathChestRegistry::new();

        assert!(place(&mut world, &mut registry, 0, &Config::default()).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn game_rule_false_suppresses_placement() {
        let mut world = FakeWorld::new();
        let mut registry = DeathChestRegistry::new();
        let mut rules = GameRules::new();
        rules.set("spawnDeathChests", false);

        let outcome = on_player_drop_all_items(
            &mut world,
            &mut registry,
            &rules,
            &PlayerProfile::survival(PlayerId(9)),
            BlockPos::new(0, 64, 0),
            drops(5),
            Tick::ZERO,
            &Config::default(),
        );

        assert!(outcome.is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn occupied_death_position_moves_the_chest_nearby() {
        let mut world = FakeWorld::new();
        let mut registry = DeathChestRegistry::new();
        world.set_solid(BlockPos::new(0, 64, 0));

        let outcome = place(&mut world, &mut registry, 5, &Config::default()).unwrap();

        assert_ne!(outcome.pos, BlockPos::new(0, 64, 0));
        // Still within the search radius shell closest to the death point.
        let d = (outcome.pos.x.abs())
            .max((outcome.pos.y - 64).abs())
            .max(outcome.pos.z.abs());
        assert_eq!(d, 1);
    }

    #[test]
    fn shulker_type_places_a_colored_shulker_box() {
        let mut world = FakeWorld::new();
        let mut registry = DeathChestRegistry::new();
        let mut config = Config::default();
        config.spawning.chest_type = DeathChestType::ShulkerBox;
        config.spawning.shulker_box_color = DyeColor::Lime;

        let outcome = place(&mut world, &mut registry, 40, &config).unwrap();

        assert!(!outcome.double);
        assert_eq!(
            world.container_kind(outcome.pos),
            Some(ContainerKind::ShulkerBox(DyeColor::Lime))
        );
    }

    #[test]
    fn message_substitutes_coordinates() {
        assert_eq!(
            format_message("Death chest spawned at [%d, %d, %d]", BlockPos::new(1, -2, 3)),
            Some("Death chest spawned at [1, -2, 3]".to_string())
        );
    }

    #[test]
    fn message_with_fewer_placeholders_keeps_remainder() {
        assert_eq!(
            format_message("x=%d", BlockPos::new(7, 8, 9)),
            Some("x=7".to_string())
        );
    }

    #[test]
    fn empty_message_template_is_disabled() {
        assert_eq!(format_message("", BlockPos::new(1, 2, 3)), None);
    }
}
