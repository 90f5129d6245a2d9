//! Static configuration schema.
//!
//! Every category and property the mod understands is declared once in
//! [`SCHEMA`], with its default, bounds, and user-facing description. The
//! store walks this table to reconcile the on-disk document and to fill the
//! typed [`Config`]; each property carries an `apply` slot that writes the
//! resolved value into its `Config` field, so the table is the single source
//! of truth for the document shape and the in-memory shape alike.

use deathchest_core::{DeathChestType, DyeColor};

/// Typed view of the full configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Options that don't fit into any other categories.
    pub misc: Misc,
    /// Death chest protection options.
    pub protection: Protection,
    /// Death chest spawning options.
    pub spawning: Spawning,
}

/// Options that don't fit into any other categories.
#[derive(Debug, Clone, PartialEq)]
pub struct Misc {
    /// Whether emptied death chests are removed by the per-tick sweep.
    pub death_chests_disappear_when_emptied: bool,
    /// Whether death chests drop a chest item when broken.
    pub drop_death_chests: bool,
    /// Default value of the death chest spawning game rule.
    pub game_rule_default_value: bool,
    /// Name of the death chest spawning game rule; empty disables the rule.
    pub game_rule_name: String,
    /// Whether the administrative reload command should be available.
    pub reload_command: bool,
}

/// Death chest protection options.
#[derive(Debug, Clone, PartialEq)]
pub struct Protection {
    /// Whether creative-mode players bypass protection.
    pub bypass_if_creative: bool,
    /// Permission level that bypasses protection.
    pub bypass_permission_level: u8,
    /// Whether death chests are protected at all.
    pub enabled: bool,
    /// Protection duration in ticks; 0 protects indefinitely.
    pub period: u64,
}

/// Death chest spawning options.
#[derive(Debug, Clone, PartialEq)]
pub struct Spawning {
    /// Message sent to the player when their chest is placed; empty disables.
    pub chat_message: String,
    /// The kind of container placed on death.
    pub chest_type: DeathChestType,
    /// Radius of the placement location search, in blocks.
    pub location_search_radius: i32,
    /// Shulker box color when `chest_type` is `shulker_box`.
    pub shulker_box_color: DyeColor,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            misc: Misc {
                death_chests_disappear_when_emptied: true,
                drop_death_chests: false,
                game_rule_default_value: true,
                game_rule_name: "spawnDeathChests".to_string(),
                reload_command: true,
            },
            protection: Protection {
                bypass_if_creative: true,
                bypass_permission_level: 4,
                enabled: true,
                period: 120_000,
            },
            spawning: Spawning {
                chat_message: "Death chest spawned at [%d, %d, %d]".to_string(),
                chest_type: DeathChestType::SingleOrDouble,
                location_search_radius: 8,
                shulker_box_color: DyeColor::White,
            },
        }
    }
}

/// The semantic type of a property, its default, and the slot that writes a
/// resolved value into [`Config`].
#[derive(Clone, Copy)]
pub enum PropertyKind {
    /// A boolean flag.
    Bool {
        default: bool,
        apply: fn(&mut Config, bool),
    },
    /// An integer with inclusive bounds; out-of-range input is clamped.
    Int {
        default: i64,
        min: i64,
        max: i64,
        apply: fn(&mut Config, i64),
    },
    /// A free-form string.
    Str {
        default: &'static str,
        apply: fn(&mut Config, &str),
    },
    /// One of a fixed set of constants, matched by exact text.
    Enum {
        default: &'static str,
        variants: &'static [&'static str],
        apply: fn(&mut Config, &str),
    },
}

/// One configurable property.
pub struct PropertyDescriptor {
    /// Key within the category object.
    pub key: &'static str,
    /// User-facing description, one line per element.
    pub description: &'static [&'static str],
    /// Semantic type, default, and apply slot.
    pub kind: PropertyKind,
}

/// One named group of properties.
pub struct CategoryDescriptor {
    /// Top-level document key.
    pub key: &'static str,
    /// User-facing description, one line per element.
    pub description: &'static [&'static str],
    /// Properties in declaration order.
    pub properties: &'static [PropertyDescriptor],
}

/// The full schema, in document order.
pub static SCHEMA: &[CategoryDescriptor] = &[
    CategoryDescriptor {
        key: "misc",
        description: &["Options that don't fit into any other categories."],
        properties: &[
            PropertyDescriptor {
                key: "death_chests_disappear_when_emptied",
                description: &[
                    "Whether death chests should disappear when all of their items are removed.",
                ],
                kind: PropertyKind::Bool {
                    default: true,
                    apply: |config, value| {
                        config.misc.death_chests_disappear_when_emptied = value;
                    },
                },
            },
            PropertyDescriptor {
                key: "drop_death_chests",
                description: &[
                    "Whether death chests should be dropped when broken.",
                    "Enable this for infinite chests.",
                ],
                kind: PropertyKind::Bool {
                    default: false,
                    apply: |config, value| config.misc.drop_death_chests = value,
                },
            },
            PropertyDescriptor {
                key: "game_rule_default_value",
                description: &["The default value of the death chest spawning game rule."],
                kind: PropertyKind::Bool {
                    default: true,
                    apply: |config, value| config.misc.game_rule_default_value = value,
                },
            },
            PropertyDescriptor {
                key: "game_rule_name",
                description: &[
                    "The name of the death chest spawning game rule.",
                    "Set this to an empty string to disable the game rule.",
                ],
                kind: PropertyKind::Str {
                    default: "spawnDeathChests",
                    apply: |config, value| config.misc.game_rule_name = value.to_string(),
                },
            },
            PropertyDescriptor {
                key: "reload_command",
                description: &["Whether to enable the configuration reload command."],
                kind: PropertyKind::Bool {
                    default: true,
                    apply: |config, value| config.misc.reload_command = value,
                },
            },
        ],
    },
    CategoryDescriptor {
        key: "protection",
        description: &["Options related to death chest protection."],
        properties: &[
            PropertyDescriptor {
                key: "bypass_if_creative",
                description: &[
                    "Whether players in creative mode should be able to bypass death chest \
                     protection.",
                ],
                kind: PropertyKind::Bool {
                    default: true,
                    apply: |config, value| config.protection.bypass_if_creative = value,
                },
            },
            PropertyDescriptor {
                key: "bypass_permission_level",
                description: &["The required permission level to bypass death chest protection."],
                kind: PropertyKind::Int {
                    default: 4,
                    min: 0,
                    max: u8::MAX as i64,
                    apply: |config, value| config.protection.bypass_permission_level = value as u8,
                },
            },
            PropertyDescriptor {
                key: "enabled",
                description: &[
                    "Whether death chests should be protected.",
                    "When this is enabled, death chests can only be broken by their owners.",
                ],
                kind: PropertyKind::Bool {
                    default: true,
                    apply: |config, value| config.protection.enabled = value,
                },
            },
            PropertyDescriptor {
                key: "period",
                description: &[
                    "The amount of time in ticks death chest protection should last.",
                    "120000 ticks is 5 in-game days.",
                    "Set this to 0 to protect death chests indefinitely.",
                ],
                kind: PropertyKind::Int {
                    default: 120_000,
                    min: 0,
                    max: i64::MAX,
                    apply: |config, value| config.protection.period = value as u64,
                },
            },
        ],
    },
    CategoryDescriptor {
        key: "spawning",
        description: &["Options related to death chest spawning."],
        properties: &[
            PropertyDescriptor {
                key: "chat_message",
                description: &[
                    "The message sent to a player when they die and a death chest is placed.",
                    "%d refers to the X, Y and Z coordinates.",
                    "Set this to an empty string to disable the message.",
                ],
                kind: PropertyKind::Str {
                    default: "Death chest spawned at [%d, %d, %d]",
                    apply: |config, value| config.spawning.chat_message = value.to_string(),
                },
            },
            PropertyDescriptor {
                key: "chest_type",
                description: &["The type of death chest that should be placed."],
                kind: PropertyKind::Enum {
                    default: "single_or_double",
                    variants: DeathChestType::VARIANTS,
                    apply: |config, value| {
                        config.spawning.chest_type =
                            value.parse().unwrap_or(DeathChestType::SingleOrDouble);
                    },
                },
            },
            PropertyDescriptor {
                key: "location_search_radius",
                description: &["The death chest location search radius."],
                kind: PropertyKind::Int {
                    default: 8,
                    min: 1,
                    max: 64,
                    apply: |config, value| config.spawning.location_search_radius = value as i32,
                },
            },
            PropertyDescriptor {
                key: "shulker_box_color",
                description: &["The color of the shulker box if chest_type is set to shulker_box."],
                kind: PropertyKind::Enum {
                    default: "white",
                    variants: DyeColor::VARIANTS,
                    apply: |config, value| {
                        config.spawning.shulker_box_color = value.parse().unwrap_or(DyeColor::White);
                    },
                },
            },
        ],
    },
];
