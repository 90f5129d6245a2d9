//! Death chests for fallen players.
//!
//! When a player dies, their dropped items are captured into a protected
//! container placed near the death position. A reloadable JSON config file
//! governs spawning, protection, and cleanup; a per-tick sweep removes
//! chests once they have been emptied.

pub mod config;
pub mod handler;

/// Mod identifier, used for the config file name.
pub const MOD_ID: &str = "vanilladeathchest";

pub use config::{Config, ConfigStore};
