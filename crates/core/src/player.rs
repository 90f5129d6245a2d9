//! Player identity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable player identifier (the 128-bit profile UUID).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct PlayerId(pub u128);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

/// The facts about a player that gameplay rules consult.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Stable identity.
    pub id: PlayerId,
    /// Whether the player is currently in creative mode.
    pub creative: bool,
    /// Operator permission level (0 = regular player).
    pub permission_level: u8,
}

impl PlayerProfile {
    /// A regular survival player with no permissions.
    pub fn survival(id: PlayerId) -> Self {
        Self {
            id,
            creative: false,
            permission_level: 0,
        }
    }
}
