use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-world boolean game rules.
///
/// The death chest spawn rule's name and default both come from
/// configuration; an empty name disables the rule entirely and the default
/// always wins.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct GameRules {
    values: BTreeMap<String, bool>,
}

impl GameRules {
    /// Create an empty rule table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a rule value.
    pub fn set(&mut self, name: impl Into<String>, value: bool) {
        self.values.insert(name.into(), value);
    }

    /// Resolve a rule: the stored value, or `default` when the rule is
    /// unset or `name` is empty.
    pub fn resolve(&self, name: &str, default: bool) -> bool {
        if name.is_empty() {
            return default;
        }
        self.values.get(name).copied().unwrap_or(default)
    }
}
