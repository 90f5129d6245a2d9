//! Reloadable, self-healing configuration.

mod schema;
mod store;

pub use schema::{
    CategoryDescriptor, Config, Misc, PropertyDescriptor, PropertyKind, Protection, Spawning,
    SCHEMA,
};
pub use store::ConfigStore;
