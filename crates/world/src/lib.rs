//! Death chest world model: chest records, per-world registries, the
//! collaborator seams onto the running world, and saved-data persistence.

mod access;
mod chest;
mod gamerule;
mod persist;
mod registry;

pub use access::*;
pub use chest::*;
pub use gamerule::*;
pub use persist::*;
pub use registry::*;
