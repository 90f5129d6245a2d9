//! Test support: an in-memory world fake and temp-path helpers.
//!
//! Only ever wired in through `[dev-dependencies]`.

mod fake_world;

pub use fake_world::FakeWorld;

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// A unique path under the system temp directory, keyed by `tag`.
pub fn temp_path(tag: &str) -> PathBuf {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("deathchest_{tag}_{timestamp}"))
}
