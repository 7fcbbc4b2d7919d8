//! Content loaders for reading battle data from files.
//!
//! RON carries layout-shaped data (terrain, scenarios), TOML carries
//! rule tables. Loaders hand back either concrete oracle
//! implementations or plain core types ready to apply to a
//! [`GameState`](skirmish_core::GameState).

pub mod map;
pub mod scenario;
pub mod tables;

pub use map::MapLoader;
pub use scenario::{Scenario, ScenarioLoader, UnitSpec};
pub use tables::{RulesTables, TablesLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
