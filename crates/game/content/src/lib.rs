//! Battle content: concrete oracles and data-file loaders.
//!
//! This crate supplies the environment side of the rules:
//! - Terrain grids (owned obstacle maps implementing `MapOracle`)
//! - Balance tables (built-in defaults and TOML-loaded rule sets)
//! - Scenario files (turn order and initial deployment, via RON)
//!
//! Content feeds the core through its oracle traits and never appears
//! in game state itself.

pub mod tables;
pub mod terrain;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use tables::StandardTables;
pub use terrain::TerrainGrid;

#[cfg(feature = "loaders")]
pub use loaders::{
    LoadResult, MapLoader, RulesTables, Scenario, ScenarioLoader, TablesLoader, UnitSpec,
};
