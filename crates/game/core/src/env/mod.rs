//! Traits describing read-only world data.
//!
//! Oracles expose static terrain geometry and balance tables. The
//! [`Env`] aggregate bundles them so the rules can reach everything
//! they need without hard coupling to concrete implementations.
mod error;
mod map;
mod tables;

pub use error::OracleError;
pub use map::{MapDimensions, MapOracle};
pub use tables::{TablesOracle, UnitStats};

/// Aggregates the read-only oracles required by movement and combat.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, M, T>
where
    M: MapOracle + ?Sized,
    T: TablesOracle + ?Sized,
{
    map: Option<&'a M>,
    tables: Option<&'a T>,
}

pub type GameEnv<'a> = Env<'a, dyn MapOracle + 'a, dyn TablesOracle + 'a>;

impl<'a, M, T> Env<'a, M, T>
where
    M: MapOracle + ?Sized,
    T: TablesOracle + ?Sized,
{
    pub fn new(map: Option<&'a M>, tables: Option<&'a T>) -> Self {
        Self { map, tables }
    }

    pub fn with_all(map: &'a M, tables: &'a T) -> Self {
        Self::new(Some(map), Some(tables))
    }

    pub fn empty() -> Self {
        Self {
            map: None,
            tables: None,
        }
    }

    /// Returns the MapOracle, or an error if not available.
    pub fn map(&self) -> Result<&'a M, OracleError> {
        self.map.ok_or(OracleError::MapNotAvailable)
    }

    /// Returns the TablesOracle, or an error if not available.
    pub fn tables(&self) -> Result<&'a T, OracleError> {
        self.tables.ok_or(OracleError::TablesNotAvailable)
    }
}

impl<'a, M, T> Env<'a, M, T>
where
    M: MapOracle + 'a,
    T: TablesOracle + 'a,
{
    /// Converts this environment into a trait-object based [`GameEnv`].
    pub fn as_game_env(&self) -> GameEnv<'a> {
        let map: Option<&'a dyn MapOracle> = self.map.map(|map| map as _);
        let tables: Option<&'a dyn TablesOracle> = self.tables.map(|tables| tables as _);
        Env::new(map, tables)
    }
}
