//! Scenario loader.
//!
//! A scenario file pins down the starting situation of one battle: the
//! team rotation order and the initial unit deployment. Loading yields
//! a [`Scenario`], which is then applied to a map to build the opening
//! [`GameState`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use skirmish_core::{Facing, GameState, MapDimensions, Position, Team, Unit, UnitKind};

use crate::loaders::{LoadResult, read_file};

/// One unit placement in a scenario file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitSpec {
    pub team: Team,
    pub kind: UnitKind,
    pub x: i32,
    pub y: i32,
    /// Initial sprite orientation. Defaults to facing right, so
    /// scenario files typically only set it for the defending side.
    #[serde(default)]
    pub facing: Facing,
}

impl UnitSpec {
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// Parsed scenario data: turn order plus initial deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub teams: Vec<Team>,
    pub units: Vec<UnitSpec>,
}

impl Scenario {
    /// Build the opening game state on a map of the given dimensions.
    ///
    /// Fails when a placement falls outside the map or two units share
    /// a tile.
    pub fn deploy(&self, dimensions: MapDimensions) -> LoadResult<GameState> {
        let mut state = GameState::new(dimensions, self.teams.clone());

        for spec in &self.units {
            let position = spec.position();
            if !dimensions.contains(position) {
                anyhow::bail!(
                    "unit placement {position} is outside the {}x{} map",
                    dimensions.width,
                    dimensions.height
                );
            }
            if state.units.get(position).is_some() {
                anyhow::bail!("two units deployed on the same tile {position}");
            }
            let unit = Unit::new(spec.team, spec.kind).with_facing(spec.facing);
            state.place_unit(position, unit);
        }

        Ok(state)
    }
}

/// Loader for scenario data from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        let scenario: Scenario = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        if scenario.teams.is_empty() {
            anyhow::bail!("scenario declares no teams");
        }
        for spec in &scenario.units {
            if !scenario.teams.contains(&spec.team) {
                anyhow::bail!(
                    "unit at {} belongs to {}, which is not in the turn order",
                    spec.position(),
                    spec.team
                );
            }
        }

        Ok(scenario)
    }
}
