//! Authoritative game state representation.
//!
//! This module owns the mutable data the rules operate on: the unit
//! grid and the turn rotation. Frontends read this state for display
//! (active-team banner, per-unit health numerals) but mutate it only
//! through the cursor machine and the round controller.
mod common;
mod grid;
mod turn;
mod unit;

pub use common::{Direction, Position};
pub use grid::UnitGrid;
pub use turn::TurnState;
pub use unit::{Facing, Posture, Team, Unit, UnitKind};

use crate::env::MapDimensions;

/// Canonical snapshot of one battle in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Per-tile unit occupancy, same dimensions as the terrain map.
    pub units: UnitGrid,
    /// Team rotation and turn counter.
    pub turn: TurnState,
}

impl GameState {
    pub fn new(dimensions: MapDimensions, teams: Vec<Team>) -> Self {
        Self {
            units: UnitGrid::new(dimensions),
            turn: TurnState::new(teams),
        }
    }

    /// Initial deployment helper used by scenario setup.
    pub fn place_unit(&mut self, position: Position, unit: Unit) {
        self.units.place(position, unit);
    }

    /// The team whose action window is currently open.
    pub fn active_team(&self) -> Team {
        self.turn.active_team()
    }
}
