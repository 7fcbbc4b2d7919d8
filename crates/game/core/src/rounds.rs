//! Round controller.
//!
//! Invoked by an external trigger (the end-turn button) between frames;
//! the core never advances the turn on its own.

use crate::state::{GameState, Posture, Team};

/// Data for the round banner after an advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundSummary {
    /// Completed full cycles through the team list.
    pub round: u64,
    pub active_team: Team,
}

/// Closes the current action window: bumps the turn counter and clears
/// exhaustion so units can act again.
///
/// The reset is grid-wide, every living `Used` unit of every team goes
/// back to `Idle`, not just the team whose turn ended. Dead-at-zero
/// leftovers are skipped.
pub fn next_round(state: &mut GameState) -> RoundSummary {
    state.turn.turn_index += 1;

    for (_, unit) in state.units.units_mut() {
        if unit.is_alive() && unit.posture == Posture::Used {
            unit.posture = Posture::Idle;
        }
    }

    RoundSummary {
        round: state.turn.round(),
        active_team: state.turn.active_team(),
    }
}

#[cfg(test)]
mod tests {
    use crate::env::MapDimensions;
    use crate::state::{Position, Unit, UnitKind};

    use super::*;

    fn two_team_state() -> GameState {
        GameState::new(MapDimensions::new(4, 4), vec![Team::Red, Team::Blue])
    }

    #[test]
    fn rotation_is_cyclic_over_the_team_list() {
        let mut state = two_team_state();
        assert_eq!(state.active_team(), Team::Red);

        // The summary feeds the external "Round {}: {} Team" banner,
        // which names factions by label.
        let summary = next_round(&mut state);
        assert_eq!(summary.active_team, Team::Blue);
        assert_eq!(summary.active_team.label(), "Goblin");
        assert_eq!(summary.round, 0);

        let summary = next_round(&mut state);
        assert_eq!(summary.active_team, Team::Red);
        assert_eq!(summary.active_team.label(), "Human");
        assert_eq!(summary.round, 1);
    }

    #[test]
    fn clears_used_for_all_teams() {
        let mut state = two_team_state();
        let red = Position::new(0, 0);
        let blue = Position::new(3, 3);

        let mut red_unit = Unit::new(Team::Red, UnitKind::Soldier);
        red_unit.posture = Posture::Used;
        let mut blue_unit = Unit::new(Team::Blue, UnitKind::Soldier);
        blue_unit.posture = Posture::Used;

        state.place_unit(red, red_unit);
        state.place_unit(blue, blue_unit);

        next_round(&mut state);

        assert_eq!(state.units.get(red).map(|unit| unit.posture), Some(Posture::Idle));
        assert_eq!(state.units.get(blue).map(|unit| unit.posture), Some(Posture::Idle));
    }

    #[test]
    fn dead_units_keep_their_posture() {
        let mut state = two_team_state();
        let at = Position::new(1, 1);

        let mut corpse = Unit::new(Team::Blue, UnitKind::Soldier).with_health(0);
        corpse.posture = Posture::Used;
        state.place_unit(at, corpse);

        next_round(&mut state);

        assert_eq!(state.units.get(at).map(|unit| unit.posture), Some(Posture::Used));
    }

    #[test]
    fn moving_and_idle_units_are_untouched() {
        let mut state = two_team_state();
        let at = Position::new(2, 2);

        let mut unit = Unit::new(Team::Red, UnitKind::Soldier);
        unit.posture = Posture::Moving;
        state.place_unit(at, unit);

        next_round(&mut state);

        assert_eq!(state.units.get(at).map(|unit| unit.posture), Some(Posture::Moving));
    }
}
