use super::Team;

/// Turn bookkeeping: which teams participate and whose window is open.
///
/// The turn counter only ever increases, and it is advanced exclusively
/// by [`rounds::next_round`](crate::rounds::next_round); the cursor
/// machine reads it but never writes it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Ordered list of participating teams. Rotation order is the list
    /// order; the list never changes after setup.
    teams: Vec<Team>,

    /// Monotonically increasing action-window counter.
    pub turn_index: u64,
}

impl TurnState {
    /// # Panics
    ///
    /// Panics when `teams` is empty; a game without teams has no
    /// meaningful turn rotation.
    pub fn new(teams: Vec<Team>) -> Self {
        assert!(!teams.is_empty(), "turn rotation requires at least one team");
        Self {
            teams,
            turn_index: 0,
        }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// The team whose action window is currently open.
    pub fn active_team(&self) -> Team {
        self.teams[(self.turn_index % self.teams.len() as u64) as usize]
    }

    /// Completed full cycles through the team list.
    pub fn round(&self) -> u64 {
        self.turn_index / self.teams.len() as u64
    }
}
