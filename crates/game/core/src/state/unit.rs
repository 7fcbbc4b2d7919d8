use crate::config::GameConfig;

/// Team affiliation deciding friend/enemy status and turn ownership.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Team {
    #[default]
    Red,
    Blue,
}

impl Team {
    /// Faction name shown by the round banner.
    pub fn label(self) -> &'static str {
        match self {
            Team::Red => "Human",
            Team::Blue => "Goblin",
        }
    }
}

/// Unit archetype. Currently a single variant; the stats and attack
/// tables are keyed by kind so new archetypes only touch content data.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum UnitKind {
    #[default]
    Soldier,
}

/// Per-action lifecycle of a unit within one round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Posture {
    /// May be selected by its team this round.
    #[default]
    Idle,
    /// Currently driven by the cursor (selected or confirming a path).
    Moving,
    /// Already acted this round; reset by the round controller.
    Used,
}

/// Horizontal sprite orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// A single combatant occupying one grid cell.
///
/// Health runs 0..=100. A unit can be left at exactly 0 health by an
/// exact-kill exchange; such a unit stays in its cell but fails
/// [`Unit::is_alive`], so every liveness-sensitive query treats the cell
/// as empty. Death proper (removal from the grid) only happens when
/// combat drives health strictly below zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    pub team: Team,
    pub kind: UnitKind,
    pub posture: Posture,
    pub facing: Facing,
    pub health: u8,
}

impl Unit {
    /// Creates a fresh unit at full health.
    pub fn new(team: Team, kind: UnitKind) -> Self {
        Self {
            team,
            kind,
            posture: Posture::Idle,
            facing: Facing::Right,
            health: GameConfig::MAX_HEALTH,
        }
    }

    pub fn with_facing(mut self, facing: Facing) -> Self {
        self.facing = facing;
        self
    }

    pub fn with_health(mut self, health: u8) -> Self {
        self.health = health;
        self
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// True when `other` belongs to a different team.
    #[inline]
    pub fn is_enemy_of(&self, other: &Unit) -> bool {
        self.team != other.team
    }
}
