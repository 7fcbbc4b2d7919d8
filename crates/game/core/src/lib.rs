//! Deterministic turn-based tactics rules shared across frontends.
//!
//! `skirmish-core` defines the canonical rules: unit and grid state,
//! movement reachability, combat resolution, the cursor state machine
//! and the round controller. Everything is pure and synchronous; the
//! environment (terrain, balance tables) is reached through the oracle
//! traits in [`env`], and rendering happens outside against the draw
//! intents returned by [`cursor::Cursor::update`].
pub mod combat;
pub mod config;
pub mod cursor;
pub mod env;
pub mod movement;
pub mod rounds;
pub mod state;

pub use combat::{CombatOutcome, resolve_attack};
pub use config::GameConfig;
pub use cursor::{
    ATTACK_HIGHLIGHT, Cursor, CursorState, DrawCommand, FrameInput, GHOST_TINT, HOVER_HIGHLIGHT,
    MOVE_HIGHLIGHT, Rgba,
};
pub use env::{Env, GameEnv, MapDimensions, MapOracle, OracleError, TablesOracle, UnitStats};
pub use movement::{Path, ReachableSet, reachable_tiles};
pub use rounds::{RoundSummary, next_round};
pub use state::{
    Direction, Facing, GameState, Position, Posture, Team, TurnState, Unit, UnitGrid, UnitKind,
};
