//! Input-driven cursor state machine.
//!
//! The cursor is the orchestrator of the core: it consumes one frame of
//! pointer input at a time, walks a unit through select → confirm →
//! commit, and is the only code path (besides the round controller)
//! allowed to mutate the unit grid. Every transition builds a fresh
//! [`CursorState`]; frames without a click never touch the grid.

mod draw;

pub use draw::{
    ATTACK_HIGHLIGHT, DrawCommand, GHOST_TINT, HOVER_HIGHLIGHT, MOVE_HIGHLIGHT, Rgba,
};

use std::time::Duration;

use crate::combat;
use crate::config::GameConfig;
use crate::env::{GameEnv, OracleError};
use crate::movement::{Path, ReachableSet, reachable_tiles};
use crate::state::{Direction, Facing, GameState, Position, Posture, Unit};

/// One frame of pointer input. The pointer tile may be out of bounds;
/// that is an ordinary condition, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameInput {
    pub pointer: Position,
    pub clicked: bool,
    pub dt: Duration,
}

impl FrameInput {
    pub fn new(pointer: Position, clicked: bool, dt: Duration) -> Self {
        Self {
            pointer,
            clicked,
            dt,
        }
    }

    fn dt_ms(&self) -> f32 {
        self.dt.as_secs_f32() * 1000.0
    }
}

/// Closed set of cursor modes. Exactly one is active; transitions are
/// dispatched through an exhaustive match so a new mode cannot be added
/// without handling it everywhere.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CursorState {
    /// No selection; remembers the hovered tile for the highlight.
    Default { hovered: Option<Position> },
    /// A unit is selected and its reachable tiles are on display.
    Selected {
        origin: Position,
        reachable: ReachableSet,
    },
    /// A path was chosen; a ghost slides along it awaiting the final
    /// click. The interpolation scalar is local to this state instance
    /// and restarts at zero whenever the state is freshly entered.
    Confirmation {
        origin: Position,
        path: Path,
        interpolation: f32,
    },
}

impl Default for CursorState {
    fn default() -> Self {
        CursorState::Default { hovered: None }
    }
}

/// The cursor machine. One [`Cursor::update`] call per rendered frame.
#[derive(Clone, Debug, Default)]
pub struct Cursor {
    state: CursorState,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CursorState {
        &self.state
    }

    /// Advances the machine by one frame and returns the draw intents
    /// for it. All grid mutation happens synchronously inside the
    /// click-handling branches; the caller observes either the state
    /// before the transition or the state after it, never a partial
    /// application.
    pub fn update(
        &mut self,
        game: &mut GameState,
        env: &GameEnv<'_>,
        input: FrameInput,
    ) -> Result<Vec<DrawCommand>, OracleError> {
        let mut commands = Vec::new();

        // Resolve both oracle slots before taking the state: a missing
        // slot fails the frame with the machine untouched.
        env.map()?;
        env.tables()?;

        self.state = match std::mem::take(&mut self.state) {
            CursorState::Default { .. } => update_default(game, env, input, &mut commands)?,
            CursorState::Selected { origin, reachable } => {
                update_selected(origin, reachable, game, input, &mut commands)
            }
            CursorState::Confirmation {
                origin,
                path,
                interpolation,
            } => update_confirmation(origin, path, interpolation, game, env, input, &mut commands)?,
        };

        Ok(commands)
    }
}

fn update_default(
    game: &mut GameState,
    env: &GameEnv<'_>,
    input: FrameInput,
    commands: &mut Vec<DrawCommand>,
) -> Result<CursorState, OracleError> {
    let map = env.map()?;

    if !map.contains(input.pointer) {
        return Ok(CursorState::Default { hovered: None });
    }

    let mut next = CursorState::Default {
        hovered: Some(input.pointer),
    };

    if input.clicked {
        let active_team = game.active_team();
        let selectable = game
            .units
            .unit_at(input.pointer)
            .is_some_and(|unit| unit.team == active_team && unit.posture == Posture::Idle);

        if selectable {
            if let Some(unit) = game.units.get_mut(input.pointer) {
                unit.posture = Posture::Moving;
            }
            next = CursorState::Selected {
                origin: input.pointer,
                reachable: reachable_tiles(game, env, input.pointer)?,
            };
        }
    }

    commands.push(DrawCommand::TileHighlight {
        tile: input.pointer,
        color: HOVER_HIGHLIGHT,
    });

    Ok(next)
}

fn update_selected(
    origin: Position,
    reachable: ReachableSet,
    game: &mut GameState,
    input: FrameInput,
    commands: &mut Vec<DrawCommand>,
) -> CursorState {
    let mut next = None;

    if input.clicked {
        next = Some(match reachable.path(input.pointer) {
            Some(path) => {
                let occupied = game.units.unit_at(input.pointer).is_some();

                if !occupied || input.pointer == origin {
                    let destination = path.destination();
                    let unit = selected_unit_mut(game, origin);
                    if destination.x < origin.x {
                        unit.facing = Facing::Left;
                    } else if destination.x > origin.x {
                        unit.facing = Facing::Right;
                    }
                    CursorState::Confirmation {
                        origin,
                        path: path.clone(),
                        interpolation: 0.0,
                    }
                } else {
                    // Reachable but occupied by someone else: abort the
                    // selection instead of landing on them.
                    selected_unit_mut(game, origin).posture = Posture::Idle;
                    CursorState::Default { hovered: None }
                }
            }
            None => {
                selected_unit_mut(game, origin).posture = Posture::Idle;
                CursorState::Default { hovered: None }
            }
        });
    }

    for (tile, _) in reachable.iter() {
        commands.push(DrawCommand::TileHighlight {
            tile,
            color: MOVE_HIGHLIGHT,
        });
    }

    next.unwrap_or(CursorState::Selected { origin, reachable })
}

fn update_confirmation(
    origin: Position,
    path: Path,
    interpolation: f32,
    game: &mut GameState,
    env: &GameEnv<'_>,
    input: FrameInput,
    commands: &mut Vec<DrawCommand>,
) -> Result<CursorState, OracleError> {
    let map = env.map()?;
    let interpolation = interpolation + input.dt_ms() * GameConfig::GHOST_RATE_PER_MS;
    let destination = path.destination();
    let mover = *selected_unit(game, origin);

    commands.push(DrawCommand::UnitGhost {
        unit: mover,
        position: draw::ghost_position(&path, interpolation),
        color: GHOST_TINT,
    });
    commands.push(DrawCommand::TileHighlight {
        tile: destination,
        color: MOVE_HIGHLIGHT,
    });

    for direction in Direction::ALL {
        let adjacent = destination.step(direction);
        if !map.contains(adjacent) {
            continue;
        }
        let hostile = game
            .units
            .unit_at(adjacent)
            .is_some_and(|unit| unit.is_enemy_of(&mover));
        if hostile {
            commands.push(DrawCommand::TileHighlight {
                tile: adjacent,
                color: ATTACK_HIGHLIGHT,
            });
        }
    }

    if !input.clicked {
        return Ok(CursorState::Confirmation {
            origin,
            path,
            interpolation,
        });
    }

    if input.pointer == destination {
        let mut unit = take_selected(game, origin);
        unit.posture = Posture::Used;
        game.units.place(destination, unit);
        return Ok(CursorState::Default { hovered: None });
    }

    let attack_target = destination
        .is_adjacent(input.pointer)
        .then(|| game.units.unit_at(input.pointer).copied())
        .flatten()
        .filter(|enemy| enemy.is_enemy_of(&mover));

    if let Some(enemy) = attack_target {
        let mut unit = take_selected(game, origin);
        unit.posture = Posture::Used;

        let outcome = combat::resolve_attack(unit, enemy, env.tables()?);
        game.units.set(destination, outcome.attacker);
        game.units.set(input.pointer, outcome.defender);
        return Ok(CursorState::Default { hovered: None });
    }

    // Anywhere else: drop back to selection with a fresh reachability
    // pass so the player can pick another path.
    Ok(CursorState::Selected {
        origin,
        reachable: reachable_tiles(game, env, origin)?,
    })
}

/// # Panics
///
/// The selected origin losing its unit mid-selection is a state-machine
/// invariant breach, handled as a fatal programmer error.
fn selected_unit(game: &GameState, origin: Position) -> &Unit {
    game.units
        .get(origin)
        .unwrap_or_else(|| panic!("cursor selection lost its unit at {origin}"))
}

fn selected_unit_mut(game: &mut GameState, origin: Position) -> &mut Unit {
    game.units
        .get_mut(origin)
        .unwrap_or_else(|| panic!("cursor selection lost its unit at {origin}"))
}

fn take_selected(game: &mut GameState, origin: Position) -> Unit {
    game.units
        .take(origin)
        .unwrap_or_else(|| panic!("cursor selection lost its unit at {origin}"))
}
