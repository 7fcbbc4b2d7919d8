//! Movement reachability: which tiles a unit can reach this action and
//! by which canonical path.
//!
//! Traversal is a plain breadth-first flood from the unit's tile. Every
//! edge costs one step, the queue is strictly FIFO, and a tile is
//! committed the first time it is dequeued, so the recorded path is
//! always shortest in steps.

use std::collections::{BTreeMap, VecDeque};

use crate::env::{GameEnv, OracleError};
use crate::state::{Direction, GameState, Position, Unit};

/// Ordered tile sequence from a unit's tile to one reachable tile,
/// origin inclusive.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    tiles: Vec<Position>,
}

impl Path {
    fn seed(origin: Position) -> Self {
        Self {
            tiles: vec![origin],
        }
    }

    fn extended(&self, next: Position) -> Self {
        let mut tiles = self.tiles.clone();
        tiles.push(next);
        Self { tiles }
    }

    pub fn tiles(&self) -> &[Position] {
        &self.tiles
    }

    pub fn origin(&self) -> Position {
        self.tiles[0]
    }

    pub fn destination(&self) -> Position {
        self.tiles[self.tiles.len() - 1]
    }

    /// Number of steps taken, i.e. `tiles.len() - 1`.
    pub fn steps(&self) -> u32 {
        (self.tiles.len() - 1) as u32
    }
}

/// Result of a reachability query: every reachable tile mapped to its
/// canonical shortest-in-steps path. Always contains the origin with a
/// one-tile path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReachableSet {
    paths: BTreeMap<Position, Path>,
}

impl ReachableSet {
    pub fn contains(&self, tile: Position) -> bool {
        self.paths.contains_key(&tile)
    }

    pub fn path(&self, tile: Position) -> Option<&Path> {
        self.paths.get(&tile)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Reachable tiles in deterministic (row-major key) order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Path)> {
        self.paths.iter().map(|(tile, path)| (*tile, path))
    }
}

/// Computes the set of tiles `origin`'s unit can reach within its
/// movement budget.
///
/// A step into a neighbor is illegal when the neighbor is out of
/// bounds, terrain-blocked, or occupied by a living enemy. Living
/// friendly occupants do not block: paths may pass through them and
/// even end on them (the selection layer decides what an occupied
/// destination means).
///
/// # Panics
///
/// Panics when `origin` does not hold a living unit. That is a cursor
/// invariant breach, not a runtime condition.
pub fn reachable_tiles(
    state: &GameState,
    env: &GameEnv<'_>,
    origin: Position,
) -> Result<ReachableSet, OracleError> {
    let mover = *state
        .units
        .unit_at(origin)
        .unwrap_or_else(|| panic!("reachability queried from empty origin {origin}"));

    let map = env.map()?;
    let budget = env.tables()?.unit_stats(mover.kind).movement_range;

    let mut reachable = ReachableSet::default();
    let mut queue: VecDeque<(Path, u32)> = VecDeque::new();
    queue.push_back((Path::seed(origin), budget));

    while let Some((path, remaining)) = queue.pop_front() {
        let tail = path.destination();

        // First discovery wins; later, longer routes to the same tile
        // are dropped on dequeue.
        if reachable.contains(tail) {
            continue;
        }

        if remaining > 0 {
            for direction in Direction::ALL {
                let next = tail.step(direction);

                if !map.contains(next) {
                    continue;
                }
                if map.is_blocked(next) {
                    continue;
                }
                if is_enemy_occupied(state, next, &mover) {
                    continue;
                }

                queue.push_back((path.extended(next), remaining - 1));
            }
        }

        reachable.paths.insert(tail, path);
    }

    Ok(reachable)
}

fn is_enemy_occupied(state: &GameState, tile: Position, mover: &Unit) -> bool {
    state
        .units
        .unit_at(tile)
        .is_some_and(|occupant| occupant.is_enemy_of(mover))
}

#[cfg(test)]
mod tests {
    use crate::env::{Env, MapDimensions, MapOracle, TablesOracle, UnitStats};
    use crate::state::{Team, UnitKind};

    use super::*;

    struct OpenMap {
        dimensions: MapDimensions,
        blocked: Vec<Position>,
    }

    impl OpenMap {
        fn new(width: u32, height: u32) -> Self {
            Self {
                dimensions: MapDimensions::new(width, height),
                blocked: Vec::new(),
            }
        }

        fn with_blocked(mut self, tiles: &[Position]) -> Self {
            self.blocked.extend_from_slice(tiles);
            self
        }
    }

    impl MapOracle for OpenMap {
        fn dimensions(&self) -> MapDimensions {
            self.dimensions
        }

        fn is_blocked(&self, position: Position) -> bool {
            self.blocked.contains(&position)
        }
    }

    struct FixedTables {
        movement_range: u32,
    }

    impl TablesOracle for FixedTables {
        fn unit_stats(&self, _kind: UnitKind) -> UnitStats {
            UnitStats::new(self.movement_range)
        }

        fn attack_fraction(&self, _attacker: UnitKind, _defender: UnitKind) -> f32 {
            0.5
        }
    }

    fn state_with_unit(width: u32, height: u32, at: Position, team: Team) -> GameState {
        let mut state = GameState::new(MapDimensions::new(width, height), vec![Team::Red, Team::Blue]);
        state.place_unit(at, Unit::new(team, UnitKind::Soldier));
        state
    }

    fn reach(state: &GameState, map: &OpenMap, range: u32, origin: Position) -> ReachableSet {
        let tables = FixedTables {
            movement_range: range,
        };
        let env = Env::with_all(map, &tables);
        reachable_tiles(state, &env.as_game_env(), origin).unwrap()
    }

    #[test]
    fn open_grid_reach_is_a_manhattan_ball() {
        let origin = Position::new(4, 4);
        let state = state_with_unit(9, 9, origin, Team::Red);
        let map = OpenMap::new(9, 9);
        let budget = 3;

        let reachable = reach(&state, &map, budget, origin);

        for y in 0..9 {
            for x in 0..9 {
                let tile = Position::new(x, y);
                let distance = origin.manhattan(tile);
                assert_eq!(
                    reachable.contains(tile),
                    distance <= budget,
                    "tile {tile} at distance {distance}"
                );
                if let Some(path) = reachable.path(tile) {
                    assert_eq!(path.steps(), distance);
                    assert_eq!(path.origin(), origin);
                    assert_eq!(path.destination(), tile);
                }
            }
        }
    }

    #[test]
    fn origin_always_present_with_trivial_path() {
        let origin = Position::new(0, 0);
        let state = state_with_unit(3, 3, origin, Team::Red);
        let map = OpenMap::new(3, 3);

        let reachable = reach(&state, &map, 2, origin);
        let path = reachable.path(origin).expect("origin must be reachable");
        assert_eq!(path.tiles(), &[origin]);
        assert_eq!(path.steps(), 0);
    }

    #[test]
    fn blocked_tiles_are_excluded_and_routed_around() {
        let origin = Position::new(0, 1);
        let state = state_with_unit(3, 3, origin, Team::Red);
        // Wall splitting column 1 except the bottom row.
        let map = OpenMap::new(3, 3).with_blocked(&[Position::new(1, 0), Position::new(1, 1)]);

        let reachable = reach(&state, &map, 4, origin);

        assert!(!reachable.contains(Position::new(1, 0)));
        assert!(!reachable.contains(Position::new(1, 1)));
        // (2, 1) is Manhattan distance 2 but the detour through (1, 2)
        // costs 4 steps.
        let detour = reachable.path(Position::new(2, 1)).expect("reachable via detour");
        assert_eq!(detour.steps(), 4);
    }

    #[test]
    fn enemies_block_but_friends_are_passable() {
        let origin = Position::new(0, 0);
        let mut state = state_with_unit(5, 1, origin, Team::Red);
        state.place_unit(Position::new(1, 0), Unit::new(Team::Red, UnitKind::Soldier));
        state.place_unit(Position::new(3, 0), Unit::new(Team::Blue, UnitKind::Soldier));
        let map = OpenMap::new(5, 1);

        let reachable = reach(&state, &map, 4, origin);

        // Friendly tile is both traversable and a listed destination.
        assert!(reachable.contains(Position::new(1, 0)));
        assert!(reachable.contains(Position::new(2, 0)));
        // The enemy tile and everything behind it are cut off.
        assert!(!reachable.contains(Position::new(3, 0)));
        assert!(!reachable.contains(Position::new(4, 0)));
    }

    #[test]
    fn zero_health_unit_is_ignored_by_reachability() {
        let origin = Position::new(0, 0);
        let mut state = state_with_unit(3, 1, origin, Team::Red);
        // Exact-kill leftover: present in the grid, not alive.
        state.place_unit(
            Position::new(1, 0),
            Unit::new(Team::Blue, UnitKind::Soldier).with_health(0),
        );
        let map = OpenMap::new(3, 1);

        let reachable = reach(&state, &map, 2, origin);
        assert!(reachable.contains(Position::new(1, 0)));
        assert!(reachable.contains(Position::new(2, 0)));
    }

    #[test]
    fn reach_never_leaves_the_grid() {
        let origin = Position::new(0, 0);
        let state = state_with_unit(2, 2, origin, Team::Red);
        let map = OpenMap::new(2, 2);

        let reachable = reach(&state, &map, 10, origin);
        assert_eq!(reachable.len(), 4);
    }

    #[test]
    #[should_panic(expected = "empty origin")]
    fn empty_origin_is_a_contract_violation() {
        let state = GameState::new(MapDimensions::new(3, 3), vec![Team::Red]);
        let map = OpenMap::new(3, 3);
        let tables = FixedTables { movement_range: 3 };
        let env = Env::with_all(&map, &tables);
        let _ = reachable_tiles(&state, &env.as_game_env(), Position::new(1, 1));
    }
}
