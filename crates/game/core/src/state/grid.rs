use crate::env::MapDimensions;

use super::{Position, Unit};

/// Dense per-tile unit storage.
///
/// Each cell holds at most one unit; `None` marks an empty tile. The
/// grid is owned exclusively by [`GameState`](super::GameState) and is
/// mutated only by initial placement, move/attack resolution inside the
/// cursor machine, and the round controller's posture reset.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitGrid {
    width: u32,
    height: u32,
    cells: Vec<Option<Unit>>,
}

impl UnitGrid {
    pub fn new(dimensions: MapDimensions) -> Self {
        let len = dimensions.width as usize * dimensions.height as usize;
        Self {
            width: dimensions.width,
            height: dimensions.height,
            cells: vec![None; len],
        }
    }

    pub fn dimensions(&self) -> MapDimensions {
        MapDimensions::new(self.width, self.height)
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }

    fn index(&self, position: Position) -> Option<usize> {
        if !self.contains(position) {
            return None;
        }
        Some(position.y as usize * self.width as usize + position.x as usize)
    }

    /// The occupant of a cell, dead or alive. `None` for empty cells and
    /// out-of-bounds positions.
    pub fn get(&self, position: Position) -> Option<&Unit> {
        self.cells.get(self.index(position)?)?.as_ref()
    }

    pub fn get_mut(&mut self, position: Position) -> Option<&mut Unit> {
        let index = self.index(position)?;
        self.cells.get_mut(index)?.as_mut()
    }

    /// The living occupant of a cell. A unit left at exactly 0 health by
    /// an exact-kill exchange is invisible to this query.
    pub fn unit_at(&self, position: Position) -> Option<&Unit> {
        self.get(position).filter(|unit| unit.is_alive())
    }

    /// Writes `slot` into the cell, replacing whatever was there.
    ///
    /// # Panics
    ///
    /// Panics when `position` is out of bounds; callers hold positions
    /// that were already validated against the map.
    pub fn set(&mut self, position: Position, slot: Option<Unit>) {
        let index = self
            .index(position)
            .unwrap_or_else(|| panic!("unit grid write out of bounds at {position}"));
        self.cells[index] = slot;
    }

    pub fn place(&mut self, position: Position, unit: Unit) {
        self.set(position, Some(unit));
    }

    /// Removes and returns the occupant of a cell.
    pub fn take(&mut self, position: Position) -> Option<Unit> {
        let index = self.index(position)?;
        self.cells[index].take()
    }

    /// All occupied cells with their positions, row-major order.
    pub fn units(&self) -> impl Iterator<Item = (Position, &Unit)> {
        self.cells.iter().enumerate().filter_map(|(index, cell)| {
            let unit = cell.as_ref()?;
            Some((self.position_of(index), unit))
        })
    }

    pub fn units_mut(&mut self) -> impl Iterator<Item = (Position, &mut Unit)> {
        let width = self.width;
        self.cells.iter_mut().enumerate().filter_map(move |(index, cell)| {
            let unit = cell.as_mut()?;
            let position = Position::new(
                (index % width as usize) as i32,
                (index / width as usize) as i32,
            );
            Some((position, unit))
        })
    }

    fn position_of(&self, index: usize) -> Position {
        Position::new(
            (index % self.width as usize) as i32,
            (index / self.width as usize) as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::state::{Team, UnitKind};

    use super::*;

    fn grid_5x5() -> UnitGrid {
        UnitGrid::new(MapDimensions::new(5, 5))
    }

    #[test]
    fn place_take_roundtrip() {
        let mut grid = grid_5x5();
        let unit = Unit::new(Team::Red, UnitKind::Soldier);
        let at = Position::new(2, 3);

        grid.place(at, unit);
        assert_eq!(grid.get(at), Some(&unit));

        assert_eq!(grid.take(at), Some(unit));
        assert_eq!(grid.get(at), None);
    }

    #[test]
    fn out_of_bounds_reads_are_empty() {
        let grid = grid_5x5();
        assert_eq!(grid.get(Position::new(-1, 0)), None);
        assert_eq!(grid.get(Position::new(5, 0)), None);
        assert_eq!(grid.unit_at(Position::new(0, 17)), None);
    }

    #[test]
    fn unit_at_skips_zero_health_occupants() {
        let mut grid = grid_5x5();
        let at = Position::new(1, 1);
        grid.place(at, Unit::new(Team::Blue, UnitKind::Soldier).with_health(0));

        assert!(grid.get(at).is_some());
        assert_eq!(grid.unit_at(at), None);
    }

    #[test]
    fn units_iterates_in_row_major_order() {
        let mut grid = grid_5x5();
        grid.place(Position::new(4, 0), Unit::new(Team::Red, UnitKind::Soldier));
        grid.place(Position::new(0, 1), Unit::new(Team::Blue, UnitKind::Soldier));

        let positions: Vec<Position> = grid.units().map(|(pos, _)| pos).collect();
        assert_eq!(positions, vec![Position::new(4, 0), Position::new(0, 1)]);
    }
}
