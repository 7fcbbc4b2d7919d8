use skirmish_core::{MapDimensions, MapOracle, Position};

/// Owned terrain grid: one obstacle flag per tile.
///
/// This is the concrete [`MapOracle`] handed to the core. How the flags
/// were produced (tilemap properties, a data file, test art) is not the
/// core's business.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainGrid {
    dimensions: MapDimensions,
    blocked: Vec<bool>,
}

impl TerrainGrid {
    /// An all-open grid.
    pub fn open(dimensions: MapDimensions) -> Self {
        let len = dimensions.width as usize * dimensions.height as usize;
        Self {
            dimensions,
            blocked: vec![false; len],
        }
    }

    /// An open grid with the listed tiles blocked. Out-of-bounds entries
    /// are ignored.
    pub fn with_blocked(dimensions: MapDimensions, tiles: &[Position]) -> Self {
        let mut grid = Self::open(dimensions);
        for &tile in tiles {
            if let Some(index) = grid.index(tile) {
                grid.blocked[index] = true;
            }
        }
        grid
    }

    /// Builds a grid from row art: `#` is blocked, anything else open.
    /// Handy for tests and tools.
    ///
    /// # Panics
    ///
    /// Panics when rows are empty or ragged; fixture art is authored by
    /// hand and a silent truncation would hide the typo.
    pub fn from_rows(rows: &[&str]) -> Self {
        assert!(!rows.is_empty(), "terrain art needs at least one row");
        let width = rows[0].chars().count();
        assert!(width > 0, "terrain art needs at least one column");

        let mut blocked = Vec::with_capacity(width * rows.len());
        for row in rows {
            assert_eq!(
                row.chars().count(),
                width,
                "terrain art rows must all have the same width"
            );
            blocked.extend(row.chars().map(|cell| cell == '#'));
        }

        Self {
            dimensions: MapDimensions::new(width as u32, rows.len() as u32),
            blocked,
        }
    }

    fn index(&self, position: Position) -> Option<usize> {
        if !self.dimensions.contains(position) {
            return None;
        }
        Some(position.y as usize * self.dimensions.width as usize + position.x as usize)
    }
}

impl MapOracle for TerrainGrid {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn is_blocked(&self, position: Position) -> bool {
        self.index(position)
            .map(|index| self.blocked[index])
            .unwrap_or(false)
    }
}
