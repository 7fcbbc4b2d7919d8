use crate::state::Position;

/// Static terrain oracle exposing grid geometry and the per-tile
/// obstacle flag.
///
/// The concrete grid is owned by the environment (map loading and tile
/// properties are presentation-side concerns); the rules only ever ask
/// these two questions.
pub trait MapOracle: Send + Sync {
    fn dimensions(&self) -> MapDimensions;

    /// True when terrain forbids entering the tile. Out-of-bounds
    /// positions are handled by [`MapOracle::contains`], not here.
    fn is_blocked(&self, position: Position) -> bool;

    fn contains(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }
}
