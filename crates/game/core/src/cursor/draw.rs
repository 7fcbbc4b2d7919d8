//! Draw intents emitted by the cursor machine.
//!
//! The core never touches a renderer; each update returns a list of
//! these descriptors and the frontend decides how to realize them.

use crate::movement::Path;
use crate::state::{Position, Unit};

/// Straight RGBA color, components in `[0, 1]`.
pub type Rgba = [f32; 4];

/// Hover marker over the pointed-at tile.
pub const HOVER_HIGHLIGHT: Rgba = [1.0, 1.0, 1.0, 0.4];
/// Reachable tiles and the pending destination.
pub const MOVE_HIGHLIGHT: Rgba = [0.5, 0.5, 1.0, 0.4];
/// Adjacent enemies that can be attacked after the move.
pub const ATTACK_HIGHLIGHT: Rgba = [1.0, 0.5, 0.5, 0.4];
/// Tint for the ghost unit sliding along the pending path.
pub const GHOST_TINT: Rgba = [1.0, 1.0, 1.0, 0.6];

/// One draw intent for the external renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawCommand {
    /// Fill the tile's rectangle with `color`.
    TileHighlight { tile: Position, color: Rgba },
    /// Render the unit's sprite at a fractional map position.
    UnitGhost {
        unit: Unit,
        position: [f32; 2],
        color: Rgba,
    },
}

/// Fractional map position of the ghost unit for a given interpolation
/// scalar. Once the scalar reaches the last path segment the ghost
/// snaps to the destination and stays there.
pub(crate) fn ghost_position(path: &Path, interpolation: f32) -> [f32; 2] {
    let tiles = path.tiles();
    let start = interpolation as usize;

    if start + 1 >= tiles.len() {
        let last = tiles[tiles.len() - 1];
        return [last.x as f32, last.y as f32];
    }

    let t = interpolation.fract();
    let from = tiles[start];
    let to = tiles[start + 1];
    [
        from.x as f32 * (1.0 - t) + to.x as f32 * t,
        from.y as f32 * (1.0 - t) + to.y as f32 * t,
    ]
}
