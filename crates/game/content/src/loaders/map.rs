//! Terrain data loader.
//!
//! Loads the blocked-tile grid from a RON file. Unit placement is
//! handled separately via scenario files.

use std::path::Path;

use serde::{Deserialize, Serialize};
use skirmish_core::{MapDimensions, Position};

use crate::loaders::{LoadResult, read_file};
use crate::terrain::TerrainGrid;

/// Terrain data structure for RON files (obstacles only).
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MapDataRon {
    dimensions: (u32, u32),
    blocked: Vec<(i32, i32)>,
}

/// Loader for terrain data from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load a terrain grid from a RON file. Tiles default to open; the
    /// `blocked` list marks the obstacles.
    pub fn load(path: &Path) -> LoadResult<TerrainGrid> {
        let content = read_file(path)?;
        let data: MapDataRon = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;

        let dimensions = MapDimensions::new(data.dimensions.0, data.dimensions.1);

        let blocked: Vec<Position> = data
            .blocked
            .iter()
            .map(|&(x, y)| Position::new(x, y))
            .collect();

        for &tile in &blocked {
            if !dimensions.contains(tile) {
                anyhow::bail!(
                    "blocked tile {tile} is outside the {}x{} map",
                    dimensions.width,
                    dimensions.height
                );
            }
        }

        Ok(TerrainGrid::with_blocked(dimensions, &blocked))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use skirmish_core::MapOracle;

    use super::*;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_dimensions_and_obstacles() {
        let file = write_temp(
            r#"(
                dimensions: (12, 8),
                blocked: [(3, 2), (4, 2)],
            )"#,
        );

        let grid = MapLoader::load(file.path()).unwrap();
        assert_eq!(grid.dimensions(), MapDimensions::new(12, 8));
        assert!(grid.is_blocked(Position::new(3, 2)));
        assert!(grid.is_blocked(Position::new(4, 2)));
        assert!(!grid.is_blocked(Position::new(0, 0)));
    }

    #[test]
    fn rejects_out_of_bounds_obstacles() {
        let file = write_temp(
            r#"(
                dimensions: (4, 4),
                blocked: [(9, 9)],
            )"#,
        );

        assert!(MapLoader::load(file.path()).is_err());
    }
}
