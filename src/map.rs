//! Building a [PathGrid] from external tile descriptions: ASCII maps in the style of the
//! Moving AI benchmark format, and named tiles as they come out of a tile editor.
use crate::cell::CellIndex;
use crate::grid::{GridConfig, GridConfigError, PathGrid, TileData};
use log::debug;
use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum MapParseError {
    #[error("map contains no rows")]
    Empty,
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown tile character {ch:?} at column {column}, row {row}")]
    UnknownTile { ch: char, column: usize, row: usize },
    #[error("map of {width}x{height} cells exceeds the index range")]
    TooLarge { width: usize, height: usize },
    #[error("invalid map extents: {0}")]
    Config(#[from] GridConfigError),
}

/// Grid extents for a map of `width` columns and `height` rows. Every column and row index of
/// an accepted map fits in an `i32`.
fn map_extents(width: usize, height: usize) -> Result<GridConfig, MapParseError> {
    match (i32::try_from(width), i32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok(GridConfig::new(w, h)?),
        _ => Err(MapParseError::TooLarge { width, height }),
    }
}

/// Maps a single map character to a tile. `.`, `G` and `S` are free ground, digits are free
/// ground with that surcharge, and `#`, `@`, `O`, `T` and `W` are obstacles.
fn parse_tile(ch: char) -> Option<TileData> {
    match ch {
        '.' | 'G' | 'S' => Some(TileData::DEFAULT),
        '#' | '@' | 'O' | 'T' | 'W' => Some(TileData::new(false, 0.0, 0)),
        '1'..='9' => ch
            .to_digit(10)
            .map(|d| TileData::new(true, d as f32, 0)),
        _ => None,
    }
}

impl PathGrid {
    /// Parses an ASCII map, one text line per row with the first line being row `j = 0`.
    /// Blank lines around the map are ignored.
    pub fn from_ascii(map: &str) -> Result<PathGrid, MapParseError> {
        let rows = map
            .lines()
            .map(str::trim_end)
            .skip_while(|l| l.is_empty())
            .collect::<Vec<_>>();
        let height = rows.iter().rposition(|l| !l.is_empty()).map_or(0, |p| p + 1);
        let rows = &rows[..height];
        let Some(first) = rows.first() else {
            return Err(MapParseError::Empty);
        };
        let width = first.chars().count();
        let config = map_extents(width, height)?;
        let mut grid = PathGrid::new(config);
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MapParseError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for (column, ch) in line.chars().enumerate() {
                let tile =
                    parse_tile(ch).ok_or(MapParseError::UnknownTile { ch, column, row })?;
                grid.set_tile(CellIndex::new(column as i32, row as i32), tile);
            }
        }
        debug!(
            "Parsed {}x{} map with {} walkable cells",
            width,
            height,
            grid.count_walkable()
        );
        Ok(grid)
    }

    /// Builds a grid by naming the tile at every cell. Cells without a tile are impassable;
    /// named tiles are classified by [TileKind::from_name].
    pub fn from_tile_names<'a, F>(config: GridConfig, mut tile_name: F) -> PathGrid
    where
        F: FnMut(CellIndex) -> Option<&'a str>,
    {
        let mut grid = PathGrid::new(config);
        let cells = grid.cells().collect::<Vec<_>>();
        for c in cells {
            let kind = tile_name(c).map_or(TileKind::Blocked, TileKind::from_name);
            grid.set_tile(c, kind.tile());
        }
        grid
    }
}

/// Terrain classes recognized in tile names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileKind {
    Grass,
    Dirt,
    Mud,
    Rock,
    Blocked,
}

impl TileKind {
    /// Case-insensitive substring match on the tile name; anything unrecognized is blocked.
    pub fn from_name(name: &str) -> TileKind {
        let name = name.to_lowercase();
        if name.contains("grass") {
            TileKind::Grass
        } else if name.contains("dirt") {
            TileKind::Dirt
        } else if name.contains("mud") {
            TileKind::Mud
        } else if name.contains("rock") {
            TileKind::Rock
        } else {
            TileKind::Blocked
        }
    }

    pub fn cost(&self) -> f32 {
        match self {
            TileKind::Grass => 0.0,
            TileKind::Dirt => 0.2,
            TileKind::Mud => 0.5,
            TileKind::Rock => 1.0,
            TileKind::Blocked => f32::INFINITY,
        }
    }

    pub fn tile(&self) -> TileData {
        TileData::new(*self != TileKind::Blocked, self.cost(), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_map() {
        let grid = PathGrid::from_ascii(
            "
S.#
.3.
T.G
",
        )
        .unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert!(!grid.is_walkable(CellIndex::new(2, 0)));
        assert!(!grid.is_walkable(CellIndex::new(0, 2)));
        assert_eq!(grid.cost(CellIndex::new(1, 1)), 3.0);
        assert_eq!(grid.count_walkable(), 7);
        assert_eq!(grid.to_string(), "..#\n.+.\n#..\n");
    }

    #[test]
    fn rejects_bad_maps() {
        assert_eq!(PathGrid::from_ascii("\n\n"), Err(MapParseError::Empty));
        assert_eq!(
            PathGrid::from_ascii("...\n..\n"),
            Err(MapParseError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            PathGrid::from_ascii("..x\n"),
            Err(MapParseError::UnknownTile {
                ch: 'x',
                column: 2,
                row: 0
            })
        );
    }

    #[test]
    fn rejects_extents_beyond_index_range() {
        let too_wide = i32::MAX as usize + 1;
        assert_eq!(
            map_extents(too_wide, 3),
            Err(MapParseError::TooLarge {
                width: too_wide,
                height: 3
            })
        );
        assert_eq!(
            map_extents(2, usize::MAX),
            Err(MapParseError::TooLarge {
                width: 2,
                height: usize::MAX
            })
        );
        assert_eq!(
            map_extents(i32::MAX as usize, 1),
            GridConfig::new(i32::MAX, 1).map_err(MapParseError::from)
        );
    }

    #[test]
    fn classifies_tile_names() {
        assert_eq!(TileKind::from_name("Grass_01"), TileKind::Grass);
        assert_eq!(TileKind::from_name("iso-dirt-path"), TileKind::Dirt);
        assert_eq!(TileKind::from_name("MUD"), TileKind::Mud);
        assert_eq!(TileKind::from_name("rock_small"), TileKind::Rock);
        assert_eq!(TileKind::from_name("water"), TileKind::Blocked);
        assert!(!TileKind::Blocked.tile().is_passable());
        assert_eq!(TileKind::Mud.tile().cost, 0.5);
    }

    #[test]
    fn builds_from_tile_names() {
        let names = [["grass", "dirt"], ["water", "grass"]];
        let config = GridConfig::new(2, 2).unwrap();
        let grid = PathGrid::from_tile_names(config, |c| {
            (c != CellIndex::new(1, 1)).then(|| names[c.j as usize][c.i as usize])
        });
        assert!(grid.is_passable(CellIndex::new(0, 0)));
        assert_eq!(grid.cost(CellIndex::new(1, 0)), 0.2);
        assert!(!grid.is_walkable(CellIndex::new(0, 1)));
        assert!(!grid.is_passable(CellIndex::new(1, 1)));
    }
}
