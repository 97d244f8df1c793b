//! Grid module - the tile map the actors move on
//!
//! The grid is a rectangular `rows x cols` map stored as a flat, row-major
//! vector. Its dimensions are fixed once loaded; the only mutation is eating a
//! dot, which turns the cell into open floor.
//! Coordinates: (row, col) where row 0 is the first line of the map file.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::warn;

use crate::types::{Position, Tile, GHOST_CHAR, PLAYER_CHAR};

/// Errors produced while reading a map.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("failed to read map file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("map is empty")]
    Empty,
    #[error("map has no player spawn marker 'P'")]
    NoPlayer,
    #[error("map row {row} is {found} cells wide, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// The tile grid plus its remaining-dot counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of tiles, row-major order (row * cols + col)
    cells: Vec<Tile>,
    dots: usize,
}

impl Grid {
    /// Build a grid from map lines, ignoring spawn markers.
    ///
    /// Use [`Level::parse`] to also collect actor origins.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, MapError> {
        let rows = lines.len();
        if rows == 0 {
            return Err(MapError::Empty);
        }
        let cols = lines[0].as_ref().chars().count();
        if cols == 0 {
            return Err(MapError::Empty);
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (row, line) in lines.iter().enumerate() {
            let start = cells.len();
            cells.extend(line.as_ref().chars().map(Tile::from_char));
            let found = cells.len() - start;
            if found != cols {
                return Err(MapError::Ragged {
                    row,
                    expected: cols,
                    found,
                });
            }
        }

        let dots = cells.iter().filter(|t| **t == Tile::Dot).count();
        Ok(Self {
            rows,
            cols,
            cells,
            dots,
        })
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Tile at (row, col), or None when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    pub fn tile(&self, pos: Position) -> Option<Tile> {
        self.get(pos.row, pos.col)
    }

    /// Out-of-bounds cells are not walls.
    pub fn is_wall(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Tile::Wall))
    }

    pub fn is_dot(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Tile::Dot))
    }

    /// Eat the dot at (row, col).
    ///
    /// Returns false, and changes nothing, unless the cell currently holds a dot.
    pub fn consume_dot(&mut self, row: usize, col: usize) -> bool {
        match self.index(row, col) {
            Some(idx) if self.cells[idx] == Tile::Dot => {
                self.cells[idx] = Tile::Empty;
                self.dots -= 1;
                true
            }
            _ => false,
        }
    }

    /// Number of dots still on the grid
    pub fn dots_remaining(&self) -> usize {
        self.dots
    }

    /// One row of tiles, or None past the last row
    pub fn row(&self, row: usize) -> Option<&[Tile]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }
}

/// A parsed map: the grid plus every actor's origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub grid: Grid,
    pub player: Position,
    pub ghosts: Vec<Position>,
}

impl Level {
    /// Parse map text, one grid row per line.
    ///
    /// `#` is a wall, `.` a dot, `P` the player spawn, `G` a ghost spawn;
    /// anything else is open floor. Trailing blank lines are ignored. With
    /// several `P` markers the last one in reading order is used.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let mut lines: Vec<&str> = text.lines().collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }

        let grid = Grid::from_lines(&lines)?;

        let mut player = None;
        let mut ghosts = Vec::new();
        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    PLAYER_CHAR => {
                        if let Some(prev) = player.replace(Position::new(row, col)) {
                            warn!(?prev, row, col, "duplicate player marker, using the later one");
                        }
                    }
                    GHOST_CHAR => ghosts.push(Position::new(row, col)),
                    _ => {}
                }
            }
        }

        let player = player.ok_or(MapError::NoPlayer)?;
        Ok(Self {
            grid,
            player,
            ghosts,
        })
    }

    /// Read and parse a map file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAZE: &str = "#####\n#P.G#\n#. .#\n#####\n";

    #[test]
    fn test_level_parse_markers() {
        let level = Level::parse(MAZE).unwrap();
        assert_eq!(level.grid.rows(), 4);
        assert_eq!(level.grid.cols(), 5);
        assert_eq!(level.player, Position::new(1, 1));
        assert_eq!(level.ghosts, vec![Position::new(1, 3)]);
        assert_eq!(level.grid.dots_remaining(), 3);

        // Spawn cells are open floor.
        assert_eq!(level.grid.get(1, 1), Some(Tile::Empty));
        assert_eq!(level.grid.get(1, 3), Some(Tile::Empty));
    }

    #[test]
    fn test_grid_index_calculation() {
        let level = Level::parse(MAZE).unwrap();
        let grid = &level.grid;
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(1, 0), Some(5));
        assert_eq!(grid.index(3, 4), Some(19));
        assert_eq!(grid.index(4, 0), None);
        assert_eq!(grid.index(0, 5), None);
    }

    #[test]
    fn test_out_of_bounds_is_not_wall() {
        let level = Level::parse(MAZE).unwrap();
        assert!(!level.grid.is_wall(10, 10));
        assert!(!level.grid.is_dot(10, 10));
        assert_eq!(level.grid.get(10, 10), None);
    }

    #[test]
    fn test_row_out_of_bounds_is_none() {
        let grid = Level::parse(MAZE).unwrap().grid;
        assert_eq!(
            grid.row(2),
            Some(&[Tile::Wall, Tile::Dot, Tile::Empty, Tile::Dot, Tile::Wall][..])
        );
        assert_eq!(grid.row(3).map(<[Tile]>::len), Some(5));
        assert_eq!(grid.row(4), None);
        assert_eq!(grid.row(usize::MAX), None);
    }

    #[test]
    fn test_consume_dot_exactly_once() {
        let mut grid = Level::parse(MAZE).unwrap().grid;
        assert!(grid.is_dot(1, 2));
        assert!(grid.consume_dot(1, 2));
        assert_eq!(grid.dots_remaining(), 2);
        assert!(!grid.is_dot(1, 2));

        assert!(!grid.consume_dot(1, 2));
        assert_eq!(grid.dots_remaining(), 2);
        assert_eq!(grid.get(1, 2), Some(Tile::Empty));
    }

    #[test]
    fn test_consume_non_dot_is_noop() {
        let mut grid = Level::parse(MAZE).unwrap().grid;
        let before = grid.clone();
        assert!(!grid.consume_dot(0, 0));
        assert!(!grid.consume_dot(2, 2));
        assert!(!grid.consume_dot(99, 99));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_last_player_marker_wins() {
        let level = Level::parse("P.P\n...").unwrap();
        assert_eq!(level.player, Position::new(0, 2));
    }

    #[test]
    fn test_ragged_map_rejected() {
        let err = Level::parse("P..\n..\n").unwrap_err();
        assert!(matches!(
            err,
            MapError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_missing_player_rejected() {
        assert!(matches!(Level::parse("...\n.G."), Err(MapError::NoPlayer)));
        assert!(matches!(Level::parse(""), Err(MapError::Empty)));
        assert!(matches!(Level::parse("\n\n"), Err(MapError::Empty)));
    }

    #[test]
    fn test_crlf_lines() {
        let level = Level::parse("#P#\r\n#.#\r\n").unwrap();
        assert_eq!(level.grid.cols(), 3);
        assert_eq!(level.grid.dots_remaining(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Level::load(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, MapError::Io { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maze.txt");
        std::fs::write(&path, MAZE).unwrap();
        let level = Level::load(&path).unwrap();
        assert_eq!(level.grid.rows(), 4);
    }
}
