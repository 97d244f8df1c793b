//! Motion resolution shared by the player and the ghosts.
//!
//! A move is a unit step, wrapped around the grid edges, and then rejected
//! outright if it lands on a wall. Wrapping happens first, so a wall on the
//! opposite edge blocks a wraparound move.

use crate::grid::Grid;
use crate::types::{Direction, Position};

/// Compute where an actor at `from` ends up after stepping in `dir`.
///
/// Never returns a wall cell unless `from` itself is one.
pub fn resolve(from: Position, dir: Direction, grid: &Grid) -> Position {
    let rows = grid.rows();
    let cols = grid.cols();
    if rows == 0 || cols == 0 {
        return from;
    }

    let (dr, dc) = dir.delta();
    let to = Position::new(wrap(from.row, dr, rows), wrap(from.col, dc, cols));

    if grid.is_wall(to.row, to.col) {
        from
    } else {
        to
    }
}

/// Like [`resolve`], but a missing direction stays put.
pub fn resolve_opt(from: Position, dir: Option<Direction>, grid: &Grid) -> Position {
    match dir {
        Some(dir) => resolve(from, dir, grid),
        None => from,
    }
}

#[inline]
fn wrap(value: usize, delta: i32, len: usize) -> usize {
    match delta {
        -1 if value == 0 => len - 1,
        -1 => value - 1,
        1 if value + 1 >= len => 0,
        1 => value + 1,
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Level;

    fn open(rows: usize, cols: usize) -> Grid {
        let lines: Vec<String> = (0..rows).map(|_| " ".repeat(cols)).collect();
        Grid::from_lines(&lines).unwrap()
    }

    #[test]
    fn test_wrap_helper() {
        assert_eq!(wrap(0, -1, 5), 4);
        assert_eq!(wrap(4, 1, 5), 0);
        assert_eq!(wrap(2, 1, 5), 3);
        assert_eq!(wrap(2, -1, 5), 1);
        assert_eq!(wrap(2, 0, 5), 2);
        assert_eq!(wrap(0, 1, 1), 0);
    }

    #[test]
    fn test_unit_steps_on_open_grid() {
        let grid = open(3, 3);
        let c = Position::new(1, 1);
        assert_eq!(resolve(c, Direction::Up, &grid), Position::new(0, 1));
        assert_eq!(resolve(c, Direction::Down, &grid), Position::new(2, 1));
        assert_eq!(resolve(c, Direction::Left, &grid), Position::new(1, 0));
        assert_eq!(resolve(c, Direction::Right, &grid), Position::new(1, 2));
    }

    #[test]
    fn test_wraparound_all_edges() {
        let grid = open(3, 4);
        assert_eq!(
            resolve(Position::new(1, 0), Direction::Left, &grid),
            Position::new(1, 3)
        );
        assert_eq!(
            resolve(Position::new(1, 3), Direction::Right, &grid),
            Position::new(1, 0)
        );
        assert_eq!(
            resolve(Position::new(0, 2), Direction::Up, &grid),
            Position::new(2, 2)
        );
        assert_eq!(
            resolve(Position::new(2, 2), Direction::Down, &grid),
            Position::new(0, 2)
        );
    }

    #[test]
    fn test_wall_reverts_move() {
        let grid = Level::parse("###\n#P#\n###").unwrap().grid;
        let p = Position::new(1, 1);
        for dir in Direction::ALL {
            assert_eq!(resolve(p, dir, &grid), p);
        }
    }

    #[test]
    fn test_wrapped_destination_can_be_wall() {
        // Row 1 is open except for a wall at the far right.
        let grid = Level::parse("    \nP  #\n    ").unwrap().grid;
        let p = Position::new(1, 0);
        assert_eq!(resolve(p, Direction::Left, &grid), p);
        assert_eq!(resolve(p, Direction::Right, &grid), Position::new(1, 1));
    }

    #[test]
    fn test_missing_direction_is_noop() {
        let grid = open(2, 2);
        let p = Position::new(0, 0);
        assert_eq!(resolve_opt(p, None, &grid), p);
        assert_eq!(
            resolve_opt(p, Some(Direction::Right), &grid),
            Position::new(0, 1)
        );
    }
}
