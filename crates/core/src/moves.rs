//! Move module - the slide/merge transition
//!
//! A move slides every tile toward one edge of the grid. Squares are visited
//! starting from the line nearest that edge, so a tile already resting against
//! the edge is settled before the tiles behind it try to slide into it.
//!
//! Each tile advances one square at a time:
//! - off the grid: settled
//! - empty square: move there and keep going
//! - equal tile: merge into it (value doubles, score grows by the new value)
//!   and stop, so a single tile never merges twice in one move
//! - different tile, or an equal one whose double does not fit a `Tile`: settled
//!
//! The transition does not report whether anything changed. Callers that need to
//! know (e.g. to skip spawning after a null move) compare the grids.

use crate::grid::Grid;
use crate::types::{Direction, Position, Tile};

/// Grid and score after a move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub grid: Grid,
    pub score: u32,
}

/// Result of advancing a tile by one square
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Advance {
    Moved,
    Merged(Tile),
    Blocked,
}

/// Slide and merge every tile of `grid` toward `direction`.
///
/// Takes the grid by value; keep a clone if the previous grid is still needed.
///
/// # Examples
///
/// ```
/// use tui_2048_core::{apply_move, Grid};
/// use tui_2048_core::types::Direction;
///
/// let grid = Grid::from_values(&[[2, 2, 0, 0]]).unwrap();
/// let next = apply_move(Direction::Left, grid, 0);
/// assert_eq!(next.grid, Grid::from_values(&[[4, 0, 0, 0]]).unwrap());
/// assert_eq!(next.score, 4);
/// ```
pub fn apply_move(direction: Direction, mut grid: Grid, score: u32) -> Transition {
    let mut score = score;

    for origin in traversal_order(&grid, direction) {
        if grid.value(origin).is_none() {
            continue;
        }

        let mut current = origin;
        while let Some(next) = grid.step(current, direction) {
            match advance(&mut grid, current, next) {
                Advance::Moved => current = next,
                Advance::Merged(value) => {
                    score = score.saturating_add(value);
                    break;
                }
                Advance::Blocked => break,
            }
        }
    }

    Transition { grid, score }
}

/// Visit order for a move: lines nearest the target edge first
fn traversal_order(grid: &Grid, direction: Direction) -> Vec<Position> {
    let rows = grid.axis_y();
    let cols = grid.axis_x();
    let mut order = Vec::with_capacity(grid.cell_count());

    match direction {
        Direction::Up => {
            for row in 0..rows {
                order.extend((0..cols).map(|col| Position::new(row, col)));
            }
        }
        Direction::Down => {
            for row in (0..rows).rev() {
                order.extend((0..cols).map(|col| Position::new(row, col)));
            }
        }
        Direction::Left => {
            for col in 0..cols {
                order.extend((0..rows).map(|row| Position::new(row, col)));
            }
        }
        Direction::Right => {
            for col in (0..cols).rev() {
                order.extend((0..rows).map(|row| Position::new(row, col)));
            }
        }
    }

    order
}

/// Try to move the tile at `from` into the adjacent square `to`
fn advance(grid: &mut Grid, from: Position, to: Position) -> Advance {
    let (Some(value), Some(target)) = (grid.value(from), grid.get(to)) else {
        return Advance::Blocked;
    };

    match target {
        None => {
            grid.set(to, Some(value));
            grid.set(from, None);
            Advance::Moved
        }
        Some(other) if other == value => match merged_value(value) {
            Some(merged) => {
                grid.set(to, Some(merged));
                grid.set(from, None);
                Advance::Merged(merged)
            }
            None => Advance::Blocked,
        },
        Some(_) => Advance::Blocked,
    }
}

/// Value of two merged `value` tiles; None once doubling would overflow.
pub(crate) fn merged_value(value: Tile) -> Option<Tile> {
    value.checked_mul(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: [Tile; 4]) -> Grid {
        Grid::from_values(&[values]).unwrap()
    }

    #[test]
    fn traversal_starts_at_target_edge() {
        let grid = Grid::new(2, 3);
        let up = traversal_order(&grid, Direction::Up);
        let down = traversal_order(&grid, Direction::Down);
        let left = traversal_order(&grid, Direction::Left);
        let right = traversal_order(&grid, Direction::Right);

        assert_eq!(up.len(), 6);
        assert_eq!(up[0].row, 0);
        assert_eq!(down[0].row, 1);
        assert_eq!(left[0].col, 0);
        assert_eq!(right[0].col, 2);
    }

    #[test]
    fn advance_into_empty_moves() {
        let mut grid = row([0, 2, 0, 0]);
        let result = advance(&mut grid, Position::new(0, 1), Position::new(0, 0));
        assert_eq!(result, Advance::Moved);
        assert_eq!(grid, row([2, 0, 0, 0]));
    }

    #[test]
    fn advance_into_equal_merges() {
        let mut grid = row([8, 8, 0, 0]);
        let result = advance(&mut grid, Position::new(0, 1), Position::new(0, 0));
        assert_eq!(result, Advance::Merged(16));
        assert_eq!(grid, row([16, 0, 0, 0]));
    }

    #[test]
    fn advance_into_different_is_blocked() {
        let mut grid = row([4, 8, 0, 0]);
        let result = advance(&mut grid, Position::new(0, 1), Position::new(0, 0));
        assert_eq!(result, Advance::Blocked);
        assert_eq!(grid, row([4, 8, 0, 0]));
    }

    #[test]
    fn largest_tiles_do_not_merge() {
        let top = 1 << 31;
        assert_eq!(merged_value(1 << 30), Some(top));
        assert_eq!(merged_value(top), None);

        let mut grid = row([top, top, 0, 0]);
        let result = advance(&mut grid, Position::new(0, 1), Position::new(0, 0));
        assert_eq!(result, Advance::Blocked);
        assert_eq!(grid, row([top, top, 0, 0]));
    }

    #[test]
    fn merged_tile_does_not_keep_sliding() {
        // The 2 merges into the 2 at column 2 and stops there, even though
        // columns 0 and 1 are empty afterwards.
        let grid = row([2, 0, 2, 4]);
        let next = apply_move(Direction::Right, grid, 0);
        assert_eq!(next.grid, row([0, 0, 4, 4]));
        assert_eq!(next.score, 4);
    }
}
