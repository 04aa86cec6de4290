//! Status module - win/loss classification by full rescan
//!
//! Win is checked first: a grid holding the threshold tile is won even if it is
//! also full and stuck. Loss requires every square to be occupied and no tile to
//! have an equal orthogonal neighbour. On a full grid a move can only change
//! anything by merging, and a merge needs an adjacent equal pair, so this rule
//! matches "no direction changes the grid" exactly.

use crate::grid::Grid;
use crate::moves::merged_value;
use crate::types::{GameStatus, Position, Tile, MIN_TILE, WIN_COUNT};

/// Classify a grid against the default win threshold.
pub fn classify_status(grid: &Grid) -> GameStatus {
    classify_status_with(grid, WIN_COUNT)
}

/// Classify a grid against a custom win threshold.
///
/// # Examples
///
/// ```
/// use tui_2048_core::{classify_status_with, Grid};
/// use tui_2048_core::types::GameStatus;
///
/// let grid = Grid::from_values(&[[2, 4], [4, 2]]).unwrap();
/// assert_eq!(classify_status_with(&grid, 2048), GameStatus::Loss);
/// assert_eq!(classify_status_with(&grid, 4), GameStatus::Win);
/// ```
pub fn classify_status_with(grid: &Grid, win_count: Tile) -> GameStatus {
    let mut stuck = 0usize;

    for (pos, square) in grid.iter() {
        let Some(value) = square else {
            continue;
        };
        if value == win_count {
            return GameStatus::Win;
        }
        if !has_equal_neighbor(grid, pos) {
            stuck += 1;
        }
    }

    if stuck == grid.cell_count() {
        GameStatus::Loss
    } else {
        GameStatus::Normal
    }
}

/// Check if the tile at `pos` has an orthogonal neighbour it can merge with.
///
/// Empty squares and out-of-grid positions never match, and neither do tiles
/// too large to double.
pub fn has_equal_neighbor(grid: &Grid, pos: Position) -> bool {
    let Some(value) = grid.value(pos) else {
        return false;
    };
    if merged_value(value).is_none() {
        return false;
    }
    grid.neighbors(pos)
        .iter()
        .any(|&neighbor| grid.value(neighbor) == Some(value))
}

/// Highest tile on the grid, never below 2.
pub fn max_tile(grid: &Grid) -> Tile {
    grid.cells()
        .iter()
        .flatten()
        .copied()
        .fold(MIN_TILE, Tile::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_neighbor_detection() {
        let grid = Grid::from_values(&[[2, 2, 4], [8, 16, 4]]).unwrap();
        assert!(has_equal_neighbor(&grid, Position::new(0, 0)));
        assert!(has_equal_neighbor(&grid, Position::new(0, 1)));
        assert!(has_equal_neighbor(&grid, Position::new(1, 2)));
        assert!(!has_equal_neighbor(&grid, Position::new(1, 0)));
        assert!(!has_equal_neighbor(&grid, Position::new(1, 1)));
    }

    #[test]
    fn empty_square_has_no_equal_neighbor() {
        let grid = Grid::from_values(&[[0, 0]]).unwrap();
        assert!(!has_equal_neighbor(&grid, Position::new(0, 0)));
    }

    #[test]
    fn diagonal_does_not_count() {
        let grid = Grid::from_values(&[[2, 4], [4, 2]]).unwrap();
        assert!(!has_equal_neighbor(&grid, Position::new(0, 0)));
    }

    #[test]
    fn largest_tiles_cannot_pair() {
        let top = 1 << 31;
        let grid = Grid::from_values(&[[top, top]]).unwrap();
        assert!(!has_equal_neighbor(&grid, Position::new(0, 0)));
        assert_eq!(classify_status_with(&grid, 2048), GameStatus::Loss);
    }

    #[test]
    fn max_tile_floor() {
        assert_eq!(max_tile(&Grid::new(4, 4)), 2);
        let grid = Grid::from_values(&[[0, 64], [8, 0]]).unwrap();
        assert_eq!(max_tile(&grid), 64);
    }
}
