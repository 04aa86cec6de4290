//! Grid module - manages the tile matrix
//!
//! The grid is an `axis_y` x `axis_x` matrix where each square is empty or holds a
//! power-of-two tile. Uses a flat vector in row-major order (`row * axis_x + col`).
//! Dimensions are fixed at construction and never change for the life of the grid.

use std::fmt;

use arrayvec::ArrayVec;

use crate::error::{GridError, Result};
use crate::spawn::Placement;
use crate::types::{Direction, Position, Square, Tile, MIN_TILE};

/// A square is empty iff it holds no tile.
#[inline(always)]
pub fn is_empty(square: Square) -> bool {
    square.is_none()
}

/// The game grid - fixed rows x columns using flat vector storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    axis_y: u8,
    axis_x: u8,
    /// Flat array of squares, row-major order
    cells: Vec<Square>,
}

impl Grid {
    /// Create a grid of the given dimensions with every square empty
    pub fn new(axis_y: u8, axis_x: u8) -> Self {
        Self {
            axis_y,
            axis_x,
            cells: vec![None; axis_y as usize * axis_x as usize],
        }
    }

    /// Build a grid from rows of squares.
    ///
    /// Rows must be non-empty, equally long, and every tile a power of two of at
    /// least 2.
    pub fn from_rows(rows: Vec<Vec<Square>>) -> Result<Self> {
        let expected = rows.first().map(Vec::len).unwrap_or(0);
        if expected == 0 {
            return Err(GridError::Empty);
        }
        if rows.len() > u8::MAX as usize || expected > u8::MAX as usize {
            return Err(GridError::TooLarge);
        }

        let mut cells = Vec::with_capacity(rows.len() * expected);
        for (row, squares) in rows.iter().enumerate() {
            if squares.len() != expected {
                return Err(GridError::RaggedRow {
                    row,
                    len: squares.len(),
                    expected,
                });
            }
            for (col, square) in squares.iter().enumerate() {
                if let Some(value) = *square {
                    if value < MIN_TILE || !value.is_power_of_two() {
                        return Err(GridError::InvalidTile { row, col, value });
                    }
                }
                cells.push(*square);
            }
        }

        Ok(Self {
            axis_y: rows.len() as u8,
            axis_x: expected as u8,
            cells,
        })
    }

    /// Build a grid from rows of raw values where `0` marks an empty square.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_core::Grid;
    ///
    /// let grid = Grid::from_values(&[[2, 0], [0, 4]]).unwrap();
    /// assert_eq!(grid.tile_count(), 2);
    /// ```
    pub fn from_values<R: AsRef<[Tile]>>(rows: &[R]) -> Result<Self> {
        let rows: Vec<Vec<Square>> = rows
            .iter()
            .map(|row| {
                row.as_ref()
                    .iter()
                    .map(|&value| if value == 0 { None } else { Some(value) })
                    .collect()
            })
            .collect();
        Self::from_rows(rows)
    }

    /// Calculate flat index from signed (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: i16, col: i16) -> Option<usize> {
        if row < 0 || row >= self.axis_y as i16 || col < 0 || col >= self.axis_x as i16 {
            return None;
        }
        Some(row as usize * self.axis_x as usize + col as usize)
    }

    #[inline(always)]
    fn pos_index(&self, pos: Position) -> Option<usize> {
        self.index(pos.row as i16, pos.col as i16)
    }

    /// Number of rows
    pub fn axis_y(&self) -> u8 {
        self.axis_y
    }

    /// Number of columns
    pub fn axis_x(&self) -> u8 {
        self.axis_x
    }

    /// Total number of squares
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Bounds-checked position constructor
    pub fn position(&self, row: u8, col: u8) -> Option<Position> {
        let pos = Position::new(row, col);
        self.contains(pos).then_some(pos)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.pos_index(pos).is_some()
    }

    /// Get square at position.
    /// Returns None if out of bounds
    pub fn get(&self, pos: Position) -> Option<Square> {
        self.pos_index(pos).map(|idx| self.cells[idx])
    }

    /// Tile value at position, None if empty or out of bounds
    pub fn value(&self, pos: Position) -> Option<Tile> {
        self.get(pos).flatten()
    }

    /// Set square at position.
    /// Returns false if out of bounds
    pub fn set(&mut self, pos: Position, square: Square) -> bool {
        match self.pos_index(pos) {
            Some(idx) => {
                self.cells[idx] = square;
                true
            }
            None => false,
        }
    }

    /// Position one step away in `dir`, if it is still on the grid
    pub fn step(&self, pos: Position, dir: Direction) -> Option<Position> {
        let (dr, dc) = dir.delta();
        let row = pos.row as i16 + dr as i16;
        let col = pos.col as i16 + dc as i16;
        self.index(row, col)?;
        Some(Position::new(row as u8, col as u8))
    }

    /// Orthogonal neighbours that lie on the grid
    pub fn neighbors(&self, pos: Position) -> ArrayVec<Position, 4> {
        Direction::ALL
            .iter()
            .filter_map(|&dir| self.step(pos, dir))
            .collect()
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.axis_y)
            .flat_map(move |row| (0..self.axis_x).map(move |col| Position::new(row, col)))
    }

    /// All (position, square) pairs in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Position, Square)> + '_ {
        self.positions().zip(self.cells.iter().copied())
    }

    /// Positions with no tile, in row-major order
    pub fn empty_positions(&self) -> Vec<Position> {
        self.iter()
            .filter(|&(_, square)| is_empty(square))
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Number of occupied squares
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|square| square.is_some()).count()
    }

    /// Sum of all tile values
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().flatten().map(|&v| v as u64).sum()
    }

    /// Check if every square holds a tile
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|square| square.is_some())
    }

    /// Get a reference to the internal squares
    pub fn cells(&self) -> &[Square] {
        &self.cells
    }

    /// One row of squares, None if out of bounds
    pub fn row(&self, row: u8) -> Option<&[Square]> {
        if row >= self.axis_y {
            return None;
        }
        let start = row as usize * self.axis_x as usize;
        Some(&self.cells[start..start + self.axis_x as usize])
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> + '_ {
        self.cells.chunks(self.axis_x.max(1) as usize)
    }

    /// Convert to a 2D vector (testing/display)
    pub fn to_rows(&self) -> Vec<Vec<Square>> {
        self.rows().map(<[Square]>::to_vec).collect()
    }

    /// Write spawned tiles into the grid.
    ///
    /// Placements outside the grid are skipped.
    pub fn apply_placements(&mut self, placements: &[Placement]) {
        for placement in placements {
            self.set(placement.position, Some(placement.value));
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_AXIS_Y, crate::types::DEFAULT_AXIS_X)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (i, square) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                match square {
                    Some(v) => write!(f, "{v:>5}")?,
                    None => write!(f, "{:>5}", ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
