use thiserror::Error;

use crate::types::Tile;

/// Rejected game configuration
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Grid must have at least one row and one column, got {axis_y}x{axis_x}")]
    EmptyGrid { axis_y: u8, axis_x: u8 },
    #[error("Win threshold {0} is not a power of two of at least 4")]
    InvalidWinCount(Tile),
    #[error("Cannot spawn {requested} initial tiles on a grid of {cells} cells")]
    TooManyInitialTiles { requested: usize, cells: usize },
}

/// Rejected grid layout
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid has no rows or no columns")]
    Empty,
    #[error("Grid is larger than {max}x{max}", max = u8::MAX)]
    TooLarge,
    #[error("Row {row} has {len} cells, expected {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },
    #[error("Value {value} at row {row}, column {col} is not a power of two of at least 2")]
    InvalidTile { row: usize, col: usize, value: Tile },
}

pub type Result<T, E = GridError> = core::result::Result<T, E>;
