//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The classic 2048 playfield:
//!
//! - **Rows** (`axis_y`): 4 (indexed 0-3, top to bottom)
//! - **Columns** (`axis_x`): 4 (indexed 0-3, left to right)
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_AXIS_Y` | 4 | Default number of rows |
//! | `DEFAULT_AXIS_X` | 4 | Default number of columns |
//! | `WIN_COUNT` | 2048 | Tile value that wins the game |
//! | `INITIAL_TILES` | 2 | Tiles spawned when a game starts |
//! | `TILES_PER_MOVE` | 1 | Tiles spawned after a move that changed the grid |
//! | `SPAWN_VALUES` | 2, 4 | Values a spawned tile can take |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, GameStatus, WIN_COUNT};
//!
//! // A swipe left moves tiles one column toward column 0
//! assert_eq!(Direction::Left.delta(), (0, -1));
//!
//! // Actions wrap directions
//! let action = GameAction::Move(Direction::Up);
//! assert_eq!(action.as_str(), "up");
//!
//! assert!(GameStatus::Win.is_terminal());
//! assert_eq!(WIN_COUNT, 2048);
//! ```

/// Default number of grid rows
pub const DEFAULT_AXIS_Y: u8 = 4;

/// Default number of grid columns
pub const DEFAULT_AXIS_X: u8 = 4;

/// Tile value that ends the game with a win
pub const WIN_COUNT: Tile = 2048;

/// Number of tiles spawned on an empty grid when a game starts
pub const INITIAL_TILES: usize = 2;

/// Number of tiles spawned after every move that changed the grid
pub const TILES_PER_MOVE: usize = 1;

/// Values a freshly spawned tile can take (equal probability)
pub const SPAWN_VALUES: [Tile; 2] = [2, 4];

/// Smallest value a tile can hold
pub const MIN_TILE: Tile = 2;

/// Tile value (always a power of two, at least 2)
pub type Tile = u32;

/// A grid cell (None = empty, Some = tile value)
pub type Square = Option<Tile>;

/// Swipe direction
///
/// Every tile slides toward the edge named by the direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Row/column step of one cell in this direction as `(d_row, d_col)`
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Outcome classification of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    /// Game continues
    #[default]
    Normal,
    /// A tile reached the win threshold
    Win,
    /// Grid is full and no two orthogonal neighbours are equal
    Loss,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Normal => "normal",
            GameStatus::Win => "win",
            GameStatus::Loss => "loss",
        }
    }

    /// Win or Loss
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Normal)
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Move(Direction),
    Restart,
}

impl GameAction {
    /// Lowercase name, as logged
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(dir) => dir.as_str(),
            GameAction::Restart => "restart",
        }
    }
}

/// A cell coordinate: `row` counts down from the top, `col` right from the left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}
