//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and transition logic.
//! It has **zero dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is a plain function over a [`Grid`]
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size tile matrix with bounds-checked positions
//! - [`moves`]: the slide/merge transition for one swipe
//! - [`status`]: win/loss classification and highest tile
//! - [`spawn`]: random 2/4 tile placement on empty squares
//! - [`rng`]: seeded LCG usable as a `rand` generator
//! - [`game_state`]: one session (start, step, restart, snapshot)
//! - [`config`]: grid size, win threshold, opening tiles
//!
//! # Game Rules
//!
//! - A swipe slides every tile toward one edge until it hits the edge or another tile
//! - Two equal tiles that meet merge into one of double value; the score grows by
//!   the new value, and the merging tile stops there for this swipe
//! - After a swipe that changed the grid, one 2 or 4 (equal odds) appears on a
//!   random empty square
//! - Reaching the win tile (2048 by default) wins; a full grid without equal
//!   orthogonal neighbours loses
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::{Direction, GameAction, GameStatus};
//!
//! // Create and start a game
//! let mut game = GameState::new(12345);
//! game.start();
//! assert_eq!(game.grid().tile_count(), 2);
//!
//! // Swipe
//! game.apply_action(GameAction::Move(Direction::Left));
//! game.apply_action(GameAction::Move(Direction::Up));
//!
//! // Check game state
//! assert_eq!(game.status(), GameStatus::Normal);
//! assert!(game.max_tile() >= 2);
//! ```

pub mod config;
pub mod error;
pub mod game_state;
pub mod grid;
pub mod moves;
pub mod rng;
pub mod snapshot;
pub mod spawn;
pub mod status;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use error::{ConfigError, GridError};
pub use game_state::{GameState, StepOutcome};
pub use grid::{is_empty, Grid};
pub use moves::{apply_move, Transition};
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
pub use spawn::{random_tile_value, spawn_tiles, Placement};
pub use status::{classify_status, classify_status_with, has_equal_neighbor, max_tile};
