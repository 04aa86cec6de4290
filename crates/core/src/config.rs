//! Game configuration: grid dimensions, win threshold, opening tile count.

use crate::error::ConfigError;
use crate::types::{Tile, DEFAULT_AXIS_X, DEFAULT_AXIS_Y, INITIAL_TILES, WIN_COUNT};

/// Settings fixed for the lifetime of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of rows
    pub axis_y: u8,
    /// Number of columns
    pub axis_x: u8,
    /// Tile value that wins the game
    pub win_count: Tile,
    /// Tiles spawned on the empty grid at game start
    pub initial_tiles: usize,
}

impl GameConfig {
    /// Build a validated configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_core::{ConfigError, GameConfig};
    ///
    /// let config = GameConfig::new(5, 5, 4096, 2).unwrap();
    /// assert_eq!(config.total_cells(), 25);
    ///
    /// assert_eq!(
    ///     GameConfig::new(4, 4, 1000, 2),
    ///     Err(ConfigError::InvalidWinCount(1000))
    /// );
    /// ```
    pub fn new(
        axis_y: u8,
        axis_x: u8,
        win_count: Tile,
        initial_tiles: usize,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            axis_y,
            axis_x,
            win_count,
            initial_tiles,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check every field against the game's rules.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.axis_y == 0 || self.axis_x == 0 {
            return Err(ConfigError::EmptyGrid {
                axis_y: self.axis_y,
                axis_x: self.axis_x,
            });
        }
        // 2 is a spawn value, a game won at spawn is no game.
        if self.win_count < 4 || !self.win_count.is_power_of_two() {
            return Err(ConfigError::InvalidWinCount(self.win_count));
        }
        if self.initial_tiles > self.total_cells() {
            return Err(ConfigError::TooManyInitialTiles {
                requested: self.initial_tiles,
                cells: self.total_cells(),
            });
        }
        Ok(())
    }

    pub fn total_cells(&self) -> usize {
        self.axis_y as usize * self.axis_x as usize
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            axis_y: DEFAULT_AXIS_Y,
            axis_x: DEFAULT_AXIS_X,
            win_count: WIN_COUNT,
            initial_tiles: INITIAL_TILES,
        }
    }
}
