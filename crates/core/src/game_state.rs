//! Game state module - drives one session over the grid engine
//!
//! Ties together the grid, the move transition, spawning, and status
//! classification, in the order a front-end uses them: clone the grid, apply the
//! move, compare, spawn a tile only if something moved, then reclassify.

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::moves::{apply_move, Transition};
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::spawn::{spawn_tiles, Placement};
use crate::status::{classify_status_with, max_tile};
use crate::types::{Direction, GameAction, GameStatus, Tile, TILES_PER_MOVE};

/// What a single action did to the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    /// Whether any tile moved or merged
    pub moved: bool,
    /// Score gained by merges in this step
    pub gained: u32,
    /// Tiles spawned after the step
    pub spawned: Vec<Placement>,
    /// Status after the step
    pub status: GameStatus,
}

impl StepOutcome {
    fn unchanged(status: GameStatus) -> Self {
        Self {
            moved: false,
            gained: 0,
            spawned: Vec::new(),
            status,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    grid: Grid,
    score: u32,
    status: GameStatus,
    rng: SimpleRng,
    seed: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Moves that changed the grid in this episode.
    moves: u32,
    /// Tiles placed by the most recent spawn (consumed by renderers).
    last_spawn: Vec<Placement>,
    started: bool,
}

impl GameState {
    /// Create a new classic 4x4 game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::build(GameConfig::default(), seed)
    }

    /// Create a new game with a custom configuration
    pub fn with_config(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    /// Continue from an existing grid and score.
    ///
    /// The grid's dimensions become the game's dimensions; the game counts as
    /// started and its status is classified immediately.
    pub fn from_grid(
        grid: Grid,
        score: u32,
        win_count: Tile,
        seed: u32,
    ) -> Result<Self, ConfigError> {
        let config = GameConfig {
            axis_y: grid.axis_y(),
            axis_x: grid.axis_x(),
            win_count,
            initial_tiles: GameConfig::default().initial_tiles.min(grid.cell_count()),
        };
        config.validate()?;

        let mut state = Self::build(config, seed);
        state.grid = grid;
        state.score = score;
        state.started = true;
        state.status = classify_status_with(&state.grid, win_count);
        Ok(state)
    }

    fn build(config: GameConfig, seed: u32) -> Self {
        Self {
            config,
            grid: Grid::new(config.axis_y, config.axis_x),
            score: 0,
            status: GameStatus::Normal,
            rng: SimpleRng::new(seed),
            seed,
            episode_id: 0,
            moves: 0,
            last_spawn: Vec::new(),
            started: false,
        }
    }

    /// Start the game and spawn the opening tiles
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.last_spawn = self.spawn(self.config.initial_tiles);
        self.status = classify_status_with(&self.grid, self.config.win_count);
        log::debug!(
            "episode {} started with {} tiles",
            self.episode_id,
            self.last_spawn.len()
        );
    }

    /// Throw away the current episode and start a fresh one.
    ///
    /// The RNG is not reseeded, so consecutive episodes differ.
    pub fn restart(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.grid = Grid::new(self.config.axis_y, self.config.axis_x);
        self.score = 0;
        self.moves = 0;
        self.status = GameStatus::Normal;
        self.last_spawn.clear();
        self.started = false;
        self.start();
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> StepOutcome {
        match action {
            GameAction::Move(direction) => self.step(direction),
            GameAction::Restart => {
                self.restart();
                StepOutcome {
                    moved: false,
                    gained: 0,
                    spawned: self.last_spawn.clone(),
                    status: self.status,
                }
            }
        }
    }

    /// Swipe in `direction`.
    ///
    /// Ignored before `start` and once the game is won or lost. A swipe that
    /// changes nothing spawns nothing.
    pub fn step(&mut self, direction: Direction) -> StepOutcome {
        if !self.started || self.status.is_terminal() {
            return StepOutcome::unchanged(self.status);
        }

        let Transition { grid, score } = apply_move(direction, self.grid.clone(), self.score);
        if grid == self.grid {
            log::trace!("move {} changed nothing", direction.as_str());
            return StepOutcome::unchanged(self.status);
        }

        let gained = score - self.score;
        self.grid = grid;
        self.score = score;
        self.moves += 1;
        self.last_spawn = self.spawn(TILES_PER_MOVE);
        self.status = classify_status_with(&self.grid, self.config.win_count);

        log::debug!(
            "move {} #{}: +{} (score {}), status {}",
            direction.as_str(),
            self.moves,
            gained,
            self.score,
            self.status.as_str()
        );
        if self.status.is_terminal() {
            log::info!(
                "episode {} ended: {} with score {} after {} moves",
                self.episode_id,
                self.status.as_str(),
                self.score,
                self.moves
            );
        }

        StepOutcome {
            moved: true,
            gained,
            spawned: self.last_spawn.clone(),
            status: self.status,
        }
    }

    fn spawn(&mut self, n: usize) -> Vec<Placement> {
        let placements = spawn_tiles(n, &self.grid, &mut self.rng);
        if placements.len() < n {
            log::warn!(
                "requested {} tiles but only {} squares were free",
                n,
                placements.len()
            );
        }
        self.grid.apply_placements(&placements);
        placements
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn game_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn max_tile(&self) -> Tile {
        max_tile(&self.grid)
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn last_spawn(&self) -> &[Placement] {
        &self.last_spawn
    }

    /// Plain-data copy of everything a renderer needs
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid: self.grid.clone(),
            score: self.score,
            status: self.status,
            max_tile: self.max_tile(),
            moves: self.moves,
            episode_id: self.episode_id,
            seed: self.seed,
            win_count: self.config.win_count,
            last_spawn: self.last_spawn.iter().map(|p| p.position).collect(),
        }
    }
}
