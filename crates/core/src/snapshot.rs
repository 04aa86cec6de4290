use crate::grid::Grid;
use crate::types::{GameStatus, Position, Tile, MIN_TILE, WIN_COUNT};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub score: u32,
    pub status: GameStatus,
    pub max_tile: Tile,
    pub moves: u32,
    pub episode_id: u32,
    pub seed: u32,
    pub win_count: Tile,
    /// Squares filled by the most recent spawn
    pub last_spawn: Vec<Position>,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: Grid::default(),
            score: 0,
            status: GameStatus::Normal,
            max_tile: MIN_TILE,
            moves: 0,
            episode_id: 0,
            seed: 0,
            win_count: WIN_COUNT,
            last_spawn: Vec::new(),
        }
    }
}
