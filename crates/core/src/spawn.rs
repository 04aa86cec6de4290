//! Spawn module - random tile placement
//!
//! Empty squares are enumerated first and then sampled without replacement, so
//! spawning always terminates no matter how full the grid is. The random source
//! is passed in by the caller; use [`crate::SimpleRng`] or a seeded `StdRng` for
//! reproducible games.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::Grid;
use crate::types::{Position, Tile, SPAWN_VALUES};

/// A tile to be written into the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub position: Position,
    pub value: Tile,
}

/// Pick up to `n` distinct empty squares and a value (2 or 4) for each.
///
/// The grid is not modified; apply the result with [`Grid::apply_placements`].
/// Returns fewer than `n` placements when fewer squares are free, and none when
/// the grid is full.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use tui_2048_core::{spawn_tiles, Grid};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut grid = Grid::new(4, 4);
/// let placements = spawn_tiles(2, &grid, &mut rng);
/// grid.apply_placements(&placements);
/// assert_eq!(grid.tile_count(), 2);
/// ```
pub fn spawn_tiles<R: Rng + ?Sized>(n: usize, grid: &Grid, rng: &mut R) -> Vec<Placement> {
    let empty = grid.empty_positions();
    if empty.is_empty() || n == 0 {
        return Vec::new();
    }

    let chosen: Vec<Position> = empty.choose_multiple(rng, n).copied().collect();
    chosen
        .into_iter()
        .map(|position| Placement {
            position,
            value: random_tile_value(rng),
        })
        .collect()
}

/// 2 or 4 with equal probability
pub fn random_tile_value<R: Rng + ?Sized>(rng: &mut R) -> Tile {
    SPAWN_VALUES[rng.gen_range(0..SPAWN_VALUES.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn full_grid_spawns_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = Grid::from_values(&[[2, 4], [8, 16]]).unwrap();
        assert!(spawn_tiles(3, &grid, &mut rng).is_empty());
    }

    #[test]
    fn zero_requested_spawns_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(spawn_tiles(0, &Grid::new(4, 4), &mut rng).is_empty());
    }

    #[test]
    fn request_is_capped_by_free_squares() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = Grid::from_values(&[[2, 0], [0, 16]]).unwrap();
        let placements = spawn_tiles(10, &grid, &mut rng);
        assert_eq!(placements.len(), 2);

        let mut positions: Vec<_> = placements.iter().map(|p| p.position).collect();
        positions.sort();
        assert_eq!(positions, vec![Position::new(0, 1), Position::new(1, 0)]);
    }

    #[test]
    fn tile_values_cover_both_options() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = [false; 2];
        for _ in 0..200 {
            match random_tile_value(&mut rng) {
                2 => seen[0] = true,
                4 => seen[1] = true,
                other => panic!("unexpected spawn value {other}"),
            }
        }
        assert_eq!(seen, [true, true]);
    }
}
