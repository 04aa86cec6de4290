//! Status tests - win/loss classification and highest tile

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tui_2048::core::{apply_move, classify_status, classify_status_with, max_tile, Grid};
use tui_2048::types::{Direction, GameStatus, Tile};

fn grid<R: AsRef<[Tile]>>(rows: &[R]) -> Grid {
    Grid::from_values(rows).unwrap()
}

#[test]
fn test_empty_grid_is_normal() {
    assert_eq!(classify_status(&Grid::new(4, 4)), GameStatus::Normal);
}

#[test]
fn test_win_tile_wins() {
    let g = grid(&[[0, 0, 0, 0], [0, 2048, 0, 0], [0, 0, 0, 0], [0, 0, 0, 2]]);
    assert_eq!(classify_status(&g), GameStatus::Win);
}

#[test]
fn test_win_takes_precedence_over_loss() {
    // Full, no equal neighbours, but holds the winning tile.
    let g = grid(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2048, 4], [4, 2, 4, 2]]);
    assert_eq!(classify_status(&g), GameStatus::Win);
}

#[test]
fn test_checkerboard_is_loss() {
    let g = grid(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    assert_eq!(classify_status(&g), GameStatus::Loss);
}

#[test]
fn test_pair_too_large_to_merge_is_loss() {
    let top: Tile = 1 << 31;
    let stuck = grid(&[[top, top], [4, 2]]);
    assert_eq!(classify_status(&stuck), GameStatus::Loss);
    for dir in Direction::ALL {
        assert_eq!(apply_move(dir, stuck.clone(), 0).grid, stuck);
    }
}

#[test]
fn test_full_grid_with_one_pair_is_normal() {
    let g = grid(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 4]]);
    assert_eq!(classify_status(&g), GameStatus::Normal);
}

#[test]
fn test_vertical_pair_is_normal() {
    let g = grid(&[[2, 4, 8, 16], [32, 64, 128, 256], [512, 1024, 2, 4], [8, 16, 2, 64]]);
    assert_eq!(classify_status(&g), GameStatus::Normal);
}

#[test]
fn test_stuck_but_not_full_is_normal() {
    // No merges among occupied squares, but one square is free.
    let g = grid(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 0]]);
    assert_eq!(classify_status(&g), GameStatus::Normal);
}

#[test]
fn test_custom_threshold() {
    let g = grid(&[[2, 0], [0, 256]]);
    assert_eq!(classify_status_with(&g, 256), GameStatus::Win);
    assert_eq!(classify_status_with(&g, 512), GameStatus::Normal);
    assert_eq!(classify_status(&g), GameStatus::Normal);
}

#[test]
fn test_tile_above_threshold_is_not_a_win() {
    // Only an exact match counts.
    let g = grid(&[[4096, 0], [0, 0]]);
    assert_eq!(classify_status(&g), GameStatus::Normal);
}

#[test]
fn test_single_square_grid() {
    assert_eq!(classify_status(&grid(&[[0]])), GameStatus::Normal);
    assert_eq!(classify_status(&grid(&[[2]])), GameStatus::Loss);
}

#[test]
fn test_max_tile() {
    assert_eq!(max_tile(&Grid::new(4, 4)), 2);
    assert_eq!(max_tile(&grid(&[[4, 0], [0, 0]])), 4);
    assert_eq!(max_tile(&grid(&[[4, 512], [128, 2]])), 512);
}

/// Loss holds exactly when no direction can change a full grid.
#[test]
fn test_loss_iff_no_move_changes_the_grid() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut losses = 0;
    for _ in 0..2000 {
        let rows: Vec<Vec<Tile>> = (0..3)
            .map(|_| (0..3).map(|_| 1u32 << rng.gen_range(1..=4u32)).collect())
            .collect();
        let g = Grid::from_values(&rows).unwrap();

        let can_move = Direction::ALL
            .iter()
            .any(|&dir| apply_move(dir, g.clone(), 0).grid != g);
        let status = classify_status(&g);

        assert_eq!(status == GameStatus::Loss, !can_move, "{}", g);
        if status == GameStatus::Loss {
            losses += 1;
        }
    }
    assert!(losses > 0, "sample should contain stuck grids");
}

#[test]
fn test_partially_filled_grid_always_has_a_move() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..500 {
        let rows: Vec<Vec<Tile>> = (0..4)
            .map(|_| {
                (0..4)
                    .map(|_| {
                        if rng.gen_bool(0.8) {
                            1u32 << rng.gen_range(1..=8u32)
                        } else {
                            0
                        }
                    })
                    .collect()
            })
            .collect();
        let g = Grid::from_values(&rows).unwrap();
        if g.is_full() || g.tile_count() == 0 {
            continue;
        }

        assert_ne!(classify_status(&g), GameStatus::Loss);
        assert!(Direction::ALL
            .iter()
            .any(|&dir| apply_move(dir, g.clone(), 0).grid != g));
    }
}
