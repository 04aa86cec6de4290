//! Move tests - slide/merge transition

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tui_2048::core::{apply_move, Grid};
use tui_2048::types::{Direction, Tile};

fn grid<R: AsRef<[Tile]>>(rows: &[R]) -> Grid {
    Grid::from_values(rows).unwrap()
}

fn random_grid(rng: &mut StdRng, axis_y: usize, axis_x: usize, fill: f64) -> Grid {
    let rows: Vec<Vec<Tile>> = (0..axis_y)
        .map(|_| {
            (0..axis_x)
                .map(|_| {
                    if rng.gen_bool(fill) {
                        1u32 << rng.gen_range(1..=6u32)
                    } else {
                        0
                    }
                })
                .collect()
        })
        .collect();
    Grid::from_values(&rows).unwrap()
}

#[test]
fn test_single_tile_in_corner_stays() {
    let start = grid(&[[2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
    let next = apply_move(Direction::Left, start.clone(), 10);
    assert_eq!(next.grid, start);
    assert_eq!(next.score, 10);
}

#[test]
fn test_pair_merges_left() {
    let next = apply_move(Direction::Left, grid(&[[2, 2, 0, 0]]), 0);
    assert_eq!(next.grid, grid(&[[4, 0, 0, 0]]));
    assert_eq!(next.score, 4);
}

#[test]
fn test_merge_stops_next_to_blocker() {
    let next = apply_move(Direction::Right, grid(&[[2, 0, 2, 4]]), 0);
    assert_eq!(next.grid, grid(&[[0, 0, 4, 4]]));
    assert_eq!(next.score, 4);
}

#[test]
fn test_slide_without_merge() {
    let next = apply_move(Direction::Right, grid(&[[2, 0, 4, 0]]), 0);
    assert_eq!(next.grid, grid(&[[0, 0, 2, 4]]));
    assert_eq!(next.score, 0);
}

#[test]
fn test_different_values_do_not_merge() {
    let next = apply_move(Direction::Left, grid(&[[0, 2, 0, 4]]), 0);
    assert_eq!(next.grid, grid(&[[2, 4, 0, 0]]));
    assert_eq!(next.score, 0);
}

#[test]
fn test_four_equal_tiles_make_two_pairs() {
    let next = apply_move(Direction::Left, grid(&[[2, 2, 2, 2]]), 0);
    assert_eq!(next.grid, grid(&[[4, 4, 0, 0]]));
    assert_eq!(next.score, 8);
}

#[test]
fn test_three_equal_tiles_merge_nearest_pair() {
    let next = apply_move(Direction::Right, grid(&[[0, 2, 2, 2]]), 0);
    assert_eq!(next.grid, grid(&[[0, 0, 2, 4]]));
    assert_eq!(next.score, 4);
}

#[test]
fn test_merged_tile_can_receive_a_later_equal_tile() {
    // The pair merges into a 4; the 4 behind it then slides up and merges with
    // that result. Each tile merges at most once, the destination may be reused.
    let next = apply_move(Direction::Left, grid(&[[2, 2, 4, 0]]), 0);
    assert_eq!(next.grid, grid(&[[8, 0, 0, 0]]));
    assert_eq!(next.score, 12);
}

#[test]
fn test_vertical_moves() {
    let start = grid(&[[2, 0], [0, 4], [2, 4]]);

    let up = apply_move(Direction::Up, start.clone(), 0);
    assert_eq!(up.grid, grid(&[[4, 8], [0, 0], [0, 0]]));
    assert_eq!(up.score, 12);

    let down = apply_move(Direction::Down, start, 0);
    assert_eq!(down.grid, grid(&[[0, 0], [0, 0], [4, 8]]));
    assert_eq!(down.score, 12);
}

#[test]
fn test_rows_move_independently() {
    let start = grid(&[[2, 2, 0, 0], [0, 0, 0, 8], [4, 0, 4, 2]]);
    let next = apply_move(Direction::Left, start, 0);
    assert_eq!(next.grid, grid(&[[4, 0, 0, 0], [8, 0, 0, 0], [8, 2, 0, 0]]));
    assert_eq!(next.score, 12);
}

#[test]
fn test_score_accumulates_from_previous_value() {
    let next = apply_move(Direction::Up, grid(&[[16], [16]]), 100);
    assert_eq!(next.grid, grid(&[[32], [0]]));
    assert_eq!(next.score, 132);
}

#[test]
fn test_largest_tiles_stay_apart() {
    // Doubling 2^31 does not fit a tile, so the pair is treated as blocked.
    let top: Tile = 1 << 31;
    let start = grid(&[[top, top, 0, 2]]);
    let next = apply_move(Direction::Left, start, 0);
    assert_eq!(next.grid, grid(&[[top, top, 2, 0]]));
    assert_eq!(next.score, 0);
    for value in next.grid.cells().iter().flatten() {
        assert!(value.is_power_of_two() && *value >= 2);
    }

    // One step below the limit still merges.
    let half: Tile = 1 << 30;
    let next = apply_move(Direction::Right, grid(&[[half, half]]), 0);
    assert_eq!(next.grid, grid(&[[0, top]]));
    assert_eq!(next.score, top);
}

#[test]
fn test_full_grid_without_pairs_does_not_change() {
    let start = grid(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    for dir in Direction::ALL {
        let next = apply_move(dir, start.clone(), 0);
        assert_eq!(next.grid, start, "direction {:?}", dir);
        assert_eq!(next.score, 0);
    }
}

#[test]
fn test_merges_account_for_tile_count_and_score() {
    let mut rng = StdRng::seed_from_u64(2048);
    for _ in 0..500 {
        let start = random_grid(&mut rng, 4, 4, 0.6);
        for dir in Direction::ALL {
            let next = apply_move(dir, start.clone(), 0);
            let merges = start.tile_count() - next.grid.tile_count();

            // Merging preserves the total face value.
            assert_eq!(next.grid.tile_sum(), start.tile_sum());
            // Every merge produces at least a 4, and only merges score.
            assert!(next.score >= 4 * merges as u32);
            assert_eq!(next.score == 0, merges == 0);
        }
    }
}

#[test]
fn test_tiles_stay_powers_of_two() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let start = random_grid(&mut rng, 5, 3, 0.8);
        for dir in Direction::ALL {
            let next = apply_move(dir, start.clone(), 0);
            for value in next.grid.cells().iter().flatten() {
                assert!(*value >= 2 && value.is_power_of_two());
            }
        }
    }
}

#[test]
fn test_unchanged_grid_stays_unchanged() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..300 {
        let start = random_grid(&mut rng, 4, 4, 0.7);
        for dir in Direction::ALL {
            let first = apply_move(dir, start.clone(), 0);
            if first.grid != start {
                continue;
            }
            let second = apply_move(dir, first.grid.clone(), first.score);
            assert_eq!(second.grid, start);
            assert_eq!(second.score, 0);
        }
    }
}

#[test]
fn test_tiles_end_packed_against_target_edge() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..300 {
        let start = random_grid(&mut rng, 4, 4, 0.5);
        let next = apply_move(Direction::Left, start, 0).grid;
        // After a Left move no tile has an empty square on its left.
        for row in next.rows() {
            let first_empty = row.iter().position(|s| s.is_none()).unwrap_or(row.len());
            assert!(row[first_empty..].iter().all(|s| s.is_none()), "{}", next);
        }
    }
}
