//! Tile palette: the display color of a square as a pure function of its value.

use crate::fb::{CellStyle, Rgb};
use crate::types::{GameStatus, Square, Tile};

/// Background of an empty square (`#ffd0ad`)
pub const EMPTY_BG: Rgb = Rgb::new(0xff, 0xd0, 0xad);

/// Gap and frame background between tiles
pub const BOARD_BG: Rgb = Rgb::new(0xbb, 0xad, 0xa0);

/// Tile text color
pub const TILE_FG: Rgb = Rgb::new(0x3c, 0x2a, 0x2a);

/// Tile backgrounds for 2, 4, 8, ... 2048
const TILE_BG: [Rgb; 11] = [
    Rgb::new(0xff, 0xe0, 0x5a),
    Rgb::new(0xff, 0xa4, 0x5b),
    Rgb::new(0xff, 0xe6, 0xae),
    Rgb::new(0xff, 0x9d, 0x8b),
    Rgb::new(0xff, 0x7a, 0x97),
    Rgb::new(0xff, 0xbf, 0xae),
    Rgb::new(0xff, 0xc0, 0x72),
    Rgb::new(0xff, 0xe5, 0x9f),
    Rgb::new(0xff, 0xa3, 0x97),
    Rgb::new(0xff, 0x84, 0xa2),
    Rgb::new(0xff, 0x84, 0x8c),
];

/// Background for a tile value; values past 2048 keep the 2048 color.
pub fn tile_color(value: Tile) -> Rgb {
    let exponent = value.max(2).trailing_zeros() as usize;
    TILE_BG[(exponent - 1).min(TILE_BG.len() - 1)]
}

/// Full style of a square: empty squares use the empty background.
pub fn tile_style(square: Square) -> CellStyle {
    match square {
        Some(value) if value >= 128 => CellStyle::on(tile_color(value)).fg(TILE_FG).bold(),
        Some(value) => CellStyle::on(tile_color(value)).fg(TILE_FG),
        None => CellStyle::on(EMPTY_BG).fg(TILE_FG).dim(),
    }
}

/// Text shown to the player for a status, None while the game runs.
pub fn status_message(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::Normal => None,
        GameStatus::Win => Some("YOU WIN!"),
        GameStatus::Loss => Some("NO MOVES LEFT!"),
    }
}
