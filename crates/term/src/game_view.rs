//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rect, Rgb};
use crate::palette::{status_message, tile_style, BOARD_BG};
use crate::types::Position;

/// Gap between tiles and around the tile area, in terminal cells.
const GAP: u16 = 1;

const SCREEN: CellStyle = CellStyle::on(Rgb::new(0, 0, 0));
const BORDER: CellStyle = SCREEN.fg(Rgb::new(200, 200, 200));
const BANNER: CellStyle = SCREEN.fg(Rgb::new(255, 255, 255));
const RESTART_HINT: &str = "press r to restart";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the 2048 grid.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 fits a six-digit value with padding and roughly squares the tile.
        Self {
            cell_w: 7,
            cell_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size (border included) of the frame for a grid of `axis_y` x `axis_x`.
    pub fn frame_size(&self, axis_y: u8, axis_x: u8) -> (u16, u16) {
        let cols = axis_x as u16;
        let rows = axis_y as u16;
        let inner_w = cols * self.cell_w + (cols + 1) * GAP;
        let inner_h = rows * self.cell_h + (rows + 1) * GAP;
        (inner_w + 2, inner_h + 2)
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and fully repainted.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(SCREEN);

        let grid = &snap.grid;
        let frame = self.place_frame(viewport, grid.axis_y(), grid.axis_x());

        fb.paint(frame.inset(1), CellStyle::on(BOARD_BG));
        draw_border(fb, frame);

        for (pos, square) in grid.iter() {
            let style = tile_style(square);
            let tile = self.tile_rect(frame, pos);
            fb.paint(tile, style);

            if let Some(value) = square {
                let mut digits = [0u8; 10];
                let label = format_tile(value, &mut digits);
                fb.print_centered(tile.row(self.cell_h / 2), label, style);
            }
            if snap.last_spawn.contains(&pos) && self.cell_w > 1 {
                fb.put(tile.x, tile.y, '*', style.dim());
            }
        }

        draw_side_panel(fb, snap, frame);

        if let Some(text) = status_message(snap.status) {
            draw_banner(fb, frame, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Outer frame, centred horizontally and anchored vertically.
    fn place_frame(&self, viewport: Viewport, axis_y: u8, axis_x: u8) -> Rect {
        let (w, h) = self.frame_size(axis_y, axis_x);
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Rect::new(x, y, w, h)
    }

    /// Area covered by the tile at `pos` inside `frame`
    fn tile_rect(&self, frame: Rect, pos: Position) -> Rect {
        let inner = frame.inset(1);
        Rect::new(
            inner.x + GAP + pos.col as u16 * (self.cell_w + GAP),
            inner.y + GAP + pos.row as u16 * (self.cell_h + GAP),
            self.cell_w,
            self.cell_h,
        )
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Rect) {
    if frame.w < 2 || frame.h < 2 {
        return;
    }
    let (left, top) = (frame.x, frame.y);
    let (right, bottom) = (frame.right() - 1, frame.bottom() - 1);

    for x in left + 1..right {
        fb.put(x, top, '─', BORDER);
        fb.put(x, bottom, '─', BORDER);
    }
    for y in top + 1..bottom {
        fb.put(left, y, '│', BORDER);
        fb.put(right, y, '│', BORDER);
    }
    fb.put(left, top, '┌', BORDER);
    fb.put(right, top, '┐', BORDER);
    fb.put(left, bottom, '└', BORDER);
    fb.put(right, bottom, '┘', BORDER);
}

/// Score, best tile, move count and goal to the right of the frame.
///
/// Skipped when the terminal leaves fewer than 10 columns beside the board;
/// the seed and key hints need a little more.
fn draw_side_panel(fb: &mut FrameBuffer, snap: &GameSnapshot, frame: Rect) {
    let x = frame.right().saturating_add(2);
    let panel_w = fb.width().saturating_sub(x);
    if panel_w < 10 {
        return;
    }

    let label = SCREEN.bold();
    let quiet = SCREEN.dim();
    let mut digits = [0u8; 10];
    let mut y = frame.y;
    let mut entry = |fb: &mut FrameBuffer, y: u16, name: &str, number: u32, style: CellStyle| {
        fb.print(x, y, name, style);
        fb.print(x, y + 1, format_tile(number, &mut digits), style);
    };

    for (name, number) in [
        ("SCORE", snap.score),
        ("BEST", snap.max_tile),
        ("MOVES", snap.moves),
        ("GOAL", snap.win_count),
    ] {
        if y.saturating_add(1) >= fb.height() {
            return;
        }
        entry(fb, y, name, number, label);
        y = y.saturating_add(3);
    }

    if y.saturating_add(1) < fb.height() && panel_w >= 12 {
        entry(fb, y, "SEED", snap.seed, quiet);
        y = y.saturating_add(3);
    }

    if y.saturating_add(1) < fb.height() && panel_w >= 14 {
        fb.print(x, y, "r restart", quiet);
        fb.print(x, y + 1, "q quit", quiet);
    }
}

/// Status line across the middle of the frame, with the restart hint below.
fn draw_banner(fb: &mut FrameBuffer, frame: Rect, text: &str) {
    let mid = frame.y.saturating_add(frame.h / 2);

    for (dy, line, style) in [(0, text, BANNER.bold()), (1, RESTART_HINT, BANNER)] {
        // One space of padding on each side so the text stands off the tiles.
        let w = (line.chars().count() as u16 + 2).min(frame.w);
        let x = frame.x.saturating_add((frame.w - w) / 2);
        let band = Rect::new(x, mid.saturating_add(dy), w, 1);
        fb.paint(band, style);
        fb.print_centered(band, line, style);
    }
}

/// Decimal digits of `value` written into `buf`
fn format_tile(value: u32, buf: &mut [u8; 10]) -> &str {
    let mut n = value;
    let mut start = buf.len();
    loop {
        start -= 1;
        buf[start] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    // Only ASCII digits were written.
    std::str::from_utf8(&buf[start..]).unwrap_or("?")
}
