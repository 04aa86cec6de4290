//! Character canvas the board is painted on before it reaches the terminal.
//!
//! Everything here clips silently: painting past the edge of the canvas is a
//! no-op, so layout code can place tiles without checking the viewport.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

const TEXT: Rgb = Rgb::new(220, 220, 220);
const BLACK: Rgb = Rgb::new(0, 0, 0);

/// Colors and weight of one character cell.
///
/// Built up from a background: `CellStyle::on(bg).fg(fg).bold()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    /// Light text on `bg`
    pub const fn on(bg: Rgb) -> Self {
        Self {
            fg: TEXT,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn fg(self, fg: Rgb) -> Self {
        Self { fg, ..self }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn dim(self) -> Self {
        Self { dim: true, ..self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::on(BLACK)
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// Axis-aligned rectangle in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// First column past the right edge
    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    /// First row past the bottom edge
    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }

    /// Shrink by `n` cells on every side.
    pub fn inset(&self, n: u16) -> Self {
        Self {
            x: self.x.saturating_add(n),
            y: self.y.saturating_add(n),
            w: self.w.saturating_sub(2 * n),
            h: self.h.saturating_sub(2 * n),
        }
    }

    /// The one-row strip `dy` rows below the top.
    pub fn row(&self, dy: u16) -> Self {
        Self {
            y: self.y.saturating_add(dy),
            h: 1,
            ..*self
        }
    }
}

/// Row-major grid of styled cells, sized to the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Change the size, reusing the allocation. Contents are unspecified
    /// afterwards; callers repaint the whole frame.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let len = width as usize * height as usize;
        self.cells.resize(len, Cell::default());
    }

    /// Blank every cell with `style`.
    pub fn fill(&mut self, style: CellStyle) {
        self.cells.fill(Cell { ch: ' ', style });
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.offset(x, y).map(|i| self.cells[i])
    }

    pub fn put(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        if let Some(i) = self.offset(x, y) {
            self.cells[i] = Cell { ch, style };
        }
    }

    /// Cells of row `y`; empty past the bottom.
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// Blank `rect` with `style`.
    pub fn paint(&mut self, rect: Rect, style: CellStyle) {
        for y in rect.y..rect.bottom().min(self.height) {
            for x in rect.x..rect.right().min(self.width) {
                self.put(x, y, ' ', style);
            }
        }
    }

    /// Write `text` from `(x, y)` rightwards.
    pub fn print(&mut self, x: u16, y: u16, text: &str, style: CellStyle) {
        for (ch, cx) in text.chars().zip(x..self.width) {
            self.put(cx, y, ch, style);
        }
    }

    /// Write `text` centred on the top row of `rect`, cut to its width.
    pub fn print_centered(&mut self, rect: Rect, text: &str, style: CellStyle) {
        let len = text.chars().count().min(rect.w as usize) as u16;
        let x = rect.x.saturating_add((rect.w - len) / 2);
        for (i, ch) in text.chars().take(len as usize).enumerate() {
            self.put(x.saturating_add(i as u16), rect.y, ch, style);
        }
    }

    /// Row `y` as plain text (testing/debugging)
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|cell| cell.ch).collect()
    }
}
