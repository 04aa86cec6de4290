//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The renderer keeps the last frame it drew. Each new frame is compared row by
//! row and only the spans that differ are rewritten; a missing or differently
//! sized previous frame means the screen is cleared and every row is a span.

use std::io::{self, Write};
use std::ops::Range;

use anyhow::Result;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::QueueableCommand;

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    out: io::Stdout,
    /// Frame currently on screen
    front: Option<FrameBuffer>,
    bytes: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            front: None,
            bytes: Vec::with_capacity(8 * 1024),
        }
    }

    /// Switch to raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.bytes.clear();
        self.bytes
            .queue(EnterAlternateScreen)?
            .queue(Hide)?
            .queue(DisableLineWrap)?;
        self.flush()
    }

    /// Undo `enter`.
    pub fn exit(&mut self) -> Result<()> {
        self.bytes.clear();
        self.bytes
            .queue(SetAttribute(Attribute::Reset))?
            .queue(ResetColor)?
            .queue(EnableLineWrap)?
            .queue(Show)?
            .queue(LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Forget what is on screen so the next draw repaints everything.
    pub fn invalidate(&mut self) {
        self.front = None;
    }

    /// Draw `fb`, then hand back the previous frame in its place.
    ///
    /// The caller paints the next frame over whatever it gets back, so two
    /// buffers alternate and nothing is cloned.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.bytes.clear();
        encode_frame(self.front.as_ref(), fb, &mut self.bytes)?;
        self.flush()?;

        let back = self
            .front
            .take()
            .unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
        self.front = Some(std::mem::replace(fb, back));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.write_all(&self.bytes)?;
        self.out.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode the commands that turn `prev` into `next` on screen.
///
/// With no usable `prev` the screen is cleared and `next` is written in full.
/// Identical frames encode to nothing.
pub fn encode_frame(
    prev: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<()> {
    let prev = prev.filter(|p| p.width() == next.width() && p.height() == next.height());
    if prev.is_none() {
        out.queue(Clear(ClearType::All))?;
    }

    let mut pen = Pen::default();
    for y in 0..next.height() {
        let row = next.row(y);
        for span in dirty_spans(prev.map(|p| p.row(y)), row) {
            out.queue(MoveTo(span.start as u16, y))?;
            for cell in &row[span] {
                pen.switch(cell.style, out)?;
                out.queue(Print(cell.ch))?;
            }
        }
    }

    if pen.style.is_some() {
        out.queue(SetAttribute(Attribute::Reset))?.queue(ResetColor)?;
    }
    Ok(())
}

/// Spans of `new` that differ from `old`; all of `new` when there is no `old`.
fn dirty_spans<'a>(old: Option<&'a [Cell]>, new: &'a [Cell]) -> DirtySpans<'a> {
    DirtySpans { old, new, at: 0 }
}

struct DirtySpans<'a> {
    old: Option<&'a [Cell]>,
    new: &'a [Cell],
    at: usize,
}

impl Iterator for DirtySpans<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        let new = self.new;
        let len = new.len();
        if self.at >= len {
            return None;
        }
        let Some(old) = self.old else {
            self.at = len;
            return Some(0..len);
        };

        let same = |i: usize| old.get(i) == Some(&new[i]);
        let Some(start) = (self.at..len).find(|&i| !same(i)) else {
            self.at = len;
            return None;
        };
        let end = (start + 1..len).find(|&i| same(i)).unwrap_or(len);
        self.at = end;
        Some(start..end)
    }
}

/// Tracks the terminal's active style so only changes are emitted.
#[derive(Debug, Default)]
struct Pen {
    style: Option<CellStyle>,
}

impl Pen {
    fn switch(&mut self, style: CellStyle, out: &mut Vec<u8>) -> Result<()> {
        match self.style {
            Some(active) if active == style => return Ok(()),
            Some(active) if active.bold == style.bold && active.dim == style.dim => {
                if active.fg != style.fg {
                    out.queue(SetForegroundColor(color(style.fg)))?;
                }
                if active.bg != style.bg {
                    out.queue(SetBackgroundColor(color(style.bg)))?;
                }
            }
            // Attributes can only be dropped by a full reset, which also
            // clears the colors.
            _ => {
                out.queue(SetAttribute(Attribute::Reset))?;
                if style.bold {
                    out.queue(SetAttribute(Attribute::Bold))?;
                }
                if style.dim {
                    out.queue(SetAttribute(Attribute::Dim))?;
                }
                out.queue(SetForegroundColor(color(style.fg)))?
                    .queue(SetBackgroundColor(color(style.bg)))?;
            }
        }
        self.style = Some(style);
        Ok(())
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
