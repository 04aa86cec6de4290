//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids ratatui widgets/layout and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Colors are a pure function of tile values ([`palette`]), never game state
//! - Allow precise control over tile aspect ratio (7x3 chars per tile by default)

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rect, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use palette::{status_message, tile_color, tile_style};
pub use renderer::{encode_frame, TerminalRenderer};
