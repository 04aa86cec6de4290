//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The engine
//! only ever sees discrete directions; there is no key-repeat or gesture
//! handling here.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
