//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key and mouse events into [`crate::types::GameAction`]s
//! and pointer events. Mouse coordinates stay in terminal cells; the host is
//! responsible for laying the board out in the same units.

pub mod map;
pub mod pointer;

pub use memory_puzzle_types as types;

pub use map::{handle_key_event, should_quit};
pub use pointer::{map_mouse_event, PointerEvent};
