//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer. It avoids widget/layout libraries
//! and renders into a framebuffer that is diff-flushed to the terminal.
//!
//! - [`GameView`] turns a `core::GameSnapshot` into a [`FrameBuffer`] (pure)
//! - [`TerminalRenderer`] owns raw mode, the alternate screen and mouse capture
//! - [`RenderThrottle`] skips redraws while nothing moves
//! - [`TerminalBell`] is the sound backend

pub mod bell;
pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use memory_puzzle_core as core;
pub use memory_puzzle_types as types;

pub use bell::TerminalBell;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{CardGeometry, GameView, Viewport, FOOTER_ROWS, HEADER_ROWS};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
