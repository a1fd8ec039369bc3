//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the memory-matching rules, the session state machine
//! and the scoring formulas. It has **no dependencies** on terminal I/O:
//!
//! - **Deterministic**: same seed and input sequence produce the same game
//! - **Tick based**: every countdown is measured in frames, not wall time
//! - **Pluggable**: sound and clock are injected through small traits
//!
//! # Module Structure
//!
//! - [`board`]: grid dealing, validation, layout and hit testing
//! - [`card`]: per-card face state and flip/hover animation
//! - [`session`]: selection, match resolution, feedback, restart, win
//! - [`scoring`]: match reward and end-of-game bonuses
//! - [`snapshot`]: read-only views for renderers
//! - [`rng`]: LCG used to shuffle the deal
//! - [`sound`] / [`clock`]: injectable side-effect seams
//!
//! # Game Rules
//!
//! - Each pair id appears on exactly two cards
//! - Two face-up cards resolve after a 60 tick delay
//! - A match scores 10 and keeps both cards face-up for good
//! - A mismatch flips both back
//! - Clearing the board adds a time bonus and an efficiency bonus
//!
//! # Example
//!
//! ```
//! use memory_puzzle_core::{Board, GameSession, Layout};
//! use memory_puzzle_core::types::RESOLVE_DELAY_TICKS;
//!
//! let ids = [0u8, 0, 1, 1];
//! let board = Board::from_pair_ids(2, &ids, Layout::nominal()).unwrap();
//! let mut session = GameSession::from_board(board, 7);
//!
//! assert!(session.select(0));
//! assert!(session.select(1));
//! for _ in 0..RESOLVE_DELAY_TICKS {
//!     session.tick();
//! }
//! assert_eq!(session.matches_found(), 1);
//! assert_eq!(session.score(), 10);
//! ```

pub mod board;
pub mod card;
pub mod clock;
pub mod easing;
pub mod error;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod sound;

pub use memory_puzzle_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Layout};
pub use card::{Card, Rect};
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::ConfigurationError;
pub use rng::SimpleRng;
pub use scoring::WinBonus;
pub use session::GameSession;
pub use snapshot::{CardSnapshot, GameSnapshot};
pub use sound::{CueLog, NullSound, SoundError, SoundSink};
