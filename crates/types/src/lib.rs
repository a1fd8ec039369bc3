//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, tests).
//!
//! # Board Dimensions
//!
//! The board is a square grid of `GRID_SIZE x GRID_SIZE` cards. Every color in
//! [`CARD_COLORS`] is used by exactly one pair, so the palette size caps the
//! number of pairs a board can hold.
//!
//! # Game Timing Constants
//!
//! All countdowns are expressed in ticks of the fixed-step loop:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICKS_PER_SECOND` | 60 | Nominal loop rate |
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `RESOLVE_DELAY_TICKS` | 60 | Both cards stay visible before resolution |
//! | `FEEDBACK_TICKS` | 30 | "Match" / "Try again" message lifetime |
//!
//! # Scoring
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MATCH_REWARD` | 10 | Points per resolved pair |
//! | `TIME_BONUS_BASE` | 300 | Time bonus is `max(0, 300 - elapsed_secs)` |
//! | `EFFICIENCY_BONUS_PER_ATTEMPT` | 5 | Per attempt saved below `2 * total_pairs` |
//!
//! # Examples
//!
//! ```
//! use memory_puzzle_types::{GameAction, SoundCue, CARD_COLORS, GRID_SIZE};
//!
//! assert_eq!(GRID_SIZE, 4);
//! assert_eq!(CARD_COLORS.len(), 8);
//!
//! assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
//! assert_eq!(SoundCue::Match.as_str(), "match");
//! ```

/// Default grid size (4x4 cards, 8 pairs)
pub const GRID_SIZE: u8 = 4;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Nominal number of ticks per second
pub const TICKS_PER_SECOND: u32 = 60;

/// Delay between the second selection and match resolution (one second)
pub const RESOLVE_DELAY_TICKS: u32 = 60;

/// Lifetime of the match / no-match feedback message (half a second)
pub const FEEDBACK_TICKS: u32 = 30;

/// Flip animation progress added per tick
pub const FLIP_SPEED: f32 = 0.15;

/// Hover scale target for an eligible card under the pointer
pub const HOVER_SCALE: f32 = 1.05;

/// Fraction of the remaining hover-scale distance covered per tick
pub const HOVER_DAMPING: f32 = 0.2;

/// Points awarded for each matched pair
pub const MATCH_REWARD: u32 = 10;

/// Seconds budget for the time bonus
pub const TIME_BONUS_BASE: u64 = 300;

/// Points per attempt saved below the theoretical minimum
pub const EFFICIENCY_BONUS_PER_ATTEMPT: u32 = 5;

/// Nominal viewport width (pixels)
pub const WINDOW_WIDTH: u16 = 800;

/// Nominal viewport height (pixels)
pub const WINDOW_HEIGHT: u16 = 600;

/// Nominal card edge length (pixels)
pub const CARD_SIZE: u16 = 120;

/// Nominal gap between cards (pixels)
pub const CARD_MARGIN: u16 = 10;

/// Vertical offset that leaves room for the HUD above the grid (pixels)
pub const HUD_OFFSET_Y: u16 = 40;

/// 24-bit color triple used by the palette.
pub type Color = (u8, u8, u8);

/// One color per pair id. Index `i` is the color of pair `i`.
pub const CARD_COLORS: [Color; 8] = [
    (255, 87, 87),   // red
    (74, 144, 226),  // blue
    (255, 206, 84),  // yellow
    (129, 199, 132), // green
    (149, 117, 205), // purple
    (255, 167, 38),  // orange
    (240, 98, 146),  // pink
    (77, 182, 172),  // teal
];

/// Palette lookup for a pair id (wraps around for out-of-range ids).
pub fn pair_color(pair_id: u8) -> Color {
    CARD_COLORS[pair_id as usize % CARD_COLORS.len()]
}

/// Actions the host loop can apply to a session
///
/// These are the keyboard-level commands. Card selection arrives as pointer
/// events instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Discard the board and start over (valid in any state)
    Restart,
    /// Ask the host loop to terminate
    Quit,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_puzzle_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("Restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("quit"), Some(GameAction::Quit));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "restart" => Some(GameAction::Restart),
            "quit" => Some(GameAction::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Restart => "restart",
            GameAction::Quit => "quit",
        }
    }
}

/// What the host loop should do after applying an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Sound cues emitted by the session
///
/// Delivery is best-effort: a sink that fails to play a cue never affects
/// game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// A card was turned face-up by the player
    Flip,
    /// Two selected cards formed a pair
    Match,
    /// Two selected cards did not match and were turned back
    NoMatch,
    /// The last pair was found
    Win,
}

impl SoundCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::Flip => "flip",
            SoundCue::Match => "match",
            SoundCue::NoMatch => "no_match",
            SoundCue::Win => "win",
        }
    }
}

/// Outcome of the most recent resolution, shown while the feedback timer runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Success,
    Failure,
}

/// Coarse session state
///
/// - **Idle**: zero or one card selected, accepting selections
/// - **Resolving**: two cards selected, waiting for the resolve delay
/// - **Won**: every pair found; only restart is accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    Resolving,
    Won,
}
