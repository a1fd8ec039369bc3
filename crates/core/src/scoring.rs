//! Scoring module - pair rewards and end-of-game bonuses
//!
//! Each resolved pair is worth [`MATCH_REWARD`]. Finding the last pair adds:
//! - a time bonus of `max(0, 300 - elapsed_secs)`
//! - an efficiency bonus of `max(0, (2 * total_pairs - attempts) * 5)`
//!
//! `2 * total_pairs` is the theoretical minimum number of attempts a player
//! without perfect recall would need.

use crate::types::{EFFICIENCY_BONUS_PER_ATTEMPT, MATCH_REWARD, TIME_BONUS_BASE};

/// Breakdown of the bonus added when the board is cleared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WinBonus {
    pub time: u32,
    pub efficiency: u32,
    pub total: u32,
}

/// Points for a single matched pair
pub fn match_reward() -> u32 {
    MATCH_REWARD
}

/// `max(0, 300 - elapsed_secs)`
pub fn time_bonus(elapsed_secs: u64) -> u32 {
    TIME_BONUS_BASE.saturating_sub(elapsed_secs) as u32
}

/// `max(0, (2 * total_pairs - attempts) * 5)`
pub fn efficiency_bonus(total_pairs: usize, attempts: u32) -> u32 {
    let par = (total_pairs as u32).saturating_mul(2);
    par.saturating_sub(attempts)
        .saturating_mul(EFFICIENCY_BONUS_PER_ATTEMPT)
}

pub fn win_bonus(elapsed_secs: u64, total_pairs: usize, attempts: u32) -> WinBonus {
    let time = time_bonus(elapsed_secs);
    let efficiency = efficiency_bonus(total_pairs, attempts);
    WinBonus {
        time,
        efficiency,
        total: time + efficiency,
    }
}

/// Efficiency percentage for the win summary.
///
/// Uses `max(attempts, 1)` so an empty game reports instead of dividing by zero.
pub fn efficiency_pct(total_pairs: usize, attempts: u32) -> u32 {
    let par = (total_pairs as u64) * 2 * 100;
    (par / attempts.max(1) as u64) as u32
}

/// Share of pairs found, 0-100.
pub fn progress_pct(matches_found: usize, total_pairs: usize) -> u32 {
    if total_pairs == 0 {
        return 0;
    }
    ((matches_found * 100) / total_pairs) as u32
}
