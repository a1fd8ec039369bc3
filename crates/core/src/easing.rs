//! Animation easing helpers.
//!
//! Pure functions over `f32`; no gameplay state lives here.

/// Move `current` toward `target` by `factor` of the remaining distance.
///
/// `factor` is clamped to `0.0..=1.0`; `1.0` snaps to the target.
pub fn ease_toward(current: f32, target: f32, factor: f32) -> f32 {
    let factor = factor.clamp(0.0, 1.0);
    current + (target - current) * factor
}

/// Advance `current` by a fixed `step`, never passing `limit`.
pub fn step_toward(current: f32, step: f32, limit: f32) -> f32 {
    if current >= limit {
        return limit;
    }
    (current + step).min(limit)
}
