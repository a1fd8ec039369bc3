//! Redraw gating for the fixed-tick loop.
//!
//! While cards flip or a countdown runs, every tick is drawn. Once the board
//! settles, a frame is drawn only when the snapshot fingerprint changes, plus
//! a slow keep-alive so the clock in the HUD keeps moving.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last: Option<(u64, u64)>,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last: None,
        }
    }

    /// Decide whether to render a new frame.
    ///
    /// - `animating = true`: always render.
    /// - `animating = false`: render on fingerprint change, otherwise at most
    ///   once per `min_static_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, animating: bool) -> bool {
        let render = match self.last {
            None => true,
            Some(_) if animating => true,
            Some((_, last_fp)) if last_fp != fingerprint => true,
            Some((last_ms, _)) => now_ms.saturating_sub(last_ms) >= self.min_static_interval_ms,
        };
        if render {
            self.last = Some((now_ms, fingerprint));
        }
        render
    }

    /// Force the next call to render (terminal resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}
