//! Skips redundant redraws of a frozen frame.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Decide whether to draw this frame.
    ///
    /// - `is_static=false` (live play): always draw.
    /// - `is_static=true` (game over): draw on fingerprint change, otherwise at
    ///   most once per `min_static_interval_ms` so resizes still get repainted.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let changed = !self.has_rendered || fingerprint != self.last_fingerprint;
        let due = now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms;

        if !is_static || changed || due {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
            return true;
        }
        false
    }

    /// Force the next frame to be drawn.
    pub fn reset(&mut self) {
        self.has_rendered = false;
    }
}
