//! TerminalSink: presents snapshots on the real terminal.

use std::time::Instant;

use anyhow::Result;
use crossterm::terminal;
use tracing::{debug, warn};

use crate::core::GameSnapshot;
use crate::engine::FrameSink;
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::render_throttle::RenderThrottle;
use crate::renderer::TerminalRenderer;

/// Redraw interval for a frozen (game over) frame.
const STATIC_REDRAW_MS: u64 = 250;

pub struct TerminalSink {
    view: GameView,
    renderer: TerminalRenderer,
    fb: FrameBuffer,
    throttle: RenderThrottle,
    viewport: Viewport,
    started: Instant,
    failures: u64,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self {
            view: GameView::new().with_hint(true),
            renderer: TerminalRenderer::new(),
            fb: FrameBuffer::new(0, 0),
            throttle: RenderThrottle::new(STATIC_REDRAW_MS),
            viewport: Viewport::new(80, 24),
            started: Instant::now(),
            failures: 0,
        }
    }

    /// Enter raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()?;
        self.throttle.reset();
        Ok(())
    }

    /// Restore the terminal.
    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    /// Number of frames that failed to draw.
    pub fn failures(&self) -> u64 {
        self.failures
    }

    fn refresh_viewport(&mut self) {
        match terminal::size() {
            Ok((w, h)) => {
                let next = Viewport::new(w, h);
                if next != self.viewport {
                    debug!(width = w, height = h, "terminal resized");
                    self.viewport = next;
                    self.renderer.invalidate();
                    self.throttle.reset();
                }
            }
            Err(e) => warn!(error = %e, "failed to read terminal size"),
        }
    }
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSink for TerminalSink {
    fn present(&mut self, snapshot: &GameSnapshot) {
        self.refresh_viewport();

        let size_mix = ((self.viewport.width as u64) << 16) | self.viewport.height as u64;
        let fingerprint = snapshot.fingerprint() ^ size_mix.rotate_left(32);
        let now_ms = self.started.elapsed().as_millis() as u64;
        if !self
            .throttle
            .should_render(now_ms, fingerprint, snapshot.game_over)
        {
            return;
        }

        self.view.render_into(snapshot, self.viewport, &mut self.fb);
        if let Err(e) = self.renderer.draw_swap(&mut self.fb) {
            self.failures += 1;
            warn!(error = %e, tick = snapshot.tick, "frame draw failed");
            self.renderer.invalidate();
        }
    }
}
