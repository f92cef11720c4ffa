//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). The field is scaled to fill the viewport
//! inside a one-cell border; every entity covers at least one cell.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub const FLYER_GLYPH: char = '@';
pub const OBSTACLE_GLYPH: char = '█';
pub const GAME_OVER_TEXT: &str = "GAME OVER";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const SKY: CellStyle = CellStyle::new(Rgb::new(90, 120, 160), Rgb::new(20, 40, 70));
const OBSTACLE: CellStyle = CellStyle::new(Rgb::new(80, 200, 90), Rgb::new(20, 40, 70));
const FLYER: CellStyle = CellStyle::new(Rgb::new(250, 220, 60), Rgb::new(20, 40, 70)).bold();
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const TEXT: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(20, 40, 70)).bold();
const GAME_OVER: CellStyle = CellStyle::new(Rgb::new(255, 60, 60), Rgb::new(0, 0, 0)).bold();

/// Field-to-cell mapping for one axis.
#[derive(Debug, Clone, Copy)]
struct Axis {
    field: i64,
    cells: i64,
}

impl Axis {
    fn cell(&self, px: i64) -> i64 {
        (px * self.cells).div_euclid(self.field)
    }

    /// Cell range `[start, end)` covered by `[px, px + len)`, clipped.
    fn span(&self, px: i64, len: i64) -> Option<(u16, u16)> {
        let start = self.cell(px);
        let end = self.cell(px + len).max(start + 1);
        let start = start.max(0);
        let end = end.min(self.cells);
        (start < end).then(|| (start as u16, end as u16))
    }
}

#[derive(Debug, Clone, Default)]
pub struct GameView {
    show_hint: bool,
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw a "q quit" hint on the bottom border.
    pub fn with_hint(mut self, show: bool) -> Self {
        self.show_hint = show;
        self
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse the framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        if viewport.width < 3 || viewport.height < 3 || snap.field_width <= 0 || snap.field_height <= 0 {
            return;
        }

        let inner_w = viewport.width - 2;
        let inner_h = viewport.height - 2;
        let xs = Axis {
            field: snap.field_width as i64,
            cells: inner_w as i64,
        };
        let ys = Axis {
            field: snap.field_height as i64,
            cells: inner_h as i64,
        };

        fb.fill_rect(1, 1, inner_w, inner_h, ' ', SKY);

        for pair in snap.obstacles.iter() {
            let Some((c0, c1)) = xs.span(pair.x as i64, pair.width as i64) else {
                continue;
            };
            for top in [pair.top_y, pair.bottom_y] {
                if let Some((r0, r1)) = ys.span(top as i64, pair.height as i64) {
                    fb.fill_rect(1 + c0, 1 + r0, c1 - c0, r1 - r0, OBSTACLE_GLYPH, OBSTACLE);
                }
            }
        }

        let flyer_y = snap.flyer_y.floor() as i64;
        if let (Some((c0, c1)), Some((r0, r1))) = (
            xs.span(snap.flyer_x as i64, snap.flyer_width as i64),
            ys.span(flyer_y, snap.flyer_height as i64),
        ) {
            fb.fill_rect(1 + c0, 1 + r0, c1 - c0, r1 - r0, FLYER_GLYPH, FLYER);
        }

        fb.put_str(2, 1, "Score: ", TEXT);
        fb.put_u32(9, 1, snap.score, TEXT);

        self.draw_border(fb, viewport.width, viewport.height);

        if snap.game_over {
            let text_w = GAME_OVER_TEXT.chars().count() as u16;
            let x = viewport.width.saturating_sub(text_w) / 2;
            fb.put_str(x, viewport.height / 2, GAME_OVER_TEXT, GAME_OVER);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, w: u16, h: u16) {
        fb.put_char(0, 0, '┌', BORDER);
        fb.put_char(w - 1, 0, '┐', BORDER);
        fb.put_char(0, h - 1, '└', BORDER);
        fb.put_char(w - 1, h - 1, '┘', BORDER);

        for dx in 1..w - 1 {
            fb.put_char(dx, 0, '─', BORDER);
            fb.put_char(dx, h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(0, dy, '│', BORDER);
            fb.put_char(w - 1, dy, '│', BORDER);
        }

        if self.show_hint && w >= 12 {
            fb.put_str(2, h - 1, " q quit ", BORDER);
        }
    }
}
