//! Terminal presentation for the flyer game.
//!
//! Snapshots are drawn into a plain framebuffer by [`GameView`] and flushed by
//! [`TerminalRenderer`], which only re-emits changed cells. [`TerminalSink`]
//! ties both to the game loop's [`FrameSink`](tui_flyer_engine::FrameSink)
//! seam.

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;
pub mod sink;

pub use tui_flyer_core as core;
pub use tui_flyer_engine as engine;
pub use tui_flyer_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport, FLYER_GLYPH, GAME_OVER_TEXT, OBSTACLE_GLYPH};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, for_each_changed_run, TerminalRenderer};
pub use sink::TerminalSink;
