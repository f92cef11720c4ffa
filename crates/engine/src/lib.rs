//! Game loop controller.
//!
//! Drives a [`GameSession`](tui_flyer_core::GameSession) at a fixed cadence:
//! check quit, poll the input source (only while playing), tick, hand the
//! snapshot to a [`FrameSink`], then wait for the next tick boundary.
//!
//! Pacing is a trait so tests and headless runs can use [`Unpaced`] and never
//! sleep.

pub mod game_loop;
pub mod pacer;
pub mod sink;

pub use tui_flyer_core as core;
pub use tui_flyer_input as input;
pub use tui_flyer_types as types;

pub use game_loop::{GameLoop, LoopExit, LoopReport};
pub use pacer::{FixedRate, Pacer, Unpaced};
pub use sink::{FrameSink, NullSink, RecordingSink};
