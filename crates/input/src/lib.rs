//! Directional input sources.
//!
//! The simulation only ever sees a [`types::Direction`] per tick. This crate
//! defines that capability ([`DirectionSource`]) and ships two backends:
//!
//! - [`ScriptedSource`]: a fixed sequence, for tests and headless runs
//! - [`KeyboardSource`]: crossterm keys, with a release timeout for terminals
//!   that never report key releases
//!
//! Any other sensing backend (gesture, gamepad, network) only needs to
//! implement [`DirectionSource`].

pub mod handler;
pub mod keyboard;
pub mod map;
pub mod source;

pub use tui_flyer_types as types;

pub use handler::DirectionHandler;
pub use keyboard::KeyboardSource;
pub use map::{direction_for_key, handle_key_event, should_quit};
pub use source::{DirectionSource, NeutralSource, ScriptError, ScriptedSource};
