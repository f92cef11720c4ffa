//! TUI Flyer (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_flyer::{types, core, input, engine, term}`
//! so the binary, integration tests and benches share one import path.

pub mod logging;

pub use tui_flyer_core as core;
pub use tui_flyer_engine as engine;
pub use tui_flyer_input as input;
pub use tui_flyer_term as term;
pub use tui_flyer_types as types;
