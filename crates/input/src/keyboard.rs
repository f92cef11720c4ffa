//! Crossterm-backed keyboard source.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, warn};

use crate::handler::DirectionHandler;
use crate::map::should_quit;
use crate::source::DirectionSource;
use crate::types::Direction;

/// Reads pending key events without blocking.
///
/// The terminal must already be in raw mode.
#[derive(Debug, Default)]
pub struct KeyboardSource {
    handler: DirectionHandler,
    quit: bool,
}

impl KeyboardSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_handler(handler: DirectionHandler) -> Self {
        Self {
            handler,
            quit: false,
        }
    }

    /// Drain every event that is already queued.
    fn pump(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            match key.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    if should_quit(key) {
                        debug!("quit requested");
                        self.quit = true;
                    } else if let Some(dir) = self.handler.handle_key_press(key.code) {
                        debug!(direction = dir.as_str(), "direction changed");
                    }
                }
                KeyEventKind::Release => self.handler.handle_key_release(key.code),
            }
        }
        Ok(())
    }

    fn pump_or_warn(&mut self) {
        if let Err(err) = self.pump() {
            // A broken input device fails open to neutral drift.
            warn!(error = %err, "keyboard poll failed");
        }
    }
}

impl DirectionSource for KeyboardSource {
    fn poll(&mut self) -> Direction {
        self.pump_or_warn();
        self.handler.current()
    }

    fn quit_requested(&mut self) -> bool {
        self.pump_or_warn();
        self.quit
    }
}
