//! Held-direction tracking for terminal environments.
//!
//! A direction stays active while its key is held. Terminals that never send
//! key-release events are handled with a timeout: without a fresh press or
//! auto-repeat, the held direction decays back to neutral.

use std::time::Instant;

use crossterm::event::KeyCode;

use crate::map::direction_for_key;
use crate::types::{Direction, KEY_RELEASE_TIMEOUT_MS};

#[derive(Debug, Clone)]
pub struct DirectionHandler {
    held: Direction,
    last_key_time: Instant,
    key_release_timeout_ms: u32,
}

impl DirectionHandler {
    pub fn new() -> Self {
        Self {
            held: Direction::Neutral,
            last_key_time: Instant::now(),
            key_release_timeout_ms: KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Register a press (or auto-repeat). Returns the direction when it changed.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<Direction> {
        let dir = direction_for_key(code)?;
        self.last_key_time = Instant::now();
        if self.held == dir {
            None
        } else {
            self.held = dir;
            Some(dir)
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if direction_for_key(code) == Some(self.held) {
            self.held = Direction::Neutral;
        }
    }

    /// Direction for this tick, applying the release timeout.
    pub fn current(&mut self) -> Direction {
        let since_last_key = self.last_key_time.elapsed().as_millis() as u32;
        if since_last_key > self.key_release_timeout_ms {
            self.held = Direction::Neutral;
        }
        self.held
    }

    pub fn reset(&mut self) {
        self.held = Direction::Neutral;
        self.last_key_time = Instant::now();
    }
}

impl Default for DirectionHandler {
    fn default() -> Self {
        Self::new()
    }
}
