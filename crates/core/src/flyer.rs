//! The player-controlled entity.

use crate::collision::Rect;
use crate::config::FlyerConfig;
use crate::types::{Direction, DOWN_VELOCITY, NEUTRAL_VELOCITY, UP_VELOCITY};

/// Velocity chosen for each directional signal (pixels per tick).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Impulses {
    pub up: i32,
    pub down: i32,
    pub neutral: i32,
}

impl Impulses {
    pub fn velocity_for(&self, direction: Direction) -> i32 {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Neutral => self.neutral,
        }
    }
}

impl Default for Impulses {
    fn default() -> Self {
        Self {
            up: UP_VELOCITY,
            down: DOWN_VELOCITY,
            neutral: NEUTRAL_VELOCITY,
        }
    }
}

/// Flyer state.
///
/// Position is never clamped here: leaving the field is a collision, not a
/// movement constraint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flyer {
    pub x: i32,
    pub y: f32,
    pub velocity: i32,
    pub width: i32,
    pub height: i32,
    pub impulses: Impulses,
}

impl Flyer {
    pub fn new(x: i32, y: f32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            velocity: 0,
            width,
            height,
            impulses: Impulses::default(),
        }
    }

    pub fn from_config(cfg: &FlyerConfig) -> Self {
        Self {
            impulses: Impulses {
                up: cfg.up_velocity,
                down: cfg.down_velocity,
                neutral: cfg.neutral_velocity,
            },
            ..Self::new(cfg.x, cfg.start_y, cfg.width, cfg.height)
        }
    }

    /// Select this tick's velocity from the directional signal.
    pub fn apply_directional_signal(&mut self, direction: Direction) {
        self.velocity = self.impulses.velocity_for(direction);
    }

    /// Move by the current velocity.
    pub fn advance(&mut self) {
        self.y += self.velocity as f32;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(
            self.x as f32,
            self.y,
            self.width as f32,
            self.height as f32,
        )
    }
}
