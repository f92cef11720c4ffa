//! Shared types and default constants.
//!
//! Pure data with no external dependencies, usable from the simulation core,
//! the input sources and the terminal view alike.
//!
//! # Field geometry
//!
//! All positions are in field pixels, measured from the top-left corner.
//! The defaults mirror the classic 800x512 layout:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FIELD_WIDTH` | 800 | Visible field width |
//! | `FIELD_HEIGHT` | 512 | Visible field height |
//! | `FLYER_X` | 50 | Fixed horizontal reference of the flyer |
//! | `FLYER_START_Y` | 250 | Initial vertical position |
//! | `OBSTACLE_SPAWN_X` | 300 | Horizontal position of a freshly spawned pair |
//! | `OBSTACLE_GAP` | 170 | Vertical clearance between top and bottom obstacle |
//! | `OBSTACLE_VELOCITY` | 3 | Leftward movement per tick |
//!
//! # Timing
//!
//! Movement is expressed in pixels per tick. The loop runs at a fixed
//! `TICK_RATE_HZ` and never scales movement by elapsed wall-clock time.
//!
//! # Examples
//!
//! ```
//! use tui_flyer_types::{Direction, UP_VELOCITY, NEUTRAL_VELOCITY};
//!
//! assert_eq!(Direction::from_str("up"), Some(Direction::Up));
//! assert_eq!(Direction::from_char('.'), Some(Direction::Neutral));
//! assert_eq!(UP_VELOCITY, -5);
//! assert_eq!(NEUTRAL_VELOCITY, 1);
//! ```

/// Visible field width in pixels.
pub const FIELD_WIDTH: i32 = 800;

/// Visible field height in pixels.
pub const FIELD_HEIGHT: i32 = 512;

/// Flyer bounding box width in pixels.
pub const FLYER_WIDTH: i32 = 32;

/// Flyer bounding box height in pixels.
pub const FLYER_HEIGHT: i32 = 32;

/// Fixed horizontal reference coordinate of the flyer.
pub const FLYER_X: i32 = 50;

/// Initial vertical position of the flyer.
pub const FLYER_START_Y: f32 = 250.0;

/// Velocity selected by [`Direction::Up`] (pixels per tick).
pub const UP_VELOCITY: i32 = -5;

/// Velocity selected by [`Direction::Down`] (pixels per tick).
pub const DOWN_VELOCITY: i32 = 5;

/// Gravity drift selected by [`Direction::Neutral`] (pixels per tick).
pub const NEUTRAL_VELOCITY: i32 = 1;

/// Width of each obstacle rectangle.
pub const OBSTACLE_WIDTH: i32 = 52;

/// Height of each obstacle rectangle.
pub const OBSTACLE_HEIGHT: i32 = 320;

/// Vertical gap between the top and bottom obstacle of a pair.
pub const OBSTACLE_GAP: i32 = 170;

/// Leftward movement of every obstacle pair per tick.
pub const OBSTACLE_VELOCITY: i32 = 3;

/// Horizontal position of a freshly spawned pair.
pub const OBSTACLE_SPAWN_X: i32 = 300;

/// Inclusive lower bound of the randomized gap center.
pub const GAP_CENTER_MIN: i32 = 150;

/// Inclusive upper bound of the randomized gap center.
pub const GAP_CENTER_MAX: i32 = 300;

/// Upper bound on simultaneously live obstacle pairs.
///
/// The snapshot stores obstacles inline, so this is also its capacity.
pub const MAX_OBSTACLES: usize = 8;

/// Fixed simulation cadence.
pub const TICK_RATE_HZ: u32 = 30;

/// How long a held direction key stays active without a repeat or press.
///
/// Longer than common auto-repeat delays (250-500 ms) so a held key does not
/// flicker to neutral on terminals that never report releases.
pub const KEY_RELEASE_TIMEOUT_MS: u32 = 600;

/// Per-tick directional signal.
///
/// A source with nothing to report yields `Neutral`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Up,
    Down,
    #[default]
    Neutral,
}

impl Direction {
    /// Parse a direction from a word (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "neutral" | "n" | "none" => Some(Direction::Neutral),
            _ => None,
        }
    }

    /// Parse a single script character.
    ///
    /// `u`/`^` up, `d`/`v` down, `n`/`.` neutral.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'u' | 'U' | '^' => Some(Direction::Up),
            'd' | 'D' | 'v' | 'V' => Some(Direction::Down),
            'n' | 'N' | '.' => Some(Direction::Neutral),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Neutral => "neutral",
        }
    }
}

/// Simulation state machine.
///
/// `GameOver` is terminal for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Playing,
    GameOver,
}

impl GamePhase {
    pub fn is_over(&self) -> bool {
        matches!(self, GamePhase::GameOver)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Playing => "playing",
            GamePhase::GameOver => "game_over",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_str_is_case_insensitive() {
        assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
        assert_eq!(Direction::from_str("Down"), Some(Direction::Down));
        assert_eq!(Direction::from_str("neutral"), Some(Direction::Neutral));
        assert_eq!(Direction::from_str("left"), None);
    }

    #[test]
    fn test_direction_from_char() {
        assert_eq!(Direction::from_char('^'), Some(Direction::Up));
        assert_eq!(Direction::from_char('v'), Some(Direction::Down));
        assert_eq!(Direction::from_char('.'), Some(Direction::Neutral));
        assert_eq!(Direction::from_char('x'), None);
    }

    #[test]
    fn test_direction_default_is_neutral() {
        assert_eq!(Direction::default(), Direction::Neutral);
    }

    #[test]
    fn test_gap_range_keeps_gap_on_screen() {
        assert!(GAP_CENTER_MIN > 0);
        assert!(GAP_CENTER_MAX + OBSTACLE_GAP < FIELD_HEIGHT);
    }

    #[test]
    fn test_key_release_timeout_outlasts_repeat_delay() {
        assert!(KEY_RELEASE_TIMEOUT_MS > 500);
    }

    #[test]
    fn test_phase() {
        assert!(!GamePhase::Playing.is_over());
        assert!(GamePhase::GameOver.is_over());
        assert_eq!(GamePhase::default(), GamePhase::Playing);
    }
}
