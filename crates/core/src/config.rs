//! Startup configuration.
//!
//! Every constant the simulation needs is fixed when a session is built and
//! never changes afterwards. Values can come from a TOML file; any key that is
//! missing falls back to the defaults in `tui_flyer_types`.
//!
//! ```toml
//! tick_rate_hz = 30
//! scoring = "threshold"
//!
//! [field]
//! width = 800
//! height = 512
//!
//! [obstacles]
//! velocity = 2
//! gap = 180
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::scoring::ScoringRule;
use crate::types::*;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: i64 },
    #[error("gap center range [{min}, {max}] is empty")]
    EmptyGapRange { min: i32, max: i32 },
    #[error("gap center range [{min}, {max}] plus gap {gap} does not fit a field of height {height}")]
    GapOutsideField {
        min: i32,
        max: i32,
        gap: i32,
        height: i32,
    },
    #[error("flyer start y {y} is outside the open band (0, {limit})")]
    StartOutOfBounds { y: f32, limit: i32 },
    #[error("obstacle spawn x {spawn_x} with width {width} and velocity {velocity} is out of range")]
    SpawnOutOfRange {
        spawn_x: i32,
        width: i32,
        velocity: i32,
    },
    #[error("obstacle stream config does not match the session config")]
    StreamMismatch,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FlyerConfig {
    /// Fixed horizontal reference coordinate.
    pub x: i32,
    pub start_y: f32,
    pub width: i32,
    pub height: i32,
    pub up_velocity: i32,
    pub down_velocity: i32,
    pub neutral_velocity: i32,
}

impl Default for FlyerConfig {
    fn default() -> Self {
        Self {
            x: FLYER_X,
            start_y: FLYER_START_Y,
            width: FLYER_WIDTH,
            height: FLYER_HEIGHT,
            up_velocity: UP_VELOCITY,
            down_velocity: DOWN_VELOCITY,
            neutral_velocity: NEUTRAL_VELOCITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ObstacleConfig {
    pub width: i32,
    pub height: i32,
    pub gap: i32,
    pub velocity: i32,
    pub spawn_x: i32,
    pub gap_center_min: i32,
    pub gap_center_max: i32,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            width: OBSTACLE_WIDTH,
            height: OBSTACLE_HEIGHT,
            gap: OBSTACLE_GAP,
            velocity: OBSTACLE_VELOCITY,
            spawn_x: OBSTACLE_SPAWN_X,
            gap_center_min: GAP_CENTER_MIN,
            gap_center_max: GAP_CENTER_MAX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field: FieldConfig,
    pub flyer: FlyerConfig,
    pub obstacles: ObstacleConfig,
    pub tick_rate_hz: u32,
    pub scoring: ScoringRule,
    /// Seed for gap placement. `None` lets the caller pick one.
    pub seed: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            flyer: FlyerConfig::default(),
            obstacles: ObstacleConfig::default(),
            tick_rate_hz: TICK_RATE_HZ,
            scoring: ScoringRule::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load and validate a config file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Time between two ticks at the configured cadence.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / self.tick_rate_hz.max(1) as u64)
    }

    /// Check that a session built from this config starts in a valid state.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("field.width", self.field.width as i64)?;
        positive("field.height", self.field.height as i64)?;
        positive("flyer.width", self.flyer.width as i64)?;
        positive("flyer.height", self.flyer.height as i64)?;
        positive("obstacles.width", self.obstacles.width as i64)?;
        positive("obstacles.height", self.obstacles.height as i64)?;
        positive("obstacles.gap", self.obstacles.gap as i64)?;
        positive("obstacles.velocity", self.obstacles.velocity as i64)?;
        positive("tick_rate_hz", self.tick_rate_hz as i64)?;

        let o = &self.obstacles;
        if o.gap_center_min > o.gap_center_max {
            return Err(ConfigError::EmptyGapRange {
                min: o.gap_center_min,
                max: o.gap_center_max,
            });
        }
        // Widened so huge values cannot wrap past the check.
        let gap_bottom = o.gap_center_max as i64 + o.gap as i64;
        if o.gap_center_min < 0 || gap_bottom > self.field.height as i64 {
            return Err(ConfigError::GapOutsideField {
                min: o.gap_center_min,
                max: o.gap_center_max,
                gap: o.gap,
                height: self.field.height,
            });
        }

        // Pairs spawn at least partly right of the left edge. The last move
        // before retirement starts at `x >= -width` and must stay in i32.
        let lowest_x = -(o.width as i64) - o.velocity as i64;
        if o.spawn_x <= -o.width || lowest_x < i32::MIN as i64 {
            return Err(ConfigError::SpawnOutOfRange {
                spawn_x: o.spawn_x,
                width: o.width,
                velocity: o.velocity,
            });
        }

        let limit = self.field.height - self.flyer.height;
        if !(self.flyer.start_y > 0.0 && self.flyer.start_y < limit as f32) {
            return Err(ConfigError::StartOutOfBounds {
                y: self.flyer.start_y,
                limit,
            });
        }

        Ok(())
    }
}

fn positive(name: &'static str, value: i64) -> Result<(), ConfigError> {
    if value > 0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}
