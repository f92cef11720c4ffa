//! Game session - the single owner of mutable game state.
//!
//! `GameSession` ties together the flyer, the obstacle stream and the score
//! tracker, and runs the Playing/GameOver state machine. It knows nothing
//! about wall-clock time: one call to [`GameSession::tick`] is one tick.

use tracing::info;

use crate::collision::{classify_collision, Collision};
use crate::config::{ConfigError, GameConfig};
use crate::flyer::Flyer;
use crate::obstacles::ObstacleStream;
use crate::scoring::ScoreTracker;
use crate::snapshot::{GameSnapshot, ObstacleSnapshot};
use crate::types::{Direction, GamePhase};

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Phase after the tick.
    pub phase: GamePhase,
    /// False when the session was already over and nothing moved.
    pub advanced: bool,
    pub scored: u32,
    pub retired: bool,
    pub collision: Option<Collision>,
}

impl TickOutcome {
    fn frozen() -> Self {
        Self {
            phase: GamePhase::GameOver,
            advanced: false,
            scored: 0,
            retired: false,
            collision: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    seed: u32,
    flyer: Flyer,
    obstacles: ObstacleStream,
    score: ScoreTracker,
    phase: GamePhase,
    tick: u64,
}

impl GameSession {
    /// Build a session from a validated config.
    pub fn new(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        let obstacles = ObstacleStream::new(config.obstacles.clone(), seed);
        Self::with_obstacles(config, seed, obstacles)
    }

    /// Build a session around an explicit obstacle layout.
    ///
    /// The stream must have been built from `config.obstacles`.
    pub fn with_obstacles(
        config: GameConfig,
        seed: u32,
        obstacles: ObstacleStream,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if obstacles.config() != &config.obstacles {
            return Err(ConfigError::StreamMismatch);
        }
        Ok(Self {
            flyer: Flyer::from_config(&config.flyer),
            score: ScoreTracker::new(config.scoring),
            obstacles,
            config,
            seed,
            phase: GamePhase::Playing,
            tick: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn flyer(&self) -> &Flyer {
        &self.flyer
    }

    pub fn obstacles(&self) -> &ObstacleStream {
        &self.obstacles
    }

    pub fn score(&self) -> u32 {
        self.score.score()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase.is_over()
    }

    /// Number of ticks that advanced the simulation.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Run one simulation tick with the given directional signal.
    ///
    /// Once the session is over this is a no-op.
    pub fn tick(&mut self, direction: Direction) -> TickOutcome {
        if self.phase.is_over() {
            return TickOutcome::frozen();
        }
        self.tick += 1;

        self.flyer.apply_directional_signal(direction);
        self.flyer.advance();

        self.obstacles.advance_all();
        let retired = self.obstacles.retire_and_respawn().is_some();

        if let Some(collision) =
            classify_collision(&self.flyer, &self.obstacles, self.config.field.height)
        {
            self.phase = GamePhase::GameOver;
            info!(
                tick = self.tick,
                cause = collision.as_str(),
                y = self.flyer.y,
                score = self.score.score(),
                "game over"
            );
            return TickOutcome {
                phase: self.phase,
                advanced: true,
                scored: 0,
                retired,
                collision: Some(collision),
            };
        }

        let scored = self
            .score
            .update(self.obstacles.iter_mut(), self.flyer.x);
        if scored > 0 {
            info!(tick = self.tick, score = self.score.score(), "obstacle passed");
        }

        TickOutcome {
            phase: self.phase,
            advanced: true,
            scored,
            retired,
            collision: None,
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.tick = self.tick;
        out.flyer_x = self.flyer.x;
        out.flyer_y = self.flyer.y;
        out.flyer_velocity = self.flyer.velocity;
        out.flyer_width = self.flyer.width;
        out.flyer_height = self.flyer.height;
        out.obstacles.clear();
        for pair in self.obstacles.iter() {
            out.obstacles.push(ObstacleSnapshot::from(pair));
        }
        out.score = self.score.score();
        out.game_over = self.phase.is_over();
        out.field_width = self.config.field.width;
        out.field_height = self.config.field.height;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
