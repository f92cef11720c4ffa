//! Core simulation - pure, deterministic, and testable
//!
//! This crate owns every piece of mutable game state and the rules that
//! update it. It has no dependency on terminals, clocks or input devices:
//!
//! - **Deterministic**: the same seed and the same direction sequence produce
//!   identical sessions
//! - **Testable**: every phase (flyer, obstacles, collision, scoring) can be
//!   driven in isolation
//! - **Allocation-free ticks**: once a session is built, [`GameSession::tick`]
//!   and [`GameSession::snapshot_into`] do not touch the heap
//!
//! # Module Structure
//!
//! - [`config`]: startup constants, TOML loading and validation
//! - [`rng`]: seedable LCG used for gap placement
//! - [`flyer`]: vertical position and per-tick velocity of the player entity
//! - [`obstacles`]: FIFO stream of obstacle pairs
//! - [`collision`]: rectangle overlap and field bounds predicate
//! - [`scoring`]: pass detection (exact-match or threshold crossing)
//! - [`session`]: the `GameSession` aggregate and its Playing/GameOver machine
//! - [`snapshot`]: read-only per-tick state handed to presentation
//!
//! # Tick order
//!
//! While playing, each tick applies the directional signal to the flyer,
//! advances it, advances and recycles obstacles, checks for a terminal
//! collision and finally updates the score. A collision ends the session on
//! that tick and no points are awarded for it. After that, ticks are no-ops.
//!
//! # Example
//!
//! ```
//! use tui_flyer_core::{GameConfig, GameSession};
//! use tui_flyer_types::Direction;
//!
//! let mut session = GameSession::new(GameConfig::default(), 7).unwrap();
//! for _ in 0..3 {
//!     session.tick(Direction::Neutral);
//! }
//! assert_eq!(session.flyer().y, 253.0);
//! assert!(!session.game_over());
//! ```

pub mod collision;
pub mod config;
pub mod flyer;
pub mod obstacles;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use tui_flyer_types as types;

pub use collision::{classify_collision, detect_collision, Collision, Rect};
pub use config::{ConfigError, FieldConfig, FlyerConfig, GameConfig, ObstacleConfig};
pub use flyer::{Flyer, Impulses};
pub use obstacles::{ObstaclePair, ObstacleStream};
pub use rng::SimpleRng;
pub use scoring::{ScoreTracker, ScoringRule};
pub use session::{GameSession, TickOutcome};
pub use snapshot::{GameSnapshot, ObstacleSnapshot};
