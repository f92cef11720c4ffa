//! The fixed-cadence update/present cycle.

use tracing::{debug, info};

use tui_flyer_core::{GameSession, GameSnapshot};
use tui_flyer_input::DirectionSource;

use crate::pacer::Pacer;
use crate::sink::FrameSink;

/// Why [`GameLoop::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// The input source requested quit.
    Quit,
    /// The configured iteration limit was reached.
    TickLimit,
    /// The session ended and the loop was told not to linger on it.
    GameOver,
}

impl LoopExit {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoopExit::Quit => "quit",
            LoopExit::TickLimit => "tick_limit",
            LoopExit::GameOver => "game_over",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoopReport {
    pub exit: LoopExit,
    /// Completed iterations (each one presented a frame).
    pub iterations: u64,
    /// Session state at exit.
    pub snapshot: GameSnapshot,
}

pub struct GameLoop<S, K, P> {
    source: S,
    sink: K,
    pacer: P,
    max_iterations: Option<u64>,
    exit_on_game_over: bool,
    iterations: u64,
    snapshot: GameSnapshot,
}

impl<S, K, P> GameLoop<S, K, P>
where
    S: DirectionSource,
    K: FrameSink,
    P: Pacer,
{
    pub fn new(source: S, sink: K, pacer: P) -> Self {
        Self {
            source,
            sink,
            pacer,
            max_iterations: None,
            exit_on_game_over: false,
            iterations: 0,
            snapshot: GameSnapshot::default(),
        }
    }

    /// Stop after `n` iterations.
    pub fn with_max_iterations(mut self, n: u64) -> Self {
        self.max_iterations = Some(n);
        self
    }

    /// Return [`LoopExit::GameOver`] once the final frame has been presented,
    /// instead of presenting it until quit.
    pub fn exit_on_game_over(mut self, exit: bool) -> Self {
        self.exit_on_game_over = exit;
        self
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn into_parts(self) -> (S, K, P) {
        (self.source, self.sink, self.pacer)
    }

    /// Run one iteration without pacing.
    ///
    /// Quit is checked before anything is updated; on quit nothing is
    /// presented. While the session is over the source is not polled for a
    /// direction and the same frame is presented again.
    pub fn step(&mut self, session: &mut GameSession) -> Option<LoopExit> {
        if self.source.quit_requested() {
            return Some(LoopExit::Quit);
        }

        if session.game_over() {
            if self.exit_on_game_over {
                return Some(LoopExit::GameOver);
            }
        } else {
            let direction = self.source.poll();
            let outcome = session.tick(direction);
            if outcome.retired {
                debug!(tick = session.tick_count(), "obstacle recycled");
            }
        }

        session.snapshot_into(&mut self.snapshot);
        self.sink.present(&self.snapshot);
        self.iterations += 1;
        None
    }

    /// Run until quit, the iteration limit, or (if enabled) game over.
    pub fn run(&mut self, session: &mut GameSession) -> LoopReport {
        info!(seed = session.seed(), "game loop started");

        let exit = loop {
            if let Some(max) = self.max_iterations {
                if self.iterations >= max {
                    break LoopExit::TickLimit;
                }
            }
            if let Some(exit) = self.step(session) {
                break exit;
            }
            self.pacer.wait();
        };

        info!(
            exit = exit.as_str(),
            iterations = self.iterations,
            score = session.score(),
            "game loop finished"
        );

        LoopReport {
            exit,
            iterations: self.iterations,
            snapshot: session.snapshot(),
        }
    }
}
