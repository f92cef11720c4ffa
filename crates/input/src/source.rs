//! The input capability and the scripted backend.

use thiserror::Error;

use crate::types::Direction;

/// Produces one directional signal per tick.
///
/// `poll` must return promptly (well under one tick interval). With nothing
/// to report it returns `Direction::Neutral`.
pub trait DirectionSource {
    fn poll(&mut self) -> Direction;

    /// External quit request, checked once per tick before the update.
    fn quit_requested(&mut self) -> bool {
        false
    }
}

impl<S: DirectionSource + ?Sized> DirectionSource for &mut S {
    fn poll(&mut self) -> Direction {
        (**self).poll()
    }

    fn quit_requested(&mut self) -> bool {
        (**self).quit_requested()
    }
}

impl<S: DirectionSource + ?Sized> DirectionSource for Box<S> {
    fn poll(&mut self) -> Direction {
        (**self).poll()
    }

    fn quit_requested(&mut self) -> bool {
        (**self).quit_requested()
    }
}

/// Always neutral: the flyer just drifts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralSource;

impl DirectionSource for NeutralSource {
    fn poll(&mut self) -> Direction {
        Direction::Neutral
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("invalid script character {ch:?} at position {pos}")]
    InvalidChar { ch: char, pos: usize },
}

/// Replays a fixed sequence of directions, then reports neutral.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: Vec<Direction>,
    pos: usize,
    polls: u64,
    quit_when_exhausted: bool,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_directions(directions: impl IntoIterator<Item = Direction>) -> Self {
        Self {
            script: directions.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Parse a script: `u`/`^` up, `d`/`v` down, `n`/`.` neutral.
    ///
    /// Whitespace is ignored.
    pub fn parse(script: &str) -> Result<Self, ScriptError> {
        let mut directions = Vec::with_capacity(script.len());
        for (pos, ch) in script.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let dir = Direction::from_char(ch).ok_or(ScriptError::InvalidChar { ch, pos })?;
            directions.push(dir);
        }
        Ok(Self::from_directions(directions))
    }

    /// Append `count` repetitions of `direction`.
    pub fn then(mut self, direction: Direction, count: usize) -> Self {
        self.script.extend(std::iter::repeat(direction).take(count));
        self
    }

    /// Request quit once every scripted direction has been consumed.
    pub fn quit_when_exhausted(mut self) -> Self {
        self.quit_when_exhausted = true;
        self
    }

    pub fn len(&self) -> usize {
        self.script.len()
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.script.len().saturating_sub(self.pos)
    }

    /// Total number of `poll` calls so far.
    pub fn polls(&self) -> u64 {
        self.polls
    }
}

impl DirectionSource for ScriptedSource {
    fn poll(&mut self) -> Direction {
        self.polls += 1;
        match self.script.get(self.pos) {
            Some(&dir) => {
                self.pos += 1;
                dir
            }
            None => Direction::Neutral,
        }
    }

    fn quit_requested(&mut self) -> bool {
        self.quit_when_exhausted && self.remaining() == 0
    }
}
