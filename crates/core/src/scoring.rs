//! Scoring - counts obstacle pairs the flyer has passed.
//!
//! Two crossing rules are supported:
//!
//! - [`ScoringRule::ExactMatch`]: a pair scores on every tick its `x` equals
//!   the flyer's reference coordinate. With integer positions this fires at
//!   most once per pair, but only if the pair's velocity lands on the
//!   reference exactly. At the default velocity of 3 and spawn of 300 it
//!   never does (300 - 3k skips 50).
//! - [`ScoringRule::Threshold`]: a pair scores the first tick its `x` is at or
//!   left of the reference, then is marked `passed`. Fires exactly once per
//!   pair for any velocity.

use serde::Deserialize;

use crate::obstacles::ObstaclePair;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringRule {
    ExactMatch,
    #[default]
    Threshold,
}

impl ScoringRule {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "exact" | "exact_match" | "exactmatch" => Some(ScoringRule::ExactMatch),
            "threshold" => Some(ScoringRule::Threshold),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringRule::ExactMatch => "exact_match",
            ScoringRule::Threshold => "threshold",
        }
    }
}

/// Monotonic pass counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTracker {
    score: u32,
    rule: ScoringRule,
}

impl ScoreTracker {
    pub fn new(rule: ScoringRule) -> Self {
        Self { score: 0, rule }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn rule(&self) -> ScoringRule {
        self.rule
    }

    /// Award points for pairs crossing `reference_x`. Returns points gained.
    pub fn update<'a>(
        &mut self,
        obstacles: impl IntoIterator<Item = &'a mut ObstaclePair>,
        reference_x: i32,
    ) -> u32 {
        let mut gained = 0;
        for pair in obstacles {
            let crossed = match self.rule {
                ScoringRule::ExactMatch => pair.x == reference_x,
                ScoringRule::Threshold => !pair.passed && pair.x <= reference_x,
            };
            if crossed {
                pair.passed = true;
                gained += 1;
            }
        }
        self.score = self.score.saturating_add(gained);
        gained
    }
}

impl Default for ScoreTracker {
    fn default() -> Self {
        Self::new(ScoringRule::default())
    }
}
