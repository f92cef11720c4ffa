//! Obstacle stream - FIFO sequence of obstacle pairs.
//!
//! Pairs are spawned at a fixed horizontal position with a random gap center,
//! slide left by a fixed amount every tick and are retired once fully past
//! the left edge. Retirement and respawn happen together, so the stream is
//! never empty and its length never changes after construction.

use std::collections::VecDeque;

use tracing::debug;

use crate::collision::Rect;
use crate::config::ObstacleConfig;
use crate::rng::SimpleRng;
use crate::types::MAX_OBSTACLES;

/// One top/bottom obstacle sharing a horizontal position and a gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObstaclePair {
    /// Spawn sequence number.
    pub id: u32,
    pub x: i32,
    pub gap_center: i32,
    /// y of the top obstacle rectangle (`gap_center - height`).
    pub top_y: i32,
    /// y of the bottom obstacle rectangle (`gap_center + gap`).
    pub bottom_y: i32,
    pub width: i32,
    pub height: i32,
    /// Set once the flyer's reference point has passed this pair.
    pub passed: bool,
}

impl ObstaclePair {
    pub fn new(id: u32, x: i32, gap_center: i32, cfg: &ObstacleConfig) -> Self {
        Self {
            id,
            x,
            gap_center,
            top_y: gap_center - cfg.height,
            bottom_y: gap_center + cfg.gap,
            width: cfg.width,
            height: cfg.height,
            passed: false,
        }
    }

    pub fn top_rect(&self) -> Rect {
        Rect::new(
            self.x as f32,
            self.top_y as f32,
            self.width as f32,
            self.height as f32,
        )
    }

    pub fn bottom_rect(&self) -> Rect {
        Rect::new(
            self.x as f32,
            self.bottom_y as f32,
            self.width as f32,
            self.height as f32,
        )
    }

    /// Fully past the left edge of the field.
    pub fn is_off_screen(&self) -> bool {
        self.x < -self.width
    }
}

#[derive(Debug, Clone)]
pub struct ObstacleStream {
    pairs: VecDeque<ObstaclePair>,
    cfg: ObstacleConfig,
    rng: SimpleRng,
    next_id: u32,
}

impl ObstacleStream {
    /// Create a stream holding one freshly spawned pair.
    pub fn new(cfg: ObstacleConfig, seed: u32) -> Self {
        let mut stream = Self {
            pairs: VecDeque::with_capacity(MAX_OBSTACLES),
            cfg,
            rng: SimpleRng::new(seed),
            next_id: 0,
        };
        stream.spawn();
        stream
    }

    /// Create a stream from explicit pairs (e.g. a scripted layout).
    ///
    /// Later spawns continue from the given seed.
    pub fn from_pairs(
        cfg: ObstacleConfig,
        seed: u32,
        pairs: impl IntoIterator<Item = ObstaclePair>,
    ) -> Self {
        let pairs: VecDeque<ObstaclePair> = pairs.into_iter().collect();
        assert!(!pairs.is_empty(), "obstacle stream needs at least one pair");
        assert!(pairs.len() <= MAX_OBSTACLES, "too many obstacle pairs");
        let next_id = pairs.iter().map(|p| p.id + 1).max().unwrap_or(0);
        Self {
            pairs,
            cfg,
            rng: SimpleRng::new(seed),
            next_id,
        }
    }

    /// Append a new pair at the spawn position with a random gap center.
    pub fn spawn(&mut self) -> ObstaclePair {
        assert!(self.pairs.len() < MAX_OBSTACLES, "obstacle stream overflow");

        let gap_center = self
            .rng
            .next_inclusive(self.cfg.gap_center_min, self.cfg.gap_center_max);
        let pair = ObstaclePair::new(self.next_id, self.cfg.spawn_x, gap_center, &self.cfg);
        self.next_id = self.next_id.wrapping_add(1);
        self.pairs.push_back(pair);

        debug!(id = pair.id, x = pair.x, gap_center, "obstacle spawned");
        pair
    }

    /// Move every pair left by the configured velocity.
    pub fn advance_all(&mut self) {
        for pair in self.pairs.iter_mut() {
            pair.x -= self.cfg.velocity;
        }
    }

    /// Retire the oldest pair if it is off-screen and spawn its replacement.
    ///
    /// Only the oldest pair is ever checked. Returns the retired pair.
    pub fn retire_and_respawn(&mut self) -> Option<ObstaclePair> {
        if !self.nearest().is_off_screen() {
            return None;
        }
        let retired = self.pairs.pop_front()?;
        debug!(id = retired.id, passed = retired.passed, "obstacle retired");
        self.spawn();
        Some(retired)
    }

    /// The oldest (leftmost) pair.
    pub fn nearest(&self) -> &ObstaclePair {
        self.pairs
            .front()
            .expect("obstacle stream is never empty")
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObstaclePair> {
        self.pairs.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ObstaclePair> {
        self.pairs.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn config(&self) -> &ObstacleConfig {
        &self.cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stream_has_one_pair_at_spawn() {
        let stream = ObstacleStream::new(ObstacleConfig::default(), 1);
        assert_eq!(stream.len(), 1);

        let pair = stream.nearest();
        assert_eq!(pair.id, 0);
        assert_eq!(pair.x, 300);
        assert!(!pair.passed);
    }

    #[test]
    fn test_pair_geometry_follows_gap_center() {
        let cfg = ObstacleConfig::default();
        let pair = ObstaclePair::new(0, 300, 200, &cfg);

        assert_eq!(pair.top_y, 200 - 320);
        assert_eq!(pair.bottom_y, 200 + 170);
        assert_eq!(pair.top_rect().bottom(), 200.0);
        assert_eq!(pair.bottom_rect().y, 370.0);
    }

    #[test]
    fn test_spawned_gap_center_in_range() {
        let mut stream = ObstacleStream::new(ObstacleConfig::default(), 4242);
        for _ in 0..500 {
            let pair = stream.spawn();
            assert!((150..=300).contains(&pair.gap_center));
            stream.pairs.pop_front();
        }
    }

    #[test]
    fn test_advance_all_moves_every_pair_equally() {
        let cfg = ObstacleConfig::default();
        let pairs = [
            ObstaclePair::new(0, 100, 200, &cfg),
            ObstaclePair::new(1, 250, 200, &cfg),
        ];
        let mut stream = ObstacleStream::from_pairs(cfg, 1, pairs);

        stream.advance_all();

        let xs: Vec<i32> = stream.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![97, 247]);
    }

    #[test]
    fn test_retire_waits_until_fully_off_screen() {
        let cfg = ObstacleConfig::default();
        let mut stream = ObstacleStream::from_pairs(cfg.clone(), 1, [ObstaclePair::new(0, -52, 200, &cfg)]);

        // x == -width is still touching the edge.
        assert_eq!(stream.retire_and_respawn(), None);
        assert_eq!(stream.nearest().id, 0);

        stream.advance_all();
        let retired = stream.retire_and_respawn().unwrap();
        assert_eq!(retired.id, 0);
        assert_eq!(stream.len(), 1);
        assert_eq!(stream.nearest().id, 1);
        assert_eq!(stream.nearest().x, 300);
    }

    #[test]
    fn test_only_oldest_pair_is_retired() {
        let cfg = ObstacleConfig::default();
        let pairs = [
            ObstaclePair::new(0, -60, 200, &cfg),
            ObstaclePair::new(1, -60, 200, &cfg),
        ];
        let mut stream = ObstacleStream::from_pairs(cfg, 1, pairs);

        assert_eq!(stream.retire_and_respawn().map(|p| p.id), Some(0));
        assert_eq!(stream.len(), 2);

        let ids: Vec<u32> = stream.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_stream_is_never_empty_over_many_ticks() {
        let mut stream = ObstacleStream::new(ObstacleConfig::default(), 3);
        let mut retired = 0;
        for _ in 0..5_000 {
            stream.advance_all();
            if stream.retire_and_respawn().is_some() {
                retired += 1;
            }
            assert_eq!(stream.len(), 1);
            assert!(!stream.is_empty());
        }
        assert!(retired > 0);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let mut a = ObstacleStream::new(ObstacleConfig::default(), 77);
        let mut b = ObstacleStream::new(ObstacleConfig::default(), 77);
        for _ in 0..20 {
            assert_eq!(a.spawn(), b.spawn());
        }
    }
}
