use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use arrayvec::ArrayVec;

use crate::obstacles::ObstaclePair;
use crate::types::{FIELD_HEIGHT, FIELD_WIDTH, MAX_OBSTACLES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObstacleSnapshot {
    pub id: u32,
    pub x: i32,
    pub top_y: i32,
    pub bottom_y: i32,
    pub width: i32,
    pub height: i32,
    pub passed: bool,
}

impl From<&ObstaclePair> for ObstacleSnapshot {
    fn from(value: &ObstaclePair) -> Self {
        Self {
            id: value.id,
            x: value.x,
            top_y: value.top_y,
            bottom_y: value.bottom_y,
            width: value.width,
            height: value.height,
            passed: value.passed,
        }
    }
}

/// Read-only per-tick state handed to presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub tick: u64,
    pub flyer_x: i32,
    pub flyer_y: f32,
    pub flyer_velocity: i32,
    pub flyer_width: i32,
    pub flyer_height: i32,
    /// Ordered oldest (leftmost) first.
    pub obstacles: ArrayVec<ObstacleSnapshot, MAX_OBSTACLES>,
    pub score: u32,
    pub game_over: bool,
    pub field_width: i32,
    pub field_height: i32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.tick = 0;
        self.flyer_x = 0;
        self.flyer_y = 0.0;
        self.flyer_velocity = 0;
        self.flyer_width = 0;
        self.flyer_height = 0;
        self.obstacles.clear();
        self.score = 0;
        self.game_over = false;
        self.field_width = FIELD_WIDTH;
        self.field_height = FIELD_HEIGHT;
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Cheap content hash, used to skip redrawing unchanged frames.
    pub fn fingerprint(&self) -> u64 {
        let mut h = DefaultHasher::new();
        self.tick.hash(&mut h);
        self.flyer_x.hash(&mut h);
        self.flyer_y.to_bits().hash(&mut h);
        self.flyer_velocity.hash(&mut h);
        self.obstacles.as_slice().hash(&mut h);
        self.score.hash(&mut h);
        self.game_over.hash(&mut h);
        self.field_width.hash(&mut h);
        self.field_height.hash(&mut h);
        h.finish()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            tick: 0,
            flyer_x: 0,
            flyer_y: 0.0,
            flyer_velocity: 0,
            flyer_width: 0,
            flyer_height: 0,
            obstacles: ArrayVec::new(),
            score: 0,
            game_over: false,
            field_width: 0,
            field_height: 0,
        };
        s.clear();
        s
    }
}
