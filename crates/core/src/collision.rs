//! Collision and bounds checking.
//!
//! Overlap uses closed intervals: rectangles whose edges exactly touch count
//! as colliding. The field bounds are inclusive as well, so `y <= 0` and
//! `y >= field_height - flyer_height` both end the session.

use crate::flyer::Flyer;
use crate::obstacles::ObstacleStream;

/// Axis-aligned rectangle in field pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Closed-interval overlap test. Symmetric in its arguments.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x <= other.right()
            && other.x <= self.right()
            && self.y <= other.bottom()
            && other.y <= self.bottom()
    }
}

/// What ended the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Obstacle { id: u32 },
    TopBound,
    BottomBound,
}

impl Collision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collision::Obstacle { .. } => "obstacle",
            Collision::TopBound => "top_bound",
            Collision::BottomBound => "bottom_bound",
        }
    }
}

/// Find the first terminal contact, obstacles before bounds.
pub fn classify_collision(
    flyer: &Flyer,
    obstacles: &ObstacleStream,
    field_height: i32,
) -> Option<Collision> {
    let body = flyer.rect();

    for pair in obstacles.iter() {
        if body.intersects(&pair.top_rect()) || body.intersects(&pair.bottom_rect()) {
            return Some(Collision::Obstacle { id: pair.id });
        }
    }

    if flyer.y <= 0.0 {
        return Some(Collision::TopBound);
    }
    if flyer.y >= (field_height - flyer.height) as f32 {
        return Some(Collision::BottomBound);
    }

    None
}

/// Pure predicate: does the flyer touch an obstacle or a field bound?
pub fn detect_collision(flyer: &Flyer, obstacles: &ObstacleStream, field_height: i32) -> bool {
    classify_collision(flyer, obstacles, field_height).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ObstacleConfig;
    use crate::obstacles::ObstaclePair;

    fn stream_with(pair: ObstaclePair) -> ObstacleStream {
        ObstacleStream::from_pairs(ObstacleConfig::default(), 1, [pair])
    }

    fn pair_at(x: i32, gap_center: i32) -> ObstaclePair {
        ObstaclePair::new(7, x, gap_center, &ObstacleConfig::default())
    }

    #[test]
    fn test_rect_edge_touch_is_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 5.0, 5.0);
        let below = Rect::new(0.0, 10.0, 5.0, 5.0);
        let apart = Rect::new(10.5, 0.0, 5.0, 5.0);

        assert!(a.intersects(&right));
        assert!(a.intersects(&below));
        assert!(!a.intersects(&apart));
    }

    #[test]
    fn test_rect_overlap_is_symmetric() {
        let rects = [
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(5.0, 5.0, 10.0, 10.0),
            Rect::new(10.0, 0.0, 1.0, 1.0),
            Rect::new(20.0, 20.0, 3.0, 3.0),
        ];
        for a in &rects {
            for b in &rects {
                assert_eq!(a.intersects(b), b.intersects(a));
            }
        }
    }

    #[test]
    fn test_clear_path_through_gap() {
        // Gap spans [200, 370); flyer occupies [250, 282] vertically.
        let flyer = Flyer::new(50, 250.0, 32, 32);
        let stream = stream_with(pair_at(60, 200));
        assert_eq!(classify_collision(&flyer, &stream, 512), None);
    }

    #[test]
    fn test_hits_top_obstacle_edge() {
        // Top obstacle bottom edge is exactly at y = gap_center = 250.
        let flyer = Flyer::new(50, 250.0, 32, 32);
        let stream = stream_with(pair_at(60, 250));
        assert_eq!(
            classify_collision(&flyer, &stream, 512),
            Some(Collision::Obstacle { id: 7 })
        );
    }

    #[test]
    fn test_hits_bottom_obstacle_edge() {
        // Bottom obstacle starts at 100 + 170 = 270; flyer bottom at 238 + 32.
        let flyer = Flyer::new(50, 238.0, 32, 32);
        let stream = stream_with(pair_at(60, 100));
        assert!(detect_collision(&flyer, &stream, 512));

        let flyer = Flyer::new(50, 237.0, 32, 32);
        assert!(!detect_collision(&flyer, &stream, 512));
    }

    #[test]
    fn test_horizontal_edge_touch() {
        // Flyer spans x in [50, 82]; obstacle at x = 82 touches it.
        let flyer = Flyer::new(50, 10.0, 32, 32);
        let stream = stream_with(pair_at(82, 200));
        assert!(detect_collision(&flyer, &stream, 512));

        let stream = stream_with(pair_at(83, 200));
        assert!(!detect_collision(&flyer, &stream, 512));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let stream = stream_with(pair_at(600, 200));

        let at_top = Flyer::new(50, 0.0, 32, 32);
        assert_eq!(
            classify_collision(&at_top, &stream, 512),
            Some(Collision::TopBound)
        );

        let just_below_top = Flyer::new(50, 1.0, 32, 32);
        assert_eq!(classify_collision(&just_below_top, &stream, 512), None);

        let just_above_floor = Flyer::new(50, 479.0, 32, 32);
        assert_eq!(classify_collision(&just_above_floor, &stream, 512), None);

        let at_floor = Flyer::new(50, 480.0, 32, 32);
        assert_eq!(
            classify_collision(&at_floor, &stream, 512),
            Some(Collision::BottomBound)
        );
    }

    #[test]
    fn test_no_collision_strictly_inside_bounds() {
        let stream = stream_with(pair_at(600, 200));
        for y in 1..480 {
            let flyer = Flyer::new(50, y as f32, 32, 32);
            assert!(!detect_collision(&flyer, &stream, 512), "y = {y}");
        }
    }
}
