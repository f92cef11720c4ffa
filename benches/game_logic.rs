use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_flyer::core::{
    detect_collision, Flyer, GameConfig, GameSession, GameSnapshot, ObstacleConfig, ObstaclePair,
    ObstacleStream,
};
use tui_flyer::term::{FrameBuffer, GameView, Viewport};
use tui_flyer::types::Direction;

/// Gap wide enough that a hovering flyer never collides.
fn endless_session(seed: u32) -> GameSession {
    let mut config = GameConfig::default();
    config.obstacles.gap = 400;
    config.obstacles.gap_center_min = 50;
    config.obstacles.gap_center_max = 100;
    GameSession::new(config, seed).unwrap()
}

fn bench_tick(c: &mut Criterion) {
    let mut session = endless_session(12345);
    let mut t = 0u32;

    c.bench_function("session_tick", |b| {
        b.iter(|| {
            t = t.wrapping_add(1);
            let dir = if t % 6 == 0 {
                Direction::Up
            } else {
                Direction::Neutral
            };
            black_box(session.tick(black_box(dir)));
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let cfg = ObstacleConfig::default();
    let mut stream =
        ObstacleStream::from_pairs(cfg.clone(), 12345, [ObstaclePair::new(0, -100, 200, &cfg)]);

    c.bench_function("retire_and_respawn", |b| {
        b.iter(|| {
            // Push the fresh pair off-screen again so every iteration recycles.
            for pair in stream.iter_mut() {
                pair.x = -100;
            }
            black_box(stream.retire_and_respawn());
        })
    });
}

fn bench_collision(c: &mut Criterion) {
    let cfg = ObstacleConfig::default();
    let stream = ObstacleStream::from_pairs(cfg.clone(), 1, [ObstaclePair::new(0, 60, 200, &cfg)]);
    let flyer = Flyer::new(50, 250.0, 32, 32);

    c.bench_function("detect_collision", |b| {
        b.iter(|| black_box(detect_collision(black_box(&flyer), &stream, 512)))
    });
}

fn bench_render(c: &mut Criterion) {
    let session = endless_session(7);
    let mut snap = GameSnapshot::default();
    session.snapshot_into(&mut snap);
    let view = GameView::default();
    let vp = Viewport::new(120, 40);
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    c.bench_function("render_into_120x40", |b| {
        b.iter(|| view.render_into(black_box(&snap), vp, &mut fb))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_spawn,
    bench_collision,
    bench_render
);
criterion_main!(benches);
