use tui_flyer::term::RenderThrottle;

#[test]
fn test_render_throttle_renders_first_frame() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
}

#[test]
fn test_render_throttle_static_renders_on_change() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
    assert!(t.should_render(1, 2, true));
}

#[test]
fn test_render_throttle_static_throttles_when_unchanged() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
    assert!(!t.should_render(10, 1, true));
    assert!(!t.should_render(249, 1, true));
    assert!(t.should_render(250, 1, true));
}

#[test]
fn test_render_throttle_dynamic_always_renders() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, false));
    assert!(t.should_render(1, 1, false));
    assert!(t.should_render(2, 1, false));
}

#[test]
fn test_render_throttle_reset_forces_next_frame() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
    assert!(!t.should_render(5, 1, true));
    t.reset();
    assert!(t.should_render(6, 1, true));
}

#[test]
fn test_render_throttle_frozen_game_over_frames() {
    use tui_flyer::core::{GameConfig, GameSession};
    use tui_flyer::types::Direction;

    let mut config = GameConfig::default();
    config.flyer.start_y = 3.0;
    let mut session = GameSession::new(config, 1).unwrap();
    session.tick(Direction::Up);

    let mut t = RenderThrottle::new(250);
    let mut drawn = 0;
    for ms in (0..1000).step_by(33) {
        session.tick(Direction::Down);
        let snap = session.snapshot();
        if t.should_render(ms, snap.fingerprint(), snap.game_over) {
            drawn += 1;
        }
    }
    // First frame plus one redraw per elapsed 250ms window.
    assert!(drawn <= 5, "drew {drawn} frozen frames");
    assert!(drawn >= 2);
}
