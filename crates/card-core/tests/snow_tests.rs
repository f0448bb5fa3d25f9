// Host-side tests for the ambient snow field and click bursts.

use card_core::*;

#[test]
fn population_matches_viewport_area() {
    // 1000 * 800 / 8000 = 100 flakes exactly
    let field = SnowField::new(1000.0, 800.0, 7);
    assert_eq!(field.flakes.len(), 100);
    for f in &field.flakes {
        assert!(f.x >= 0.0 && f.x < 1000.0);
        assert!(f.y >= 0.0 && f.y < 800.0);
        assert_eq!(f.vx, 0.0);
        assert!(f.vy >= FLAKE_FALL_MIN && f.vy < FLAKE_FALL_MIN + FLAKE_FALL_SPAN);
        assert!(f.size >= FLAKE_SIZE_MIN && f.size < FLAKE_SIZE_MIN + FLAKE_SIZE_SPAN);
        assert!(f.opacity >= FLAKE_OPACITY_MIN);
        assert!(f.opacity < FLAKE_OPACITY_MIN + FLAKE_OPACITY_SPAN);
        assert!(f.drift >= FLAKE_DRIFT_MIN && f.drift < FLAKE_DRIFT_MIN + FLAKE_DRIFT_SPAN);
    }
}

#[test]
fn resize_regenerates_whole_population() {
    let mut field = SnowField::new(640.0, 480.0, 7);
    assert_eq!(field.flakes.len(), 38); // floor(307200 / 8000)
    field.resize(1920.0, 1080.0);
    assert_eq!(field.flakes.len(), 259); // floor(2073600 / 8000)
    for f in &field.flakes {
        assert!(f.x >= 0.0 && f.x < 1920.0);
        assert!(f.y >= 0.0 && f.y < 1080.0);
    }
}

#[test]
fn same_seed_builds_identical_fields() {
    let a = SnowField::new(800.0, 600.0, 42);
    let b = SnowField::new(800.0, 600.0, 42);
    assert_eq!(a.flakes.len(), b.flakes.len());
    for (fa, fb) in a.flakes.iter().zip(&b.flakes) {
        assert_eq!(fa.x, fb.x);
        assert_eq!(fa.y, fb.y);
        assert_eq!(fa.vy, fb.vy);
        assert_eq!(fa.phase, fb.phase);
    }
}

#[test]
fn fallen_flake_recycles_to_top() {
    let mut field = SnowField::new(1000.0, 800.0, 1);
    field.flakes[0].y = 799.9;
    field.flakes[0].vy = 5.0;
    field.advance(16.0);
    let f = &field.flakes[0];
    assert_eq!(f.y, RECYCLE_Y);
    assert_eq!(f.vx, 0.0);
    assert!(f.x >= 0.0 && f.x < 1000.0);
}

#[test]
fn flake_wraps_across_side_edges() {
    let mut field = SnowField::new(1000.0, 800.0, 1);
    field.flakes[0].x = 1500.0;
    field.flakes[0].y = 100.0;
    field.advance(16.0);
    assert_eq!(field.flakes[0].x, 0.0);

    field.flakes[1].x = -5.0;
    field.flakes[1].y = 100.0;
    field.flakes[1].vx = 0.0;
    field.advance(32.0);
    assert_eq!(field.flakes[1].x, 1000.0);
}

#[test]
fn pointer_repels_nearby_flakes() {
    let mut field = SnowField::new(1000.0, 800.0, 1);
    field.set_pointer(100.0, 100.0);
    field.flakes[0].x = 110.0;
    field.flakes[0].y = 100.0;
    field.flakes[0].vx = 0.0;
    field.advance(16.0);
    // flake is right of the pointer, so the impulse points further right
    assert!(field.flakes[0].vx > 0.0);
}

#[test]
fn flake_exactly_under_pointer_stays_finite() {
    let mut field = SnowField::new(1000.0, 800.0, 1);
    field.set_pointer(200.0, 200.0);
    field.flakes[0].x = 200.0;
    field.flakes[0].y = 200.0;
    field.advance(16.0);
    for f in &field.flakes {
        assert!(f.x.is_finite() && f.y.is_finite());
        assert!(f.vx.is_finite() && f.vy.is_finite());
    }
}

#[test]
fn pointer_defaults_off_screen() {
    let mut field = SnowField::new(1000.0, 800.0, 1);
    let before: Vec<f32> = field.flakes.iter().map(|f| f.vx).collect();
    field.advance(16.0);
    // no pointermove yet: nothing gets a repulsion impulse, vx stays at
    // zero after damping
    for (f, vx0) in field.flakes.iter().zip(before) {
        assert_eq!(f.vx, vx0 * FLAKE_DRAG);
    }
}

#[test]
fn click_spawns_forty_particles_at_origin() {
    let mut field = SnowField::new(1000.0, 800.0, 5);
    field.spawn_burst(50.0, 50.0);
    assert_eq!(field.bursts.len(), 1);
    let burst = &field.bursts[0];
    assert_eq!(burst.particles.len(), BURST_PARTICLES);
    for p in &burst.particles {
        assert_eq!(p.x, 50.0);
        assert_eq!(p.y, 50.0);
        assert_eq!(p.opacity, 1.0);
        let speed = (p.vx * p.vx + p.vy * p.vy).sqrt();
        assert!(speed >= BURST_SPEED_MIN - 1e-4);
        assert!(speed < BURST_SPEED_MIN + BURST_SPEED_SPAN + 1e-4);
        assert!(p.shade < BURST_SHADES.len());
    }
}

#[test]
fn burst_fades_linearly() {
    let mut field = SnowField::new(1000.0, 800.0, 5);
    field.spawn_burst(500.0, 400.0);
    for frame in 0..10 {
        field.advance(frame as f64 * 16.0);
    }
    for p in &field.bursts[0].particles {
        assert!((p.opacity - (1.0 - 10.0 * BURST_FADE)).abs() < 1e-5);
    }
}

#[test]
fn burst_expires_within_bounded_frames() {
    let mut field = SnowField::new(1000.0, 800.0, 5);
    field.spawn_burst(50.0, 50.0);
    for frame in 0..50 {
        field.advance(frame as f64 * 16.0);
    }
    assert_eq!(field.bursts.len(), 1);
    // opacity decays 0.01/frame from 1.0, so 110 frames is more than enough
    for frame in 50..110 {
        field.advance(frame as f64 * 16.0);
    }
    assert!(field.bursts.is_empty());
}
