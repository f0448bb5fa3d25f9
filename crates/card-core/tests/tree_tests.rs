// Host-side tests for the rotating tree scene and its projection math.

use std::f32::consts::PI;

use card_core::*;

#[test]
fn populations_have_fixed_sizes() {
    let scene = TreeScene::new(42);
    assert_eq!(scene.particles.len(), TREE_PARTICLES);
    assert_eq!(scene.lights.len(), LIGHT_COUNT);
    assert_eq!(scene.ornaments.len(), ORNAMENT_COUNT);
    assert_eq!(scene.rotation, 0.0);
}

#[test]
fn cone_radius_tapers_linearly() {
    assert_eq!(cone_radius(0.0, TREE_MAX_RADIUS), 160.0);
    assert_eq!(cone_radius(TREE_HEIGHT, TREE_MAX_RADIUS), 0.0);
    assert!((cone_radius(225.0, TREE_MAX_RADIUS) - 80.0).abs() < 1e-4);
}

#[test]
fn particles_stay_inside_the_cone() {
    let scene = TreeScene::new(42);
    for p in &scene.particles {
        assert!(p.y >= 0.0 && p.y < TREE_HEIGHT);
        assert!(p.radius <= cone_radius(p.y, TREE_MAX_RADIUS) + 1e-4);
    }
}

#[test]
fn ornaments_sit_exactly_on_the_cone() {
    let scene = TreeScene::new(42);
    for o in &scene.ornaments {
        assert!(o.y >= ORNAMENT_Y_MIN && o.y < ORNAMENT_Y_MIN + ORNAMENT_Y_SPAN);
        assert!((o.radius - cone_radius(o.y, TREE_MAX_RADIUS)).abs() < 1e-4);
    }
}

#[test]
fn light_string_spirals_down_the_tree() {
    let scene = TreeScene::new(42);
    assert_eq!(scene.lights[0].phase, 0.0);
    assert_eq!(scene.lights[0].y, 0.0);
    let last = scene.lights.last().unwrap();
    let expect = (LIGHT_COUNT as f32 - 1.0) / LIGHT_COUNT as f32 * LIGHT_SPIRAL_RADIANS;
    assert!((last.phase - expect).abs() < 1e-3);
    // hue cycle repeats by index
    assert_eq!(scene.lights[0].hue, scene.lights[LIGHT_HUES.len()].hue);
    assert_eq!(scene.lights[1].hue, scene.lights[1 + LIGHT_HUES.len()].hue);
}

#[test]
fn rotation_advances_by_fixed_step() {
    let mut scene = TreeScene::new(42);
    scene.advance();
    scene.advance();
    scene.advance();
    assert!((scene.rotation - 3.0 * ROTATION_STEP).abs() < 1e-6);
}

#[test]
fn advance_never_touches_radius_or_height() {
    let mut scene = TreeScene::new(42);
    let snapshot: Vec<(f32, f32)> = scene.particles.iter().map(|p| (p.radius, p.y)).collect();
    for _ in 0..100 {
        scene.advance();
    }
    for (p, (radius, y)) in scene.particles.iter().zip(snapshot) {
        assert_eq!(p.radius, radius);
        assert_eq!(p.y, y);
    }
}

#[test]
fn screen_y_ignores_rotation() {
    for rotation in [0.0, 0.7, PI, 10.0] {
        let pr = project(0.3, 50.0, 120.0, rotation);
        assert_eq!(pr.screen_y, SCENE_HEIGHT - BASE_MARGIN - 120.0);
    }
}

#[test]
fn depth_cue_stays_in_band() {
    // widest orbit: z in [-160, 160] maps to depth in [0.1, 0.9]
    for step in 0..100 {
        let rotation = step as f32 * 0.1;
        let pr = project(0.0, TREE_MAX_RADIUS, 0.0, rotation);
        assert!(pr.depth >= 0.1 - 1e-4 && pr.depth <= 0.9 + 1e-4);
    }
}

#[test]
fn ornament_at_half_turn_still_renders() {
    // angle 0 rotated by pi lands at z ~ 0, on the near side of the cull line
    let o = Ornament {
        angle: 0.0,
        y: 100.0,
        radius: cone_radius(100.0, TREE_MAX_RADIUS),
        kind: OrnamentKind::Gift,
        tint: "#ffffff",
    };
    let pr = project(o.angle, o.radius, o.y, PI);
    assert!(pr.z.abs() < 1e-4);
    assert!(!o.culled(PI));
}

#[test]
fn twinkle_opacity_stays_in_envelope() {
    let mut scene = TreeScene::new(42);
    for _ in 0..200 {
        scene.advance();
        for p in scene.particles.iter().take(50) {
            for depth in [0.1, 0.5, 0.9] {
                let o = p.opacity(depth);
                assert!(o >= 0.0);
                assert!(o <= 0.8 * (0.5 + 0.9) + 1e-4);
            }
        }
    }
}

#[test]
fn warm_share_is_roughly_forty_percent() {
    let scene = TreeScene::new(42);
    let warm = scene.particles.iter().filter(|p| p.warm).count();
    let ratio = warm as f64 / scene.particles.len() as f64;
    assert!(ratio > 0.3 && ratio < 0.5, "warm ratio {ratio}");
}

#[test]
fn flicker_and_star_pulse_stay_bounded() {
    let scene = TreeScene::new(42);
    for now_ms in [0.0, 123.0, 4567.0, 100_000.0] {
        for light in scene.lights.iter().take(20) {
            let f = light.flicker(now_ms);
            assert!((0.0..=1.0).contains(&f));
        }
        let s = star_opacity(now_ms);
        assert!((0.6..=1.0).contains(&s));
    }
}

#[test]
fn same_seed_builds_identical_scenes() {
    let a = TreeScene::new(9);
    let b = TreeScene::new(9);
    for (pa, pb) in a.particles.iter().zip(&b.particles) {
        assert_eq!(pa.angle, pb.angle);
        assert_eq!(pa.radius, pb.radius);
        assert_eq!(pa.rgb, pb.rgb);
        assert_eq!(pa.warm, pb.warm);
    }
    for (oa, ob) in a.ornaments.iter().zip(&b.ornaments) {
        assert_eq!(oa.kind, ob.kind);
        assert_eq!(oa.tint, ob.tint);
    }
}
