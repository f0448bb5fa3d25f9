//! The rotating particle tree: a cone of twinkling particles wrapped in a
//! spiral of fairy lights and hung with ornament glyphs, spun as a rigid body
//! around the vertical axis.
//!
//! Every entity stores an orbital angle, a radius and an immutable height;
//! [`project`] maps those plus the shared rotation onto the scene canvas with
//! a linear depth cue. The front-end composites back half, lights, ornaments,
//! front half, star, in that order.

use rand::prelude::*;

use crate::constants::*;

/// Projection of an orbital entity onto the scene canvas at a given rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f32,
    /// Depth coordinate; negative is behind the tree axis.
    pub z: f32,
    /// Linear depth cue in roughly [0, 1]; scales size, opacity and glow.
    pub depth: f32,
    pub screen_x: f32,
    pub screen_y: f32,
}

/// Widest allowed radius at height `y`, tapering linearly to zero at the tip.
#[inline]
pub fn cone_radius(y: f32, max_radius: f32) -> f32 {
    (1.0 - y / TREE_HEIGHT) * max_radius
}

/// Rotate an entity's orbit by the shared rotation and project it. Height is
/// rotation-invariant; only x/z depend on the angle.
pub fn project(base_angle: f32, radius: f32, y: f32, rotation: f32) -> Projected {
    let theta = base_angle + rotation;
    let x = theta.cos() * radius;
    let z = theta.sin() * radius;
    Projected {
        x,
        z,
        depth: (z + DEPTH_OFFSET) / DEPTH_RANGE,
        screen_x: SCENE_WIDTH / 2.0 + x,
        screen_y: SCENE_HEIGHT - BASE_MARGIN - y,
    }
}

/// One foliage particle. Orbits at its own speed inside the cone and twinkles
/// on its own cycle.
#[derive(Clone, Debug)]
pub struct TreeParticle {
    pub angle: f32,
    pub radius: f32,
    pub y: f32,
    pub size: f32,
    pub speed: f32,
    pub twinkle: f32,
    pub rgb: [u8; 3],
    /// Warm-yellow particles get a soft glow when drawn.
    pub warm: bool,
}

impl TreeParticle {
    fn sample(rng: &mut StdRng) -> Self {
        let y = rng.gen::<f32>() * TREE_HEIGHT;
        let warm = rng.gen::<f64>() < WARM_RATIO;
        // Warm band around amber, green band around pine
        let rgb = if warm {
            [
                250 + rng.gen_range(0..5),
                200 + rng.gen_range(0..55),
                20 + rng.gen_range(0..30),
            ]
        } else {
            [
                30 + rng.gen_range(0..40),
                180 + rng.gen_range(0..70),
                60 + rng.gen_range(0..40),
            ]
        };
        Self {
            angle: rng.gen::<f32>() * std::f32::consts::TAU,
            radius: rng.gen::<f32>() * cone_radius(y, TREE_MAX_RADIUS),
            y,
            size: PARTICLE_SIZE_MIN + rng.gen::<f32>() * PARTICLE_SIZE_SPAN,
            speed: PARTICLE_SPEED_MIN + rng.gen::<f32>() * PARTICLE_SPEED_SPAN,
            twinkle: rng.gen::<f32>() * TWINKLE_INIT_SPAN,
            rgb,
            warm,
        }
    }

    /// Drawn opacity: the twinkle cycle swings between near-invisible and
    /// fully lit, further dimmed with depth.
    pub fn opacity(&self, depth: f32) -> f32 {
        (self.twinkle.sin() * 0.5 + 0.5) * 0.8 * (0.5 + depth)
    }
}

/// One bulb of the spiral light string. Fixed height and spiral phase; only
/// the flicker depends on the clock.
#[derive(Clone, Debug)]
pub struct FairyLight {
    pub y: f32,
    pub phase: f32,
    pub hue: &'static str,
}

impl FairyLight {
    fn at_index(index: usize) -> Self {
        let frac = index as f32 / LIGHT_COUNT as f32;
        Self {
            y: frac * TREE_HEIGHT,
            phase: frac * LIGHT_SPIRAL_RADIANS,
            hue: LIGHT_HUES[index % LIGHT_HUES.len()],
        }
    }

    pub fn radius(&self) -> f32 {
        cone_radius(self.y, LIGHT_MAX_RADIUS)
    }

    /// Brightness flicker in [0, 1], independent of rotation and twinkle.
    pub fn flicker(&self, now_ms: f64) -> f32 {
        ((now_ms / LIGHT_FLICKER_PERIOD_MS + self.y as f64).sin() * 0.5 + 0.5) as f32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrnamentKind {
    Gift,
    Candy,
    Balloon,
    Bell,
    Snowflake,
}

impl OrnamentKind {
    pub const ALL: [OrnamentKind; 5] = [
        OrnamentKind::Gift,
        OrnamentKind::Candy,
        OrnamentKind::Balloon,
        OrnamentKind::Bell,
        OrnamentKind::Snowflake,
    ];

    pub fn glyph(self) -> &'static str {
        match self {
            OrnamentKind::Gift => "\u{1F381}",
            OrnamentKind::Candy => "\u{1F36C}",
            OrnamentKind::Balloon => "\u{1F388}",
            OrnamentKind::Bell => "\u{1F514}",
            OrnamentKind::Snowflake => "\u{2744}\u{FE0F}",
        }
    }
}

/// A glyph hung exactly on the cone surface. Immutable; the rigid-body
/// rotation is the only thing that moves it.
#[derive(Clone, Debug)]
pub struct Ornament {
    pub angle: f32,
    pub y: f32,
    pub radius: f32,
    pub kind: OrnamentKind,
    pub tint: &'static str,
}

impl Ornament {
    fn sample(rng: &mut StdRng) -> Self {
        let y = ORNAMENT_Y_MIN + rng.gen::<f32>() * ORNAMENT_Y_SPAN;
        Self {
            angle: rng.gen::<f32>() * std::f32::consts::TAU,
            y,
            radius: cone_radius(y, TREE_MAX_RADIUS),
            kind: *OrnamentKind::ALL.choose(rng).unwrap_or(&OrnamentKind::Gift),
            tint: ORNAMENT_TINTS[rng.gen_range(0..ORNAMENT_TINTS.len())],
        }
    }

    /// Ornaments far enough behind the axis are skipped so glyphs never show
    /// through the back of the tree.
    pub fn culled(&self, rotation: f32) -> bool {
        project(self.angle, self.radius, self.y, rotation).z < ORNAMENT_CULL_Z
    }
}

/// The whole tree subsystem: three fixed populations plus the shared rotation.
pub struct TreeScene {
    pub particles: Vec<TreeParticle>,
    pub lights: Vec<FairyLight>,
    pub ornaments: Vec<Ornament>,
    pub rotation: f32,
}

impl TreeScene {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self {
            particles: (0..TREE_PARTICLES)
                .map(|_| TreeParticle::sample(&mut rng))
                .collect(),
            lights: (0..LIGHT_COUNT).map(FairyLight::at_index).collect(),
            ornaments: (0..ORNAMENT_COUNT)
                .map(|_| Ornament::sample(&mut rng))
                .collect(),
            rotation: 0.0,
        }
    }

    /// One frame: spin the rigid body and advance every particle's own orbit
    /// and twinkle. Lights and ornaments carry no per-frame state.
    pub fn advance(&mut self) {
        self.rotation += ROTATION_STEP;
        for p in &mut self.particles {
            p.angle += p.speed;
            p.twinkle += TWINKLE_STEP;
        }
    }
}

/// Apex star opacity, pulsing on the shared clock.
pub fn star_opacity(now_ms: f64) -> f32 {
    ((now_ms / STAR_PULSE_PERIOD_MS).sin() * 0.2 + 0.8) as f32
}
