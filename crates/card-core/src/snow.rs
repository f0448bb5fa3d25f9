//! Viewport snow: an ambient falling-flake field plus short-lived click bursts.
//!
//! All motion is frame-stepped; `advance` is called once per animation frame
//! with the frame timestamp and mutates the field in place. Drawing is the
//! front-end's job.

use glam::Vec2;
use rand::prelude::*;

use crate::constants::*;

/// One ambient falling flake. Never destroyed; recycled to the top edge when
/// it falls past the bottom.
#[derive(Clone, Debug)]
pub struct Snowflake {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub opacity: f32,
    /// Per-flake sway oscillator offset, radians.
    pub phase: f32,
    /// Lateral sway amplitude.
    pub drift: f32,
}

/// One particle of a click burst. Fades linearly and is pruned with its burst.
#[derive(Clone, Debug)]
pub struct BurstParticle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    /// Index into [`BURST_SHADES`].
    pub shade: usize,
    pub opacity: f32,
}

/// A radiating group of particles spawned by one click.
#[derive(Clone, Debug)]
pub struct SnowBurst {
    pub origin: Vec2,
    pub particles: Vec<BurstParticle>,
}

impl SnowBurst {
    pub fn spent(&self) -> bool {
        self.particles.iter().all(|p| p.opacity <= 0.0)
    }
}

/// The full-viewport snow subsystem. Owns its flake population, the active
/// bursts and the last known pointer position.
pub struct SnowField {
    pub width: f32,
    pub height: f32,
    pub flakes: Vec<Snowflake>,
    pub bursts: Vec<SnowBurst>,
    pointer: Vec2,
    rng: StdRng,
}

impl SnowField {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mut field = Self {
            width,
            height,
            flakes: Vec::new(),
            bursts: Vec::new(),
            pointer: Vec2::splat(POINTER_OFFSCREEN),
            rng: StdRng::seed_from_u64(seed),
        };
        field.regenerate();
        field
    }

    /// Replace the whole flake population for the current viewport, one flake
    /// per `SNOW_AREA_PER_FLAKE` square pixels. Active bursts are kept.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.regenerate();
    }

    fn regenerate(&mut self) {
        let count = (self.width * self.height / SNOW_AREA_PER_FLAKE) as usize;
        let (w, h) = (self.width, self.height);
        let rng = &mut self.rng;
        self.flakes = (0..count)
            .map(|_| Snowflake {
                x: rng.gen::<f32>() * w,
                y: rng.gen::<f32>() * h,
                vx: 0.0,
                vy: FLAKE_FALL_MIN + rng.gen::<f32>() * FLAKE_FALL_SPAN,
                size: FLAKE_SIZE_MIN + rng.gen::<f32>() * FLAKE_SIZE_SPAN,
                opacity: FLAKE_OPACITY_MIN + rng.gen::<f32>() * FLAKE_OPACITY_SPAN,
                phase: rng.gen::<f32>() * std::f32::consts::TAU,
                drift: FLAKE_DRIFT_MIN + rng.gen::<f32>() * FLAKE_DRIFT_SPAN,
            })
            .collect();
        log::debug!(
            "snow field regenerated: {}x{} -> {} flakes",
            self.width,
            self.height,
            count
        );
    }

    /// Record the latest pointer position (viewport pixels).
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Spawn one burst of [`BURST_PARTICLES`] particles radiating from a
    /// click point.
    pub fn spawn_burst(&mut self, x: f32, y: f32) {
        let rng = &mut self.rng;
        let particles = (0..BURST_PARTICLES)
            .map(|_| {
                let angle = rng.gen::<f32>() * std::f32::consts::TAU;
                let speed = BURST_SPEED_MIN + rng.gen::<f32>() * BURST_SPEED_SPAN;
                BurstParticle {
                    x,
                    y,
                    vx: angle.cos() * speed,
                    vy: angle.sin() * speed,
                    size: BURST_SIZE_MIN + rng.gen::<f32>() * BURST_SIZE_SPAN,
                    shade: rng.gen_range(0..BURST_SHADES.len()),
                    opacity: 1.0,
                }
            })
            .collect();
        self.bursts.push(SnowBurst {
            origin: Vec2::new(x, y),
            particles,
        });
    }

    /// Step every flake and burst particle by one frame. `now_ms` drives the
    /// sway oscillator only; all other motion is per-frame.
    pub fn advance(&mut self, now_ms: f64) {
        let t = (now_ms / SWAY_PERIOD_MS) as f32;
        let pointer = self.pointer;
        let (w, h) = (self.width, self.height);
        for f in &mut self.flakes {
            let swing = (t + f.phase).sin() * f.drift;

            let dx = f.x - pointer.x;
            let dy = f.y - pointer.y;
            let dist = (dx * dx + dy * dy).sqrt();
            // dist == 0 would blow up the direction; leave the flake alone
            if dist < POINTER_RADIUS && dist > 0.0 {
                let force = (POINTER_RADIUS - dist) / POINTER_RADIUS;
                f.vx += dx / dist * force * REPEL_X;
                f.vy += dy / dist * force * REPEL_Y;
            }

            f.x += f.vx + swing;
            f.y += f.vy;
            f.vx *= FLAKE_DRAG;

            if f.y > h {
                f.y = RECYCLE_Y;
                f.x = self.rng.gen::<f32>() * w;
                f.vx = 0.0;
            }
            if f.x > w {
                f.x = 0.0;
            }
            if f.x < 0.0 {
                f.x = w;
            }
        }

        for burst in &mut self.bursts {
            for p in &mut burst.particles {
                p.x += p.vx;
                p.y += p.vy;
                p.vx *= BURST_DRAG;
                p.vy += BURST_GRAVITY;
                p.opacity -= BURST_FADE;
            }
        }
        self.bursts.retain(|b| !b.spent());
    }
}
