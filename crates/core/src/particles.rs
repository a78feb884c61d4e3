//! Particle effects - celebration bursts and the results flourish
//!
//! Two effects, both purely cosmetic:
//!
//! - **Celebration burst**: 100 particles bouncing inside the canvas after a
//!   correct answer. Lifetime is wall-clock based (3s from spawn), so the
//!   burst disappears at the same moment no matter how many frames ran.
//! - **Flourish**: gold dots and stars on the results screen for a high
//!   score. It has no state; a fresh one is generated every frame.
//!
//! Particle storage is a fixed-capacity `ArrayVec`, so spawning and stepping
//! never allocate.

use arrayvec::ArrayVec;

use crate::rng::RandomSource;
use crate::types::{
    Rgb, CANVAS_HEIGHT, CANVAS_WIDTH, CELEBRATION_MS, CELEBRATION_PALETTE, CELEBRATION_PARTICLES,
    CELEBRATION_PULSE_AMPLITUDE, CELEBRATION_PULSE_PERIOD_MS, CELEBRATION_TEXT_MS, FLOURISH_DOTS,
    FLOURISH_DOT_MAX, FLOURISH_DOT_MIN, FLOURISH_STARS, FLOURISH_STAR_MARGIN, FLOURISH_STAR_MAX,
    FLOURISH_STAR_MIN, GOLD, PARTICLE_MAX_SIZE, PARTICLE_MAX_SPEED, PARTICLE_MIN_SIZE, STAR_POINTS,
};

/// Canvas extent particles live in; coordinates range over `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: u8,
    pub color: Rgb,
}

impl Particle {
    /// Displace by velocity and bounce off the canvas edges.
    ///
    /// A coordinate that leaves `[0, bound]` is mirrored back inside and its
    /// velocity component is pointed inward, so the particle can neither escape
    /// nor get stuck flipping sign at the wall.
    pub fn step(&mut self, bounds: Bounds) {
        self.x += self.vx;
        self.y += self.vy;
        reflect(&mut self.x, &mut self.vx, bounds.width);
        reflect(&mut self.y, &mut self.vy, bounds.height);
    }
}

fn reflect(pos: &mut f32, vel: &mut f32, max: f32) {
    if *pos < 0.0 {
        *pos = -*pos;
        *vel = vel.abs();
    } else if *pos > max {
        *pos = 2.0 * max - *pos;
        *vel = -vel.abs();
    }
    // Velocities larger than the canvas could overshoot twice.
    *pos = pos.clamp(0.0, max);
}

/// A live celebration burst.
#[derive(Debug, Clone)]
pub struct Celebration {
    particles: ArrayVec<Particle, CELEBRATION_PARTICLES>,
    spawn_ms: u64,
}

impl Celebration {
    pub fn spawn<R: RandomSource>(rng: &mut R, bounds: Bounds, now_ms: u64) -> Self {
        let mut particles = ArrayVec::new();
        for _ in 0..CELEBRATION_PARTICLES {
            let x = rng.range_inclusive(0, bounds.width as i32) as f32;
            let y = rng.range_inclusive(0, bounds.height as i32) as f32;
            let size = rng.range_inclusive(PARTICLE_MIN_SIZE as i32, PARTICLE_MAX_SIZE as i32) as u8;
            let color = rng
                .choose(&CELEBRATION_PALETTE)
                .copied()
                .unwrap_or(GOLD);
            let vx = rng.uniform(-PARTICLE_MAX_SPEED, PARTICLE_MAX_SPEED);
            let vy = rng.uniform(-PARTICLE_MAX_SPEED, PARTICLE_MAX_SPEED);
            particles.push(Particle {
                x,
                y,
                vx,
                vy,
                size,
                color,
            });
        }
        Self {
            particles,
            spawn_ms: now_ms,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn spawn_ms(&self) -> u64 {
        self.spawn_ms
    }

    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.spawn_ms)
    }

    pub fn is_expired(&self, now_ms: u64) -> bool {
        self.elapsed_ms(now_ms) >= CELEBRATION_MS
    }

    /// Scale of the celebratory text, or `None` once the text window is over.
    pub fn text_scale(&self, now_ms: u64) -> Option<f32> {
        let elapsed = self.elapsed_ms(now_ms);
        if elapsed >= CELEBRATION_TEXT_MS {
            return None;
        }
        let phase = elapsed as f32 / CELEBRATION_PULSE_PERIOD_MS;
        Some(1.0 + CELEBRATION_PULSE_AMPLITUDE * phase.sin().abs())
    }

    pub fn step(&mut self, bounds: Bounds) {
        for p in self.particles.iter_mut() {
            p.step(bounds);
        }
    }
}

/// Owner of the transient celebration particles.
#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    bounds: Bounds,
    celebration: Option<Celebration>,
}

impl ParticleSystem {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            celebration: None,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Start a burst, replacing any burst still running.
    pub fn trigger<R: RandomSource>(&mut self, rng: &mut R, now_ms: u64) {
        self.celebration = Some(Celebration::spawn(rng, self.bounds, now_ms));
    }

    pub fn clear(&mut self) {
        self.celebration = None;
    }

    /// Advance one simulation step; drops the burst once its lifetime elapsed.
    pub fn update(&mut self, now_ms: u64) {
        let expired = self
            .celebration
            .as_ref()
            .map(|c| c.is_expired(now_ms))
            .unwrap_or(false);
        if expired {
            self.celebration = None;
            return;
        }
        if let Some(c) = self.celebration.as_mut() {
            c.step(self.bounds);
        }
    }

    pub fn is_active(&self) -> bool {
        self.celebration.is_some()
    }

    pub fn celebration(&self) -> Option<&Celebration> {
        self.celebration.as_ref()
    }

    pub fn text_scale(&self, now_ms: u64) -> Option<f32> {
        self.celebration.as_ref().and_then(|c| c.text_scale(now_ms))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub x: f32,
    pub y: f32,
    pub radius: u8,
}

/// A ten-point star whose vertices alternate between `size` and `size / 2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub size: u8,
}

impl Star {
    pub fn points(&self) -> [(f32, f32); STAR_POINTS] {
        let mut out = [(0.0, 0.0); STAR_POINTS];
        let outer = self.size as f32;
        for (i, p) in out.iter_mut().enumerate() {
            let angle = std::f32::consts::TAU * i as f32 / STAR_POINTS as f32;
            let r = if i % 2 == 0 { outer } else { outer / 2.0 };
            *p = (self.x + r * angle.sin(), self.y + r * angle.cos());
        }
        out
    }
}

/// Results-screen decoration, regenerated each frame.
#[derive(Debug, Clone, Default)]
pub struct Flourish {
    pub dots: ArrayVec<Dot, FLOURISH_DOTS>,
    pub stars: ArrayVec<Star, FLOURISH_STARS>,
}

impl Flourish {
    pub fn generate<R: RandomSource>(rng: &mut R, bounds: Bounds) -> Self {
        let mut out = Self::default();
        for _ in 0..FLOURISH_DOTS {
            out.dots.push(Dot {
                x: rng.range_inclusive(0, bounds.width as i32) as f32,
                y: rng.range_inclusive(0, bounds.height as i32) as f32,
                radius: rng.range_inclusive(FLOURISH_DOT_MIN as i32, FLOURISH_DOT_MAX as i32) as u8,
            });
        }
        let margin = FLOURISH_STAR_MARGIN as i32;
        for _ in 0..FLOURISH_STARS {
            out.stars.push(Star {
                x: rng.range_inclusive(margin, bounds.width as i32 - margin) as f32,
                y: rng.range_inclusive(margin, bounds.height as i32 - margin) as f32,
                size: rng.range_inclusive(FLOURISH_STAR_MIN as i32, FLOURISH_STAR_MAX as i32) as u8,
            });
        }
        out
    }
}
