//! Ambient 2D particle field: plain data plus free functions.

use crate::constants::{
    FIELD_MAX_SPEED, FIELD_PARTICLES, FIELD_SCROLL_DRIFT, FIELD_SPEED_SPAN, REPEL_GAIN,
    REPEL_RADIUS_PX,
};
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub brightness: f32,
}

/// Canvas extent in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }
}

pub fn spawn(rng: &mut impl Rng, bounds: Bounds) -> Particle {
    let half = FIELD_SPEED_SPAN * 0.5;
    Particle {
        pos: Vec2::new(
            rng.gen_range(0.0..bounds.width),
            rng.gen_range(0.0..bounds.height),
        ),
        vel: Vec2::new(rng.gen_range(-half..half), rng.gen_range(-half..half)),
        size: rng.gen_range(1.0..4.0),
        brightness: rng.gen_range(0.5..1.0),
    }
}

pub fn spawn_field(rng: &mut impl Rng, bounds: Bounds) -> Vec<Particle> {
    (0..FIELD_PARTICLES).map(|_| spawn(&mut *rng, bounds)).collect()
}

/// Advances one frame. `scroll_progress` is the hero scroll depth in hero
/// heights; `time_ms` drives the brightness shimmer.
pub fn step(p: &mut Particle, bounds: Bounds, scroll_progress: f32, time_ms: f64) {
    p.pos += p.vel + Vec2::new(0.0, scroll_progress * FIELD_SCROLL_DRIFT);
    if p.pos.x < 0.0 || p.pos.x > bounds.width {
        p.vel.x = -p.vel.x;
        p.pos.x = p.pos.x.clamp(0.0, bounds.width);
    }
    if p.pos.y < 0.0 || p.pos.y > bounds.height {
        p.vel.y = -p.vel.y;
        p.pos.y = p.pos.y.clamp(0.0, bounds.height);
    }
    let phase = time_ms * 0.002 + p.pos.x as f64 * 0.01;
    p.brightness = (phase.sin() * 0.3 + 0.7) as f32;
}

pub fn step_all(field: &mut [Particle], bounds: Bounds, scroll_progress: f32, time_ms: f64) {
    for p in field.iter_mut() {
        step(p, bounds, scroll_progress, time_ms);
    }
}

/// Pushes particles within `REPEL_RADIUS_PX` of `pointer` away from it,
/// harder the closer they are. Returns how many were perturbed.
pub fn repel(field: &mut [Particle], pointer: Vec2) -> usize {
    let mut touched = 0;
    for p in field.iter_mut() {
        let d = p.pos - pointer;
        let dist = d.length();
        if dist >= REPEL_RADIUS_PX || dist <= f32::EPSILON {
            continue;
        }
        p.vel += d / dist * (REPEL_GAIN / dist.max(1.0));
        p.vel = p.vel.clamp_length_max(FIELD_MAX_SPEED);
        touched += 1;
    }
    touched
}

/// Keeps particles inside a resized canvas.
pub fn resize_bounds(field: &mut [Particle], bounds: Bounds) {
    for p in field.iter_mut() {
        p.pos.x = p.pos.x.clamp(0.0, bounds.width);
        p.pos.y = p.pos.y.clamp(0.0, bounds.height);
    }
}

/// `rgba(...)` fill for a particle.
pub fn fill_style(p: &Particle) -> String {
    format!("rgba(0, 209, 235, {:.3})", p.brightness)
}
