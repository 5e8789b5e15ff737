use std::f32::consts::TAU;

use rand::Rng;

use crate::draw::{DrawCommand, Rgba, YELLOW};
use crate::layout::Point;

const START_ALPHA: f32 = 255.0;
const DRIFT_FADE: f32 = 5.0;
const BURST_GRAVITY: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    /// Cursor trail.
    Drift,
    /// Answer-selection explosion.
    Burst,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Point,
    pub velocity: Point,
    pub size: f32,
    pub color: Rgba,
    pub alpha: f32,
    pub fade_rate: f32,
    pub kind: ParticleKind,
}

impl Particle {
    /// Slow random drift, fixed fade.
    pub fn drift<R: Rng + ?Sized>(position: Point, rng: &mut R) -> Self {
        Self {
            position,
            velocity: Point::new(rng.gen_range(-0.5..0.5), rng.gen_range(-0.5..0.5)),
            size: rng.gen_range(2.0..5.0),
            color: YELLOW,
            alpha: START_ALPHA,
            fade_rate: DRIFT_FADE,
            kind: ParticleKind::Drift,
        }
    }

    /// Radial launch from `position` at a random angle and speed.
    pub fn burst<R: Rng + ?Sized>(position: Point, color: Rgba, rng: &mut R) -> Self {
        let angle = rng.gen_range(0.0..TAU);
        let speed = rng.gen_range(1.0..5.0);
        Self {
            position,
            velocity: Point::new(angle.cos() * speed, angle.sin() * speed),
            size: rng.gen_range(3.0..8.0),
            color,
            alpha: START_ALPHA,
            fade_rate: rng.gen_range(3.0..6.0),
            kind: ParticleKind::Burst,
        }
    }

    /// Steps the particle by `dt` nominal frames.
    pub fn update(&mut self, dt: f32) {
        self.position.x += self.velocity.x * dt;
        self.position.y += self.velocity.y * dt;
        self.alpha -= self.fade_rate * dt;
        if self.kind == ParticleKind::Burst {
            self.velocity.y += BURST_GRAVITY * dt;
        }
    }

    pub fn is_expired(&self) -> bool {
        self.alpha < 0.0
    }

    pub fn render(&self) -> DrawCommand {
        DrawCommand::Disc {
            center: self.position,
            diameter: self.size,
            color: self.color.with_alpha(self.alpha),
        }
    }
}
