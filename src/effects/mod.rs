//! Short-lived decorative entities: cursor trail, selection bursts, ripples.
//!
//! Every entity fades by a fixed amount per nominal frame and is dropped the
//! tick its alpha goes negative.

mod engine;
mod particle;
mod ripple;

pub use engine::EffectEngine;
pub use particle::{Particle, ParticleKind};
pub use ripple::Ripple;

/// Any live effect entity.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Particle(Particle),
    Ripple(Ripple),
}

impl Effect {
    pub fn update(&mut self, dt: f32) {
        match self {
            Effect::Particle(particle) => particle.update(dt),
            Effect::Ripple(ripple) => ripple.update(dt),
        }
    }

    pub fn is_expired(&self) -> bool {
        match self {
            Effect::Particle(particle) => particle.is_expired(),
            Effect::Ripple(ripple) => ripple.is_expired(),
        }
    }
}
