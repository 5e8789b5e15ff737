use rand::Rng;
use rand::rngs::StdRng;

use crate::draw::{GREEN, RED};
use crate::layout::Point;

use super::{Effect, Particle, Ripple};

const BURST_MIN: usize = 10;
const BURST_MAX: usize = 20;
const RIPPLES_MIN: usize = 1;
const RIPPLES_MAX: usize = 2;

/// Owns every live decorative entity and steps them once per tick.
pub struct EffectEngine {
    effects: Vec<Effect>,
    pointer: Option<Point>,
    rng: StdRng,
}

impl EffectEngine {
    pub fn new(rng: StdRng) -> Self {
        Self {
            effects: Vec::new(),
            pointer: None,
            rng,
        }
    }

    /// Where the cursor trail is emitted from; nothing is emitted until the
    /// pointer has been seen.
    pub fn set_pointer(&mut self, position: Point) {
        self.pointer = Some(position);
    }

    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// Selection feedback: a burst of particles and one or two ripples,
    /// green for a correct answer, red otherwise.
    pub fn spawn_burst(&mut self, position: Point, is_correct: bool) {
        let color = if is_correct { GREEN } else { RED };
        let particles = self.rng.gen_range(BURST_MIN..BURST_MAX);
        let ripples = self.rng.gen_range(RIPPLES_MIN..=RIPPLES_MAX);

        log::debug!(
            "Spawning {} burst particles and {} ripples at ({:.0}, {:.0})",
            particles,
            ripples,
            position.x,
            position.y
        );

        for _ in 0..particles {
            let particle = Particle::burst(position, color, &mut self.rng);
            self.effects.push(Effect::Particle(particle));
        }
        for _ in 0..ripples {
            let ripple = Ripple::new(position, color, &mut self.rng);
            self.effects.push(Effect::Ripple(ripple));
        }
    }

    /// One tick: emit a drift particle at the pointer, step everything by
    /// `dt` nominal frames and drop whatever has faded out.
    pub fn advance(&mut self, dt: f32) {
        if let Some(pointer) = self.pointer {
            let particle = Particle::drift(pointer, &mut self.rng);
            self.effects.push(Effect::Particle(particle));
        }

        for effect in &mut self.effects {
            effect.update(dt);
        }
        self.effects.retain(|effect| !effect.is_expired());
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }

    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.effects.iter().filter_map(|effect| match effect {
            Effect::Particle(particle) => Some(particle),
            Effect::Ripple(_) => None,
        })
    }

    pub fn ripples(&self) -> impl Iterator<Item = &Ripple> {
        self.effects.iter().filter_map(|effect| match effect {
            Effect::Ripple(ripple) => Some(ripple),
            Effect::Particle(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::ParticleKind;
    use rand::SeedableRng;

    fn engine() -> EffectEngine {
        EffectEngine::new(StdRng::seed_from_u64(21))
    }

    #[test]
    fn test_no_trail_without_pointer() {
        let mut engine = engine();
        engine.advance(1.0);
        assert!(engine.is_empty());
    }

    #[test]
    fn test_trail_emits_every_tick() {
        let mut engine = engine();
        engine.set_pointer(Point::new(50.0, 50.0));
        for _ in 0..10 {
            engine.advance(1.0);
        }
        assert_eq!(engine.len(), 10);
        assert!(engine.particles().all(|p| p.kind == ParticleKind::Drift));
    }

    #[test]
    fn test_trail_reaches_steady_state() {
        let mut engine = engine();
        engine.set_pointer(Point::new(50.0, 50.0));
        for _ in 0..200 {
            engine.advance(1.0);
        }
        // A drift particle survives 51 updates.
        assert_eq!(engine.len(), 51);
    }

    #[test]
    fn test_burst_counts_and_color() {
        let mut engine = engine();
        for correct in [true, false] {
            engine.clear();
            engine.spawn_burst(Point::new(300.0, 300.0), correct);

            let particles = engine.particles().count();
            let ripples = engine.ripples().count();
            assert!((BURST_MIN..BURST_MAX).contains(&particles));
            assert!((RIPPLES_MIN..=RIPPLES_MAX).contains(&ripples));

            let expected = if correct { GREEN } else { RED };
            assert!(engine.particles().all(|p| p.color == expected));
            assert!(engine.ripples().all(|r| r.color == expected));
        }
    }

    #[test]
    fn test_every_entity_expires() {
        let mut engine = engine();
        engine.spawn_burst(Point::new(300.0, 300.0), true);
        engine.spawn_burst(Point::new(100.0, 100.0), false);

        // Slowest fade is 3 per frame from 255.
        for _ in 0..86 {
            engine.advance(1.0);
        }
        assert!(engine.is_empty());
    }

    #[test]
    fn test_larger_dt_expires_sooner() {
        let mut engine = engine();
        engine.spawn_burst(Point::new(300.0, 300.0), true);
        for _ in 0..22 {
            engine.advance(4.0);
        }
        assert!(engine.is_empty());
    }

    #[test]
    fn test_particles_and_ripples_cover_all_entities() {
        let mut engine = engine();
        engine.set_pointer(Point::new(1.0, 1.0));
        engine.spawn_burst(Point::new(300.0, 300.0), true);
        engine.advance(1.0);

        let ripples = engine.ripples().count();
        assert!((1..=2).contains(&ripples));
        assert_eq!(engine.particles().count() + ripples, engine.len());
    }
}
