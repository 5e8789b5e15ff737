use rand::Rng;

use crate::draw::{DrawCommand, Rgba};
use crate::layout::Point;

const START_ALPHA: f32 = 255.0;
const GROWTH: f32 = 4.0;
const FADE: f32 = 6.0;
const START_STROKE: f32 = 4.0;
const STROKE_SHRINK: f32 = 0.1;
const MIN_STROKE: f32 = 1.0;

/// A single expanding ring.
#[derive(Debug, Clone, PartialEq)]
pub struct Ripple {
    pub position: Point,
    pub radius: f32,
    pub max_radius: f32,
    pub alpha: f32,
    pub stroke_width: f32,
    pub color: Rgba,
}

impl Ripple {
    pub fn new<R: Rng + ?Sized>(position: Point, color: Rgba, rng: &mut R) -> Self {
        Self {
            position,
            radius: 0.0,
            max_radius: rng.gen_range(50.0..100.0),
            alpha: START_ALPHA,
            stroke_width: START_STROKE,
            color,
        }
    }

    /// Grows up to `max_radius` and keeps fading there.
    pub fn update(&mut self, dt: f32) {
        self.radius = (self.radius + GROWTH * dt).min(self.max_radius);
        self.alpha -= FADE * dt;
        self.stroke_width = (self.stroke_width - STROKE_SHRINK * dt).max(MIN_STROKE);
    }

    pub fn is_expired(&self) -> bool {
        self.alpha < 0.0
    }

    pub fn render(&self) -> DrawCommand {
        DrawCommand::Ring {
            center: self.position,
            radius: self.radius,
            stroke_width: self.stroke_width,
            color: self.color.with_alpha(self.alpha),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::RED;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn ripple() -> Ripple {
        Ripple::new(Point::new(100.0, 100.0), RED, &mut StdRng::seed_from_u64(9))
    }

    #[test]
    fn test_grows_linearly_and_fades() {
        let mut r = ripple();
        r.update(1.0);
        r.update(1.0);
        assert_eq!(r.radius, 8.0);
        assert_eq!(r.alpha, 243.0);
    }

    #[test]
    fn test_radius_capped() {
        let mut r = ripple();
        for _ in 0..40 {
            r.update(1.0);
        }
        assert_eq!(r.radius, r.max_radius);
    }

    #[test]
    fn test_stroke_floor() {
        let mut r = ripple();
        for _ in 0..40 {
            r.update(1.0);
        }
        assert_eq!(r.stroke_width, MIN_STROKE);
    }

    #[test]
    fn test_expires_after_43_frames() {
        let mut r = ripple();
        for _ in 0..42 {
            r.update(1.0);
        }
        assert!(!r.is_expired());
        r.update(1.0);
        assert!(r.is_expired());
    }
}
