//! Result-screen reward animations.
//!
//! Each animation is a pure function of the frame number: nothing is stored
//! between frames. Per-frame randomness comes from an RNG seeded with the
//! frame, so the same frame always draws the same picture.

use std::f32::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::draw::{DrawCommand, Rgba};
use crate::layout::{CANVAS_HEIGHT, CANVAS_WIDTH, Point};

const PRAISE_THRESHOLD: f32 = 0.8;
const ENCOURAGE_THRESHOLD: f32 = 0.5;

const CONFETTI_COUNT: usize = 5;
const BUBBLE_COUNT: usize = 3;
const PULSE_PERIOD: u64 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardKind {
    /// 80% and above: falling confetti and twinkling stars.
    Praise,
    /// 50% to 79%: rising bubbles.
    Encourage,
    /// Below 50%: a soft pulse.
    TryAgain,
}

impl RewardKind {
    pub fn for_ratio(ratio: f32) -> Self {
        if ratio >= PRAISE_THRESHOLD {
            RewardKind::Praise
        } else if ratio >= ENCOURAGE_THRESHOLD {
            RewardKind::Encourage
        } else {
            RewardKind::TryAgain
        }
    }

    pub fn for_score(score: usize, total: usize) -> Self {
        if total == 0 {
            return RewardKind::TryAgain;
        }
        Self::for_ratio(score as f32 / total as f32)
    }

    pub fn headline(self) -> &'static str {
        match self {
            RewardKind::Praise => "Brilliant! You're a genius!",
            RewardKind::Encourage => "Not bad, keep it up!",
            RewardKind::TryAgain => "Don't give up, try again!",
        }
    }

    pub fn headline_color(self) -> Rgba {
        match self {
            RewardKind::Praise => Rgba::rgb(255, 255, 0),
            RewardKind::Encourage => Rgba::rgb(0, 200, 255),
            RewardKind::TryAgain => Rgba::rgb(255, 150, 150),
        }
    }

    /// Shapes to draw under the score readout on `frame`.
    pub fn scene(self, frame: u64) -> Vec<DrawCommand> {
        let mut rng = StdRng::seed_from_u64(frame);
        match self {
            RewardKind::Praise => praise(frame, &mut rng),
            RewardKind::Encourage => encourage(frame, &mut rng),
            RewardKind::TryAgain => try_again(frame),
        }
    }
}

fn praise(frame: u64, rng: &mut StdRng) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(CONFETTI_COUNT * 2);

    for _ in 0..CONFETTI_COUNT {
        let x = rng.gen_range(0.0..CANVAS_WIDTH);
        let y = (frame as f32 * 5.0 + rng.gen_range(0.0..CANVAS_HEIGHT)) % CANVAS_HEIGHT;
        let angle = rng.gen_range(0.0..TAU);
        let color = Rgba::new(
            rng.gen_range(150..=255),
            rng.gen_range(150..=255),
            rng.gen_range(150..=255),
            150,
        );
        commands.push(DrawCommand::Quad {
            corners: rotated_strip(Point::new(x, y), 10.0, 30.0, angle),
            color,
        });

        let star = Point::new(
            rng.gen_range(0.0..CANVAS_WIDTH),
            rng.gen_range(0.0..CANVAS_HEIGHT),
        );
        commands.push(DrawCommand::Disc {
            center: star,
            diameter: 5.0,
            color: Rgba::new(255, 255, 0, rng.gen_range(100..200)),
        });
    }

    commands
}

fn encourage(frame: u64, rng: &mut StdRng) -> Vec<DrawCommand> {
    (0..BUBBLE_COUNT)
        .map(|_| {
            let x = rng.gen_range(0.0..CANVAS_WIDTH);
            let rise = (frame as f32 * 2.0 + rng.gen_range(0.0..300.0)) % (CANVAS_HEIGHT + 100.0);
            let diameter = rng.gen_range(20.0..50.0);
            DrawCommand::Ring {
                center: Point::new(x, CANVAS_HEIGHT - rise),
                radius: diameter / 2.0,
                stroke_width: 3.0,
                color: Rgba::new(0, 180, 255, 100),
            }
        })
        .collect()
}

fn try_again(frame: u64) -> Vec<DrawCommand> {
    let radius = ((frame * 2) % PULSE_PERIOD) as f32;
    let alpha = 100.0 * (1.0 - radius / PULSE_PERIOD as f32);

    vec![DrawCommand::Ring {
        center: Point::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0 - 50.0),
        radius,
        stroke_width: 5.0,
        color: Rgba::rgb(255, 100, 100).with_alpha(alpha),
    }]
}

/// Corners of a `width` x `height` strip anchored at `origin`, rotated by
/// `angle` radians about that corner.
fn rotated_strip(origin: Point, width: f32, height: f32, angle: f32) -> [Point; 4] {
    let (sin, cos) = angle.sin_cos();
    let rotate = |dx: f32, dy: f32| {
        Point::new(
            origin.x + dx * cos - dy * sin,
            origin.y + dx * sin + dy * cos,
        )
    };
    [
        rotate(0.0, 0.0),
        rotate(width, 0.0),
        rotate(width, height),
        rotate(0.0, height),
    ]
}
