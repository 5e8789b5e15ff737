//! Screen geometry shared by the renderer and the pointer handler.
//!
//! Everything here is expressed in logical canvas units (800 x 600). The
//! terminal front end maps cells onto this space, so what is drawn and what
//! is clickable always come from the same numbers.

use crate::session::Phase;

pub const CANVAS_WIDTH: f32 = 800.0;
pub const CANVAS_HEIGHT: f32 = 600.0;

const QUESTION_MARGIN: f32 = 50.0;
const QUESTION_HEIGHT: f32 = 150.0;
const PROGRESS_Y: f32 = 200.0;

const OPTION_X: f32 = 150.0;
const OPTION_START_Y: f32 = 250.0;
const OPTION_HEIGHT: f32 = 60.0;
const OPTION_GAP: f32 = 20.0;

const BUTTON_WIDTH: f32 = 200.0;
const BUTTON_HEIGHT: f32 = 50.0;
const BUTTON_GAP: f32 = 40.0;
const BUTTON_BOTTOM_OFFSET: f32 = 120.0;

/// A position on the logical canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box on the logical canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Bounds {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Strict containment: a point on the edge is outside.
    pub fn contains(&self, point: Point) -> bool {
        point.x > self.x
            && point.x < self.x + self.w
            && point.y > self.y
            && point.y < self.y + self.h
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// Per-phase geometry recomputed every frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Layout {
    Loading {
        message: Point,
    },
    Quiz {
        question: Bounds,
        progress: Point,
        options: Vec<Bounds>,
        feedback: Point,
        hint: Point,
    },
    Result {
        headline: Point,
        score_line: Point,
        rate_line: Point,
        restart: Bounds,
        reshuffle: Bounds,
    },
}

/// Something under the pointer that reacts to a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Option(usize),
    Restart,
    Reshuffle,
}

pub fn compute_layout(phase: Phase, option_count: usize) -> Layout {
    match phase {
        Phase::Loading => Layout::Loading {
            message: Point::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0),
        },
        Phase::Quiz => Layout::Quiz {
            question: Bounds::new(
                QUESTION_MARGIN,
                QUESTION_MARGIN,
                CANVAS_WIDTH - QUESTION_MARGIN * 2.0,
                QUESTION_HEIGHT,
            ),
            progress: Point::new(CANVAS_WIDTH / 2.0, PROGRESS_Y),
            options: option_boxes(option_count),
            feedback: Point::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT - 50.0),
            hint: Point::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT - 20.0),
        },
        Phase::Result => {
            let (restart, reshuffle) = result_buttons();
            Layout::Result {
                headline: Point::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0 - 50.0),
                score_line: Point::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0 + 50.0),
                rate_line: Point::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0 + 100.0),
                restart,
                reshuffle,
            }
        }
    }
}

/// Option boxes stacked vertically below the question and progress header.
pub fn option_boxes(option_count: usize) -> Vec<Bounds> {
    (0..option_count)
        .map(|i| {
            Bounds::new(
                OPTION_X,
                OPTION_START_Y + i as f32 * (OPTION_HEIGHT + OPTION_GAP),
                CANVAS_WIDTH - OPTION_X * 2.0,
                OPTION_HEIGHT,
            )
        })
        .collect()
}

/// Restart and reshuffle buttons, centred as a pair.
pub fn result_buttons() -> (Bounds, Bounds) {
    let total_width = BUTTON_WIDTH * 2.0 + BUTTON_GAP;
    let left_x = CANVAS_WIDTH / 2.0 - total_width / 2.0;
    let right_x = left_x + BUTTON_WIDTH + BUTTON_GAP;
    let y = CANVAS_HEIGHT - BUTTON_BOTTOM_OFFSET;

    (
        Bounds::new(left_x, y, BUTTON_WIDTH, BUTTON_HEIGHT),
        Bounds::new(right_x, y, BUTTON_WIDTH, BUTTON_HEIGHT),
    )
}

/// Index of the option box under `point`, if any.
pub fn hit_test(point: Point, option_count: usize) -> Option<usize> {
    option_boxes(option_count)
        .iter()
        .position(|bounds| bounds.contains(point))
}

impl Layout {
    /// The press target under `point` for this layout.
    pub fn target_at(&self, point: Point) -> Option<Target> {
        match self {
            Layout::Loading { .. } => None,
            Layout::Quiz { options, .. } => options
                .iter()
                .position(|bounds| bounds.contains(point))
                .map(Target::Option),
            Layout::Result {
                restart, reshuffle, ..
            } => {
                if restart.contains(point) {
                    Some(Target::Restart)
                } else if reshuffle.contains(point) {
                    Some(Target::Reshuffle)
                } else {
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_boxes_stack_with_gap() {
        let boxes = option_boxes(4);
        assert_eq!(boxes.len(), 4);
        assert_eq!(boxes[0], Bounds::new(150.0, 250.0, 500.0, 60.0));
        assert_eq!(boxes[3].y, 250.0 + 3.0 * 80.0);
    }

    #[test]
    fn test_hit_test_inside_and_outside() {
        assert_eq!(hit_test(Point::new(400.0, 280.0), 4), Some(0));
        assert_eq!(hit_test(Point::new(400.0, 520.0), 4), Some(3));
        // Gap between the first and second box.
        assert_eq!(hit_test(Point::new(400.0, 320.0), 4), None);
        // Left of every box.
        assert_eq!(hit_test(Point::new(100.0, 280.0), 4), None);
    }

    #[test]
    fn test_edges_are_outside() {
        let first = option_boxes(1)[0];
        assert!(!first.contains(Point::new(first.x, first.y + 10.0)));
        assert!(!first.contains(Point::new(first.x + 10.0, first.y + first.h)));
    }

    #[test]
    fn test_hit_test_matches_layout() {
        let layout = compute_layout(Phase::Quiz, 4);
        for y in (0..600).step_by(7) {
            let point = Point::new(300.0, y as f32);
            let from_layout = match layout.target_at(point) {
                Some(Target::Option(i)) => Some(i),
                _ => None,
            };
            assert_eq!(from_layout, hit_test(point, 4));
        }
    }

    #[test]
    fn test_result_buttons_are_symmetric() {
        let (restart, reshuffle) = result_buttons();
        assert_eq!(restart.x, 180.0);
        assert_eq!(reshuffle.x, 420.0);
        assert_eq!(restart.y, 480.0);
        let mid = (restart.x + reshuffle.x + reshuffle.w) / 2.0;
        assert_eq!(mid, CANVAS_WIDTH / 2.0);
    }

    #[test]
    fn test_result_targets() {
        let layout = compute_layout(Phase::Result, 0);
        assert_eq!(
            layout.target_at(Point::new(280.0, 500.0)),
            Some(Target::Restart)
        );
        assert_eq!(
            layout.target_at(Point::new(520.0, 500.0)),
            Some(Target::Reshuffle)
        );
        assert_eq!(layout.target_at(Point::new(400.0, 500.0)), None);
    }

    #[test]
    fn test_loading_has_no_targets() {
        let layout = compute_layout(Phase::Loading, 4);
        assert_eq!(layout.target_at(Point::new(400.0, 300.0)), None);
    }
}
