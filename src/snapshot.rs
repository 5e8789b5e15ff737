use crate::draw::DrawCommand;
use crate::layout::{Layout, Point, Target};
use crate::models::Question;
use crate::reward::RewardKind;
use crate::session::{Feedback, Phase};

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone)]
pub struct Snapshot<'a> {
    pub phase: Phase,
    pub layout: Layout,
    pub question: Option<&'a Question>,
    pub question_number: usize,
    pub selected: Option<usize>,
    pub feedback: Option<Feedback>,
    pub score: usize,
    pub total: usize,
    pub pointer: Option<Point>,
    pub hovered: Option<Target>,
    pub particles: Vec<DrawCommand>,
    pub ripples: Vec<DrawCommand>,
    pub reward: Option<RewardKind>,
    pub reward_scene: Vec<DrawCommand>,
}

impl Snapshot<'_> {
    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }

    /// Score as a whole percentage.
    pub fn rate_percent(&self) -> u32 {
        if self.total == 0 {
            0
        } else {
            (self.score as f32 / self.total as f32 * 100.0).round() as u32
        }
    }
}
