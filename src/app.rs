use rand::rngs::StdRng;

use crate::effects::EffectEngine;
use crate::layout::{Layout, Point, Target, compute_layout};
use crate::models::OPTION_COUNT;
use crate::session::{Feedback, Phase, QuizSession};
use crate::snapshot::Snapshot;

/// What a pointer press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    /// Landed outside every target, or nothing reacts in this state.
    Ignored,
    Answered { option: usize, feedback: Feedback },
    Advanced,
    Restarted,
    /// The host should throw this app away and sample a fresh one.
    ReshuffleRequested,
}

/// A quiz session together with its decorative effects and frame clock.
pub struct App {
    session: QuizSession,
    effects: EffectEngine,
    frame: u64,
}

impl App {
    pub fn new(session: QuizSession, effects_rng: StdRng) -> Self {
        Self {
            session,
            effects: EffectEngine::new(effects_rng),
            frame: 0,
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn effects(&self) -> &EffectEngine {
        &self.effects
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn layout(&self) -> Layout {
        compute_layout(self.session.phase(), self.option_count())
    }

    fn option_count(&self) -> usize {
        self.session
            .current_question()
            .map_or(0, |question| question.options.len().min(OPTION_COUNT))
    }

    pub fn pointer_moved(&mut self, position: Point) {
        self.effects.set_pointer(position);
    }

    /// Routes a press to the session by what lies under it.
    pub fn handle_pointer_down(&mut self, position: Point) -> PointerOutcome {
        self.effects.set_pointer(position);
        let target = self.layout().target_at(position);

        match self.session.phase() {
            Phase::Loading => PointerOutcome::Ignored,
            Phase::Quiz if self.session.is_answered() => {
                if self.session.advance() {
                    PointerOutcome::Advanced
                } else {
                    PointerOutcome::Ignored
                }
            }
            Phase::Quiz => match target {
                Some(Target::Option(option)) => match self.session.select_option(option) {
                    Some(feedback) => {
                        self.effects.spawn_burst(position, feedback.correct);
                        PointerOutcome::Answered { option, feedback }
                    }
                    None => PointerOutcome::Ignored,
                },
                _ => PointerOutcome::Ignored,
            },
            Phase::Result => match target {
                Some(Target::Restart) => {
                    self.session.restart();
                    PointerOutcome::Restarted
                }
                Some(Target::Reshuffle) => {
                    log::info!("Reshuffle requested");
                    PointerOutcome::ReshuffleRequested
                }
                _ => PointerOutcome::Ignored,
            },
        }
    }

    /// Advances the frame clock and all effects by `dt` nominal frames.
    pub fn tick(&mut self, dt: f32) {
        self.frame += 1;
        self.effects.advance(dt);
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let layout = self.layout();
        let pointer = self.effects.pointer();
        let hovered = pointer.and_then(|point| layout.target_at(point));
        let reward = self.session.reward();

        Snapshot {
            phase: self.session.phase(),
            layout,
            question: self.session.current_question(),
            question_number: self.session.current_question_number(),
            selected: self.session.selected(),
            feedback: self.session.feedback(),
            score: self.session.score(),
            total: self.session.total_questions(),
            pointer,
            hovered,
            particles: self.effects.particles().map(|p| p.render()).collect(),
            ripples: self.effects.ripples().map(|r| r.render()).collect(),
            reward,
            reward_scene: reward.map_or_else(Vec::new, |kind| kind.scene(self.frame)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Question, RawRow};
    use crate::reward::RewardKind;
    use crate::sampler::sample;
    use rand::SeedableRng;

    fn app_from(rows: &[RawRow], seed: u64) -> App {
        let mut rng = StdRng::seed_from_u64(seed);
        let questions = sample(rows, 5, &mut rng).unwrap();
        let session = QuizSession::with_questions(questions).unwrap();
        App::new(session, StdRng::seed_from_u64(seed + 1))
    }

    fn option_center(app: &App, option: usize) -> Point {
        match app.layout() {
            Layout::Quiz { options, .. } => options[option].center(),
            other => panic!("expected quiz layout, got {:?}", other),
        }
    }

    fn correct_index(app: &App) -> usize {
        app.session()
            .current_question()
            .map(|q: &Question| q.correct_index)
            .unwrap()
    }

    #[test]
    fn test_single_row_walkthrough() {
        let rows = vec![RawRow::from(("2+2?", ["3", "4", "5", "6"], 1))];
        let mut app = app_from(&rows, 99);

        let correct = correct_index(&app);
        assert_eq!(
            app.session().current_question().unwrap().options[correct],
            "4"
        );

        let outcome = app.handle_pointer_down(option_center(&app, correct));
        assert_eq!(
            outcome,
            PointerOutcome::Answered {
                option: correct,
                feedback: Feedback { correct: true }
            }
        );
        assert_eq!(app.session().score(), 1);
        assert!(app.effects().ripples().count() >= 1);

        assert_eq!(
            app.handle_pointer_down(Point::new(5.0, 5.0)),
            PointerOutcome::Advanced
        );
        assert_eq!(app.session().phase(), Phase::Result);

        let snapshot = app.snapshot();
        assert_eq!(snapshot.reward, Some(RewardKind::Praise));
        assert_eq!(snapshot.rate_percent(), 100);
        assert!(!snapshot.reward_scene.is_empty());
    }

    #[test]
    fn test_miss_is_ignored() {
        let rows = vec![RawRow::from(("2+2?", ["3", "4", "5", "6"], 1))];
        let mut app = app_from(&rows, 1);

        assert_eq!(
            app.handle_pointer_down(Point::new(20.0, 280.0)),
            PointerOutcome::Ignored
        );
        assert!(!app.session().is_answered());
        assert_eq!(app.effects().ripples().count(), 0);
    }

    #[test]
    fn test_wrong_answer_spawns_red_feedback() {
        let rows = vec![RawRow::from(("2+2?", ["3", "4", "5", "6"], 1))];
        let mut app = app_from(&rows, 4);
        let wrong = (correct_index(&app) + 1) % OPTION_COUNT;

        let outcome = app.handle_pointer_down(option_center(&app, wrong));
        assert_eq!(
            outcome,
            PointerOutcome::Answered {
                option: wrong,
                feedback: Feedback { correct: false }
            }
        );
        assert!(app.effects().particles().all(|p| p.color == crate::draw::RED));
    }

    #[test]
    fn test_result_buttons() {
        let rows = vec![RawRow::from(("2+2?", ["3", "4", "5", "6"], 1))];
        let mut app = app_from(&rows, 8);
        app.handle_pointer_down(option_center(&app, 0));
        app.handle_pointer_down(Point::new(5.0, 5.0));
        assert_eq!(app.session().phase(), Phase::Result);

        let Layout::Result {
            restart, reshuffle, ..
        } = app.layout()
        else {
            panic!("expected result layout");
        };

        assert_eq!(
            app.handle_pointer_down(Point::new(5.0, 5.0)),
            PointerOutcome::Ignored
        );
        assert_eq!(
            app.handle_pointer_down(reshuffle.center()),
            PointerOutcome::ReshuffleRequested
        );
        assert_eq!(app.session().phase(), Phase::Result);

        assert_eq!(
            app.handle_pointer_down(restart.center()),
            PointerOutcome::Restarted
        );
        assert_eq!(app.session().phase(), Phase::Quiz);
        assert_eq!(app.session().score(), 0);
    }

    #[test]
    fn test_hover_and_tick() {
        let rows = vec![RawRow::from(("2+2?", ["3", "4", "5", "6"], 1))];
        let mut app = app_from(&rows, 2);
        let point = option_center(&app, 2);
        app.pointer_moved(point);
        app.tick(1.0);

        let snapshot = app.snapshot();
        assert_eq!(snapshot.hovered, Some(Target::Option(2)));
        assert_eq!(snapshot.particles.len(), 1);
        assert_eq!(app.frame(), 1);
    }
}
