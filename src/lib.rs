//! # spark-quiz
//!
//! A pointer-driven terminal quiz with particle effects.
//!
//! A session samples a few questions from a tabular bank, shuffles each
//! question's options, and walks through them one press at a time. Cursor
//! trails, answer bursts, ripples and a score-dependent reward animation are
//! drawn on a canvas behind the text.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use spark_quiz::{Config, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Show the loading screen, load `questions.json`, then play.
//!     spark_quiz::run(Config::default())
//! }
//! ```

mod app;
mod config;
mod data;
mod draw;
mod effects;
mod error;
mod layout;
mod models;
mod reward;
mod sampler;
mod session;
mod snapshot;
pub mod terminal;
mod ui;

use std::time::Instant;

use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

pub use app::{App, PointerOutcome};
pub use config::{Config, NOMINAL_FPS};
pub use data::{DEFAULT_QUESTIONS_PATH, LoadError, load_rows_from_json, parse_rows};
pub use draw::{DrawCommand, Rgba};
pub use effects::{Effect, EffectEngine, Particle, ParticleKind, Ripple};
pub use error::{ConfigError, QuizError};
pub use layout::{
    Bounds, CANVAS_HEIGHT, CANVAS_WIDTH, Layout, Point, Target, compute_layout, hit_test,
};
pub use models::{Cell, OPTION_COUNT, Question, RawRow};
pub use reward::RewardKind;
pub use sampler::{DEFAULT_QUESTION_COUNT, sample};
pub use session::{Feedback, Phase, QuizSession};
pub use snapshot::Snapshot;
pub use ui::Viewport;

/// Longest step handed to the effects after a stall, in nominal frames.
const MAX_FRAME_STEP: f32 = 4.0;

/// A question bank and the session currently being played from it.
pub struct Quiz {
    config: Config,
    rows: Vec<RawRow>,
    rng: StdRng,
    app: App,
}

impl Quiz {
    /// Create a quiz from raw question rows.
    ///
    /// Fails when the rows are empty or malformed.
    pub fn new(rows: Vec<RawRow>, config: Config) -> Result<Self, QuizError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let app = start_app(&rows, config.count, &mut rng)?;

        Ok(Self {
            config,
            rows,
            rng,
            app,
        })
    }

    /// Load the question file named by `config` and sample a session.
    pub fn from_config(config: Config) -> Result<Self, QuizError> {
        let rows = load_rows_from_json(&config.questions)?;
        Self::new(rows, config)
    }

    /// Throw the current session away and sample a fresh one.
    pub fn reshuffle(&mut self) -> Result<(), QuizError> {
        self.app = start_app(&self.rows, self.config.count, &mut self.rng)?;
        Ok(())
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Feed a pointer press through the app, reshuffling when asked to.
    pub fn press(&mut self, position: Point) -> Result<PointerOutcome, QuizError> {
        let outcome = self.app.handle_pointer_down(position);
        if outcome == PointerOutcome::ReshuffleRequested {
            self.reshuffle()?;
            self.app.pointer_moved(position);
        }
        Ok(outcome)
    }
}

/// Show the loading screen, load the configured questions and play.
pub fn run(config: Config) -> Result<(), QuizError> {
    let mut term = terminal::init()?;
    let result = load_and_play(&mut term, config);
    terminal::restore()?;
    result
}

fn load_and_play(term: &mut terminal::AppTerminal, config: Config) -> Result<(), QuizError> {
    let loading = App::new(QuizSession::new(), StdRng::seed_from_u64(0));
    term.draw(|frame| ui::render(frame, &loading.snapshot()))?;

    let mut quiz = Quiz::from_config(config)?;
    run_event_loop(term, &mut quiz)
}

fn start_app(rows: &[RawRow], count: usize, rng: &mut StdRng) -> Result<App, ConfigError> {
    let questions = sample(rows, count, rng)?;
    let session = QuizSession::with_questions(questions)?;
    Ok(App::new(session, StdRng::seed_from_u64(rng.next_u64())))
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, quiz: &mut Quiz) -> Result<(), QuizError> {
    let frame_interval = quiz.config.frame_interval();
    let mut last_tick = Instant::now();

    loop {
        let now = Instant::now();
        let step = (now.duration_since(last_tick).as_secs_f32() * NOMINAL_FPS).min(MAX_FRAME_STEP);
        last_tick = now;
        quiz.app.tick(step);

        let area = {
            let snapshot = quiz.app.snapshot();
            terminal.draw(|frame| ui::render(frame, &snapshot))?.area
        };
        let viewport = Viewport::new(area);

        // Gather everything that arrives before the next frame is due, then
        // drain whatever is still queued once it is.
        let deadline = now + frame_interval;
        let mut events = Vec::new();
        while event::poll(deadline.saturating_duration_since(Instant::now()))? {
            events.push(event::read()?);
        }

        let input = FrameInput::collect(events, &viewport);
        if input.quit {
            break;
        }
        input.apply(quiz)?;
    }

    Ok(())
}

/// Input gathered between two frames.
///
/// Motion collapses to the latest position and only the first press is kept,
/// so a frame never sees more than one state transition.
#[derive(Debug, Default, PartialEq)]
struct FrameInput {
    quit: bool,
    pointer: Option<Point>,
    press: Option<Point>,
}

impl FrameInput {
    fn collect(events: impl IntoIterator<Item = Event>, viewport: &Viewport) -> Self {
        let mut input = Self::default();

        for event in events {
            match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input.quit |= handle_key(key.code);
                }
                Event::Mouse(mouse) => input.push_mouse(viewport, mouse),
                _ => {}
            }
        }

        input
    }

    fn push_mouse(&mut self, viewport: &Viewport, mouse: MouseEvent) {
        let Some(position) = viewport.to_logical(mouse.column, mouse.row) else {
            return;
        };

        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => self.pointer = Some(position),
            MouseEventKind::Down(MouseButton::Left) => {
                if self.press.is_none() {
                    self.press = Some(position);
                } else {
                    log::debug!("Dropping extra press at ({:.0}, {:.0})", position.x, position.y);
                }
            }
            _ => {}
        }
    }

    fn apply(self, quiz: &mut Quiz) -> Result<(), QuizError> {
        if let Some(position) = self.pointer {
            quiz.app.pointer_moved(position);
        }
        if let Some(position) = self.press {
            let outcome = quiz.press(position)?;
            log::debug!("Press at ({:.0}, {:.0}): {:?}", position.x, position.y, outcome);
        }
        Ok(())
    }
}

/// Returns true if the app should exit.
fn handle_key(key: KeyCode) -> bool {
    matches!(key, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
}
