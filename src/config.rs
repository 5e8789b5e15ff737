use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::data::DEFAULT_QUESTIONS_PATH;
use crate::sampler::DEFAULT_QUESTION_COUNT;

/// Nominal frame rate the effect constants are tuned for.
pub const NOMINAL_FPS: f32 = 60.0;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "A pointer-driven quiz with particle effects", long_about = None)]
pub struct Config {
    /// JSON file to load the question rows from
    #[arg(short, long, default_value = DEFAULT_QUESTIONS_PATH)]
    pub questions: PathBuf,

    /// Number of questions per session
    #[arg(short, long, default_value_t = DEFAULT_QUESTION_COUNT, value_parser = parse_count)]
    pub count: usize,

    /// Seed for question sampling and effects (random if omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Target frames per second
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,
}

fn parse_count(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("a session needs at least one question".to_string()),
        Ok(count) => Ok(count),
        Err(e) => Err(e.to_string()),
    }
}

impl Config {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f32(1.0 / self.fps.max(1) as f32)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            questions: PathBuf::from(DEFAULT_QUESTIONS_PATH),
            count: DEFAULT_QUESTION_COUNT,
            seed: None,
            fps: 60,
        }
    }
}
