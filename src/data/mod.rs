mod loader;

pub use loader::{DEFAULT_QUESTIONS_PATH, LoadError, load_rows_from_json, parse_rows};
