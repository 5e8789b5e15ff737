use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::RawRow;

pub const DEFAULT_QUESTIONS_PATH: &str = "questions.json";

/// Failure reading or parsing the question file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Reads the tabular question source: a JSON array of rows.
pub fn load_rows_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<RawRow>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let rows = parse_rows(&json_content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

pub fn parse_rows(json: &str) -> Result<Vec<RawRow>, serde_json::Error> {
    serde_json::from_str(json)
}
