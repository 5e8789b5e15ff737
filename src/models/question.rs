use serde::Deserialize;

/// Number of answer options every question carries.
pub const OPTION_COUNT: usize = 4;

/// One multiple-choice question, immutable for the life of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub options: [String; OPTION_COUNT],
    pub correct_index: usize,
}

impl Question {
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }

    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }
}

/// A single untyped cell of the tabular question source.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    pub fn to_text(&self) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::Number(number) => number.to_string(),
        }
    }

    /// Reads the cell as a whole number, accepting numeric strings.
    pub fn to_index(&self) -> Option<i64> {
        match self {
            Cell::Number(number) if number.fract() == 0.0 => Some(*number as i64),
            Cell::Number(_) => None,
            Cell::Text(text) => text.trim().parse().ok(),
        }
    }
}

/// A raw row: `[question, option0, option1, option2, option3, correctIndex]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RawRow(pub Vec<Cell>);

impl RawRow {
    pub fn cell(&self, column: usize) -> Option<&Cell> {
        self.0.get(column)
    }
}

impl<S: Into<String>> From<(S, [S; OPTION_COUNT], usize)> for RawRow {
    fn from((text, options, correct): (S, [S; OPTION_COUNT], usize)) -> Self {
        let mut cells = Vec::with_capacity(OPTION_COUNT + 2);
        cells.push(Cell::Text(text.into()));
        cells.extend(options.into_iter().map(|option| Cell::Text(option.into())));
        cells.push(Cell::Number(correct as f64));
        RawRow(cells)
    }
}
