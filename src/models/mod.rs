mod question;

pub use question::{Cell, OPTION_COUNT, Question, RawRow};
