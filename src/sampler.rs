//! Turns raw question rows into a randomized session question list.
//!
//! Two independent shuffles happen per session: which rows are asked (and in
//! what order), and in which slot each of a question's options appears.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::ConfigError;
use crate::models::{OPTION_COUNT, Question, RawRow};

/// Default number of questions per session.
pub const DEFAULT_QUESTION_COUNT: usize = 5;

const TEXT_COLUMN: usize = 0;
const FIRST_OPTION_COLUMN: usize = 1;
const CORRECT_COLUMN: usize = FIRST_OPTION_COLUMN + OPTION_COUNT;

/// Validates every row, then picks up to `max_count` of them in random
/// order with their options shuffled.
///
/// An empty `rows` slice yields an empty list; starting a session with it is
/// what fails.
pub fn sample<R: Rng + ?Sized>(
    rows: &[RawRow],
    max_count: usize,
    rng: &mut R,
) -> Result<Vec<Question>, ConfigError> {
    let parsed = rows
        .iter()
        .enumerate()
        .map(|(index, row)| parse_row(index, row))
        .collect::<Result<Vec<_>, _>>()?;

    let mut order: Vec<usize> = (0..parsed.len()).collect();
    order.shuffle(rng);
    order.truncate(max_count.min(parsed.len()));

    let questions = order
        .into_iter()
        .map(|index| shuffle_options(&parsed[index], rng))
        .collect();

    Ok(questions)
}

/// Reads one row in source order, without shuffling.
pub fn parse_row(index: usize, row: &RawRow) -> Result<Question, ConfigError> {
    let column = |column: usize| {
        row.cell(column).ok_or(ConfigError::MissingColumn {
            row: index,
            column,
        })
    };

    let text = column(TEXT_COLUMN)?.to_text();

    let mut options: [String; OPTION_COUNT] = Default::default();
    for (slot, option) in options.iter_mut().enumerate() {
        *option = column(FIRST_OPTION_COLUMN + slot)?.to_text();
    }

    let correct_cell = column(CORRECT_COLUMN)?;
    let correct_index = correct_cell
        .to_index()
        .filter(|value| (0..OPTION_COUNT as i64).contains(value))
        .ok_or_else(|| ConfigError::InvalidCorrectIndex {
            row: index,
            value: correct_cell.to_text(),
        })? as usize;

    Ok(Question {
        text,
        options,
        correct_index,
    })
}

/// Reorders the options by a random permutation and remaps the answer.
fn shuffle_options<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> Question {
    let mut permutation: [usize; OPTION_COUNT] = [0, 1, 2, 3];
    permutation.shuffle(rng);

    let options = permutation.map(|source| question.options[source].clone());
    let correct_index = permutation
        .iter()
        .position(|&source| source == question.correct_index)
        .unwrap_or(question.correct_index);

    Question {
        text: question.text.clone(),
        options,
        correct_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cell;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rows(count: usize) -> Vec<RawRow> {
        (0..count)
            .map(|i| {
                RawRow::from((
                    format!("Question {}", i),
                    [
                        format!("{}-a", i),
                        format!("{}-b", i),
                        format!("{}-c", i),
                        format!("{}-d", i),
                    ],
                    i % OPTION_COUNT,
                ))
            })
            .collect()
    }

    #[test]
    fn test_sample_count_is_capped() {
        let mut rng = StdRng::seed_from_u64(7);
        for count in [1, 3, 5, 6, 20] {
            let questions = sample(&rows(count), DEFAULT_QUESTION_COUNT, &mut rng).unwrap();
            assert_eq!(questions.len(), count.min(DEFAULT_QUESTION_COUNT));
            for question in &questions {
                assert!(question.correct_index < OPTION_COUNT);
            }
        }
    }

    #[test]
    fn test_sample_without_replacement() {
        let mut rng = StdRng::seed_from_u64(11);
        let questions = sample(&rows(8), 5, &mut rng).unwrap();
        let mut texts: Vec<_> = questions.iter().map(|q| q.text.clone()).collect();
        texts.sort();
        texts.dedup();
        assert_eq!(texts.len(), 5);
    }

    #[test]
    fn test_options_are_a_permutation_and_answer_follows() {
        let source = rows(12);
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..20 {
            for question in sample(&source, 5, &mut rng).unwrap() {
                let index: usize = question
                    .text
                    .trim_start_matches("Question ")
                    .parse()
                    .unwrap();
                let original = parse_row(index, &source[index]).unwrap();

                let mut shuffled = question.options.to_vec();
                let mut expected = original.options.to_vec();
                shuffled.sort();
                expected.sort();
                assert_eq!(shuffled, expected);

                assert_eq!(question.correct_option(), original.correct_option());
            }
        }
    }

    #[test]
    fn test_single_row_scenario() {
        let source = vec![RawRow::from(("2+2?", ["3", "4", "5", "6"], 1))];
        let mut rng = StdRng::seed_from_u64(42);
        let questions = sample(&source, 5, &mut rng).unwrap();

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].text, "2+2?");
        assert_eq!(questions[0].correct_option(), "4");
    }

    #[test]
    fn test_option_order_varies_across_sessions() {
        let source = vec![RawRow::from(("2+2?", ["3", "4", "5", "6"], 1))];
        let mut rng = StdRng::seed_from_u64(5);
        let slots: Vec<usize> = (0..64)
            .map(|_| sample(&source, 5, &mut rng).unwrap()[0].correct_index)
            .collect();
        assert!(slots.iter().any(|&slot| slot != slots[0]));
    }

    #[test]
    fn test_empty_source_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sample(&[], 5, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_missing_column_is_rejected() {
        let mut source = rows(3);
        source[1].0.truncate(4);
        let mut rng = StdRng::seed_from_u64(1);

        let err = sample(&source, 5, &mut rng).unwrap_err();
        assert!(matches!(err, ConfigError::MissingColumn { row: 1, column: 4 }));
    }

    #[test]
    fn test_out_of_range_correct_index_is_rejected() {
        let mut source = rows(2);
        source[0].0[5] = Cell::Number(4.0);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            sample(&source, 5, &mut rng),
            Err(ConfigError::InvalidCorrectIndex { row: 0, .. })
        ));

        source[0].0[5] = Cell::Number(-1.0);
        assert!(sample(&source, 5, &mut rng).is_err());

        source[0].0[5] = Cell::Text("b".to_string());
        assert!(sample(&source, 5, &mut rng).is_err());
    }

    #[test]
    fn test_numeric_string_correct_index() {
        let mut source = rows(1);
        source[0].0[5] = Cell::Text(" 2 ".to_string());
        let question = parse_row(0, &source[0]).unwrap();
        assert_eq!(question.correct_index, 2);
    }
}
