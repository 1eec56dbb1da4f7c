//! Reads question/answer rows into quiz records.
//!
//! Rows are `question,answer` with no header. A row whose answer is not an
//! integer is kept with answer `0` so the question count always matches the
//! file.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::record::QuizRecord;
use crate::error::QuizError;

/// Answer stored for a row whose answer field does not parse.
pub const MALFORMED_ANSWER: i64 = 0;

/// Opens `path`, resolved against the working directory, and loads every
/// record in it.
///
/// # Errors
///
/// Returns `QuizError::Open` if the file cannot be opened and
/// `QuizError::Csv` if it is not valid delimited text.
pub fn open_records(path: &Path) -> Result<Vec<QuizRecord>, QuizError> {
    let resolved = resolve(path)?;
    let file = File::open(&resolved).map_err(|source| QuizError::Open {
        path: resolved.clone(),
        source,
    })?;
    debug!(path = %resolved.display(), "opened quiz file");
    load_records(file)
}

/// Loads every record from a reader, in file order.
///
/// # Errors
///
/// Returns `QuizError::Csv` on malformed quoting or an I/O failure.
pub fn load_records<R: Read>(reader: R) -> Result<Vec<QuizRecord>, QuizError> {
    let mut rows = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, row) in rows.records().enumerate() {
        let row = row?;
        let question = row.get(0).unwrap_or_default();
        let raw_answer = row.get(1).unwrap_or_default();

        let answer = raw_answer.trim().parse::<i64>().unwrap_or_else(|_| {
            warn!(
                row = index + 1,
                question,
                answer = raw_answer,
                "The record answer has wrong format; defaulting to {MALFORMED_ANSWER}"
            );
            MALFORMED_ANSWER
        });

        records.push(QuizRecord::new(question, answer));
    }

    debug!(count = records.len(), "loaded quiz records");
    Ok(records)
}

fn resolve(path: &Path) -> Result<PathBuf, QuizError> {
    let cwd = std::env::current_dir().map_err(|source| QuizError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(cwd.join(path))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_loads_well_formed_rows_in_order() {
        // Arrange
        let source = "5+5,10\n7+3,10\n1+1,2\n";

        // Act
        let records = load_records(source.as_bytes()).unwrap();

        // Assert
        assert_eq!(
            records,
            vec![
                QuizRecord::new("5+5", 10),
                QuizRecord::new("7+3", 10),
                QuizRecord::new("1+1", 2),
            ]
        );
    }

    #[test]
    fn test_first_row_is_not_a_header() {
        let records = load_records("question,answer\n2+2,4\n".as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0], QuizRecord::new("question", MALFORMED_ANSWER));
    }

    #[test]
    fn test_malformed_answer_keeps_row_with_default() {
        // Arrange
        let source = "1+1,2\nwhat is 2+2,four\n3+3,6\n";

        // Act
        let records = load_records(source.as_bytes()).unwrap();

        // Assert
        assert_eq!(records.len(), 3);
        assert_eq!(records[1], QuizRecord::new("what is 2+2", MALFORMED_ANSWER));
        assert_eq!(records[2].answer, 6);
    }

    #[test]
    fn test_missing_answer_column_keeps_row() {
        let records = load_records("lonely question\n4+4,8\n".as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0], QuizRecord::new("lonely question", MALFORMED_ANSWER));
        assert_eq!(records[1].answer, 8);
    }

    #[test]
    fn test_quoted_question_may_contain_commas() {
        let source = "\"what 2+2, sir?\",4\n";

        let records = load_records(source.as_bytes()).unwrap();

        assert_eq!(records, vec![QuizRecord::new("what 2+2, sir?", 4)]);
    }

    #[test]
    fn test_answer_whitespace_and_sign_are_accepted() {
        let records = load_records("3-5, -2 \n".as_bytes()).unwrap();

        assert_eq!(records[0].answer, -2);
    }

    #[test]
    fn test_empty_input_yields_no_records() {
        let records = load_records("".as_bytes()).unwrap();

        assert!(records.is_empty());
    }

    #[test]
    fn test_missing_trailing_newline_is_fine() {
        let records = load_records("9*9,81".as_bytes()).unwrap();

        assert_eq!(records, vec![QuizRecord::new("9*9", 81)]);
    }

    #[test]
    fn test_open_records_reads_file() {
        // Arrange
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "1+2,3\n2+3,5\n").unwrap();

        // Act
        let records = open_records(file.path()).unwrap();

        // Assert
        assert_eq!(records.len(), 2);
        assert_eq!(records[1], QuizRecord::new("2+3", 5));
    }

    #[test]
    fn test_open_records_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.csv");

        match open_records(&missing).unwrap_err() {
            QuizError::Open { path, .. } => assert_eq!(path, missing),
            other => panic!("expected Open, got {other:?}"),
        }
    }
}
