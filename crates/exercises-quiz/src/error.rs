//! Quiz error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that end a quiz run.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The record file could not be opened.
    #[error("Failed to open the CSV file: {}!", path.display())]
    Open {
        /// The path that was tried, resolved against the working directory.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The record file is not valid delimited text.
    #[error("failed to read quiz records: {0}")]
    Csv(#[from] csv::Error),

    /// The per-question time limit is zero or negative.
    #[error("The time should be positive (got {0})")]
    InvalidTimeLimit(i64),

    /// Writing to the console or starting the input reader failed.
    #[error("console error: {0}")]
    Console(#[from] io::Error),
}
