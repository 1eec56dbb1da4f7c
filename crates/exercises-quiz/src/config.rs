//! Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::error::QuizError;

/// Raw command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "quiz", version, about = "Timed quiz game")]
pub struct QuizArgs {
    /// The input csv file, the format is question,answer.
    #[arg(long = "csv", env = "QUIZ_CSV", default_value = "problems.csv")]
    pub csv: PathBuf,

    /// The question time limit, in seconds.
    #[arg(
        long,
        env = "QUIZ_LIMIT",
        default_value_t = 30,
        allow_negative_numbers = true
    )]
    pub limit: i64,
}

/// Validated quiz configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    /// Record file, relative paths resolved against the working directory.
    pub csv_path: PathBuf,
    /// Time allowed for each question.
    pub time_limit: Duration,
}

impl TryFrom<QuizArgs> for QuizConfig {
    type Error = QuizError;

    fn try_from(args: QuizArgs) -> Result<Self, Self::Error> {
        let seconds = u64::try_from(args.limit)
            .ok()
            .filter(|s| *s >= 1)
            .ok_or(QuizError::InvalidTimeLimit(args.limit))?;

        Ok(Self {
            csv_path: args.csv,
            time_limit: Duration::from_secs(seconds),
        })
    }
}
