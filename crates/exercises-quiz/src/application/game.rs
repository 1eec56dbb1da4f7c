//! One full game: load, ask, report.

use std::io::Write;

use exercises_core::input::LineSource;
use exercises_core::rng::DeterministicRng;
use tracing::info;

use crate::application::loader::open_records;
use crate::application::report::write_report;
use crate::application::runner::{QuizSession, SessionSummary};
use crate::config::QuizConfig;
use crate::error::QuizError;

/// Loads the configured quiz file, runs a session against `source`, and
/// writes the final report to `out`. The report is written whether the
/// session completed or timed out.
///
/// # Errors
///
/// Returns `QuizError::Open` or `QuizError::Csv` if the quiz file cannot be
/// loaded. Nothing is asked in that case. Returns `QuizError::Console` if
/// console output fails.
pub async fn play<S, W>(
    config: &QuizConfig,
    source: S,
    rng: &mut dyn DeterministicRng,
    out: &mut W,
) -> Result<SessionSummary, QuizError>
where
    S: LineSource,
    W: Write + ?Sized,
{
    let records = open_records(&config.csv_path)?;
    info!(
        questions = records.len(),
        limit_secs = config.time_limit.as_secs(),
        "starting quiz session"
    );

    let session = QuizSession::new(records, config.time_limit, source, rng);
    let summary = session.run(out).await?;

    write_report(out, &summary.report)?;
    out.flush()?;

    info!(outcome = ?summary.outcome, points = summary.report.points(), "quiz session finished");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use exercises_test_support::{MockRng, ScriptedAnswers};

    use super::*;
    use crate::application::runner::SessionOutcome;

    fn quiz_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_play_loads_runs_and_reports() {
        // Arrange
        let file = quiz_file("5+5,10\n1+1,2\n8-3,5\n");
        let config = QuizConfig {
            csv_path: file.path().to_path_buf(),
            time_limit: Duration::from_secs(5),
        };
        let answers = ScriptedAnswers::new(["10", "3", "?"]);
        let mut out = Vec::new();

        // Act
        let summary = play(&config, answers, &mut MockRng, &mut out).await.unwrap();

        // Assert
        assert_eq!(summary.outcome, SessionOutcome::Completed);
        assert_eq!(summary.report.correct, 1);
        assert_eq!(summary.report.wrong, 1);
        assert_eq!(summary.report.passed, 1);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Total Points: 3"));
    }

    #[tokio::test]
    async fn test_play_reports_after_timeout() {
        let file = quiz_file("1+1,2\n2+2,4\n3+3,6\n");
        let config = QuizConfig {
            csv_path: file.path().to_path_buf(),
            time_limit: Duration::from_millis(100),
        };
        let answers = ScriptedAnswers::then_stall(["2"]);
        let mut out = Vec::new();

        let summary = play(&config, answers, &mut MockRng, &mut out).await.unwrap();

        assert_eq!(summary.outcome, SessionOutcome::TimedOut { question: 2 });
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Time out!"));
        assert!(text.contains("Correct: 1"));
        assert!(text.contains("Wrong: 2"));
        assert!(text.contains("Pass: 0"));
    }

    #[tokio::test]
    async fn test_play_fails_before_asking_when_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = QuizConfig {
            csv_path: dir.path().join("missing.csv"),
            time_limit: Duration::from_secs(1),
        };
        let mut out = Vec::new();

        let result = play(&config, ScriptedAnswers::new(["1"]), &mut MockRng, &mut out).await;

        assert!(matches!(result, Err(QuizError::Open { .. })));
        assert!(out.is_empty());
    }
}
