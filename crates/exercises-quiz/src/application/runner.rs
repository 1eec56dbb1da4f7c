//! The quiz session: one question at a time, each racing a countdown.
//!
//! For every question a dedicated thread blocks on one console line and hands
//! it back through a oneshot channel. The session waits for whichever comes
//! first, that line or the countdown. When the countdown wins, the reader
//! thread is abandoned and the whole session ends.

use std::io::Write;
use std::thread;
use std::time::Duration;

use exercises_core::input::LineSource;
use exercises_core::rng::DeterministicRng;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use crate::application::shuffle::shuffle;
use crate::console::{Color, colorize};
use crate::domain::record::QuizRecord;
use crate::domain::tally::{Outcome, Report, Tally};
use crate::error::QuizError;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Every question received an answer in time.
    Completed,
    /// The countdown elapsed on the given 1-based question number.
    TimedOut {
        /// The question that went unanswered.
        question: usize,
    },
}

/// What a finished session hands to the reporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// How the session ended.
    pub outcome: SessionOutcome,
    /// Final counts.
    pub report: Report,
}

/// A shuffled quiz bound to an input source.
#[derive(Debug)]
pub struct QuizSession<S> {
    records: Vec<QuizRecord>,
    time_limit: Duration,
    source: Option<S>,
}

impl<S: LineSource> QuizSession<S> {
    /// Shuffles `records` with `rng` and prepares a session. Questions are
    /// asked in the shuffled order and never reordered afterwards.
    #[must_use]
    pub fn new(
        mut records: Vec<QuizRecord>,
        time_limit: Duration,
        source: S,
        rng: &mut dyn DeterministicRng,
    ) -> Self {
        shuffle(&mut records, rng);
        Self {
            records,
            time_limit,
            source: Some(source),
        }
    }

    /// Records in the order they will be asked.
    #[must_use]
    pub fn questions(&self) -> &[QuizRecord] {
        &self.records
    }

    /// Asks every question, writing prompts and verdicts to `out`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Console` if writing to `out` fails or the input
    /// thread cannot be started.
    pub async fn run<W: Write + ?Sized>(
        self,
        out: &mut W,
    ) -> Result<SessionSummary, QuizError> {
        let Self {
            records,
            time_limit,
            mut source,
        } = self;
        let total = records.len();
        let mut tally = Tally::default();

        for (index, record) in records.iter().enumerate() {
            let number = index + 1;
            write!(out, "Problem #{number}: {} = ", record.question)?;
            out.flush()?;

            let Some(line) = next_line(&mut source, time_limit).await? else {
                writeln!(out)?;
                colorize(out, Color::Red, "Time out!")?;
                info!(
                    question = number,
                    answered = tally.judged(),
                    total,
                    "time limit elapsed, ending session"
                );
                return Ok(SessionSummary {
                    outcome: SessionOutcome::TimedOut { question: number },
                    report: tally.timed_out(total),
                });
            };

            let outcome = Outcome::judge(record.answer, &line);
            match outcome {
                Outcome::Passed => colorize(out, Color::Yellow, "Please enter a number!")?,
                Outcome::Wrong => colorize(out, Color::Red, "Wrong!")?,
                Outcome::Correct => colorize(out, Color::Green, "Correct!")?,
            }
            debug!(question = number, ?outcome, "judged answer");
            tally.record(outcome);
        }

        Ok(SessionSummary {
            outcome: SessionOutcome::Completed,
            report: tally.completed(total),
        })
    }
}

/// Waits up to `limit` for one line from `slot`.
///
/// Returns `Ok(None)` when the countdown wins. The source travels to the
/// reader thread and comes back with the line; if the countdown wins it stays
/// with the abandoned thread. End of input and read errors never deliver a
/// line, so they also end in `Ok(None)` once the countdown elapses.
async fn next_line<S: LineSource>(
    slot: &mut Option<S>,
    limit: Duration,
) -> Result<Option<String>, QuizError> {
    let Some(mut source) = slot.take() else {
        tokio::time::sleep(limit).await;
        return Ok(None);
    };

    let (tx, rx) = oneshot::channel();
    thread::Builder::new()
        .name("quiz-input".to_owned())
        .spawn(move || match source.read_line() {
            Ok(Some(line)) => {
                // The receiver is gone if the countdown already won.
                let _ = tx.send((line, source));
            }
            Ok(None) => debug!("console input closed"),
            Err(err) => warn!(error = %err, "failed to read console input"),
        })?;

    tokio::select! {
        Ok((line, source)) = rx => {
            *slot = Some(source);
            Ok(Some(line))
        }
        () = tokio::time::sleep(limit) => Ok(None),
    }
}
