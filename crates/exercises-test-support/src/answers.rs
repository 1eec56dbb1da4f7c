//! Test line sources — scripted console input for quiz sessions.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use exercises_core::input::LineSource;

/// What happens once the scripted lines run out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Exhausted {
    /// Report end of input.
    Eof,
    /// Block forever, like a user who walked away.
    Stall,
}

/// A line source that replays a fixed list of answers.
///
/// Each entry may carry a delay so tests can simulate a slow typist.
#[derive(Debug)]
pub struct ScriptedAnswers {
    lines: VecDeque<(Duration, String)>,
    exhausted: Exhausted,
}

impl ScriptedAnswers {
    /// Answers every line immediately, then reports end of input.
    #[must_use]
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines
                .into_iter()
                .map(|line| (Duration::ZERO, line.into()))
                .collect(),
            exhausted: Exhausted::Eof,
        }
    }

    /// Answers every line immediately, then blocks forever.
    #[must_use]
    pub fn then_stall<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            exhausted: Exhausted::Stall,
            ..Self::new(lines)
        }
    }

    /// Appends a line that is delivered only after `delay`.
    #[must_use]
    pub fn with_delayed(mut self, delay: Duration, line: impl Into<String>) -> Self {
        self.lines.push_back((delay, line.into()));
        self
    }
}

impl LineSource for ScriptedAnswers {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        match self.lines.pop_front() {
            Some((delay, line)) => {
                if !delay.is_zero() {
                    std::thread::sleep(delay);
                }
                Ok(Some(line))
            }
            None if self.exhausted == Exhausted::Eof => Ok(None),
            None => loop {
                std::thread::park();
            },
        }
    }
}

/// A line source whose every read fails.
#[derive(Debug)]
pub struct FailingAnswers;

impl LineSource for FailingAnswers {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "console closed"))
    }
}
