//! Console colours and the stdin line source.

use std::error::Error;
use std::io::{self, BufRead, Write};

use exercises_core::input::LineSource;

const RESET: &str = "\u{1b}[0m";

/// ANSI foreground colours used by the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Errors and wrong answers.
    Red,
    /// Correct answers.
    Green,
    /// Passed questions.
    Yellow,
    /// Report: wrong count.
    BrightRed,
    /// Report: correct count.
    BrightGreen,
    /// Report: pass count.
    BrightYellow,
    /// Report: total points.
    BrightCyan,
    /// Report: question count.
    BrightWhite,
}

impl Color {
    const fn code(self) -> &'static str {
        match self {
            Self::Red => "\u{1b}[31m",
            Self::Green => "\u{1b}[32m",
            Self::Yellow => "\u{1b}[33m",
            Self::BrightRed => "\u{1b}[91m",
            Self::BrightGreen => "\u{1b}[92m",
            Self::BrightYellow => "\u{1b}[93m",
            Self::BrightCyan => "\u{1b}[96m",
            Self::BrightWhite => "\u{1b}[97m",
        }
    }
}

/// Writes one line of text in the given colour.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn colorize<W: Write + ?Sized>(out: &mut W, color: Color, message: &str) -> io::Result<()> {
    writeln!(out, "{}{message}{RESET}", color.code())
}

/// Prints a fatal error once, in red, and flushes.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn report_fatal<W: Write + ?Sized>(out: &mut W, err: &dyn Error) -> io::Result<()> {
    colorize(out, Color::Red, &err.to_string())?;
    out.flush()
}

/// Reads answer lines from any buffered reader.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
/// garbled line still reaches the judge and is scored as a pass.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
}

impl<R: BufRead> LineReader<R> {
    /// Wraps `reader`.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead + Send + 'static> LineSource for LineReader<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        read_lossy_line(&mut self.reader)
    }
}

/// Reads answers from the process's standard input.
#[derive(Debug)]
pub struct StdinLines {
    stdin: io::Stdin,
}

impl StdinLines {
    /// Wraps the process's standard input.
    #[must_use]
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl Default for StdinLines {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for StdinLines {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        read_lossy_line(&mut self.stdin.lock())
    }
}

/// One line without its `\n` or `\r\n` terminator; `None` at end of input.
fn read_lossy_line<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    while matches!(buf.last(), Some(b'\n' | b'\r')) {
        buf.pop();
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}
