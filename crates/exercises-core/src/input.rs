//! Line-oriented input abstraction.
//!
//! The quiz reads one answer line at a time from the console. Tests feed a
//! scripted sequence instead.

use std::io;

/// A blocking source of text lines.
///
/// Implementations may block indefinitely; callers that need a deadline run
/// them on a dedicated thread.
pub trait LineSource: Send + 'static {
    /// Reads the next line without its trailing newline.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the read fails.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}
