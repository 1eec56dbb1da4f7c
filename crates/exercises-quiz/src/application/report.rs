//! Prints the end-of-session result.

use std::io::{self, Write};

use crate::console::{Color, colorize};
use crate::domain::tally::Report;

/// Writes the coloured result block for `report`.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_report<W: Write + ?Sized>(out: &mut W, report: &Report) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Result:")?;
    colorize(
        out,
        Color::BrightWhite,
        &format!("  Number of Questions: {}", report.total_questions),
    )?;
    colorize(out, Color::BrightGreen, &format!("  Correct: {}", report.correct))?;
    colorize(out, Color::BrightRed, &format!("  Wrong: {}", report.wrong))?;
    colorize(out, Color::BrightYellow, &format!("  Pass: {}", report.passed))?;
    colorize(
        out,
        Color::BrightCyan,
        &format!("  Total Points: {}", report.points()),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lists_counts_and_points() {
        // Arrange
        let report = Report {
            total_questions: 5,
            correct: 2,
            passed: 0,
            wrong: 3,
        };
        let mut out = Vec::new();

        // Act
        write_report(&mut out, &report).unwrap();

        // Assert
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Result:"));
        assert!(text.contains("Number of Questions: 5"));
        assert!(text.contains("Correct: 2"));
        assert!(text.contains("Wrong: 3"));
        assert!(text.contains("Pass: 0"));
        assert!(text.contains("Total Points: 3"));
    }

    #[test]
    fn test_report_does_not_mutate_input() {
        let report = Report {
            total_questions: 1,
            correct: 0,
            passed: 1,
            wrong: 0,
        };
        let before = report;

        write_report(&mut Vec::<u8>::new(), &report).unwrap();

        assert_eq!(report, before);
    }
}
