//! Per-question outcomes, running tallies, and the final score.

/// Points awarded for a correct answer.
pub const CORRECT_POINTS: i64 = 3;
/// Points awarded for a non-numeric response.
pub const PASS_POINTS: i64 = 1;
/// Points awarded for a wrong number.
pub const WRONG_POINTS: i64 = -1;

/// How a single answered question was judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The response parsed and matched the expected answer.
    Correct,
    /// The response was not an integer.
    Passed,
    /// The response parsed but did not match.
    Wrong,
}

impl Outcome {
    /// Judges a raw response line against the expected answer.
    ///
    /// Surrounding whitespace is ignored.
    #[must_use]
    pub fn judge(expected: i64, response: &str) -> Self {
        match response.trim().parse::<i64>() {
            Err(_) => Self::Passed,
            Ok(value) if value == expected => Self::Correct,
            Ok(_) => Self::Wrong,
        }
    }

    /// Points this outcome contributes to the total.
    #[must_use]
    pub const fn points(self) -> i64 {
        match self {
            Self::Correct => CORRECT_POINTS,
            Self::Passed => PASS_POINTS,
            Self::Wrong => WRONG_POINTS,
        }
    }
}

/// Running counts for a session, mutated only by the session loop.
///
/// `correct + passed + wrong` is always the number of questions judged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    correct: usize,
    passed: usize,
    wrong: usize,
}

impl Tally {
    /// Counts one judged question.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Correct => self.correct += 1,
            Outcome::Passed => self.passed += 1,
            Outcome::Wrong => self.wrong += 1,
        }
    }

    /// Number of questions judged so far.
    #[must_use]
    pub const fn judged(&self) -> usize {
        self.correct + self.passed + self.wrong
    }

    /// Number of correct answers so far.
    #[must_use]
    pub const fn correct(&self) -> usize {
        self.correct
    }

    /// Final report after every question was answered.
    #[must_use]
    pub const fn completed(&self, total_questions: usize) -> Report {
        Report {
            total_questions,
            correct: self.correct,
            passed: self.passed,
            wrong: self.wrong,
        }
    }

    /// Final report when the clock ran out.
    ///
    /// Passes are discarded and every question not answered correctly,
    /// including the unasked ones, counts as wrong.
    #[must_use]
    pub const fn timed_out(&self, total_questions: usize) -> Report {
        Report {
            total_questions,
            correct: self.correct,
            passed: 0,
            wrong: total_questions.saturating_sub(self.correct),
        }
    }
}

/// Final counts handed to the reporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Number of questions loaded for the session.
    pub total_questions: usize,
    /// Correct answers.
    pub correct: usize,
    /// Non-numeric responses.
    pub passed: usize,
    /// Wrong answers.
    pub wrong: usize,
}

impl Report {
    /// `correct*3 + passed*1 - wrong`.
    #[must_use]
    pub fn points(&self) -> i64 {
        count(self.correct) * CORRECT_POINTS
            + count(self.passed) * PASS_POINTS
            + count(self.wrong) * WRONG_POINTS
    }
}

fn count(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_number_is_correct() {
        assert_eq!(Outcome::judge(10, "10"), Outcome::Correct);
        assert_eq!(Outcome::judge(-4, "  -4 \n"), Outcome::Correct);
    }

    #[test]
    fn test_other_number_is_wrong() {
        assert_eq!(Outcome::judge(10, "11"), Outcome::Wrong);
        assert_eq!(Outcome::judge(0, "+1"), Outcome::Wrong);
    }

    #[test]
    fn test_non_numeric_is_passed() {
        assert_eq!(Outcome::judge(10, "ten"), Outcome::Passed);
        assert_eq!(Outcome::judge(10, ""), Outcome::Passed);
        assert_eq!(Outcome::judge(10, "1 0"), Outcome::Passed);
        assert_eq!(Outcome::judge(10, "10.0"), Outcome::Passed);
    }

    #[test]
    fn test_outcome_points() {
        assert_eq!(Outcome::Correct.points(), 3);
        assert_eq!(Outcome::Passed.points(), 1);
        assert_eq!(Outcome::Wrong.points(), -1);
    }

    #[test]
    fn test_tally_sums_to_judged() {
        // Arrange
        let mut tally = Tally::default();
        let outcomes = [
            Outcome::Correct,
            Outcome::Wrong,
            Outcome::Passed,
            Outcome::Correct,
            Outcome::Wrong,
        ];

        // Act
        for outcome in outcomes {
            tally.record(outcome);
        }

        // Assert
        assert_eq!(tally.judged(), outcomes.len());
        let report = tally.completed(outcomes.len());
        assert_eq!(report.correct + report.passed + report.wrong, report.total_questions);
        assert_eq!(report.points(), 3 + 3 + 1 - 1 - 1);
    }

    #[test]
    fn test_timed_out_report_forces_pass_to_zero() {
        // Arrange — 5 questions, 2 correct and 1 pass before the deadline.
        let mut tally = Tally::default();
        tally.record(Outcome::Correct);
        tally.record(Outcome::Passed);
        tally.record(Outcome::Correct);

        // Act
        let report = tally.timed_out(5);

        // Assert
        assert_eq!(
            report,
            Report {
                total_questions: 5,
                correct: 2,
                passed: 0,
                wrong: 3,
            }
        );
        assert_eq!(report.points(), 6 - 3);
    }

    #[test]
    fn test_empty_session_scores_zero() {
        let report = Tally::default().completed(0);

        assert_eq!(report.points(), 0);
    }

    #[test]
    fn test_points_can_go_negative() {
        let report = Report {
            total_questions: 4,
            correct: 0,
            passed: 0,
            wrong: 4,
        };

        assert_eq!(report.points(), -4);
    }
}
