//! A single question and its expected answer.

/// One question/expected-answer pair loaded from the quiz file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRecord {
    /// Question text shown to the player.
    pub question: String,
    /// The integer the player must type.
    pub answer: i64,
}

impl QuizRecord {
    /// Creates a record.
    #[must_use]
    pub fn new(question: impl Into<String>, answer: i64) -> Self {
        Self {
            question: question.into(),
            answer,
        }
    }
}
