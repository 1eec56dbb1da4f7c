//! Shared test doubles and fixtures for the exercises workspace.

mod answers;
mod clock;
mod fixtures;
mod rng;

pub use answers::{FailingAnswers, ScriptedAnswers};
pub use clock::FixedClock;
pub use fixtures::SAMPLE_STORY_JSON;
pub use rng::{MockRng, SequenceRng};
