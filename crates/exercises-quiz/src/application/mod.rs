//! Quiz loading, session orchestration, and reporting.

pub mod game;
pub mod loader;
pub mod report;
pub mod runner;
pub mod shuffle;
