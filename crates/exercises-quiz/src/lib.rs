//! Exercises — timed quiz game.
//!
//! Loads question/answer records from a CSV file, shuffles them, and asks
//! each one on the console under a per-question time limit. A single missed
//! deadline ends the whole session.

pub mod application;
pub mod config;
pub mod console;
pub mod domain;
pub mod error;
