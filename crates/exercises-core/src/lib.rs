//! Exercises Core — shared abstractions.
//!
//! This crate defines the small set of traits and types that the story
//! server and the quiz game both lean on. Production implementations that
//! touch the outside world live with the binaries that need them.

pub mod clock;
pub mod error;
pub mod input;
pub mod rng;
