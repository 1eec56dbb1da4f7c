//! Story domain types.

pub mod story;
