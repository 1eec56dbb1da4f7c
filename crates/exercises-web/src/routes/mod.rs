//! Route modules.

pub mod story;
