//! Quiz domain types.

pub mod record;
pub mod tally;
