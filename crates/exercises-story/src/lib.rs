//! Exercises — branching story store.
//!
//! Responsible for decoding the JSON story document into chapters and
//! rendering a chapter into an HTML page of paragraphs and option links.

pub mod application;
pub mod domain;
