//! Story rendering.

pub mod renderer;
