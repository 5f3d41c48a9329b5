//! CLI library components for the data-model generator.

pub mod logging;
pub mod pipeline;
