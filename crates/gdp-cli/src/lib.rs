//! CLI library components for the GDP tidy tool.

pub mod logging;
pub mod pipeline;
