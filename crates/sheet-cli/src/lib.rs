//! CLI library components for the Foundry VTT to Udonarium converter.

pub mod logging;
pub mod pipeline;
