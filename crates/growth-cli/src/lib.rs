//! CLI library components for the Z-score evaluator.

pub mod logging;
pub mod render;
pub mod report;
