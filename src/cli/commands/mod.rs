//! CLI command implementations

pub mod analyze;
pub mod evaluate;
pub mod solve;
