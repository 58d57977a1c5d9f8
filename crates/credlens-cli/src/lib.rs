//! CLI library components for credlens.

pub mod logging;
pub mod report;
pub mod table;
pub mod views;
