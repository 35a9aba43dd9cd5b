//! Pipeline execution
//!
//! This module runs a resolved job: loading inputs, computing curves,
//! printing reports and rendering the chart.

pub mod job;
pub mod report;

// Re-export main types
pub use job::*;
pub use report::*;
