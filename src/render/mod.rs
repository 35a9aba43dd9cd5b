//! Plot rendering
//!
//! Curves are drawn as step functions on a shared chart and written as SVG
//! or as a bitmap (PNG, JPEG, BMP) depending on the output extension.

pub mod chart;
pub mod spec;

// Re-export main types
pub use chart::*;
pub use spec::*;
