//! Configuration parsing and validation
//!
//! This module handles discovery and parsing of cdf-genplot.yml defaults
//! files and validation of their values.

pub mod parse;
pub mod schema;
pub mod types;

// Re-export main types
pub use parse::*;
pub use schema::*;
pub use types::*;
