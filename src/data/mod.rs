//! Sample loading
//!
//! This module reads numeric samples from text files (or stdin) and
//! resolves the input list given on the command line.

pub mod inputs;
pub mod load;
pub mod samples;

// Re-export main types
pub use inputs::*;
pub use load::*;
pub use samples::*;
