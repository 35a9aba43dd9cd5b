//! Empirical CDF computation
//!
//! A curve is a right-continuous step function with ties merged: every
//! distinct sample value appears once, carrying the fraction of samples
//! less than or equal to it.

pub mod curve;
pub mod summary;

// Re-export main types
pub use curve::*;
pub use summary::*;
