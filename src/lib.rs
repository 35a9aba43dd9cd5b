//! cdf-genplotter - empirical CDF plots from the command line
//!
//! Reads files of numeric samples, computes the empirical cumulative
//! distribution function of each and renders the curves on one chart.
//!
//! The pipeline is linear: [`data`] loads a [`data::SampleSet`],
//! [`cdf`] turns it into a [`cdf::CdfCurve`], and [`render`] draws curves
//! according to a [`render::PlotSpec`].

// Public modules
pub mod cdf;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod render;
pub mod runner;
pub mod template;
pub mod ui;

// Re-export commonly used types
pub use cdf::{CdfCurve, CdfPoint};
pub use data::SampleSet;
pub use error::{GenplotError, Result};
pub use render::PlotSpec;

/// Current version of cdf-genplotter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
