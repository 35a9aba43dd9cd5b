//! Error types for cdf-genplotter

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for cdf-genplotter operations
pub type Result<T> = std::result::Result<T, GenplotError>;

/// Main error type for cdf-genplotter
#[derive(Error, Debug)]
pub enum GenplotError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input loading errors
    #[error("Input error: {0}")]
    Load(#[from] LoadError),

    /// CDF computation errors
    #[error("CDF error: {0}")]
    Cdf(#[from] CdfError),

    /// Plot rendering errors
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration discovery and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file '{0}' does not exist")]
    NotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Got {labels} label(s) for {inputs} input(s)")]
    LabelCount { labels: usize, inputs: usize },

    #[error("Failed to read config file '{path}': {error}")]
    Read { path: PathBuf, error: String },
}

/// Sample loading errors
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{input}:{line}: '{token}' is not a finite number")]
    Parse {
        input: String,
        line: usize,
        token: String,
    },

    #[error("{input}:{line}: no column {column}")]
    MissingColumn {
        input: String,
        line: usize,
        column: usize,
    },

    #[error("No input files match '{0}'")]
    NoMatch(String),

    #[error("Invalid input pattern '{pattern}': {error}")]
    BadPattern { pattern: String, error: String },
}

/// CDF computation errors
#[derive(Error, Debug)]
pub enum CdfError {
    #[error("'{0}' contains no samples")]
    EmptyInput(String),
}

/// Plot rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Nothing to plot")]
    NoCurves,

    #[error("Unsupported output format '{0}' (expected svg, png, jpg, jpeg or bmp)")]
    UnsupportedFormat(String),

    #[error("Cannot write '{path}': {error}")]
    Unwritable { path: PathBuf, error: String },

    #[error("Log scale needs positive values, but '{label}' contains {value}")]
    NonPositiveLogValue { label: String, value: f64 },

    #[error("Drawing backend failed: {0}")]
    Backend(String),
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for loading operations
pub type LoadResult<T> = std::result::Result<T, LoadError>;

/// Specialized result type for CDF operations
pub type CdfResult<T> = std::result::Result<T, CdfError>;

/// Specialized result type for rendering operations
pub type RenderResult<T> = std::result::Result<T, RenderError>;
