//! Configuration validation
//!
//! This module provides validation logic for configuration files.

use crate::config::types::Config;
use crate::error::{ConfigError, ConfigResult};
use crate::render::OutputFormat;
use std::ops::RangeInclusive;
use std::path::Path;

/// Accepted canvas dimensions in pixels
pub const CANVAS_SIZE_RANGE: RangeInclusive<u32> = 64..=10_000;

/// Validate a complete configuration
pub fn validate_config(config: &Config) -> ConfigResult<()> {
    if let Some(width) = config.width {
        validate_canvas_size("width", width)?;
    }
    if let Some(height) = config.height {
        validate_canvas_size("height", height)?;
    }

    if let Some(column) = config.column {
        validate_column(column)?;
    }

    if let Some(prefix) = &config.comment_prefix {
        if prefix.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "comment_prefix must not be empty".to_string(),
            ));
        }
    }

    if let Some(output) = &config.output {
        validate_output(output)?;
    }

    Ok(())
}

/// Validate one canvas dimension
pub fn validate_canvas_size(name: &str, value: u32) -> ConfigResult<()> {
    if CANVAS_SIZE_RANGE.contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "{} must be between {} and {} pixels, got {}",
            name,
            CANVAS_SIZE_RANGE.start(),
            CANVAS_SIZE_RANGE.end(),
            value
        )))
    }
}

/// Validate a 1-based column index
pub fn validate_column(column: usize) -> ConfigResult<()> {
    if column == 0 {
        return Err(ConfigError::Invalid(
            "column is 1-based and must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Validate that an output path has a supported extension
pub fn validate_output(output: &str) -> ConfigResult<()> {
    if output == "-" {
        return Ok(());
    }
    OutputFormat::from_path(Path::new(output))
        .map(|_| ())
        .map_err(|e| ConfigError::Invalid(e.to_string()))
}
