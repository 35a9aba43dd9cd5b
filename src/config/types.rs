//! Core configuration types
//!
//! This module defines the data structures that represent a cdf-genplot.yml
//! defaults file.

use serde::{Deserialize, Serialize};

/// Plot defaults read from a config file
///
/// Every key is optional; anything left out falls back to the built-in
/// default, and command line flags override all of them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Chart caption
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// X axis description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_label: Option<String>,

    /// Y axis description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_label: Option<String>,

    /// Canvas width in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Canvas height in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Output path; the extension selects the image format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Use a logarithmic x axis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_x: Option<bool>,

    /// Draw a marker at every CDF point
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markers: Option<bool>,

    /// Prefix that starts a comment in input files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_prefix: Option<String>,

    /// Read only this column (1-based) of each input line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,

    /// Template for curve labels when `--labels` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_template: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let yaml = r#"
title: Request latency
x_label: latency (ms)
y_label: fraction
width: 1024
height: 768
output: latency.png
log_x: true
markers: false
comment_prefix: "//"
column: 2
label_template: "${stem} (n=${n})"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title.as_deref(), Some("Request latency"));
        assert_eq!(config.width, Some(1024));
        assert_eq!(config.height, Some(768));
        assert_eq!(config.log_x, Some(true));
        assert_eq!(config.markers, Some(false));
        assert_eq!(config.comment_prefix.as_deref(), Some("//"));
        assert_eq!(config.column, Some(2));
        assert_eq!(config.label_template.as_deref(), Some("${stem} (n=${n})"));
    }

    #[test]
    fn test_deserialize_empty_mapping() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("colour: red\n");
        assert!(result.is_err());
    }
}
