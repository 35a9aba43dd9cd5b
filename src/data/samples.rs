//! Sample set type

use std::path::Path;

/// Source name used when samples are read from standard input
pub const STDIN_SOURCE: &str = "-";

/// An immutable set of finite samples read from one input
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    source: String,
    values: Vec<f64>,
}

impl SampleSet {
    pub fn new(source: impl Into<String>, values: Vec<f64>) -> Self {
        SampleSet {
            source: source.into(),
            values,
        }
    }

    /// Where the samples came from (a path, or `-` for stdin)
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Samples in input order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// File name of the source without its extension
    pub fn stem(&self) -> String {
        if self.source == STDIN_SOURCE {
            return "stdin".to_string();
        }
        Path::new(&self.source)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.clone())
    }

    /// File name of the source including its extension
    pub fn file_name(&self) -> String {
        if self.source == STDIN_SOURCE {
            return "stdin".to_string();
        }
        Path::new(&self.source)
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.clone())
    }
}
