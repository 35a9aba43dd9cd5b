//! Numeric token parsing

use crate::data::samples::{SampleSet, STDIN_SOURCE};
use crate::error::{LoadError, LoadResult};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Default prefix for comment lines
pub const DEFAULT_COMMENT_PREFIX: &str = "#";

/// Options controlling how input text is tokenized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Text after this prefix on a line is ignored
    pub comment_prefix: String,

    /// Read only this field (1-based) of each line
    pub column: Option<usize>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            comment_prefix: DEFAULT_COMMENT_PREFIX.to_string(),
            column: None,
        }
    }
}

impl LoadOptions {
    pub fn with_column(mut self, column: Option<usize>) -> Self {
        self.column = column;
        self
    }

    pub fn with_comment_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.comment_prefix = prefix.into();
        self
    }
}

/// Load samples from a file, or from stdin when `path` is `-`
pub fn load_samples(path: &Path, options: &LoadOptions) -> LoadResult<SampleSet> {
    let source = path.to_string_lossy().into_owned();

    if source == STDIN_SOURCE {
        let stdin = io::stdin();
        return parse_samples(&source, stdin.lock(), options);
    }

    let file = File::open(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_samples(&source, BufReader::new(file), options)
}

/// Parse whitespace/line-delimited numeric tokens from a reader
///
/// Commas are accepted as separators too, so single-row CSV lists load
/// without a column selection.
pub fn parse_samples<R: BufRead>(
    source: &str,
    mut reader: R,
    options: &LoadOptions,
) -> LoadResult<SampleSet> {
    let mut values = Vec::new();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf).map_err(|e| LoadError::Io {
            path: source.into(),
            source: e,
        })?;
        if read == 0 {
            break;
        }
        line_no += 1;

        // Invalid UTF-8 becomes U+FFFD and is rejected with the token it lands in
        let line = String::from_utf8_lossy(&buf);
        let content = strip_comment(&line, &options.comment_prefix).trim();
        if content.is_empty() {
            continue;
        }

        let mut fields = content
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|f| !f.is_empty());

        match options.column {
            Some(column) => {
                let token = fields.nth(column.saturating_sub(1)).ok_or_else(|| {
                    LoadError::MissingColumn {
                        input: source.to_string(),
                        line: line_no,
                        column,
                    }
                })?;
                values.push(parse_token(source, line_no, token)?);
            }
            None => {
                for token in fields {
                    values.push(parse_token(source, line_no, token)?);
                }
            }
        }
    }

    Ok(SampleSet::new(source, values))
}

/// Cut a line at the first comment prefix
fn strip_comment<'a>(line: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        return line;
    }
    match line.find(prefix) {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Parse one token; NaN and infinities are rejected
fn parse_token(source: &str, line: usize, token: &str) -> LoadResult<f64> {
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| LoadError::Parse {
            input: source.to_string(),
            line,
            token: token.to_string(),
        })
}
