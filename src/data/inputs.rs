//! Input list resolution

use crate::data::samples::STDIN_SOURCE;
use crate::error::{LoadError, LoadResult};
use std::path::{Path, PathBuf};

/// Resolve command line inputs into concrete paths
///
/// An input naming an existing path (or `-`) is used as-is. Anything else
/// is expanded as a glob pattern; matches are sorted, and a pattern that
/// matches no file is an error.
pub fn expand_inputs(inputs: &[String]) -> LoadResult<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for input in inputs {
        if input == STDIN_SOURCE || Path::new(input).exists() {
            paths.push(PathBuf::from(input));
            continue;
        }

        let entries = glob::glob(input).map_err(|e| LoadError::BadPattern {
            pattern: input.clone(),
            error: e.to_string(),
        })?;

        let mut matched: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .filter(|path| path.is_file())
            .collect();

        if matched.is_empty() {
            // Literal names that don't exist should fail like an open() would
            if !is_glob_pattern(input) {
                return Err(LoadError::Io {
                    path: PathBuf::from(input),
                    source: std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "No such file or directory",
                    ),
                });
            }
            return Err(LoadError::NoMatch(input.clone()));
        }

        matched.sort();
        paths.extend(matched);
    }

    Ok(paths)
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains(['*', '?', '['])
}
