//! Variable interpolation for titles and labels
//!
//! Strings may reference `${var}` placeholders. Variables come from the
//! curve being labelled first and the process environment second; unknown
//! names are left untouched.

use crate::cdf::CdfCurve;
use crate::data::SampleSet;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::env;
use std::sync::OnceLock;

/// Default label for a curve
pub const DEFAULT_LABEL_TEMPLATE: &str = "${stem}";

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid"))
}

/// Replace `${var}` placeholders in a string
///
/// Substituted values are not interpolated again.
pub fn interpolate(s: &str, vars: &HashMap<String, String>) -> String {
    placeholder()
        .replace_all(s, |caps: &Captures| {
            let name = &caps[1];

            if let Some(value) = vars.get(name) {
                return value.clone();
            }

            if let Ok(value) = env::var(name) {
                return value;
            }

            caps[0].to_string()
        })
        .into_owned()
}

/// Variables describing one input and its curve
///
/// `index` is 1-based.
pub fn curve_vars(index: usize, samples: &SampleSet, curve: &CdfCurve) -> HashMap<String, String> {
    let mut vars = HashMap::new();
    vars.insert("index".to_string(), index.to_string());
    vars.insert("file".to_string(), samples.file_name());
    vars.insert("stem".to_string(), samples.stem());
    vars.insert("path".to_string(), samples.source().to_string());
    vars.insert("n".to_string(), curve.len().to_string());
    vars.insert("min".to_string(), curve.min().to_string());
    vars.insert("max".to_string(), curve.max().to_string());
    if let Some(median) = curve.quantile(0.5) {
        vars.insert("median".to_string(), median.to_string());
    }
    vars
}

/// Variables available to the chart title
pub fn title_vars(curve_count: usize) -> HashMap<String, String> {
    let mut vars = HashMap::new();
    vars.insert("count".to_string(), curve_count.to_string());
    vars
}
