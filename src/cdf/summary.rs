//! Percentile summaries

use crate::cdf::curve::CdfCurve;
use std::fmt;
use std::ops::Range;

/// Percentiles reported by `--summary`
pub const SUMMARY_PERCENTILES: &[(&str, f64)] = &[
    ("p25", 0.25),
    ("median", 0.5),
    ("p75", 0.75),
    ("p90", 0.9),
    ("p99", 0.99),
];

/// Magnitudes printed in positional notation; others use an exponent
const PLAIN_MAGNITUDE: Range<f64> = 1e-5..1e16;

fn is_plain(value: f64) -> bool {
    value == 0.0 || PLAIN_MAGNITUDE.contains(&value.abs())
}

/// Shortest text that parses back to `value`
pub fn format_number(value: f64) -> String {
    if is_plain(value) {
        format!("{}", value)
    } else {
        format!("{:e}", value)
    }
}

/// Six decimals, or six mantissa decimals outside the plain range
fn format_mean(value: f64) -> String {
    if is_plain(value) {
        format!("{:.6}", value)
    } else {
        format!("{:.6e}", value)
    }
}

/// Descriptive statistics of one curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub n: usize,
    pub min: f64,
    pub p25: f64,
    pub median: f64,
    pub p75: f64,
    pub p90: f64,
    pub p99: f64,
    pub max: f64,
    pub mean: f64,
}

impl CdfCurve {
    /// Summarize the distribution
    pub fn summary(&self) -> Summary {
        let q = |p: f64| self.quantile(p).unwrap_or_else(|| self.max());

        // Each point's weight is the fraction it adds over its predecessor
        let mut mean = 0.0;
        let mut previous = 0.0;
        for point in self.points() {
            mean += point.value * (point.fraction - previous);
            previous = point.fraction;
        }

        Summary {
            n: self.len(),
            min: self.min(),
            p25: q(0.25),
            median: q(0.5),
            p75: q(0.75),
            p90: q(0.9),
            p99: q(0.99),
            max: self.max(),
            mean,
        }
    }
}

impl Summary {
    /// Column headers matching the `Display` output
    pub fn header() -> String {
        let mut columns = vec!["n", "min"];
        columns.extend(SUMMARY_PERCENTILES.iter().map(|(name, _)| *name));
        columns.extend(["max", "mean"]);
        columns.join("\t")
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.n,
            format_number(self.min),
            format_number(self.p25),
            format_number(self.median),
            format_number(self.p75),
            format_number(self.p90),
            format_number(self.p99),
            format_number(self.max),
            format_mean(self.mean)
        )
    }
}
