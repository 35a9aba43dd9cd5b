//! The CDF curve type

use crate::data::SampleSet;
use crate::error::{CdfError, CdfResult};

/// One step of an empirical CDF
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CdfPoint {
    /// Distinct sample value
    pub value: f64,
    /// Fraction of samples <= value
    pub fraction: f64,
}

/// Empirical CDF of a sample set
///
/// Values are strictly increasing, fractions are strictly increasing in
/// (0, 1] and the last fraction is exactly 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct CdfCurve {
    source: String,
    points: Vec<CdfPoint>,
    n: usize,
}

impl CdfCurve {
    /// Build the CDF of a sample set
    ///
    /// Time complexity: O(n log n) for sorting
    pub fn from_samples(samples: &SampleSet) -> CdfResult<Self> {
        if samples.is_empty() {
            return Err(CdfError::EmptyInput(samples.source().to_string()));
        }

        let mut sorted = samples.values().to_vec();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        let total = n as f64;
        let mut points: Vec<CdfPoint> = Vec::new();

        for (i, &value) in sorted.iter().enumerate() {
            // Rank counts from 1 so the last sample lands on n / n
            let fraction = if i + 1 == n {
                1.0
            } else {
                (i + 1) as f64 / total
            };

            match points.last_mut() {
                Some(last) if last.value == value => last.fraction = fraction,
                _ => points.push(CdfPoint { value, fraction }),
            }
        }

        Ok(CdfCurve {
            source: samples.source().to_string(),
            points,
            n,
        })
    }

    /// Source the samples were read from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Distinct points of the curve in ascending order
    pub fn points(&self) -> &[CdfPoint] {
        &self.points
    }

    /// Number of samples the curve was built from
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always false; empty sample sets are rejected at construction
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn min(&self) -> f64 {
        self.points[0].value
    }

    pub fn max(&self) -> f64 {
        self.points[self.points.len() - 1].value
    }

    /// Fraction of samples <= x
    ///
    /// Time complexity: O(log n)
    pub fn evaluate(&self, x: f64) -> f64 {
        // Number of points with value <= x
        let idx = self.points.partition_point(|p| p.value <= x);
        if idx == 0 {
            0.0
        } else {
            self.points[idx - 1].fraction
        }
    }

    /// Smallest value v with F(v) >= p
    ///
    /// Returns `None` when p is outside [0, 1].
    pub fn quantile(&self, p: f64) -> Option<f64> {
        if !(0.0..=1.0).contains(&p) {
            return None;
        }

        let idx = self.points.partition_point(|pt| pt.fraction < p);
        let idx = idx.min(self.points.len() - 1);
        Some(self.points[idx].value)
    }

    /// Polyline for drawing the step function
    ///
    /// Starts at `(min, 0)`, rises vertically at each distinct value and
    /// runs horizontally between values.
    pub fn step_points(&self) -> Vec<(f64, f64)> {
        let mut out = Vec::with_capacity(self.points.len() * 2 + 1);
        let mut previous = 0.0;

        out.push((self.min(), 0.0));
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                out.push((point.value, previous));
            }
            out.push((point.value, point.fraction));
            previous = point.fraction;
        }

        out
    }
}
