//! Plot job: load, compute and render
//!
//! A job is the fully resolved description of one invocation. Building it
//! is the CLI's business; running it is a straight pipeline.

use crate::cdf::CdfCurve;
use crate::data::{load_samples, LoadOptions, SampleSet};
use crate::error::{ConfigError, Result};
use crate::render::{self, PlotSpec};
use crate::runner::report::{write_summary, write_table};
use crate::template::{curve_vars, interpolate, title_vars, DEFAULT_LABEL_TEMPLATE};
use crate::ui::Reporter;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Output path meaning "write SVG to stdout"
pub const STDOUT_OUTPUT: &str = "-";

/// Resolved description of one invocation
#[derive(Debug, Clone)]
pub struct Job {
    /// Input files, already expanded
    pub inputs: Vec<PathBuf>,

    /// Tokenizer options
    pub load: LoadOptions,

    /// Explicit label templates, one per input
    pub labels: Option<Vec<String>>,

    /// Label template used when `labels` is not given
    pub label_template: String,

    /// Plot settings; title and labels are templates until `prepare`
    pub spec: PlotSpec,

    /// Print a percentile summary to stdout
    pub summary: bool,

    /// Print the CDF points to stdout
    pub print_table: bool,

    /// Render the chart
    pub plot: bool,
}

/// Curves ready for output, with labels and title resolved
#[derive(Debug, Clone)]
pub struct Prepared {
    pub samples: Vec<SampleSet>,
    pub curves: Vec<CdfCurve>,
    pub spec: PlotSpec,
}

impl Job {
    pub fn new(inputs: Vec<PathBuf>) -> Self {
        Job {
            inputs,
            load: LoadOptions::default(),
            labels: None,
            label_template: DEFAULT_LABEL_TEMPLATE.to_string(),
            spec: PlotSpec::default(),
            summary: false,
            print_table: false,
            plot: true,
        }
    }

    /// Check that explicit labels line up with the inputs
    pub fn validate(&self) -> Result<()> {
        if let Some(labels) = &self.labels {
            if labels.len() != self.inputs.len() {
                return Err(ConfigError::LabelCount {
                    labels: labels.len(),
                    inputs: self.inputs.len(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Load every input and compute its curve
    pub fn prepare(&self, reporter: &Reporter) -> Result<Prepared> {
        self.validate()?;

        let mut samples = Vec::with_capacity(self.inputs.len());
        let mut curves = Vec::with_capacity(self.inputs.len());

        for path in &self.inputs {
            let set = load_samples(path, &self.load)?;
            reporter.info(&format!("Loaded {} samples from {}", set.len(), set.source()));

            let curve = CdfCurve::from_samples(&set)?;
            reporter.debug(&format!(
                "{}: {} distinct values in [{}, {}]",
                set.source(),
                curve.points().len(),
                curve.min(),
                curve.max()
            ));

            samples.push(set);
            curves.push(curve);
        }

        let labels = samples
            .iter()
            .zip(&curves)
            .enumerate()
            .map(|(i, (set, curve))| {
                let template = match &self.labels {
                    Some(labels) => labels[i].as_str(),
                    None => self.label_template.as_str(),
                };
                interpolate(template, &curve_vars(i + 1, set, curve))
            })
            .collect();

        let title = interpolate(&self.spec.title, &title_vars(curves.len()));
        let spec = self.spec.clone().with_title(title).with_labels(labels);

        Ok(Prepared {
            samples,
            curves,
            spec,
        })
    }

    /// Run the whole pipeline, writing tables to `out`
    pub fn execute_to<W: Write>(&self, reporter: &Reporter, out: &mut W) -> Result<()> {
        let prepared = self.prepare(reporter)?;

        if self.summary {
            write_summary(out, &prepared.curves, &prepared.spec)?;
        }
        if self.print_table {
            write_table(out, &prepared.curves, &prepared.spec)?;
        }

        if self.plot {
            if prepared.spec.output == Path::new(STDOUT_OUTPUT) {
                let svg = render::render_svg_string(&prepared.curves, &prepared.spec)?;
                out.write_all(svg.as_bytes())?;
                reporter.debug("Wrote SVG to stdout");
            } else {
                render::render(&prepared.curves, &prepared.spec)?;
                reporter.info(&format!("Wrote {}", prepared.spec.output.display()));
            }
        }

        out.flush()?;
        Ok(())
    }

    /// Run the whole pipeline against stdout
    pub fn execute(&self, reporter: &Reporter) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.execute_to(reporter, &mut out)
    }
}
