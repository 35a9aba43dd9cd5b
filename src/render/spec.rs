//! Plot specification types

use crate::error::{RenderError, RenderResult};
use std::path::{Path, PathBuf};

/// Default output path when neither the command line nor the config name one
pub const DEFAULT_OUTPUT: &str = "cdf.svg";

/// Default canvas size in pixels
pub const DEFAULT_SIZE: (u32, u32) = (1024, 768);

/// Image format chosen from the output file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    /// PNG, JPEG or BMP, encoded by the bitmap backend
    Bitmap,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> RenderResult<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "png" | "jpg" | "jpeg" | "bmp" => Ok(OutputFormat::Bitmap),
            _ => Err(RenderError::UnsupportedFormat(ext)),
        }
    }
}

/// Scale of the x axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisScale {
    #[default]
    Linear,
    Log10,
}

impl AxisScale {
    /// Map a data value onto the axis
    pub fn forward(self, value: f64) -> f64 {
        match self {
            AxisScale::Linear => value,
            AxisScale::Log10 => value.log10(),
        }
    }

    /// Format an axis position as the data value it stands for
    pub fn format_tick(self, position: f64) -> String {
        match self {
            AxisScale::Linear => format_value(position),
            AxisScale::Log10 => format_value(10f64.powf(position)),
        }
    }
}

/// Compact human readable number
pub fn format_value(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-3..1e5).contains(&magnitude) {
        return format!("{:.1e}", value);
    }

    let text = format!("{:.3}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

/// Everything the renderer needs besides the curves
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSpec {
    /// Chart caption; empty for none
    pub title: String,

    pub x_label: String,

    pub y_label: String,

    /// Legend labels, one per curve; curves without one use their source name
    pub labels: Vec<String>,

    pub width: u32,

    pub height: u32,

    pub x_scale: AxisScale,

    /// Draw a marker at every distinct value
    pub markers: bool,

    pub output: PathBuf,
}

impl Default for PlotSpec {
    fn default() -> Self {
        PlotSpec {
            title: String::new(),
            x_label: "value".to_string(),
            y_label: "cumulative fraction".to_string(),
            labels: Vec::new(),
            width: DEFAULT_SIZE.0,
            height: DEFAULT_SIZE.1,
            x_scale: AxisScale::Linear,
            markers: false,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl PlotSpec {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_axis_labels(
        mut self,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_x_scale(mut self, scale: AxisScale) -> Self {
        self.x_scale = scale;
        self
    }

    pub fn with_markers(mut self, markers: bool) -> Self {
        self.markers = markers;
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Label of the curve at `index`
    pub fn label_for<'a>(&'a self, index: usize, fallback: &'a str) -> &'a str {
        self.labels
            .get(index)
            .map(String::as_str)
            .unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_extension() {
        assert_eq!(
            OutputFormat::from_path(Path::new("a.svg")).unwrap(),
            OutputFormat::Svg
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("dir/a.PNG")).unwrap(),
            OutputFormat::Bitmap
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("a.jpeg")).unwrap(),
            OutputFormat::Bitmap
        );
        assert!(matches!(
            OutputFormat::from_path(Path::new("a.pdf")),
            Err(RenderError::UnsupportedFormat(ext)) if ext == "pdf"
        ));
        assert!(OutputFormat::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_log_scale_round_trip_label() {
        let scale = AxisScale::Log10;
        assert_eq!(scale.forward(100.0), 2.0);
        assert_eq!(scale.format_tick(2.0), "100");
        assert_eq!(AxisScale::Linear.format_tick(2.5), "2.5");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(1.0), "1");
        assert_eq!(format_value(0.25), "0.25");
        assert_eq!(format_value(-0.0001), "-1.0e-4");
        assert_eq!(format_value(250000.0), "2.5e5");
    }

    #[test]
    fn test_label_fallback() {
        let spec = PlotSpec::default().with_labels(vec!["first".to_string()]);
        assert_eq!(spec.label_for(0, "a.txt"), "first");
        assert_eq!(spec.label_for(1, "b.txt"), "b.txt");
    }
}
