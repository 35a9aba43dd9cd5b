//! Chart drawing with plotters

use crate::cdf::CdfCurve;
use crate::error::{RenderError, RenderResult};
use crate::render::spec::{AxisScale, OutputFormat, PlotSpec};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

/// Render curves to the file named by `spec.output`
pub fn render(curves: &[CdfCurve], spec: &PlotSpec) -> RenderResult<()> {
    check_curves(curves, spec)?;
    let format = OutputFormat::from_path(&spec.output)?;
    ensure_parent_dir(&spec.output)?;

    let size = (spec.width, spec.height);
    match format {
        OutputFormat::Svg => {
            let root = SVGBackend::new(&spec.output, size).into_drawing_area();
            draw(&root, curves, spec)
        }
        OutputFormat::Bitmap => {
            let root = BitMapBackend::new(&spec.output, size).into_drawing_area();
            draw(&root, curves, spec)
        }
    }
}

/// Render curves as an SVG document in memory
pub fn render_svg_string(curves: &[CdfCurve], spec: &PlotSpec) -> RenderResult<String> {
    check_curves(curves, spec)?;

    let mut svg = String::new();
    {
        let root =
            SVGBackend::with_string(&mut svg, (spec.width, spec.height)).into_drawing_area();
        draw(&root, curves, spec)?;
    }
    Ok(svg)
}

fn check_curves(curves: &[CdfCurve], spec: &PlotSpec) -> RenderResult<()> {
    if curves.is_empty() {
        return Err(RenderError::NoCurves);
    }

    if spec.x_scale == AxisScale::Log10 {
        for (i, curve) in curves.iter().enumerate() {
            if curve.min() <= 0.0 {
                return Err(RenderError::NonPositiveLogValue {
                    label: spec.label_for(i, curve.source()).to_string(),
                    value: curve.min(),
                });
            }
        }
    }

    Ok(())
}

fn ensure_parent_dir(output: &Path) -> RenderResult<()> {
    match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.is_dir() => {
            Err(RenderError::Unwritable {
                path: output.to_path_buf(),
                error: format!("directory '{}' does not exist", dir.display()),
            })
        }
        _ => Ok(()),
    }
}

fn backend_err<E: Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> RenderError {
    RenderError::Backend(err.to_string())
}

/// Maps data values onto chart x positions
///
/// Positions are the scaled values themselves unless the padded range is
/// not representable as a finite `f64` span. In that case positions are
/// divided by a power of ten and tick labels multiply it back.
#[derive(Debug, Clone, Copy, PartialEq)]
struct XAxis {
    scale: AxisScale,
    unit: f64,
    range: (f64, f64),
}

impl XAxis {
    fn new(curves: &[CdfCurve], scale: AxisScale) -> Self {
        let lo = curves
            .iter()
            .map(|c| scale.forward(c.min()))
            .fold(f64::INFINITY, f64::min);
        let hi = curves
            .iter()
            .map(|c| scale.forward(c.max()))
            .fold(f64::NEG_INFINITY, f64::max);

        let range = padded(lo, hi);
        if (range.1 - range.0).is_finite() {
            return XAxis {
                scale,
                unit: 1.0,
                range,
            };
        }

        let magnitude = lo.abs().max(hi.abs());
        let unit = 10f64.powi(magnitude.log10().floor() as i32);
        XAxis {
            scale,
            unit,
            range: padded(lo / unit, hi / unit),
        }
    }

    fn position(&self, value: f64) -> f64 {
        self.scale.forward(value) / self.unit
    }

    /// Tick text; empty past the largest representable value
    fn label(&self, position: f64) -> String {
        let value = position * self.unit;
        if value.is_finite() {
            self.scale.format_tick(value)
        } else {
            String::new()
        }
    }
}

/// Pad a range so steps don't touch the frame
fn padded(lo: f64, hi: f64) -> (f64, f64) {
    let span = hi - lo;
    let pad = if span > 0.0 {
        span * 0.03
    } else {
        lo.abs() * 0.05 + 0.5
    };
    (lo - pad, hi + pad)
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    curves: &[CdfCurve],
    spec: &PlotSpec,
) -> RenderResult<()> {
    let axis = XAxis::new(curves, spec.x_scale);
    let (x_lo, x_hi) = axis.range;

    root.fill(&WHITE).map_err(backend_err)?;

    let mut builder = ChartBuilder::on(root);
    builder
        .margin(12)
        .x_label_area_size(46)
        .y_label_area_size(64);
    if !spec.title.is_empty() {
        builder.caption(&spec.title, ("sans-serif", 24));
    }
    let mut chart = builder
        .build_cartesian_2d(x_lo..x_hi, 0.0f64..1.02f64)
        .map_err(backend_err)?;

    let x_formatter = |v: &f64| axis.label(*v);
    let y_formatter = |v: &f64| format!("{:.2}", v);
    chart
        .configure_mesh()
        .x_desc(spec.x_label.as_str())
        .y_desc(spec.y_label.as_str())
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .draw()
        .map_err(backend_err)?;

    for (i, curve) in curves.iter().enumerate() {
        let color = Palette99::pick(i).mix(0.9);
        let steps = curve
            .step_points()
            .into_iter()
            .map(|(x, y)| (axis.position(x), y));

        chart
            .draw_series(LineSeries::new(steps, color.stroke_width(2)))
            .map_err(backend_err)?
            .label(spec.label_for(i, curve.source()))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });

        if spec.markers {
            chart
                .draw_series(curve.points().iter().map(|p| {
                    Circle::new((axis.position(p.value), p.fraction), 3, color.filled())
                }))
                .map_err(backend_err)?;
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(backend_err)?;

    root.present().map_err(backend_err)?;
    Ok(())
}
