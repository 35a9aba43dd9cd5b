//! Integration tests for the load → compute → render pipeline

mod common;

use cdf_genplotter::cdf::CdfCurve;
use cdf_genplotter::cli::App;
use cdf_genplotter::data::{load_samples, LoadOptions};
use cdf_genplotter::error::{CdfError, GenplotError, LoadError};
use cdf_genplotter::render::{render, render_svg_string, AxisScale, PlotSpec};
use cdf_genplotter::runner::Job;
use cdf_genplotter::ui::{Reporter, Verbosity};
use common::{create_input, create_test_input};
use tempfile::TempDir;

#[test]
fn test_known_values_round_trip_count() {
    let values: Vec<String> = (0..37).map(|i| format!("{}.5", i)).collect();
    let (_temp_dir, path) = create_test_input(&values.join("\n"));

    let samples = load_samples(&path, &LoadOptions::default()).unwrap();
    assert_eq!(samples.len(), 37);
}

#[test]
fn test_reference_example() {
    let (_temp_dir, path) = create_test_input("1\n2\n2\n3\n");
    let samples = load_samples(&path, &LoadOptions::default()).unwrap();
    let curve = CdfCurve::from_samples(&samples).unwrap();

    let points: Vec<(f64, f64)> = curve
        .points()
        .iter()
        .map(|p| (p.value, p.fraction))
        .collect();
    assert_eq!(points, vec![(1.0, 0.25), (2.0, 0.75), (3.0, 1.0)]);
}

#[test]
fn test_curve_properties_on_mixed_input() {
    let text = "# latency samples\n0.3 0.1 0.2\n0.1, 0.9\n1e-2\n-4\n0.3\n";
    let (_temp_dir, path) = create_test_input(text);
    let samples = load_samples(&path, &LoadOptions::default()).unwrap();
    assert_eq!(samples.len(), 8);

    let curve = CdfCurve::from_samples(&samples).unwrap();
    assert_eq!(curve.points().last().unwrap().fraction, 1.0);
    for pair in curve.points().windows(2) {
        assert!(pair[0].value < pair[1].value);
        assert!(pair[0].fraction <= pair[1].fraction);
    }
    for point in curve.points() {
        assert_eq!(curve.evaluate(point.value), point.fraction);
    }
}

#[test]
fn test_empty_file_is_empty_input_error() {
    let (_temp_dir, path) = create_test_input("\n\n# only comments\n");
    let samples = load_samples(&path, &LoadOptions::default()).unwrap();

    assert!(matches!(
        CdfCurve::from_samples(&samples),
        Err(CdfError::EmptyInput(_))
    ));
}

#[test]
fn test_non_numeric_is_parse_error() {
    let (_temp_dir, path) = create_test_input("1\n2 x3\n");

    assert!(matches!(
        load_samples(&path, &LoadOptions::default()),
        Err(LoadError::Parse { line: 2, .. })
    ));
}

#[test]
fn test_render_multiple_curves() {
    let temp_dir = TempDir::new().unwrap();
    let a = create_input(&temp_dir, "a.txt", "1 10 100\n");
    let b = create_input(&temp_dir, "b.txt", "5 50 500 5000\n");

    let curves: Vec<CdfCurve> = [a, b]
        .iter()
        .map(|p| {
            let samples = load_samples(p, &LoadOptions::default()).unwrap();
            CdfCurve::from_samples(&samples).unwrap()
        })
        .collect();

    let spec = PlotSpec::default()
        .with_title("Log scale")
        .with_axis_labels("size (bytes)", "fraction")
        .with_x_scale(AxisScale::Log10)
        .with_markers(true)
        .with_output(temp_dir.path().join("multi.svg"));

    render(&curves, &spec).unwrap();
    let svg = std::fs::read_to_string(temp_dir.path().join("multi.svg")).unwrap();
    assert!(svg.contains("size (bytes)"));

    let in_memory = render_svg_string(&curves, &spec).unwrap();
    assert!(in_memory.contains("Log scale"));
}

#[test]
fn test_job_collects_all_inputs() {
    let temp_dir = TempDir::new().unwrap();
    let a = create_input(&temp_dir, "a.txt", "3\n1\n");
    let b = create_input(&temp_dir, "b.txt", "2\n");

    let prepared = Job::new(vec![a, b])
        .prepare(&Reporter::new(Verbosity::Silent))
        .unwrap();
    assert_eq!(prepared.samples.len(), 2);
    assert_eq!(prepared.curves[0].len(), 2);
    assert_eq!(prepared.spec.labels, vec!["a", "b"]);
}

#[test]
fn test_app_run_from_propagates_errors() {
    let (temp_dir, path) = create_test_input("");
    let output = temp_dir.path().join("unused.svg");

    let result = App::new().run_from([
        "cdf-genplot".to_string(),
        path.display().to_string(),
        "-s".to_string(),
        "-o".to_string(),
        output.display().to_string(),
    ]);
    assert!(matches!(
        result,
        Err(GenplotError::Cdf(CdfError::EmptyInput(_)))
    ));
    assert!(!output.exists());
}
