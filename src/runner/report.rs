//! Text reports written to stdout

use crate::cdf::{format_number, CdfCurve, Summary};
use crate::render::PlotSpec;
use std::io::{self, Write};

/// Write one percentile row per curve, preceded by a header
pub fn write_summary<W: Write>(
    out: &mut W,
    curves: &[CdfCurve],
    spec: &PlotSpec,
) -> io::Result<()> {
    writeln!(out, "label\t{}", Summary::header())?;
    for (i, curve) in curves.iter().enumerate() {
        let label = spec.label_for(i, curve.source());
        writeln!(out, "{}\t{}", label, curve.summary())?;
    }
    Ok(())
}

/// Write `label<TAB>value<TAB>fraction` for every curve point
pub fn write_table<W: Write>(
    out: &mut W,
    curves: &[CdfCurve],
    spec: &PlotSpec,
) -> io::Result<()> {
    for (i, curve) in curves.iter().enumerate() {
        let label = spec.label_for(i, curve.source());
        for point in curve.points() {
            let value = format_number(point.value);
            writeln!(out, "{}\t{}\t{}", label, value, point.fraction)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SampleSet;

    fn curve(values: &[f64]) -> CdfCurve {
        CdfCurve::from_samples(&SampleSet::new("in.txt", values.to_vec())).unwrap()
    }

    #[test]
    fn test_write_summary() {
        let mut out = Vec::new();
        let spec = PlotSpec::default().with_labels(vec!["run".to_string()]);
        write_summary(&mut out, &[curve(&[1.0, 2.0, 3.0, 4.0])], &spec).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("label\tn\tmin"));
        assert!(lines[1].starts_with("run\t4\t1\t1\t2\t3\t4\t4\t4\t2.5"));
    }

    #[test]
    fn test_write_table_uses_source_without_label() {
        let mut out = Vec::new();
        write_table(&mut out, &[curve(&[2.0, 2.0])], &PlotSpec::default()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "in.txt\t2\t1\n");
    }

    #[test]
    fn test_write_table_large_values_use_exponent() {
        let mut out = Vec::new();
        write_table(&mut out, &[curve(&[1e308, -1e308])], &PlotSpec::default()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "in.txt\t-1e308\t0.5\nin.txt\t1e308\t1\n"
        );
    }
}
