//! CSV report.

use super::algorithm::Algorithm;
use crate::error::IsingResult;
use std::io::Write;
use std::path::Path;

/// Column names of the report.
pub const REPORT_HEADER: [&str; 5] = ["n", "instance", "algorithm", "value", "time_ms"];

/// One (size, instance, algorithm) measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    /// Problem size.
    pub n: usize,
    /// Instance index within the size.
    pub instance: usize,
    /// Solver that produced the value.
    pub algorithm: Algorithm,
    /// Objective value returned by the solver.
    pub value: f64,
    /// Wall-clock solve time in milliseconds.
    pub time_ms: f64,
}

impl ReportRow {
    fn record(&self) -> [String; 5] {
        [
            self.n.to_string(),
            self.instance.to_string(),
            self.algorithm.name().to_string(),
            self.value.to_string(),
            format!("{:.3}", self.time_ms),
        ]
    }
}

/// Writes the header and all rows as CSV.
pub fn write_report<W: Write>(writer: W, rows: &[ReportRow]) -> IsingResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    write_rows(&mut csv, rows)
}

/// Writes the report to a file, creating or truncating it.
pub fn write_report_file<P: AsRef<Path>>(path: P, rows: &[ReportRow]) -> IsingResult<()> {
    let mut csv = csv::Writer::from_path(path)?;
    write_rows(&mut csv, rows)
}

fn write_rows<W: Write>(csv: &mut csv::Writer<W>, rows: &[ReportRow]) -> IsingResult<()> {
    csv.write_record(REPORT_HEADER)?;
    for row in rows {
        csv.write_record(row.record())?;
    }
    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_report() {
        let rows = vec![
            ReportRow {
                n: 5,
                instance: 0,
                algorithm: Algorithm::Exhaustive,
                value: -2.5,
                time_ms: 0.1234,
            },
            ReportRow {
                n: 5,
                instance: 0,
                algorithm: Algorithm::SimulatedAnnealing,
                value: -2.0,
                time_ms: 1.0,
            },
        ];
        let mut out = Vec::new();
        write_report(&mut out, &rows).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "n,instance,algorithm,value,time_ms");
        assert_eq!(lines[1], "5,0,exhaustive,-2.5,0.123");
        assert_eq!(lines[2], "5,0,simulated_annealing,-2,1.000");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_write_empty_report_has_header() {
        let mut out = Vec::new();
        write_report(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "n,instance,algorithm,value,time_ms\n");
    }

    #[test]
    fn test_write_report_file() {
        let path = std::env::temp_dir().join(format!("u_ising_report_{}.csv", std::process::id()));
        let rows = vec![ReportRow {
            n: 10,
            instance: 3,
            algorithm: Algorithm::Grasp,
            value: -7.25,
            time_ms: 2.5,
        }];
        write_report_file(&path, &rows).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(text.starts_with("n,instance,algorithm,value,time_ms\n"));
        assert!(text.contains("10,3,grasp,-7.25,2.500"));
    }
}
