use std::io::{self, BufRead};
use std::time::Instant;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use serde::Serialize;
use tracing::info;

use crate::coordinates::{parse_coordinates, ParsedCoordinate};
use crate::format::CoordinateFormat;

/// Parses every input in parallel, keeping input order.
pub fn parse_batch<S: AsRef<str> + Sync>(inputs: &[S]) -> Vec<Option<ParsedCoordinate>> {
    let start = Instant::now();
    let results: Vec<_> = inputs
        .par_iter()
        .map(|input| parse_coordinates(input.as_ref()))
        .collect();
    let parsed = results.iter().filter(|r| r.is_some()).count();
    info!(
        "Parsed {}/{} coordinates in {:.3?}",
        parsed,
        inputs.len(),
        start.elapsed()
    );
    results
}

/// One coordinate per line; lines are trimmed and blank ones skipped.
pub fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut inputs = vec![];
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            inputs.push(line.to_string());
        }
    }
    Ok(inputs)
}

#[derive(Serialize)]
struct CsvRow<'a> {
    input: &'a str,
    latitude_dd: Option<f64>,
    longitude_dd: Option<f64>,
    latitude_format: Option<CoordinateFormat>,
    longitude_format: Option<CoordinateFormat>,
}

impl<'a> CsvRow<'a> {
    fn new(input: &'a str, result: Option<&ParsedCoordinate>) -> Self {
        Self {
            input,
            latitude_dd: result.map(|p| p.latitude_dd),
            longitude_dd: result.map(|p| p.longitude_dd),
            latitude_format: result.map(|p| p.latitude_format),
            longitude_format: result.map(|p| p.longitude_format),
        }
    }
}

/// Writes a CSV report with a header row; failed inputs get empty cells.
pub fn write_csv<W: io::Write, S: AsRef<str>>(
    writer: W,
    inputs: &[S],
    results: &[Option<ParsedCoordinate>],
) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (input, result) in inputs.iter().zip(results) {
        wtr.serialize(CsvRow::new(input.as_ref(), result.as_ref()))?;
    }
    wtr.flush()?;
    Ok(())
}
