//! Parsing of whitespace-delimited real-number input.

use anyhow::{format_err, Context, Error};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse a line of whitespace-delimited decimal tokens into `f64` values.
/// Fails if any token is not a real number.
pub fn parse_reals(line: &str) -> Result<Vec<f64>, Error> {
    line.split_whitespace()
        .map(|tok| {
            tok.parse::<f64>()
                .map_err(|_| format_err!("input should consist of real numbers"))
        })
        .collect()
}

/// Read points from `reader`, one or more whitespace-delimited values per
/// line. Blank lines contribute nothing.
pub fn read_points(reader: impl BufRead) -> Result<Vec<f64>, Error> {
    let mut points = Vec::new();
    for line in reader.lines() {
        points.extend(parse_reals(&line?)?);
    }
    Ok(points)
}

/// Load evaluation points from a text file.
pub fn load_points(path: impl AsRef<Path>) -> Result<Vec<f64>, Error> {
    let path = path.as_ref();
    let file = BufReader::new(File::open(path).with_context(|| path.display().to_string())?);
    read_points(file)
}
