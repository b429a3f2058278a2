//! Reader for TSPLIB-style coordinate files.
//!
//! Only the parts needed for Euclidean instances are understood: header
//! lines are skipped until `NODE_COORD_SECTION`, then each `id x y` row
//! yields one coordinate in file order until `EOF`.

use std::path::Path;

use crate::error::{TspError, TspResult};

/// Parses coordinates from the text of a TSPLIB file.
///
/// Rows in the coordinate section whose field count is not exactly three are
/// ignored. A row with three fields but an unparsable number is an error.
///
/// # Examples
///
/// ```
/// let text = "NAME: tiny\nNODE_COORD_SECTION\n1 0 0\n2 3 4\nEOF\n";
/// let coords = u_tsp::tsplib::parse_coordinates(text).unwrap();
/// assert_eq!(coords, vec![(0.0, 0.0), (3.0, 4.0)]);
/// ```
pub fn parse_coordinates(text: &str) -> TspResult<Vec<(f64, f64)>> {
    let mut coordinates = Vec::new();
    let mut in_section = false;

    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if !in_section {
            in_section = line == "NODE_COORD_SECTION";
            continue;
        }
        if line == "EOF" {
            break;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if let [_, x, y] = fields.as_slice() {
            coordinates.push((parse_number(x, line_no)?, parse_number(y, line_no)?));
        }
    }

    Ok(coordinates)
}

/// Reads and parses a TSPLIB file from disk.
pub fn read_coordinates<P: AsRef<Path>>(path: P) -> TspResult<Vec<(f64, f64)>> {
    let text = std::fs::read_to_string(path)?;
    parse_coordinates(&text)
}

fn parse_number(field: &str, line_no: usize) -> TspResult<f64> {
    field.parse::<f64>().map_err(|_| {
        TspError::invalid(format!("line {}: '{field}' is not a number", line_no + 1))
    })
}
