//! CSV point ingest.
//!
//! Expected schema: a header row with `x` and `y` columns (any order, case
//! insensitive, extra columns ignored). Rows that fail to parse are skipped and
//! reported with their line number; an input with no usable rows is an error.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::warn;

use crate::error::AppError;

/// A row-level error encountered during ingest.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

/// Points read from CSV plus per-row diagnostics.
#[derive(Debug, Clone)]
pub struct IngestedPoints {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

/// Read points from a CSV file on disk.
pub fn read_points_csv(path: &Path) -> Result<IngestedPoints, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open points CSV '{}': {e}", path.display())))?;
    read_points(file)
}

/// Read points from any CSV source.
pub fn read_points<R: Read>(source: R) -> Result<IngestedPoints, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(2, format!("Failed to read CSV headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);

    let x_idx = column(&header_map, "x")?;
    let y_idx = column(&header_map, "y")?;

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // Line numbers are 1-based and the header is line 1.
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        match (parse_field(&record, x_idx, "x"), parse_field(&record, y_idx, "y")) {
            (Ok(x), Ok(y)) => {
                xs.push(x);
                ys.push(y);
            }
            (Err(message), _) | (_, Err(message)) => row_errors.push(RowError { line, message }),
        }
    }

    for err in &row_errors {
        warn!(line = err.line, "skipping row: {}", err.message);
    }

    if xs.is_empty() {
        return Err(AppError::new(3, "No valid points in CSV input."));
    }

    Ok(IngestedPoints {
        xs,
        ys,
        row_errors,
        rows_read,
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports sometimes prefix the first header with a UTF-8 BOM.
    name.trim().trim_start_matches('\u{feff}').to_ascii_lowercase()
}

fn column(header_map: &HashMap<String, usize>, name: &str) -> Result<usize, AppError> {
    header_map
        .get(name)
        .copied()
        .ok_or_else(|| AppError::new(2, format!("Missing required CSV column '{name}'.")))
}

fn parse_field(record: &StringRecord, idx: usize, name: &str) -> Result<f64, String> {
    let raw = record
        .get(idx)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("missing '{name}' value"))?;
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("invalid '{name}' value '{raw}'"))?;
    if !value.is_finite() {
        return Err(format!("non-finite '{name}' value '{raw}'"));
    }
    Ok(value)
}

/// Parse a comma-separated list of numbers, e.g. `"0, 1.5, -2"`.
pub fn parse_number_list(list: &str) -> Result<Vec<f64>, AppError> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .map_err(|_| AppError::new(2, format!("Invalid number '{s}' in coordinate list.")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_points_in_any_column_order() {
        let csv = "\u{feff}Label, Y ,X\na,1,0\nb,0,1\nc,-1,0\n";
        let pts = read_points(csv.as_bytes()).unwrap();
        assert_eq!(pts.xs, vec![0.0, 1.0, 0.0]);
        assert_eq!(pts.ys, vec![1.0, 0.0, -1.0]);
        assert_eq!(pts.rows_read, 3);
        assert!(pts.row_errors.is_empty());
    }

    #[test]
    fn skips_bad_rows_with_line_numbers() {
        let csv = "x,y\n0,1\nfoo,2\n1,\n1,0\n";
        let pts = read_points(csv.as_bytes()).unwrap();
        assert_eq!(pts.xs, vec![0.0, 1.0]);
        assert_eq!(pts.ys, vec![1.0, 0.0]);
        assert_eq!(pts.rows_read, 4);
        let lines: Vec<usize> = pts.row_errors.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![3, 4]);
    }

    #[test]
    fn missing_column_is_a_usage_error() {
        let err = read_points("x,z\n1,2\n".as_bytes()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn no_rows_is_a_data_error() {
        let err = read_points("x,y\nnan,1\n".as_bytes()).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn number_lists() {
        assert_eq!(parse_number_list("0, 1.5,-2").unwrap(), vec![0.0, 1.5, -2.0]);
        assert_eq!(parse_number_list("").unwrap(), Vec::<f64>::new());
        assert!(parse_number_list("1,two").is_err());
    }
}
