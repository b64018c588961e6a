//! Loader for flat numeric tables: one row per line, cells separated by a
//! tab character. A cell may use either `.` or `,` as its decimal separator;
//! the comma form is rewritten before parsing, so exports from
//! comma-as-decimal locales load unchanged.
//!
//! The caller supplies the expected row and column counts and the table must
//! match them exactly. Every failure is a returned error; a malformed file
//! never yields a default-filled matrix.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::math::Matrix;

/// Reads a `rows`×`cols` matrix from the file at `path`.
pub fn load_matrix(path: impl AsRef<Path>, rows: usize, cols: usize) -> Result<Matrix> {
    let text = fs::read_to_string(path)?;
    parse_matrix(&text, rows, cols)
}

/// Reads a vector of `len` values from the file at `path`.
/// See [`parse_vector`] for the accepted orientations.
pub fn load_vector(path: impl AsRef<Path>, len: usize) -> Result<Vec<f64>> {
    let text = fs::read_to_string(path)?;
    parse_vector(&text, len)
}

/// Parses a `rows`×`cols` matrix from tab-delimited text.
///
/// Trailing blank lines are ignored; a blank line between data rows fails the
/// column count check for that row.
pub fn parse_matrix(text: &str, rows: usize, cols: usize) -> Result<Matrix> {
    let lines: Vec<&str> = trimmed_lines(text);
    if lines.len() != rows {
        return Err(Error::RowCountMismatch {
            expected: rows,
            actual: lines.len(),
        });
    }

    let mut data = Vec::with_capacity(rows);
    for (row_idx, line) in lines.iter().enumerate() {
        data.push(parse_row(line, row_idx, cols)?);
    }
    // Shapes were checked cell by cell above.
    Matrix::from_rows(data)
}

/// Parses a vector of `len` values, stored either as a single column (`len`
/// lines of one cell) or as a single row (`len` tab-separated cells).
pub fn parse_vector(text: &str, len: usize) -> Result<Vec<f64>> {
    let lines = trimmed_lines(text);
    if lines.len() == 1 && len != 1 {
        return parse_row(lines[0], 0, len);
    }

    if lines.len() != len {
        return Err(Error::RowCountMismatch {
            expected: len,
            actual: lines.len(),
        });
    }
    lines
        .iter()
        .enumerate()
        .map(|(row_idx, line)| Ok(parse_row(line, row_idx, 1)?[0]))
        .collect()
}

/// Lines of `text` without the trailing blank tail a final newline produces.
fn trimmed_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.lines().collect();
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    lines
}

fn parse_row(line: &str, row_idx: usize, cols: usize) -> Result<Vec<f64>> {
    let cells: Vec<&str> = line.split('\t').collect();
    if cells.len() != cols {
        return Err(Error::ColumnCountMismatch {
            row: row_idx + 1,
            expected: cols,
            actual: cells.len(),
        });
    }
    cells
        .iter()
        .enumerate()
        .map(|(col_idx, cell)| parse_cell(cell, row_idx, col_idx))
        .collect()
}

/// Parses one decimal cell, rewriting a comma decimal separator to a dot.
fn parse_cell(cell: &str, row_idx: usize, col_idx: usize) -> Result<f64> {
    let trimmed = cell.trim();
    trimmed
        .replacen(',', ".", 1)
        .parse::<f64>()
        .map_err(|_| Error::MalformedCell {
            row: row_idx + 1,
            column: col_idx + 1,
            cell: cell.to_string(),
        })
}
