use crate::error::{Error, Result};

/// Rectangular f64 storage for layer weights.
///
/// Rows are the units of a layer, columns the incoming connections; the
/// forward pass walks rows directly, so no arithmetic operators are defined.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Builds a matrix from row vectors. Every row must have the width of the
    /// first; a ragged input is a [`Error::DimensionMismatch`].
    pub fn from_rows(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let rows = data.len();
        let cols = data.first().map(|row| row.len()).unwrap_or(0);
        for row in &data {
            if row.len() != cols {
                return Err(Error::dimensions("matrix", (rows, cols), (rows, row.len())));
            }
        }
        Ok(Matrix { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dim(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The `i`-th row as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i]
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row][col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_has_requested_shape() {
        let m = Matrix::zeros(3, 2);
        assert_eq!(m.dim(), (3, 2));
        assert_eq!(m.row(2), &[0.0, 0.0]);
    }

    #[test]
    fn from_rows_preserves_values() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.get(0, 1), 2.0);
        assert_eq!(m.get(1, 0), 3.0);
        assert_eq!(m.dim(), (2, 2));
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let res = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(res, Err(Error::DimensionMismatch { .. })));
    }

    #[test]
    fn from_rows_accepts_empty() {
        let m = Matrix::from_rows(vec![]).unwrap();
        assert_eq!(m.dim(), (0, 0));
    }
}
