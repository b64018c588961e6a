use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors a network can report, from construction through prediction,
/// plus the failures of the flat-file table loader.
///
/// Every variant is detected eagerly and returned to the caller; nothing is
/// coerced to zero or NaN, and nothing is retried. These are deterministic
/// configuration/data errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A topology dimension was zero at construction.
    #[error("topology dimensions must be positive, got {inputs}x{hidden}x{outputs}")]
    InvalidTopology {
        inputs: usize,
        hidden: usize,
        outputs: usize,
    },

    /// An array's shape disagrees with the bound topology. Vectors are
    /// reported as n×1.
    #[error("{name}: expected shape {expected_rows}x{expected_cols}, got {actual_rows}x{actual_cols}")]
    DimensionMismatch {
        name: &'static str,
        expected_rows: usize,
        expected_cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },

    /// An input feature's min and max bounds coincide, so min-max
    /// normalization would divide by zero.
    #[error("degenerate normalization bounds for input feature {feature}: min == max == {bound}")]
    DegenerateBounds { feature: usize, bound: f64 },

    /// A table cell could not be parsed as a decimal number.
    /// Row and column are 1-based.
    #[error("row {row}, column {column}: {cell:?} is not a decimal number")]
    MalformedCell {
        row: usize,
        column: usize,
        cell: String,
    },

    /// The table holds a different number of rows than the caller declared.
    #[error("expected {expected} rows, found {actual}")]
    RowCountMismatch { expected: usize, actual: usize },

    /// A table row holds a different number of columns than the caller
    /// declared. Row is 1-based.
    #[error("row {row}: expected {expected} columns, found {actual}")]
    ColumnCountMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for a [`Error::DimensionMismatch`] over (rows, cols) pairs.
    pub(crate) fn dimensions(
        name: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    ) -> Self {
        Error::DimensionMismatch {
            name,
            expected_rows: expected.0,
            expected_cols: expected.1,
            actual_rows: actual.0,
            actual_cols: actual.1,
        }
    }
}
