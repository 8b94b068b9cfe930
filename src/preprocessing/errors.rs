//! preprocessing::errors — failures raised while fitting or applying
//! min/max normalization.
//!
//! The normalizer refuses to produce zero-width output: a training matrix
//! whose every column is constant is reported as
//! [`PreprocessError::DegenerateFeatures`] instead of silently yielding a
//! bias-only model.

pub type PreprocessResult<T> = Result<T, PreprocessError>;

#[derive(Debug, Clone, PartialEq)]
pub enum PreprocessError {
    /// Matrix to fit on has no rows or no columns.
    EmptyMatrix { rows: usize, cols: usize },

    /// Matrix to transform has a different column count than the one the
    /// statistics were fitted on.
    ColumnMismatch { expected: usize, found: usize },

    /// Every training column has zero range, so no feature survives.
    DegenerateFeatures { n_features: usize },

    /// A data entry is NaN or infinite.
    NonFiniteValue { row: usize, col: usize, value: f64 },
}

impl std::error::Error for PreprocessError {}

impl std::fmt::Display for PreprocessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreprocessError::EmptyMatrix { rows, cols } => {
                write!(f, "Cannot fit normalization on an empty {rows}x{cols} matrix.")
            }
            PreprocessError::ColumnMismatch { expected, found } => {
                write!(f, "Column count mismatch: expected {expected}, found {found}")
            }
            PreprocessError::DegenerateFeatures { n_features } => {
                write!(
                    f,
                    "All {n_features} training features are constant; no feature can be retained."
                )
            }
            PreprocessError::NonFiniteValue { row, col, value } => {
                write!(f, "Entry at ({row}, {col}) is non-finite: {value}")
            }
        }
    }
}
