//! Errors for fitting and applying the logistic model (input validation,
//! option checks, preprocessing, and optimizer failures).
//!
//! [`LogRegError`] is the single error type returned by the public
//! `solve` surface. Failures from lower layers are folded in:
//! - [`PreprocessError`] variants map onto their `LogRegError` counterparts
//!   so callers match one enum.
//! - Optimizer/backend errors are normalized to
//!   [`LogRegError::OptimizationFailed`] with a human-readable status, except
//!   option validation errors, which keep their own variants.
//!
//! ## Conventions
//! - **Indices are 0-based** (match Rust/NumPy).
//! - Labels must be exactly `0.0` or `1.0`.
use crate::{optimization::errors::OptError, preprocessing::errors::PreprocessError};
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for logistic-model operations that may produce [`LogRegError`].
pub type LogRegResult<T> = Result<T, LogRegError>;

#[derive(Debug, Clone, PartialEq)]
pub enum LogRegError {
    // ---- Input/data validation ----
    /// Training or test matrix has no rows or no columns.
    EmptyMatrix { name: &'static str, shape: String },

    /// Training and test matrices disagree on the number of features.
    ColumnMismatch { training: usize, test: usize },

    /// Bias-augmented matrix width differs from the parameter vector length.
    ParameterMismatch { n_params: usize, n_cols: usize },

    /// Number of labels does not match the number of training rows.
    LabelLengthMismatch { expected: usize, actual: usize },

    /// A label is neither 0 nor 1.
    InvalidLabel { index: usize, value: f64 },

    /// A feature entry is NaN/±inf.
    NonFiniteFeature { row: usize, col: usize, value: f64 },

    /// Every training feature is constant.
    DegenerateFeatures { n_features: usize },

    // ---- Options ----
    /// Prediction threshold must be finite and within [0, 1].
    InvalidThreshold { value: f64 },

    /// Option rejected by the optimizer layer.
    InvalidOption { text: String },

    // ---- Estimation ----
    /// Optimizer failed; status carries the backend message.
    OptimizationFailed { status: String },
}

impl std::error::Error for LogRegError {}

impl std::fmt::Display for LogRegError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogRegError::EmptyMatrix { name, shape } => {
                write!(f, "The {name} matrix is empty ({shape}).")
            }
            LogRegError::ColumnMismatch { training, test } => {
                write!(
                    f,
                    "Training matrix has {training} features but test matrix has {test}."
                )
            }
            LogRegError::ParameterMismatch { n_params, n_cols } => {
                write!(
                    f,
                    "Parameter vector has {n_params} entries (bias included) but the \
                     bias-augmented matrix has {n_cols} columns."
                )
            }
            LogRegError::LabelLengthMismatch { expected, actual } => {
                write!(f, "Expected {expected} labels (one per training row), got {actual}.")
            }
            LogRegError::InvalidLabel { index, value } => {
                write!(f, "Label at index {index} is {value}; labels must be 0 or 1.")
            }
            LogRegError::NonFiniteFeature { row, col, value } => {
                write!(f, "Feature at ({row}, {col}) is non-finite: {value}")
            }
            LogRegError::DegenerateFeatures { n_features } => {
                write!(f, "All {n_features} training features are constant; nothing to fit.")
            }
            LogRegError::InvalidThreshold { value } => {
                write!(f, "Threshold {value} must be finite and within [0, 1].")
            }
            LogRegError::InvalidOption { text } => {
                write!(f, "Invalid option: {text}")
            }
            LogRegError::OptimizationFailed { status } => {
                write!(f, "Optimization failed: {status}")
            }
        }
    }
}

impl From<PreprocessError> for LogRegError {
    fn from(err: PreprocessError) -> LogRegError {
        match err {
            PreprocessError::EmptyMatrix { rows, cols } => {
                LogRegError::EmptyMatrix { name: "training", shape: format!("{rows}x{cols}") }
            }
            PreprocessError::ColumnMismatch { expected, found } => {
                LogRegError::ColumnMismatch { training: expected, test: found }
            }
            PreprocessError::DegenerateFeatures { n_features } => {
                LogRegError::DegenerateFeatures { n_features }
            }
            PreprocessError::NonFiniteValue { row, col, value } => {
                LogRegError::NonFiniteFeature { row, col, value }
            }
        }
    }
}

impl From<OptError> for LogRegError {
    fn from(err: OptError) -> LogRegError {
        match err {
            OptError::InvalidStepSize { .. }
            | OptError::InvalidDecayFactor { .. }
            | OptError::InvalidDecayPeriod { .. }
            | OptError::InvalidMaxIter { .. }
            | OptError::InvalidRegLambda { .. } => {
                LogRegError::InvalidOption { text: err.to_string() }
            }
            OptError::LabelLengthMismatch { expected, actual } => {
                LogRegError::LabelLengthMismatch { expected, actual }
            }
            other => LogRegError::OptimizationFailed { status: other.to_string() },
        }
    }
}

/// Convert a [`LogRegError`] into a Python `ValueError` with the error message.
#[cfg(feature = "python-bindings")]
impl std::convert::From<LogRegError> for PyErr {
    fn from(err: LogRegError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Mapping of preprocessing and optimizer errors into LogRegError.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the layer conversions keep the payload callers match on.
    //
    // Given
    // -----
    // - A column mismatch, an invalid step size, and a non-finite cost.
    //
    // Expect
    // ------
    // - ColumnMismatch, InvalidOption, and OptimizationFailed respectively.
    fn lower_layer_errors_map_to_domain_variants() {
        let cm: LogRegError = PreprocessError::ColumnMismatch { expected: 3, found: 2 }.into();
        assert_eq!(cm, LogRegError::ColumnMismatch { training: 3, test: 2 });

        let opt: LogRegError =
            OptError::InvalidStepSize { alpha: -1.0, reason: "Step size must be positive." }
                .into();
        assert!(matches!(opt, LogRegError::InvalidOption { .. }));

        let failed: LogRegError = OptError::NonFiniteCost { value: f64::NAN }.into();
        match failed {
            LogRegError::OptimizationFailed { status } => assert!(status.contains("Non-finite")),
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
