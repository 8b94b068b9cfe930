//! Input checks run by `solve` before any arithmetic.
//!
//! Order matters: emptiness, then shapes, then labels, then finiteness, so
//! the first reported error is the most structural one.
use crate::{
    logistic::errors::{LogRegError, LogRegResult},
    primitives::shape_of,
};
use ndarray::{ArrayView1, ArrayView2};

/// Validate a training/test pair and its labels.
///
/// # Errors
/// - [`LogRegError::EmptyMatrix`] if either matrix has no rows or no columns.
/// - [`LogRegError::ColumnMismatch`] if the feature counts differ.
/// - [`LogRegError::LabelLengthMismatch`] if `y_train.len() != x_train.nrows()`.
/// - [`LogRegError::InvalidLabel`] for the first label not in `{0, 1}`.
/// - [`LogRegError::NonFiniteFeature`] for the first NaN/±inf feature.
pub fn validate_inputs(
    x_train: ArrayView2<'_, f64>, y_train: ArrayView1<'_, f64>, x_test: ArrayView2<'_, f64>,
) -> LogRegResult<()> {
    check_non_empty("training", x_train)?;
    check_non_empty("test", x_test)?;
    if x_train.ncols() != x_test.ncols() {
        return Err(LogRegError::ColumnMismatch {
            training: x_train.ncols(),
            test: x_test.ncols(),
        });
    }
    if y_train.len() != x_train.nrows() {
        return Err(LogRegError::LabelLengthMismatch {
            expected: x_train.nrows(),
            actual: y_train.len(),
        });
    }
    validate_labels(y_train)?;
    check_finite_features(x_train)?;
    check_finite_features(x_test)?;
    Ok(())
}

/// Every label must be exactly 0.0 or 1.0.
///
/// # Errors
/// [`LogRegError::InvalidLabel`] with the first offending index.
pub fn validate_labels(y: ArrayView1<'_, f64>) -> LogRegResult<()> {
    match y.iter().enumerate().find(|&(_, &v)| v != 0.0 && v != 1.0) {
        Some((index, &value)) => Err(LogRegError::InvalidLabel { index, value }),
        None => Ok(()),
    }
}

fn check_non_empty(name: &'static str, x: ArrayView2<'_, f64>) -> LogRegResult<()> {
    if x.is_empty() {
        return Err(LogRegError::EmptyMatrix { name, shape: shape_of(&x) });
    }
    Ok(())
}

fn check_finite_features(x: ArrayView2<'_, f64>) -> LogRegResult<()> {
    match x.indexed_iter().find(|(_, v)| !v.is_finite()) {
        Some(((row, col), &value)) => Err(LogRegError::NonFiniteFeature { row, col, value }),
        None => Ok(()),
    }
}
