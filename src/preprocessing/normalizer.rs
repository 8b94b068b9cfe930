//! preprocessing::normalizer — train-fitted min/max feature scaling.
//!
//! Purpose
//! -------
//! Rescale each feature into `[0, 1]` using the minimum and maximum seen on
//! the training matrix, and apply exactly the same mapping to any other
//! matrix (typically the test set). Constant training columns carry no
//! information for a linear decision boundary and are dropped.
//!
//! Key behaviors
//! -------------
//! - [`NormalizationStats::fit`] scans the training columns, keeping column
//!   `i` only when `max_i - min_i > 0`; retained indices stay in ascending
//!   original order with parallel `min`/`max` vectors.
//! - [`NormalizationStats::transform`] maps `x[r, idx[j]]` to
//!   `(x[r, idx[j]] - min[j]) / (max[j] - min[j])`.
//! - [`NormalizationStats::transform_with_bias`] additionally puts a constant
//!   `1.0` column in front, so output column `j + 1` is retained feature `j`.
//! - [`normalize`] / [`normalize_with_bias`] fit on the training matrix and
//!   transform both matrices in one call, returning the retained indices.
//!
//! Invariants & assumptions
//! ------------------------
//! - Statistics come from the training matrix only; the test matrix never
//!   influences which columns are kept or how they are scaled.
//! - Training output lies in `[0, 1]` by construction. Test output may fall
//!   outside that interval when test values exceed the training range; this
//!   is expected and not an error.
//! - An empty retained set is an error ([`PreprocessError::DegenerateFeatures`]),
//!   never a zero-width matrix.
//!
//! Testing notes
//! -------------
//! - Unit tests cover range confinement, exact 0/1 recovery at the extreme
//!   rows, idempotence on already-normalized data, constant-column dropping,
//!   bias placement, and each error branch.
use crate::{
    preprocessing::errors::{PreprocessError, PreprocessResult},
    primitives::{build_matrix, column_min_max},
};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// Min/max statistics fitted on a training matrix.
///
/// Fields
/// ------
/// - `n_features`: column count of the matrix the statistics were fitted on;
///   every transformed matrix must match it.
/// - `retained`: original indices of the non-constant columns, ascending.
/// - `min`, `max`: per retained column, parallel to `retained`.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizationStats {
    n_features: usize,
    retained: Vec<usize>,
    min: Array1<f64>,
    max: Array1<f64>,
}

impl NormalizationStats {
    /// Fit statistics on a training matrix.
    ///
    /// # Errors
    /// - [`PreprocessError::EmptyMatrix`] if `x` has no rows or no columns.
    /// - [`PreprocessError::NonFiniteValue`] for the first NaN/±∞ entry.
    /// - [`PreprocessError::DegenerateFeatures`] if every column is constant.
    pub fn fit(x: ArrayView2<'_, f64>) -> PreprocessResult<Self> {
        let (rows, cols) = x.dim();
        if rows == 0 || cols == 0 {
            return Err(PreprocessError::EmptyMatrix { rows, cols });
        }
        check_finite(x)?;

        let mut retained = Vec::new();
        let mut min = Vec::new();
        let mut max = Vec::new();
        for (i, (cmin, cmax)) in column_min_max(x).into_iter().enumerate() {
            if cmax - cmin > 0.0 {
                retained.push(i);
                min.push(cmin);
                max.push(cmax);
            }
        }
        if retained.is_empty() {
            return Err(PreprocessError::DegenerateFeatures { n_features: cols });
        }
        Ok(Self { n_features: cols, retained, min: Array1::from(min), max: Array1::from(max) })
    }

    /// Original column indices kept by the fit, in ascending order.
    pub fn retained_indices(&self) -> &[usize] {
        &self.retained
    }

    /// Column count of the matrix the statistics were fitted on.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Number of retained columns.
    pub fn n_retained(&self) -> usize {
        self.retained.len()
    }

    /// Per-retained-column minima.
    pub fn min(&self) -> ArrayView1<'_, f64> {
        self.min.view()
    }

    /// Per-retained-column maxima.
    pub fn max(&self) -> ArrayView1<'_, f64> {
        self.max.view()
    }

    /// Rescale `x` onto the retained columns.
    ///
    /// Returns a new `(x.nrows(), n_retained)` matrix.
    ///
    /// # Errors
    /// - [`PreprocessError::ColumnMismatch`] if `x.ncols() != n_features`.
    /// - [`PreprocessError::NonFiniteValue`] for the first NaN/±∞ entry.
    pub fn transform(&self, x: ArrayView2<'_, f64>) -> PreprocessResult<Array2<f64>> {
        self.check_columns(x)?;
        Ok(build_matrix(x.nrows(), self.n_retained(), |(r, j)| self.scale(x, r, j)))
    }

    /// Rescale `x` onto the retained columns and prepend a bias column of ones.
    ///
    /// Returns a new `(x.nrows(), n_retained + 1)` matrix whose column 0 is
    /// `1.0` and whose column `j + 1` is retained feature `j`.
    ///
    /// # Errors
    /// Same as [`NormalizationStats::transform`].
    pub fn transform_with_bias(&self, x: ArrayView2<'_, f64>) -> PreprocessResult<Array2<f64>> {
        self.check_columns(x)?;
        Ok(build_matrix(x.nrows(), self.n_retained() + 1, |(r, c)| {
            if c == 0 { 1.0 } else { self.scale(x, r, c - 1) }
        }))
    }

    // ---- Helper methods ----

    fn scale(&self, x: ArrayView2<'_, f64>, r: usize, j: usize) -> f64 {
        (x[[r, self.retained[j]]] - self.min[j]) / (self.max[j] - self.min[j])
    }

    fn check_columns(&self, x: ArrayView2<'_, f64>) -> PreprocessResult<()> {
        if x.ncols() != self.n_features {
            return Err(PreprocessError::ColumnMismatch {
                expected: self.n_features,
                found: x.ncols(),
            });
        }
        check_finite(x)
    }
}

/// Normalize training and test matrices with statistics fitted on training.
///
/// Returns `(normalized_training, normalized_test, retained_indices)`.
///
/// # Errors
/// - [`PreprocessError::ColumnMismatch`] if the column counts differ; this is
///   checked before any statistics are computed.
/// - Any error from [`NormalizationStats::fit`] or
///   [`NormalizationStats::transform`].
pub fn normalize(
    training: ArrayView2<'_, f64>, test: ArrayView2<'_, f64>,
) -> PreprocessResult<(Array2<f64>, Array2<f64>, Vec<usize>)> {
    let stats = fit_for_pair(training, test)?;
    let train_n = stats.transform(training)?;
    let test_n = stats.transform(test)?;
    Ok((train_n, test_n, stats.retained))
}

/// Bias-prepending variant of [`normalize`].
///
/// Both output matrices have `retained.len() + 1` columns, column 0 being
/// the constant intercept feature.
///
/// # Errors
/// Same as [`normalize`].
pub fn normalize_with_bias(
    training: ArrayView2<'_, f64>, test: ArrayView2<'_, f64>,
) -> PreprocessResult<(Array2<f64>, Array2<f64>, Vec<usize>)> {
    let stats = fit_for_pair(training, test)?;
    let train_n = stats.transform_with_bias(training)?;
    let test_n = stats.transform_with_bias(test)?;
    Ok((train_n, test_n, stats.retained))
}

/// Put a constant `1.0` column in front of `x`.
pub fn prepend_bias(x: ArrayView2<'_, f64>) -> Array2<f64> {
    build_matrix(x.nrows(), x.ncols() + 1, |(r, c)| if c == 0 { 1.0 } else { x[[r, c - 1]] })
}

// ---- Helper functions ----

fn fit_for_pair(
    training: ArrayView2<'_, f64>, test: ArrayView2<'_, f64>,
) -> PreprocessResult<NormalizationStats> {
    if training.ncols() != test.ncols() {
        return Err(PreprocessError::ColumnMismatch {
            expected: training.ncols(),
            found: test.ncols(),
        });
    }
    NormalizationStats::fit(training)
}

fn check_finite(x: ArrayView2<'_, f64>) -> PreprocessResult<()> {
    match x.indexed_iter().find(|(_, v)| !v.is_finite()) {
        Some(((row, col), &value)) => Err(PreprocessError::NonFiniteValue { row, col, value }),
        None => Ok(()),
    }
}
