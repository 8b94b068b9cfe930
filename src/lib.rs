//! rust_logreg — regularized logistic regression with optional Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the fit-and-predict pipeline to Python via the `_rust_logreg` extension
//! module. When the `python-bindings` feature is enabled, this module defines
//! the Python-facing `solve` function and its result class.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`primitives`, `preprocessing`,
//!   `optimization`, `logistic`) as the public crate surface.
//! - Define the `#[pyclass]` result wrapper, the `#[pyfunction]` entry point,
//!   and the `#[pymodule]` initializer for the `_rust_logreg` extension.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this file
//!   performs only FFI glue, input conversion, and error mapping.
//! - Errors from core Rust code are propagated as rich error types internally
//!   and converted to `PyErr` values at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend on `logistic::solve` or
//!   `logistic::LogisticRegression` and can ignore the PyO3 items guarded by
//!   the `python-bindings` feature.

pub mod logistic;
pub mod optimization;
pub mod preprocessing;
pub mod primitives;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    logistic::{LogisticRegression, Prediction, SolveOptions},
    utils::{extract_f64_matrix, extract_f64_vector},
};

/// LogRegPrediction — Python-facing wrapper for a [`Prediction`].
///
/// Exposes labels, probabilities, trained parameters, retained feature
/// indices, and optimizer diagnostics as read-only properties.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_logreg")]
pub struct LogRegPrediction {
    pub inner: Prediction,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl LogRegPrediction {
    #[getter]
    pub fn labels(&self) -> Vec<u8> {
        self.inner.labels.to_vec()
    }

    #[getter]
    pub fn probabilities(&self) -> Vec<f64> {
        self.inner.probabilities.to_vec()
    }

    #[getter]
    pub fn theta(&self) -> Vec<f64> {
        self.inner.theta.to_vec()
    }

    #[getter]
    pub fn retained_features(&self) -> Vec<usize> {
        self.inner.retained_features.clone()
    }

    #[getter]
    pub fn cost(&self) -> f64 {
        self.inner.outcome.cost
    }

    #[getter]
    pub fn cost_history(&self) -> Vec<f64> {
        self.inner.outcome.cost_history.clone()
    }

    #[getter]
    pub fn iterations(&self) -> usize {
        self.inner.outcome.iterations
    }

    #[getter]
    pub fn fn_evals(&self) -> Vec<(String, u64)> {
        self.inner.outcome.fn_evals.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }
}

/// Fit a logistic model on `(x_train, y_train)` and predict for `x_test`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    signature = (
        x_train,
        y_train,
        x_test,
        alpha = 0.2,
        reg_lambda = 0.1,
        num_iterations = 300,
        threshold = 0.5,
        verbose = false,
    ),
    text_signature = "(x_train, y_train, x_test, /, alpha=0.2, reg_lambda=0.1, \
                      num_iterations=300, threshold=0.5, verbose=False)"
)]
#[allow(clippy::too_many_arguments)]
pub fn solve<'py>(
    py: Python<'py>, x_train: &Bound<'py, PyAny>, y_train: &Bound<'py, PyAny>,
    x_test: &Bound<'py, PyAny>, alpha: f64, reg_lambda: f64, num_iterations: usize,
    threshold: f64, verbose: bool,
) -> PyResult<LogRegPrediction> {
    let x_train = extract_f64_matrix(x_train)?;
    let y_train = extract_f64_vector(py, y_train)?;
    let x_test = extract_f64_matrix(x_test)?;

    let options =
        SolveOptions::new(alpha, reg_lambda, num_iterations, threshold)?.with_verbose(verbose);
    let model = LogisticRegression::new(options)?;
    let inner = model.solve(x_train.view(), y_train.view(), x_test.view())?;
    Ok(LogRegPrediction { inner })
}

#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_logreg<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_class::<LogRegPrediction>()?;
    m.add_function(wrap_pyfunction!(solve, m)?)?;
    Ok(())
}
