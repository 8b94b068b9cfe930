//! Validation helpers for gradient-descent optimization.
//!
//! This module centralizes the consistency checks used across the
//! optimizer interface:
//!
//! - **Option checks**: [`verify_step_size`], [`verify_decay_factor`],
//!   [`verify_decay_period`], [`verify_max_iter`], [`verify_reg_lambda`].
//! - **Design checks**: [`validate_design`] matches the design matrix
//!   against labels and parameters before any arithmetic.
//! - **Gradient validation**: [`validate_grad`] enforces correct dimension
//!   and finite entries.
//! - **Parameter estimates**: [`validate_theta`] / [`validate_theta_hat`]
//!   ensure a parameter vector exists and contains only finite values.
//! - **Objective values**: [`validate_value`] checks cost outputs for
//!   finiteness.
//!
//! Each helper returns a specific [`OptError`] variant so higher-level code
//! can report failures uniformly.
use crate::optimization::{
    errors::{OptError, OptResult},
    gradient_descent::types::{Grad, Theta},
};
use ndarray::{ArrayView1, ArrayView2};

/// Validate an initial step size.
///
/// # Errors
/// Returns [`OptError::InvalidStepSize`] if `alpha` is non-finite or ≤ 0.0.
pub fn verify_step_size(alpha: f64) -> OptResult<()> {
    if !alpha.is_finite() {
        return Err(OptError::InvalidStepSize { alpha, reason: "Step size must be finite." });
    }
    if alpha <= 0.0 {
        return Err(OptError::InvalidStepSize { alpha, reason: "Step size must be positive." });
    }
    Ok(())
}

/// Validate the step-size decay factor.
///
/// A factor of exactly 1.0 is accepted (constant step size); smaller
/// factors would grow the step over time and are rejected.
///
/// # Errors
/// Returns [`OptError::InvalidDecayFactor`] if `factor` is non-finite or < 1.0.
pub fn verify_decay_factor(factor: f64) -> OptResult<()> {
    if !factor.is_finite() {
        return Err(OptError::InvalidDecayFactor { factor, reason: "Factor must be finite." });
    }
    if factor < 1.0 {
        return Err(OptError::InvalidDecayFactor {
            factor,
            reason: "Factor must be at least one.",
        });
    }
    Ok(())
}

/// Validate the number of iterations between decays.
///
/// # Errors
/// Returns [`OptError::InvalidDecayPeriod`] if `period == 0`.
pub fn verify_decay_period(period: usize) -> OptResult<()> {
    if period == 0 {
        return Err(OptError::InvalidDecayPeriod {
            period,
            reason: "Decay period must be at least one iteration.",
        });
    }
    Ok(())
}

/// Validate the fixed iteration count.
///
/// # Errors
/// Returns [`OptError::InvalidMaxIter`] if `max_iter == 0`.
pub fn verify_max_iter(max_iter: usize) -> OptResult<()> {
    if max_iter == 0 {
        return Err(OptError::InvalidMaxIter {
            max_iter,
            reason: "Maximum iterations must be greater than zero.",
        });
    }
    Ok(())
}

/// Validate an L2 regularization strength.
///
/// Zero disables regularization and is accepted.
///
/// # Errors
/// Returns [`OptError::InvalidRegLambda`] if `value` is non-finite or < 0.0.
pub fn verify_reg_lambda(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::InvalidRegLambda { value, reason: "Lambda must be finite." });
    }
    if value < 0.0 {
        return Err(OptError::InvalidRegLambda { value, reason: "Lambda must be non-negative." });
    }
    Ok(())
}

/// Validate that a design matrix, label vector, and parameter vector agree.
///
/// Checks, in order:
/// - `x.nrows() > 0`
/// - `y.len() == x.nrows()`
/// - `theta.len() == x.ncols()`
///
/// # Errors
/// - [`OptError::EmptyDesign`] if `x` has no rows.
/// - [`OptError::LabelLengthMismatch`] if the label count differs.
/// - [`OptError::ThetaLengthMismatch`] if the parameter count differs.
pub fn validate_design(
    x: ArrayView2<'_, f64>, y: ArrayView1<'_, f64>, theta: ArrayView1<'_, f64>,
) -> OptResult<()> {
    if x.nrows() == 0 {
        return Err(OptError::EmptyDesign);
    }
    if y.len() != x.nrows() {
        return Err(OptError::LabelLengthMismatch { expected: x.nrows(), actual: y.len() });
    }
    if theta.len() != x.ncols() {
        return Err(OptError::ThetaLengthMismatch { expected: x.ncols(), actual: theta.len() });
    }
    Ok(())
}

/// Validate a gradient vector against dimension and finiteness.
///
/// # Errors
/// - [`OptError::GradientDimMismatch`] if length does not match `dim`.
/// - [`OptError::InvalidGradient`] with the index/value of the first
///   offending element.
pub fn validate_grad(grad: &Grad, dim: usize) -> OptResult<()> {
    if grad.len() != dim {
        return Err(OptError::GradientDimMismatch { expected: dim, found: grad.len() });
    }
    for (index, &value) in grad.iter().enumerate() {
        if !value.is_finite() {
            return Err(OptError::InvalidGradient {
                index,
                value,
                reason: "Gradient elements must be finite.",
            });
        }
    }
    Ok(())
}

/// Validate that every entry of a parameter vector is finite.
///
/// # Errors
/// Returns [`OptError::InvalidThetaHat`] for the first non-finite entry.
pub fn validate_theta(theta: &Theta) -> OptResult<()> {
    for (index, &value) in theta.iter().enumerate() {
        if !value.is_finite() {
            return Err(OptError::InvalidThetaHat {
                index,
                value,
                reason: "Parameter values must be finite.",
            });
        }
    }
    Ok(())
}

/// Validate and unwrap an estimated parameter vector (`theta_hat`).
///
/// # Errors
/// - [`OptError::MissingThetaHat`] if no vector was provided.
/// - [`OptError::InvalidThetaHat`] if any element is non-finite.
pub fn validate_theta_hat(theta_hat: Option<Theta>) -> OptResult<Theta> {
    match theta_hat {
        Some(t) => {
            validate_theta(&t)?;
            Ok(t)
        }
        None => Err(OptError::MissingThetaHat),
    }
}

/// Validate that a scalar cost value is finite.
///
/// # Errors
/// Returns [`OptError::NonFiniteCost`] if the value is `NaN` or infinite.
pub fn validate_value(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::NonFiniteCost { value });
    }
    Ok(())
}
