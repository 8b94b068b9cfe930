//! gradient_descent::finite_diff — numerical gradients for checking
//! analytic derivatives.
//!
//! Purpose
//! -------
//! Approximate the gradient of any `argmin` cost function with central
//! differences and compare it against the analytic gradient, so objective
//! implementations can be verified without hand-derived test vectors.
//!
//! Key behaviors
//! -------------
//! - [`fd_gradient`] evaluates central differences, falling back to
//!   forward differences if the central estimate fails validation.
//! - [`check_gradient`] returns the largest absolute deviation between the
//!   analytic and numerical gradients.
//!
//! Invariants & assumptions
//! ------------------------
//! - Errors raised by the cost inside the finite-difference closure are
//!   captured in a `RefCell` slot and re-raised after differencing; the
//!   closure itself returns `NaN` in that case.
use crate::optimization::{
    errors::OptResult,
    gradient_descent::{
        types::{Cost, Grad, Theta},
        validation::validate_grad,
    },
};
use argmin::core::{CostFunction, Error, Gradient};
use finitediff::FiniteDiff;
use std::cell::RefCell;

/// Central-difference gradient of `problem` at `theta`.
///
/// # Errors
/// - Any error raised by `problem.cost` during differencing.
/// - `OptError::InvalidGradient` / `OptError::GradientDimMismatch` if neither
///   the central nor the forward estimate is valid.
pub fn fd_gradient<P>(problem: &P, theta: &Theta) -> OptResult<Grad>
where
    P: CostFunction<Param = Theta, Output = Cost>,
{
    let dim = theta.len();
    let closure_err: RefCell<Option<Error>> = RefCell::new(None);
    let cost_func = |theta: &Theta| -> f64 {
        match problem.cost(theta) {
            Ok(val) => val,
            Err(e) => {
                let mut slot = closure_err.borrow_mut();
                if slot.is_none() {
                    *slot = Some(e);
                }
                f64::NAN
            }
        }
    };

    let central = theta.central_diff(&cost_func);
    if let Some(err) = closure_err.take() {
        return Err(err.into());
    }
    match validate_grad(&central, dim) {
        Ok(()) => Ok(central),
        Err(_) => run_fd_diff(theta, &cost_func, &closure_err),
    }
}

/// Largest absolute difference between the analytic and numerical gradient.
///
/// # Errors
/// - Propagates errors from `problem.gradient` and [`fd_gradient`].
/// - `OptError::GradientDimMismatch` if the analytic gradient has the wrong length.
pub fn check_gradient<P>(problem: &P, theta: &Theta) -> OptResult<f64>
where
    P: CostFunction<Param = Theta, Output = Cost> + Gradient<Param = Theta, Gradient = Grad>,
{
    let analytic = problem.gradient(theta)?;
    validate_grad(&analytic, theta.len())?;
    let numeric = fd_gradient(problem, theta)?;
    Ok(analytic
        .iter()
        .zip(numeric.iter())
        .map(|(a, n)| (a - n).abs())
        .fold(0.0, f64::max))
}

// ---- Helper methods ----

/// Forward-difference gradient with error capture and validation.
fn run_fd_diff<G: Fn(&Theta) -> f64>(
    theta: &Theta, func: &G, closure_err: &RefCell<Option<Error>>,
) -> OptResult<Grad> {
    closure_err.replace(None);
    let fd_grad = theta.forward_diff(func);
    let dim = theta.len();
    if let Some(err) = closure_err.take() {
        return Err(err.into());
    }
    validate_grad(&fd_grad, dim)?;
    Ok(fd_grad)
}
