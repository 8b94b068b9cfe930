//! High-level entry point for minimizing a differentiable cost with
//! scheduled batch gradient descent.
//!
//! This checks the starting point, then delegates to `run_gradient_descent`,
//! which owns the `argmin` executor.
use crate::optimization::{
    errors::OptResult,
    gradient_descent::{
        run::run_gradient_descent,
        traits::{GDOptions, GDOutcome},
        types::{Cost, Grad, Theta},
        validation::validate_theta,
    },
};
use argmin::core::{CostFunction, Gradient};

/// Minimize `c(θ)` with fixed-iteration gradient descent.
///
/// # Behavior
/// - Rejects a starting point with non-finite entries.
/// - Runs exactly `opts.max_iter` iterations with the step size given by
///   `opts.step` and returns the parameter vector after the last one.
///
/// # Errors
/// - `OptError::InvalidThetaHat` if `theta0` contains NaN or ±∞.
/// - Propagates runtime errors from `run_gradient_descent`.
///
/// # Example
/// ```no_run
/// use argmin::core::{CostFunction, Error, Gradient};
/// use ndarray::array;
/// use rust_logreg::optimization::gradient_descent::{GDOptions, Grad, Theta, minimize};
///
/// struct Quadratic;
/// impl CostFunction for Quadratic {
///     type Param = Theta;
///     type Output = f64;
///     fn cost(&self, theta: &Theta) -> Result<f64, Error> {
///         Ok(theta.dot(theta))
///     }
/// }
/// impl Gradient for Quadratic {
///     type Param = Theta;
///     type Gradient = Grad;
///     fn gradient(&self, theta: &Theta) -> Result<Grad, Error> {
///         Ok(theta * 2.0)
///     }
/// }
///
/// let out = minimize(Quadratic, array![0.5, -0.5], &GDOptions::default())?;
/// println!("θ̂ = {:?}", out.theta_hat);
/// # Ok::<(), rust_logreg::optimization::errors::OptError>(())
/// ```
pub fn minimize<P>(problem: P, theta0: Theta, opts: &GDOptions) -> OptResult<GDOutcome>
where
    P: CostFunction<Param = Theta, Output = Cost> + Gradient<Param = Theta, Gradient = Grad>,
{
    validate_theta(&theta0)?;
    run_gradient_descent(theta0, opts, problem)
}
