//! gradient_descent::types — shared numeric aliases, defaults, and solver
//! state wiring.
//!
//! Purpose
//! -------
//! Centralize the numeric types used by the gradient-descent optimizer so
//! the rest of the code stays agnostic to `ndarray` and Argmin generics.
//!
//! Conventions
//! -----------
//! - `Theta` and `Grad` are column vectors with one entry per model
//!   parameter (index 0 is the intercept when the design carries a bias
//!   column).
//! - `Cost` is the scalar objective being *minimized*.
//! - The default constants reproduce the classic schedule: step size 0.2,
//!   halved every 50 iterations, for 300 iterations.
//!
//! Testing notes
//! -------------
//! - This module only defines type aliases and constants; correctness is
//!   exercised by the solver and runner tests.
use argmin::core::IterState;
use ndarray::Array1;
use std::collections::HashMap;

/// Parameter vector `θ`.
pub type Theta = Array1<f64>;

/// Gradient vector `∇c(θ)`, matching the shape of `Theta`.
pub type Grad = Array1<f64>;

/// Scalar objective value minimized by the optimizer.
pub type Cost = f64;

/// Function-evaluation counters as reported by the solver.
///
/// Maps counter names (e.g., `"cost_count"`, `"gradient_count"`) to counts.
pub type FnEvalMap = HashMap<String, u64>;

/// Argmin iteration state specialized to this crate's numeric types.
pub type GDState = IterState<Theta, Grad, (), (), (), Cost>;

/// Initial step size `α₀`.
pub const DEFAULT_ALPHA: f64 = 0.2;

/// Factor the step size is divided by at every decay boundary.
pub const DEFAULT_DECAY_FACTOR: f64 = 2.0;

/// Number of iterations between step-size decays.
pub const DEFAULT_DECAY_PERIOD: usize = 50;

/// Fixed number of gradient-descent iterations.
pub const DEFAULT_MAX_ITER: usize = 300;
