//! gradient_descent — fixed-iteration batch gradient descent on `argmin`.
//!
//! Purpose
//! -------
//! Provide the optimizer used to fit the logistic model: plain batch
//! gradient descent with a piecewise-constant, decaying step size and a
//! fixed number of iterations. Any objective implementing `argmin`'s
//! [`CostFunction`](argmin::core::CostFunction) and
//! [`Gradient`](argmin::core::Gradient) can be passed to [`minimize`].
//!
//! Key behaviors
//! -------------
//! - [`StepSchedule`] computes the step size for each iteration; by default
//!   `0.2`, halved every 50 iterations.
//! - [`solver::ScheduledGradientDescent`] implements the `argmin` solver
//!   and records the cost at every iterate.
//! - [`run::run_gradient_descent`] drives the executor and normalizes the
//!   result into a [`GDOutcome`].
//! - [`finite_diff`] offers numerical gradients for verifying analytic
//!   derivatives.
//!
//! Invariants & assumptions
//! ------------------------
//! - No convergence test: exactly `max_iter` iterations are performed and
//!   the last iterate is returned.
//! - Costs and gradients must stay finite; otherwise the run fails with an
//!   [`OptError`](crate::optimization::errors::OptError).
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover the schedule, update law, history
//!   bookkeeping, outcome construction, and finite-difference checks.
//! - The logistic objective and its end-to-end fit are tested in
//!   `logistic` and the integration tests.

pub mod api;
pub mod finite_diff;
pub mod run;
pub mod solver;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::minimize;
pub use self::finite_diff::{check_gradient, fd_gradient};
pub use self::solver::{ScheduledGradientDescent, descend};
pub use self::traits::{GDOptions, GDOutcome, StepSchedule};
pub use self::types::{Cost, FnEvalMap, Grad, Theta};

pub mod prelude {
    pub use super::api::minimize;
    pub use super::traits::{GDOptions, GDOutcome, StepSchedule};
    pub use super::types::{Cost, Grad, Theta};
}
