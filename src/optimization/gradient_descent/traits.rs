//! Public configuration and result types for gradient descent.
//!
//! - [`StepSchedule`]: initial step size plus stepwise decay.
//! - [`GDOptions`]: schedule, fixed iteration count, and verbosity.
//! - [`GDOutcome`]: normalized result returned by the high-level `minimize` API.
//!
//! Convention: the optimizer *minimizes* a cost `c(θ)` supplied through the
//! `argmin` [`CostFunction`](argmin::core::CostFunction) and
//! [`Gradient`](argmin::core::Gradient) traits. There is no convergence
//! test; the run always performs `max_iter` iterations.
use crate::optimization::{
    errors::OptResult,
    gradient_descent::{
        types::{
            Cost, DEFAULT_ALPHA, DEFAULT_DECAY_FACTOR, DEFAULT_DECAY_PERIOD, DEFAULT_MAX_ITER,
            FnEvalMap, Grad, Theta,
        },
        validation::{
            validate_theta_hat, validate_value, verify_decay_factor, verify_decay_period,
            verify_max_iter, verify_step_size,
        },
    },
};
use argmin::core::TerminationStatus;
use argmin_math::ArgminL2Norm;

/// Piecewise-constant step-size schedule.
///
/// The step size used at iteration `t` (1-based) is `alpha` divided by
/// `decay_factor` once for every completed block of `decay_period`
/// iterations, i.e. `alpha / decay_factor^⌊t / decay_period⌋`.
///
/// With the defaults (`0.2`, `2.0`, `50`) iterations 1..=49 use `0.2`,
/// 50..=99 use `0.1`, 100..=149 use `0.05`, and so on.
///
/// Fields are private; a schedule only exists through [`StepSchedule::new`],
/// [`StepSchedule::constant`], or `Default`, so `decay_period >= 1` holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSchedule {
    alpha: f64,
    decay_factor: f64,
    decay_period: usize,
}

impl StepSchedule {
    /// Construct a validated schedule.
    ///
    /// # Errors
    /// - [`OptError::InvalidStepSize`](crate::optimization::errors::OptError::InvalidStepSize)
    ///   if `alpha` is non-finite or ≤ 0.
    /// - [`OptError::InvalidDecayFactor`](crate::optimization::errors::OptError::InvalidDecayFactor)
    ///   if `decay_factor` is non-finite or < 1.
    /// - [`OptError::InvalidDecayPeriod`](crate::optimization::errors::OptError::InvalidDecayPeriod)
    ///   if `decay_period == 0`.
    pub fn new(alpha: f64, decay_factor: f64, decay_period: usize) -> OptResult<Self> {
        verify_step_size(alpha)?;
        verify_decay_factor(decay_factor)?;
        verify_decay_period(decay_period)?;
        Ok(Self { alpha, decay_factor, decay_period })
    }

    /// A schedule that never decays.
    ///
    /// # Errors
    /// Same as [`StepSchedule::new`] for `alpha`.
    pub fn constant(alpha: f64) -> OptResult<Self> {
        Self::new(alpha, 1.0, usize::MAX)
    }

    /// Step size at iteration 1.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn decay_factor(&self) -> f64 {
        self.decay_factor
    }

    pub fn decay_period(&self) -> usize {
        self.decay_period
    }

    /// Step size in force at iteration `t`, by repeated division.
    pub fn step_size(&self, t: u64) -> f64 {
        let decays = t / self.decay_period as u64;
        (0..decays).fold(self.alpha, |step, _| step / self.decay_factor)
    }
}

impl Default for StepSchedule {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            decay_factor: DEFAULT_DECAY_FACTOR,
            decay_period: DEFAULT_DECAY_PERIOD,
        }
    }
}

/// Optimizer-level configuration.
///
/// Fields:
/// - `step: StepSchedule` — step size and its decay.
/// - `max_iter: usize` — exact number of iterations performed.
/// - `verbose: bool` — if `true`, attaches an observer (behind the `obs_slog`
///   feature) and prints progress.
///
/// Default: the default schedule, `max_iter = 300`, `verbose = false`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GDOptions {
    pub step: StepSchedule,
    pub max_iter: usize,
    pub verbose: bool,
}

impl GDOptions {
    /// Create a new set of optimizer options.
    ///
    /// # Errors
    /// Returns `OptError::InvalidMaxIter` if `max_iter == 0`.
    pub fn new(step: StepSchedule, max_iter: usize, verbose: bool) -> OptResult<Self> {
        verify_max_iter(max_iter)?;
        Ok(Self { step, max_iter, verbose })
    }
}

impl Default for GDOptions {
    fn default() -> Self {
        Self { step: StepSchedule::default(), max_iter: DEFAULT_MAX_ITER, verbose: false }
    }
}

/// Canonical result returned by `minimize`.
///
/// - `theta_hat`: parameter vector after the last iteration.
/// - `cost`: cost at `theta_hat`.
/// - `status`: human-readable termination status string.
/// - `iterations`: number of optimizer iterations performed.
/// - `cost_history`: cost at `θ₀` followed by the cost after every
///   iteration, so `cost_history.len() == iterations + 1`.
/// - `final_step_size`: step size used by the last iteration.
/// - `fn_evals`: function-evaluation counters reported by `argmin`.
/// - `grad_norm`: norm of the last available gradient, if present.
#[derive(Debug, Clone, PartialEq)]
pub struct GDOutcome {
    pub theta_hat: Theta,
    pub cost: Cost,
    pub status: String,
    pub iterations: usize,
    pub cost_history: Vec<Cost>,
    pub final_step_size: f64,
    pub fn_evals: FnEvalMap,
    pub grad_norm: Option<f64>,
}

impl GDOutcome {
    /// Build a validated [`GDOutcome`] from raw solver state.
    ///
    /// Performs:
    /// - `theta_hat` check via `validate_theta_hat` (present and all finite).
    /// - `cost` check via `validate_value` (finite).
    /// - Maps `TerminationStatus` into a status string.
    /// - Computes `grad_norm` if a gradient was provided.
    ///
    /// # Errors
    /// - Propagates any validation errors for `theta_hat` or `cost`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        theta_hat_opt: Option<Theta>, cost: Cost, termination: TerminationStatus,
        iterations: u64, cost_history: Vec<Cost>, final_step_size: f64, fn_evals: FnEvalMap,
        grad: Option<Grad>,
    ) -> OptResult<Self> {
        let theta_hat = validate_theta_hat(theta_hat_opt)?;
        validate_value(cost)?;
        let status = match termination {
            TerminationStatus::NotTerminated => "Not terminated".to_string(),
            TerminationStatus::Terminated(reason) => format!("{reason:?}"),
        };
        let iterations = iterations as usize;
        let grad_norm = grad.map(|g| g.l2_norm());
        Ok(Self {
            theta_hat,
            cost,
            status,
            iterations,
            cost_history,
            final_step_size,
            fn_evals,
            grad_norm,
        })
    }

    /// Cost at the initial parameter vector.
    pub fn initial_cost(&self) -> Option<Cost> {
        self.cost_history.first().copied()
    }
}
