//! gradient_descent::solver — batch gradient descent as an `argmin` solver.
//!
//! Purpose
//! -------
//! Implement fixed-iteration batch gradient descent with a piecewise
//! step-size schedule on top of the `argmin` [`Solver`] trait, so the
//! executor supplies iteration bookkeeping, evaluation counters, and
//! observers.
//!
//! Key behaviors
//! -------------
//! - `init` evaluates the cost and gradient at `θ₀` and stores both on the
//!   state.
//! - Every `next_iter` call reads the gradient stored by the previous
//!   step, picks the scheduled step size for the current iteration, and
//!   produces a fresh parameter vector `θ − α·g` via [`descend`]. The new
//!   point is then evaluated once for cost and gradient.
//! - The cost at `θ₀` and after every update is recorded in an internal
//!   history that callers read back from the finished executor.
//!
//! Invariants & assumptions
//! ------------------------
//! - Termination is delegated to `argmin`'s `max_iters`; the solver never
//!   stops early on its own.
//! - Non-finite costs or gradients abort the run with an `OptError`
//!   tunnelled through `argmin::core::Error`.
use crate::optimization::gradient_descent::{
    traits::StepSchedule,
    types::{Cost, GDState, Grad, Theta},
    validation::{validate_grad, validate_value},
};
use argmin::core::{ArgminError, CostFunction, Error, Gradient, KV, Problem, Solver, State};

/// Batch gradient descent with a scheduled step size.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledGradientDescent {
    schedule: StepSchedule,
    cost_history: Vec<Cost>,
    last_step: f64,
}

impl ScheduledGradientDescent {
    pub fn new(schedule: StepSchedule) -> Self {
        Self { schedule, cost_history: Vec::new(), last_step: schedule.alpha() }
    }

    pub fn schedule(&self) -> &StepSchedule {
        &self.schedule
    }

    /// Cost at `θ₀` followed by the cost after each completed iteration.
    pub fn cost_history(&self) -> &[Cost] {
        &self.cost_history
    }

    /// Step size applied by the most recent iteration.
    ///
    /// Before the first iteration this is the initial step size.
    pub fn last_step_size(&self) -> f64 {
        self.last_step
    }
}

/// One gradient step: returns a new vector `theta − alpha · grad`.
pub fn descend(theta: &Theta, grad: &Grad, alpha: f64) -> Theta {
    theta - &(grad * alpha)
}

impl<O> Solver<O, GDState> for ScheduledGradientDescent
where
    O: CostFunction<Param = Theta, Output = Cost> + Gradient<Param = Theta, Gradient = Grad>,
{
    const NAME: &'static str = "Scheduled gradient descent";

    fn init(
        &mut self, problem: &mut Problem<O>, mut state: GDState,
    ) -> Result<(GDState, Option<KV>), Error> {
        let theta = state.take_param().ok_or_else(|| {
            Error::from(ArgminError::NotInitialized {
                text: "Initial parameter vector is required.".to_string(),
            })
        })?;
        let cost = problem.cost(&theta)?;
        validate_value(cost)?;
        let grad = problem.gradient(&theta)?;
        validate_grad(&grad, theta.len())?;

        self.cost_history.clear();
        self.cost_history.push(cost);
        self.last_step = self.schedule.alpha();
        Ok((state.param(theta).cost(cost).gradient(grad), None))
    }

    fn next_iter(
        &mut self, problem: &mut Problem<O>, mut state: GDState,
    ) -> Result<(GDState, Option<KV>), Error> {
        let theta = state.take_param().ok_or_else(|| {
            Error::from(ArgminError::PotentialBug {
                text: "Parameter vector missing from solver state.".to_string(),
            })
        })?;
        let grad = match state.take_gradient() {
            Some(g) => g,
            None => problem.gradient(&theta)?,
        };

        let t = state.get_iter() + 1;
        let alpha = self.schedule.step_size(t);
        let next = descend(&theta, &grad, alpha);

        let cost = problem.cost(&next)?;
        validate_value(cost)?;
        let next_grad = problem.gradient(&next)?;
        validate_grad(&next_grad, next.len())?;

        self.cost_history.push(cost);
        self.last_step = alpha;
        Ok((state.param(next).cost(cost).gradient(next_grad), None))
    }
}
