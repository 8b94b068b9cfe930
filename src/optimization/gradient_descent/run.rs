//! Execution helper that runs [`ScheduledGradientDescent`] on a cost problem and
//! returns a crate-friendly [`GDOutcome`].
use crate::optimization::{
    errors::OptResult,
    gradient_descent::{
        solver::ScheduledGradientDescent,
        traits::{GDOptions, GDOutcome},
        types::{Cost, Grad, Theta},
    },
};
use argmin::core::{CostFunction, Executor, Gradient, State};
#[cfg(feature = "obs_slog")]
use argmin_math::ArgminL2Norm;

/// Run fixed-iteration gradient descent on `problem` starting from `theta0`.
///
/// This wires up:
/// - the problem (any `argmin` cost function with an analytic gradient),
/// - a [`ScheduledGradientDescent`] solver built from `opts.step`,
/// - the initial parameter `theta0` and `opts.max_iter`,
/// - optional observers (behind the `obs_slog` feature),
///
/// then executes the solver and converts the result into [`GDOutcome`].
///
/// # Feature flags
/// If the `obs_slog` feature is enabled and `opts.verbose == true`, a terminal
/// slog observer is attached with `ObserverMode::Always` and a one-time
/// pre-iteration line logs c(θ₀) and ||grad|| before the first iteration.
///
/// # Returns
/// A [`GDOutcome`] carrying the parameter vector after the **last**
/// iteration (not the best one seen), its cost, the full cost history,
/// the last step size, evaluation counters, and the final gradient norm.
///
/// # Errors
/// - Propagates any `argmin` runtime error (objective failures, non-finite
///   costs or gradients, observer failures) via `From<argmin::core::Error>`.
/// - Propagates any validation errors encountered when constructing
///   [`GDOutcome`].
pub fn run_gradient_descent<P>(theta0: Theta, opts: &GDOptions, problem: P) -> OptResult<GDOutcome>
where
    P: CostFunction<Param = Theta, Output = Cost> + Gradient<Param = Theta, Gradient = Grad>,
{
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        log_initial_state(&theta0, &problem)?;
    }
    let solver = ScheduledGradientDescent::new(opts.step);
    let max_iter = opts.max_iter as u64;
    let mut optimizer = Executor::new(problem, solver);
    optimizer = optimizer.configure(|state| state.param(theta0).max_iters(max_iter));
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        let observer = argmin_observer_slog::SlogLogger::term_noblock();
        optimizer = optimizer.add_observer(observer, argmin::core::observers::ObserverMode::Always);
    }

    let result = optimizer.run()?;
    let cost_history = result.solver().cost_history().to_vec();
    let final_step_size = result.solver().last_step_size();
    let mut state = result.state().clone();
    let iterations = state.get_iter();
    let function_counts = state.get_func_counts().clone();
    let termination = state.get_termination_status().clone();
    let cost = state.get_cost();
    let grad = state.take_gradient();
    GDOutcome::new(
        state.take_param(),
        cost,
        termination,
        iterations,
        cost_history,
        final_step_size,
        function_counts,
        grad,
    )
}

// ---- Helper Methods ----

#[cfg(feature = "obs_slog")]
fn log_initial_state<P>(theta0: &Theta, problem: &P) -> OptResult<()>
where
    P: CostFunction<Param = Theta, Output = Cost> + Gradient<Param = Theta, Gradient = Grad>,
{
    let c0 = problem.cost(theta0)?;
    let g0n = problem.gradient(theta0).ok().map(|g| g.l2_norm());

    eprintln!(
        "init: cost(theta0) = {:.6}{}",
        c0,
        g0n.map(|n| format!(", ||grad|| = {:.6}", n)).unwrap_or_default()
    );
    Ok(())
}
