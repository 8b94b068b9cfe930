//! logistic::options — user-facing hyperparameters for `solve`.
//!
//! [`SolveOptions`] carries the four classic knobs (initial step size,
//! regularization strength, iteration count, prediction threshold) plus a
//! verbosity flag, and converts them into optimizer-level [`GDOptions`].
//! The step-size decay itself is fixed: halve every 50 iterations.
use crate::{
    logistic::errors::{LogRegError, LogRegResult},
    optimization::gradient_descent::{
        traits::{GDOptions, StepSchedule},
        types::{DEFAULT_ALPHA, DEFAULT_DECAY_FACTOR, DEFAULT_DECAY_PERIOD, DEFAULT_MAX_ITER},
        validation::{verify_max_iter, verify_reg_lambda, verify_step_size},
    },
};

/// Default L2 regularization strength.
pub const DEFAULT_REG_LAMBDA: f64 = 0.1;

/// Default probability cut-off for a positive label.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Hyperparameters for fitting and thresholding the logistic model.
///
/// Default: `alpha = 0.2`, `reg_lambda = 0.1`, `num_iterations = 300`,
/// `threshold = 0.5`, `verbose = false`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveOptions {
    pub alpha: f64,
    pub reg_lambda: f64,
    pub num_iterations: usize,
    pub threshold: f64,
    pub verbose: bool,
}

impl SolveOptions {
    /// Construct validated options.
    ///
    /// # Errors
    /// - [`LogRegError::InvalidOption`] if `alpha` is not finite and positive,
    ///   `reg_lambda` is negative or non-finite, or `num_iterations == 0`.
    /// - [`LogRegError::InvalidThreshold`] if `threshold` is outside `[0, 1]`.
    pub fn new(
        alpha: f64, reg_lambda: f64, num_iterations: usize, threshold: f64,
    ) -> LogRegResult<Self> {
        let opts = Self { alpha, reg_lambda, num_iterations, threshold, verbose: false };
        opts.validate()?;
        Ok(opts)
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_reg_lambda(mut self, reg_lambda: f64) -> Self {
        self.reg_lambda = reg_lambda;
        self
    }

    pub fn with_num_iterations(mut self, num_iterations: usize) -> Self {
        self.num_iterations = num_iterations;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Re-check every field; setters do not validate on their own.
    ///
    /// # Errors
    /// Same as [`SolveOptions::new`].
    pub fn validate(&self) -> LogRegResult<()> {
        verify_step_size(self.alpha)?;
        verify_reg_lambda(self.reg_lambda)?;
        verify_max_iter(self.num_iterations)?;
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(LogRegError::InvalidThreshold { value: self.threshold });
        }
        Ok(())
    }

    /// Optimizer options: `alpha` halved every 50 iterations for
    /// `num_iterations` iterations.
    ///
    /// # Errors
    /// [`LogRegError::InvalidOption`] if `alpha` or `num_iterations` is invalid.
    pub fn gd_options(&self) -> LogRegResult<GDOptions> {
        let step = StepSchedule::new(self.alpha, DEFAULT_DECAY_FACTOR, DEFAULT_DECAY_PERIOD)?;
        Ok(GDOptions::new(step, self.num_iterations, self.verbose)?)
    }
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            reg_lambda: DEFAULT_REG_LAMBDA,
            num_iterations: DEFAULT_MAX_ITER,
            threshold: DEFAULT_THRESHOLD,
            verbose: false,
        }
    }
}
