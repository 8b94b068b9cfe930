//! logistic::cost — L2-regularized cross-entropy objective.
//!
//! Purpose
//! -------
//! Evaluate the logistic-regression cost and its analytic gradient for a
//! bias-augmented design matrix, and expose both to the optimizer through
//! `argmin`'s [`CostFunction`] and [`Gradient`] traits.
//!
//! With `h = σ(Xθ)`, `m` rows and `θ̃` equal to `θ` with index 0 zeroed:
//!
//! ```text
//! c(θ)  = -(1/m) Σ [ yᵢ ln hᵢ + (1 - yᵢ) ln(1 - hᵢ) ] + (λ / 2m) ‖θ̃‖²
//! ∇c(θ) =  (1/m) Xᵀ (h - y) + (λ / m) θ̃
//! ```
//!
//! Invariants & assumptions
//! ------------------------
//! - Column 0 of `X` is the bias column; its parameter is never penalized.
//! - Probabilities are clamped into `[PROB_EPS, 1 - PROB_EPS]` for the
//!   logarithms only; the gradient uses the unclamped `h`.
//! - Shape problems are reported as [`OptError`] values, which reach
//!   `argmin` as tunnelled errors and are recovered by the runner.
use crate::{
    optimization::{
        errors::OptResult,
        gradient_descent::{
            types::{Cost, Grad, Theta},
            validation::{validate_design, verify_reg_lambda},
        },
    },
    primitives::{PROB_EPS, clamp_probability, ln, one_minus, sigmoid},
};
use argmin::core::{CostFunction, Error, Gradient};
use ndarray::{Array1, ArrayView1, ArrayView2};

/// Regularized log-loss over a borrowed design matrix and label vector.
#[derive(Debug, Clone, Copy)]
pub struct RegularizedLogLoss<'x, 'y> {
    x: ArrayView2<'x, f64>,
    y: ArrayView1<'y, f64>,
    reg_lambda: f64,
}

impl<'x, 'y> RegularizedLogLoss<'x, 'y> {
    /// Bind the objective to a design matrix, labels, and penalty strength.
    ///
    /// # Errors
    /// - `OptError::InvalidRegLambda` if `reg_lambda` is negative or non-finite.
    /// - `OptError::EmptyDesign` if `x` has no rows.
    /// - `OptError::LabelLengthMismatch` if `y.len() != x.nrows()`.
    pub fn new(
        x: ArrayView2<'x, f64>, y: ArrayView1<'y, f64>, reg_lambda: f64,
    ) -> OptResult<Self> {
        verify_reg_lambda(reg_lambda)?;
        let probe = Array1::<f64>::zeros(x.ncols());
        validate_design(x, y, probe.view())?;
        Ok(Self { x, y, reg_lambda })
    }

    pub fn reg_lambda(&self) -> f64 {
        self.reg_lambda
    }

    pub fn n_obs(&self) -> usize {
        self.x.nrows()
    }

    pub fn n_params(&self) -> usize {
        self.x.ncols()
    }

    /// Cost and gradient at `theta` from a single pass over `X`.
    ///
    /// # Errors
    /// `OptError::ThetaLengthMismatch` if `theta.len() != X.ncols()`.
    pub fn evaluate(&self, theta: &Theta) -> OptResult<(Cost, Grad)> {
        validate_design(self.x, self.y, theta.view())?;
        let h = self.probabilities(theta);
        let penalized = penalized_params(theta);
        Ok((self.cost_from(&h, &penalized), self.gradient_from(&h, &penalized)))
    }

    /// Regularized cost at `theta`.
    ///
    /// # Errors
    /// Same as [`RegularizedLogLoss::evaluate`].
    pub fn value(&self, theta: &Theta) -> OptResult<Cost> {
        validate_design(self.x, self.y, theta.view())?;
        let h = self.probabilities(theta);
        Ok(self.cost_from(&h, &penalized_params(theta)))
    }

    /// Analytic gradient at `theta`.
    ///
    /// # Errors
    /// Same as [`RegularizedLogLoss::evaluate`].
    pub fn grad(&self, theta: &Theta) -> OptResult<Grad> {
        validate_design(self.x, self.y, theta.view())?;
        let h = self.probabilities(theta);
        Ok(self.gradient_from(&h, &penalized_params(theta)))
    }

    // ---- Helper methods ----

    fn probabilities(&self, theta: &Theta) -> Array1<f64> {
        sigmoid(&self.x.dot(theta))
    }

    fn cost_from(&self, h: &Array1<f64>, penalized: &Theta) -> Cost {
        let m = self.x.nrows() as f64;
        let hc = clamp_probability(h, PROB_EPS);
        let log_lik = self.y.dot(&ln(&hc)) + one_minus(&self.y).dot(&ln(&one_minus(&hc)));
        -log_lik / m + self.reg_lambda / (2.0 * m) * penalized.dot(penalized)
    }

    fn gradient_from(&self, h: &Array1<f64>, penalized: &Theta) -> Grad {
        let m = self.x.nrows() as f64;
        let residual = h - &self.y;
        self.x.t().dot(&residual) / m + penalized * (self.reg_lambda / m)
    }
}

/// `θ` with the bias entry zeroed.
fn penalized_params(theta: &Theta) -> Theta {
    let mut penalized = theta.clone();
    if let Some(bias) = penalized.get_mut(0) {
        *bias = 0.0;
    }
    penalized
}

impl CostFunction for RegularizedLogLoss<'_, '_> {
    type Param = Theta;
    type Output = Cost;

    fn cost(&self, theta: &Self::Param) -> Result<Self::Output, Error> {
        Ok(self.value(theta)?)
    }
}

impl Gradient for RegularizedLogLoss<'_, '_> {
    type Param = Theta;
    type Gradient = Grad;

    fn gradient(&self, theta: &Self::Param) -> Result<Self::Gradient, Error> {
        Ok(self.grad(theta)?)
    }
}
