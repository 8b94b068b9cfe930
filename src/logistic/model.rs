//! logistic::model — end-to-end fit and prediction for binary logistic
//! regression.
//!
//! Purpose
//! -------
//! Tie the pipeline together: validate raw inputs, min/max-normalize the
//! training and test matrices with training statistics (plus a bias
//! column), fit `θ` by scheduled gradient descent on the regularized
//! log-loss, and threshold the test-set probabilities into labels.
//!
//! Key behaviors
//! -------------
//! - [`LogisticRegression::solve`] runs the whole pipeline with the model's
//!   [`SolveOptions`]; the free function [`solve`] does the same with the
//!   defaults.
//! - Every parameter starts at [`THETA_INIT`] (`0.5`), intercept included.
//! - [`predict_proba`] and [`predict_labels`] are the prediction steps,
//!   usable on their own with any bias-augmented normalized matrix.
//!
//! Invariants & assumptions
//! ------------------------
//! - Each call is a pure function of its inputs; nothing is cached between
//!   calls and the fitted statistics are discarded afterwards.
//! - `theta.len() == retained_features.len() + 1`; `theta[0]` is the
//!   intercept and `theta[j + 1]` weights original feature
//!   `retained_features[j]`.
//! - A probability exactly equal to the threshold is labelled `1`.
use crate::{
    logistic::{
        cost::RegularizedLogLoss,
        errors::{LogRegError, LogRegResult},
        options::SolveOptions,
        validation::validate_inputs,
    },
    optimization::gradient_descent::{GDOutcome, Theta, minimize},
    preprocessing::normalize_with_bias,
    primitives::sigmoid,
};
use ndarray::{Array1, ArrayView1, ArrayView2};

/// Starting value for every parameter.
pub const THETA_INIT: f64 = 0.5;

/// Result of a `solve` call.
///
/// Fields
/// ------
/// - `labels`: predicted class (`0`/`1`) per test row.
/// - `probabilities`: `σ(x̂ᵢ·θ)` per test row.
/// - `theta`: trained parameters; index 0 is the intercept.
/// - `retained_features`: original indices of the features that survived
///   normalization, in the order they appear in `theta[1..]`.
/// - `outcome`: optimizer diagnostics (final cost, cost history, step size,
///   evaluation counts).
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub labels: Array1<u8>,
    pub probabilities: Array1<f64>,
    pub theta: Theta,
    pub retained_features: Vec<usize>,
    pub outcome: GDOutcome,
}

/// Logistic regression configured with a fixed set of [`SolveOptions`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LogisticRegression {
    options: SolveOptions,
}

impl LogisticRegression {
    /// # Errors
    /// Any validation error from [`SolveOptions::validate`].
    pub fn new(options: SolveOptions) -> LogRegResult<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &SolveOptions {
        &self.options
    }

    /// Fit on `(x_train, y_train)` and predict for `x_test`.
    ///
    /// Steps:
    /// 1. Validate shapes, labels, and finiteness.
    /// 2. Normalize both matrices with training min/max and prepend a bias
    ///    column.
    /// 3. Start from `θ = 0.5` and run `num_iterations` gradient-descent
    ///    steps on the regularized log-loss.
    /// 4. Compute test probabilities and threshold them.
    ///
    /// # Errors
    /// - [`LogRegError::EmptyMatrix`], [`LogRegError::ColumnMismatch`],
    ///   [`LogRegError::LabelLengthMismatch`], [`LogRegError::InvalidLabel`],
    ///   [`LogRegError::NonFiniteFeature`] from input validation.
    /// - [`LogRegError::DegenerateFeatures`] if every training feature is
    ///   constant.
    /// - [`LogRegError::OptimizationFailed`] if the optimizer reports a
    ///   non-finite cost or gradient.
    pub fn solve(
        &self, x_train: ArrayView2<'_, f64>, y_train: ArrayView1<'_, f64>,
        x_test: ArrayView2<'_, f64>,
    ) -> LogRegResult<Prediction> {
        let opts = &self.options;
        opts.validate()?;
        validate_inputs(x_train, y_train, x_test)?;

        let (train_n, test_n, retained_features) = normalize_with_bias(x_train, x_test)?;
        let loss = RegularizedLogLoss::new(train_n.view(), y_train, opts.reg_lambda)?;
        let theta0 = Array1::from_elem(train_n.ncols(), THETA_INIT);
        let outcome = minimize(loss, theta0, &opts.gd_options()?)?;

        let probabilities = predict_proba(test_n.view(), &outcome.theta_hat)?;
        let labels = predict_labels(probabilities.view(), opts.threshold);
        Ok(Prediction {
            labels,
            probabilities,
            theta: outcome.theta_hat.clone(),
            retained_features,
            outcome,
        })
    }
}

/// Fit and predict with [`SolveOptions::default`].
///
/// # Errors
/// Same as [`LogisticRegression::solve`].
pub fn solve(
    x_train: ArrayView2<'_, f64>, y_train: ArrayView1<'_, f64>, x_test: ArrayView2<'_, f64>,
) -> LogRegResult<Prediction> {
    LogisticRegression::default().solve(x_train, y_train, x_test)
}

/// Probabilities `σ(X̂θ)` for a bias-augmented, normalized matrix.
///
/// # Errors
/// [`LogRegError::ParameterMismatch`] if `x_hat.ncols() != theta.len()`.
pub fn predict_proba(x_hat: ArrayView2<'_, f64>, theta: &Theta) -> LogRegResult<Array1<f64>> {
    if x_hat.ncols() != theta.len() {
        let (n_params, n_cols) = (theta.len(), x_hat.ncols());
        return Err(LogRegError::ParameterMismatch { n_params, n_cols });
    }
    Ok(sigmoid(&x_hat.dot(theta)))
}

/// `1` where `p >= threshold`, else `0`.
pub fn predict_labels(probabilities: ArrayView1<'_, f64>, threshold: f64) -> Array1<u8> {
    probabilities.mapv(|p| u8::from(p >= threshold))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::gradient_descent::{GDOptions, StepSchedule};
    use ndarray::{Array2, array, s};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The six-point clustered scenario with default options.
    // - Non-increasing cost under a small step size.
    // - Shrinkage of the non-bias weights as λ grows.
    // - Threshold semantics and error propagation.
    //
    // They intentionally DO NOT cover:
    // - Normalizer and objective internals (see their own modules).
    // -------------------------------------------------------------------------

    fn clusters() -> (Array2<f64>, Array1<f64>) {
        (
            array![[1.0, 10.0], [2.0, 20.0], [3.0, 10.0], [10.0, 1.0], [20.0, 2.0], [10.0, 3.0]],
            array![1.0, 1.0, 1.0, 0.0, 0.0, 0.0],
        )
    }

    fn non_bias_norm(theta: &Theta) -> f64 {
        theta.slice(s![1..]).dot(&theta.slice(s![1..])).sqrt()
    }

    #[test]
    // Purpose
    // -------
    // Reproduce the reference scenario end to end.
    //
    // Given
    // -----
    // - Two clusters separated on feature 0 vs feature 1; test point [15, 1].
    // - Default options.
    //
    // Expect
    // ------
    // - Label 0 with probability below 0.5; θ of length 3; both features kept.
    // - 300 iterations and a 301-entry cost history ending below its start.
    fn clustered_scenario_predicts_negative_class() {
        // Arrange
        let (x, y) = clusters();
        let test = array![[15.0, 1.0]];

        // Act
        let pred = solve(x.view(), y.view(), test.view()).unwrap();

        // Assert
        assert_eq!(pred.labels, array![0u8]);
        assert!(pred.probabilities[0] < 0.5);
        assert_eq!(pred.theta.len(), 3);
        assert_eq!(pred.retained_features, vec![0, 1]);
        assert_eq!(pred.outcome.iterations, 300);
        assert_eq!(pred.outcome.cost_history.len(), 301);
        assert!(pred.outcome.cost < pred.outcome.cost_history[0]);
    }

    #[test]
    // Purpose
    // -------
    // Verify the training cost never increases for a small fixed step size.
    //
    // Given
    // -----
    // - The normalized clustered data, λ = 0.1, θ₀ = 0.5.
    // - A constant step of 0.05 over 200 iterations.
    //
    // Expect
    // ------
    // - Every consecutive pair in the cost history is non-increasing.
    // - The reported final step size is still 0.05.
    fn small_fixed_step_gives_monotone_cost() {
        // Arrange
        let (x, y) = clusters();
        let (train_n, _, _) = normalize_with_bias(x.view(), x.view()).unwrap();
        let loss = RegularizedLogLoss::new(train_n.view(), y.view(), 0.1).unwrap();
        let theta0 = Array1::from_elem(train_n.ncols(), THETA_INIT);
        let opts = GDOptions::new(StepSchedule::constant(0.05).unwrap(), 200, false).unwrap();

        // Act
        let outcome = minimize(loss, theta0, &opts).unwrap();

        // Assert
        let history = &outcome.cost_history;
        assert_eq!(history.len(), 201);
        assert!(history.windows(2).all(|w| w[1] <= w[0] + 1e-15));
        assert_eq!(outcome.final_step_size, 0.05);
    }

    #[test]
    // Purpose
    // -------
    // Check that stronger regularization shrinks the feature weights.
    //
    // Given
    // -----
    // - The clustered data fitted with λ = 0.1 and λ = 10.0.
    //
    // Expect
    // ------
    // - ‖θ[1..]‖₂ is smaller for λ = 10.0.
    fn larger_lambda_shrinks_weights() {
        // Arrange
        let (x, y) = clusters();
        let weak = LogisticRegression::new(SolveOptions::default()).unwrap();
        let strong =
            LogisticRegression::new(SolveOptions::default().with_reg_lambda(10.0)).unwrap();

        // Act
        let w = weak.solve(x.view(), y.view(), x.view()).unwrap();
        let s = strong.solve(x.view(), y.view(), x.view()).unwrap();

        // Assert
        assert!(non_bias_norm(&s.theta) < non_bias_norm(&w.theta));
    }

    #[test]
    // Purpose
    // -------
    // Pin threshold semantics and the probability shape check.
    //
    // Given
    // -----
    // - Probabilities [0.2, 0.5, 0.9] and threshold 0.5.
    // - A 1x2 matrix with a length-3 θ.
    //
    // Expect
    // ------
    // - Labels [0, 1, 1].
    // - ParameterMismatch naming the parameter count and matrix width.
    fn labels_use_inclusive_threshold() {
        let probs = array![0.2, 0.5, 0.9];

        assert_eq!(predict_labels(probs.view(), 0.5), array![0u8, 1, 1]);
        assert_eq!(predict_labels(probs.view(), 0.0), array![1u8, 1, 1]);
        assert_eq!(
            predict_proba(array![[1.0, 0.0]].view(), &array![0.0, 0.0, 0.0]),
            Err(LogRegError::ParameterMismatch { n_params: 3, n_cols: 2 })
        );
        let msg = predict_proba(array![[1.0, 0.0]].view(), &array![0.0, 0.0, 0.0])
            .unwrap_err()
            .to_string();
        assert!(msg.contains("3 entries") && msg.contains("2 columns"), "{msg}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure structural problems surface before any fitting.
    //
    // Given
    // -----
    // - A training set whose features are all constant.
    // - A test matrix with the wrong number of columns.
    //
    // Expect
    // ------
    // - DegenerateFeatures and ColumnMismatch respectively.
    fn structural_errors_are_reported() {
        let (x, y) = clusters();
        let constant = Array2::from_elem((6, 2), 4.0);

        assert_eq!(
            solve(constant.view(), y.view(), constant.view()).unwrap_err(),
            LogRegError::DegenerateFeatures { n_features: 2 }
        );
        assert_eq!(
            solve(x.view(), y.view(), array![[1.0, 2.0, 3.0]].view()).unwrap_err(),
            LogRegError::ColumnMismatch { training: 2, test: 3 }
        );
    }
}
