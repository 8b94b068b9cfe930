//! Integration tests for the logistic-regression pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end path: raw feature matrices, through
//!   train-fitted normalization and scheduled gradient descent, to
//!   thresholded predictions on a test matrix.
//! - Check that the layered public API (`preprocessing`, `optimization`,
//!   `logistic`) composes to exactly what `solve` does.
//!
//! Coverage
//! --------
//! - `logistic::model`:
//!   - `solve` / `LogisticRegression::solve` on separable data.
//!   - Constant-feature dropping and out-of-range test values.
//! - `optimization::gradient_descent`:
//!   - Step-size decay as reported by `GDOutcome::final_step_size`.
//!   - Direct use of `minimize` with `RegularizedLogLoss`.
//! - `preprocessing::normalizer`:
//!   - `normalize_with_bias` feeding the optimizer.
//!
//! Exclusions
//! ----------
//! - Fine-grained checks of primitives, validation, and the objective's
//!   derivatives; those are covered by unit tests.
//! - Python bindings.
use ndarray::{Array1, Array2, array};
use rust_logreg::{
    logistic::{
        LogRegError, LogisticRegression, RegularizedLogLoss, SolveOptions, THETA_INIT,
        predict_labels, predict_proba, solve,
    },
    optimization::gradient_descent::{GDOptions, StepSchedule, minimize},
    preprocessing::normalize_with_bias,
};

/// Purpose
/// -------
/// Six training points in two clusters: positives have a small feature 0
/// and a large feature 1, negatives the reverse.
///
/// Returns
/// -------
/// - `(x, y)` with `x` of shape 6x2 and labels `[1, 1, 1, 0, 0, 0]`.
fn clustered_training_set() -> (Array2<f64>, Array1<f64>) {
    (
        array![[1.0, 10.0], [2.0, 20.0], [3.0, 10.0], [10.0, 1.0], [20.0, 2.0], [10.0, 3.0]],
        array![1.0, 1.0, 1.0, 0.0, 0.0, 0.0],
    )
}

#[test]
// Purpose
// -------
// Ensure default training separates the clusters and classifies both the
// training points and an unseen negative point correctly.
//
// Given
// -----
// - The clustered training set.
// - A test matrix holding the training rows followed by [15, 1].
//
// Expect
// ------
// - Labels [1, 1, 1, 0, 0, 0, 0].
// - Probabilities in (0, 1); the unseen point below 0.5.
fn default_fit_separates_clusters() {
    // Arrange
    let (x, y) = clustered_training_set();
    let mut test = x.clone();
    test.push_row(array![15.0, 1.0].view()).expect("row width matches");

    // Act
    let pred = solve(x.view(), y.view(), test.view()).expect("solve should succeed");

    // Assert
    assert_eq!(pred.labels, array![1u8, 1, 1, 0, 0, 0, 0]);
    assert!(pred.probabilities.iter().all(|&p| p > 0.0 && p < 1.0));
    assert!(pred.probabilities[6] < 0.5);
}

#[test]
// Purpose
// -------
// Verify that a constant training column is dropped without changing the
// fitted model.
//
// Given
// -----
// - The clustered training set with a constant column 7.0 inserted in the
//   middle, and the same test point with an arbitrary value there.
//
// Expect
// ------
// - Retained features [0, 2]; θ and probabilities identical to the fit
//   without the constant column.
fn constant_feature_is_dropped() {
    // Arrange
    let (x, y) = clustered_training_set();
    let x_wide = Array2::from_shape_fn((6, 3), |(r, c)| match c {
        0 => x[[r, 0]],
        1 => 7.0,
        _ => x[[r, 1]],
    });
    let test = array![[15.0, 1.0]];
    let test_wide = array![[15.0, -3.0, 1.0]];

    // Act
    let narrow = solve(x.view(), y.view(), test.view()).unwrap();
    let wide = solve(x_wide.view(), y.view(), test_wide.view()).unwrap();

    // Assert
    assert_eq!(wide.retained_features, vec![0, 2]);
    assert_eq!(wide.theta, narrow.theta);
    assert_eq!(wide.probabilities, narrow.probabilities);
}

#[test]
// Purpose
// -------
// Confirm test values outside the training range are accepted.
//
// Given
// -----
// - A test point [100, 0], far beyond the training maxima and minima.
//
// Expect
// ------
// - Finite probability below 0.5 and label 0.
fn out_of_range_test_values_are_accepted() {
    let (x, y) = clustered_training_set();

    let pred = solve(x.view(), y.view(), array![[100.0, 0.0]].view()).unwrap();

    assert!(pred.probabilities[0].is_finite());
    assert!(pred.probabilities[0] < 0.5);
    assert_eq!(pred.labels, array![0u8]);
}

#[test]
// Purpose
// -------
// Check the step-size schedule through the reported final step size.
//
// Given
// -----
// - Default α = 0.2 with 49, 51, 101 and 300 iterations.
//
// Expect
// ------
// - 0.2, 0.1, 0.05 and 0.003125 respectively.
fn final_step_size_follows_decay_schedule() {
    // Arrange
    let (x, y) = clustered_training_set();
    let final_step = |iters: usize| {
        let opts = SolveOptions::default().with_num_iterations(iters);
        LogisticRegression::new(opts)
            .unwrap()
            .solve(x.view(), y.view(), x.view())
            .unwrap()
            .outcome
            .final_step_size
    };

    // Act / Assert
    assert_eq!(final_step(49), 0.2);
    assert_eq!(final_step(51), 0.1);
    assert_eq!(final_step(101), 0.05);
    assert_eq!(final_step(300), 0.003125);
}

#[test]
// Purpose
// -------
// Verify the layered API composes to the same result as `solve`.
//
// Given
// -----
// - `normalize_with_bias` on the clustered set, `RegularizedLogLoss` with
//   λ = 0.1, θ₀ = 0.5, and default gradient-descent options.
//
// Expect
// ------
// - θ and thresholded labels identical to `solve`.
fn layered_api_matches_solve() {
    // Arrange
    let (x, y) = clustered_training_set();
    let test = array![[15.0, 1.0], [2.0, 15.0]];

    // Act
    let (train_n, test_n, _) = normalize_with_bias(x.view(), test.view()).unwrap();
    let loss = RegularizedLogLoss::new(train_n.view(), y.view(), 0.1).unwrap();
    let theta0 = Array1::from_elem(train_n.ncols(), THETA_INIT);
    let opts = GDOptions::new(StepSchedule::default(), 300, false).unwrap();
    let outcome = minimize(loss, theta0, &opts).unwrap();
    let probs = predict_proba(test_n.view(), &outcome.theta_hat).unwrap();
    let labels = predict_labels(probs.view(), 0.5);

    let pred = solve(x.view(), y.view(), test.view()).unwrap();

    // Assert
    assert_eq!(outcome.theta_hat, pred.theta);
    assert_eq!(labels, pred.labels);
    assert_eq!(labels, array![0u8, 1]);
}

#[test]
// Purpose
// -------
// Ensure invalid inputs are rejected before fitting with precise errors.
//
// Given
// -----
// - Too few labels, a label of 2.0, and a threshold of -0.1.
//
// Expect
// ------
// - LabelLengthMismatch, InvalidLabel, and InvalidThreshold.
fn invalid_inputs_are_rejected() {
    let (x, _) = clustered_training_set();

    assert_eq!(
        solve(x.view(), array![1.0, 0.0].view(), x.view()).unwrap_err(),
        LogRegError::LabelLengthMismatch { expected: 6, actual: 2 }
    );
    assert_eq!(
        solve(x.view(), array![1.0, 1.0, 2.0, 0.0, 0.0, 0.0].view(), x.view()).unwrap_err(),
        LogRegError::InvalidLabel { index: 2, value: 2.0 }
    );
    assert_eq!(
        LogisticRegression::new(SolveOptions::default().with_threshold(-0.1)).unwrap_err(),
        LogRegError::InvalidThreshold { value: -0.1 }
    );
}
