//! logistic — binary logistic regression fitted by scheduled gradient descent.
//!
//! Purpose
//! -------
//! Provide the model layer: the regularized log-loss objective, the
//! user-facing options, input validation, and the `solve` pipeline that
//! normalizes data, fits `θ`, and predicts labels for a test matrix.
//!
//! Key behaviors
//! -------------
//! - [`cost::RegularizedLogLoss`] implements `argmin`'s `CostFunction` and
//!   `Gradient` for the L2-penalized cross-entropy with the intercept left
//!   unpenalized.
//! - [`model::LogisticRegression`] / [`model::solve`] run validation →
//!   normalization → gradient descent → thresholding and return a
//!   [`model::Prediction`].
//! - [`errors::LogRegError`] is the single error surface for this layer;
//!   preprocessing and optimizer errors convert into it.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the objective against finite differences, option
//!   validation, and the classic two-cluster scenario.
//! - `tests/integration_logistic_pipeline.rs` exercises the public surface.

pub mod cost;
pub mod errors;
pub mod model;
pub mod options;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::cost::RegularizedLogLoss;
pub use self::errors::{LogRegError, LogRegResult};
pub use self::model::{
    LogisticRegression, Prediction, THETA_INIT, predict_labels, predict_proba, solve,
};
pub use self::options::{DEFAULT_REG_LAMBDA, DEFAULT_THRESHOLD, SolveOptions};

pub mod prelude {
    pub use super::errors::{LogRegError, LogRegResult};
    pub use super::model::{LogisticRegression, Prediction, solve};
    pub use super::options::SolveOptions;
}
