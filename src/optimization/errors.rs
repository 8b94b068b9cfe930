//! optimization::errors — unified error surface for the optimizer layer.
//!
//! Purpose
//! -------
//! Collect every failure the gradient-descent stack can raise (option
//! validation, shape checks on the objective, non-finite numerics, and
//! backend `argmin` errors) into one enum with a shared result alias.
//!
//! Conventions
//! -----------
//! - Variants carry the offending value and a short `reason` where that
//!   helps debugging; messages are phrased as domain constraints.
//! - Backend errors never leak: `From<argmin::core::Error>` first recovers
//!   an `OptError` that was tunnelled through `argmin`, then maps
//!   `ArgminError` variants, and finally falls back to `BackendError`.
use argmin::core::{ArgminError, Error};

/// Crate-wide result alias for optimizer operations.
pub type OptResult<T> = Result<T, OptError>;

#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    // ---- Gradient ----
    /// Gradient dimensions do not match parameter dimensions.
    GradientDimMismatch { expected: usize, found: usize },

    /// Gradient elements need to be finite.
    InvalidGradient { index: usize, value: f64, reason: &'static str },

    // ---- GDOptions ----
    /// Step size needs to be positive and finite.
    InvalidStepSize { alpha: f64, reason: &'static str },

    /// Decay factor needs to be finite and greater than one.
    InvalidDecayFactor { factor: f64, reason: &'static str },

    /// Decay period needs to be at least one iteration.
    InvalidDecayPeriod { period: usize, reason: &'static str },

    /// Maximum iterations needs to be positive.
    InvalidMaxIter { max_iter: usize, reason: &'static str },

    // ---- Objective ----
    /// Regularization strength needs to be finite and non-negative.
    InvalidRegLambda { value: f64, reason: &'static str },

    /// Design matrix and parameter vector disagree on the number of columns.
    ThetaLengthMismatch { expected: usize, actual: usize },

    /// Design matrix and label vector disagree on the number of rows.
    LabelLengthMismatch { expected: usize, actual: usize },

    /// The objective needs at least one observation.
    EmptyDesign,

    /// Cost function returned a non-finite value.
    NonFiniteCost { value: f64 },

    // ---- Optimizer outcome ----
    /// Estimated parameters must be finite.
    InvalidThetaHat { index: usize, value: f64, reason: &'static str },

    /// Theta hat is missing.
    MissingThetaHat,

    // ---- Argmin ----
    /// Wrapper for argmin::InvalidParameter
    InvalidParameter { text: String },
    /// Wrapper for argmin::NotImplemented
    NotImplemented { text: String },
    /// Wrapper for argmin::NotInitialized
    NotInitialized { text: String },
    /// Wrapper for argmin::ConditionViolated
    ConditionViolated { text: String },
    /// Wrapper for argmin::CheckPointNotFound
    CheckPointNotFound { text: String },
    /// Wrapper for argmin::PotentialBug
    PotentialBug { text: String },
    /// Wrapper for argmin::ImpossibleError
    ImpossibleError { text: String },
    /// Wrapper for other argmin::Error types
    BackendError { text: String },

    // ---- Fallback ----
    UnknownError,
}

impl std::error::Error for OptError {}

impl std::fmt::Display for OptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Gradient ----
            OptError::GradientDimMismatch { expected, found } => {
                write!(f, "Gradient dimension mismatch: expected {expected}, found {found}")
            }
            OptError::InvalidGradient { index, value, reason } => {
                write!(f, "Invalid gradient at index {index}: {value}: {reason}")
            }

            // ---- GDOptions ----
            OptError::InvalidStepSize { alpha, reason } => {
                write!(f, "Invalid step size {alpha}: {reason}")
            }
            OptError::InvalidDecayFactor { factor, reason } => {
                write!(f, "Invalid step-size decay factor {factor}: {reason}")
            }
            OptError::InvalidDecayPeriod { period, reason } => {
                write!(f, "Invalid step-size decay period {period}: {reason}")
            }
            OptError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Invalid maximum iterations {max_iter}: {reason}")
            }

            // ---- Objective ----
            OptError::InvalidRegLambda { value, reason } => {
                write!(f, "Invalid regularization strength {value}: {reason}")
            }
            OptError::ThetaLengthMismatch { expected, actual } => {
                write!(f, "Theta length mismatch: expected {expected}, actual {actual}")
            }
            OptError::LabelLengthMismatch { expected, actual } => {
                write!(f, "Label length mismatch: expected {expected}, actual {actual}")
            }
            OptError::EmptyDesign => {
                write!(f, "Design matrix has no rows")
            }
            OptError::NonFiniteCost { value } => {
                write!(f, "Non-finite cost value: {value}")
            }

            // ---- Optimizer outcome ----
            OptError::InvalidThetaHat { index, value, reason } => {
                write!(f, "Invalid estimated parameter at index {index}: {value}: {reason}")
            }
            OptError::MissingThetaHat => {
                write!(f, "Missing estimated parameters (theta hat)")
            }

            // ---- Argmin ----
            OptError::InvalidParameter { text } => {
                write!(f, "Invalid parameter: {text}")
            }
            OptError::NotImplemented { text } => {
                write!(f, "Not implemented: {text}")
            }
            OptError::NotInitialized { text } => {
                write!(f, "Not initialized: {text}")
            }
            OptError::ConditionViolated { text } => {
                write!(f, "Condition violated: {text}")
            }
            OptError::CheckPointNotFound { text } => {
                write!(f, "Checkpoint not found: {text}")
            }
            OptError::PotentialBug { text } => {
                write!(f, "Potential bug: {text}")
            }
            OptError::ImpossibleError { text } => {
                write!(f, "Impossible error: {text}")
            }
            OptError::BackendError { text } => {
                write!(f, "Backend error: {text}")
            }

            // ---- Fallback ----
            OptError::UnknownError => {
                write!(f, "Unknown error")
            }
        }
    }
}

impl From<Error> for OptError {
    fn from(original_err: Error) -> Self {
        let original_err = match original_err.downcast::<OptError>() {
            Ok(opt_err) => return opt_err,
            Err(err) => err,
        };
        match original_err.downcast() {
            Ok(argmin_err) => match argmin_err {
                ArgminError::InvalidParameter { text } => OptError::InvalidParameter { text },
                ArgminError::NotImplemented { text } => OptError::NotImplemented { text },
                ArgminError::NotInitialized { text } => OptError::NotInitialized { text },
                ArgminError::ConditionViolated { text } => OptError::ConditionViolated { text },
                ArgminError::CheckpointNotFound { text } => OptError::CheckPointNotFound { text },
                ArgminError::PotentialBug { text } => OptError::PotentialBug { text },
                ArgminError::ImpossibleError { text } => OptError::ImpossibleError { text },
                _ => OptError::UnknownError,
            },
            Err(err) => OptError::BackendError { text: err.to_string() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Recovery of an `OptError` tunnelled through `argmin::core::Error`.
    // - Mapping of `ArgminError` variants into their `OptError` wrappers.
    // - Display messages embedding the offending payload.
    //
    // They intentionally DO NOT cover:
    // - Where these errors are raised (validation and objective modules).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Ensure that a domain error returned from inside an argmin callback
    // comes back out unchanged.
    //
    // Given
    // -----
    // - `OptError::NonFiniteCost` converted into `argmin::core::Error`.
    //
    // Expect
    // ------
    // - Converting back yields the identical `OptError`.
    fn from_argmin_error_recovers_tunnelled_opt_error() {
        // Arrange
        let original = OptError::NonFiniteCost { value: f64::INFINITY };
        let wrapped: Error = original.clone().into();

        // Act
        let recovered: OptError = wrapped.into();

        // Assert
        assert_eq!(recovered, original);
    }

    #[test]
    // Purpose
    // -------
    // Verify that native argmin errors are mapped onto their wrappers.
    //
    // Given
    // -----
    // - `ArgminError::NotInitialized` converted into `argmin::core::Error`.
    //
    // Expect
    // ------
    // - The conversion yields `OptError::NotInitialized` with the same text.
    fn from_argmin_error_maps_argmin_variants() {
        // Arrange
        let wrapped: Error = ArgminError::NotInitialized { text: "no param".to_string() }.into();

        // Act
        let mapped: OptError = wrapped.into();

        // Assert
        assert_eq!(mapped, OptError::NotInitialized { text: "no param".to_string() });
    }

    #[test]
    // Purpose
    // -------
    // Check that Display output carries the offending value.
    //
    // Given
    // -----
    // - `OptError::InvalidStepSize` with alpha = -0.5.
    //
    // Expect
    // ------
    // - The message contains "-0.5" and the reason string.
    fn display_includes_payload() {
        // Arrange
        let err = OptError::InvalidStepSize { alpha: -0.5, reason: "Step size must be positive." };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("-0.5"), "message was: {msg}");
        assert!(msg.contains("must be positive"), "message was: {msg}");
    }
}
