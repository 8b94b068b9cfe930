//! preprocessing — feature scaling fitted on training data.
//!
//! Purpose
//! -------
//! Turn raw feature matrices on arbitrary scales into the `[0, 1]`-scaled,
//! bias-augmented design matrices the logistic objective expects, using
//! statistics taken from the training set alone.
//!
//! Downstream usage
//! ----------------
//! - `logistic::model` calls [`normalize_with_bias`] once per solve.
//! - Callers who want to inspect the retained features or reuse the mapping
//!   can work with [`NormalizationStats`] directly.

pub mod errors;
pub mod normalizer;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{PreprocessError, PreprocessResult};
pub use self::normalizer::{NormalizationStats, normalize, normalize_with_bias, prepend_bias};
