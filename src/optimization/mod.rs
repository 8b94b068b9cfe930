//! optimization — gradient-descent stack and unified error surface.
//!
//! Purpose
//! -------
//! Provide the optimization layer used for model fitting: an Argmin-backed
//! batch gradient-descent optimizer with a decaying step size, plus a single
//! error/result surface. Callers supply a differentiable cost, a starting
//! point, and options, and obtain the fitted parameters and diagnostics
//! without touching backend solver details.
//!
//! Key behaviors
//! -------------
//! - Expose a high-level API for **minimizing costs** `c(θ)`
//!   (`gradient_descent::minimize`) with a configurable step schedule and
//!   fixed iteration count.
//! - Normalize configuration issues, numerical failures, and backend solver
//!   errors into a single enum (`errors::OptError`) with a common result
//!   alias (`OptResult<T>`).
//!
//! Invariants & assumptions
//! ------------------------
//! - Optimizers operate on finite parameter vectors; invalid states are
//!   reported as `OptError`, not panics.
//! - Objectives report domain violations (shape mismatches, non-finite
//!   values) as recoverable errors tunnelled through `argmin::core::Error`.
//!
//! Conventions
//! -----------
//! - Parameters and gradients are `ndarray`-based aliases (`Theta`, `Grad`).
//! - Public optimization entrypoints that can fail return `OptResult<T>`;
//!   callers never see raw Argmin errors.
//! - Progress output is limited to the optional `obs_slog` observer.
//!
//! Downstream usage
//! ----------------
//! - `logistic` implements `CostFunction`/`Gradient` for its regularized
//!   log-loss and calls `minimize` to obtain a `GDOutcome`.
//! - Front-ends typically import the curated surface via
//!   `optimization::prelude::*`.

pub mod errors;
pub mod gradient_descent;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_logreg::optimization::prelude::*;
//
// to import the main optimization surface in a single line.

pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::gradient_descent::prelude::*;
}
