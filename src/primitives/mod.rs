//! primitives — stateless elementwise maps and reductions over `ndarray`.
//!
//! Purpose
//! -------
//! Supply the numeric building blocks shared by the normalizer and the
//! logistic objective: an overflow-free logistic function, elementwise
//! log/complement/reciprocal maps, probability clamping, per-column
//! min/max, and index-driven matrix construction.
//!
//! Conventions
//! -----------
//! - All array helpers are free functions generic over `ArrayBase<S, D>`;
//!   they allocate a new array and never mutate their input.
//! - Nothing here validates shapes or finiteness; callers own those checks.
//! - No logging, I/O, or global state.

pub mod elementwise;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::elementwise::{
    PROB_EPS, build_matrix, clamp_probability, column_min_max, ln, one_minus, reciprocal,
    safe_logistic, shape_of, sigmoid,
};

pub mod prelude {
    pub use super::elementwise::{
        PROB_EPS, clamp_probability, ln, one_minus, safe_logistic, sigmoid,
    };
}
