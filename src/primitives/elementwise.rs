//! Elementwise numeric primitives over `ndarray` containers.
//!
//! Provides the scalar maps (logistic, log, complement, reciprocal) and the
//! small reductions the normalizer and the logistic objective are built on.
//! Every array function is a free function over `ArrayBase<S, D>` that
//! applies a scalar map through `mapv`, so it preserves shape and works for
//! vectors and matrices alike.
//!
//! # Provided items
//! - [`PROB_EPS`]: margin used to keep probabilities strictly inside (0, 1)
//!   before taking logarithms.
//! - [`safe_logistic(x)`]: overflow-free `1 / (1 + exp(-x))`.
//! - [`sigmoid`], [`ln`], [`one_minus`], [`reciprocal`],
//!   [`clamp_probability`]: elementwise maps.
//! - [`column_min_max`]: per-column `(min, max)` of a matrix.
//! - [`build_matrix`]: construct a matrix from an index function.
//! - [`shape_of`]: `"rows x cols"` description used in diagnostics.
use ndarray::{Array, Array2, ArrayBase, ArrayView2, Data, Dimension};

/// Probability margin for logarithms in the cross-entropy cost.
///
/// Probabilities are clamped into `[PROB_EPS, 1 - PROB_EPS]` before `ln`
/// is applied, so `ln(h)` and `ln(1 - h)` stay finite when `h` saturates
/// at exactly 0.0 or 1.0 in `f64`.
pub const PROB_EPS: f64 = 1e-12;

/// Numerically stable logistic function `1 / (1 + exp(-x))`.
///
/// For `x >= 0` the textbook form is used; for `x < 0` the algebraically
/// equal `exp(x) / (1 + exp(x))` avoids evaluating `exp(-x)` for large
/// `|x|`, which would overflow to `inf`.
///
/// # Returns
/// - A value in `[0, 1]`; exactly `0.0`/`1.0` only when `|x|` is so large
///   that the result rounds in `f64`.
pub fn safe_logistic(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Elementwise logistic function.
pub fn sigmoid<S, D>(z: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    z.mapv(safe_logistic)
}

/// Elementwise natural logarithm.
///
/// No clamping is applied; callers feeding probabilities should pass them
/// through [`clamp_probability`] first.
pub fn ln<S, D>(z: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    z.mapv(f64::ln)
}

/// Elementwise complement `1 - z`.
pub fn one_minus<S, D>(z: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    z.mapv(|v| 1.0 - v)
}

/// Elementwise reciprocal `1 / z`.
pub fn reciprocal<S, D>(z: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    z.mapv(|v| 1.0 / v)
}

/// Clamp every entry into `[eps, 1 - eps]`.
///
/// `NaN` entries are passed through unchanged so that downstream
/// finiteness checks still see them.
pub fn clamp_probability<S, D>(p: &ArrayBase<S, D>, eps: f64) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    p.mapv(|v| v.clamp(eps, 1.0 - eps))
}

/// Per-column `(min, max)` of a matrix.
///
/// Returns one pair per column in column order. A matrix with zero rows
/// yields `(inf, -inf)` for every column, i.e. a negative range.
pub fn column_min_max(x: ArrayView2<'_, f64>) -> Vec<(f64, f64)> {
    x.columns()
        .into_iter()
        .map(|col| {
            col.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
        })
        .collect()
}

/// Build a `rows × cols` matrix whose entry `(r, c)` is `f(r, c)`.
pub fn build_matrix<F>(rows: usize, cols: usize, f: F) -> Array2<f64>
where
    F: FnMut((usize, usize)) -> f64,
{
    Array2::from_shape_fn((rows, cols), f)
}

/// Human-readable shape, e.g. `"6x2"` for a matrix or `"6"` for a vector.
pub fn shape_of<S, D>(a: &ArrayBase<S, D>) -> String
where
    S: Data,
    D: Dimension,
{
    a.shape().iter().map(|d| d.to_string()).collect::<Vec<_>>().join("x")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, array};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Agreement of `safe_logistic` with the naive formula on a safe grid and
    //   its behavior in the far tails.
    // - Shape preservation and values of the elementwise maps.
    // - Column reductions, index-built matrices, and shape strings.
    //
    // They intentionally DO NOT cover:
    // - The logistic cost built on top of these maps (see `logistic::cost`).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `safe_logistic` matches `1 / (1 + exp(-x))` where the naive
    // form is well conditioned.
    //
    // Given
    // -----
    // - A grid of x in [-20, 20].
    //
    // Expect
    // ------
    // - Absolute difference below 1e-15 at every grid point.
    fn safe_logistic_matches_naive_formula_on_safe_grid() {
        // Arrange
        let grid = Array1::<f64>::linspace(-20.0, 20.0, 81);

        // Act / Assert
        for &x in grid.iter() {
            let naive = 1.0 / (1.0 + (-x).exp());
            assert!((safe_logistic(x) - naive).abs() < 1e-15, "x = {x}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure the tails neither overflow nor produce NaN.
    //
    // Given
    // -----
    // - x = -1000 and x = 1000.
    //
    // Expect
    // ------
    // - Results are finite, in [0, 1], and symmetric around 0.5.
    fn safe_logistic_tails_are_finite() {
        // Act
        let lo = safe_logistic(-1000.0);
        let hi = safe_logistic(1000.0);

        // Assert
        assert!(lo.is_finite() && hi.is_finite());
        assert_eq!(lo, 0.0);
        assert_eq!(hi, 1.0);
        assert!((safe_logistic(0.0) - 0.5).abs() < 1e-15);
    }

    #[test]
    // Purpose
    // -------
    // Check that elementwise maps keep the input shape and compute the
    // expected values.
    //
    // Given
    // -----
    // - A 2x2 matrix with entries in (0, 1].
    //
    // Expect
    // ------
    // - `one_minus`, `reciprocal`, and `ln` agree entry by entry with the
    //   scalar formulas, and `sigmoid` of 0 is 0.5.
    fn elementwise_maps_preserve_shape_and_values() {
        // Arrange
        let m = array![[0.25, 0.5], [0.75, 1.0]];

        // Act
        let om = one_minus(&m);
        let rc = reciprocal(&m);
        let lg = ln(&m);
        let sg = sigmoid(&Array2::<f64>::zeros((2, 3)));

        // Assert
        assert_eq!(om.shape(), m.shape());
        assert_eq!(om, array![[0.75, 0.5], [0.25, 0.0]]);
        assert_eq!(rc, array![[4.0, 2.0], [4.0 / 3.0, 1.0]]);
        assert!((lg[[0, 1]] - 0.5_f64.ln()).abs() < 1e-15);
        assert_eq!(lg[[1, 1]], 0.0);
        assert!(sg.iter().all(|&v| v == 0.5));
    }

    #[test]
    // Purpose
    // -------
    // Verify that clamping keeps probabilities strictly inside (0, 1) and
    // leaves interior values untouched.
    //
    // Given
    // -----
    // - The vector [0.0, 0.3, 1.0].
    //
    // Expect
    // ------
    // - Endpoints move to PROB_EPS and 1 - PROB_EPS; 0.3 is unchanged.
    fn clamp_probability_moves_only_endpoints() {
        // Arrange
        let p = array![0.0, 0.3, 1.0];

        // Act
        let c = clamp_probability(&p, PROB_EPS);

        // Assert
        assert_eq!(c[0], PROB_EPS);
        assert_eq!(c[1], 0.3);
        assert_eq!(c[2], 1.0 - PROB_EPS);
        assert!(ln(&c).iter().all(|v| v.is_finite()));
        assert!(ln(&one_minus(&c)).iter().all(|v| v.is_finite()));
    }

    #[test]
    // Purpose
    // -------
    // Confirm per-column reductions and index-built matrices.
    //
    // Given
    // -----
    // - A 3x2 matrix with a constant second column.
    //
    // Expect
    // ------
    // - Column 0 reports (1, 5); column 1 reports (7, 7).
    // - `build_matrix` reproduces `(r, c) -> 10r + c`.
    // - `shape_of` renders "3x2".
    fn column_min_max_and_build_matrix() {
        // Arrange
        let x = array![[3.0, 7.0], [1.0, 7.0], [5.0, 7.0]];

        // Act
        let stats = column_min_max(x.view());
        let built = build_matrix(2, 3, |(r, c)| (10 * r + c) as f64);

        // Assert
        assert_eq!(stats, vec![(1.0, 5.0), (7.0, 7.0)]);
        assert_eq!(built, array![[0.0, 1.0, 2.0], [10.0, 11.0, 12.0]]);
        assert_eq!(shape_of(&x), "3x2");
        assert_eq!(shape_of(&array![1.0, 2.0]), "2");
    }
}
