use log::debug;
use nalgebra::{DMatrix, SVD};
use ndarray::{Array2, ArrayView2};

use crate::error::{ElmError, Result};

/// Iteration cap for the decomposition, scaled by the small dimension.
const SVD_SWEEPS_PER_DIM: usize = 100;

/// Solves the output layer in closed form: `w_out = pinv(h) · y`.
///
/// The pseudo-inverse is realized through a singular value decomposition of
/// the hidden activation matrix; singular values at or below
/// `tolerance · σ_max` are treated as zero, which keeps the solve stable on
/// rank-deficient activations. This is the entire training step: no
/// iteration, no convergence loop, no hyperparameter beyond the tolerance.
///
/// # Arguments
/// * `h` - Hidden activations, shape `(n, n_hidden)`.
/// * `y` - One-hot targets, shape `(n, n_classes)`.
/// * `tolerance` - Relative singular value cutoff; `None` uses
///   `max(n, n_hidden) * f32::EPSILON`.
///
/// # Returns
/// The output weights, shape `(n_hidden, n_classes)`.
///
/// # Errors
/// - `ElmError::ShapeMismatch` if `h` and `y` disagree on the row count.
/// - `ElmError::InvalidInput` for empty matrices or a non-positive tolerance.
/// - `ElmError::NumericalFailure` if the decomposition does not converge.
pub fn solve_output_weights(
    h: ArrayView2<f32>,
    y: ArrayView2<f32>,
    tolerance: Option<f32>,
) -> Result<Array2<f32>> {
    if h.nrows() != y.nrows() {
        return Err(ElmError::ShapeMismatch {
            what: "samples",
            got: y.nrows(),
            expected: h.nrows(),
        });
    }
    if h.nrows() == 0 || h.ncols() == 0 || y.ncols() == 0 {
        return Err(ElmError::InvalidInput("cannot solve on empty matrices"));
    }

    let rel_tolerance = match tolerance {
        Some(tol) if tol > 0. => tol,
        Some(_) => return Err(ElmError::InvalidInput("svd tolerance must be positive")),
        None => h.nrows().max(h.ncols()) as f32 * f32::EPSILON,
    };

    let (n, n_hidden) = (h.nrows(), h.ncols());
    let n_classes = y.ncols();

    let h_na = DMatrix::from_row_iterator(n, n_hidden, h.iter().copied());
    let y_na = DMatrix::from_row_iterator(n, n_classes, y.iter().copied());

    let max_sweeps = SVD_SWEEPS_PER_DIM * n.min(n_hidden);
    let svd = SVD::try_new(h_na, true, true, f32::EPSILON, max_sweeps)
        .ok_or(ElmError::NumericalFailure("svd did not converge"))?;

    let sigma_max = svd.singular_values.iter().copied().fold(0., f32::max);
    let cutoff = rel_tolerance * sigma_max;
    debug!(
        "output solve: {n} samples, {n_hidden} hidden, {n_classes} classes, rank {}, cutoff {cutoff:e}",
        svd.rank(cutoff)
    );

    let w_out = svd.solve(&y_na, cutoff).map_err(ElmError::NumericalFailure)?;

    Ok(Array2::from_shape_fn((n_hidden, n_classes), |(i, j)| {
        w_out[(i, j)]
    }))
}
