use ndarray::{ArrayView1, ArrayView2, Axis};

use crate::error::{ElmError, Result};

/// Index of the largest entry in `row`, `None` for an empty row.
pub fn argmax(row: ArrayView1<f32>) -> Option<usize> {
    let mut best = None;
    let mut best_value = f32::NEG_INFINITY;

    for (idx, &value) in row.iter().enumerate() {
        if best.is_none() || value > best_value {
            best = Some(idx);
            best_value = value;
        }
    }

    best
}

/// Fraction of rows whose score argmax matches the target argmax.
///
/// `scores` are raw per-class outputs, `targets` the one-hot ground truth.
///
/// # Errors
/// Returns `ElmError::ShapeMismatch` if the two matrices disagree on row or
/// column count, `ElmError::InvalidInput` when there are no rows to compare.
pub fn accuracy(scores: ArrayView2<f32>, targets: ArrayView2<f32>) -> Result<f32> {
    if scores.nrows() != targets.nrows() {
        return Err(ElmError::ShapeMismatch {
            what: "samples",
            got: targets.nrows(),
            expected: scores.nrows(),
        });
    }
    if scores.ncols() != targets.ncols() {
        return Err(ElmError::ShapeMismatch {
            what: "classes",
            got: targets.ncols(),
            expected: scores.ncols(),
        });
    }
    if scores.nrows() == 0 {
        return Err(ElmError::InvalidInput("cannot compute accuracy on zero samples"));
    }

    let hits = scores
        .axis_iter(Axis(0))
        .zip(targets.axis_iter(Axis(0)))
        .filter(|(predicted, actual)| argmax(predicted.view()) == argmax(actual.view()))
        .count();

    Ok(hits as f32 / scores.nrows() as f32)
}

#[cfg(test)]
mod test {
    use ndarray::{arr1, arr2};

    use super::*;

    #[test]
    fn argmax_picks_the_largest_entry() {
        assert_eq!(argmax(arr1(&[0.1, 0.7, 0.2]).view()), Some(1));
        assert_eq!(argmax(arr1(&[3.]).view()), Some(0));
        assert_eq!(argmax(ndarray::Array1::<f32>::zeros(0).view()), None);
    }

    #[test]
    fn accuracy_counts_matching_rows() {
        let scores = arr2(&[
            [0.9, 0.1], //
            [0.2, 0.8], //
            [0.6, 0.4], //
            [0.3, 0.7], //
        ]);
        let targets = arr2(&[
            [1., 0.], //
            [0., 1.], //
            [0., 1.], // miss
            [0., 1.], //
        ]);

        assert_eq!(accuracy(scores.view(), targets.view()).unwrap(), 0.75);
    }

    #[test]
    fn mismatched_shapes_are_rejected() {
        let scores = arr2(&[[1., 0.], [0., 1.]]);
        let targets = arr2(&[[1., 0.]]);

        let err = accuracy(scores.view(), targets.view()).unwrap_err();
        assert!(matches!(err, ElmError::ShapeMismatch { what: "samples", .. }));
    }
}
