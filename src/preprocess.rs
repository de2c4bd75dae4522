use std::num::NonZeroUsize;

use ndarray::{Array1, Array2, ArrayView2, Axis};

use crate::error::{ElmError, Result};

/// Per-column standardization: `(x - mean) / std`.
///
/// Statistics are fitted once, on the training split, and reused on every
/// other split. Columns with zero variance keep a unit divisor so they
/// transform to zero instead of dividing by zero.
pub struct StandardScaler {
    mean: Array1<f32>,
    std: Array1<f32>,
}

impl StandardScaler {
    /// Computes column means and standard deviations of `x`.
    ///
    /// # Errors
    /// Returns `ElmError::InvalidInput` if `x` has no rows.
    pub fn fit(x: ArrayView2<f32>) -> Result<Self> {
        if x.nrows() == 0 {
            return Err(ElmError::InvalidInput("cannot fit a scaler on an empty matrix"));
        }

        let mean = x
            .mean_axis(Axis(0))
            .ok_or(ElmError::InvalidInput("cannot fit a scaler on an empty matrix"))?;
        let std = x
            .std_axis(Axis(0), 0.)
            .mapv(|s| if s > f32::EPSILON { s } else { 1. });

        Ok(Self { mean, std })
    }

    /// Standardizes `x` with the fitted statistics.
    ///
    /// # Errors
    /// Returns `ElmError::ShapeMismatch` if the column count differs from
    /// the fitted matrix.
    pub fn transform(&self, x: ArrayView2<f32>) -> Result<Array2<f32>> {
        if x.ncols() != self.mean.len() {
            return Err(ElmError::ShapeMismatch {
                what: "features",
                got: x.ncols(),
                expected: self.mean.len(),
            });
        }

        Ok((x.to_owned() - &self.mean) / &self.std)
    }

    /// Fits on `x` and returns the scaler together with the transformed `x`.
    pub fn fit_transform(x: ArrayView2<f32>) -> Result<(Self, Array2<f32>)> {
        let scaler = Self::fit(x)?;
        let scaled = scaler.transform(x)?;
        Ok((scaler, scaled))
    }
}

/// Encodes integer class labels as a one-hot matrix of shape
/// `(labels.len(), n_classes)`, exactly one `1.0` per row.
///
/// # Errors
/// Returns `ElmError::InvalidInput` if any label is out of range.
pub fn one_hot(labels: &[usize], n_classes: NonZeroUsize) -> Result<Array2<f32>> {
    let n_classes = n_classes.get();
    let mut y = Array2::zeros((labels.len(), n_classes));

    for (row, &label) in labels.iter().enumerate() {
        if label >= n_classes {
            return Err(ElmError::InvalidInput("label index out of range for the class count"));
        }
        y[[row, label]] = 1.;
    }

    Ok(y)
}

#[cfg(test)]
mod test {
    use super::*;

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn fitted_split_is_standardized() {
        let x = Array2::from_shape_vec((4, 2), vec![1., 10., 2., 20., 3., 30., 4., 40.]).unwrap();
        let (_, scaled) = StandardScaler::fit_transform(x.view()).unwrap();

        for col in scaled.axis_iter(Axis(1)) {
            let mean = col.mean().unwrap();
            let std = col.std(0.);
            assert!(mean.abs() < 1e-5, "mean {mean}");
            assert!((std - 1.).abs() < 1e-5, "std {std}");
        }
    }

    #[test]
    fn transform_reuses_training_statistics() {
        let train = Array2::from_shape_vec((2, 1), vec![0., 20.]).unwrap();
        let scaler = StandardScaler::fit(train.view()).unwrap();

        // train mean 10, std 10: a fresh split is shifted by those statistics
        let other = Array2::from_shape_vec((2, 1), vec![10., 30.]).unwrap();
        let scaled = scaler.transform(other.view()).unwrap();

        assert!((scaled[[0, 0]] - 0.).abs() < 1e-5);
        assert!((scaled[[1, 0]] - 2.).abs() < 1e-5);
    }

    #[test]
    fn constant_columns_map_to_zero() {
        let x = Array2::from_shape_vec((3, 2), vec![5., 1., 5., 2., 5., 3.]).unwrap();
        let (_, scaled) = StandardScaler::fit_transform(x.view()).unwrap();

        assert!(scaled.column(0).iter().all(|&v| v == 0.));
        assert!(scaled.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn column_mismatch_is_rejected() {
        let scaler = StandardScaler::fit(Array2::<f32>::ones((2, 3)).view()).unwrap();
        let err = scaler.transform(Array2::<f32>::ones((2, 2)).view()).unwrap_err();

        assert!(matches!(err, ElmError::ShapeMismatch { what: "features", .. }));
    }

    #[test]
    fn one_hot_sets_exactly_one_per_row() {
        let y = one_hot(&[2, 0, 1], nz(3)).unwrap();

        assert_eq!(y.dim(), (3, 3));
        for (row, &label) in y.axis_iter(Axis(0)).zip(&[2usize, 0, 1]) {
            assert_eq!(row.sum(), 1.);
            assert_eq!(row[label], 1.);
        }
    }

    #[test]
    fn one_hot_rejects_out_of_range_labels() {
        let err = one_hot(&[0, 3], nz(3)).unwrap_err();
        assert!(matches!(err, ElmError::InvalidInput(_)));
    }
}
