use std::num::NonZeroUsize;

use ndarray::{Array2, Axis};
use ndarray_rand::RandomExt;
use rand::Rng;
use rand_distr::StandardNormal;

/// Samples a labeled Gaussian blob dataset.
///
/// Each class gets a prototype drawn from the standard normal distribution;
/// samples are the prototype of their class plus `noise`-scaled Gaussian
/// jitter. Labels cycle through the classes, so the dataset is balanced up
/// to remainder.
///
/// # Returns
/// The feature matrix of shape `(n_samples, n_features)` and one integer
/// label per row.
pub fn make_blobs<R: Rng + ?Sized>(
    n_samples: usize,
    n_features: NonZeroUsize,
    n_classes: NonZeroUsize,
    noise: f32,
    rng: &mut R,
) -> (Array2<f32>, Vec<usize>) {
    let n_features = n_features.get();
    let n_classes = n_classes.get();

    let prototypes = Array2::<f32>::random_using((n_classes, n_features), StandardNormal, rng);
    let mut x = Array2::<f32>::random_using((n_samples, n_features), StandardNormal, rng) * noise;

    let mut labels = Vec::with_capacity(n_samples);
    for (idx, mut row) in x.axis_iter_mut(Axis(0)).enumerate() {
        let label = idx % n_classes;
        row += &prototypes.row(label);
        labels.push(label);
    }

    (x, labels)
}

#[cfg(test)]
mod test {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn blobs_have_requested_shape_and_label_range() {
        let mut rng = StdRng::seed_from_u64(9);
        let (x, labels) = make_blobs(10, nz(4), nz(3), 0.5, &mut rng);

        assert_eq!(x.dim(), (10, 4));
        assert_eq!(labels.len(), 10);
        assert!(labels.iter().all(|&l| l < 3));
    }

    #[test]
    fn classes_stay_balanced() {
        let mut rng = StdRng::seed_from_u64(10);
        let (_, labels) = make_blobs(9, nz(2), nz(3), 0.5, &mut rng);

        for class in 0..3 {
            assert_eq!(labels.iter().filter(|&&l| l == class).count(), 3);
        }
    }
}
