use std::num::NonZeroUsize;

use ndarray::{Array1, Array2, ArrayView2};
use ndarray_rand::RandomExt;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::{
    activations::ActFn,
    error::{ElmError, Result},
};

/// The fixed random hidden layer of the model.
///
/// Owns the input-to-hidden weight matrix and the bias vector for the
/// lifetime of the model. Both are sampled once at construction and never
/// updated afterward; the only learning happens downstream, in the output
/// solve.
pub struct RandomProjection {
    /// Input weights, shape `(n_features, n_hidden)`.
    w_in: Array2<f32>,
    /// Hidden biases, shape `(n_hidden,)`.
    bias: Array1<f32>,
    act_fn: ActFn,
}

impl RandomProjection {
    /// Samples `w_in` and `bias` independently from the standard normal
    /// distribution. Entropy is drawn from `rng` exactly once, here.
    pub fn new<R: Rng + ?Sized>(
        n_features: NonZeroUsize,
        n_hidden: NonZeroUsize,
        act_fn: ActFn,
        rng: &mut R,
    ) -> Self {
        let w_in = Array2::random_using((n_features.get(), n_hidden.get()), StandardNormal, rng);
        let bias = Array1::random_using(n_hidden.get(), StandardNormal, rng);

        Self { w_in, bias, act_fn }
    }

    pub fn n_features(&self) -> usize {
        self.w_in.nrows()
    }

    pub fn n_hidden(&self) -> usize {
        self.w_in.ncols()
    }

    pub fn act_fn(&self) -> ActFn {
        self.act_fn
    }

    /// Maps `x` into the hidden feature space: `act(x · w_in + bias)`.
    ///
    /// The activation matrix is recomputed on every call, never cached.
    ///
    /// # Errors
    /// Returns `ElmError::ShapeMismatch` if `x` does not have `n_features`
    /// columns.
    pub fn project(&self, x: ArrayView2<f32>) -> Result<Array2<f32>> {
        if x.ncols() != self.n_features() {
            return Err(ElmError::ShapeMismatch {
                what: "features",
                got: x.ncols(),
                expected: self.n_features(),
            });
        }

        let mut hidden = x.dot(&self.w_in);
        hidden += &self.bias;

        let act_fn = self.act_fn;
        hidden.par_mapv_inplace(|z| act_fn.f(z));

        Ok(hidden)
    }
}
