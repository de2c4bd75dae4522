use log::info;
use ndarray::{Array2, ArrayView2};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    config::ElmConfig,
    error::{ElmError, Result},
    projection::RandomProjection,
    solver,
};

/// A single hidden layer extreme learning machine.
///
/// The hidden layer is a fixed random projection; the output layer is the
/// minimum-norm least-squares fit of the hidden activations against the
/// training targets.
///
/// The model has exactly two states: unfitted (no output weights, only
/// prediction is disallowed) and fitted. The transition happens on the first
/// successful [`Elm::fit`] or [`Elm::fit_activations`] call; re-fitting
/// overwrites the output weights and stays fitted. A failed call never
/// mutates existing parameters.
pub struct Elm {
    projection: RandomProjection,
    /// Output weights, shape `(n_hidden, n_classes)`. The only learned
    /// parameter; absent until the first successful solve.
    w_out: Option<Array2<f32>>,
    svd_tolerance: Option<f32>,
}

impl Elm {
    /// Builds an unfitted model, sampling the projection from the config's
    /// seed (or the OS source when no seed is given).
    pub fn new(config: ElmConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self::from_rng(config, &mut rng)
    }

    /// Builds an unfitted model drawing the projection from an explicit
    /// random source. The config's `seed` field is ignored.
    pub fn from_rng<R: Rng + ?Sized>(config: ElmConfig, rng: &mut R) -> Self {
        let projection =
            RandomProjection::new(config.n_features, config.n_hidden, config.act_fn, rng);

        Self {
            projection,
            w_out: None,
            svd_tolerance: config.svd_tolerance,
        }
    }

    pub fn projection(&self) -> &RandomProjection {
        &self.projection
    }

    pub fn is_fitted(&self) -> bool {
        self.w_out.is_some()
    }

    /// Computes the hidden activations for `x`.
    ///
    /// # Errors
    /// Returns `ElmError::ShapeMismatch` if `x` does not have `n_features`
    /// columns.
    pub fn project(&self, x: ArrayView2<f32>) -> Result<Array2<f32>> {
        self.projection.project(x)
    }

    /// Projects `x` and solves the output layer against the one-hot targets
    /// `y`, replacing any previously solved weights.
    ///
    /// # Errors
    /// Propagates `ElmError::ShapeMismatch` and `ElmError::NumericalFailure`
    /// from the projection and the solve; the model is left untouched on
    /// failure.
    pub fn fit(&mut self, x: ArrayView2<f32>, y: ArrayView2<f32>) -> Result<()> {
        let h = self.projection.project(x)?;
        self.fit_activations(h.view(), y)
    }

    /// Solves the output layer from precomputed hidden activations.
    ///
    /// For callers that already hold `project(x)`; [`Elm::fit`] is the
    /// common path.
    pub fn fit_activations(&mut self, h: ArrayView2<f32>, y: ArrayView2<f32>) -> Result<()> {
        if h.ncols() != self.projection.n_hidden() {
            return Err(ElmError::ShapeMismatch {
                what: "hidden units",
                got: h.ncols(),
                expected: self.projection.n_hidden(),
            });
        }

        let w_out = solver::solve_output_weights(h, y, self.svd_tolerance)?;
        info!(
            "output layer solved: {} samples, {} hidden units, {} classes",
            h.nrows(),
            w_out.nrows(),
            w_out.ncols()
        );
        self.w_out = Some(w_out);

        Ok(())
    }

    /// Produces per-class scores for `x`, shape `(n, n_classes)`.
    ///
    /// Class assignment (argmax per row) is the caller's job.
    ///
    /// # Errors
    /// - `ElmError::NotFitted` before the first successful fit.
    /// - `ElmError::ShapeMismatch` if `x` does not have `n_features` columns.
    pub fn predict(&self, x: ArrayView2<f32>) -> Result<Array2<f32>> {
        let w_out = self.w_out.as_ref().ok_or(ElmError::NotFitted)?;
        let h = self.projection.project(x)?;

        Ok(h.dot(w_out))
    }
}
