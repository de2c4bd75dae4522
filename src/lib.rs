//! Extreme learning machine: a single hidden layer with fixed random
//! weights and an output layer solved in closed form by a least-squares
//! pseudo-inverse fit. No gradients, no iterations.

mod activations;
mod config;
mod dataset;
mod error;
mod metrics;
mod model;
mod preprocess;
mod projection;
mod solver;

pub use activations::ActFn;
pub use config::ElmConfig;
pub use dataset::make_blobs;
pub use error::{ElmError, Result};
pub use metrics::{accuracy, argmax};
pub use model::Elm;
pub use preprocess::{one_hot, StandardScaler};
pub use projection::RandomProjection;
pub use solver::solve_output_weights;
