use std::num::NonZeroUsize;

use anyhow::Result;
use log::info;
use ndarray::s;
use rand::{rngs::StdRng, SeedableRng};

use elm_core::{accuracy, make_blobs, one_hot, Elm, ElmConfig, StandardScaler};

const N_TRAIN: usize = 2000;
const N_TEST: usize = 500;

fn main() -> Result<()> {
    env_logger::init();

    let n_features = NonZeroUsize::new(64).unwrap();
    let n_hidden = NonZeroUsize::new(256).unwrap();
    let n_classes = NonZeroUsize::new(10).unwrap();

    let mut rng = StdRng::seed_from_u64(42);
    let (x, labels) = make_blobs(N_TRAIN + N_TEST, n_features, n_classes, 2.0, &mut rng);

    let x_train = x.slice(s![..N_TRAIN, ..]);
    let x_test = x.slice(s![N_TRAIN.., ..]);

    // scale the test split with the statistics fitted on the training split
    let (scaler, x_train) = StandardScaler::fit_transform(x_train)?;
    let x_test = scaler.transform(x_test)?;

    let y_train = one_hot(&labels[..N_TRAIN], n_classes)?;
    let y_test = one_hot(&labels[N_TRAIN..], n_classes)?;

    let mut config = ElmConfig::new(n_features, n_hidden);
    config.seed = Some(7);
    let mut model = Elm::new(config);

    info!("fitting on {N_TRAIN} samples");
    model.fit(x_train.view(), y_train.view())?;

    let scores = model.predict(x_test.view())?;
    let acc = accuracy(scores.view(), y_test.view())?;
    println!("test accuracy: {acc:.3}");

    Ok(())
}
