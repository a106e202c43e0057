use ndarray::{Array2, ArrayView2};
use rand::{prelude::SliceRandom, Rng};

use crate::DigitsError;

// Share of the samples that goes into the training set
pub const TRAIN_FRACTION: f64 = 0.7;

// (train features, train labels, test features, test labels)
pub type Split<T, L> = (Array2<T>, Array2<L>, Array2<T>, Array2<L>);

// Split the data into a training set (70%) and a testing set (30%)
pub fn split_samples<T: Clone, L: Clone>(
    features: ArrayView2<T>,
    labels: ArrayView2<L>,
    rng: &mut impl Rng,
) -> Result<Split<T, L>, DigitsError> {
    split_samples_with_fraction(features, labels, TRAIN_FRACTION, rng)
}

// Split the rows of features and labels by one random permutation.
// The first round(fraction * n) permuted rows are for training, the rest for testing.
pub fn split_samples_with_fraction<T: Clone, L: Clone>(
    features: ArrayView2<T>,
    labels: ArrayView2<L>,
    fraction: f64,
    rng: &mut impl Rng,
) -> Result<Split<T, L>, DigitsError> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(DigitsError::InvalidFraction(fraction));
    }

    let n_samples = features.nrows();
    if labels.nrows() != n_samples {
        return Err(DigitsError::LengthMismatch {
            features: n_samples,
            labels: labels.nrows(),
        });
    }

    // f64::round rounds halves away from zero
    let n_training = (n_samples as f64 * fraction).round() as usize;

    // Shuffle the row indices, then cut the permutation in two
    let mut indices: Vec<usize> = (0..n_samples).collect();
    indices.shuffle(rng);
    let (training, testing) = indices.split_at(n_training);

    log::debug!(
        "Split {} samples into {} training and {} testing",
        n_samples,
        training.len(),
        testing.len()
    );

    Ok((
        take_rows(features, training),
        take_rows(labels, training),
        take_rows(features, testing),
        take_rows(labels, testing),
    ))
}

// Gather rows in the given order. Works for an empty index list too.
fn take_rows<A: Clone>(data: ArrayView2<A>, rows: &[usize]) -> Array2<A> {
    Array2::from_shape_fn((rows.len(), data.ncols()), |(row, column)| {
        data[(rows[row], column)].clone()
    })
}
