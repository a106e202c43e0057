pub mod digits;
pub mod error;
pub mod split_samples;

pub use digits::{load_digits, load_digits_from, DEFAULT_DIGITS_PATH};
pub use error::DigitsError;
pub use split_samples::{split_samples, split_samples_with_fraction, Split, TRAIN_FRACTION};
