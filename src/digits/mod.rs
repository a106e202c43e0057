// Everything that reads the digits dataset from disk

mod load_digits;
pub use load_digits::{load_digits, load_digits_from, DEFAULT_DIGITS_PATH};

mod normalize;
pub use normalize::normalize;

mod remap_labels;
pub use remap_labels::{label_lookup, remap_labels};
