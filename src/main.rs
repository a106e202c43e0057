// For the train/test permutation
use rand::{rngs::SmallRng, SeedableRng};

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use ndarray::ArrayView2;

use digit_subsets::{load_digits_from, split_samples, DEFAULT_DIGITS_PATH};

/// Load a digits csv, keep a subset of labels, and split it into training and testing sets
#[derive(Parser)]
struct Args {
    /// Csv file with a header row, pixel columns and a trailing label column
    #[arg(long, default_value = DEFAULT_DIGITS_PATH)]
    path: PathBuf,

    /// Labels to keep, in the order they should be renumbered (e.g. 3,7)
    #[arg(long, value_delimiter = ',')]
    subset: Option<Vec<i64>>,

    /// Keep raw pixel values instead of scaling them into [0, 1]
    #[arg(long)]
    raw: bool,

    /// Seed for the split; a fresh one is drawn if omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    // Load the dataset
    let now = Instant::now();
    let (digits, labels) = load_digits_from(&args.path, args.subset.as_deref(), !args.raw)
        .with_context(|| format!("Failed to load {}", args.path.display()))?;
    println!(
        "Loaded {} examples with {} features from {} [{}ms]",
        digits.nrows(),
        digits.ncols(),
        args.path.display(),
        now.elapsed().as_millis()
    );

    // Split it
    let (train_x, train_y, test_x, test_y) =
        split_samples(digits.view(), labels.view(), &mut rng).context("Failed to split")?;
    println!(
        "Training: {} examples {:?}",
        train_x.nrows(),
        label_counts(train_y.view())
    );
    println!(
        "Testing: {} examples {:?}",
        test_x.nrows(),
        label_counts(test_y.view())
    );

    Ok(())
}

// Number of examples per label
fn label_counts(labels: ArrayView2<i64>) -> BTreeMap<i64, usize> {
    let mut counts = BTreeMap::new();
    for &label in labels.iter() {
        *counts.entry(label).or_insert(0) += 1;
    }
    counts
}
