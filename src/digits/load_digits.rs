use std::fs::File;
use std::path::Path;

use ndarray::{Array1, Array2, Axis};

use super::{label_lookup, remap_labels};
use crate::DigitsError;

// Where the dataset lives, relative to the working directory
pub const DEFAULT_DIGITS_PATH: &str = "digits.csv";

// Load digits and labels from digits.csv in the working directory.
// See load_digits_from for details.
pub fn load_digits(
    subset: Option<&[i64]>,
    normalize: bool,
) -> Result<(Array2<f64>, Array2<i64>), DigitsError> {
    load_digits_from(DEFAULT_DIGITS_PATH, subset, normalize)
}

// Load digits and labels from a csv file.
// Returns a tuple of (digits, labels), where digits is (n, p) and labels is (n, 1).
// The expected format is:
// - A header row
// - One image per row
// - The first p columns are pixel values, the last column is the integer label
//
// If a subset is given, only rows with a label in the subset are kept, and each
// label is renumbered to its position in the subset. Without a subset every row
// is kept and labels are left as they are in the file.
pub fn load_digits_from(
    path: impl AsRef<Path>,
    subset: Option<&[i64]>,
    normalize: bool,
) -> Result<(Array2<f64>, Array2<i64>), DigitsError> {
    let path = path.as_ref();
    log::debug!("Reading digits from {}", path.display());

    let file = File::open(path).map_err(|source| DigitsError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    // Flexible so that ragged rows reach our own schema check below
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    // At least one feature column plus the label column
    let n_columns = reader.headers()?.len();
    if n_columns < 2 {
        return Err(DigitsError::Schema {
            record: 0,
            expected: 2,
            found: n_columns,
        });
    }
    let n_features = n_columns - 1;

    let lookup = subset.map(label_lookup);

    // Parallel buffers, turned into arrays once we know how many rows survived
    let mut digits: Vec<f64> = Vec::new();
    let mut labels: Vec<i64> = Vec::new();
    let mut skipped = 0_usize;

    for (index, result) in reader.records().enumerate() {
        let record = result?;
        let record_number = index + 1;

        if record.len() != n_columns {
            return Err(DigitsError::Schema {
                record: record_number,
                expected: n_columns,
                found: record.len(),
            });
        }

        let label = parse_label(&record[n_features], record_number, n_features)?;

        // Pixels of rows we drop are never parsed
        if let Some(lookup) = &lookup {
            if !lookup.contains_key(&label) {
                skipped += 1;
                continue;
            }
        }

        for (column, cell) in record.iter().take(n_features).enumerate() {
            digits.push(parse_pixel(cell, record_number, column)?);
        }
        labels.push(label);
    }
    log::debug!("Kept {} rows, skipped {}", labels.len(), skipped);

    if labels.is_empty() {
        return Err(match subset {
            Some(subset) => DigitsError::EmptySubsetResult {
                subset: subset.to_vec(),
            },
            None => DigitsError::EmptyDataset {
                path: path.to_path_buf(),
            },
        });
    }

    let n_examples = labels.len();
    let mut digits = Array2::from_shape_vec((n_examples, n_features), digits)?;

    if normalize {
        super::normalize(&mut digits)?;
    }

    if let Some(lookup) = &lookup {
        remap_labels(&mut labels, lookup);
    }

    log::debug!(
        "Loaded {} examples with {} features from {}",
        n_examples,
        n_features,
        path.display()
    );

    // Callers expect a column of labels, not a flat vector
    Ok((digits, Array1::from(labels).insert_axis(Axis(1))))
}

fn parse_pixel(cell: &str, record: usize, column: usize) -> Result<f64, DigitsError> {
    match cell.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(coercion_error(cell, record, column)),
    }
}

// Labels are integers, but "3.0" is accepted the way a float-to-int cast of an
// integral column would accept it
fn parse_label(cell: &str, record: usize, column: usize) -> Result<i64, DigitsError> {
    if let Ok(label) = cell.parse::<i64>() {
        return Ok(label);
    }
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    match cell.parse::<f64>() {
        Ok(value)
            if value.fract() == 0.0
                && value >= i64::MIN as f64
                && value < i64::MAX as f64 =>
        {
            Ok(value as i64)
        }
        _ => Err(coercion_error(cell, record, column)),
    }
}

fn coercion_error(cell: &str, record: usize, column: usize) -> DigitsError {
    DigitsError::TypeCoercion {
        record,
        column,
        value: cell.to_string(),
    }
}
