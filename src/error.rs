use std::path::PathBuf;

use thiserror::Error;

// Everything that can go wrong while loading or splitting a digits dataset
#[derive(Debug, Error)]
pub enum DigitsError {
    #[error("failed to open {}: {source}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    // `record` is 1-based and counts the header as record 0
    #[error("record {record} has {found} columns, expected {expected}")]
    Schema {
        record: usize,
        expected: usize,
        found: usize,
    },

    #[error("record {record}, column {column}: cannot parse {value:?} as a number")]
    TypeCoercion {
        record: usize,
        column: usize,
        value: String,
    },

    #[error("no rows have a label in {subset:?}")]
    EmptySubsetResult { subset: Vec<i64> },

    #[error("{} contains no data rows", .path.display())]
    EmptyDataset { path: PathBuf },

    #[error("cannot normalize: every feature value is {value}")]
    DegenerateNormalization { value: f64 },

    #[error("cannot normalize: range from {min} to {max} overflows")]
    NormalizationOverflow { min: f64, max: f64 },

    #[error("features have {features} rows but labels have {labels}")]
    LengthMismatch { features: usize, labels: usize },

    #[error("training fraction {0} is outside [0, 1]")]
    InvalidFraction(f64),

    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = DigitsError::TypeCoercion {
            record: 4,
            column: 2,
            value: "x".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "record 4, column 2: cannot parse \"x\" as a number"
        );

        let err = DigitsError::EmptyDataset {
            path: PathBuf::from("digits.csv"),
        };
        assert_eq!(err.to_string(), "digits.csv contains no data rows");
    }
}
