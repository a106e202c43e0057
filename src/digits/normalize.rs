use ndarray::Array2;

use crate::DigitsError;

// Global min-max normalization: one minimum and one maximum over the whole
// matrix, not per column. Every entry ends up in [0, 1].
pub fn normalize(features: &mut Array2<f64>) -> Result<(), DigitsError> {
    if features.is_empty() {
        return Ok(());
    }

    let (min, max) = features
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &x| {
            (min.min(x), max.max(x))
        });

    // The matrix is left untouched on failure
    let shifted_max = max - min;
    if shifted_max <= 0.0 {
        return Err(DigitsError::DegenerateNormalization { value: min });
    }
    if !shifted_max.is_finite() {
        return Err(DigitsError::NormalizationOverflow { min, max });
    }
    log::debug!("Normalizing features from [{}, {}]", min, max);

    features.mapv_inplace(|x| x - min);
    features.mapv_inplace(|x| x / shifted_max);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_normalize_is_global() {
        let mut x = array![[0.0, 8.0], [4.0, 16.0]];
        normalize(&mut x).unwrap();
        // Per-column scaling would have mapped 8.0 to 0.0
        assert_eq!(x, array![[0.0, 0.5], [0.25, 1.0]]);
    }

    #[test]
    fn test_normalize_shifts_negative_minimum() {
        let mut x = array![[-2.0, 0.0], [2.0, 6.0]];
        normalize(&mut x).unwrap();
        assert_eq!(x, array![[0.0, 0.25], [0.5, 1.0]]);
    }

    #[test]
    fn test_normalize_bounds() {
        let mut x = array![[3.0, 15.0, 9.0], [7.0, 12.0, 5.0]];
        normalize(&mut x).unwrap();
        let min = x.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = x.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(min, 0.0);
        assert_eq!(max, 1.0);
    }

    #[test]
    fn test_normalize_constant_matrix_fails() {
        let mut x = array![[5.0, 5.0], [5.0, 5.0]];
        match normalize(&mut x) {
            Err(DigitsError::DegenerateNormalization { value }) => assert_eq!(value, 5.0),
            other => panic!("expected DegenerateNormalization, got {:?}", other),
        }
        assert_eq!(x, array![[5.0, 5.0], [5.0, 5.0]]);
    }

    #[test]
    fn test_normalize_overflowing_range_fails() {
        // max - min is inf even though every entry is finite
        let mut x = array![[-1e308, 0.0], [1e308, 5.0]];
        match normalize(&mut x) {
            Err(DigitsError::NormalizationOverflow { min, max }) => {
                assert_eq!((min, max), (-1e308, 1e308));
            }
            other => panic!("expected NormalizationOverflow, got {:?}", other),
        }
        assert!(x.iter().all(|v| v.is_finite()));
        assert_eq!(x, array![[-1e308, 0.0], [1e308, 5.0]]);
    }
}
