//! Sample statistics over numeric sequences.

use crate::error::PixelOpsError;

/// Arithmetic mean of a sequence.
///
/// Fails with [`PixelOpsError::EmptyInput`] on an empty slice. A plain
/// f64 accumulation is sufficient at the scales involved here.
pub fn mean(nums: &[f64]) -> Result<f64, PixelOpsError> {
    if nums.is_empty() {
        return Err(PixelOpsError::EmptyInput);
    }
    let sum: f64 = nums.iter().sum();
    Ok(sum / nums.len() as f64)
}

/// Population standard deviation of a sequence.
///
/// `sqrt(mean((x_i - mean)^2))`, computed over the entire given sample
/// rather than as an unbiased estimate. Fails with
/// [`PixelOpsError::EmptyInput`] on an empty slice.
pub fn standard_deviation(nums: &[f64]) -> Result<f64, PixelOpsError> {
    let center = mean(nums)?;
    let variance: f64 = nums.iter().map(|x| (x - center).powi(2)).sum::<f64>() / nums.len() as f64;
    Ok(variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_mean_reference_sample() {
        let sample = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((mean(&sample).unwrap() - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_standard_deviation_reference_sample() {
        let sample = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((standard_deviation(&sample).unwrap() - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_mean_empty_input() {
        assert!(matches!(mean(&[]), Err(PixelOpsError::EmptyInput)));
    }

    #[test]
    fn test_standard_deviation_empty_input() {
        assert!(matches!(
            standard_deviation(&[]),
            Err(PixelOpsError::EmptyInput)
        ));
    }

    #[test]
    fn test_single_element_has_zero_deviation() {
        assert!((standard_deviation(&[42.0]).unwrap()).abs() < EPSILON);
        assert!((mean(&[42.0]).unwrap() - 42.0).abs() < EPSILON);
    }

    #[test]
    fn test_constant_sequence_has_zero_deviation() {
        let sample = [3.5; 16];
        assert!((standard_deviation(&sample).unwrap()).abs() < EPSILON);
    }
}
