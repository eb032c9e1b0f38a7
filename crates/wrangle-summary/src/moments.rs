//! Mean, variance and standard deviation

use serde::{Deserialize, Serialize};
use wrangle_core::{Error, NanPolicy, Result, Sample};

/// First and second moments of a sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Moments {
    pub mean: f64,
    /// Population variance (mean squared deviation)
    pub variance: f64,
    pub std_dev: f64,
}

impl Moments {
    /// Apply the NaN policy, then compute the moments
    pub fn estimate<T: Sample>(samples: &[T], nan_policy: NanPolicy) -> Result<Self> {
        mean_var_sd(&nan_policy.apply(samples))
    }
}

/// Two-pass mean, population variance and standard deviation
///
/// # Examples
///
/// ```rust
/// use wrangle_summary::mean_var_sd;
///
/// let m = mean_var_sd(&[2, 4, 4, 4, 5, 5, 7, 9]).unwrap();
/// assert_eq!(m.mean, 5.0);
/// assert_eq!(m.variance, 4.0);
/// assert_eq!(m.std_dev, 2.0);
/// ```
pub fn mean_var_sd<T: Sample>(samples: &[T]) -> Result<Moments> {
    if samples.is_empty() {
        return Err(Error::empty_input("mean and variance"));
    }

    let n = samples.len() as f64;
    let mean = samples.iter().map(|&x| x.to_f64()).sum::<f64>() / n;
    let variance = samples
        .iter()
        .map(|&x| {
            let diff = x.to_f64() - mean;
            diff * diff
        })
        .sum::<f64>()
        / n;

    Ok(Moments {
        mean,
        variance,
        std_dev: variance.sqrt(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constant_sequence() {
        let m = mean_var_sd(&[3.5, 3.5, 3.5]).unwrap();
        assert_eq!(m.mean, 3.5);
        assert_eq!(m.variance, 0.0);
        assert_eq!(m.std_dev, 0.0);
    }

    #[test]
    fn test_population_not_sample_variance() {
        let m = mean_var_sd(&[1.0, 3.0]).unwrap();
        assert_eq!(m.mean, 2.0);
        // Divides by n, not n - 1
        assert_eq!(m.variance, 1.0);
        assert_eq!(m.std_dev, 1.0);
    }

    #[test]
    fn test_single_value() {
        let m = mean_var_sd(&[42i32]).unwrap();
        assert_eq!(m.mean, 42.0);
        assert_eq!(m.variance, 0.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(mean_var_sd::<f64>(&[]), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_integer_samples() {
        let m = mean_var_sd(&[i16::MAX, i16::MAX]).unwrap();
        assert_eq!(m.mean, i16::MAX as f64);
    }

    #[test]
    fn test_large_offset_stability() {
        let m = mean_var_sd(&[1e9 + 1.0, 1e9 + 2.0, 1e9 + 3.0]).unwrap();
        assert_relative_eq!(m.variance, 2.0 / 3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_nan_propagates_unless_removed() {
        let data = [1.0, f64::NAN, 3.0];
        assert!(mean_var_sd(&data).unwrap().mean.is_nan());

        let m = Moments::estimate(&data, NanPolicy::Remove).unwrap();
        assert_eq!(m.mean, 2.0);

        let m = Moments::estimate(&data, NanPolicy::Replace(2.0)).unwrap();
        assert_eq!(m.mean, 2.0);
        assert_relative_eq!(m.variance, 2.0 / 3.0);
    }

    #[test]
    fn test_all_nan_removed_is_empty() {
        assert!(Moments::estimate(&[f64::NAN, f64::NAN], NanPolicy::Remove).is_err());
    }
}
