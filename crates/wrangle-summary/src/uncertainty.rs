//! Uncertainty of the median by Gaussian perturbation
//!
//! Each sample is treated as the mean of a normal distribution whose standard
//! deviation is the sample's measurement uncertainty. Repeatedly redrawing the
//! whole data set and taking its median gives a distribution of medians; the
//! spread of that distribution estimates the uncertainty of the median.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use wrangle_core::{sort_in_place, Error, Result, Sample};

use crate::moments::mean_var_sd;
use crate::quantile::median_sorted;

/// Parameters for [`median_uncertainty`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UncertaintyParameters {
    /// Number of perturbation experiments
    pub experiments: usize,
    /// Seed for reproducible experiments; entropy-seeded when `None`
    pub seed: Option<u64>,
}

impl Default for UncertaintyParameters {
    fn default() -> Self {
        Self {
            experiments: 1000,
            seed: None,
        }
    }
}

impl UncertaintyParameters {
    pub fn with_experiments(mut self, experiments: usize) -> Self {
        self.experiments = experiments;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Draw every sample from `Normal(sample, uncertainty)`
pub fn with_gaussian_noise<T, R>(samples: &[T], uncertainties: &[f64], rng: &mut R) -> Result<Vec<f64>>
where
    T: Sample,
    R: Rng + ?Sized,
{
    if samples.len() != uncertainties.len() {
        return Err(Error::size_mismatch(
            samples.len(),
            uncertainties.len(),
            "gaussian noise",
        ));
    }

    samples
        .iter()
        .zip(uncertainties)
        .map(|(&x, &sigma)| Ok(normal(x.to_f64(), sigma)?.sample(rng)))
        .collect()
}

fn normal(mean: f64, sigma: f64) -> Result<Normal<f64>> {
    if !(sigma.is_finite() && sigma >= 0.0) {
        return Err(Error::InvalidParameter(format!(
            "Uncertainty {sigma} must be finite and non-negative"
        )));
    }
    Normal::new(mean, sigma).map_err(|e| Error::InvalidParameter(e.to_string()))
}

/// Standard deviation of the median over perturbed copies of the samples
///
/// A single sample's median uncertainty is its own uncertainty.
#[instrument(level = "debug", skip(samples, uncertainties), fields(samples = samples.len()))]
pub fn median_uncertainty<T: Sample>(
    samples: &[T],
    uncertainties: &[f64],
    params: &UncertaintyParameters,
) -> Result<f64> {
    if samples.is_empty() {
        return Err(Error::empty_input("median uncertainty"));
    }
    if samples.len() != uncertainties.len() {
        return Err(Error::size_mismatch(
            samples.len(),
            uncertainties.len(),
            "median uncertainty",
        ));
    }
    if params.experiments == 0 {
        return Err(Error::InvalidParameter(
            "Number of experiments must be positive".to_string(),
        ));
    }
    if samples.len() == 1 {
        return Ok(uncertainties[0]);
    }

    let distributions = samples
        .iter()
        .zip(uncertainties)
        .map(|(&x, &sigma)| normal(x.to_f64(), sigma))
        .collect::<Result<Vec<_>>>()?;

    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // One scratch buffer, reused across experiments of this call only
    let mut scratch = vec![0.0; samples.len()];
    let mut medians = Vec::with_capacity(params.experiments);
    for _ in 0..params.experiments {
        for (slot, distribution) in scratch.iter_mut().zip(&distributions) {
            *slot = distribution.sample(&mut rng);
        }
        sort_in_place(&mut scratch);
        medians.push(median_sorted(&scratch)?);
    }

    let spread = mean_var_sd(&medians)?.std_dev;
    debug!(experiments = params.experiments, spread, "median uncertainty estimated");
    Ok(spread)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_uncertainty_has_zero_spread() {
        let params = UncertaintyParameters::default().with_experiments(50).with_seed(3);
        let spread = median_uncertainty(&[1.0, 5.0, 2.0], &[0.0, 0.0, 0.0], &params).unwrap();
        assert_eq!(spread, 0.0);
    }

    #[test]
    fn test_single_sample_returns_its_uncertainty() {
        let spread =
            median_uncertainty(&[10i32], &[0.7], &UncertaintyParameters::default()).unwrap();
        assert_eq!(spread, 0.7);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        let sigmas = [0.5; 5];
        let params = UncertaintyParameters::default().with_experiments(200).with_seed(42);
        let a = median_uncertainty(&data, &sigmas, &params).unwrap();
        let b = median_uncertainty(&data, &sigmas, &params).unwrap();
        assert_eq!(a, b);
        assert!(a > 0.0);
    }

    #[test]
    fn test_spread_scales_with_uncertainty() {
        let data: Vec<f64> = (0..21).map(|i| i as f64).collect();
        let params = UncertaintyParameters::default().with_experiments(2000).with_seed(11);
        let narrow = median_uncertainty(&data, &[0.1; 21], &params).unwrap();
        let wide = median_uncertainty(&data, &[1.0; 21], &params).unwrap();
        assert!(wide > 3.0 * narrow, "narrow {narrow}, wide {wide}");
    }

    #[test]
    fn test_single_noisy_value_spread_matches_sigma() {
        // With one dominant sample position, the median is that perturbed value
        let data = [-1000.0, 0.0, 1000.0];
        let params = UncertaintyParameters::default().with_experiments(4000).with_seed(5);
        let spread = median_uncertainty(&data, &[0.0, 2.0, 0.0], &params).unwrap();
        assert_relative_eq!(spread, 2.0, max_relative = 0.1);
    }

    #[test]
    fn test_invalid_arguments() {
        let params = UncertaintyParameters::default();
        assert!(matches!(
            median_uncertainty::<f64>(&[], &[], &params),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            median_uncertainty(&[1.0, 2.0], &[0.1], &params),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            median_uncertainty(&[1.0, 2.0], &[0.1, -0.1], &params),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            median_uncertainty(&[1.0, 2.0], &[0.1, 0.1], &params.with_experiments(0)),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_gaussian_noise() {
        let mut rng = StdRng::seed_from_u64(9);
        let noisy = with_gaussian_noise(&[1.0, 2.0], &[0.0, 0.0], &mut rng).unwrap();
        assert_eq!(noisy, vec![1.0, 2.0]);

        let noisy = with_gaussian_noise(&[0i16; 1000], &[1.0; 1000], &mut rng).unwrap();
        let m = mean_var_sd(&noisy).unwrap();
        assert!(m.mean.abs() < 0.2);
        assert_relative_eq!(m.std_dev, 1.0, max_relative = 0.15);

        assert!(with_gaussian_noise(&[1.0], &[f64::NAN], &mut rng).is_err());
        assert!(with_gaussian_noise(&[1.0, 2.0], &[1.0], &mut rng).is_err());
    }
}
