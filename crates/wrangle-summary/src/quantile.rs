//! Median and linearly interpolated quantiles
//!
//! Quantiles are read from a sorted copy of the data at the virtual index
//! `q * (n - 1)`, interpolating linearly between the two neighbouring order
//! statistics.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use wrangle_core::{sorted, Error, NanPolicy, Result, Sample};

use crate::uncertainty::{median_uncertainty, UncertaintyParameters};

/// Parameters for [`QuantileSummary::estimate`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantileParameters {
    /// Lower quantile, in [0, 1]
    pub lower: f64,
    /// Upper quantile, in [0, 1]
    pub upper: f64,
    /// NaN handling applied before sorting
    pub nan_policy: NanPolicy,
}

impl Default for QuantileParameters {
    fn default() -> Self {
        Self {
            lower: 0.25,
            upper: 0.75,
            nan_policy: NanPolicy::Propagate,
        }
    }
}

impl QuantileParameters {
    pub fn with_quantiles(mut self, lower: f64, upper: f64) -> Self {
        self.lower = lower;
        self.upper = upper;
        self
    }

    pub fn with_nan_policy(mut self, nan_policy: NanPolicy) -> Self {
        self.nan_policy = nan_policy;
        self
    }
}

/// Median plus a lower and an upper quantile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantileSummary {
    pub median: f64,
    pub lower: f64,
    pub upper: f64,
}

impl QuantileSummary {
    /// Summarise the samples according to the parameters
    pub fn estimate<T: Sample>(samples: &[T], params: &QuantileParameters) -> Result<Self> {
        let values = params.nan_policy.apply(samples);
        median_and_quantiles(&values, params.lower, params.upper)
    }

    /// Summarise the samples and estimate the uncertainty of the median
    ///
    /// `uncertainties[i]` is the standard deviation of `samples[i]`. When the
    /// NaN policy removes a sample, its uncertainty is dropped with it.
    pub fn estimate_with_uncertainty<T: Sample>(
        samples: &[T],
        uncertainties: &[f64],
        params: &QuantileParameters,
        uncertainty_params: &UncertaintyParameters,
    ) -> Result<(Self, f64)> {
        if samples.len() != uncertainties.len() {
            return Err(Error::size_mismatch(
                samples.len(),
                uncertainties.len(),
                "median uncertainty",
            ));
        }

        let (values, sigmas): (Vec<f64>, Vec<f64>) = match params.nan_policy {
            NanPolicy::Remove => samples
                .iter()
                .zip(uncertainties)
                .map(|(&x, &u)| (x.to_f64(), u))
                .filter(|(x, _)| !x.is_nan())
                .unzip(),
            policy => (policy.apply(samples), uncertainties.to_vec()),
        };

        let summary = median_and_quantiles(&values, params.lower, params.upper)?;
        let spread = median_uncertainty(&values, &sigmas, uncertainty_params)?;
        Ok((summary, spread))
    }
}

/// Validate a quantile probability
pub fn check_quantile(q: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&q) {
        return Err(Error::invalid_quantile(q));
    }
    Ok(())
}

/// Median of ascending-sorted data
///
/// The middle element for odd lengths, the mean of the two middle elements
/// for even lengths.
pub fn median_sorted(sorted: &[f64]) -> Result<f64> {
    let n = sorted.len();
    if n == 0 {
        return Err(Error::empty_input("median"));
    }
    if n % 2 == 1 {
        Ok(sorted[n / 2])
    } else {
        Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}

/// Linearly interpolated quantile of ascending-sorted data
///
/// # Examples
///
/// ```rust
/// use wrangle_summary::quantile_sorted;
///
/// let data = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(quantile_sorted(&data, 0.0).unwrap(), 1.0);
/// assert_eq!(quantile_sorted(&data, 0.25).unwrap(), 1.75);
/// assert_eq!(quantile_sorted(&data, 1.0).unwrap(), 4.0);
/// ```
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Result<f64> {
    check_quantile(q)?;
    let n = sorted.len();
    if n == 0 {
        return Err(Error::empty_input("quantile"));
    }

    let virtual_index = q * (n - 1) as f64;
    let floor = virtual_index.floor() as usize;
    if floor >= n - 1 {
        return Ok(sorted[n - 1]);
    }

    let fraction = virtual_index - floor as f64;
    Ok(sorted[floor] + fraction * (sorted[floor + 1] - sorted[floor]))
}

/// Median and two quantiles of unsorted samples
///
/// The input is left untouched; a sorted copy is made per call. NaN values
/// sort last.
#[instrument(level = "debug", skip(samples), fields(samples = samples.len()))]
pub fn median_and_quantiles<T: Sample>(
    samples: &[T],
    lower_q: f64,
    upper_q: f64,
) -> Result<QuantileSummary> {
    check_quantile(lower_q)?;
    check_quantile(upper_q)?;
    if samples.is_empty() {
        return Err(Error::empty_input("median and quantiles"));
    }

    let sorted = sorted(samples);
    let summary = QuantileSummary {
        median: median_sorted(&sorted)?,
        lower: quantile_sorted(&sorted, lower_q)?,
        upper: quantile_sorted(&sorted, upper_q)?,
    };
    debug!(median = summary.median, lower = summary.lower, upper = summary.upper);
    Ok(summary)
}
