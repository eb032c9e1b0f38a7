//! Running-average smoothing
//!
//! Interior samples are replaced by the mean of the `2 * half_window + 1`
//! samples centred on them. Near the edges the window shrinks to the samples
//! that exist, and the mean is taken over that smaller count.

use crate::window::{clamped_bounds, odd_width};
use tracing::instrument;
use wrangle_core::{Error, Result, Sample};

/// Running average with `half_window` neighbours on each side
///
/// # Examples
///
/// ```rust
/// use wrangle_filter::moving_average;
///
/// let smoothed = moving_average(&[1, 2, 3, 4, 5], 1).unwrap();
/// assert_eq!(smoothed, vec![1.5, 2.0, 3.0, 4.0, 4.5]);
/// ```
#[instrument(level = "debug", skip(samples), fields(samples = samples.len()))]
pub fn moving_average<T: Sample>(samples: &[T], half_window: usize) -> Result<Vec<f64>> {
    if half_window == 0 {
        return Err(Error::invalid_window(half_window));
    }

    let n = samples.len();
    Ok((0..n)
        .map(|i| {
            let (lo, hi) = clamped_bounds(i, half_window, n);
            let sum: f64 = samples[lo..=hi].iter().map(|&x| x.to_f64()).sum();
            sum / (hi - lo + 1) as f64
        })
        .collect())
}

/// Running average over a full window of `window_width` samples
///
/// The width counts the centre sample, so it should be odd; an even width is
/// widened by one. A width of one leaves the signal unchanged.
pub fn average_filter<T: Sample>(samples: &[T], window_width: usize) -> Result<Vec<f64>> {
    let width = odd_width(window_width)?;
    if width == 1 {
        return Ok(samples.iter().map(|&x| x.to_f64()).collect());
    }
    moving_average(samples, width / 2)
}
