//! Running-median smoothing
//!
//! Each output sample is the median of the `window_width` samples centred on
//! it. Positions outside the signal count as zeros, so the edges are pulled
//! towards zero.

use crate::window::odd_width;
use tracing::{instrument, trace};
use wrangle_core::{sort_in_place, Result, Sample};

/// Running median over a full window of `window_width` samples
///
/// An even width is widened by one and zero is rejected. An empty signal
/// yields an empty output.
///
/// # Examples
///
/// ```rust
/// use wrangle_filter::median_filter;
///
/// let cleaned = median_filter(&[1.0, 1.0, 9.0, 1.0, 1.0], 3).unwrap();
/// assert_eq!(cleaned, vec![1.0, 1.0, 1.0, 1.0, 1.0]);
/// ```
#[instrument(level = "debug", skip(samples), fields(samples = samples.len()))]
pub fn median_filter<T: Sample>(samples: &[T], window_width: usize) -> Result<Vec<f64>> {
    let width = odd_width(window_width)?;
    let n = samples.len();
    if n == 0 {
        return Ok(Vec::new());
    }

    // With more than n zeros per side every median is already zero
    let half = (width / 2).min(n);
    let width = 2 * half + 1;
    let mut padded = vec![0.0; n + 2 * half];
    for (slot, &x) in padded[half..half + n].iter_mut().zip(samples) {
        *slot = x.to_f64();
    }
    trace!(width, padded = padded.len(), "zero-padded signal");

    let mut window = Vec::with_capacity(width);
    Ok(padded
        .windows(width)
        .map(|w| {
            window.clear();
            window.extend_from_slice(w);
            sort_in_place(&mut window);
            window[half]
        })
        .collect())
}
