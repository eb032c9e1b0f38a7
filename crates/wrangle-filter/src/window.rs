//! Filter window widths

use tracing::warn;
use wrangle_core::{Error, Result};

/// Normalise a full window width to an odd number of samples
///
/// Zero is rejected. An even width is widened by one sample so the window
/// stays centred on its sample.
pub fn odd_width(window_width: usize) -> Result<usize> {
    if window_width == 0 {
        return Err(Error::invalid_window(window_width));
    }
    if window_width % 2 == 0 {
        let widened = window_width + 1;
        warn!(
            requested = window_width,
            used = widened,
            "window width must be odd, widening"
        );
        return Ok(widened);
    }
    Ok(window_width)
}

/// Inclusive bounds of the window around `index`, clamped to `len` samples
#[inline]
pub(crate) fn clamped_bounds(index: usize, half_window: usize, len: usize) -> (usize, usize) {
    let lo = index.saturating_sub(half_window);
    let hi = index.saturating_add(half_window).min(len - 1);
    (lo, hi)
}
