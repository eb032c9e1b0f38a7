//! Utility functions for working with sample slices

use crate::numeric::Sample;
use serde::{Deserialize, Serialize};

/// What to do with NaN values before a statistic is computed
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum NanPolicy {
    /// Keep NaN values; they propagate into the result
    #[default]
    Propagate,
    /// Drop NaN values
    Remove,
    /// Substitute NaN values with the given value
    Replace(f64),
}

impl NanPolicy {
    /// Widen the samples to `f64` and apply the policy
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wrangle_core::NanPolicy;
    ///
    /// let data = [1.0, f64::NAN, 3.0];
    /// assert_eq!(NanPolicy::Remove.apply(&data), vec![1.0, 3.0]);
    /// assert_eq!(NanPolicy::Replace(0.0).apply(&data), vec![1.0, 0.0, 3.0]);
    /// ```
    pub fn apply<T: Sample>(self, samples: &[T]) -> Vec<f64> {
        let widened = samples.iter().map(|&x| x.to_f64());
        match self {
            NanPolicy::Propagate => widened.collect(),
            NanPolicy::Remove => widened.filter(|x| !x.is_nan()).collect(),
            NanPolicy::Replace(value) => widened
                .map(|x| if x.is_nan() { value } else { x })
                .collect(),
        }
    }
}

/// Drop every NaN value from the samples
pub fn nan_free<T: Sample>(samples: &[T]) -> Vec<f64> {
    NanPolicy::Remove.apply(samples)
}

/// Sort samples ascending into a new `f64` vector
///
/// Handles NaN values by placing them at the end.
///
/// # Examples
///
/// ```rust
/// use wrangle_core::utils::sorted;
///
/// let data = vec![3, 1, 5, 2, 4];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted<T: Sample>(samples: &[T]) -> Vec<f64> {
    let mut sorted: Vec<f64> = samples.iter().map(|&x| x.to_f64()).collect();
    sort_in_place(&mut sorted);
    sorted
}

/// Sort a buffer ascending in place, NaN values last
pub fn sort_in_place(values: &mut [f64]) {
    values.sort_by(|a, b| match (a.is_nan(), b.is_nan()) {
        (true, true) => std::cmp::Ordering::Equal,
        (true, false) => std::cmp::Ordering::Greater,
        (false, true) => std::cmp::Ordering::Less,
        (false, false) => a.total_cmp(b),
    });
}
