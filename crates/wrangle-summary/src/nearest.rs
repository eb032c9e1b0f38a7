//! Nearest-value search

use serde::{Deserialize, Serialize};
use wrangle_core::{Error, Result, Sample};

/// Position of the value closest to a target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Nearest {
    pub index: usize,
    /// `samples[index] - target`; negative when the nearest value is smaller
    pub difference: f64,
}

/// Find the sample closest to `target`
///
/// Among equally close samples the later index wins. When `monotonic` is set
/// the caller asserts the samples are non-decreasing, and the scan stops as
/// soon as the distance starts growing; the assertion is not checked.
///
/// # Examples
///
/// ```rust
/// use wrangle_summary::nearest;
///
/// // 3 and 5 are both one away from 4; the later one wins
/// let found = nearest(&[1.0, 3.0, 5.0], 4.0, true).unwrap();
/// assert_eq!(found.index, 2);
/// assert_eq!(found.difference, 1.0);
/// ```
pub fn nearest<T: Sample>(samples: &[T], target: f64, monotonic: bool) -> Result<Nearest> {
    let first = samples
        .first()
        .ok_or_else(|| Error::empty_input("nearest value search"))?;
    if target.is_nan() {
        return Err(Error::InvalidParameter(
            "Target value must not be NaN".to_string(),
        ));
    }

    let mut index = 0;
    let mut smallest = (first.to_f64() - target).abs();
    for (i, &x) in samples.iter().enumerate().skip(1) {
        let distance = (x.to_f64() - target).abs();
        if distance <= smallest {
            smallest = distance;
            index = i;
        } else if monotonic {
            break;
        }
    }

    Ok(Nearest {
        index,
        difference: samples[index].to_f64() - target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tie_prefers_later_index() {
        for monotonic in [true, false] {
            let found = nearest(&[1.0, 3.0, 5.0], 4.0, monotonic).unwrap();
            assert_eq!(found, Nearest { index: 2, difference: 1.0 });

            let found = nearest(&[1.0, 3.0, 5.0, 7.0], 4.0, monotonic).unwrap();
            assert_eq!(found.index, 2);
        }
    }

    #[test]
    fn test_negative_difference() {
        let found = nearest(&[10, 20, 30], 22.0, true).unwrap();
        assert_eq!(found.index, 1);
        assert_eq!(found.difference, -2.0);
    }

    #[test]
    fn test_duplicates_pick_last() {
        let found = nearest(&[1.0, 2.0, 2.0, 2.0, 9.0], 2.1, true).unwrap();
        assert_eq!(found.index, 3);
    }

    #[test]
    fn test_target_outside_range() {
        assert_eq!(nearest(&[1.0, 2.0, 3.0], -5.0, true).unwrap().index, 0);
        assert_eq!(nearest(&[1.0, 2.0, 3.0], 50.0, true).unwrap().index, 2);
    }

    #[test]
    fn test_monotonic_early_exit_needs_sorted_input() {
        // Unsorted input: the early exit stops at the first local minimum
        let data = [5.0, 1.0, 4.0];
        assert_eq!(nearest(&data, 4.0, true).unwrap().index, 0);
        assert_eq!(nearest(&data, 4.0, false).unwrap().index, 2);
    }

    #[test]
    fn test_single_value() {
        let found = nearest(&[7u8], 3.0, false).unwrap();
        assert_eq!(found, Nearest { index: 0, difference: 4.0 });
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(
            nearest::<f64>(&[], 1.0, true),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            nearest(&[1.0], f64::NAN, true),
            Err(Error::InvalidParameter(_))
        ));
    }
}
