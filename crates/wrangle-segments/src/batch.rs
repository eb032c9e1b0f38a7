//! Segmentation of many independent channels
//!
//! Recordings usually carry one signal per channel. Each channel is
//! segmented on its own; with the `parallel` feature the channels are spread
//! over the rayon thread pool. Results are always returned in channel order.

use crate::monotonic::MonotonicSegmenter;
use crate::traits::SegmentationEngine;
use crate::types::SegmentationResult;
use tracing::{debug, instrument};
use wrangle_core::{Result, Sample};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Segment every channel with [`MonotonicSegmenter`]
pub fn segment_batch<T, C>(channels: &[C]) -> Vec<Result<SegmentationResult>>
where
    T: Sample,
    C: AsRef<[T]> + Sync,
{
    segment_batch_with(&MonotonicSegmenter::new(), channels)
}

/// Segment every channel with the given engine
///
/// A channel that fails (for example because it is too short) does not stop
/// the others; its slot holds the error.
#[instrument(level = "debug", skip_all, fields(channels = channels.len(), engine = engine.algorithm_name()))]
pub fn segment_batch_with<T, C, E>(engine: &E, channels: &[C]) -> Vec<Result<SegmentationResult>>
where
    T: Sample,
    C: AsRef<[T]> + Sync,
    E: SegmentationEngine<T>,
{
    #[cfg(feature = "parallel")]
    let results: Vec<_> = channels
        .par_iter()
        .map(|channel| engine.segment(channel.as_ref()))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let results: Vec<_> = channels
        .iter()
        .map(|channel| engine.segment(channel.as_ref()))
        .collect();

    debug!(
        failed = results.iter().filter(|r| r.is_err()).count(),
        "batch segmentation complete"
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use wrangle_core::Error;

    #[test]
    fn test_batch_preserves_order() {
        let channels: Vec<Vec<f64>> = vec![
            vec![0.0, 1.0, 2.0],
            vec![2.0, 1.0, 0.0],
            vec![0.0, 1.0, 0.0, 1.0],
        ];
        let results = segment_batch(&channels);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().count(), 1);
        assert_eq!(results[1].as_ref().unwrap().negative_starts(), &[0]);
        assert_eq!(results[2].as_ref().unwrap().count(), 3);
    }

    #[test]
    fn test_batch_isolates_failures() {
        let channels: Vec<&[i16]> = vec![&[1, 2, 3][..], &[5][..], &[3, 2][..]];
        let results = segment_batch(&channels);

        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(Error::InvalidInput(_))));
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_batch_matches_single_calls() {
        let channels: Vec<Vec<f64>> = (0..16)
            .map(|c| (0..64).map(|i| ((i * (c + 1)) as f64 * 0.3).sin()).collect())
            .collect();
        let batch = segment_batch(&channels);

        for (channel, result) in channels.iter().zip(&batch) {
            let single = crate::segment(channel).unwrap();
            assert_eq!(result.as_ref().unwrap(), &single);
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_batch_keeps_channel_order() {
        // Lengths differ per channel so a reordered slot is detectable
        let channels: Vec<Vec<i32>> = (0..512)
            .map(|c| (0..(c % 37 + 1)).map(|i| (i * 7 + c) % 5).collect())
            .collect();
        let batch = segment_batch(&channels);

        assert_eq!(batch.len(), channels.len());
        for (channel, result) in channels.iter().zip(&batch) {
            match result {
                Ok(result) => {
                    assert_eq!(result.sample_count(), channel.len());
                    assert_eq!(result, &crate::segment(channel).unwrap());
                }
                Err(err) => {
                    assert_eq!(channel.len(), 1);
                    assert!(matches!(err, Error::InvalidInput(_)));
                }
            }
        }
    }

    #[test]
    fn test_empty_batch() {
        let channels: Vec<Vec<f64>> = Vec::new();
        assert!(segment_batch(&channels).is_empty());
    }
}
