//! Core trait for segmentation engines

use crate::types::SegmentationResult;
use wrangle_core::{Result, Sample};

/// A pure transform from a sample sequence to a segment table
///
/// Engines hold no state between calls, so one engine can serve any number
/// of independent sequences, including concurrently.
pub trait SegmentationEngine<T: Sample>: Send + Sync {
    /// Segment the given samples
    fn segment(&self, samples: &[T]) -> Result<SegmentationResult>;

    /// Get the name of the segmentation algorithm
    fn algorithm_name(&self) -> &'static str;

    /// Get the minimum sample size required for segmentation
    fn minimum_sample_size(&self) -> usize {
        2
    }
}
