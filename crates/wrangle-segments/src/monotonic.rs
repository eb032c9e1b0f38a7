//! Piecewise-monotonic segmentation
//!
//! A sequence of N samples has N-1 deltas. The deltas are partitioned into
//! maximal runs sharing one sign; each run becomes a [`Segment`] with its
//! cumulative amplitude, duration and slope. Zero deltas never start a run of
//! their own: they join the run in progress, and a leading flat stretch joins
//! whichever direction the signal takes first.

use crate::traits::SegmentationEngine;
use crate::types::{Segment, SegmentationResult, SteepestSegment};
use tracing::{debug, instrument, trace};
use wrangle_core::{all_finite, Error, Result, Sample};

/// Upper bound on the number of segments for `sample_count` samples
///
/// A signal that changes direction at every sample yields one segment per
/// delta. Callers that copy the table into fixed-capacity storage must size
/// it to this bound.
pub const fn max_segment_count(sample_count: usize) -> usize {
    sample_count.saturating_sub(1)
}

/// Segment a sample sequence with [`MonotonicSegmenter`]
///
/// # Examples
///
/// ```rust
/// use wrangle_segments::segment;
///
/// let result = segment(&[1, 3, 2, 2, 5, 1]).unwrap();
/// assert_eq!(result.count(), 4);
/// assert_eq!(result.negative_starts(), &[1, 4]);
/// assert_eq!(result.steepest_positive().unwrap().start_index, 3);
/// ```
pub fn segment<T: Sample>(samples: &[T]) -> Result<SegmentationResult> {
    MonotonicSegmenter::new().segment(samples)
}

/// Splits a signal into maximal same-signed runs of deltas
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicSegmenter;

impl MonotonicSegmenter {
    pub fn new() -> Self {
        Self
    }
}

impl<T: Sample> SegmentationEngine<T> for MonotonicSegmenter {
    #[instrument(level = "debug", skip_all, fields(samples = samples.len()))]
    fn segment(&self, samples: &[T]) -> Result<SegmentationResult> {
        let minimum = <Self as SegmentationEngine<T>>::minimum_sample_size(self);
        if samples.len() < minimum {
            return Err(Error::too_short("segmentation", minimum, samples.len()));
        }
        if !all_finite(samples) {
            return Err(Error::non_finite("segmentation input"));
        }

        let mut deltas = samples
            .windows(2)
            .map(|pair| pair[0].delta_to(pair[1]))
            .enumerate();

        let Some((_, first)) = deltas.next() else {
            return Err(Error::too_short("segmentation", minimum, samples.len()));
        };

        let (table, last) = deltas.fold(
            (SegmentTable::new(samples.len()), OpenSegment::new(0, first)),
            |(mut table, mut open), (index, delta)| {
                let reference = open.direction().unwrap_or(table.last_direction);
                if reference.admits(delta) {
                    open.absorb(delta);
                } else {
                    table.close(open);
                    open = OpenSegment::new(index, delta);
                }
                (table, open)
            },
        );

        // The run in progress when the deltas run out is never closed by the scan
        let result = table.finish(last);
        debug!(
            segments = result.count(),
            falling = result.negative_starts().len(),
            rising = result.positive_starts().len(),
            "segmentation complete"
        );
        Ok(result)
    }

    fn algorithm_name(&self) -> &'static str {
        "Monotonic"
    }
}

/// Sign class a delta is compared against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Falling,
    /// No direction established yet; admits any delta
    Flat,
    Rising,
}

impl Direction {
    fn of(amplitude: f64) -> Self {
        if amplitude > 0.0 {
            Direction::Rising
        } else if amplitude < 0.0 {
            Direction::Falling
        } else {
            Direction::Flat
        }
    }

    /// Zero deltas are admitted by every direction
    fn admits(self, delta: f64) -> bool {
        match self {
            Direction::Rising => delta >= 0.0,
            Direction::Falling => delta <= 0.0,
            Direction::Flat => true,
        }
    }
}

/// The run currently accumulating deltas
#[derive(Debug, Clone, Copy)]
struct OpenSegment {
    start_index: usize,
    amplitude: f64,
    duration: usize,
}

impl OpenSegment {
    fn new(start_index: usize, delta: f64) -> Self {
        Self {
            start_index,
            amplitude: delta,
            duration: 1,
        }
    }

    fn absorb(&mut self, delta: f64) {
        self.amplitude += delta;
        self.duration += 1;
    }

    /// `None` while the run is still flat
    fn direction(&self) -> Option<Direction> {
        match Direction::of(self.amplitude) {
            Direction::Flat => None,
            direction => Some(direction),
        }
    }
}

/// Accumulates closed segments, the signed start lists and the steepest runs
struct SegmentTable {
    segments: Vec<Segment>,
    negative_starts: Vec<usize>,
    positive_starts: Vec<usize>,
    steepest_negative: Option<SteepestSegment>,
    steepest_positive: Option<SteepestSegment>,
    /// Direction of the most recent closed segment with non-zero amplitude
    last_direction: Direction,
    sample_count: usize,
}

impl SegmentTable {
    fn new(sample_count: usize) -> Self {
        Self {
            segments: Vec::new(),
            negative_starts: Vec::new(),
            positive_starts: Vec::new(),
            steepest_negative: None,
            steepest_positive: None,
            last_direction: Direction::Flat,
            sample_count,
        }
    }

    fn close(&mut self, open: OpenSegment) {
        let segment = Segment::new(open.start_index, open.amplitude, open.duration);
        let steepest = SteepestSegment {
            segment: self.segments.len(),
            start_index: segment.start_index,
            slope: segment.slope,
        };
        trace!(%segment, "closing segment");

        // Strict comparisons: a zero slope never qualifies, ties keep the earlier run
        if segment.is_falling() {
            self.negative_starts.push(segment.start_index);
            if self.steepest_negative.map_or(true, |s| segment.slope < s.slope) {
                self.steepest_negative = Some(steepest);
            }
            self.last_direction = Direction::Falling;
        } else if segment.is_rising() {
            self.positive_starts.push(segment.start_index);
            if self.steepest_positive.map_or(true, |s| segment.slope > s.slope) {
                self.steepest_positive = Some(steepest);
            }
            self.last_direction = Direction::Rising;
        }

        self.segments.push(segment);
    }

    fn finish(mut self, last: OpenSegment) -> SegmentationResult {
        self.close(last);
        SegmentationResult::new(
            self.segments,
            self.negative_starts,
            self.positive_starts,
            self.steepest_negative,
            self.steepest_positive,
            self.sample_count,
        )
    }
}
