//! Types produced by signal segmentation

use serde::{Deserialize, Serialize};
use std::fmt;

/// A maximal run of consecutive same-signed deltas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Sample index at which the run begins
    pub start_index: usize,
    /// Signed sum of the deltas in the run
    pub amplitude: f64,
    /// Number of deltas in the run (always at least 1)
    pub duration: usize,
    /// `amplitude / duration`
    pub slope: f64,
}

impl Segment {
    /// Create a segment, deriving its slope
    pub fn new(start_index: usize, amplitude: f64, duration: usize) -> Self {
        debug_assert!(duration > 0, "segment duration must be positive");
        Self {
            start_index,
            amplitude,
            duration,
            slope: amplitude / duration as f64,
        }
    }

    /// Sample index of the last sample covered by the run
    pub fn end_index(&self) -> usize {
        self.start_index + self.duration
    }

    pub fn is_falling(&self) -> bool {
        self.amplitude < 0.0
    }

    pub fn is_rising(&self) -> bool {
        self.amplitude > 0.0
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Segment {{ start: {}, amplitude: {:.3}, duration: {}, slope: {:.3} }}",
            self.start_index, self.amplitude, self.duration, self.slope
        )
    }
}

/// Reference to the segment with the most extreme slope of one sign
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteepestSegment {
    /// Position of the segment in the segment table
    pub segment: usize,
    /// Sample index at which that segment starts
    pub start_index: usize,
    /// Slope of that segment
    pub slope: f64,
}

impl SteepestSegment {
    /// The `(0, 0, 0.0)` value reported when no segment of a sign exists
    pub const SENTINEL: SteepestSegment = SteepestSegment {
        segment: 0,
        start_index: 0,
        slope: 0.0,
    };
}

/// Result of segmenting one sample sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentationResult {
    segments: Vec<Segment>,
    negative_starts: Vec<usize>,
    positive_starts: Vec<usize>,
    steepest_negative: Option<SteepestSegment>,
    steepest_positive: Option<SteepestSegment>,
    sample_count: usize,
}

impl SegmentationResult {
    pub(crate) fn new(
        segments: Vec<Segment>,
        negative_starts: Vec<usize>,
        positive_starts: Vec<usize>,
        steepest_negative: Option<SteepestSegment>,
        steepest_positive: Option<SteepestSegment>,
        sample_count: usize,
    ) -> Self {
        Self {
            segments,
            negative_starts,
            positive_starts,
            steepest_negative,
            steepest_positive,
            sample_count,
        }
    }

    /// The segment table, in scan order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments
    pub fn count(&self) -> usize {
        self.segments.len()
    }

    /// Number of samples that were segmented
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Start indices of segments with strictly negative amplitude
    pub fn negative_starts(&self) -> &[usize] {
        &self.negative_starts
    }

    /// Start indices of segments with strictly positive amplitude
    pub fn positive_starts(&self) -> &[usize] {
        &self.positive_starts
    }

    /// The falling segment with the most negative slope (first one on ties)
    pub fn steepest_negative(&self) -> Option<SteepestSegment> {
        self.steepest_negative
    }

    /// The rising segment with the most positive slope (first one on ties)
    pub fn steepest_positive(&self) -> Option<SteepestSegment> {
        self.steepest_positive
    }

    /// Like [`steepest_negative`](Self::steepest_negative) but reports
    /// [`SteepestSegment::SENTINEL`] when there is no falling segment
    pub fn steepest_negative_or_sentinel(&self) -> SteepestSegment {
        self.steepest_negative.unwrap_or(SteepestSegment::SENTINEL)
    }

    /// Like [`steepest_positive`](Self::steepest_positive) but reports
    /// [`SteepestSegment::SENTINEL`] when there is no rising segment
    pub fn steepest_positive_or_sentinel(&self) -> SteepestSegment {
        self.steepest_positive.unwrap_or(SteepestSegment::SENTINEL)
    }

    pub fn start_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.segments.iter().map(|s| s.start_index)
    }

    pub fn amplitudes(&self) -> impl Iterator<Item = f64> + '_ {
        self.segments.iter().map(|s| s.amplitude)
    }

    pub fn durations(&self) -> impl Iterator<Item = usize> + '_ {
        self.segments.iter().map(|s| s.duration)
    }

    pub fn slopes(&self) -> impl Iterator<Item = f64> + '_ {
        self.segments.iter().map(|s| s.slope)
    }

    /// Falling segments, in scan order
    pub fn falling(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.segments.iter().filter(|s| s.is_falling())
    }

    /// Rising segments, in scan order
    pub fn rising(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.segments.iter().filter(|s| s.is_rising())
    }
}

impl fmt::Display for SegmentationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Segmentation Result:")?;
        writeln!(f, "  Sample size: {}", self.sample_count)?;
        writeln!(f, "  Segments: {}", self.count())?;
        writeln!(
            f,
            "  Falling / rising: {} / {}",
            self.negative_starts.len(),
            self.positive_starts.len()
        )?;

        if let Some(steepest) = self.steepest_negative {
            writeln!(
                f,
                "  Steepest falling: segment {} at sample {} (slope {:.3})",
                steepest.segment, steepest.start_index, steepest.slope
            )?;
        }
        if let Some(steepest) = self.steepest_positive {
            writeln!(
                f,
                "  Steepest rising: segment {} at sample {} (slope {:.3})",
                steepest.segment, steepest.start_index, steepest.slope
            )?;
        }

        for segment in &self.segments {
            writeln!(f, "    {}", segment)?;
        }

        Ok(())
    }
}
