//! Piecewise-monotonic segmentation of sampled signals
//!
//! A wiggling signal is a chain of runs from a local minimum to the next
//! local maximum and back. This crate partitions a sample sequence into those
//! runs ("segments"), reporting for each its start index, cumulative
//! amplitude, duration and slope, and picks out the steepest falling and the
//! steepest rising run.
//!
//! # Guarantees
//!
//! - Segment durations sum to `N - 1` for `N` samples
//! - Start indices are strictly increasing and the first is 0
//! - At most [`max_segment_count`]`(N)` segments are produced
//! - Steepest-run selection is strict: zero slopes never qualify and the
//!   first of equally steep runs wins
//!
//! # Usage
//!
//! ```rust
//! use wrangle_segments::segment;
//!
//! let samples: Vec<i16> = vec![1, 3, 2, 2, 5, 1];
//! let result = segment(&samples).unwrap();
//!
//! for s in result.segments() {
//!     println!("start {} amplitude {} slope {}", s.start_index, s.amplitude, s.slope);
//! }
//! assert_eq!(result.steepest_negative().unwrap().start_index, 4);
//! ```

pub mod batch;
pub mod monotonic;
pub mod traits;
pub mod types;

pub use batch::{segment_batch, segment_batch_with};
pub use monotonic::{max_segment_count, segment, MonotonicSegmenter};
pub use traits::SegmentationEngine;
pub use types::{Segment, SegmentationResult, SteepestSegment};
