//! Piecewise-monotonic signal segmentation with summary statistics and
//! smoothing filters
//!
//! This crate re-exports the workspace crates:
//!
//! - [`common`]: error type, numeric sample trait, NaN handling
//! - [`segments`]: segmentation into monotonic runs
//! - [`summary`]: mean/variance, median and quantiles, nearest value,
//!   median uncertainty, linear fit, normal curves
//! - [`filter`]: moving-average and median filters
//!
//! # Example
//!
//! ```rust
//! use data_wrangling::prelude::*;
//!
//! let raw = [0.0, 2.0, 1.0, 4.0, 8.0, 7.0, 3.0, 0.0, 1.0];
//! let smooth = average_filter(&raw, 3).unwrap();
//! let result = segment(&smooth).unwrap();
//!
//! let durations: usize = result.durations().sum();
//! assert_eq!(durations, raw.len() - 1);
//! ```

pub use wrangle_core as common;
pub use wrangle_filter as filter;
pub use wrangle_segments as segments;
pub use wrangle_summary as summary;

pub mod prelude {
    pub use wrangle_core::{Error, NanPolicy, Result, Sample};
    pub use wrangle_filter::{average_filter, median_filter, moving_average};
    pub use wrangle_segments::{
        max_segment_count, segment, segment_batch, MonotonicSegmenter, Segment,
        SegmentationEngine, SegmentationResult, SteepestSegment,
    };
    pub use wrangle_summary::{
        cumulative_normal_curve, linear_fit, mean_var_sd, median_and_quantiles,
        median_uncertainty, nearest, normal_cdf, normal_curve, normal_density, LinearFit,
        LinearFitParameters, Moments, Nearest, NormalCurve, QuantileParameters,
        QuantileSummary, UncertaintyParameters,
    };
}
