//! Smoothing filters for sampled signals
//!
//! - [`moving_average`]: running mean with a given number of neighbours per
//!   side, shrinking at the edges
//! - [`average_filter`]: the same, addressed by full (odd) window width
//! - [`median_filter`]: running median over a zero-padded signal
//!
//! Smoothing before segmentation suppresses the short runs that measurement
//! noise introduces.
//!
//! # Example
//!
//! ```rust
//! use wrangle_filter::{average_filter, median_filter};
//!
//! let raw = [0.0, 1.0, 0.0, 9.0, 0.0, 1.0, 0.0];
//! let despiked = median_filter(&raw, 3).unwrap();
//! let smooth = average_filter(&despiked, 3).unwrap();
//! assert_eq!(smooth.len(), raw.len());
//! ```

pub mod average;
pub mod median;
pub mod window;

pub use average::{average_filter, moving_average};
pub use median::median_filter;
pub use window::odd_width;
