//! Core types for data wrangling
//!
//! This crate provides the pieces shared by the segmentation, summary and
//! filter crates:
//!
//! - [`Error`] and [`Result`], the one error type every operation returns
//! - [`Sample`], the numeric trait accepted by every operation (floats and
//!   fixed-width integers, widened to `f64` for computation)
//! - [`NanPolicy`] and sorting helpers in [`utils`]
//!
//! # Example
//!
//! ```rust
//! use wrangle_core::{NanPolicy, Sample};
//!
//! let counts: Vec<i16> = vec![120, -40, 7];
//! let widened: Vec<f64> = counts.iter().map(|&c| c.to_f64()).collect();
//! assert_eq!(widened, vec![120.0, -40.0, 7.0]);
//!
//! let cleaned = NanPolicy::Remove.apply(&[1.0, f64::NAN]);
//! assert_eq!(cleaned, vec![1.0]);
//! ```

pub mod error;
pub mod numeric;
pub mod utils;

pub use error::{Error, Result};
pub use numeric::{all_finite, to_f64_vec, Sample};
pub use utils::{nan_free, sort_in_place, sorted, NanPolicy};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
