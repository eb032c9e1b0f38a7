//! Summary statistics for sampled signals
//!
//! This crate provides the classical (non-robust) summaries used alongside
//! signal segmentation:
//!
//! - [`mean_var_sd`]: two-pass mean, population variance and standard deviation
//! - [`median_and_quantiles`]: median plus linearly interpolated quantiles
//! - [`nearest`]: position of the value closest to a target
//! - [`median_uncertainty`]: spread of the median under Gaussian measurement noise
//! - [`linear_fit`]: least-squares line with coefficient uncertainties and r²
//! - [`normal_curve`] / [`cumulative_normal_curve`]: sampled normal curves
//!   for overlaying on the data
//!
//! Every function accepts any [`wrangle_core::Sample`] type and computes in `f64`.
//!
//! # Example
//!
//! ```rust
//! use wrangle_summary::{mean_var_sd, median_and_quantiles, QuantileParameters, QuantileSummary};
//!
//! let data = [4.0, 8.0, 15.0, 16.0, 23.0, 42.0];
//!
//! let moments = mean_var_sd(&data).unwrap();
//! println!("mean {:.2}, sd {:.2}", moments.mean, moments.std_dev);
//!
//! let quartiles = QuantileSummary::estimate(&data, &QuantileParameters::default()).unwrap();
//! assert_eq!(quartiles.median, 15.5);
//!
//! let deciles = median_and_quantiles(&data, 0.1, 0.9).unwrap();
//! assert!(deciles.lower < deciles.upper);
//! ```

pub mod linear_fit;
pub mod moments;
pub mod nearest;
pub mod normal;
pub mod quantile;
pub mod uncertainty;

pub use linear_fit::{linear_fit, LinearFit, LinearFitParameters};
pub use moments::{mean_var_sd, Moments};
pub use nearest::{nearest, Nearest};
pub use normal::{
    cumulative_normal_curve, gaussian_kernel, normal_cdf, normal_curve, normal_density,
    NormalCurve,
};
pub use quantile::{
    check_quantile, median_and_quantiles, median_sorted, quantile_sorted, QuantileParameters,
    QuantileSummary,
};
pub use uncertainty::{median_uncertainty, with_gaussian_noise, UncertaintyParameters};
