//! Normal distribution values and sampled curves
//!
//! Curves are sampled on a fixed grid from `mu - 5 sigma` to `mu + 5 sigma`
//! in steps of `sigma / 20`, which is fine enough to overlay on a histogram
//! of the data they were fitted to.

use serde::{Deserialize, Serialize};
use statrs::distribution::{Continuous, ContinuousCDF, Normal};
use wrangle_core::{Error, Result};

/// Half-width of a sampled curve, in standard deviations
pub const CURVE_HALF_WIDTH: usize = 5;

/// Grid points per standard deviation
pub const CURVE_STEPS_PER_SIGMA: usize = 20;

/// A normal curve sampled on an even grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalCurve {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl NormalCurve {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

fn distribution(mu: f64, sigma: f64) -> Result<Normal> {
    if !mu.is_finite() {
        return Err(Error::InvalidParameter(format!("Mean {mu} must be finite")));
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "Standard deviation {sigma} must be finite and positive"
        )));
    }
    Normal::new(mu, sigma).map_err(|e| {
        Error::InvalidParameter(format!("Failed to create normal distribution: {e}"))
    })
}

fn grid(mu: f64, sigma: f64) -> Vec<f64> {
    let steps = (CURVE_HALF_WIDTH * CURVE_STEPS_PER_SIGMA) as i64;
    let step = sigma / CURVE_STEPS_PER_SIGMA as f64;
    (-steps..=steps).map(|i| mu + i as f64 * step).collect()
}

/// Unnormalised Gaussian `exp(-(x - mu)^2 / (2 sigma^2))`, peaking at 1
pub fn gaussian_kernel(x: f64, mu: f64, sigma: f64) -> Result<f64> {
    distribution(mu, sigma)?;
    let z = (x - mu) / sigma;
    Ok((-0.5 * z * z).exp())
}

/// Probability density of `N(mu, sigma)` at `x`
pub fn normal_density(x: f64, mu: f64, sigma: f64) -> Result<f64> {
    Ok(distribution(mu, sigma)?.pdf(x))
}

/// Cumulative probability of `N(mu, sigma)` up to `x`
pub fn normal_cdf(x: f64, mu: f64, sigma: f64) -> Result<f64> {
    Ok(distribution(mu, sigma)?.cdf(x))
}

/// Density of `N(mu, sigma)` sampled on the curve grid
///
/// # Examples
///
/// ```rust
/// use wrangle_summary::normal_curve;
///
/// let curve = normal_curve(10.0, 2.0).unwrap();
/// assert_eq!(curve.len(), 201);
/// assert_eq!(curve.x[100], 10.0);
/// ```
pub fn normal_curve(mu: f64, sigma: f64) -> Result<NormalCurve> {
    let normal = distribution(mu, sigma)?;
    let x = grid(mu, sigma);
    let y = x.iter().map(|&xi| normal.pdf(xi)).collect();
    Ok(NormalCurve { x, y })
}

/// Cumulative distribution on the curve grid, by trapezoidal integration
///
/// Integration starts from the exact tail probability below the grid, so the
/// last point is close to 1.
pub fn cumulative_normal_curve(mu: f64, sigma: f64) -> Result<NormalCurve> {
    let normal = distribution(mu, sigma)?;
    let density = normal_curve(mu, sigma)?;

    let mut y = Vec::with_capacity(density.len());
    let mut total = normal.cdf(density.x[0]);
    y.push(total);
    for i in 1..density.len() {
        let width = density.x[i] - density.x[i - 1];
        total += width * (density.y[i] + density.y[i - 1]) / 2.0;
        y.push(total);
    }

    Ok(NormalCurve { x: density.x, y })
}
