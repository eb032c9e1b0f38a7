//! Least-squares straight-line fit
//!
//! Fits `y = slope * x + intercept` to paired samples, with standard
//! uncertainties of both coefficients and the coefficient of determination.
//! Pairs whose `y` is not finite are left out of the fit, so gaps in a
//! measured series can be marked with NaN.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use wrangle_core::{Error, Result, Sample};

/// Parameters for [`linear_fit`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFitParameters {
    /// Fraction of the x range the reported fit line extends past each end
    pub line_margin: f64,
}

impl Default for LinearFitParameters {
    fn default() -> Self {
        Self { line_margin: 0.1 }
    }
}

impl LinearFitParameters {
    pub fn with_line_margin(mut self, line_margin: f64) -> Self {
        self.line_margin = line_margin;
        self
    }
}

/// Result of a straight-line fit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    pub slope_uncertainty: f64,
    pub intercept_uncertainty: f64,
    /// Coefficient of determination; 1 for a constant `y`
    pub r_squared: f64,
    /// Number of pairs used
    pub points: usize,
    /// End points of the fit line, slightly beyond the fitted x range
    pub line_x: [f64; 2],
    pub line_y: [f64; 2],
}

impl LinearFit {
    /// Value of the fitted line at `x`
    pub fn evaluate(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit a straight line through `(x[i], y[i])`
///
/// At least three pairs with finite `y` and two distinct `x` values are
/// needed; the coefficient uncertainties use `points - 2` degrees of freedom.
///
/// # Examples
///
/// ```rust
/// use wrangle_summary::{linear_fit, LinearFitParameters};
///
/// let x = [0, 1, 2, 3];
/// let y = [1.0, 3.0, 2.0, 5.0];
/// let fit = linear_fit(&x, &y, &LinearFitParameters::default()).unwrap();
/// assert!((fit.slope - 1.1).abs() < 1e-12);
/// assert!((fit.intercept - 1.1).abs() < 1e-12);
/// ```
#[instrument(level = "debug", skip(x, y), fields(samples = x.len()))]
pub fn linear_fit<X: Sample, Y: Sample>(
    x: &[X],
    y: &[Y],
    params: &LinearFitParameters,
) -> Result<LinearFit> {
    if x.len() != y.len() {
        return Err(Error::size_mismatch(x.len(), y.len(), "linear fit"));
    }
    if !params.line_margin.is_finite() || params.line_margin < 0.0 {
        return Err(Error::InvalidParameter(format!(
            "Line margin {} must be finite and non-negative",
            params.line_margin
        )));
    }
    if !wrangle_core::all_finite(x) {
        return Err(Error::non_finite("linear fit abscissae"));
    }

    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y)
        .filter(|&(_, &yi)| yi.is_finite())
        .map(|(&xi, &yi)| (xi.to_f64(), yi.to_f64()))
        .collect();
    if pairs.len() < 3 {
        return Err(Error::too_short("linear fit", 3, pairs.len()));
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n;

    let (sxx, sxy) = pairs.iter().fold((0.0, 0.0), |(sxx, sxy), &(xi, yi)| {
        let dx = xi - mean_x;
        (sxx + dx * dx, sxy + dx * (yi - mean_y))
    });
    if sxx == 0.0 {
        return Err(Error::InvalidInput(
            "linear fit needs at least two distinct x values".to_string(),
        ));
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    let (ss_res, ss_tot) = pairs.iter().fold((0.0, 0.0), |(res, tot), &(xi, yi)| {
        let r = yi - (slope * xi + intercept);
        let d = yi - mean_y;
        (res + r * r, tot + d * d)
    });

    let residual_variance = ss_res / (n - 2.0);
    let sum_x2 = sxx + n * mean_x * mean_x;
    let r_squared = if ss_tot == 0.0 { 1.0 } else { 1.0 - ss_res / ss_tot };

    let (lo, hi) = pairs
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(xi, _)| {
            (lo.min(xi), hi.max(xi))
        });
    let margin = params.line_margin * (hi - lo);
    let line_x = [lo - margin, hi + margin];

    let fit = LinearFit {
        slope,
        intercept,
        slope_uncertainty: (residual_variance / sxx).sqrt(),
        intercept_uncertainty: (residual_variance * sum_x2 / (n * sxx)).sqrt(),
        r_squared,
        points: pairs.len(),
        line_x,
        line_y: [
            slope * line_x[0] + intercept,
            slope * line_x[1] + intercept,
        ],
    };
    debug!(slope, intercept, r_squared, points = fit.points, "linear fit");
    Ok(fit)
}
