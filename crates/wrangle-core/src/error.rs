//! Error types for data wrangling
//!
//! Provides a unified error type for all wrangle crates.

use thiserror::Error;

/// Core error type for segmentation, summary and filter operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Input sequence unusable for the operation (too short, empty, mismatched)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a sequence shorter than the operation needs
    pub fn too_short(operation: &str, expected: usize, actual: usize) -> Self {
        Self::InvalidInput(format!(
            "{operation} needs at least {expected} samples, got {actual}"
        ))
    }

    /// Create an error for empty input
    pub fn empty_input(operation: &str) -> Self {
        Self::too_short(operation, 1, 0)
    }

    /// Create an error for invalid quantile
    pub fn invalid_quantile(q: f64) -> Self {
        Self::InvalidParameter(format!("Quantile {q} must be in [0, 1]"))
    }

    /// Create an error for a filter window that cannot be used
    pub fn invalid_window(width: usize) -> Self {
        Self::InvalidParameter(format!("Window width {width} must be positive"))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("window must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: window must be positive");

        let err = Error::InvalidInput("sequence is empty".to_string());
        assert_eq!(err.to_string(), "Invalid input: sequence is empty");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::too_short("segmentation", 2, 1);
        assert_eq!(
            err.to_string(),
            "Invalid input: segmentation needs at least 2 samples, got 1"
        );

        let err = Error::empty_input("nearest value search");
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("got 0"));

        let err = Error::invalid_quantile(1.5);
        assert_eq!(err.to_string(), "Invalid parameter: Quantile 1.5 must be in [0, 1]");

        let err = Error::invalid_quantile(-0.1);
        assert_eq!(err.to_string(), "Invalid parameter: Quantile -0.1 must be in [0, 1]");

        let err = Error::invalid_window(0);
        assert_eq!(err.to_string(), "Invalid parameter: Window width 0 must be positive");

        let err = Error::size_mismatch(10, 9, "uncertainties");
        assert_eq!(
            err.to_string(),
            "Invalid input: Size mismatch in uncertainties: expected 10, got 9"
        );

        let err = Error::non_finite("samples");
        assert_eq!(err.to_string(), "Invalid input: samples contains NaN or infinite values");
    }

    #[test]
    fn test_error_patterns() {
        fn validate_probability(q: f64) -> Result<()> {
            if !(0.0..=1.0).contains(&q) {
                return Err(Error::invalid_quantile(q));
            }
            Ok(())
        }

        assert!(validate_probability(0.5).is_ok());
        assert!(validate_probability(1.1).is_err());
        assert!(validate_probability(f64::NAN).is_err());
    }
}
