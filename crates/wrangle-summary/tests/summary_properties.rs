//! Property-based tests for the summary statistics

use approx::assert_relative_eq;
use proptest::prelude::*;
use wrangle_summary::{
    linear_fit, mean_var_sd, median_and_quantiles, nearest, quantile_sorted, LinearFitParameters,
};

fn values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1e6..1e6_f64, 1..100)
}

proptest! {
    #[test]
    fn prop_extreme_quantiles_are_min_and_max(data in values()) {
        let s = median_and_quantiles(&data, 0.0, 1.0).unwrap();
        let min = data.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(s.lower, min);
        prop_assert_eq!(s.upper, max);
    }

    #[test]
    fn prop_half_quantile_matches_median_on_odd_length(mut data in values()) {
        if data.len() % 2 == 0 {
            data.pop();
        }
        prop_assume!(!data.is_empty());
        let s = median_and_quantiles(&data, 0.5, 0.5).unwrap();
        prop_assert_eq!(s.lower, s.median);
    }

    #[test]
    fn prop_quantiles_are_monotone(data in values(), a in 0.0..=1.0_f64, b in 0.0..=1.0_f64) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let s = median_and_quantiles(&data, lo, hi).unwrap();
        prop_assert!(s.lower <= s.upper);
    }

    #[test]
    fn prop_quantile_within_range(data in values(), q in 0.0..=1.0_f64) {
        let mut sorted = data.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let value = quantile_sorted(&sorted, q).unwrap();
        prop_assert!(value >= sorted[0] && value <= sorted[sorted.len() - 1]);
    }

    #[test]
    fn prop_constant_sequence_has_no_spread(c in -1e6..1e6_f64, n in 1usize..50) {
        let m = mean_var_sd(&vec![c; n]).unwrap();
        assert_relative_eq!(m.mean, c, max_relative = 1e-12);
        prop_assert!(m.variance.abs() < 1e-12 * c.abs().max(1.0));
    }

    #[test]
    fn prop_variance_shift_invariant(data in values(), shift in -1e3..1e3_f64) {
        let shifted: Vec<f64> = data.iter().map(|x| x + shift).collect();
        let a = mean_var_sd(&data).unwrap();
        let b = mean_var_sd(&shifted).unwrap();
        prop_assert!((a.variance - b.variance).abs() <= 1e-6 * a.variance.max(1.0));
    }

    // The exhaustive scan finds a global minimum of distance
    #[test]
    fn prop_exhaustive_nearest_is_global(data in values(), target in -1e6..1e6_f64) {
        let found = nearest(&data, target, false).unwrap();
        let best = data.iter().map(|x| (x - target).abs()).fold(f64::INFINITY, f64::min);
        prop_assert_eq!(found.difference.abs(), best);
        prop_assert_eq!(found.difference, data[found.index] - target);
    }

    // On sorted input the early-exit scan agrees with the exhaustive one
    #[test]
    fn prop_monotonic_nearest_matches_exhaustive(data in values(), target in -1e6..1e6_f64) {
        let mut sorted = data.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let fast = nearest(&sorted, target, true).unwrap();
        let full = nearest(&sorted, target, false).unwrap();
        prop_assert_eq!(fast, full);
    }

    // Points on a straight line are fitted exactly, whatever the offset of x
    #[test]
    fn prop_linear_fit_recovers_line(
        slope in -100.0..100.0_f64,
        intercept in -1e3..1e3_f64,
        offset in -1e3..1e3_f64,
        n in 3usize..60,
    ) {
        let x: Vec<f64> = (0..n).map(|i| offset + i as f64 * 0.5).collect();
        let y: Vec<f64> = x.iter().map(|&xi| slope * xi + intercept).collect();
        let fit = linear_fit(&x, &y, &LinearFitParameters::default()).unwrap();
        prop_assert!((fit.slope - slope).abs() < 1e-8 * slope.abs().max(1.0));
        prop_assert!((fit.intercept - intercept).abs() < 1e-6 * intercept.abs().max(1.0) + 1e-6 * slope.abs() * offset.abs());
        prop_assert_eq!(fit.points, n);
    }
}
