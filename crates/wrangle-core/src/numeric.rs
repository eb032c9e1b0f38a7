//! Numeric sample types accepted by the wrangling operations
//!
//! Signals arrive either as floating-point values or as fixed-width integers
//! (ADC counts). Every operation computes in `f64`, so one generic
//! implementation serves every sample type. Differences between integer
//! samples are taken exactly in `i128` and only the result is widened, so
//! neighbouring 64-bit values never collapse onto the same `f64`.

use num_traits::AsPrimitive;
use std::fmt::Debug;

/// Base trait for values that can appear in a sampled signal
pub trait Sample: AsPrimitive<f64> + Copy + PartialOrd + Debug + Send + Sync {
    /// Widen to `f64` for computation
    #[inline]
    fn to_f64(self) -> f64 {
        self.as_()
    }

    /// Difference `next - self`
    #[inline]
    fn delta_to(self, next: Self) -> f64 {
        next.to_f64() - self.to_f64()
    }

    /// Check if value is finite (always true for integers)
    fn is_finite(self) -> bool;
}

impl Sample for f64 {
    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}

impl Sample for f32 {
    #[inline]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
}

macro_rules! integer_sample {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                #[inline]
                fn delta_to(self, next: Self) -> f64 {
                    (next as i128 - self as i128) as f64
                }

                #[inline]
                fn is_finite(self) -> bool {
                    true
                }
            }
        )*
    };
}

integer_sample!(i8, i16, i32, i64, u8, u16, u32, u64);

/// Widen a slice of samples to `f64`
pub fn to_f64_vec<T: Sample>(samples: &[T]) -> Vec<f64> {
    samples.iter().map(|&x| x.to_f64()).collect()
}

/// Check that every sample is finite
pub fn all_finite<T: Sample>(samples: &[T]) -> bool {
    samples.iter().all(|&x| x.is_finite())
}
