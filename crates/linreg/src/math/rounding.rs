//! Rounding and clamping helpers.
//!
//! Rounding is half-up (ties go towards positive infinity), which is what
//! chart tooltips and the generated demo tables expect: `-2.5` rounds to `-2`.

// External dependencies
use num_traits::Float;

/// Round `value` to `decimals` places, ties towards positive infinity.
pub fn round_half_up<T: Float>(value: T, decimals: u32) -> T {
    let half = T::from(0.5).unwrap_or(T::zero());
    if decimals == 0 {
        return (value + half).floor();
    }
    let scale = T::from(10u32.pow(decimals)).unwrap_or(T::one());
    (value * scale + half).floor() / scale
}

/// Clamp `value` into `[lo, hi]`.
#[inline]
pub fn clamp<T: Float>(value: T, lo: T, hi: T) -> T {
    hi.min(lo.max(value))
}
