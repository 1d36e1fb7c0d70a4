//! Mathematical utility functions for DSP.
//!
//! All functions are allocation-free and `no_std` (transcendentals come from
//! `libm`).
//!
//! # Level Conversions
//!
//! - [`db_to_linear`]
//!
//! # Waveshaping
//!
//! | Function | Character |
//! |----------|-----------|
//! | [`spiral`] | Odd-symmetric `sin(x·|x|)/|x|` warp, smooth up to √(π/2) |
//! | [`sin_asin_shape`] | Clamped `asin`, the inverse of a `sin` pre-shape |

use libm::{asin, pow, sin};

/// Domain bound for [`spiral`]: `√(π/2)`, where `x·|x|` reaches `π/2` and the
/// warp peaks.
pub const SPIRAL_LIMIT: f64 = 1.2533141373155;

/// Convert decibels to linear gain (`10^(dB/20)`).
///
/// ```rust
/// use slamtape_core::db_to_linear;
///
/// assert_eq!(db_to_linear(0.0), 1.0);
/// assert!((db_to_linear(-6.0206) - 0.5).abs() < 1e-4);
/// ```
#[inline]
pub fn db_to_linear(db: f64) -> f64 {
    pow(10.0, db / 20.0)
}

/// Clamp to `[-1, 1]` and take `asin`.
///
/// Pairs with a `sin` pre-shape around a linear filter: `asin(filter(sin(x)))`
/// keeps the filter's output inside the `asin` domain without ever producing
/// NaN.
#[inline]
pub fn sin_asin_shape(x: f64) -> f64 {
    asin(x.clamp(-1.0, 1.0))
}

/// Spiral saturation: `sin(x·|x|) / |x|`, with `x` clamped to
/// `±`[`SPIRAL_LIMIT`] and the divisor taken as 1 at `x = 0`.
///
/// Near zero this is the identity (`sin(x²)/x ≈ x`). It rounds over into a
/// peak of about 0.851 (where `tan(x²) = 2x²`) and settles to
/// `1/√(π/2) ≈ 0.798` at the limit, so there is never a hard knee.
///
/// ```rust
/// use slamtape_core::spiral;
///
/// assert_eq!(spiral(0.0), 0.0);
/// assert!((spiral(1e-3) - 1e-3).abs() < 1e-12);
/// assert!((spiral(-0.5) + spiral(0.5)).abs() < 1e-15);
/// ```
#[inline]
pub fn spiral(x: f64) -> f64 {
    let x = x.clamp(-SPIRAL_LIMIT, SPIRAL_LIMIT);
    let magnitude = x.abs();
    let divisor = if x == 0.0 { 1.0 } else { magnitude };
    sin(x * magnitude) / divisor
}
