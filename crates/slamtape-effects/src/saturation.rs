//! Treble softening and spiral saturation.
//!
//! The fast residual from the mid roller sets how much of a cosine knee is
//! taken off the filtered signal:
//!
//! ```text
//! soften = 1 − cos(min(|highs| · π/2, π/2))
//! ```
//!
//! subtracted for positive highs and added for negative ones. The result is
//! then warped by [`spiral`], which never exceeds ~0.851 in magnitude.

use core::f64::consts::FRAC_PI_2;

use libm::{cos, fabs};
use slamtape_core::spiral;

/// Cosine knee depth for a given fast residual.
#[inline]
pub fn soften_amount(highs: f64) -> f64 {
    let angle = (fabs(highs) * FRAC_PI_2).min(FRAC_PI_2);
    1.0 - cos(angle)
}

/// Pull `sample` against the sign of `highs` by [`soften_amount`].
#[inline]
pub fn soften(sample: f64, highs: f64) -> f64 {
    let amount = soften_amount(highs);
    if highs > 0.0 {
        sample - amount
    } else if highs < 0.0 {
        sample + amount
    } else {
        sample
    }
}

/// Soften, then spiral-saturate.
#[inline]
pub fn saturate(sample: f64, highs: f64) -> f64 {
    spiral(soften(sample, highs))
}
