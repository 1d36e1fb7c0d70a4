//! Sample-rate derived filter settings shared by both tape paths.
//!
//! Every value here is a pure function of the sample rate. The channel caches
//! one [`TapeCoefficients`] and rebuilds it only when the rate changes.

use slamtape_core::ResonantBiquad;

/// Reference rate the frequency constants are tuned at.
pub const REFERENCE_RATE: f64 = 44100.0;

/// Golden-ratio softness shared by the mid roller and the limiter.
pub const SOFTNESS: f64 = 0.618_033_988_749_894_848_204_586;

const HEAD_FREQ: f64 = 0.0072;
const HEAD_Q: f64 = 0.0009;
const HIGHS_FREQ: f64 = 0.032;
const HIGHS_Q: f64 = 0.0007;
const HEAD_BUMP_DAMPING: f64 = 0.12;

/// Filter coefficients and rates for one sample rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapeCoefficients {
    sample_rate: f64,
    head: ResonantBiquad,
    highs: ResonantBiquad,
    head_bump_freq: f64,
    roll_amount: f64,
}

impl TapeCoefficients {
    /// Derive all coefficients for `sample_rate`.
    pub fn new(sample_rate: f64) -> Self {
        let scale = sample_rate / REFERENCE_RATE;
        Self {
            sample_rate,
            head: ResonantBiquad::bandpass(HEAD_FREQ / scale, HEAD_Q),
            highs: ResonantBiquad::bandpass(HIGHS_FREQ / scale, HIGHS_Q),
            head_bump_freq: HEAD_BUMP_DAMPING / scale,
            roll_amount: (1.0 - SOFTNESS) / scale,
        }
    }

    /// Sample rate these coefficients were derived for.
    #[inline]
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Head-bump band-pass template (zeroed state).
    #[inline]
    pub fn head(&self) -> &ResonantBiquad {
        &self.head
    }

    /// Input "highs" band-pass template (zeroed state).
    #[inline]
    pub fn highs(&self) -> &ResonantBiquad {
        &self.highs
    }

    /// Cubic damping factor of the head-bump accumulator.
    #[inline]
    pub fn head_bump_freq(&self) -> f64 {
        self.head_bump_freq
    }

    /// Blend amount of the mid roller.
    #[inline]
    pub fn roll_amount(&self) -> f64 {
        self.roll_amount
    }
}

impl Default for TapeCoefficients {
    fn default() -> Self {
        Self::new(REFERENCE_RATE)
    }
}
