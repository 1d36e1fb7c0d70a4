//! One channel of the tape pipeline.
//!
//! [`TapeChannel::process_sample`] is the whole per-sample transform:
//!
//! 1. Pad the host signal by 2⁻¹⁶, substitute dither for near-denormal input,
//!    and apply a gain cut if the control asks for one.
//! 2. Route the sample through the active path: split off the highs, advance
//!    the head bump, and fold the input through `sin`/band-pass/`asin`.
//! 3. Capture the ground (dry minus filtered), then apply a deferred boost.
//! 4. Soften against the highs and spiral-saturate.
//! 5. Restrain the head bumps, add back ground and head bump.
//! 6. Hysteresis limit, dither, restore by 2¹⁶.
//!
//! A channel owns every piece of mutable state it touches, so independent
//! channels can run on separate threads.

use slamtape_core::FloatDither;

use crate::coefficients::TapeCoefficients;
use crate::dual_path::DualPathBank;
use crate::gain_stage::{GAIN_BOOST, GAIN_CUT, GainStage};
use crate::head_bump::{HEAD_BUMP_MIX, suppression};
use crate::hysteresis::HysteresisLimiter;
use crate::saturation::saturate;

/// Full processing state for one audio channel.
///
/// # Example
///
/// ```rust
/// use slamtape_effects::TapeChannel;
///
/// let mut channel = TapeChannel::new(48000.0);
/// let out = channel.process_sample(1.5, 48000.0, 0.5);
/// assert!(out.abs() <= 0.99 * 65536.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TapeChannel {
    coefficients: TapeCoefficients,
    bank: DualPathBank,
    limiter: HysteresisLimiter,
    dither: FloatDither,
}

impl TapeChannel {
    /// Create a channel with fresh state and coefficients for `sample_rate`.
    pub fn new(sample_rate: f64) -> Self {
        let coefficients = TapeCoefficients::new(sample_rate);
        Self {
            coefficients,
            bank: DualPathBank::new(&coefficients),
            limiter: HysteresisLimiter::new(),
            dither: FloatDither::new(),
        }
    }

    /// Process one host-level sample.
    ///
    /// `control` is the resolved slam amount in `[0.01, 0.99]`. Coefficients
    /// are re-derived only when `sample_rate` differs from the cached rate.
    /// Non-finite input is treated as silence.
    #[inline]
    pub fn process_sample(&mut self, sample: f64, sample_rate: f64, control: f64) -> f64 {
        if sample_rate.to_bits() != self.coefficients.sample_rate().to_bits() {
            self.set_sample_rate(sample_rate);
        }

        let sample = if sample.is_finite() { sample } else { 0.0 };
        let gain = GainStage::from_control(control);

        let padded = gain.pre_attenuate(self.dither.floor(sample * GAIN_CUT));
        let dry = padded;

        let split = self.bank.process(padded, &self.coefficients);
        let ground = dry - split.filtered;

        let saturated = saturate(gain.deferred_boost(split.filtered), split.highs);
        self.bank.restrain_head_bumps(suppression(saturated));

        let summed = saturated + ground + self.bank.head_bump_sum() * HEAD_BUMP_MIX;
        let limited = self.limiter.process(summed);

        self.dither.apply(limited) * GAIN_BOOST
    }

    /// Re-derive coefficients for a new rate, keeping all signal state.
    pub fn set_sample_rate(&mut self, sample_rate: f64) {
        self.coefficients = TapeCoefficients::new(sample_rate);
        self.bank.set_coefficients(&self.coefficients);
    }

    /// Sample rate of the cached coefficients.
    pub fn sample_rate(&self) -> f64 {
        self.coefficients.sample_rate()
    }

    /// Cached coefficients.
    pub fn coefficients(&self) -> &TapeCoefficients {
        &self.coefficients
    }

    /// The alternating path bank.
    pub fn bank(&self) -> &DualPathBank {
        &self.bank
    }

    /// The output limiter.
    pub fn limiter(&self) -> &HysteresisLimiter {
        &self.limiter
    }

    /// The channel's dither generator.
    pub fn dither(&self) -> &FloatDither {
        &self.dither
    }

    /// Restore the freshly constructed state at the current sample rate.
    pub fn reset(&mut self) {
        self.bank.reset();
        self.limiter.reset();
        self.dither.reset();
    }
}

impl Default for TapeChannel {
    fn default() -> Self {
        Self::new(crate::coefficients::REFERENCE_RATE)
    }
}
