//! Head-bump resonator: a cubic-feedback accumulator driving a band-pass.
//!
//! Each sample the accumulator integrates a small fraction of the input,
//! loses energy through a cubic term, is folded through `sin`, filtered by the
//! head biquad, then mapped back through `asin`:
//!
//! ```text
//! acc += input · 0.05
//! acc -= acc³ · head_bump_freq
//! acc  = asin(clamp(biquad(sin(acc)), −1, 1))
//! ```
//!
//! The accumulator persists between samples and is mixed into the output at
//! [`HEAD_BUMP_MIX`]. After the saturator runs, [`HeadBump::restrain`] pulls
//! it toward zero by an amount that shrinks as the output approaches full
//! scale.

use libm::{fabs, sin};
use slamtape_core::{ResonantBiquad, sin_asin_shape};

/// Fraction of the input integrated per sample.
pub const HEAD_BUMP_DRIVE: f64 = 0.05;

/// Output contribution of each path's accumulator.
pub const HEAD_BUMP_MIX: f64 = 0.1;

/// Suppression scale applied as `(1 − |out|) · HEAD_BUMP_SUPPRESS`.
pub const HEAD_BUMP_SUPPRESS: f64 = 0.00013;

/// One path's head-bump accumulator and its biquad.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeadBump {
    accumulator: f64,
    biquad: ResonantBiquad,
}

impl HeadBump {
    /// Create a resonator with zeroed state using `template`'s coefficients.
    pub fn new(template: &ResonantBiquad) -> Self {
        let mut biquad = ResonantBiquad::default();
        biquad.copy_coefficients(template);
        Self {
            accumulator: 0.0,
            biquad,
        }
    }

    /// Advance the resonator by one sample.
    #[inline]
    pub fn process(&mut self, input: f64, damping: f64) {
        let mut acc = self.accumulator + input * HEAD_BUMP_DRIVE;
        acc -= acc * acc * acc * damping;
        self.accumulator = sin_asin_shape(self.biquad.process(sin(acc)));
    }

    /// Move the accumulator toward zero by `suppress` if it exceeds it.
    #[inline]
    pub fn restrain(&mut self, suppress: f64) {
        if self.accumulator > suppress {
            self.accumulator -= suppress;
        }
        if self.accumulator < -suppress {
            self.accumulator += suppress;
        }
    }

    /// Current accumulator value.
    #[inline]
    pub fn value(&self) -> f64 {
        self.accumulator
    }

    /// The resonator's biquad.
    pub fn biquad(&self) -> &ResonantBiquad {
        &self.biquad
    }

    /// Replace the coefficients, keeping all state.
    pub fn set_coefficients(&mut self, template: &ResonantBiquad) {
        self.biquad.copy_coefficients(template);
    }

    /// Zero the accumulator and the biquad state.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.biquad.clear();
    }
}

/// Suppression step for a saturated output sample.
#[inline]
pub fn suppression(output: f64) -> f64 {
    (1.0 - fabs(output)) * HEAD_BUMP_SUPPRESS
}
