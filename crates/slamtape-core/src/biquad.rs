//! Resonant band-pass biquad with interleaved (transposed) state.
//!
//! Coefficients come from the analog-prototype bilinear transform with the
//! frequency expressed as a fraction of the sample rate:
//!
//! ```text
//! K    = tan(π · freq)
//! norm = 1 / (1 + K/Q + K²)
//! b0   =  K/Q · norm
//! b1   =  0
//! b2   = −b0
//! a1   =  2(K² − 1) · norm
//! a2   =  (1 − K/Q + K²) · norm
//! ```
//!
//! Processing uses the transposed direct form II, two state values:
//!
//! ```text
//! y  = x·b0 + s1
//! s1 = x·b1 − y·a1 + s2
//! s2 = x·b2 − y·a2
//! ```
//!
//! With the very small Q values used for tape head modeling the response is
//! extremely broad, so the filter acts as a gentle DC-rejecting resonator
//! rather than a narrow peak.

use core::f64::consts::PI;
use libm::tan;

/// Band-pass biquad record: coefficients plus the two persistent states.
///
/// `freq` and `q` are stored for inspection; `b*`/`a*` are derived from them
/// by [`set_bandpass`](Self::set_bandpass). `state1`/`state2` persist across
/// every call to [`process`](Self::process).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResonantBiquad {
    /// Center frequency as a fraction of the sample rate (0 to 0.5).
    pub freq: f64,
    /// Resonance. Must be nonzero.
    pub q: f64,
    b0: f64,
    b1: f64,
    b2: f64,
    a1: f64,
    a2: f64,
    state1: f64,
    state2: f64,
}

impl ResonantBiquad {
    /// Create a band-pass biquad with zeroed state.
    pub fn bandpass(freq: f64, q: f64) -> Self {
        let mut biquad = Self::default();
        biquad.set_bandpass(freq, q);
        biquad
    }

    /// Recompute coefficients, leaving the state untouched.
    pub fn set_bandpass(&mut self, freq: f64, q: f64) {
        let k = tan(PI * freq);
        let norm = 1.0 / (1.0 + k / q + k * k);
        self.freq = freq;
        self.q = q;
        self.b0 = k / q * norm;
        self.b1 = 0.0;
        self.b2 = -self.b0;
        self.a1 = 2.0 * (k * k - 1.0) * norm;
        self.a2 = (1.0 - k / q + k * k) * norm;
    }

    /// Copy coefficients from another biquad, leaving this one's state
    /// untouched.
    #[inline]
    pub fn copy_coefficients(&mut self, other: &Self) {
        self.freq = other.freq;
        self.q = other.q;
        self.b0 = other.b0;
        self.b1 = other.b1;
        self.b2 = other.b2;
        self.a1 = other.a1;
        self.a2 = other.a2;
    }

    /// Process one sample.
    #[inline]
    pub fn process(&mut self, input: f64) -> f64 {
        let output = input * self.b0 + self.state1;
        self.state1 = input * self.b1 - output * self.a1 + self.state2;
        self.state2 = input * self.b2 - output * self.a2;
        output
    }

    /// Feed-forward coefficients `(b0, b1, b2)`.
    pub fn feedforward(&self) -> (f64, f64, f64) {
        (self.b0, self.b1, self.b2)
    }

    /// Feedback coefficients `(a1, a2)`.
    pub fn feedback(&self) -> (f64, f64) {
        (self.a1, self.a2)
    }

    /// Persistent state `(state1, state2)`.
    pub fn state(&self) -> (f64, f64) {
        (self.state1, self.state2)
    }

    /// Clear the state, keeping coefficients.
    pub fn clear(&mut self) {
        self.state1 = 0.0;
        self.state2 = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficients_match_formula() {
        let biquad = ResonantBiquad::bandpass(0.0072, 0.0009);
        let k = tan(PI * 0.0072);
        let norm = 1.0 / (1.0 + k / 0.0009 + k * k);
        let (b0, b1, b2) = biquad.feedforward();
        let (a1, a2) = biquad.feedback();
        assert!((b0 - k / 0.0009 * norm).abs() < 1e-15);
        assert_eq!(b1, 0.0);
        assert_eq!(b2, -b0);
        assert!((a1 - 2.0 * (k * k - 1.0) * norm).abs() < 1e-15);
        assert!((a2 - (1.0 - k / 0.0009 + k * k) * norm).abs() < 1e-15);
    }

    #[test]
    fn test_rejects_dc() {
        let mut biquad = ResonantBiquad::bandpass(0.032, 0.0007);
        // One pole sits ~1.2e-4 from DC, so the step takes a while to die out.
        let mut output = 1.0;
        for _ in 0..400_000 {
            output = biquad.process(1.0);
        }
        assert!(output.abs() < 1e-3, "DC should be rejected, got {output}");
    }

    #[test]
    fn test_first_sample_is_b0() {
        let mut biquad = ResonantBiquad::bandpass(0.032, 0.0007);
        let (b0, _, _) = biquad.feedforward();
        assert_eq!(biquad.process(1.0), b0);
    }

    #[test]
    fn test_clear_keeps_coefficients() {
        let mut biquad = ResonantBiquad::bandpass(0.0072, 0.0009);
        let before = biquad.feedforward();
        for _ in 0..10 {
            biquad.process(0.5);
        }
        assert_ne!(biquad.state(), (0.0, 0.0));
        biquad.clear();
        assert_eq!(biquad.state(), (0.0, 0.0));
        assert_eq!(biquad.feedforward(), before);
    }

    #[test]
    fn test_copy_coefficients_keeps_state() {
        let source = ResonantBiquad::bandpass(0.016, 0.0009);
        let mut target = ResonantBiquad::bandpass(0.0072, 0.0009);
        target.process(0.25);
        let state = target.state();
        target.copy_coefficients(&source);
        assert_eq!(target.state(), state);
        assert_eq!(target.feedforward(), source.feedforward());
        assert_eq!(target.freq, 0.016);
    }
}
