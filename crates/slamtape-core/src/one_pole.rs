//! One-pole smoother with an explicit blend amount.
//!
//! ```text
//! y[n] = y[n-1]·(1 − amount) + x[n]·amount
//! ```
//!
//! `amount` near 0 is a very slow smoother, 1 passes the input straight
//! through. The tape pipeline drives this with a golden-ratio-derived roll
//! amount scaled by sample rate, splitting the input into a slow component
//! (the smoother output) and a fast residual (`input − output`).
//!
//! # Usage
//!
//! ```rust
//! use slamtape_core::OnePole;
//!
//! let mut roller = OnePole::new();
//! let slow = roller.process(1.0, 0.25);
//! assert_eq!(slow, 0.25);
//! ```

/// One-pole (6 dB/oct) lowpass whose coefficient is supplied per call.
///
/// The blend amount is a pure function of sample rate in every caller, so it
/// lives with the caller's coefficient set rather than inside the filter.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OnePole {
    state: f64,
}

impl OnePole {
    /// Create a smoother at rest.
    pub const fn new() -> Self {
        Self { state: 0.0 }
    }

    /// Advance by one sample and return the smoothed value.
    #[inline]
    pub fn process(&mut self, input: f64, amount: f64) -> f64 {
        self.state = self.state * (1.0 - amount) + input * amount;
        self.state
    }

    /// Current smoothed value.
    #[inline]
    pub fn value(&self) -> f64 {
        self.state
    }

    /// Reset the state to zero.
    pub fn reset(&mut self) {
        self.state = 0.0;
    }
}
