//! Input gain staging for the slam control.
//!
//! The control maps to ±12 dB around unity:
//!
//! ```text
//! input_gain = 10^(((control − 0.5) × 24) / 20)
//! ```
//!
//! Cuts are applied to the incoming sample before anything else, so the dry
//! copy taken for the ground path is already attenuated. Boosts are deferred
//! until after the ground difference has been captured, which keeps the
//! unfiltered low end at its original level while the saturating branch is
//! pushed harder.

use slamtape_core::db_to_linear;

/// Padding applied to host-level signals before processing (2⁻¹⁶).
pub const GAIN_CUT: f64 = 1.0 / 65536.0;

/// Restores host level after processing (2¹⁶).
pub const GAIN_BOOST: f64 = 65536.0;

/// Resolved input gain for one control value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GainStage {
    input_gain: f64,
}

impl GainStage {
    /// Derive the stage from a slam control in `[0.01, 0.99]`.
    #[inline]
    pub fn from_control(control: f64) -> Self {
        Self {
            input_gain: db_to_linear((control - 0.5) * 24.0),
        }
    }

    /// Linear input gain.
    #[inline]
    pub fn input_gain(&self) -> f64 {
        self.input_gain
    }

    /// Apply the gain if it is a cut, otherwise pass through.
    #[inline]
    pub fn pre_attenuate(&self, sample: f64) -> f64 {
        if self.input_gain < 1.0 {
            sample * self.input_gain
        } else {
            sample
        }
    }

    /// Apply the gain if it is a boost, otherwise pass through.
    #[inline]
    pub fn deferred_boost(&self, sample: f64) -> f64 {
        if self.input_gain > 1.0 {
            sample * self.input_gain
        } else {
            sample
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_unity() {
        let stage = GainStage::from_control(0.5);
        assert_eq!(stage.input_gain(), 1.0);
        assert_eq!(stage.pre_attenuate(0.3), 0.3);
        assert_eq!(stage.deferred_boost(0.3), 0.3);
    }

    #[test]
    fn test_extremes() {
        let low = GainStage::from_control(0.01);
        let high = GainStage::from_control(0.99);
        assert!((low.input_gain() - 0.258_226).abs() < 1e-5);
        assert!((high.input_gain() - 3.872_576).abs() < 1e-5);
    }

    #[test]
    fn test_control_spans_24_db() {
        // 0.25 control steps are 6 dB
        for (control, db) in [(0.25, -6.0), (0.75, 6.0), (1.0, 12.0)] {
            let gain = GainStage::from_control(control).input_gain();
            assert_eq!(gain, db_to_linear(db), "control {control}");
        }
        assert!((GainStage::from_control(0.75).input_gain() - 1.995_262_314_968_88).abs() < 1e-12);
    }

    #[test]
    fn test_cut_and_boost_are_exclusive() {
        let cut = GainStage::from_control(0.2);
        assert!(cut.pre_attenuate(1.0) < 1.0);
        assert_eq!(cut.deferred_boost(1.0), 1.0);

        let boost = GainStage::from_control(0.8);
        assert_eq!(boost.pre_attenuate(1.0), 1.0);
        assert!(boost.deferred_boost(1.0) > 1.0);
    }

    #[test]
    fn test_gain_strictly_increasing() {
        let mut previous = 0.0;
        for step in 0..=98 {
            let control = 0.01 + f64::from(step) * 0.01;
            let gain = GainStage::from_control(control).input_gain();
            assert!(gain > previous, "gain not increasing at {control}");
            previous = gain;
        }
    }

    #[test]
    fn test_pad_and_restore_cancel() {
        assert_eq!(GAIN_CUT * GAIN_BOOST, 1.0);
    }
}
