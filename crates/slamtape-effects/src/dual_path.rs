//! Two alternating copies of the tape filter state.
//!
//! Consecutive samples are handled by different [`PathState`]s, selected by a
//! parity flag that toggles after every sample. Each path therefore runs at
//! half the sample rate over interleaved samples, which is what gives the
//! head-bump and highs filters their character. The flag starts cleared, so
//! [`Path::B`] handles the first sample.

use slamtape_core::{OnePole, ResonantBiquad, sin_asin_shape};

use crate::coefficients::TapeCoefficients;
use crate::head_bump::HeadBump;

/// Which path copy a sample is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Path {
    /// Runs on every second sample, starting with the second.
    A,
    /// Runs on every second sample, starting with the first.
    B,
}

impl Path {
    /// Index into [`DualPathBank::paths`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

/// Filter state owned by one path.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PathState {
    /// Slow one-pole split point between "highs" and the rest.
    pub mid_roller: OnePole,
    /// Head-bump accumulator and its biquad.
    pub head_bump: HeadBump,
    /// Band-pass applied to the sin-folded input.
    pub highs: ResonantBiquad,
}

impl PathState {
    fn new(coefficients: &TapeCoefficients) -> Self {
        let mut highs = ResonantBiquad::default();
        highs.copy_coefficients(coefficients.highs());
        Self {
            mid_roller: OnePole::new(),
            head_bump: HeadBump::new(coefficients.head()),
            highs,
        }
    }

    fn set_coefficients(&mut self, coefficients: &TapeCoefficients) {
        self.head_bump.set_coefficients(coefficients.head());
        self.highs.copy_coefficients(coefficients.highs());
    }

    fn reset(&mut self) {
        self.mid_roller.reset();
        self.head_bump.reset();
        self.highs.clear();
    }
}

/// Result of running one sample through the active path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathOutput {
    /// Fast residual above the mid roller.
    pub highs: f64,
    /// The input after `sin`, the highs band-pass, and `asin`.
    pub filtered: f64,
}

/// The pair of alternating paths plus the parity flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualPathBank {
    paths: [PathState; 2],
    flip: bool,
}

impl DualPathBank {
    /// Create both paths with zeroed state.
    pub fn new(coefficients: &TapeCoefficients) -> Self {
        Self {
            paths: [PathState::new(coefficients); 2],
            flip: false,
        }
    }

    /// The path the next call to [`process`](Self::process) will use.
    #[inline]
    pub fn next_path(&self) -> Path {
        if self.flip { Path::A } else { Path::B }
    }

    /// Both path states, indexed by [`Path::index`].
    pub fn paths(&self) -> &[PathState; 2] {
        &self.paths
    }

    /// Run one sample through the active path, then toggle the flag.
    #[inline]
    pub fn process(&mut self, input: f64, coefficients: &TapeCoefficients) -> PathOutput {
        let path = &mut self.paths[self.next_path().index()];

        let slow = path.mid_roller.process(input, coefficients.roll_amount());
        let highs = input - slow;

        path.head_bump.process(input, coefficients.head_bump_freq());

        let filtered = sin_asin_shape(path.highs.process(libm::sin(input)));

        self.flip = !self.flip;
        PathOutput { highs, filtered }
    }

    /// Sum of both head-bump accumulators.
    #[inline]
    pub fn head_bump_sum(&self) -> f64 {
        self.paths[0].head_bump.value() + self.paths[1].head_bump.value()
    }

    /// Restrain both head-bump accumulators by `suppress`.
    #[inline]
    pub fn restrain_head_bumps(&mut self, suppress: f64) {
        for path in &mut self.paths {
            path.head_bump.restrain(suppress);
        }
    }

    /// Swap in coefficients for a new sample rate, keeping all state.
    pub fn set_coefficients(&mut self, coefficients: &TapeCoefficients) {
        for path in &mut self.paths {
            path.set_coefficients(coefficients);
        }
    }

    /// Zero all state and clear the parity flag.
    pub fn reset(&mut self) {
        for path in &mut self.paths {
            path.reset();
        }
        self.flip = false;
    }
}

impl Default for DualPathBank {
    fn default() -> Self {
        Self::new(&TapeCoefficients::default())
    }
}
