//! Floating-point dither scaled to the sample's own exponent.
//!
//! A fixed noise floor is audible on quiet material. Instead the noise here is
//! scaled by `2^(exponent + 62)`, where `exponent` is the binary exponent of
//! the sample being dithered, so the injected noise always sits a fixed number
//! of bits below the sample's own magnitude:
//!
//! ```text
//! noise = (state − 0x7fffffff) · 1.1e-44 · 2^(exponent + 62)
//! ```
//!
//! The generator is a 32-bit xorshift (13, 17, 5). It has full period over all
//! nonzero states and never reaches zero from a nonzero seed.
//!
//! Each channel owns its own [`FloatDither`]. Sharing one generator between
//! channels couples their outputs and breaks channel independence.

use libm::{frexp, scalbn};

/// Seed every channel starts from.
pub const DITHER_SEED: u32 = 17;

/// Inputs with magnitude below this are replaced by `state × DENORMAL_FLOOR`.
pub const DENORMAL_FLOOR: f64 = 1.18e-43;

const NOISE_SCALE: f64 = 1.1e-44;
const NOISE_CENTER: f64 = 0x7fff_ffff as f64;

/// 32-bit xorshift generator (shifts 13, 17, 5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Create a generator. A zero seed is replaced by [`DITHER_SEED`] since
    /// zero is the one fixed point of the update.
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { DITHER_SEED } else { seed },
        }
    }

    /// Advance and return the new state.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut s = self.state;
        s ^= s << 13;
        s ^= s >> 17;
        s ^= s << 5;
        self.state = s;
        s
    }

    /// Current state without advancing.
    #[inline]
    pub const fn state(&self) -> u32 {
        self.state
    }
}

impl Default for Xorshift32 {
    fn default() -> Self {
        Self::new(DITHER_SEED)
    }
}

/// Per-channel exponent-scaled dither.
///
/// # Example
///
/// ```rust
/// use slamtape_core::FloatDither;
///
/// let mut dither = FloatDither::new();
/// let out = dither.apply(0.5);
/// assert!((out - 0.5).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloatDither {
    rng: Xorshift32,
}

impl FloatDither {
    /// Create a dither engine from the standard seed.
    pub const fn new() -> Self {
        Self {
            rng: Xorshift32::new(DITHER_SEED),
        }
    }

    /// Create a dither engine from an explicit seed.
    pub const fn with_seed(seed: u32) -> Self {
        Self {
            rng: Xorshift32::new(seed),
        }
    }

    /// Current generator state.
    #[inline]
    pub const fn state(&self) -> u32 {
        self.rng.state()
    }

    /// Replace near-zero input with a tiny state-derived value so recursive
    /// filters never run on a true zero.
    #[inline]
    pub fn floor(&self, sample: f64) -> f64 {
        if sample.abs() < DENORMAL_FLOOR {
            f64::from(self.rng.state()) * DENORMAL_FLOOR
        } else {
            sample
        }
    }

    /// Advance the generator and add noise scaled to `sample`'s exponent.
    #[inline]
    pub fn apply(&mut self, sample: f64) -> f64 {
        let (_, exponent) = frexp(sample);
        let s = self.rng.next_u32();
        sample + (f64::from(s) - NOISE_CENTER) * NOISE_SCALE * scalbn(1.0, exponent + 62)
    }

    /// Restore the seeded state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
