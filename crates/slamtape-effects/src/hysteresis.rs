//! Output limiter with memory of the previous sample.
//!
//! A plain clamp at ±0.99 produces a hard corner whenever the signal crosses
//! the ceiling. Here, a sample that crosses is replaced by a blend of the
//! ceiling and the previous output, weighted by the golden-ratio softness, so
//! the output approaches the ceiling over a few samples. Once the previous
//! output is pinned at the ceiling, the ceiling is held exactly.
//!
//! ```text
//! if last ≥  0.99: last = x <  0.99 ? 0.99·s + x·(1−s) :  0.99
//! if last ≤ −0.99: last = x > −0.99 ? −0.99·s + x·(1−s) : −0.99
//! if x >  0.99:    x = last <  0.99 ? 0.99·s + last·(1−s) :  0.99
//! if x < −0.99:    x = last > −0.99 ? −0.99·s + last·(1−s) : −0.99
//! last = x
//! out  = clamp(x, −0.99, 0.99)
//! ```

use crate::coefficients::SOFTNESS;

/// Output ceiling in the padded domain.
pub const CEILING: f64 = 0.99;

/// Hysteresis limiter state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HysteresisLimiter {
    last: f64,
}

impl HysteresisLimiter {
    /// Create a limiter with zero history.
    pub const fn new() -> Self {
        Self { last: 0.0 }
    }

    /// Limit one sample.
    #[inline]
    pub fn process(&mut self, input: f64) -> f64 {
        let mut x = input;
        let mut last = self.last;

        if last >= CEILING {
            last = if x < CEILING {
                CEILING * SOFTNESS + x * (1.0 - SOFTNESS)
            } else {
                CEILING
            };
        }
        if last <= -CEILING {
            last = if x > -CEILING {
                -CEILING * SOFTNESS + x * (1.0 - SOFTNESS)
            } else {
                -CEILING
            };
        }
        if x > CEILING {
            x = if last < CEILING {
                CEILING * SOFTNESS + last * (1.0 - SOFTNESS)
            } else {
                CEILING
            };
        }
        if x < -CEILING {
            x = if last > -CEILING {
                -CEILING * SOFTNESS + last * (1.0 - SOFTNESS)
            } else {
                -CEILING
            };
        }

        self.last = x;
        x.clamp(-CEILING, CEILING)
    }

    /// Previous output before the final clamp.
    #[inline]
    pub fn last(&self) -> f64 {
        self.last
    }

    /// Forget the previous output.
    pub fn reset(&mut self) {
        self.last = 0.0;
    }
}
