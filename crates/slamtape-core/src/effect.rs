//! Core Effect trait.
//!
//! The [`Effect`] trait is the seam between a host runtime and a processor.
//! The host owns the audio callback and calls into the effect once per frame
//! (or once per block, which is the same thing unrolled).
//!
//! ## Design Decisions
//!
//! - **Mono processing**: Single `f64` input/output. Stereo is built from two
//!   fully independent mono instances so no state leaks between channels.
//!
//! - **Object-safe**: `dyn Effect` works for hosts that pick processors at
//!   runtime. Generic dispatch is preferred on the hot path.
//!
//! - **No allocations**: Every method is callable from a real-time audio
//!   thread.

/// Core trait for all audio processors.
///
/// # Example
///
/// ```rust
/// use slamtape_core::Effect;
///
/// struct Gain {
///     gain: f64,
/// }
///
/// impl Effect for Gain {
///     fn process(&mut self, input: f64) -> f64 {
///         input * self.gain
///     }
///
///     fn set_sample_rate(&mut self, _sample_rate: f64) {}
///
///     fn reset(&mut self) {}
/// }
/// ```
pub trait Effect {
    /// Process a single sample, advancing internal state by one frame.
    fn process(&mut self, input: f64) -> f64;

    /// Process a block of samples.
    ///
    /// Default implementation calls `process()` for each sample.
    ///
    /// # Panics
    /// Debug builds panic if `input.len() != output.len()`.
    fn process_block(&mut self, input: &[f64], output: &mut [f64]) {
        debug_assert_eq!(
            input.len(),
            output.len(),
            "Input and output buffers must have same length"
        );
        for (inp, out) in input.iter().zip(output.iter_mut()) {
            *out = self.process(*inp);
        }
    }

    /// Process a block of samples in-place.
    fn process_block_inplace(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Update the sample rate.
    ///
    /// Effects recalculate any sample-rate-dependent coefficients here.
    fn set_sample_rate(&mut self, sample_rate: f64);

    /// Reset internal state to its freshly constructed value without
    /// touching parameters.
    fn reset(&mut self);

    /// Processing latency in samples. Default is 0.
    fn latency_samples(&self) -> usize {
        0
    }
}
