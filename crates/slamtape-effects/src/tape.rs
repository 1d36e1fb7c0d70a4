//! Host-facing tape effects.
//!
//! [`Tape`] is a mono [`Effect`] with slam parameters. [`StereoTape`] runs two
//! fully independent [`TapeChannel`]s under one shared [`SlamControl`].

use slamtape_core::{Effect, ParamDescriptor, ParameterInfo};

use crate::channel::TapeChannel;
use crate::gain_stage::GainStage;
use crate::slam::SlamControl;

/// Mono tape saturation.
///
/// ## Parameter Indices (`ParameterInfo`)
///
/// | Index | Name | Range | Default |
/// |-------|------|-------|---------|
/// | 0 | Slam | 0.0–1.0 | 0.5 |
/// | 1 | Slam Trim | -1.0–1.0 | 0.0 |
///
/// # Example
///
/// ```rust
/// use slamtape_core::Effect;
/// use slamtape_effects::Tape;
///
/// let mut tape = Tape::new(48000.0);
/// tape.set_slam(0.8);
///
/// let mut buffer = [0.0, 1.0, 0.5, -0.5];
/// tape.process_block_inplace(&mut buffer);
/// assert!(buffer.iter().all(|s| s.is_finite()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tape {
    sample_rate: f64,
    slam: SlamControl,
    channel: TapeChannel,
}

impl Tape {
    /// Create a tape effect at `sample_rate` with default controls.
    pub fn new(sample_rate: f64) -> Self {
        Self {
            sample_rate,
            slam: SlamControl::new(),
            channel: TapeChannel::new(sample_rate),
        }
    }

    /// Set the slam knob (0–1).
    pub fn set_slam(&mut self, slam: f64) {
        self.slam.set_knob(slam);
    }

    /// Slam knob position.
    pub fn slam(&self) -> f64 {
        self.slam.knob()
    }

    /// Set the CV trim (-1–1).
    pub fn set_slam_trim(&mut self, trim: f64) {
        self.slam.set_trim(trim);
    }

    /// CV trim.
    pub fn slam_trim(&self) -> f64 {
        self.slam.trim()
    }

    /// Update the CV input in volts. Call once per frame when patched.
    #[inline]
    pub fn set_slam_cv(&mut self, volts: f64) {
        self.slam.set_cv(volts);
    }

    /// Resolved control passed to the channel.
    pub fn control(&self) -> f64 {
        self.slam.resolve()
    }

    /// Linear input gain at the current control.
    pub fn input_gain(&self) -> f64 {
        GainStage::from_control(self.control()).input_gain()
    }

    /// The slam control state.
    pub fn slam_control(&self) -> &SlamControl {
        &self.slam
    }

    /// The underlying channel.
    pub fn channel(&self) -> &TapeChannel {
        &self.channel
    }

    /// Current sample rate.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new(crate::coefficients::REFERENCE_RATE)
    }
}

impl Effect for Tape {
    #[inline]
    fn process(&mut self, input: f64) -> f64 {
        self.channel
            .process_sample(input, self.sample_rate, self.slam.resolve())
    }

    fn set_sample_rate(&mut self, sample_rate: f64) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            from = self.sample_rate,
            to = sample_rate,
            "tape coefficients re-derived"
        );
        self.sample_rate = sample_rate;
        self.channel.set_sample_rate(sample_rate);
    }

    fn reset(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(sample_rate = self.sample_rate, "tape state reset");
        self.channel.reset();
    }
}

impl ParameterInfo for Tape {
    fn param_count(&self) -> usize {
        self.slam.param_count()
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        self.slam.param_info(index)
    }

    fn get_param(&self, index: usize) -> f64 {
        self.slam.get_param(index)
    }

    fn set_param(&mut self, index: usize, value: f64) {
        self.slam.set_param(index, value);
    }
}

/// Stereo tape saturation with independent per-channel state.
///
/// ```rust
/// use slamtape_effects::StereoTape;
///
/// let mut tape = StereoTape::new(44100.0);
/// let (left, right) = tape.process_stereo(0.5, -0.5);
/// assert!(left.is_finite() && right.is_finite());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StereoTape {
    sample_rate: f64,
    slam: SlamControl,
    left: TapeChannel,
    right: TapeChannel,
}

impl StereoTape {
    /// Create a stereo tape effect at `sample_rate`.
    pub fn new(sample_rate: f64) -> Self {
        Self {
            sample_rate,
            slam: SlamControl::new(),
            left: TapeChannel::new(sample_rate),
            right: TapeChannel::new(sample_rate),
        }
    }

    /// Process one stereo frame.
    #[inline]
    pub fn process_stereo(&mut self, left: f64, right: f64) -> (f64, f64) {
        let control = self.slam.resolve();
        (
            self.left.process_sample(left, self.sample_rate, control),
            self.right.process_sample(right, self.sample_rate, control),
        )
    }

    /// Process a mono input duplicated to both channels.
    #[inline]
    pub fn process_mono(&mut self, input: f64) -> (f64, f64) {
        self.process_stereo(input, input)
    }

    /// Process two equal-length buffers in place.
    ///
    /// # Panics
    /// Debug builds panic if the buffers differ in length.
    pub fn process_block_stereo(&mut self, left: &mut [f64], right: &mut [f64]) {
        debug_assert_eq!(left.len(), right.len(), "channel buffers must have same length");
        for (l, r) in left.iter_mut().zip(right.iter_mut()) {
            (*l, *r) = self.process_stereo(*l, *r);
        }
    }

    /// Set the slam knob (0–1).
    pub fn set_slam(&mut self, slam: f64) {
        self.slam.set_knob(slam);
    }

    /// Set the CV trim (-1–1).
    pub fn set_slam_trim(&mut self, trim: f64) {
        self.slam.set_trim(trim);
    }

    /// Update the CV input in volts.
    #[inline]
    pub fn set_slam_cv(&mut self, volts: f64) {
        self.slam.set_cv(volts);
    }

    /// Resolved control shared by both channels.
    pub fn control(&self) -> f64 {
        self.slam.resolve()
    }

    /// Left and right channels.
    pub fn channels(&self) -> (&TapeChannel, &TapeChannel) {
        (&self.left, &self.right)
    }

    /// Mutable access to both channels, e.g. to run them on separate threads.
    pub fn channels_mut(&mut self) -> (&mut TapeChannel, &mut TapeChannel) {
        (&mut self.left, &mut self.right)
    }

    /// Re-derive coefficients on both channels.
    pub fn set_sample_rate(&mut self, sample_rate: f64) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            from = self.sample_rate,
            to = sample_rate,
            "stereo tape coefficients re-derived"
        );
        self.sample_rate = sample_rate;
        self.left.set_sample_rate(sample_rate);
        self.right.set_sample_rate(sample_rate);
    }

    /// Current sample rate.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Restore both channels to their fresh state.
    pub fn reset(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(sample_rate = self.sample_rate, "stereo tape state reset");
        self.left.reset();
        self.right.reset();
    }
}

impl Default for StereoTape {
    fn default() -> Self {
        Self::new(crate::coefficients::REFERENCE_RATE)
    }
}

impl ParameterInfo for StereoTape {
    fn param_count(&self) -> usize {
        self.slam.param_count()
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        self.slam.param_info(index)
    }

    fn get_param(&self, index: usize) -> f64 {
        self.slam.get_param(index)
    }

    fn set_param(&mut self, index: usize, value: f64) {
        self.slam.set_param(index, value);
    }
}
