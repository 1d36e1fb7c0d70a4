//! Slam control: knob, CV trim, and CV input resolved to one value.
//!
//! ```text
//! control = clamp(cv · trim / 10 + knob, 0.01, 0.99)
//! ```
//!
//! The knob and trim are parameters (see [`ParameterInfo`]); the CV is a
//! signal the host updates every frame.

use slamtape_core::{ParamDescriptor, ParamFlags, ParamId, ParamUnit, ParameterInfo};

/// Lowest resolved control value.
pub const CONTROL_MIN: f64 = 0.01;

/// Highest resolved control value.
pub const CONTROL_MAX: f64 = 0.99;

/// Volts that move the control across its full range at unity trim.
pub const CV_FULL_SCALE: f64 = 10.0;

/// Parameter index of the slam knob.
pub const SLAM_PARAM: usize = 0;

/// Parameter index of the CV trim.
pub const SLAM_TRIM_PARAM: usize = 1;

const SLAM: ParamDescriptor = ParamDescriptor::unit_range("Slam", "Slam", 0.5)
    .with_id(ParamId(100), "slam")
    .with_unit(ParamUnit::Percent)
    .with_flags(ParamFlags::AUTOMATABLE.union(ParamFlags::MODULATABLE));

const SLAM_TRIM: ParamDescriptor =
    ParamDescriptor::bipolar("Slam Trim", "Trim").with_id(ParamId(101), "slam_trim");

/// Knob, trim, and CV state for the slam amount.
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
/// use slamtape_effects::SlamControl;
///
/// let mut slam = SlamControl::new();
/// assert_eq!(slam.resolve(), 0.5);
///
/// slam.set_trim(1.0);
/// slam.set_cv(2.0);
/// assert!((slam.resolve() - 0.7).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlamControl {
    knob: f64,
    trim: f64,
    cv: f64,
}

impl SlamControl {
    /// Knob at center, no trim, no CV.
    pub const fn new() -> Self {
        Self {
            knob: SLAM.default,
            trim: SLAM_TRIM.default,
            cv: 0.0,
        }
    }

    /// Set the knob position, clamped to `[0, 1]`.
    pub fn set_knob(&mut self, knob: f64) {
        self.knob = SLAM.clamp(knob);
    }

    /// Knob position.
    pub fn knob(&self) -> f64 {
        self.knob
    }

    /// Set the CV trim, clamped to `[-1, 1]`.
    pub fn set_trim(&mut self, trim: f64) {
        self.trim = SLAM_TRIM.clamp(trim);
    }

    /// CV trim.
    pub fn trim(&self) -> f64 {
        self.trim
    }

    /// Set the CV input in volts. Non-finite voltages read as 0.
    pub fn set_cv(&mut self, volts: f64) {
        self.cv = if volts.is_finite() { volts } else { 0.0 };
    }

    /// CV input in volts.
    pub fn cv(&self) -> f64 {
        self.cv
    }

    /// Resolved control in `[CONTROL_MIN, CONTROL_MAX]`.
    #[inline]
    pub fn resolve(&self) -> f64 {
        (self.cv * self.trim / CV_FULL_SCALE + self.knob).clamp(CONTROL_MIN, CONTROL_MAX)
    }
}

impl Default for SlamControl {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterInfo for SlamControl {
    fn param_count(&self) -> usize {
        2
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        match index {
            SLAM_PARAM => Some(SLAM),
            SLAM_TRIM_PARAM => Some(SLAM_TRIM),
            _ => None,
        }
    }

    fn get_param(&self, index: usize) -> f64 {
        match index {
            SLAM_PARAM => self.knob,
            SLAM_TRIM_PARAM => self.trim,
            _ => 0.0,
        }
    }

    fn set_param(&mut self, index: usize, value: f64) {
        match index {
            SLAM_PARAM => self.set_knob(value),
            SLAM_TRIM_PARAM => self.set_trim(value),
            _ => {}
        }
    }
}
