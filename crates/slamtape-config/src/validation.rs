//! Preset and parameter validation.
//!
//! Parameter ranges come from the [`Tape`] parameter descriptors, so a preset
//! is valid exactly when every value would be stored unclamped.
//!
//! # Example
//!
//! ```rust
//! use slamtape_config::{Preset, validate_param, validate_preset};
//!
//! validate_param("slam", 0.7).expect("slam is a tape parameter");
//! assert!(validate_param("slam_trim", 2.0).is_err());
//!
//! let preset = Preset::new("Hot").with_slam(0.8);
//! validate_preset(&preset).expect("preset should be valid");
//! ```

use slamtape_core::{ParamDescriptor, ParameterInfo};
use slamtape_effects::Tape;
use thiserror::Error;

/// Lowest accepted preset sample rate in Hz.
pub const MIN_SAMPLE_RATE: u32 = 8000;

/// Highest accepted preset sample rate in Hz.
pub const MAX_SAMPLE_RATE: u32 = 768_000;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Name does not match any tape parameter.
    #[error("unknown parameter '{0}'")]
    UnknownParameter(String),

    /// Parameter value out of range.
    #[error("parameter '{param}' value {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Stable string ID of the parameter.
        param: String,
        /// The value that was out of range.
        value: f64,
        /// Minimum allowed value.
        min: f64,
        /// Maximum allowed value.
        max: f64,
    },

    /// Value that can never be in range (NaN or infinite).
    #[error("invalid value for parameter '{param}': {reason}")]
    InvalidFormat {
        /// Stable string ID of the parameter.
        param: String,
        /// Description of the problem.
        reason: String,
    },

    /// Sample rate outside the supported band.
    #[error("sample rate {0} Hz outside [{min}, {max}]", min = MIN_SAMPLE_RATE, max = MAX_SAMPLE_RATE)]
    InvalidSampleRate(u32),

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Tape parameter metadata for validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamValidationInfo {
    /// Stable string ID used as the preset key.
    pub name: String,
    /// Parameter index on [`Tape`].
    pub index: usize,
    /// Descriptor the tape reports for this index.
    pub descriptor: ParamDescriptor,
}

/// Parameter metadata for every tape parameter, in index order.
pub fn tape_params() -> Vec<ParamValidationInfo> {
    let tape = Tape::default();
    (0..tape.param_count())
        .filter_map(|index| {
            tape.param_info(index).map(|descriptor| ParamValidationInfo {
                name: descriptor.string_id.to_string(),
                index,
                descriptor,
            })
        })
        .collect()
}

/// Look up a tape parameter by name, short name, or string ID.
pub fn find_param(name: &str) -> Option<ParamValidationInfo> {
    let tape = Tape::default();
    let index = tape.find_param_by_name(name)?;
    tape_params().into_iter().find(|info| info.index == index)
}

/// Check that `value` is a storable value for the parameter `name`.
pub fn validate_param(name: &str, value: f64) -> ValidationResult<()> {
    let info = find_param(name).ok_or_else(|| ValidationError::UnknownParameter(name.to_string()))?;

    if !value.is_finite() {
        return Err(ValidationError::InvalidFormat {
            param: info.name,
            reason: format!("{value} is not a finite number"),
        });
    }
    if !info.descriptor.contains(value) {
        return Err(ValidationError::OutOfRange {
            param: info.name,
            value,
            min: info.descriptor.min,
            max: info.descriptor.max,
        });
    }
    Ok(())
}

/// Check that a preset sample rate is supported.
pub fn validate_sample_rate(sample_rate: u32) -> ValidationResult<()> {
    if (MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&sample_rate) {
        Ok(())
    } else {
        Err(ValidationError::InvalidSampleRate(sample_rate))
    }
}

/// Validate every field of a preset, collecting all failures.
pub fn validate_preset(preset: &crate::Preset) -> ValidationResult<()> {
    let mut errors: Vec<ValidationError> = [
        validate_sample_rate(preset.sample_rate),
        validate_param("slam", preset.slam),
        validate_param("slam_trim", preset.slam_trim),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect();

    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Preset;

    #[test]
    fn tape_params_match_descriptors() {
        let params = tape_params();
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name, "slam");
        let slam = params[0].descriptor;
        assert_eq!((slam.min, slam.max, slam.default), (0.0, 1.0, 0.5));
        assert_eq!(slam.unit, slamtape_core::ParamUnit::Percent);
        assert_eq!(params[1].name, "slam_trim");
        let trim = params[1].descriptor;
        assert_eq!((trim.min, trim.max, trim.default), (-1.0, 1.0, 0.0));
    }

    #[test]
    fn find_param_accepts_display_names() {
        assert_eq!(find_param("Slam Trim").map(|p| p.index), Some(1));
        assert_eq!(find_param("trim").map(|p| p.index), Some(1));
        assert_eq!(find_param("SLAM").map(|p| p.index), Some(0));
        assert!(find_param("bias").is_none());
    }

    #[test]
    fn validate_param_range() {
        assert!(validate_param("slam", 0.0).is_ok());
        assert!(validate_param("slam", 1.0).is_ok());
        assert!(validate_param("slam_trim", -1.0).is_ok());
        assert!(validate_param("slam_trim", 1.0).is_ok());
        assert!(validate_param("slam", -1e-12).is_err());
        assert!(validate_param("slam_trim", 1.0 + f64::EPSILON).is_err());
        assert_eq!(
            validate_param("slam", 1.5),
            Err(ValidationError::OutOfRange {
                param: "slam".to_string(),
                value: 1.5,
                min: 0.0,
                max: 1.0,
            })
        );
    }

    #[test]
    fn validate_param_rejects_non_finite() {
        assert!(matches!(
            validate_param("slam", f64::NAN),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            validate_param("slam_trim", f64::INFINITY),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn validate_param_unknown() {
        assert_eq!(
            validate_param("wow", 0.1),
            Err(ValidationError::UnknownParameter("wow".to_string()))
        );
    }

    #[test]
    fn sample_rate_band() {
        assert!(validate_sample_rate(44100).is_ok());
        assert!(validate_sample_rate(MIN_SAMPLE_RATE).is_ok());
        assert!(validate_sample_rate(MAX_SAMPLE_RATE).is_ok());
        assert_eq!(validate_sample_rate(0), Err(ValidationError::InvalidSampleRate(0)));
        assert!(validate_sample_rate(1_000_000).is_err());
    }

    #[test]
    fn preset_single_error_is_unwrapped() {
        let preset = Preset::new("Bad").with_slam(2.0);
        assert!(matches!(
            validate_preset(&preset),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn preset_collects_all_errors() {
        let preset = Preset::new("Worse")
            .with_sample_rate(100)
            .with_slam(-0.5)
            .with_slam_trim(3.0);
        match validate_preset(&preset) {
            Err(ValidationError::Multiple(errors)) => assert_eq!(errors.len(), 3),
            other => panic!("expected Multiple, got {other:?}"),
        }
    }

    #[test]
    fn multiple_display_joins() {
        let err = ValidationError::Multiple(vec![
            ValidationError::UnknownParameter("a".to_string()),
            ValidationError::InvalidSampleRate(1),
        ]);
        assert_eq!(
            err.to_string(),
            "multiple validation errors: unknown parameter 'a'; sample rate 1 Hz outside [8000, 768000]"
        );
    }
}
