//! Presets and parameter validation for the slamtape saturator.
//!
//! A preset stores the slam knob, the CV trim, and a sample rate hint as
//! TOML. Presets resolve from the built-in factory set, from a file path, or
//! from the user presets directory.
//!
//! # Example
//!
//! ```rust,no_run
//! use slamtape_config::{Preset, user_presets_dir};
//!
//! let preset = Preset::resolve("warm").unwrap();
//! let mut tape = preset.build(44100.0).unwrap();
//!
//! let custom = Preset::new("Mix Bus")
//!     .with_description("Light glue for the 2-bus")
//!     .with_slam(0.55);
//! custom.save(user_presets_dir().join("mix_bus.toml")).unwrap();
//! # let _ = &mut tape;
//! ```

mod error;
mod preset;

/// Platform-specific preset locations.
pub mod paths;

/// Preset and parameter validation.
pub mod validation;

/// Factory presets bundled with the library.
pub mod factory_presets;

pub use error::ConfigError;
pub use factory_presets::{
    FACTORY_PRESET_NAMES, factory_preset_names, factory_presets, get_factory_preset,
    is_factory_preset,
};
pub use paths::{
    ensure_user_presets_dir, find_preset, find_preset_in, list_presets_in_dir, list_user_presets,
    preset_name_from_path, user_presets_dir,
};
pub use preset::Preset;
pub use validation::{
    MAX_SAMPLE_RATE, MIN_SAMPLE_RATE, ParamValidationInfo, ValidationError, ValidationResult,
    find_param, tape_params, validate_param, validate_preset, validate_sample_rate,
};
