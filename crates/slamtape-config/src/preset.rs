//! Preset file format and operations.

use serde::{Deserialize, Serialize};
use slamtape_core::ParameterInfo;
use slamtape_effects::{SLAM_PARAM, SLAM_TRIM_PARAM, Tape};
use std::path::Path;

use crate::error::ConfigError;
use crate::factory_presets::get_factory_preset;
use crate::paths::find_preset;
use crate::validation::validate_preset;

/// Stored slam settings for a [`Tape`].
///
/// # TOML Format
///
/// ```toml
/// name = "Warm"
/// description = "Gentle head bump"
/// sample_rate = 48000
/// slam = 0.4
/// slam_trim = 0.0
/// ```
///
/// Every field except `name` is optional and falls back to the tape defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Sample rate hint (defaults to 48000). The host rate wins at runtime.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Slam knob position, 0 to 1.
    #[serde(default = "default_slam")]
    pub slam: f64,

    /// CV trim, -1 to 1.
    #[serde(default)]
    pub slam_trim: f64,
}

fn default_sample_rate() -> u32 {
    48000
}

fn default_slam() -> f64 {
    0.5
}

impl Preset {
    /// Create a preset at the tape defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            sample_rate: default_sample_rate(),
            slam: default_slam(),
            slam_trim: 0.0,
        }
    }

    /// Capture the current controls of a tape.
    pub fn from_tape(name: impl Into<String>, tape: &Tape) -> Self {
        Self {
            name: name.into(),
            description: None,
            sample_rate: tape.sample_rate() as u32,
            slam: tape.get_param(SLAM_PARAM),
            slam_trim: tape.get_param(SLAM_TRIM_PARAM),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the sample rate hint.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Set the slam knob.
    pub fn with_slam(mut self, slam: f64) -> Self {
        self.slam = slam;
        self
    }

    /// Set the CV trim.
    pub fn with_slam_trim(mut self, trim: f64) -> Self {
        self.slam_trim = trim;
        self
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let preset: Preset = toml::from_str(&content)?;
        tracing::info!(path = %path.display(), name = %preset.name, "loaded preset");
        Ok(preset)
    }

    /// Load a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Resolve a factory preset name, a file path, or a user preset name.
    pub fn resolve(name: &str) -> Result<Self, ConfigError> {
        if let Some(preset) = get_factory_preset(name) {
            tracing::debug!(name, "resolved factory preset");
            return Ok(preset);
        }
        match find_preset(name) {
            Some(path) => Self::load(path),
            None => Err(ConfigError::PresetNotFound(name.to_string())),
        }
    }

    /// Save the preset to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        tracing::info!(path = %path.display(), name = %self.name, "saved preset");
        Ok(())
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every field against the tape parameter ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_preset(self)?;
        Ok(())
    }

    /// Validate, then write the controls into `tape`.
    ///
    /// The tape keeps its own sample rate and signal state.
    pub fn apply(&self, tape: &mut Tape) -> Result<(), ConfigError> {
        if let Err(err) = validate_preset(self) {
            tracing::warn!(name = %self.name, error = %err, "rejected preset");
            return Err(err.into());
        }
        tape.set_param(SLAM_PARAM, self.slam);
        tape.set_param(SLAM_TRIM_PARAM, self.slam_trim);
        tracing::debug!(name = %self.name, slam = self.slam, slam_trim = self.slam_trim, "applied preset");
        Ok(())
    }

    /// Validate, then build a fresh tape at `sample_rate`.
    pub fn build(&self, sample_rate: f64) -> Result<Tape, ConfigError> {
        let mut tape = Tape::new(sample_rate);
        self.apply(&mut tape)?;
        Ok(tape)
    }

    /// Validate, then build a fresh tape at the preset's own sample rate.
    pub fn build_at_hint(&self) -> Result<Tape, ConfigError> {
        self.build(f64::from(self.sample_rate))
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;

    #[test]
    fn test_preset_new() {
        let preset = Preset::new("Test Preset");
        assert_eq!(preset.name, "Test Preset");
        assert!(preset.description.is_none());
        assert_eq!(preset.sample_rate, 48000);
        assert_eq!(preset.slam, 0.5);
        assert_eq!(preset.slam_trim, 0.0);
    }

    #[test]
    fn test_preset_builder() {
        let preset = Preset::new("Hot")
            .with_description("Pushed hard")
            .with_sample_rate(44100)
            .with_slam(0.85)
            .with_slam_trim(-0.25);

        assert_eq!(preset.description.as_deref(), Some("Pushed hard"));
        assert_eq!(preset.sample_rate, 44100);
        assert_eq!(preset.slam, 0.85);
        assert_eq!(preset.slam_trim, -0.25);
    }

    #[test]
    fn test_preset_from_toml() {
        let toml = r#"
name = "Warm"
description = "Gentle head bump"
sample_rate = 44100
slam = 0.4
slam_trim = 0.25
"#;
        let preset = Preset::from_toml(toml).unwrap();
        assert_eq!(preset.name, "Warm");
        assert_eq!(preset.description.as_deref(), Some("Gentle head bump"));
        assert_eq!(preset.sample_rate, 44100);
        assert_eq!(preset.slam, 0.4);
        assert_eq!(preset.slam_trim, 0.25);
    }

    #[test]
    fn test_minimal_toml() {
        let preset = Preset::from_toml("name = \"Minimal\"").unwrap();
        assert_eq!(preset, Preset::new("Minimal"));
    }

    #[test]
    fn test_missing_name_fails() {
        assert!(matches!(
            Preset::from_toml("slam = 0.3"),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_preset_to_toml() {
        let toml = Preset::new("Test")
            .with_description("Test description")
            .with_slam(0.75)
            .to_toml()
            .unwrap();
        assert!(toml.contains("name = \"Test\""));
        assert!(toml.contains("description = \"Test description\""));
        assert!(toml.contains("slam = 0.75"));
        assert!(toml.contains("slam_trim = 0.0"));
    }

    #[test]
    fn test_description_omitted_when_none() {
        let toml = Preset::new("Bare").to_toml().unwrap();
        assert!(!toml.contains("description"));
    }

    #[test]
    fn test_apply_sets_params() {
        let mut tape = Tape::new(44100.0);
        Preset::new("Driven")
            .with_slam(0.9)
            .with_slam_trim(0.5)
            .apply(&mut tape)
            .unwrap();
        assert_eq!(tape.slam(), 0.9);
        assert_eq!(tape.slam_trim(), 0.5);
        assert_eq!(tape.sample_rate(), 44100.0);
    }

    #[test]
    fn test_apply_rejects_invalid() {
        let mut tape = Tape::new(44100.0);
        let err = Preset::new("Broken").with_slam(1.5).apply(&mut tape).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Validation(ValidationError::OutOfRange { .. })
        ));
        assert_eq!(tape.slam(), 0.5, "tape must be untouched on error");
    }

    #[test]
    fn test_capture_round_trip() {
        let mut tape = Tape::new(96000.0);
        tape.set_slam(0.3);
        tape.set_slam_trim(-0.75);
        let preset = Preset::from_tape("Captured", &tape);
        assert_eq!(preset.sample_rate, 96000);
        let rebuilt = preset.build_at_hint().unwrap();
        assert_eq!(rebuilt.slam(), 0.3);
        assert_eq!(rebuilt.slam_trim(), -0.75);
        assert_eq!(rebuilt.sample_rate(), 96000.0);
    }

    #[test]
    fn test_resolve_factory() {
        let preset = Preset::resolve("init").unwrap();
        assert_eq!(preset.name, "Init");
    }

    #[test]
    fn test_resolve_missing() {
        assert!(matches!(
            Preset::resolve("no_such_preset_8d1f"),
            Err(ConfigError::PresetNotFound(_))
        ));
    }
}
