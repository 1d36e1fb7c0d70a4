//! Factory presets bundled with slamtape.
//!
//! Embedded as TOML so they parse through the same path as user files.

use crate::Preset;

/// Internal identifiers of the factory presets, in display order.
pub static FACTORY_PRESET_NAMES: &[&str] =
    &["init", "whisper", "warm", "hot", "slammed", "cv_swell"];

static FACTORY_PRESETS_TOML: &[(&str, &str)] = &[
    ("init", INIT_PRESET),
    ("whisper", WHISPER_PRESET),
    ("warm", WARM_PRESET),
    ("hot", HOT_PRESET),
    ("slammed", SLAMMED_PRESET),
    ("cv_swell", CV_SWELL_PRESET),
];

const INIT_PRESET: &str = r#"
name = "Init"
description = "Unity input gain, CV trim off"
sample_rate = 48000
slam = 0.5
slam_trim = 0.0
"#;

const WHISPER_PRESET: &str = r#"
name = "Whisper"
description = "Maximum input cut: head bump and ground path only"
sample_rate = 48000
slam = 0.0
slam_trim = 0.0
"#;

const WARM_PRESET: &str = r#"
name = "Warm"
description = "Gentle head bump with softened treble"
sample_rate = 48000
slam = 0.4
slam_trim = 0.0
"#;

const HOT_PRESET: &str = r#"
name = "Hot"
description = "About +7 dB into the saturator"
sample_rate = 48000
slam = 0.8
slam_trim = 0.0
"#;

const SLAMMED_PRESET: &str = r#"
name = "Slammed"
description = "Maximum drive into the limiter"
sample_rate = 48000
slam = 1.0
slam_trim = 0.0
"#;

const CV_SWELL_PRESET: &str = r#"
name = "CV Swell"
description = "Low knob with positive CV trim for envelope-driven saturation"
sample_rate = 48000
slam = 0.3
slam_trim = 0.6
"#;

/// Parse all factory presets.
pub fn factory_presets() -> Vec<Preset> {
    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(_, toml)| Preset::from_toml(toml).ok())
        .collect()
}

/// Factory preset by identifier or display name, case-insensitive.
///
/// ```rust
/// use slamtape_config::get_factory_preset;
///
/// let hot = get_factory_preset("hot").unwrap();
/// assert_eq!(hot.slam, 0.8);
/// assert_eq!(get_factory_preset("CV Swell").unwrap().slam_trim, 0.6);
/// ```
pub fn get_factory_preset(name: &str) -> Option<Preset> {
    if let Some((_, toml)) = FACTORY_PRESETS_TOML
        .iter()
        .find(|(id, _)| id.eq_ignore_ascii_case(name))
    {
        return Preset::from_toml(toml).ok();
    }
    factory_presets()
        .into_iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
}

/// Identifiers of all factory presets.
pub fn factory_preset_names() -> Vec<&'static str> {
    FACTORY_PRESETS_TOML.iter().map(|(name, _)| *name).collect()
}

/// Whether `name` matches a factory preset identifier or display name.
pub fn is_factory_preset(name: &str) -> bool {
    get_factory_preset(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate_preset;

    #[test]
    fn all_factory_presets_parse() {
        assert_eq!(factory_presets().len(), FACTORY_PRESETS_TOML.len());
    }

    #[test]
    fn all_factory_presets_validate() {
        for preset in factory_presets() {
            assert!(
                validate_preset(&preset).is_ok(),
                "factory preset '{}' failed validation: {:?}",
                preset.name,
                validate_preset(&preset)
            );
        }
    }

    #[test]
    fn names_list_matches_table() {
        assert_eq!(factory_preset_names(), FACTORY_PRESET_NAMES);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(get_factory_preset("WARM").is_some());
        assert!(get_factory_preset("Slammed").is_some());
        assert!(get_factory_preset("cv swell").is_some());
        assert!(get_factory_preset("tape_echo").is_none());
    }

    #[test]
    fn is_factory_preset_matches_ids_and_names() {
        assert!(is_factory_preset("init"));
        assert!(is_factory_preset("Init"));
        assert!(!is_factory_preset("my_custom_preset"));
    }

    #[test]
    fn presets_span_the_slam_range() {
        let slams: Vec<f64> = factory_presets().iter().map(|p| p.slam).collect();
        assert!(slams.contains(&0.0));
        assert!(slams.contains(&1.0));
    }
}
