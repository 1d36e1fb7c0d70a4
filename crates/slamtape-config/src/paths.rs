//! Platform-specific preset locations.
//!
//! - Linux: `~/.config/slamtape/presets/`
//! - macOS: `~/Library/Application Support/slamtape/presets/`
//! - Windows: `%APPDATA%\slamtape\presets\`

use std::path::{Path, PathBuf};

const APP_NAME: &str = "slamtape";
const PRESETS_SUBDIR: &str = "presets";

/// Returns the user presets directory, or `./slamtape/presets` when the
/// platform config directory cannot be determined.
pub fn user_presets_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
        .join(PRESETS_SUBDIR)
}

/// Create the user presets directory if needed and return it.
pub fn ensure_user_presets_dir() -> Result<PathBuf, crate::ConfigError> {
    let dir = user_presets_dir();
    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| crate::ConfigError::create_dir(&dir, e))?;
        tracing::debug!(dir = %dir.display(), "created user presets directory");
    }
    Ok(dir)
}

/// Find a preset file given a path or a bare name.
///
/// A path to an existing file wins; otherwise `name` (with `.toml` appended
/// if missing) is looked up in the user presets directory.
pub fn find_preset(name: &str) -> Option<PathBuf> {
    find_preset_in(name, &user_presets_dir())
}

/// [`find_preset`] against an explicit presets directory.
pub fn find_preset_in(name: &str, dir: &Path) -> Option<PathBuf> {
    let path = PathBuf::from(name);
    if path.is_file() {
        return Some(path);
    }

    let filename = if name.ends_with(".toml") {
        name.to_string()
    } else {
        format!("{name}.toml")
    };
    let candidate = dir.join(filename);
    candidate.is_file().then_some(candidate)
}

/// All `.toml` files in the user presets directory.
pub fn list_user_presets() -> Vec<PathBuf> {
    list_presets_in_dir(&user_presets_dir())
}

/// All `.toml` files in `dir`. Empty if the directory is missing or
/// unreadable.
pub fn list_presets_in_dir(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut presets: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    presets.sort();
    presets
}

/// Preset name from a file path (the file stem).
///
/// ```rust
/// use slamtape_config::paths::preset_name_from_path;
/// use std::path::Path;
///
/// let name = preset_name_from_path(Path::new("/presets/hot_mix.toml"));
/// assert_eq!(name.as_deref(), Some("hot_mix"));
/// ```
pub fn preset_name_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(ToString::to_string)
}
