//! Configuration file location and loading

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::filter::FilterSettings;

/// Get the configuration directory for nyingarn-phonetic
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine configuration directory")?;
    Ok(base.join("nyingarn-phonetic"))
}

/// Get the default config file path (may not exist)
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Config file must have .json extension, got .{}. Please use a .json file.",
            ext
        )),
        None => Err(anyhow::anyhow!(
            "Config file must have .json extension. Please add .json to the filename."
        )),
    }
}

/// Read filter settings from a JSON file.
pub fn load_settings(path: &Path) -> Result<FilterSettings> {
    validate_config_path(path)?;

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse config: {}", path.display()))
}

/// Write filter settings to a JSON file, creating parent directories.
pub fn save_settings(settings: &FilterSettings, path: &Path) -> Result<()> {
    validate_config_path(path)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let contents = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config: {}", path.display()))
}

/// Resolve the settings to use.
///
/// An explicit path must exist. Without one, the default config file is used
/// if present, and built-in defaults otherwise.
pub fn resolve_settings(custom_path: Option<&Path>) -> Result<FilterSettings> {
    if let Some(path) = custom_path {
        return load_settings(path);
    }

    match default_config_path() {
        Ok(path) if path.exists() => load_settings(&path),
        _ => Ok(FilterSettings::default()),
    }
}
