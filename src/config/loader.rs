// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{LaunchConfig, RawConfigFile};
use crate::errors::Result;

/// Default config file name, shared with the CLI's `--config` default so
/// the two cannot drift apart.
pub const DEFAULT_CONFIG_FILE: &str = "Jplaunch.toml";

/// Load a configuration file from a given path and return the raw
/// `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (timeout sanity, required fields, etc.). Use
/// [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run basic validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks for:
///   - a non-empty `build_dir`,
///   - a sane timeout,
///   - a usable `test_module` name when present,
///   - classpath elements unless the launch is skipped.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<LaunchConfig> {
    let raw_config = load_from_path(&path)?;
    let config = LaunchConfig::try_from(raw_config)?;
    Ok(config)
}

/// Helper to resolve a default config path.
///
/// Currently this just returns `Jplaunch.toml` in the current working
/// directory, but this function exists so you can later:
///
/// - Respect an env var (e.g. `JPLAUNCH_CONFIG`).
/// - Look for multiple default locations.
pub fn default_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_FILE)
}
