// src/config/validate.rs

use std::path::PathBuf;

use crate::config::model::{LaunchConfig, RawConfigFile};
use crate::errors::{LaunchError, Result};

impl TryFrom<RawConfigFile> for LaunchConfig {
    type Error = crate::errors::LaunchError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;

        let launcher = raw.launcher;
        Ok(LaunchConfig {
            build_dir: PathBuf::from(launcher.build_dir),
            timeout_seconds: launcher.timeout_seconds,
            reports_dir: launcher.reports_dir.map(PathBuf::from),
            strict: launcher.strict,
            skip: launcher.skip,
            tags: launcher.tags,
            parameters: raw.parameters,
            test_module: launcher.test_module,
            java: launcher.java.map(PathBuf::from),
            classpath_elements: raw.classpath.elements,
        })
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    ensure_build_dir(cfg)?;
    validate_timeout(cfg)?;
    validate_test_module(cfg)?;
    ensure_classpath_elements(cfg)?;
    Ok(())
}

fn ensure_build_dir(cfg: &RawConfigFile) -> Result<()> {
    if cfg.launcher.build_dir.trim().is_empty() {
        return Err(LaunchError::ConfigError(
            "[launcher].build_dir is required".to_string(),
        ));
    }
    Ok(())
}

fn validate_timeout(cfg: &RawConfigFile) -> Result<()> {
    if cfg.launcher.timeout_seconds == 0 {
        return Err(LaunchError::ConfigError(
            "[launcher].timeout_seconds must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}

fn validate_test_module(cfg: &RawConfigFile) -> Result<()> {
    if let Some(ref module) = cfg.launcher.test_module {
        if module.trim().is_empty() {
            return Err(LaunchError::ConfigError(
                "[launcher].test_module must not be empty when present".to_string(),
            ));
        }
        if module.chars().any(char::is_whitespace) {
            return Err(LaunchError::ConfigError(format!(
                "[launcher].test_module must not contain whitespace (got '{module}')"
            )));
        }
    }
    Ok(())
}

fn ensure_classpath_elements(cfg: &RawConfigFile) -> Result<()> {
    // A skipped launch never touches the classpath, so an empty list is
    // only an error when we would actually spawn.
    if cfg.launcher.skip {
        return Ok(());
    }
    if cfg.classpath.elements.is_empty() {
        return Err(LaunchError::ConfigError(
            "[classpath].elements must contain at least one entry".to_string(),
        ));
    }
    Ok(())
}
