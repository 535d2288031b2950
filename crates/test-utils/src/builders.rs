#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::PathBuf;

use jplaunch::config::LaunchConfig;

/// Builder for `LaunchConfig` to simplify test setup.
///
/// Produces the validated, typed config directly so tests don't have to go
/// through TOML for every variation.
pub struct LaunchConfigBuilder {
    config: LaunchConfig,
}

impl LaunchConfigBuilder {
    pub fn new(build_dir: &str) -> Self {
        Self {
            config: LaunchConfig {
                build_dir: PathBuf::from(build_dir),
                timeout_seconds: 300,
                reports_dir: None,
                strict: false,
                skip: false,
                tags: vec![],
                parameters: BTreeMap::new(),
                test_module: None,
                java: None,
                classpath_elements: vec![],
            },
        }
    }

    pub fn timeout_seconds(mut self, secs: u64) -> Self {
        self.config.timeout_seconds = secs;
        self
    }

    pub fn reports_dir(mut self, path: &str) -> Self {
        self.config.reports_dir = Some(PathBuf::from(path));
        self
    }

    pub fn strict(mut self, val: bool) -> Self {
        self.config.strict = val;
        self
    }

    pub fn skip(mut self, val: bool) -> Self {
        self.config.skip = val;
        self
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.config.tags.push(tag.to_string());
        self
    }

    pub fn parameter(mut self, key: &str, value: &str) -> Self {
        self.config
            .parameters
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn test_module(mut self, module: &str) -> Self {
        self.config.test_module = Some(module.to_string());
        self
    }

    pub fn java(mut self, path: &str) -> Self {
        self.config.java = Some(PathBuf::from(path));
        self
    }

    pub fn classpath_element(mut self, element: &str) -> Self {
        self.config.classpath_elements.push(element.to_string());
        self
    }

    pub fn build(self) -> LaunchConfig {
        self.config
    }
}

impl Default for LaunchConfigBuilder {
    fn default() -> Self {
        Self::new("target")
    }
}
