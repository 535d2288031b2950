// src/config/model.rs

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [launcher]
/// build_dir = "target"
/// timeout_seconds = 300
/// reports_dir = "target/junit-reports"
/// strict = true
/// test_module = "com.acme.tests"
///
/// tags = ["fast", "(a | b) & !c"]
///
/// [parameters]
/// "junit.jupiter.execution.parallel.enabled" = "true"
///
/// [classpath]
/// elements = ["target/classes", "target/test-classes"]
/// ```
///
/// All sections except `[launcher].build_dir` are optional and have
/// reasonable defaults. This type is the raw serde mapping only; semantic
/// validation and conversion to [`LaunchConfig`] happen in
/// [`crate::config::validate`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    /// `[launcher]` section: where, how long, how strict.
    #[serde(default)]
    pub launcher: LauncherSection,

    /// `[parameters]` table: launcher configuration parameters, rendered as
    /// `--config="key"="value"` tokens.
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,

    /// `[classpath]` section: raw classpath elements from the build.
    #[serde(default)]
    pub classpath: ClasspathSection,
}

/// `[launcher]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct LauncherSection {
    /// Build output directory. Required; also receives the child's
    /// redirected stdout/stderr files.
    #[serde(default)]
    pub build_dir: String,

    /// Wall-clock timeout for the child process, in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Optional reports directory (`--reports-dir`).
    #[serde(default)]
    pub reports_dir: Option<String>,

    /// Treat "no tests found" as a failure (`--fail-if-no-tests`).
    #[serde(default)]
    pub strict: bool,

    /// Skip launching entirely and report success.
    #[serde(default)]
    pub skip: bool,

    /// Name of the test module. Presence switches the launch from classpath
    /// mode to module-path mode.
    #[serde(default)]
    pub test_module: Option<String>,

    /// Explicit path to the `java` executable. When absent, discovery falls
    /// back to `JAVA_HOME` and then `PATH`.
    #[serde(default)]
    pub java: Option<String>,

    /// Tags or tag expressions, passed through to the console launcher
    /// verbatim, one token each, in declaration order.
    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_timeout_seconds() -> u64 {
    300
}

impl Default for LauncherSection {
    fn default() -> Self {
        Self {
            build_dir: String::new(),
            timeout_seconds: default_timeout_seconds(),
            reports_dir: None,
            strict: false,
            skip: false,
            test_module: None,
            java: None,
            tags: Vec::new(),
        }
    }
}

/// `[classpath]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClasspathSection {
    /// Raw classpath elements in resolution order. Relative paths are
    /// resolved against the current working directory; entries that don't
    /// exist on disk are skipped at launch time.
    #[serde(default)]
    pub elements: Vec<String>,
}

/// Validated launch configuration.
///
/// Built from [`RawConfigFile`] via `TryFrom` (see
/// [`crate::config::validate`]) and treated as read-only by every component
/// downstream: the argument builder and the process launcher borrow it,
/// nothing mutates it.
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    pub build_dir: PathBuf,
    pub timeout_seconds: u64,
    pub reports_dir: Option<PathBuf>,
    pub strict: bool,
    pub skip: bool,
    pub tags: Vec<String>,
    pub parameters: BTreeMap<String, String>,
    pub test_module: Option<String>,
    pub java: Option<PathBuf>,
    pub classpath_elements: Vec<String>,
}

impl LaunchConfig {
    /// Timeout as a `Duration` for the bounded wait.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
