// src/launch/java.rs

//! Interpreter discovery.
//!
//! The original tooling reuses the executable of the JVM it runs inside; a
//! native launcher has no current JVM, so discovery goes:
//!
//! 1. explicit `[launcher].java` override (authoritative when it exists)
//! 2. `$JAVA_HOME/bin/java[.exe]`
//! 3. `java` on `PATH`

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::errors::{LaunchError, Result};

/// Resolve the `java` executable to launch with.
///
/// A configured override that doesn't exist on disk is not fatal: it is
/// logged and discovery falls through to `JAVA_HOME` and `PATH`, so a stale
/// config entry degrades instead of breaking the build.
pub fn resolve_java(override_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        if path.as_os_str().is_empty() {
            warn!("configured java path is empty, falling back to discovery");
        } else if path.exists() {
            debug!("using java from config: {}", path.display());
            return Ok(path.to_path_buf());
        } else {
            warn!(
                "configured java path does not exist: {}, falling back to discovery",
                path.display()
            );
        }
    }

    if let Some(home) = std::env::var_os("JAVA_HOME") {
        let candidate = Path::new(&home).join("bin").join(java_file_name());
        if candidate.exists() {
            debug!("using java from JAVA_HOME: {}", candidate.display());
            return Ok(candidate);
        }
        warn!(
            "JAVA_HOME is set but {} does not exist",
            candidate.display()
        );
    }

    match which::which("java") {
        Ok(path) => {
            debug!("using java from PATH: {}", path.display());
            Ok(path)
        }
        Err(err) => Err(LaunchError::JavaNotFound(format!(
            "no override, no usable JAVA_HOME, and no `java` on PATH ({err})"
        ))),
    }
}

fn java_file_name() -> &'static str {
    if cfg!(windows) { "java.exe" } else { "java" }
}
