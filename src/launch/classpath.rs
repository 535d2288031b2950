// src/launch/classpath.rs

//! Classpath resolution.
//!
//! Turns the raw, possibly-stale element list from the build into a list of
//! absolute, symlink-normalized paths that exist on disk, preserving the
//! order the build supplied them in. Classpath order affects class
//! resolution in the child JVM, so surviving entries are never reordered.

use std::collections::HashSet;
use std::path::PathBuf;

use tracing::debug;

use crate::errors::Result;

/// Source of raw classpath elements.
///
/// Production code reads them from the config file via [`ConfigClasspath`];
/// tests can provide their own implementation, including one that fails to
/// model "dependency resolution has not happened yet".
pub trait ClasspathProvider {
    /// Return the raw classpath elements in resolution order.
    ///
    /// An `Err` means the elements cannot be obtained at all and aborts the
    /// launch before any process is spawned.
    fn elements(&self) -> Result<Vec<String>>;
}

/// Classpath elements taken from the `[classpath]` config section.
#[derive(Debug, Clone)]
pub struct ConfigClasspath {
    elements: Vec<String>,
}

impl ConfigClasspath {
    pub fn new(elements: Vec<String>) -> Self {
        Self { elements }
    }
}

impl ClasspathProvider for ConfigClasspath {
    fn elements(&self) -> Result<Vec<String>> {
        Ok(self.elements.clone())
    }
}

/// Resolve raw elements into absolute, existing, deduplicated entries.
///
/// - Each element is canonicalized (absolute + symlinks resolved).
/// - Elements that don't exist on disk are skipped with a debug log; a
///   missing entry is not fatal since not all declared elements materialize
///   (e.g. an empty test output directory that was never created).
/// - Duplicates (after normalization) collapse to their first occurrence.
/// - Input order is preserved among survivors.
///
/// Results are computed fresh on every call; the classpath can change
/// between invocations in the same process.
pub fn resolve_classpath(provider: &dyn ClasspathProvider) -> Result<Vec<PathBuf>> {
    let raw = provider.elements()?;

    let mut entries = Vec::new();
    let mut seen = HashSet::new();
    for element in &raw {
        match std::fs::canonicalize(element) {
            Ok(path) => {
                if seen.insert(path.clone()) {
                    debug!("  -> {}", path.display());
                    entries.push(path);
                } else {
                    debug!("   = {} // duplicate", path.display());
                }
            }
            Err(_) => {
                debug!("   X {element} // doesn't exist");
            }
        }
    }

    Ok(entries)
}

/// Join resolved entries with the platform path separator.
pub fn join_classpath(entries: &[PathBuf]) -> String {
    let separator = if cfg!(windows) { ";" } else { ":" };
    entries
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(separator)
}
