// src/config/mod.rs

//! Configuration layer.
//!
//! - [`model`] holds the serde-facing TOML model ([`RawConfigFile`]) and the
//!   validated, typed [`LaunchConfig`] the rest of the crate consumes.
//! - [`loader`] reads and parses the file.
//! - [`validate`] performs semantic checks and the raw → typed conversion.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use model::{ClasspathSection, LaunchConfig, LauncherSection, RawConfigFile};
