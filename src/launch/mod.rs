// src/launch/mod.rs

//! Process launch layer.
//!
//! This module owns everything between a validated [`LaunchConfig`] and the
//! integer status handed back to the caller:
//!
//! - [`classpath`] resolves raw classpath elements into absolute, existing,
//!   order-preserving entries and joins them with the platform separator.
//! - [`command`] synthesizes the `java` command line, branching once on the
//!   [`command::ExecutionMode`] tagged union (classpath vs. module mode).
//! - [`java`] discovers the interpreter executable.
//! - [`runner`] spawns the child with redirected stdio, waits under the
//!   timeout and maps the outcome onto [`runner::LaunchResult`].
//!
//! [`LaunchConfig`]: crate::config::LaunchConfig

pub mod classpath;
pub mod command;
pub mod java;
pub mod runner;

pub use classpath::{ClasspathProvider, ConfigClasspath, join_classpath, resolve_classpath};
pub use command::{CommandLine, ExecutionMode, build_command_line};
pub use java::resolve_java;
pub use runner::{LaunchResult, launch};
