// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod launch;
pub mod logging;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::launch::{
    CommandLine, ConfigClasspath, ExecutionMode, build_command_line, join_classpath, launch,
    resolve_classpath, resolve_java,
};

/// High-level entry point used by `main.rs`.
///
/// Wires together:
/// - config loading
/// - classpath resolution
/// - command-line synthesis
/// - the process launcher
///
/// Returns the launch status: the child's exit code (>= 0), `-1` for a
/// launcher-level failure, `-2` for a timeout. Configuration and classpath
/// resolution errors propagate as `Err` instead, since they abort before
/// any process is spawned.
pub async fn run(args: CliArgs) -> Result<i32> {
    let cfg = load_and_validate(&args.config)?;

    if cfg.skip {
        info!("launch skipped by configuration");
        return Ok(0);
    }

    let provider = ConfigClasspath::new(cfg.classpath_elements.clone());
    let entries = resolve_classpath(&provider)?;
    debug!(
        surviving = entries.len(),
        declared = cfg.classpath_elements.len(),
        "classpath resolved"
    );

    let mode = ExecutionMode::new(join_classpath(&entries), cfg.test_module.as_deref());
    let java = resolve_java(cfg.java.as_deref())?;
    let cmd = build_command_line(&cfg, &mode, &java);

    if args.dry_run {
        print_dry_run(&cmd);
        return Ok(0);
    }

    let result = launch(&cmd, &cfg.build_dir, cfg.timeout()).await;
    Ok(result.status())
}

/// Simple dry-run output: print the command line, one token per line.
fn print_dry_run(cmd: &CommandLine) {
    println!("jplaunch dry-run");
    for token in cmd.tokens() {
        println!("  {token}");
    }

    debug!("dry-run complete (no execution)");
}
