// src/launch/runner.rs

//! Child process launching, bounded waiting and result mapping.
//!
//! One call = one launch. The child's stdout/stderr go to fixed files in
//! the target directory (truncated on every launch), stdin is inherited,
//! and the wait is bounded by the configured wall-clock timeout. Callers
//! must not run two launches against the same target directory at once;
//! they would collide on the redirect files.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::{Child, Command};
use tracing::{debug, error, info, warn};

use super::command::CommandLine;

/// File receiving the child's standard output.
pub const STDOUT_FILE_NAME: &str = "junit-console-launcher.out.txt";

/// File receiving the child's standard error.
pub const STDERR_FILE_NAME: &str = "junit-console-launcher.err.txt";

/// How long a timed-out child gets to exit after SIGTERM before SIGKILL.
const TERMINATE_GRACE: Duration = Duration::from_secs(2);

/// Outcome of a single launch.
///
/// Created once per [`launch`] call and consumed by the caller to decide
/// build success; never persisted. There is no transition back: a launch is
/// single-shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchResult {
    /// The child terminated within the timeout; carries its exit code
    /// verbatim.
    Exited(i32),
    /// The timeout elapsed first. `terminated` reports whether the child
    /// actually went down after the SIGTERM → grace → SIGKILL escalation.
    TimedOut { terminated: bool },
    /// Process creation or waiting failed at the launcher level.
    Failed,
}

impl LaunchResult {
    /// The integer status contract: nonnegative values are the child's own
    /// exit code, `-1` is a launcher-level failure, `-2` is a timeout.
    /// Other negative values are reserved.
    pub fn status(&self) -> i32 {
        match self {
            LaunchResult::Exited(code) => *code,
            LaunchResult::TimedOut { .. } => -2,
            LaunchResult::Failed => -1,
        }
    }
}

/// Launch the child process described by `cmd`.
///
/// Redirects stderr to `<target>/junit-console-launcher.err.txt` and stdout
/// to `<target>/junit-console-launcher.out.txt` (both truncate-and-create),
/// inherits stdin, then waits up to `timeout`. Every token is logged at
/// debug level before the spawn so a failed launch can be diagnosed without
/// re-running.
pub async fn launch(cmd: &CommandLine, target: &Path, timeout: Duration) -> LaunchResult {
    debug!("starting process (timeout={}s)...", timeout.as_secs());
    for token in cmd.tokens() {
        debug!("  {token}");
    }

    let stdout = match std::fs::File::create(target.join(STDOUT_FILE_NAME)) {
        Ok(file) => file,
        Err(err) => {
            error!("creating stdout redirect file failed: {err}");
            return LaunchResult::Failed;
        }
    };
    let stderr = match std::fs::File::create(target.join(STDERR_FILE_NAME)) {
        Ok(file) => file,
        Err(err) => {
            error!("creating stderr redirect file failed: {err}");
            return LaunchResult::Failed;
        }
    };

    let mut child = match Command::new(&cmd.program)
        .args(&cmd.args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::from(stdout))
        .stderr(Stdio::from(stderr))
        .spawn()
    {
        Ok(child) => child,
        Err(err) => {
            error!("executing process failed: {err}");
            return LaunchResult::Failed;
        }
    };

    match tokio::time::timeout(timeout, child.wait()).await {
        Ok(Ok(status)) => match status.code() {
            Some(code) => {
                info!(exit_code = code, "child process exited");
                LaunchResult::Exited(code)
            }
            None => {
                // Killed by a signal before producing an exit code.
                error!("child process terminated without an exit code");
                LaunchResult::Failed
            }
        },
        Ok(Err(err)) => {
            error!("waiting for process failed: {err}");
            LaunchResult::Failed
        }
        Err(_elapsed) => {
            error!("global timeout reached: {} second(s)", timeout.as_secs());
            let terminated = terminate(&mut child).await;
            if !terminated {
                warn!("timed-out child process could not be terminated");
            }
            LaunchResult::TimedOut { terminated }
        }
    }
}

/// Terminate a timed-out child: SIGTERM, grace period, then SIGKILL.
///
/// Returns whether the child is known to be gone afterwards.
async fn terminate(child: &mut Child) -> bool {
    #[cfg(unix)]
    if let Some(pid) = child.id() {
        use nix::sys::signal::{Signal, kill};
        use nix::unistd::Pid;

        debug!(pid, "sending SIGTERM to timed-out child");
        let _ = kill(Pid::from_raw(pid as i32), Signal::SIGTERM);

        if let Ok(waited) = tokio::time::timeout(TERMINATE_GRACE, child.wait()).await {
            return waited.is_ok();
        }
        debug!(pid, "grace period elapsed, escalating to kill");
    }

    // Force kill (SIGKILL on unix); tokio waits for the child to go down.
    match child.kill().await {
        Ok(()) => true,
        Err(err) => {
            warn!("killing child process failed: {err}");
            false
        }
    }
}
