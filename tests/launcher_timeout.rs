#![cfg(unix)]

use std::path::PathBuf;
use std::time::{Duration, Instant};

use jplaunch::launch::command::CommandLine;
use jplaunch::launch::runner::{LaunchResult, launch};
use jplaunch_test_utils::init_tracing;
use tempfile::TempDir;

fn sleeper(seconds: u32) -> CommandLine {
    CommandLine {
        program: PathBuf::from("/bin/sh"),
        args: vec!["-c".to_string(), format!("sleep {seconds}")],
    }
}

#[tokio::test]
async fn timeout_returns_promptly_not_after_the_child() {
    init_tracing();
    let target = TempDir::new().unwrap();

    let started = Instant::now();
    let result = launch(&sleeper(10), target.path(), Duration::from_secs(1)).await;
    let elapsed = started.elapsed();

    assert!(matches!(result, LaunchResult::TimedOut { .. }));
    assert_eq!(result.status(), -2);
    // ~1s timeout plus termination overhead; nowhere near the 10s sleep.
    assert!(
        elapsed < Duration::from_secs(5),
        "launch took {elapsed:?}, expected to return shortly after the 1s timeout"
    );
}

#[tokio::test]
async fn timed_out_child_is_terminated() {
    init_tracing();
    let target = TempDir::new().unwrap();

    let result = launch(&sleeper(30), target.path(), Duration::from_secs(1)).await;

    // sh dies on SIGTERM within the grace period.
    assert_eq!(result, LaunchResult::TimedOut { terminated: true });
}
