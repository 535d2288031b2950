#![cfg(unix)]

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use jplaunch::launch::command::CommandLine;
use jplaunch::launch::runner::{LaunchResult, STDERR_FILE_NAME, STDOUT_FILE_NAME, launch};
use jplaunch_test_utils::init_tracing;
use tempfile::TempDir;

fn shell(script: &str) -> CommandLine {
    CommandLine {
        program: PathBuf::from("/bin/sh"),
        args: vec!["-c".to_string(), script.to_string()],
    }
}

#[tokio::test]
async fn exit_code_passes_through_verbatim() {
    init_tracing();
    let target = TempDir::new().unwrap();

    let result = launch(&shell("exit 7"), target.path(), Duration::from_secs(5)).await;

    assert_eq!(result, LaunchResult::Exited(7));
    assert_eq!(result.status(), 7);
}

#[tokio::test]
async fn successful_child_reports_zero() {
    init_tracing();
    let target = TempDir::new().unwrap();

    let result = launch(&shell("true"), target.path(), Duration::from_secs(5)).await;

    assert_eq!(result, LaunchResult::Exited(0));
    assert_eq!(result.status(), 0);
}

#[tokio::test]
async fn spawn_failure_maps_to_minus_one() {
    init_tracing();
    let target = TempDir::new().unwrap();

    let cmd = CommandLine {
        program: PathBuf::from("/nonexistent/definitely-not-a-binary"),
        args: vec![],
    };
    let result = launch(&cmd, target.path(), Duration::from_secs(5)).await;

    assert_eq!(result, LaunchResult::Failed);
    assert_eq!(result.status(), -1);
}

#[tokio::test]
async fn stdout_and_stderr_are_redirected_to_files() {
    init_tracing();
    let target = TempDir::new().unwrap();

    let result = launch(
        &shell("echo hello-out; echo hello-err 1>&2"),
        target.path(),
        Duration::from_secs(5),
    )
    .await;
    assert_eq!(result, LaunchResult::Exited(0));

    let out = fs::read_to_string(target.path().join(STDOUT_FILE_NAME)).unwrap();
    let err = fs::read_to_string(target.path().join(STDERR_FILE_NAME)).unwrap();
    assert_eq!(out, "hello-out\n");
    assert_eq!(err, "hello-err\n");
}

#[tokio::test]
async fn redirect_files_are_truncated_per_launch() {
    init_tracing();
    let target = TempDir::new().unwrap();

    launch(
        &shell("echo a-much-longer-first-line"),
        target.path(),
        Duration::from_secs(5),
    )
    .await;
    launch(&shell("echo short"), target.path(), Duration::from_secs(5)).await;

    let out = fs::read_to_string(target.path().join(STDOUT_FILE_NAME)).unwrap();
    assert_eq!(out, "short\n");
}

#[tokio::test]
async fn missing_target_directory_fails_before_spawn() {
    init_tracing();
    let target = TempDir::new().unwrap();
    let missing = target.path().join("no-such-dir");

    let result = launch(&shell("true"), &missing, Duration::from_secs(5)).await;

    assert_eq!(result, LaunchResult::Failed);
    assert_eq!(result.status(), -1);
}
