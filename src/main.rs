// src/main.rs

use jplaunch::{cli, logging, run};

#[tokio::main]
async fn main() {
    match run_main().await {
        Ok(status) => std::process::exit(process_exit_code(status)),
        Err(err) => {
            eprintln!("jplaunch error: {err:?}");
            std::process::exit(2);
        }
    }
}

async fn run_main() -> anyhow::Result<i32> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args).await
}

/// Map the launch status onto a process exit code.
///
/// Positive child exit codes pass through where the OS allows it; the
/// negative launcher sentinels (-1 = launcher failure, -2 = timeout) cannot
/// be process exit codes and collapse to 1. The status itself has already
/// been logged by the launcher.
fn process_exit_code(status: i32) -> i32 {
    match status {
        0 => 0,
        s if (1..=255).contains(&s) => s,
        _ => 1,
    }
}
