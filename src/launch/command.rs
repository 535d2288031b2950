// src/launch/command.rs

//! Command-line synthesis for the console launcher child process.
//!
//! Token order is a correctness requirement, not cosmetics: flags that take
//! a following value must stay adjacent, and the mode block has to come
//! before the launcher options. Building is pure and deterministic;
//! building twice from the same inputs yields token-identical output.

use std::path::{Path, PathBuf};

use crate::config::LaunchConfig;

/// Fully-qualified class name of the console launcher entry point
/// (classpath mode).
pub const CONSOLE_LAUNCHER_CLASS: &str = "org.junit.platform.console.ConsoleLauncher";

/// Module name of the console launcher (module mode).
pub const CONSOLE_LAUNCHER_MODULE: &str = "org.junit.platform.console";

/// How the child JVM sees the resolved dependencies.
///
/// The two modes are mutually exclusive by construction: the variant is
/// picked once, here, and every consumer matches on it exhaustively instead
/// of re-checking an optional module name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Flat, ordered lookup path (`--class-path`).
    Classpath { joined: String },
    /// Named modules with explicit readability edges (`--module-path`).
    Module { joined: String, module: String },
}

impl ExecutionMode {
    /// Pick the mode from the joined classpath and the optional test module.
    pub fn new(joined: String, test_module: Option<&str>) -> Self {
        match test_module {
            Some(module) => ExecutionMode::Module {
                joined,
                module: module.to_string(),
            },
            None => ExecutionMode::Classpath { joined },
        }
    }
}

/// An ordered child-process invocation: program plus argument tokens.
///
/// Built exclusively by [`build_command_line`]; the launcher treats it as
/// read-only input to process creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl CommandLine {
    /// All tokens in invocation order, program first. Used for logging and
    /// dry-run output.
    pub fn tokens(&self) -> impl Iterator<Item = String> + '_ {
        std::iter::once(self.program.display().to_string()).chain(self.args.iter().cloned())
    }
}

/// Build the full console-launcher command line.
///
/// Token order (fixed):
/// 1. interpreter executable (program slot)
/// 2. mode block: `--class-path <joined>` + launcher class, or
///    `--module-path <joined>` / `--add-modules` / `--module`
/// 3. `--disable-ansi-colors` (the child always runs non-interactively with
///    redirected streams)
/// 4. `--fail-if-no-tests` iff strict
/// 5. one token per tag, declaration order, passed through verbatim
/// 6. one `--config="key"="value"` token per parameter
/// 7. `--reports-dir <path>` iff configured
/// 8. `--select-module <name>` (module mode) or `--scan-class-path`
pub fn build_command_line(config: &LaunchConfig, mode: &ExecutionMode, java: &Path) -> CommandLine {
    let mut args = Vec::new();

    match mode {
        ExecutionMode::Classpath { joined } => {
            args.push("--class-path".to_string());
            args.push(joined.clone());
            args.push(CONSOLE_LAUNCHER_CLASS.to_string());
        }
        ExecutionMode::Module { joined, .. } => {
            args.push("--module-path".to_string());
            args.push(joined.clone());
            args.push("--add-modules".to_string());
            args.push("ALL-MODULE-PATH,ALL-DEFAULT".to_string());
            args.push("--module".to_string());
            args.push(CONSOLE_LAUNCHER_MODULE.to_string());
        }
    }

    args.push("--disable-ansi-colors".to_string());
    if config.strict {
        args.push("--fail-if-no-tests".to_string());
    }
    for tag in &config.tags {
        args.push(tag.clone());
    }
    for (key, value) in &config.parameters {
        args.push(config_argument(key, value));
    }
    if let Some(ref reports) = config.reports_dir {
        args.push("--reports-dir".to_string());
        args.push(reports.display().to_string());
    }

    match mode {
        ExecutionMode::Module { module, .. } => {
            args.push("--select-module".to_string());
            args.push(module.clone());
        }
        ExecutionMode::Classpath { .. } => {
            args.push("--scan-class-path".to_string());
        }
    }

    CommandLine {
        program: java.to_path_buf(),
        args,
    }
}

/// Render one launcher configuration parameter.
///
/// Known limitation: keys or values containing a double quote produce a
/// malformed token; no escaping is performed.
fn config_argument(key: &str, value: &str) -> String {
    format!("--config=\"{key}\"=\"{value}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_argument_wraps_key_and_value() {
        assert_eq!(
            config_argument("junit.jupiter.displayname.generator.default", "simple"),
            "--config=\"junit.jupiter.displayname.generator.default\"=\"simple\""
        );
    }

    #[test]
    fn config_argument_does_not_escape_embedded_quotes() {
        // Documented limitation: the token comes out malformed.
        assert_eq!(config_argument("k", "a\"b"), "--config=\"k\"=\"a\"b\"");
    }

    #[test]
    fn execution_mode_picks_module_when_present() {
        let mode = ExecutionMode::new("cp".into(), Some("com.acme.tests"));
        assert_eq!(
            mode,
            ExecutionMode::Module {
                joined: "cp".into(),
                module: "com.acme.tests".into()
            }
        );

        let mode = ExecutionMode::new("cp".into(), None);
        assert_eq!(mode, ExecutionMode::Classpath { joined: "cp".into() });
    }

    #[test]
    fn tokens_start_with_the_program() {
        let cmd = CommandLine {
            program: PathBuf::from("/usr/bin/java"),
            args: vec!["--scan-class-path".into()],
        };
        let tokens: Vec<String> = cmd.tokens().collect();
        assert_eq!(tokens, vec!["/usr/bin/java", "--scan-class-path"]);
    }
}
