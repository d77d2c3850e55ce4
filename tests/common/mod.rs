//! Shared helpers for running the action binary.

use std::process::{Command, Output};

/// The four inputs every run needs.
pub const REQUIRED: [(&str, &str); 4] = [
    ("INPUT_AUGMENT_SESSION_AUTH", "session-secret"),
    ("INPUT_GITHUB_TOKEN", "ghp_secret"),
    ("INPUT_PULL_NUMBER", "42"),
    ("INPUT_REPO_NAME", "octo/repo"),
];

/// The binary with an empty environment.
pub fn action_command() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_describe-pr"));
    command.env_clear();
    command
}

/// Run the binary with exactly `vars` in its environment.
pub fn run_action(vars: &[(&str, &str)]) -> Output {
    action_command()
        .envs(vars.iter().copied())
        .output()
        .expect("failed to spawn describe-pr")
}

/// Required inputs plus `extra`; keys in `extra` replace the defaults.
pub fn with_required(extra: &[(&'static str, &'static str)]) -> Vec<(&'static str, &'static str)> {
    let mut vars: Vec<_> = REQUIRED
        .iter()
        .copied()
        .filter(|(key, _)| !extra.iter().any(|(k, _)| k == key))
        .collect();
    vars.extend_from_slice(extra);
    vars
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
