//! Input loading from the process environment.

use std::collections::BTreeMap;
use std::ffi::OsString;

use thiserror::Error;

use crate::config::schema::{ActionInputs, Secret};

/// Prefix the runner puts in front of every input name.
pub const INPUT_PREFIX: &str = "INPUT_";

/// Errors raised while loading inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// A required input was absent or empty.
    #[error("Input {name} is required but not provided")]
    Missing { name: String },
}

/// Environment variable name for an input.
pub fn input_key(name: &str) -> String {
    format!("{}{}", INPUT_PREFIX, name.to_uppercase())
}

/// Look up a single input.
///
/// Absent and empty are the same thing. Returns an empty string for a missing
/// optional input.
pub fn get_input(
    env: &BTreeMap<String, String>,
    name: &str,
    required: bool,
) -> Result<String, InputError> {
    let value = env.get(&input_key(name)).cloned().unwrap_or_default();
    if required && value.is_empty() {
        return Err(InputError::Missing {
            name: name.to_string(),
        });
    }
    Ok(value)
}

fn optional_input(env: &BTreeMap<String, String>, name: &str) -> Option<String> {
    env.get(&input_key(name))
        .filter(|value| !value.is_empty())
        .cloned()
}

impl ActionInputs {
    /// Build inputs from an environment snapshot.
    pub fn from_map(env: &BTreeMap<String, String>) -> Result<Self, InputError> {
        let augment_session_auth = Secret::new(get_input(env, "augment_session_auth", true)?);
        let github_token = Secret::new(get_input(env, "github_token", true)?);
        let pull_number = get_input(env, "pull_number", true)?;
        let repo_name = get_input(env, "repo_name", true)?;

        Ok(Self {
            augment_session_auth,
            github_token,
            pull_number,
            repo_name,
            custom_guidelines: optional_input(env, "custom_guidelines"),
            model: optional_input(env, "model"),
            rules: optional_input(env, "rules"),
            mcp_configs: optional_input(env, "mcp_configs"),
            template_directory: optional_input(env, "template_directory"),
            custom_context: optional_input(env, "custom_context"),
        })
    }
}

/// Copy of the process environment.
pub fn env_snapshot() -> BTreeMap<String, String> {
    snapshot_from(std::env::vars_os())
}

/// Keys that are not valid UTF-8 are skipped. Values are decoded lossily so a
/// set input is never reported as missing.
pub fn snapshot_from<I>(vars: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter()
        .filter_map(|(key, value)| {
            let key = key.into_string().ok()?;
            Some((key, value.to_string_lossy().into_owned()))
        })
        .collect()
}
