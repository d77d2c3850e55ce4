//! Input schema definitions.
//!
//! Field names mirror the `with:` keys of the action definition.

use std::fmt;

use serde::Deserialize;

/// Placeholder printed instead of a secret value.
pub const REDACTED: &str = "[REDACTED]";

/// A credential that must not appear in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Raw value, for handing to an API client.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

/// Inputs for one invocation of the action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionInputs {
    /// Session credential for the Augment API.
    pub augment_session_auth: Secret,

    /// Token used to read and update the pull request.
    pub github_token: Secret,

    /// Pull request number, kept as given.
    pub pull_number: String,

    /// Repository in `owner/name` form.
    pub repo_name: String,

    pub custom_guidelines: Option<String>,

    /// Model override; the service default is used when absent.
    pub model: Option<String>,

    /// Raw JSON array of rule file paths.
    pub rules: Option<String>,

    /// Raw JSON array of MCP server configurations.
    pub mcp_configs: Option<String>,

    pub template_directory: Option<String>,

    /// Raw JSON object with extra prompt context.
    pub custom_context: Option<String>,
}

/// Decoded form of the `custom_context` input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CustomContext {
    #[serde(default)]
    pub custom_guidelines: Option<String>,
}
