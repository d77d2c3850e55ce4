//! Diagnostic summary of the resolved inputs.

use std::fmt;

use crate::action::ResolvedInputs;

/// Header line logged before any optional input is decoded.
pub fn target_line(pull_number: &str, repo_name: &str) -> String {
    format!("Processing PR #{} for repository {}", pull_number, repo_name)
}

/// What the run log reports about one invocation. Holds no secrets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSummary {
    pub pull_number: String,
    pub repo_name: String,
    pub template_directory: Option<String>,
    pub has_custom_guidelines: bool,
    pub model: Option<String>,
    pub rule_count: usize,
    pub mcp_config_count: usize,
}

impl ActionSummary {
    pub fn new(resolved: &ResolvedInputs) -> Self {
        let inputs = &resolved.inputs;
        Self {
            pull_number: inputs.pull_number.clone(),
            repo_name: inputs.repo_name.clone(),
            template_directory: inputs.template_directory.clone(),
            has_custom_guidelines: inputs.custom_guidelines.is_some(),
            model: inputs.model.clone(),
            rule_count: resolved.rules.as_ref().map_or(0, Vec::len),
            mcp_config_count: resolved.mcp_configs.as_ref().map_or(0, Vec::len),
        }
    }

    /// Header line naming the pull request.
    pub fn target_line(&self) -> String {
        target_line(&self.pull_number, &self.repo_name)
    }

    /// Per-input lines, in the order they are logged.
    pub fn detail_lines(&self) -> Vec<String> {
        vec![
            format!(
                "Template directory: {}",
                self.template_directory.as_deref().unwrap_or("not specified")
            ),
            format!(
                "Custom guidelines: {}",
                if self.has_custom_guidelines {
                    "provided"
                } else {
                    "not provided"
                }
            ),
            format!("Model: {}", self.model.as_deref().unwrap_or("default")),
            format!("Rules: {} rule(s)", self.rule_count),
            format!("MCP configs: {} config(s)", self.mcp_config_count),
        ]
    }
}

impl fmt::Display for ActionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.target_line())?;
        for line in self.detail_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
