//! Action orchestration.
//!
//! # Data Flow
//! ```text
//! environment snapshot
//!     → ActionInputs::from_map (fails on missing required input)
//!     → optional_json (rules, mcp_configs, custom_context)
//!     → ActionSummary (logged)
//!     → Describer (generates the PR description)
//! ```
//!
//! Straight-line pass; the first error ends the run.

pub mod summary;

use std::collections::BTreeMap;
use std::future::Future;

use thiserror::Error;

use crate::config::{optional_json, ActionInputs, CustomContext, InputError};

pub use summary::ActionSummary;

/// Errors that end a run with a failing exit status.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Input(#[from] InputError),

    /// The description generator reported a failure.
    #[error("description generation failed: {0}")]
    Describe(String),
}

/// Inputs with their JSON-encoded fields decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInputs {
    pub inputs: ActionInputs,
    pub rules: Option<Vec<String>>,
    pub mcp_configs: Option<Vec<String>>,
    pub custom_context: Option<CustomContext>,
}

impl ResolvedInputs {
    pub fn resolve(inputs: ActionInputs) -> Self {
        let custom_context = optional_json("custom_context", inputs.custom_context.as_deref());
        let rules = optional_json("rules", inputs.rules.as_deref());
        let mcp_configs = optional_json("mcp_configs", inputs.mcp_configs.as_deref());
        Self {
            inputs,
            rules,
            mcp_configs,
            custom_context,
        }
    }
}

/// Generates and publishes the PR description.
pub trait Describer {
    fn describe(
        &self,
        resolved: &ResolvedInputs,
    ) -> impl Future<Output = Result<(), ActionError>> + Send;
}

/// Stand-in until the Augment agent integration lands.
#[derive(Debug, Default, Clone, Copy)]
pub struct PendingDescriber;

impl Describer for PendingDescriber {
    async fn describe(&self, resolved: &ResolvedInputs) -> Result<(), ActionError> {
        // TODO: call the Augment agent with the session auth, render the
        // template directory and update the pull request body.
        tracing::debug!(
            repo = %resolved.inputs.repo_name,
            pull_number = %resolved.inputs.pull_number,
            "Describer not wired up, nothing to publish"
        );
        Ok(())
    }
}

/// Run the action against an environment snapshot.
pub async fn run<D: Describer>(
    env: &BTreeMap<String, String>,
    describer: &D,
) -> Result<ActionSummary, ActionError> {
    tracing::info!("Starting Augment Describe PR Action...");

    let inputs = ActionInputs::from_map(env)?;
    tracing::info!("{}", summary::target_line(&inputs.pull_number, &inputs.repo_name));

    let resolved = ResolvedInputs::resolve(inputs);
    let summary = ActionSummary::new(&resolved);

    tracing::info!("Action inputs validated successfully");
    for line in summary.detail_lines() {
        tracing::info!("{}", line);
    }
    if resolved.custom_context.is_some() {
        tracing::debug!("Custom context provided");
    }

    describer.describe(&resolved).await?;

    tracing::info!("PR description generation completed successfully");
    Ok(summary)
}
