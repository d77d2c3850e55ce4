//! Augment Describe PR action library.
//!
//! Reads the action inputs from the environment, validates them and hands
//! them to the description generator. The binary in `main.rs` only wires up
//! logging and maps the result to an exit status.

pub mod action;
pub mod config;
pub mod observability;

pub use action::{run, ActionError, ActionSummary, Describer, PendingDescriber};
pub use config::ActionInputs;
