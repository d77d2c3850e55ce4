//! Action input management.
//!
//! # Data Flow
//! ```text
//! process environment (INPUT_*)
//!     → loader.rs (snapshot & required checks)
//!     → ActionInputs (typed, immutable)
//!     → json.rs (best-effort parsing of JSON-encoded inputs)
//!     → action::run
//! ```
//!
//! # Design Decisions
//! - One parsing pass over a fixed key set; unknown `INPUT_*` keys are ignored
//! - Missing required inputs are fatal, malformed optional JSON is not
//! - Tokens are wrapped in `Secret` so they never reach a log line

pub mod json;
pub mod loader;
pub mod schema;

pub use json::{optional_json, parse_json_input, JsonInputError};
pub use loader::{get_input, input_key, InputError};
pub use schema::{ActionInputs, CustomContext, Secret};
