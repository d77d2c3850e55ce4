//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config + action produce:
//!     → logging.rs (tracing events)
//!
//! Consumers:
//!     → stdout: progress lines shown in the workflow run log
//!     → stderr: warnings and the fatal error
//! ```

pub mod logging;

pub use logging::{init_logging, LogFormat};
