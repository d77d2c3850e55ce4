//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once per process
//! - Route warnings and errors to stderr, progress lines to stdout
//! - Configure log level at runtime via `RUST_LOG`, never below info for
//!   this crate
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Text format by default (the runner log is read by people), JSON on request

use std::io::{self, IsTerminal};

use tracing::{Level, Subscriber};
use tracing_subscriber::filter::{FilterExt, Targets};
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::layer::{Filter, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "describe_pr_action=info,describe_pr=info";

/// Targets whose info events are always written. The summary is the action's
/// output, so `RUST_LOG` may add detail but never hide it.
pub const ALWAYS_INFO_TARGETS: [&str; 2] = ["describe_pr_action", "describe_pr"];

/// Output format for log events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// `RUST_LOG` directives, or-ed with an info floor for this crate.
pub fn action_filter<S>(directives: Option<&str>) -> impl Filter<S> + Send + Sync + 'static
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let env_filter = directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));
    let floor = ALWAYS_INFO_TARGETS
        .iter()
        .fold(Targets::new(), |targets, target| {
            targets.with_target(*target, Level::INFO)
        });
    env_filter.or(floor)
}

/// Install the global subscriber.
///
/// Returns an error if a subscriber is already set.
pub fn init_logging(format: LogFormat) -> Result<(), tracing_subscriber::util::TryInitError> {
    let directives = std::env::var("RUST_LOG").ok();
    let filter = action_filter(directives.as_deref());
    let writer = io::stderr
        .with_max_level(Level::WARN)
        .or_else(io::stdout);

    let registry = tracing_subscriber::registry();
    match format {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(io::stdout().is_terminal())
                    .with_writer(writer)
                    .with_filter(filter),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_filter(filter),
            )
            .try_init(),
    }
}
