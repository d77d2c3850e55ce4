//! Augment Describe PR GitHub Action entry point.
//!
//! ```text
//!   INPUT_* env ──▶ config::loader ──▶ config::json ──▶ action::run ──▶ exit status
//!                                                            │
//!                                                            ▼
//!                                                    observability (stdout/stderr)
//! ```

use std::process::ExitCode;

use clap::Parser;

use describe_pr_action::config::loader::env_snapshot;
use describe_pr_action::observability::{init_logging, LogFormat};
use describe_pr_action::{run, PendingDescriber};

#[derive(Parser)]
#[command(name = "describe-pr")]
#[command(about = "Generate a pull request description from GitHub Action inputs", long_about = None)]
struct Cli {
    /// Log output format.
    #[arg(long, value_enum, env = "DESCRIBE_PR_LOG_FORMAT", default_value = "text")]
    log_format: LogFormat,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_format) {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    match run(&env_snapshot(), &PendingDescriber).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Error in Augment Describe PR Action: {}", e);
            ExitCode::FAILURE
        }
    }
}
