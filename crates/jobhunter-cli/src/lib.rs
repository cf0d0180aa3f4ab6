//! JobHunter command-line front end.

pub mod commands;
pub mod config;
pub mod error;

pub use commands::{execute, summarize, Cli, Command};
pub use config::Config;
pub use error::{AppError, AppResult};

use jobhunter_client::{ApiResponse, JobHunterClient};
use tracing::info;

/// Build a client from configuration and run the requested command.
///
/// A `--base-url` flag takes precedence over the configured base URL.
pub async fn run(cli: Cli, config: &Config) -> AppResult<ApiResponse> {
    let base_url = cli
        .base_url
        .clone()
        .unwrap_or_else(|| config.api.base_url.clone());

    let client = JobHunterClient::new(base_url, config.api.timeout)?;
    info!("JobHunter API endpoint: {}", display_base(client.base_url()));

    let response = execute(&cli.command, &client).await?;

    if let Some(summary) = summarize(&cli.command, &response) {
        info!("{}", summary);
    }

    Ok(response)
}

fn display_base(base_url: &str) -> &str {
    if base_url.is_empty() {
        "(relative)"
    } else {
        base_url
    }
}
