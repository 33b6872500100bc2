//! jira2slack entry point.

use std::process::ExitCode;

use clap::Parser;

use jira2slack::cli::{execute, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match execute(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "relay run aborted");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
