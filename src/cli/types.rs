//! CLI type definitions

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "jira2slack")]
#[command(about = "Relay JIRA activity to a Slack incoming webhook", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Run configuration naming the project(s) to relay
    pub config: PathBuf,

    /// Base configuration shared by every run
    #[arg(long, default_value = "./etc/default.yml")]
    pub base_config: PathBuf,

    /// Directory for checkpoint files (overrides `var_dir`)
    #[arg(long)]
    pub var_dir: Option<PathBuf>,
}
