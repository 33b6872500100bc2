//! The single `jira2slack <CONFIG>` command.

use std::sync::Arc;

use anyhow::Result;
use tracing::Instrument;

use crate::adapters::checkpoint::FileCheckpointStore;
use crate::adapters::plugins::jira::client::JiraClient;
use crate::adapters::plugins::slack::client::SlackWebhookClient;
use crate::domain::errors::RunError;
use crate::domain::models::Config;
use crate::domain::ports::{ActivityFeed, IssueMetadataSource};
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::{LogConfig, LoggerImpl};
use crate::services::{Pipeline, PipelineSettings, RunSummary};

use super::types::Cli;

/// Load configuration, install logging, and relay once.
///
/// Configuration and checkpoint-read failures are logged and end the
/// run successfully: the next scheduled run retries with the same
/// state. Only a failed issue lookup is returned as an error.
pub async fn execute(cli: Cli) -> Result<()> {
    let mut config = match ConfigLoader::load(&cli.base_config, &cli.config) {
        Ok(config) => config,
        Err(err) => {
            let _logger = LoggerImpl::init(&LogConfig::default())?;
            tracing::error!(
                config = %cli.config.display(),
                error = %format!("{err:#}"),
                "configuration error"
            );
            return Ok(());
        }
    };
    if let Some(var_dir) = cli.var_dir {
        config.var_dir = var_dir;
    }

    let _logger = LoggerImpl::init(&LogConfig::try_from(&config.logging)?)?;
    let span = tracing::info_span!("run", project = %config.jira_key.trim());
    tracing::info!(parent: &span, config = %cli.config.display(), "relay run started");

    match relay(&config).instrument(span).await {
        Ok(summary) => {
            tracing::info!(
                fetched = summary.fetched,
                published = summary.published,
                groups = summary.groups,
                delivered = summary.delivered,
                "relay run finished"
            );
            Ok(())
        }
        Err(RunError::Checkpoint(err)) => {
            tracing::error!(error = %err, "cannot read checkpoint; nothing sent");
            Ok(())
        }
        Err(err @ RunError::Lookup(_)) => Err(err.into()),
    }
}

/// Wire the HTTP adapters and the file store into a pipeline and run it.
pub async fn relay(config: &Config) -> Result<RunSummary, RunError> {
    let jira = Arc::new(JiraClient::new(config.jira_settings()));
    let feed: Arc<dyn ActivityFeed> = Arc::clone(&jira) as Arc<dyn ActivityFeed>;
    let metadata: Arc<dyn IssueMetadataSource> = jira;
    let pipeline = Pipeline::new(
        feed,
        metadata,
        Arc::new(FileCheckpointStore::new(config.checkpoint_path())),
        Arc::new(SlackWebhookClient::new(config.webhook_settings())),
        PipelineSettings::from_config(config),
    );
    pipeline.run().await
}
