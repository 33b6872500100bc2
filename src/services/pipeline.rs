//! One relay run: feed → records → groups → notifications.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::errors::RunError;
use crate::domain::models::{Config, LabelFilter, Watermark};
use crate::domain::ports::{ActivityFeed, CheckpointStore, IssueMetadataSource, WebhookSink};

use super::entry_parser::EntryParser;
use super::grouper::group_records;
use super::notifier::Notifier;

/// Per-run knobs that are not owned by any adapter.
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub label_filter: Option<LabelFilter>,
    /// Attachment sidebar colour
    pub color: String,
    /// Pause after each delivered notification
    pub notify_interval: Duration,
}

impl PipelineSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            label_filter: config.label_filter(),
            color: config.slack_color.clone(),
            notify_interval: config.notify_interval(),
        }
    }
}

/// Counters describing what a run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Watermark read at the start of the run
    pub watermark: Watermark,
    /// Entries returned by the feed
    pub fetched: usize,
    /// Records that survived filtering
    pub published: usize,
    /// Notifications attempted
    pub groups: usize,
    /// Notifications sent and checkpointed
    pub delivered: usize,
}

/// The feed-to-notification pipeline.
pub struct Pipeline {
    feed: Arc<dyn ActivityFeed>,
    metadata: Arc<dyn IssueMetadataSource>,
    store: Arc<dyn CheckpointStore>,
    notifier: Notifier,
    settings: PipelineSettings,
}

impl Pipeline {
    pub fn new(
        feed: Arc<dyn ActivityFeed>,
        metadata: Arc<dyn IssueMetadataSource>,
        store: Arc<dyn CheckpointStore>,
        sink: Arc<dyn WebhookSink>,
        settings: PipelineSettings,
    ) -> Self {
        let notifier = Notifier::new(sink, Arc::clone(&store), settings.notify_interval);
        Self {
            feed,
            metadata,
            store,
            notifier,
            settings,
        }
    }

    /// Run once.
    ///
    /// Fails only when the checkpoint cannot be read or a label lookup
    /// fails; both happen before anything is sent. Feed and delivery
    /// failures are logged and absorbed.
    pub async fn run(&self) -> Result<RunSummary, RunError> {
        let watermark = self.store.load()?;
        tracing::info!(watermark = %watermark, "loaded checkpoint");

        let mut summary = RunSummary {
            watermark,
            ..RunSummary::default()
        };

        let Some(entries) = self.feed.fetch_entries().await else {
            tracing::info!("no activity fetched");
            return Ok(summary);
        };
        summary.fetched = entries.len();
        tracing::info!(entries = entries.len(), "activity entries");

        let parser = EntryParser::new(
            watermark,
            self.settings.label_filter.as_ref(),
            self.metadata.as_ref(),
        );
        let mut records = Vec::with_capacity(entries.len());
        for entry in &entries {
            if let Some(record) = parser.parse(entry).await? {
                records.push(record);
            }
        }
        records.sort_by_key(|r| r.published_epoch);
        summary.published = records.len();
        tracing::info!(records = records.len(), "publish entries");

        for group in group_records(records) {
            summary.groups += 1;
            let attachment = group.into_attachment(&self.settings.color);
            if self.notifier.deliver(&attachment).await {
                summary.delivered += 1;
            }
        }

        Ok(summary)
    }
}
