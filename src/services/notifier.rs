//! Delivery of one attachment plus the checkpoint that records it.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::errors::NotifyError;
use crate::domain::models::Attachment;
use crate::domain::ports::{CheckpointStore, WebhookSink};

/// Sends attachments and advances the checkpoint after each success.
pub struct Notifier {
    sink: Arc<dyn WebhookSink>,
    store: Arc<dyn CheckpointStore>,
    /// Pause after each delivered notification.
    interval: Duration,
}

impl Notifier {
    pub fn new(
        sink: Arc<dyn WebhookSink>,
        store: Arc<dyn CheckpointStore>,
        interval: Duration,
    ) -> Self {
        Self {
            sink,
            store,
            interval,
        }
    }

    /// Send `attachment` and record it as the new checkpoint.
    ///
    /// Never fails: errors are logged and reported as `false`. The
    /// checkpoint only moves when both the post and the write succeed.
    pub async fn deliver(&self, attachment: &Attachment) -> bool {
        match self.try_deliver(attachment).await {
            Ok(()) => {
                tokio::time::sleep(self.interval).await;
                true
            }
            Err(NotifyError::Checkpoint(err)) => {
                tracing::error!(
                    issue = %attachment.fallback,
                    ts = attachment.ts,
                    error = %err,
                    "notification sent but checkpoint not written; it may be sent again"
                );
                false
            }
            Err(err) => {
                tracing::error!(
                    issue = %attachment.fallback,
                    ts = attachment.ts,
                    error = %err,
                    "notification not delivered; checkpoint unchanged"
                );
                false
            }
        }
    }

    async fn try_deliver(&self, attachment: &Attachment) -> Result<(), NotifyError> {
        self.sink.post(attachment).await?;
        self.store.save(attachment)?;
        tracing::info!(
            issue = %attachment.fallback,
            author = %attachment.author_name,
            ts = attachment.ts,
            "notification delivered"
        );
        Ok(())
    }
}
