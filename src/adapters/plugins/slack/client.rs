//! Slack incoming-webhook client.

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::errors::NotifyError;
use crate::domain::models::{Attachment, WebhookSettings};
use crate::domain::ports::WebhookSink;

use super::super::error_chain;
use super::models::WebhookPayload;

/// Posts one attachment per request to the configured webhook URL.
#[derive(Debug, Clone)]
pub struct SlackWebhookClient {
    http: Client,
    settings: WebhookSettings,
}

impl SlackWebhookClient {
    pub fn new(settings: WebhookSettings) -> Self {
        Self {
            http: Client::new(),
            settings,
        }
    }
}

#[async_trait]
impl WebhookSink for SlackWebhookClient {
    async fn post(&self, attachment: &Attachment) -> Result<(), NotifyError> {
        let payload = WebhookPayload::new(&self.settings, attachment);

        // The webhook URL carries the secret token; keep it out of errors.
        let resp = self
            .http
            .post(&self.settings.url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| NotifyError::Request(error_chain(&e.without_url())))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(NotifyError::Status {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(title = %attachment.title, "webhook accepted notification");
        Ok(())
    }
}
