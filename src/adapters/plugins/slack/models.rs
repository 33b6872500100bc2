//! Slack incoming-webhook payload.

use serde::Serialize;

use crate::domain::models::{Attachment, WebhookSettings};

/// Body of one webhook POST: a single attachment plus the configured
/// sender identity.
#[derive(Debug, Serialize)]
pub struct WebhookPayload<'a> {
    pub channel: &'a str,
    pub username: &'a str,
    pub icon_emoji: &'a str,
    pub attachments: Vec<WebhookAttachment<'a>>,
}

impl<'a> WebhookPayload<'a> {
    pub fn new(settings: &'a WebhookSettings, attachment: &'a Attachment) -> Self {
        Self {
            channel: &settings.channel,
            username: &settings.username,
            icon_emoji: &settings.icon_emoji,
            attachments: vec![WebhookAttachment::from(attachment)],
        }
    }
}

/// The attachment as Slack sees it. `ts` stays local.
#[derive(Debug, Serialize)]
pub struct WebhookAttachment<'a> {
    pub fallback: &'a str,
    pub color: &'a str,
    pub title: &'a str,
    pub title_link: &'a str,
    pub author_name: &'a str,
    pub text: &'a str,
}

impl<'a> From<&'a Attachment> for WebhookAttachment<'a> {
    fn from(attachment: &'a Attachment) -> Self {
        Self {
            fallback: &attachment.fallback,
            color: &attachment.color,
            title: &attachment.title,
            title_link: &attachment.title_link,
            author_name: &attachment.author_name,
            text: &attachment.text,
        }
    }
}
