//! Turns raw feed entries into [`ActivityRecord`]s.
//!
//! An entry is dropped when it was already notified (at or before the
//! watermark), when a label allow-list is configured and its issue
//! carries none of the labels, or when it lacks the fields every record
//! needs. Dropping for a missing field is logged.

use chrono::{NaiveDateTime, TimeDelta};

use crate::domain::errors::LookupError;
use crate::domain::models::{ActivityRecord, FeedEntry, LabelFilter, Watermark};
use crate::domain::ports::IssueMetadataSource;

use super::markup;

/// Timestamp layout of the feed's `published` element.
const PUBLISHED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Layout of the human-readable timestamp in notifications.
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Notifications show times at UTC+9.
const DISPLAY_OFFSET_HOURS: i64 = 9;

/// A parsed publication time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedAt {
    /// Seconds since the Unix epoch, UTC.
    pub epoch: i64,
    /// Local display string at UTC+9.
    pub display: String,
}

/// Parse a feed timestamp such as `2024-01-15T10:30:00.123Z`.
pub fn parse_published(raw: &str) -> Result<PublishedAt, chrono::ParseError> {
    let utc = NaiveDateTime::parse_from_str(raw.trim(), PUBLISHED_FORMAT)?.and_utc();
    let local = utc + TimeDelta::hours(DISPLAY_OFFSET_HOURS);
    Ok(PublishedAt {
        epoch: utc.timestamp(),
        display: local.format(DISPLAY_FORMAT).to_string(),
    })
}

/// Split an entry link into `(issue_url, issue_key)`.
///
/// The query string and fragment are removed; the key is whatever
/// follows the last `/`.
pub fn canonical_issue_link(link: &str) -> (String, String) {
    let issue_url = link
        .split(|c: char| c == '?' || c == '#')
        .next()
        .unwrap_or(link)
        .to_string();
    let issue_key = issue_url.rsplit('/').next().unwrap_or_default().to_string();
    (issue_url, issue_key)
}

/// Parser for one run: fixed watermark and label filter.
pub struct EntryParser<'a> {
    watermark: Watermark,
    label_filter: Option<&'a LabelFilter>,
    metadata: &'a dyn IssueMetadataSource,
}

impl<'a> EntryParser<'a> {
    /// Create a parser. `metadata` is only queried when `label_filter` is set.
    pub fn new(
        watermark: Watermark,
        label_filter: Option<&'a LabelFilter>,
        metadata: &'a dyn IssueMetadataSource,
    ) -> Self {
        Self {
            watermark,
            label_filter,
            metadata,
        }
    }

    /// Parse one entry into zero or one record.
    ///
    /// Only a failed label lookup is an error; everything else either
    /// yields a record or skips the entry.
    pub async fn parse(&self, entry: &FeedEntry) -> Result<Option<ActivityRecord>, LookupError> {
        let Some(link) = entry.link.as_deref() else {
            tracing::warn!(title = %entry.title_html, "feed entry has no link, skipping");
            return Ok(None);
        };
        let (issue_url, issue_key) = canonical_issue_link(link);

        let Some(raw_published) = entry.published.as_deref() else {
            tracing::warn!(issue_key = %issue_key, "feed entry has no published time, skipping");
            return Ok(None);
        };
        let published = match parse_published(raw_published) {
            Ok(published) => published,
            Err(err) => {
                tracing::warn!(
                    issue_key = %issue_key,
                    published = raw_published,
                    error = %err,
                    "unparseable published time, skipping"
                );
                return Ok(None);
            }
        };

        if !self.watermark.admits(published.epoch) {
            tracing::debug!(
                issue_key = %issue_key,
                published = published.epoch,
                watermark = %self.watermark,
                "already notified"
            );
            return Ok(None);
        }

        let Some(author) = entry.author.clone() else {
            tracing::warn!(issue_key = %issue_key, "feed entry has no author, skipping");
            return Ok(None);
        };

        if let Some(filter) = self.label_filter {
            let labels = self.metadata.issue_labels(&issue_key).await?;
            if !filter.admits(&labels) {
                tracing::debug!(issue_key = %issue_key, labels = ?labels, "no allowed label");
                return Ok(None);
            }
        }

        let nodes = markup::parse_nodes(&entry.title_html);
        let issue_title = markup::issue_title(&issue_key, &nodes);
        let action = markup::issue_action(&issue_key, &issue_title, &nodes);
        let comment = markup::comment_block(&entry.content_html);

        Ok(Some(ActivityRecord {
            author,
            issue_url,
            issue_key,
            published_epoch: published.epoch,
            published_display: published.display,
            issue_title,
            action,
            comment,
        }))
    }
}
