//! Feed entries and the activity records parsed out of them.

use serde::{Deserialize, Serialize};

/// One entry of the activity feed, decoded but not yet interpreted.
///
/// Title and content still carry the tracker's HTML markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedEntry {
    /// Display name of the user who performed the activity.
    pub author: Option<String>,
    /// Link to the issue the activity belongs to.
    pub link: Option<String>,
    /// Raw `published` timestamp, e.g. `2024-01-15T10:30:00.123Z`.
    pub published: Option<String>,
    /// HTML title, e.g. `<a ...>alice</a> created <a ...>PROJ-1</a> - Fix login`.
    pub title_html: String,
    /// HTML bodies of the entry's content blocks, in document order.
    pub content_html: Vec<String>,
}

/// A single piece of tracker activity ready for formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Who performed the activity.
    pub author: String,
    /// Issue link with query string and fragment removed.
    pub issue_url: String,
    /// Final path segment of `issue_url`, e.g. `PROJ-1`.
    pub issue_key: String,
    /// Publication time, seconds since the Unix epoch (UTC).
    pub published_epoch: i64,
    /// Publication time shifted to UTC+9, `YYYY-MM-DD HH:MM:SS`.
    pub published_display: String,
    /// Issue title as rendered in the feed title, key removed.
    pub issue_title: String,
    /// What happened, e.g. `created` or `commented on`.
    pub action: String,
    /// Code-fenced comment body, empty when the entry has none.
    pub comment: String,
}

impl ActivityRecord {
    /// The notification heading: issue key immediately followed by title.
    pub fn heading(&self) -> String {
        format!("{}{}", self.issue_key, self.issue_title)
    }

    /// True when `other` belongs to the same notification as `self`.
    pub fn same_thread(&self, other: &Self) -> bool {
        self.author == other.author
            && self.issue_key == other.issue_key
            && self.issue_title == other.issue_title
    }
}
