use serde::{Deserialize, Serialize};

/// A Slack-style message attachment built from one activity group.
///
/// `ts` is only kept for local bookkeeping: it is written to the
/// checkpoint file but never sent to the webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Plain-text summary shown by clients that cannot render attachments.
    pub fallback: String,
    /// Sidebar colour, e.g. `#205081`.
    pub color: String,
    /// Issue key followed by the issue title.
    pub title: String,
    /// Link target for `title`.
    pub title_link: String,
    /// Who performed the activity.
    pub author_name: String,
    /// One line per activity, comments in code fences.
    pub text: String,
    /// Publication epoch of the last activity in the group.
    pub ts: i64,
}
