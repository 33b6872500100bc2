//! Folding sorted activity records into notification-sized groups.
//!
//! Consecutive records by the same author on the same issue (and title)
//! share one notification. Grouping is positional: the same issue
//! reappearing after another issue starts a new group.

use std::iter::Peekable;

use crate::domain::models::{ActivityRecord, Attachment};

/// A finished run of consecutive records.
///
/// The heading fields come from the last record of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityGroup {
    pub author: String,
    pub issue_key: String,
    pub issue_title: String,
    pub issue_url: String,
    /// Publication epoch of the last record in the run.
    pub published_epoch: i64,
    /// One line per record, comments on their own lines.
    pub body: String,
    /// Number of records folded into this group.
    pub len: usize,
}

impl ActivityGroup {
    fn close(last: ActivityRecord, body: String, len: usize) -> Self {
        Self {
            author: last.author,
            issue_key: last.issue_key,
            issue_title: last.issue_title,
            issue_url: last.issue_url,
            published_epoch: last.published_epoch,
            body,
            len,
        }
    }

    /// Format the group as a webhook attachment.
    pub fn into_attachment(self, color: &str) -> Attachment {
        Attachment {
            title: format!("{}{}", self.issue_key, self.issue_title),
            fallback: self.issue_key,
            color: color.to_string(),
            title_link: self.issue_url,
            author_name: self.author,
            text: self.body,
            ts: self.published_epoch,
        }
    }
}

/// Lazy iterator over the groups of a record sequence.
///
/// Created by [`group_records`].
pub struct Groups<I: Iterator<Item = ActivityRecord>> {
    records: Peekable<I>,
}

impl<I: Iterator<Item = ActivityRecord>> Iterator for Groups<I> {
    type Item = ActivityGroup;

    fn next(&mut self) -> Option<ActivityGroup> {
        let mut current = self.records.next()?;
        let mut body = String::new();
        let mut len = 0;
        loop {
            push_activity(&mut body, &current);
            len += 1;
            match self.records.next_if(|next| next.same_thread(&current)) {
                Some(next) => current = next,
                None => return Some(ActivityGroup::close(current, body, len)),
            }
        }
    }
}

/// Group records that are already sorted by publication time.
pub fn group_records<R>(records: R) -> Groups<R::IntoIter>
where
    R: IntoIterator<Item = ActivityRecord>,
{
    Groups {
        records: records.into_iter().peekable(),
    }
}

fn push_activity(body: &mut String, record: &ActivityRecord) {
    body.push_str(&record.published_display);
    body.push_str(" | ");
    body.push_str(&record.action);
    body.push('\n');
    if !record.comment.is_empty() {
        body.push('\n');
        body.push_str(&record.comment);
        body.push('\n');
    }
}
