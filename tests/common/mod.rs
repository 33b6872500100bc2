//! Shared fixtures for the integration tests: in-memory ports and a
//! small activity feed.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use jira2slack::{
    ActivityFeed, Attachment, CheckpointError, CheckpointStore, FeedEntry, IssueMetadataSource,
    LookupError, NotifyError, Watermark, WebhookSink,
};

/// `2024-01-15T10:30:00.000Z`
pub const T1: i64 = 1_705_314_600;
/// `2024-01-15T10:31:00.000Z`
pub const T2: i64 = 1_705_314_660;
/// `2024-01-15T10:32:00.000Z`
pub const T3: i64 = 1_705_314_720;

/// An entry as the feed adapter would decode it.
pub fn entry(author: &str, key: &str, title: &str, verb: &str, published: &str) -> FeedEntry {
    FeedEntry {
        author: Some(author.to_string()),
        link: Some(format!(
            "https://jira.example.com/browse/{key}?focusedCommentId=10001#comment-10001"
        )),
        published: Some(published.to_string()),
        title_html: format!(
            r#"<a href="https://jira.example.com/secure/ViewProfile.jspa?name={author}">{author}</a> {verb} <a href="https://jira.example.com/browse/{key}">{key} - {title}</a>"#
        ),
        content_html: Vec::new(),
    }
}

/// PROJ-1, PROJ-1, PROJ-2 by alice, newest first as the tracker sends them.
pub fn three_entries() -> Vec<FeedEntry> {
    vec![
        entry("alice", "PROJ-2", "Add export", "created", "2024-01-15T10:32:00.000Z"),
        entry("alice", "PROJ-1", "Fix login", "commented on", "2024-01-15T10:31:00.000Z"),
        entry("alice", "PROJ-1", "Fix login", "created", "2024-01-15T10:30:00.000Z"),
    ]
}

/// Feed returning a fixed batch, or "no data".
pub struct StaticFeed(pub Option<Vec<FeedEntry>>);

#[async_trait]
impl ActivityFeed for StaticFeed {
    async fn fetch_entries(&self) -> Option<Vec<FeedEntry>> {
        self.0.clone()
    }
}

/// Canned labels per issue; unknown issues answer 404.
#[derive(Default)]
pub struct FakeMetadata {
    labels: HashMap<String, Vec<String>>,
    lookups: Mutex<Vec<String>>,
}

impl FakeMetadata {
    pub fn with(mut self, key: &str, labels: &[&str]) -> Self {
        self.labels
            .insert(key.to_string(), labels.iter().map(|l| (*l).to_string()).collect());
        self
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl IssueMetadataSource for FakeMetadata {
    async fn issue_labels(&self, issue_key: &str) -> Result<Vec<String>, LookupError> {
        self.lookups.lock().unwrap().push(issue_key.to_string());
        self.labels
            .get(issue_key)
            .cloned()
            .ok_or_else(|| LookupError::Status {
                key: issue_key.to_string(),
                status: 404,
                body: r#"{"errorMessages":["Issue does not exist"]}"#.to_string(),
            })
    }
}

/// Checkpoint kept in memory; every save is recorded.
#[derive(Default)]
pub struct MemoryStore {
    saved: Mutex<Vec<Attachment>>,
    start: Watermark,
    unreadable: bool,
}

impl MemoryStore {
    pub fn starting_at(start: i64) -> Self {
        Self {
            start: Watermark(start),
            ..Self::default()
        }
    }

    pub fn unreadable() -> Self {
        Self {
            unreadable: true,
            ..Self::default()
        }
    }

    pub fn saved(&self) -> Vec<Attachment> {
        self.saved.lock().unwrap().clone()
    }

    pub fn current(&self) -> Watermark {
        self.saved
            .lock()
            .unwrap()
            .last()
            .map_or(self.start, |a| Watermark(a.ts))
    }
}

impl CheckpointStore for MemoryStore {
    fn load(&self) -> Result<Watermark, CheckpointError> {
        if self.unreadable {
            return Err(CheckpointError::Invalid {
                path: "memory".into(),
                message: "missing field `ts`".to_string(),
            });
        }
        Ok(self.current())
    }

    fn save(&self, attachment: &Attachment) -> Result<(), CheckpointError> {
        self.saved.lock().unwrap().push(attachment.clone());
        Ok(())
    }
}

/// Records every post; posts for issues in `failing` answer 500.
#[derive(Default)]
pub struct RecordingSink {
    posted: Mutex<Vec<Attachment>>,
    failing: Vec<String>,
}

impl RecordingSink {
    pub fn failing_for(issue_key: &str) -> Self {
        Self {
            posted: Mutex::new(Vec::new()),
            failing: vec![issue_key.to_string()],
        }
    }

    pub fn posted(&self) -> Vec<Attachment> {
        self.posted.lock().unwrap().clone()
    }
}

#[async_trait]
impl WebhookSink for RecordingSink {
    async fn post(&self, attachment: &Attachment) -> Result<(), NotifyError> {
        if self.failing.contains(&attachment.fallback) {
            return Err(NotifyError::Status {
                status: 500,
                body: "internal_error".to_string(),
            });
        }
        self.posted.lock().unwrap().push(attachment.clone());
        Ok(())
    }
}

/// Atom document with the same three activities as [`three_entries`].
pub const ACTIVITY_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom" xmlns:activity="http://activitystrea.ms/spec/1.0/">
  <id>https://jira.example.com/activity</id>
  <title type="text">Activity Stream</title>
  <entry>
    <title type="html">&lt;a href="https://jira.example.com/secure/ViewProfile.jspa?name=alice"&gt;alice&lt;/a&gt; created &lt;a href="https://jira.example.com/browse/PROJ-2"&gt;PROJ-2 - Add export&lt;/a&gt;</title>
    <author><name>alice</name></author>
    <published>2024-01-15T10:32:00.000Z</published>
    <link href="https://jira.example.com/browse/PROJ-2" rel="alternate"/>
  </entry>
  <entry>
    <title type="html">&lt;a href="https://jira.example.com/secure/ViewProfile.jspa?name=alice"&gt;alice&lt;/a&gt; commented on &lt;a href="https://jira.example.com/browse/PROJ-1"&gt;PROJ-1 - Fix login&lt;/a&gt;</title>
    <content type="html">&lt;p&gt;Looks good&lt;br/&gt;Merging&lt;/p&gt;</content>
    <author><name>alice</name></author>
    <published>2024-01-15T10:31:00.000Z</published>
    <link href="https://jira.example.com/browse/PROJ-1?focusedCommentId=10001#comment-10001" rel="alternate"/>
  </entry>
  <entry>
    <title type="html">&lt;a href="https://jira.example.com/secure/ViewProfile.jspa?name=alice"&gt;alice&lt;/a&gt; created &lt;a href="https://jira.example.com/browse/PROJ-1"&gt;PROJ-1 - Fix login&lt;/a&gt;</title>
    <author><name>alice</name></author>
    <published>2024-01-15T10:30:00.000Z</published>
    <link href="https://jira.example.com/browse/PROJ-1" rel="alternate"/>
  </entry>
</feed>"#;
