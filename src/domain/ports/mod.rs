//! Port trait definitions (Hexagonal Architecture)
//!
//! The pipeline only talks to the outside world through these traits:
//! - ActivityFeed: the tracker's activity stream
//! - IssueMetadataSource: per-issue label lookup
//! - WebhookSink: the chat webhook
//! - CheckpointStore: the persisted watermark
//!
//! Adapters under `crate::adapters` implement them; tests swap in
//! in-memory fakes.

pub mod activity_feed;
pub mod checkpoint_store;
pub mod issue_metadata;
pub mod webhook_sink;

pub use activity_feed::ActivityFeed;
pub use checkpoint_store::CheckpointStore;
pub use issue_metadata::IssueMetadataSource;
pub use webhook_sink::WebhookSink;
