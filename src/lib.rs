//! jira2slack - relay JIRA project activity to a Slack incoming webhook
//!
//! Each run reads the tracker's Atom activity stream for one or more
//! project keys, drops what was already announced, groups consecutive
//! activity on the same issue by the same author, and posts one
//! attachment per group. A per-project checkpoint file records the
//! newest delivered activity so reruns are idempotent.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): models, errors and port traits
//! - **Service Layer** (`services`): parsing, grouping and delivery
//! - **Adapters** (`adapters`): JIRA and Slack HTTP clients, checkpoint file
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): command-line interface

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{CheckpointError, FeedError, LookupError, NotifyError, RunError};
pub use domain::models::{ActivityRecord, Attachment, Config, FeedEntry, LabelFilter, Watermark};
pub use domain::ports::{ActivityFeed, CheckpointStore, IssueMetadataSource, WebhookSink};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{Pipeline, PipelineSettings, RunSummary};
