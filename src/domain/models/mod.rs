pub mod activity;
pub mod attachment;
pub mod checkpoint;
pub mod config;
pub mod label_filter;

pub use activity::{ActivityRecord, FeedEntry};
pub use attachment::Attachment;
pub use checkpoint::Watermark;
pub use config::{Config, Credentials, JiraSettings, LoggingConfig, WebhookSettings};
pub use label_filter::LabelFilter;
