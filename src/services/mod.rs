pub mod entry_parser;
pub mod grouper;
pub mod markup;
pub mod notifier;
pub mod pipeline;

pub use entry_parser::EntryParser;
pub use grouper::{group_records, ActivityGroup};
pub use notifier::Notifier;
pub use pipeline::{Pipeline, PipelineSettings, RunSummary};
