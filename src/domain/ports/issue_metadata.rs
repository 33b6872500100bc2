use async_trait::async_trait;

use crate::domain::errors::LookupError;

/// Port for looking up a single issue's metadata.
///
/// Only consulted when a label allow-list is configured.
#[async_trait]
pub trait IssueMetadataSource: Send + Sync {
    /// Labels currently applied to `issue_key`.
    async fn issue_labels(&self, issue_key: &str) -> Result<Vec<String>, LookupError>;
}
