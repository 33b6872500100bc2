use async_trait::async_trait;

use crate::domain::models::FeedEntry;

/// Port for the tracker's activity stream.
#[async_trait]
pub trait ActivityFeed: Send + Sync {
    /// Fetch the current page of activity, newest first as served.
    ///
    /// Returns `None` when the feed could not be fetched; implementations
    /// log the cause and the caller proceeds as if nothing were new.
    async fn fetch_entries(&self) -> Option<Vec<FeedEntry>>;
}
