use async_trait::async_trait;

use crate::domain::errors::NotifyError;
use crate::domain::models::Attachment;

/// Port for the chat webhook that receives notifications.
#[async_trait]
pub trait WebhookSink: Send + Sync {
    /// Post one attachment. Implementations must not send `ts`.
    async fn post(&self, attachment: &Attachment) -> Result<(), NotifyError>;
}
