use crate::domain::errors::CheckpointError;
use crate::domain::models::{Attachment, Watermark};

/// Port for the durable watermark of one project.
pub trait CheckpointStore: Send + Sync {
    /// Read the watermark. A project that was never notified yields
    /// [`Watermark::ZERO`]; an unreadable checkpoint is an error.
    fn load(&self) -> Result<Watermark, CheckpointError>;

    /// Replace the checkpoint with `attachment` (including its `ts`).
    fn save(&self, attachment: &Attachment) -> Result<(), CheckpointError>;
}
