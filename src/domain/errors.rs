//! Domain errors for the activity relay.
//!
//! Each external concern gets its own enum so callers can decide, per
//! concern, whether a failure is recovered locally or ends the run.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while fetching or decoding the activity feed.
///
/// These never escape the feed adapter: every variant is logged and
/// treated as "no new data".
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Feed request timed out: {0}")]
    Timeout(String),

    #[error("Incomplete read while streaming feed: {0}")]
    IncompleteRead(String),

    #[error("Chunked transfer error: {0}")]
    ChunkedTransfer(String),

    #[error("Feed request failed: {0}")]
    Transport(String),

    #[error("Feed request returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Feed decode failed: {0}")]
    Decode(String),
}

impl FeedError {
    /// True when the server cut the body short, which the tracker does
    /// when an entry contains characters it cannot serialize.
    pub fn is_incomplete_read(&self) -> bool {
        matches!(self, Self::IncompleteRead(_))
    }
}

/// Failures while looking up a single issue's metadata.
///
/// Not recovered: a failed lookup aborts the run.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Issue lookup for {key} failed: {message}")]
    Request { key: String, message: String },

    #[error("Issue lookup for {key} returned {status}: {body}")]
    Status { key: String, status: u16, body: String },

    #[error("Issue lookup for {key} returned malformed JSON: {message}")]
    Decode { key: String, message: String },
}

/// Failures while reading or writing the checkpoint file.
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Failed to read checkpoint {}: {message}", .path.display())]
    Read { path: PathBuf, message: String },

    #[error("Checkpoint {} is invalid: {message}", .path.display())]
    Invalid { path: PathBuf, message: String },

    #[error("Failed to write checkpoint {}: {message}", .path.display())]
    Write { path: PathBuf, message: String },
}

/// Failures while delivering one notification.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Webhook request failed: {0}")]
    Request(String),

    #[error("Webhook returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),
}

/// Errors that end a pipeline run early.
#[derive(Debug, Error)]
pub enum RunError {
    /// The stored watermark could not be read; nothing is sent.
    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),

    /// An issue metadata lookup failed mid-run.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}
