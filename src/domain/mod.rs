//! Domain layer for the activity relay
//!
//! Core records, settings and error types, plus the port traits the
//! services talk to. Nothing in here performs I/O.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{CheckpointError, FeedError, LookupError, NotifyError, RunError};
