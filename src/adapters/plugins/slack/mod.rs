//! Slack incoming-webhook adapter.

pub mod client;
pub mod models;
