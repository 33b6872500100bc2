//! JIRA adapter.
//!
//! Reads the Atom activity stream for the configured project keys and
//! looks up issue labels through the REST API.

pub mod client;
pub mod feed;
pub mod models;
