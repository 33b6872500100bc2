//! HTTP adapters for the external systems the relay talks to.
//!
//! `jira` reads the activity stream and issue metadata; `slack` posts
//! notifications to an incoming webhook.

pub mod jira;
pub mod slack;

use std::error::Error;

/// Render an error and its sources as one `a: b: c` line.
///
/// `reqwest` keeps the interesting detail (hyper's "end of file before
/// message length reached") a few sources down.
pub(crate) fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
