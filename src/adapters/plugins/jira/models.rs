//! JIRA REST API response models.
//!
//! Only the fields the relay reads are mapped.

use serde::{Deserialize, Serialize};

/// An issue returned by `GET /rest/api/3/issue/{key}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JiraIssue {
    /// Issue key, e.g. `PROJ-1`.
    #[serde(default)]
    pub key: String,
    /// The issue's fields; only labels are read.
    #[serde(default)]
    pub fields: JiraIssueFields,
}

/// The subset of issue fields used for filtering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JiraIssueFields {
    /// Label names applied to the issue.
    #[serde(default)]
    pub labels: Vec<String>,
}
