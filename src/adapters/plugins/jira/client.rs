//! JIRA HTTP client.
//!
//! Fetches the activity stream for the configured project keys and
//! looks up single issues through the REST API v3. Both use basic auth.
//! Feed failures are absorbed here (logged, then "no data"); issue
//! lookup failures are returned to the caller.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Method, RequestBuilder};

use crate::domain::errors::{FeedError, LookupError};
use crate::domain::models::{FeedEntry, JiraSettings};
use crate::domain::ports::{ActivityFeed, IssueMetadataSource};

use super::super::error_chain;
use super::feed::decode_feed;
use super::models::JiraIssue;

/// Read timeout for the activity feed. Issue lookups use the client default.
const FEED_TIMEOUT: Duration = Duration::from_secs(15);

/// A halved page size must stay above this to be worth retrying.
const MIN_PAGE_SIZE: u32 = 10;

/// Page size for the single retry after an incomplete read.
///
/// Returns `None` once halving would not leave more than
/// [`MIN_PAGE_SIZE`] entries.
pub fn halved_page_size(current: u32) -> Option<u32> {
    let halved = current / 2;
    (halved > MIN_PAGE_SIZE).then_some(halved)
}

/// Run `fetch` at `page_size`, retrying once at half the size when the
/// server cut the body short.
///
/// Every failure is logged; `None` means "treat as no new data".
pub async fn fetch_with_retry<F, Fut>(page_size: u32, mut fetch: F) -> Option<Vec<FeedEntry>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Vec<FeedEntry>, FeedError>>,
{
    let err = match fetch(page_size).await {
        Ok(entries) => return Some(entries),
        Err(err) => err,
    };
    log_feed_error(&err, page_size);
    if !err.is_incomplete_read() {
        return None;
    }

    let Some(smaller) = halved_page_size(page_size) else {
        tracing::warn!(page_size, "page size too small to halve, giving up");
        return None;
    };
    tracing::info!(page_size = smaller, "retrying activity feed with a smaller page");
    match fetch(smaller).await {
        Ok(entries) => Some(entries),
        Err(err) => {
            log_feed_error(&err, smaller);
            None
        }
    }
}

fn log_feed_error(err: &FeedError, page_size: u32) {
    match err {
        FeedError::Timeout(_) => tracing::warn!(
            page_size,
            error = %err,
            "activity feed timed out; treating as no new data"
        ),
        _ => tracing::error!(page_size, error = %err, "activity feed fetch failed"),
    }
}

/// Heuristic over the error chain: did the body end before it should have?
pub(crate) fn looks_incomplete(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    ["incomplete", "end of file", "unexpected eof", "before message completed"]
        .iter()
        .any(|needle| lower.contains(needle))
}

fn classify_feed_error(err: &reqwest::Error) -> FeedError {
    let message = error_chain(err);
    if err.is_timeout() {
        FeedError::Timeout(message)
    } else if err.is_body() || err.is_decode() {
        if looks_incomplete(&message) {
            FeedError::IncompleteRead(message)
        } else {
            FeedError::ChunkedTransfer(message)
        }
    } else {
        FeedError::Transport(message)
    }
}

/// HTTP client for the JIRA activity stream and REST API.
#[derive(Debug, Clone)]
pub struct JiraClient {
    http: Client,
    settings: JiraSettings,
}

impl JiraClient {
    pub fn new(settings: JiraSettings) -> Self {
        Self {
            http: Client::new(),
            settings,
        }
    }

    /// Activity stream URL for `max_results` entries of the configured keys.
    pub fn activity_url(&self, max_results: u32) -> String {
        format!(
            "{}/activity?maxResults={}&streams=key+IS+{}&providers=thirdparty+dvcs-streams-provider+issues&os_authType=basic&title=undefined",
            self.settings.base_url,
            max_results,
            self.settings.project_keys.join("+")
        )
    }

    /// REST URL of a single issue.
    pub fn issue_url(&self, issue_key: &str) -> String {
        format!("{}/rest/api/3/issue/{}", self.settings.base_url, issue_key)
    }

    fn authorized(&self, method: Method, url: &str) -> RequestBuilder {
        self.http.request(method, url).basic_auth(
            &self.settings.credentials.user,
            Some(&self.settings.credentials.password),
        )
    }

    /// Fetch and decode one page of the activity stream.
    pub async fn fetch_activity(&self, max_results: u32) -> Result<Vec<FeedEntry>, FeedError> {
        let url = self.activity_url(max_results);
        tracing::debug!(url = %url, "fetching activity feed");

        let resp = self
            .authorized(Method::GET, &url)
            .timeout(FEED_TIMEOUT)
            .send()
            .await
            .map_err(|e| classify_feed_error(&e))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(FeedError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.bytes().await.map_err(|e| classify_feed_error(&e))?;
        decode_feed(&body)
    }
}

#[async_trait]
impl ActivityFeed for JiraClient {
    async fn fetch_entries(&self) -> Option<Vec<FeedEntry>> {
        fetch_with_retry(self.settings.max_results, |page_size| {
            self.fetch_activity(page_size)
        })
        .await
    }
}

#[async_trait]
impl IssueMetadataSource for JiraClient {
    async fn issue_labels(&self, issue_key: &str) -> Result<Vec<String>, LookupError> {
        let url = self.issue_url(issue_key);
        let resp = self
            .authorized(Method::GET, &url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| LookupError::Request {
                key: issue_key.to_string(),
                message: error_chain(&e),
            })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(LookupError::Status {
                key: issue_key.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let issue = resp.json::<JiraIssue>().await.map_err(|e| LookupError::Decode {
            key: issue_key.to_string(),
            message: error_chain(&e),
        })?;
        tracing::debug!(issue_key, labels = ?issue.fields.labels, "issue labels");
        Ok(issue.fields.labels)
    }
}
