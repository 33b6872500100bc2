//! Atom decoding of the JIRA activity stream.
//!
//! Only the elements the relay reads are modelled; everything else in
//! the stream (activity:object, activity:verb, usr:username, ...) is
//! ignored by the deserializer.

use serde::Deserialize;

use crate::domain::errors::FeedError;
use crate::domain::models::FeedEntry;

#[derive(Debug, Deserialize)]
struct AtomFeed {
    #[serde(rename = "entry", default)]
    entries: Vec<AtomEntry>,
}

#[derive(Debug, Deserialize)]
struct AtomEntry {
    #[serde(default)]
    title: Option<AtomText>,
    #[serde(rename = "link", default)]
    links: Vec<AtomLink>,
    #[serde(default)]
    published: Option<String>,
    #[serde(rename = "author", default)]
    authors: Vec<AtomPerson>,
    #[serde(rename = "content", default)]
    contents: Vec<AtomText>,
    #[serde(default)]
    summary: Option<AtomText>,
}

/// Text construct; `type="html"` bodies arrive entity-escaped and are
/// unescaped here, leaving the markup in `value`.
#[derive(Debug, Default, Deserialize)]
struct AtomText {
    #[serde(rename = "$text", default)]
    value: String,
}

#[derive(Debug, Deserialize)]
struct AtomLink {
    #[serde(rename = "@href", default)]
    href: String,
    #[serde(rename = "@rel", default)]
    rel: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AtomPerson {
    #[serde(default)]
    name: Option<String>,
}

impl AtomEntry {
    /// The alternate link, falling back to the first link of any kind.
    fn alternate_link(&self) -> Option<String> {
        self.links
            .iter()
            .find(|l| l.rel.as_deref().map_or(true, |rel| rel == "alternate"))
            .or_else(|| self.links.first())
            .map(|l| l.href.clone())
            .filter(|href| !href.is_empty())
    }

    fn into_feed_entry(self) -> FeedEntry {
        let link = self.alternate_link();
        let author = self
            .authors
            .into_iter()
            .find_map(|a| a.name)
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        let mut content_html: Vec<String> = self.contents.into_iter().map(|c| c.value).collect();
        if content_html.is_empty() {
            content_html.extend(self.summary.map(|s| s.value));
        }

        FeedEntry {
            author,
            link,
            published: self.published.map(|p| p.trim().to_string()),
            title_html: self.title.map(|t| t.value).unwrap_or_default(),
            content_html,
        }
    }
}

/// Decode an Atom document into feed entries, in document order.
pub fn decode_feed(body: &[u8]) -> Result<Vec<FeedEntry>, FeedError> {
    let text = std::str::from_utf8(body).map_err(|e| FeedError::Decode(e.to_string()))?;
    let feed: AtomFeed =
        quick_xml::de::from_str(text).map_err(|e| FeedError::Decode(e.to_string()))?;
    Ok(feed
        .entries
        .into_iter()
        .map(AtomEntry::into_feed_entry)
        .collect())
}
