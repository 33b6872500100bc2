//! Interpretation of the HTML fragments embedded in feed entries.
//!
//! Entry titles look like
//! `<a ...>alice</a> created <a ...><span>PROJ-1</span> - Fix login</a>`.
//! They are flattened into a sequence of top-level [`MarkupNode`]s and the
//! issue title and action are then read off that sequence by position.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Node};

/// `<br>`, `<br/>`, `<br />` and `</p>`, any case.
static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>|</p\s*>").unwrap());

/// A top-level node of an HTML fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    /// Bare text between elements, as written.
    Text(String),
    /// An element, reduced to the concatenated text of its descendants.
    Element(String),
}

impl MarkupNode {
    /// Text as it takes part in title/action matching.
    ///
    /// Bare text is whitespace-trimmed; element text is kept verbatim.
    pub fn rendered(&self) -> &str {
        match self {
            Self::Text(text) => text.trim(),
            Self::Element(text) => text,
        }
    }
}

/// Split an HTML fragment into its top-level text and element nodes.
///
/// Comments, doctypes and processing instructions are dropped.
pub fn parse_nodes(html: &str) -> Vec<MarkupNode> {
    let fragment = Html::parse_fragment(html);
    fragment
        .root_element()
        .children()
        .filter_map(|child| match child.value() {
            Node::Text(text) => Some(MarkupNode::Text(String::from(&**text))),
            Node::Element(_) => {
                ElementRef::wrap(child).map(|el| MarkupNode::Element(el.text().collect()))
            }
            _ => None,
        })
        .collect()
}

/// The issue title: the first node mentioning `issue_key`, with the key
/// removed. Empty when no node mentions the key.
pub fn issue_title(issue_key: &str, nodes: &[MarkupNode]) -> String {
    nodes
        .iter()
        .map(MarkupNode::rendered)
        .find(|text| text.contains(issue_key))
        .map(|text| text.replace(issue_key, ""))
        .unwrap_or_default()
}

/// The action: text of every node after the first, with the issue
/// heading (`issue_key` + `issue_title`) cut out once the key shows up.
///
/// The heading is removed from the running text after each node, so a
/// heading that appears mid-action is dropped wherever it lands.
pub fn issue_action(issue_key: &str, issue_title: &str, nodes: &[MarkupNode]) -> String {
    let heading = format!("{issue_key}{issue_title}");
    nodes
        .iter()
        .enumerate()
        .fold(String::new(), |mut action, (index, node)| {
            if index > 0 {
                action.push_str(node.rendered());
            }
            if action.contains(issue_key) {
                action = action.replace(&heading, "");
            }
            action
        })
}

/// Plain text of the entry's content blocks, fenced for the chat client.
///
/// Line breaks and paragraph ends become newlines, tags are stripped and
/// the tracker's "Read more" link is shortened to `...`. Returns an empty
/// string when there is no text.
pub fn comment_block<S: AsRef<str>>(blocks: &[S]) -> String {
    let text: String = blocks.iter().map(|b| block_text(b.as_ref())).collect();
    let text = text.trim().replace("Read more", "...");
    if text.is_empty() {
        String::new()
    } else {
        format!("```\n{text}\n```")
    }
}

fn block_text(html: &str) -> String {
    let with_breaks = LINE_BREAK.replace_all(html, "\n");
    Html::parse_fragment(&with_breaks)
        .root_element()
        .text()
        .collect()
}
