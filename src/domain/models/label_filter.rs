use std::collections::BTreeSet;

/// Allow-list of issue labels.
///
/// An activity passes when its issue carries at least one allowed label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelFilter {
    allowed: BTreeSet<String>,
}

impl LabelFilter {
    /// Parse a comma-separated list such as `"bug, regression"`.
    ///
    /// Returns `None` when the list is empty, meaning "no filtering".
    pub fn parse(raw: &str) -> Option<Self> {
        let allowed: BTreeSet<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if allowed.is_empty() {
            None
        } else {
            Some(Self { allowed })
        }
    }

    /// True when any of `labels` is in the allow-list.
    pub fn admits<S: AsRef<str>>(&self, labels: &[S]) -> bool {
        labels.iter().any(|l| self.allowed.contains(l.as_ref()))
    }

    /// The allowed label names, sorted.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.allowed.iter().map(String::as_str)
    }
}
