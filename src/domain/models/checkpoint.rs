use std::fmt;

/// Publication epoch of the last activity that was successfully notified.
///
/// Anything published at or before the watermark has already been sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Watermark(pub i64);

impl Watermark {
    /// Watermark of a project that has never been notified.
    pub const ZERO: Self = Self(0);

    /// True when an activity published at `epoch` has not been sent yet.
    ///
    /// Activity in the same second as the watermark counts as sent.
    pub const fn admits(self, epoch: i64) -> bool {
        epoch > self.0
    }
}

impl fmt::Display for Watermark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
