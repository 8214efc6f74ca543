use alloc::string::String;

use thiserror::Error;

/// Errors a [`crate::PageSource`] can report.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FetchError {
    /// The fetch failed but may succeed if retried (network hiccup, 5xx, timeout).
    ///
    /// Leaves `has_more` untouched; the next proximity trigger or an explicit retry requests
    /// the same page again.
    #[error("transient fetch failure: {0}")]
    Transient(String),
    /// The source has no more data. Equivalent to returning an empty page.
    #[error("end of data")]
    EndOfData,
}

impl FetchError {
    pub fn transient(message: impl Into<String>) -> Self {
        Self::Transient(message.into())
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transient(_))
    }
}

/// Result of resolving an in-flight page fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A non-empty page was appended and the cursor advanced.
    Appended {
        page: usize,
        count: usize,
        has_more: bool,
    },
    /// The fetch came back empty; `has_more` is now permanently `false`.
    Exhausted,
    /// A transient failure. Nothing changed except `loading`.
    Failed(FetchError),
    /// The result belonged to a request that is no longer in flight and was discarded.
    Stale,
}

impl LoadOutcome {
    pub fn appended(&self) -> usize {
        match self {
            Self::Appended { count, .. } => *count,
            _ => 0,
        }
    }
}
