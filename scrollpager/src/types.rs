use alloc::vec::Vec;

/// Scroll container geometry, sampled by the adapter on scroll events.
///
/// All values are in the same unit (pixels, rows, cells...), along the scroll axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    /// Current scroll offset (aka `scrollTop`).
    pub offset: u64,
    /// Visible height of the container (aka `clientHeight`).
    pub viewport: u32,
    /// Total height of the scrollable content (aka `scrollHeight`).
    pub content: u64,
}

impl ScrollMetrics {
    pub fn new(offset: u64, viewport: u32, content: u64) -> Self {
        Self {
            offset,
            viewport,
            content,
        }
    }

    /// Distance between the bottom edge of the viewport and the end of the content.
    ///
    /// Saturates at zero when the viewport is past the end (overscroll/bounce).
    pub fn distance_to_bottom(&self) -> u64 {
        self.content
            .saturating_sub(self.offset)
            .saturating_sub(self.viewport as u64)
    }

    pub fn is_within(&self, threshold: u64) -> bool {
        self.distance_to_bottom() <= threshold
    }
}

/// A request for one page of the backing dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRequest {
    /// 1-based page cursor.
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }

    /// Index of the first item of this page in the backing dataset.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Exclusive end index of this page (not clamped to the dataset length).
    pub fn end(&self) -> usize {
        self.offset().saturating_add(self.page_size)
    }
}

/// One page returned by a [`crate::PageSource`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page<T> {
    pub items: Vec<T>,
    /// `false` when the source knows there is nothing after this page.
    pub has_more: bool,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, has_more: bool) -> Self {
        Self { items, has_more }
    }

    /// An empty, final page.
    pub fn end() -> Self {
        Self {
            items: Vec::new(),
            has_more: false,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PagerPhase {
    /// No fetch in flight; more pages may follow.
    Idle,
    Fetching,
    /// Terminal: the source ran out of pages.
    Exhausted,
}

/// Identifies a subscription registered on a [`crate::Pager`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub(crate) u64);
