/// Configuration for [`crate::Pager`] and the adapter controller driving it.
///
/// The defaults reproduce a classic infinite-scroll feed: pages of 10, a fetch latency of one
/// second, scroll events debounced over 200ms, and a next-page trigger when the viewport is
/// within 100 units of the bottom.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize` so hosts can load it
/// from their own configuration files.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PagerOptions {
    /// Items per page. Clamped to at least 1.
    pub page_size: usize,

    /// Simulated (or budgeted) latency between requesting a page and applying it.
    pub fetch_delay_ms: u64,

    /// Quiet interval a scroll sample must survive before it is evaluated.
    pub scroll_debounce_ms: u64,

    /// Maximum distance from the bottom of the content that triggers the next page.
    pub proximity_threshold: u64,

    /// Treat a page shorter than `page_size` as the last one.
    ///
    /// Off by default: the in-memory source only ends on an empty page, so a dataset whose length
    /// is an exact multiple of `page_size` costs one extra (empty) fetch.
    pub end_on_short_page: bool,
}

impl Default for PagerOptions {
    fn default() -> Self {
        Self {
            page_size: 10,
            fetch_delay_ms: 1000,
            scroll_debounce_ms: 200,
            proximity_threshold: 100,
            end_on_short_page: false,
        }
    }
}

impl PagerOptions {
    pub fn new(page_size: usize) -> Self {
        Self::default().with_page_size(page_size)
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_fetch_delay_ms(mut self, delay_ms: u64) -> Self {
        self.fetch_delay_ms = delay_ms;
        self
    }

    pub fn with_scroll_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.scroll_debounce_ms = debounce_ms;
        self
    }

    pub fn with_proximity_threshold(mut self, threshold: u64) -> Self {
        self.proximity_threshold = threshold;
        self
    }

    pub fn with_end_on_short_page(mut self, end_on_short_page: bool) -> Self {
        self.end_on_short_page = end_on_short_page;
        self
    }

    pub(crate) fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }
}
