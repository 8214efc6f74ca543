use scrollpager::{
    LoadOutcome, PageSource, PagerOptions, ScrollMetrics, SliceSource, SubscriptionId,
};
use scrollpager_adapter::Controller;

use crate::{MOCK_POST_COUNT, Post, mock_posts};

/// The in-memory source backing the default feed.
pub type PostSource = SliceSource<Post>;

/// What the list footer should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FeedStatus {
    /// A page is on its way: show a spinner.
    Loading,
    Idle,
    /// Every post is revealed: hide the "load more" affordance.
    End,
}

impl FeedStatus {
    pub fn shows_spinner(self) -> bool {
        self == Self::Loading
    }

    pub fn is_end(self) -> bool {
        self == Self::End
    }
}

/// An infinite-scroll list of posts.
///
/// Wraps a [`Controller`] over a post source. The first page is requested on construction;
/// later pages follow debounced scroll events that come close to the bottom of the list.
#[derive(Debug)]
pub struct PostFeed<S = PostSource> {
    controller: Controller<Post, S>,
}

impl PostFeed<PostSource> {
    /// The default feed: 100 mock posts, pages of 10, one second of simulated latency.
    pub fn new(now_ms: u64) -> Self {
        Self::with_posts(mock_posts(MOCK_POST_COUNT), PagerOptions::default(), now_ms)
    }

    pub fn with_posts(posts: Vec<Post>, options: PagerOptions, now_ms: u64) -> Self {
        Self::with_source(SliceSource::new(posts), options, now_ms)
    }
}

impl<S: PageSource<Post>> PostFeed<S> {
    /// Builds a feed over any page source and requests the first page.
    pub fn with_source(source: S, options: PagerOptions, now_ms: u64) -> Self {
        fdebug!(
            page_size = options.page_size,
            fetch_delay_ms = options.fetch_delay_ms,
            now_ms,
            "PostFeed::with_source"
        );
        Self {
            controller: Controller::initialize(options, source, now_ms),
        }
    }

    pub fn controller(&self) -> &Controller<Post, S> {
        &self.controller
    }

    /// The posts revealed so far, in order.
    pub fn posts(&self) -> &[Post] {
        self.controller.visible()
    }

    pub fn is_loading(&self) -> bool {
        self.controller.is_loading()
    }

    pub fn has_more(&self) -> bool {
        self.controller.has_more()
    }

    pub fn status(&self) -> FeedStatus {
        if !self.has_more() {
            FeedStatus::End
        } else if self.is_loading() {
            FeedStatus::Loading
        } else {
            FeedStatus::Idle
        }
    }

    /// Forwards a raw scroll event from the list container.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics, now_ms: u64) {
        self.controller.on_scroll(metrics, now_ms);
    }

    /// Requests the next page right away, as a "load more" button would.
    pub fn load_more(&mut self, now_ms: u64) -> bool {
        self.controller.load_next_page(now_ms)
    }

    pub fn retry(&mut self, now_ms: u64) -> bool {
        self.controller.retry(now_ms)
    }

    pub fn tick(&mut self, now_ms: u64) -> Option<LoadOutcome> {
        let outcome = self.controller.tick(now_ms)?;
        fdebug!(
            now_ms,
            posts = self.posts().len(),
            status = ?self.status(),
            "PostFeed::tick"
        );
        Some(outcome)
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.controller.next_deadline()
    }

    pub fn subscribe_posts(
        &mut self,
        observer: impl Fn(&Vec<Post>) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.controller.subscribe_visible(observer)
    }

    pub fn subscribe_loading(
        &mut self,
        observer: impl Fn(&bool) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.controller.subscribe_loading(observer)
    }

    pub fn subscribe_has_more(
        &mut self,
        observer: impl Fn(&bool) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.controller.subscribe_has_more(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.controller.unsubscribe(id)
    }

    /// Tears the feed down; a page still in flight is never applied.
    pub fn dispose(&mut self) {
        self.controller.dispose();
    }

    pub fn is_disposed(&self) -> bool {
        self.controller.is_disposed()
    }
}
