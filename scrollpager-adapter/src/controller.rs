use scrollpager::{
    Debouncer, FetchError, LoadOutcome, Page, PageRequest, PageSource, Pager, PagerOptions,
    ScrollMetrics, SubscriptionId,
};

use alloc::vec::Vec;

use crate::Deferred;

type PendingFetch<T> = Deferred<(PageRequest, Result<Page<T>, FetchError>)>;

/// A framework-neutral controller that wraps a `scrollpager::Pager` and provides the common
/// infinite-scroll workflow (debounced scroll handling, latency-deferred page fetches).
///
/// This type does not hold any UI objects or timers. Adapters drive it by calling:
/// - `on_scroll` whenever the scroll container reports an event
/// - `tick(now_ms)` on each frame/timer tick (resolves debounced scroll samples and due fetches)
///
/// Hosts that prefer real timers over a frame loop can sleep until `next_deadline()`.
///
/// Call `dispose` when the view goes away: the pending fetch is discarded and every later call
/// becomes a no-op.
#[derive(Debug)]
pub struct Controller<T, S> {
    pager: Pager<T>,
    source: S,
    scroll: Debouncer<ScrollMetrics>,
    pending: Option<PendingFetch<T>>,
    disposed: bool,
}

impl<T: Clone, S: PageSource<T>> Controller<T, S> {
    /// Creates an idle controller. Nothing is requested until `load_next_page` or a scroll.
    pub fn new(options: PagerOptions, source: S) -> Self {
        Self::from_pager(Pager::new(options), source)
    }

    /// Creates a controller and immediately requests the first page.
    pub fn initialize(options: PagerOptions, source: S, now_ms: u64) -> Self {
        let mut c = Self::new(options, source);
        c.load_next_page(now_ms);
        c
    }

    pub fn from_pager(pager: Pager<T>, source: S) -> Self {
        let scroll = Debouncer::new(pager.options().scroll_debounce_ms);
        Self {
            pager,
            source,
            scroll,
            pending: None,
            disposed: false,
        }
    }

    pub fn pager(&self) -> &Pager<T> {
        &self.pager
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_parts(self) -> (Pager<T>, S) {
        (self.pager, self.source)
    }

    pub fn visible(&self) -> &[T] {
        self.pager.visible()
    }

    pub fn is_loading(&self) -> bool {
        self.pager.is_loading()
    }

    pub fn has_more(&self) -> bool {
        self.pager.has_more()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Whether a fetched page is waiting for its delay to elapse.
    pub fn has_pending_fetch(&self) -> bool {
        self.pending.is_some()
    }

    /// The earliest instant at which `tick` has work to do.
    pub fn next_deadline(&self) -> Option<u64> {
        if self.disposed {
            return None;
        }
        let fetch = self.pending.as_ref().map(Deferred::due_ms);
        match (self.scroll.deadline(), fetch) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Requests the next page; it is applied by the first `tick` after `fetch_delay_ms`.
    ///
    /// Returns `false` (and changes nothing) while a fetch is in flight, after the source ran
    /// dry, or once disposed.
    pub fn load_next_page(&mut self, now_ms: u64) -> bool {
        if self.disposed {
            return false;
        }
        let Some(request) = self.pager.begin_load() else {
            return false;
        };
        let result = self.source.fetch(request);
        let delay_ms = self.pager.options().fetch_delay_ms;
        adebug!(
            page = request.page,
            now_ms,
            delay_ms,
            ok = result.is_ok(),
            "Controller::load_next_page"
        );
        self.pending = Some(Deferred::new((request, result), now_ms, delay_ms));
        true
    }

    /// Feeds a raw scroll event into the debouncer.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics, now_ms: u64) {
        if self.disposed {
            return;
        }
        self.scroll.push(metrics, now_ms);
    }

    /// Evaluates a (debounced) scroll sample and requests the next page when it is near the
    /// bottom, not already loading, and more data remains.
    ///
    /// Returns `true` if a page was requested.
    pub fn on_scroll_proximity(&mut self, metrics: ScrollMetrics, now_ms: u64) -> bool {
        if self.disposed {
            return false;
        }
        let near = self.pager.should_load_for(metrics);
        atrace!(
            distance = metrics.distance_to_bottom(),
            near,
            now_ms,
            "Controller::on_scroll_proximity"
        );
        near && self.load_next_page(now_ms)
    }

    /// Advances the controller.
    ///
    /// - A debounced scroll sample whose quiet window elapsed is evaluated first.
    /// - A deferred fetch that is due is then applied, and its outcome returned.
    pub fn tick(&mut self, now_ms: u64) -> Option<LoadOutcome> {
        if self.disposed {
            return None;
        }
        if let Some(metrics) = self.scroll.poll(now_ms) {
            self.on_scroll_proximity(metrics, now_ms);
        }

        if !self.pending.as_ref().is_some_and(|p| p.is_due(now_ms)) {
            return None;
        }
        let (request, result) = self.pending.take()?.into_payload();
        let outcome = self.pager.complete_load(request, result);
        if matches!(outcome, LoadOutcome::Failed(_)) {
            // The sample that triggered the failed fetch must be able to trigger it again.
            self.scroll.reset_filter();
        }
        adebug!(now_ms, ?outcome, "Controller::tick resolved fetch");
        Some(outcome)
    }

    /// Re-requests the page whose fetch last failed.
    ///
    /// Returns `false` if the last load did not fail or the gate is closed.
    pub fn retry(&mut self, now_ms: u64) -> bool {
        if self.pager.last_error().is_none() {
            return false;
        }
        self.load_next_page(now_ms)
    }

    /// Discards the pending fetch (if any) and releases the `loading` guard.
    pub fn cancel_pending(&mut self) -> bool {
        if self.pending.take().is_none() {
            return false;
        }
        self.pager.abort_load();
        true
    }

    /// Tears the controller down: observers are dropped first so the discarded fetch notifies
    /// nobody, then the pending fetch and scroll sample are cancelled.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        adebug!(
            pending = self.pending.is_some(),
            visible = self.pager.len(),
            "Controller::dispose"
        );
        self.pager.clear_subscriptions();
        self.pending = None;
        self.pager.abort_load();
        self.scroll.cancel();
        self.disposed = true;
    }

    pub fn subscribe_visible(
        &mut self,
        observer: impl Fn(&Vec<T>) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.pager.subscribe_visible(observer)
    }

    pub fn subscribe_loading(
        &mut self,
        observer: impl Fn(&bool) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.pager.subscribe_loading(observer)
    }

    pub fn subscribe_has_more(
        &mut self,
        observer: impl Fn(&bool) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.pager.subscribe_has_more(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.pager.unsubscribe(id)
    }
}
