use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{
    FetchError, LoadOutcome, Page, PageRequest, PageSource, PagerOptions, PagerPhase,
    ScrollMetrics, Subject, SubscriptionId,
};

/// A headless, scroll-gated incremental pagination engine.
///
/// The pager owns the revealed prefix of a dataset plus the `loading` / `has_more` flags, and
/// decides when the next page may be requested. It does not own the data source or any timer:
/// - `begin_load` passes the gate and hands out a [`PageRequest`];
/// - the adapter fetches it (now, or after a delay);
/// - `complete_load` applies the result.
///
/// `loading` doubles as the re-entrancy guard, so page N is always appended before page N+1
/// is requested. Once `has_more` is `false` it stays `false`.
///
/// For a timer-driven controller with debounced scroll handling, see the
/// `scrollpager-adapter` crate.
#[derive(Debug)]
pub struct Pager<T> {
    options: PagerOptions,
    current_page: usize,
    visible: Subject<Vec<T>>,
    loading: Subject<bool>,
    has_more: Subject<bool>,
    in_flight: Option<PageRequest>,
    last_error: Option<FetchError>,
    next_subscription: u64,
}

impl<T: Clone> Pager<T> {
    pub fn new(options: PagerOptions) -> Self {
        pdebug!(
            page_size = options.page_size,
            proximity_threshold = options.proximity_threshold,
            "Pager::new"
        );
        Self {
            options,
            current_page: 1,
            visible: Subject::new(Vec::new()),
            loading: Subject::new(false),
            has_more: Subject::new(true),
            in_flight: None,
            last_error: None,
            next_subscription: 0,
        }
    }

    pub fn options(&self) -> &PagerOptions {
        &self.options
    }

    pub fn page_size(&self) -> usize {
        self.options.effective_page_size()
    }

    /// The 1-based cursor of the next page to request.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// The revealed items, in reveal order.
    pub fn visible(&self) -> &[T] {
        self.visible.get()
    }

    pub fn len(&self) -> usize {
        self.visible.get().len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.get().is_empty()
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.get()
    }

    pub fn has_more(&self) -> bool {
        *self.has_more.get()
    }

    pub fn phase(&self) -> PagerPhase {
        if !self.has_more() {
            PagerPhase::Exhausted
        } else if self.is_loading() {
            PagerPhase::Fetching
        } else {
            PagerPhase::Idle
        }
    }

    pub fn in_flight(&self) -> Option<PageRequest> {
        self.in_flight
    }

    /// The most recent transient failure, cleared by the next successful load.
    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    /// The request `begin_load` would issue next.
    pub fn next_request(&self) -> PageRequest {
        PageRequest::new(self.current_page, self.page_size())
    }

    /// Whether a fetch may start now: not loading and more data remains.
    pub fn can_load(&self) -> bool {
        !self.is_loading() && self.has_more()
    }

    /// Whether the scroll position is close enough to the bottom to want another page.
    pub fn is_near_bottom(&self, metrics: ScrollMetrics) -> bool {
        metrics.is_within(self.options.proximity_threshold)
    }

    /// The full scroll-proximity gate: near the bottom, not loading, and more data remains.
    pub fn should_load_for(&self, metrics: ScrollMetrics) -> bool {
        self.is_near_bottom(metrics) && self.can_load()
    }

    /// Passes the load gate and marks a fetch as in flight.
    ///
    /// Returns `None` (and changes nothing) while a fetch is already in flight or after the
    /// source ran dry.
    pub fn begin_load(&mut self) -> Option<PageRequest> {
        if !self.can_load() {
            ptrace!(
                loading = self.is_loading(),
                has_more = self.has_more(),
                "Pager::begin_load gated"
            );
            return None;
        }
        let request = self.next_request();
        pdebug!(
            page = request.page,
            offset = request.offset(),
            "Pager::begin_load"
        );
        self.in_flight = Some(request);
        self.loading.replace(true);
        Some(request)
    }

    /// Applies the result of the in-flight fetch.
    ///
    /// `loading` is always released last, after the data and `has_more` observers ran.
    pub fn complete_load(
        &mut self,
        request: PageRequest,
        result: Result<Page<T>, FetchError>,
    ) -> LoadOutcome {
        if self.in_flight != Some(request) {
            pwarn!(
                page = request.page,
                in_flight = ?self.in_flight,
                "Pager::complete_load: result for a request that is not in flight"
            );
            return LoadOutcome::Stale;
        }
        self.in_flight = None;

        let outcome = match result {
            Ok(page) if page.is_empty() => self.exhaust(),
            Ok(page) => self.append(page),
            Err(FetchError::EndOfData) => self.exhaust(),
            Err(err) => {
                pwarn!(page = request.page, error = %err, "Pager::complete_load failed");
                self.last_error = Some(err.clone());
                LoadOutcome::Failed(err)
            }
        };

        self.loading.replace(false);
        outcome
    }

    /// Drops the in-flight request without touching the revealed data.
    ///
    /// Returns `true` if a fetch was in flight.
    pub fn abort_load(&mut self) -> bool {
        let Some(request) = self.in_flight.take() else {
            return false;
        };
        pdebug!(page = request.page, "Pager::abort_load");
        self.loading.replace(false);
        true
    }

    /// Gate, fetch and apply in one step, with no latency.
    ///
    /// Returns `None` if the gate did not pass.
    pub fn load_next_page_with<S: PageSource<T> + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Option<LoadOutcome> {
        let request = self.begin_load()?;
        let result = source.fetch(request);
        Some(self.complete_load(request, result))
    }

    pub fn subscribe_visible(
        &mut self,
        observer: impl Fn(&Vec<T>) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = self.allocate_subscription();
        self.visible.subscribe(id, Arc::new(observer));
        id
    }

    pub fn subscribe_loading(
        &mut self,
        observer: impl Fn(&bool) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = self.allocate_subscription();
        self.loading.subscribe(id, Arc::new(observer));
        id
    }

    pub fn subscribe_has_more(
        &mut self,
        observer: impl Fn(&bool) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = self.allocate_subscription();
        self.has_more.subscribe(id, Arc::new(observer));
        id
    }

    /// Removes a subscription. Returns `false` if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.visible.unsubscribe(id)
            || self.loading.unsubscribe(id)
            || self.has_more.unsubscribe(id)
    }

    /// Removes every subscription (e.g. when the view is torn down).
    pub fn clear_subscriptions(&mut self) {
        self.visible.clear_observers();
        self.loading.clear_observers();
        self.has_more.clear_observers();
    }

    pub fn subscription_count(&self) -> usize {
        self.visible.observer_count()
            + self.loading.observer_count()
            + self.has_more.observer_count()
    }

    fn allocate_subscription(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription = self.next_subscription.wrapping_add(1);
        id
    }

    fn exhaust(&mut self) -> LoadOutcome {
        pdebug!(
            page = self.current_page,
            visible = self.len(),
            "Pager: source exhausted"
        );
        self.last_error = None;
        self.has_more.replace(false);
        LoadOutcome::Exhausted
    }

    fn append(&mut self, page: Page<T>) -> LoadOutcome {
        let count = page.items.len();
        let short = count < self.page_size();
        let ends = !page.has_more || (self.options.end_on_short_page && short);
        let appended_page = self.current_page;

        self.visible.update(|visible| visible.extend(page.items));
        self.current_page = self.current_page.saturating_add(1);
        self.last_error = None;
        if ends {
            self.has_more.replace(false);
        }

        pdebug!(
            page = appended_page,
            count,
            visible = self.len(),
            has_more = self.has_more(),
            "Pager: page appended"
        );
        LoadOutcome::Appended {
            page: appended_page,
            count,
            has_more: self.has_more(),
        }
    }
}
