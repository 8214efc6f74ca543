/// A timer-reset debouncer with a consecutive-duplicate filter.
///
/// Each `push` replaces the pending value and restarts the quiet window. `poll` releases the
/// pending value only once the window has elapsed with no newer push, and drops it when it is
/// equal to the last released value.
///
/// Time is supplied by the adapter (`now_ms`), so the debouncer never owns a timer. Hosts that
/// schedule their own wakeups can use [`Debouncer::deadline`].
#[derive(Clone, Debug)]
pub struct Debouncer<V> {
    window_ms: u64,
    pending: Option<(V, u64)>,
    last_released: Option<V>,
}

impl<V: Clone + PartialEq> Debouncer<V> {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            pending: None,
            last_released: None,
        }
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    pub fn set_window_ms(&mut self, window_ms: u64) {
        self.window_ms = window_ms;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The instant at which the pending value becomes releasable.
    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|(_, due)| *due)
    }

    pub fn push(&mut self, value: V, now_ms: u64) {
        let due = now_ms.saturating_add(self.window_ms);
        ptrace!(now_ms, due, "Debouncer::push");
        self.pending = Some((value, due));
    }

    pub fn poll(&mut self, now_ms: u64) -> Option<V> {
        let due = self.deadline()?;
        if now_ms < due {
            return None;
        }
        let (value, _) = self.pending.take()?;
        if self.last_released.as_ref() == Some(&value) {
            ptrace!(now_ms, "Debouncer::poll suppressed duplicate");
            return None;
        }
        self.last_released = Some(value.clone());
        Some(value)
    }

    /// Drops the pending value without releasing it.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Forgets the last released value, so an identical sample may be released again.
    pub fn reset_filter(&mut self) {
        self.last_released = None;
    }
}
