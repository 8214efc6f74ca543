/// A value that becomes available after a fixed delay, or never if cancelled first.
///
/// This models an asynchronous fetch without owning a timer: the adapter checks `is_due(now_ms)`
/// on each tick and takes the payload once it is. Dropping the `Deferred` is the cancellation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deferred<V> {
    pub payload: V,
    pub start_ms: u64,
    pub delay_ms: u64,
}

impl<V> Deferred<V> {
    pub fn new(payload: V, start_ms: u64, delay_ms: u64) -> Self {
        Self {
            payload,
            start_ms,
            delay_ms,
        }
    }

    pub fn due_ms(&self) -> u64 {
        self.start_ms.saturating_add(self.delay_ms)
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.delay_ms
    }

    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        self.due_ms().saturating_sub(now_ms)
    }

    pub fn into_payload(self) -> V {
        self.payload
    }
}
