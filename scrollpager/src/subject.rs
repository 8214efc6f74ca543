use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::SubscriptionId;

/// A callback fired with the current value of a [`Subject`].
pub type Observer<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A value plus the observers that want to hear about it.
///
/// Behaves like a behaviour subject: subscribing replays the current value once, and every
/// `set`/`update` notifies all observers in subscription order.
pub struct Subject<T> {
    value: T,
    observers: Vec<(SubscriptionId, Observer<T>)>,
}

impl<T> Subject<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            observers: Vec::new(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub(crate) fn subscribe(&mut self, id: SubscriptionId, observer: Observer<T>) {
        observer(&self.value);
        self.observers.push((id, observer));
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    pub(crate) fn set(&mut self, value: T) {
        self.value = value;
        self.emit();
    }

    /// Mutates the value in place, then notifies.
    pub(crate) fn update(&mut self, f: impl FnOnce(&mut T)) {
        f(&mut self.value);
        self.emit();
    }

    pub(crate) fn clear_observers(&mut self) {
        self.observers.clear();
    }

    fn emit(&self) {
        for (_, observer) in &self.observers {
            observer(&self.value);
        }
    }
}

impl<T: PartialEq> Subject<T> {
    /// Sets the value and notifies only when it actually changed.
    ///
    /// Returns `true` if observers were notified.
    pub(crate) fn replace(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.set(value);
        true
    }
}

impl<T: Clone> Clone for Subject<T> {
    /// Clones the value only; observers stay with the original.
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Subject<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Subject")
            .field("value", &self.value)
            .field("observers", &self.observers.len())
            .finish()
    }
}
