//! # Replay-latest Observable
//!
//! [`Observable<T>`] is a multicast value holder: it always has exactly one current value, hands
//! that value to every new subscriber immediately, and pushes each published value to all
//! subscribers synchronously, in registration order.
//!
//! It is not a queue. Values published before a subscriber joined are never replayed, only the
//! latest one is.
//!
//! # Invariants
//!
//! 1. A subscriber is called with the current value exactly once during `subscribe`.
//! 2. Subscribers are notified in registration order.
//! 3. After `unsubscribe` returns, the callback is never called again.
//! 4. Subscription ids are unique for the lifetime of the process, across all observables.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SUBSCRIPTION_ID: AtomicU64 = AtomicU64::new(1);

/// Handle identifying one subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    fn next() -> Self {
        Self(NEXT_SUBSCRIPTION_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subscription_{}", self.0)
    }
}

/// A boxed subscriber callback.
pub struct Observer<T>(Box<dyn Fn(&T) + Send>);

impl<T> Observer<T> {
    pub fn new(callback: impl Fn(&T) + Send + 'static) -> Self {
        Self(Box::new(callback))
    }

    fn notify(&self, value: &T) {
        (self.0)(value)
    }
}

impl<T> fmt::Debug for Observer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Observer(..)")
    }
}

/// Multicast holder of a current value with replay-latest semantics.
pub struct Observable<T> {
    current: T,
    subscribers: Vec<(SubscriptionId, Observer<T>)>,
}

impl<T> Observable<T> {
    pub fn new(initial: T) -> Self {
        Self {
            current: initial,
            subscribers: Vec::new(),
        }
    }

    /// The latest published value.
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Registers `observer` and immediately delivers the current value to it.
    pub fn subscribe(&mut self, observer: Observer<T>) -> SubscriptionId {
        let id = SubscriptionId::next();
        observer.notify(&self.current);
        self.subscribers.push((id, observer));
        id
    }

    /// Removes a subscriber. Returns `false` if `id` was not registered here.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Replaces the current value and notifies every subscriber.
    pub fn publish(&mut self, value: T) {
        self.current = value;
        for (_, observer) in &self.subscribers {
            observer.notify(&self.current);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
