#![forbid(unsafe_code)]

//! Observable value wrapper with change notification and version tracking.
//!
//! # Design
//!
//! [`Observable<T>`] wraps a value in shared, reference-counted storage
//! (`Rc<RefCell<..>>`). When the value changes (determined by `PartialEq`),
//! all live subscribers are notified in registration order, synchronously,
//! before the mutating call returns. There is no deferral or coalescing:
//! the tracker publishes once per pointer event and observers must see
//! every transition in event order.
//!
//! # Performance
//!
//! | Operation     | Complexity                 |
//! |---------------|----------------------------|
//! | `get()`       | O(1) plus one clone        |
//! | `set()`       | O(S) where S = subscribers |
//! | `subscribe()` | O(1) amortized             |
//!
//! # Failure modes
//!
//! - **Re-entrant set**: callbacks run with no borrow held, so a callback
//!   may mutate this or another observable. The inner mutation completes,
//!   notifications included, before the outer call returns. A subscriber
//!   graph with a cycle of such mutations recurses without bound.
//! - **Subscriber leak**: a [`Subscription`] guard held forever keeps its
//!   callback registered. Dead entries are pruned lazily on publish.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::debug;
use web_time::Instant;

/// A subscriber callback stored as a strong `Rc` in its guard, held as
/// `Weak` by the observable.
type CallbackRc<T> = Rc<dyn Fn(&T)>;
type CallbackWeak<T> = Weak<dyn Fn(&T)>;

/// Shared interior for [`Observable<T>`].
struct ObservableInner<T> {
    value: T,
    version: u64,
    /// Weak subscriber refs; dead entries are pruned on publish.
    subscribers: Vec<CallbackWeak<T>>,
}

/// A shared, version-tracked value with change notification.
///
/// Cloning an `Observable` creates a new handle to the **same** inner
/// state; both handles see the same value and share subscribers. The
/// tracker hands these out so callers can watch the current hover anchor
/// without owning the tracker.
///
/// # Invariants
///
/// 1. `version` increments by exactly 1 on each value-changing mutation.
/// 2. `set(v)` where `v == current` is a no-op: no version bump, no
///    notification.
/// 3. Subscribers are notified in registration order.
/// 4. Dropped [`Subscription`] guards stop delivery immediately; the stale
///    registry entry is pruned on the next publish.
pub struct Observable<T> {
    inner: Rc<RefCell<ObservableInner<T>>>,
}

// Manual Clone: shares the same Rc.
impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Observable")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscriber_count", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    /// Create a new observable with the given initial value.
    ///
    /// The initial version is 0 and no subscribers are registered.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ObservableInner {
                value,
                version: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Get a clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Access the current value by reference without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Set a new value. If it differs from the current value (by
    /// `PartialEq`), the version is incremented and all live subscribers
    /// are notified before this call returns.
    pub fn set(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return;
            }
            inner.value = value;
            inner.version += 1;
        }
        self.notify();
    }

    /// Modify the value in place. If the result differs from a snapshot of
    /// the old value, the version is incremented and subscribers are
    /// notified.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            let old = inner.value.clone();
            f(&mut inner.value);
            if inner.value == old {
                false
            } else {
                inner.version += 1;
                true
            }
        };
        if changed {
            self.notify();
        }
    }

    /// Subscribe to value changes. The callback receives a reference to
    /// the new value on every real change.
    ///
    /// Returns a [`Subscription`] guard; dropping it unsubscribes the
    /// callback. The callback is never invoked for the value current at
    /// subscribe time, only for changes after it.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let strong: CallbackRc<T> = Rc::new(callback);
        let weak = Rc::downgrade(&strong);
        self.inner.borrow_mut().subscribers.push(weak);
        // Holder box erases the element type, since `Rc<dyn Fn(&T)>`
        // cannot coerce to `Rc<dyn Any>` directly.
        Subscription {
            _guard: Box::new(strong),
        }
    }

    /// Current version number. Increments by 1 on each value-changing
    /// mutation; cheap dirty-checking for callers that poll.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Number of registered subscribers, including dead entries not yet
    /// pruned.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Notify live subscribers and prune dead ones.
    fn notify(&self) {
        // Collect live callbacks first; nothing is borrowed while they
        // run, so a callback may subscribe or mutate re-entrantly.
        let callbacks: Vec<CallbackRc<T>> = {
            let mut inner = self.inner.borrow_mut();
            inner.subscribers.retain(|w| w.strong_count() > 0);
            inner
                .subscribers
                .iter()
                .filter_map(|w| w.upgrade())
                .collect()
        };

        if callbacks.is_empty() {
            return;
        }

        let subscribers = callbacks.len();
        let value = self.inner.borrow().value.clone();
        let publish_start = Instant::now();

        for cb in &callbacks {
            cb(&value);
        }

        debug!(
            subscribers,
            duration_us = publish_start.elapsed().as_micros() as u64,
            "observable change propagated"
        );
    }
}

/// RAII guard for a subscriber callback.
///
/// Dropping the guard drops the strong `Rc` holding the callback, so the
/// `Weak` in the observable's registry no longer upgrades and delivery
/// stops with the next publish.
pub struct Subscription {
    _guard: Box<dyn std::any::Any>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
