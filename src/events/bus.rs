//! Synchronous, same-thread event bus.
//!
//! The bus provides a simple publish/subscribe mechanism where:
//! - Listeners register via `EventBus::subscribe()`
//! - Any holder of an `EventPublisher` broadcasts via `publish()`
//! - Every registered listener runs before `publish()` returns
//!
//! All of this runs on the UI thread, so the bus uses `Rc`/`RefCell` and is
//! `!Send`.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Listener<E> = Rc<dyn Fn(&E)>;

struct BusInner<E> {
    listeners: RefCell<Vec<(u64, Listener<E>)>>,
    next_id: Cell<u64>,
}

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Typed broadcast channel for application-wide event distribution.
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use traydrop::events::EventBus;
///
/// let bus: EventBus<u32> = EventBus::new();
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = seen.clone();
/// bus.subscribe(move |n: &u32| sink.borrow_mut().push(*n));
///
/// bus.publisher().publish(7);
/// assert_eq!(*seen.borrow(), vec![7]);
/// ```
pub struct EventBus<E> {
    inner: Rc<BusInner<E>>,
}

impl<E: 'static> EventBus<E> {
    /// Create a new event bus with no listeners.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(BusInner {
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Register a listener. Listeners run in registration order.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&E) + 'static,
    {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        Subscription(id)
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut listeners = self.inner.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(id, _)| *id != subscription.0);
        listeners.len() != before
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Get a publisher handle for this bus.
    ///
    /// Publishers are cheap to clone. Each component that emits events
    /// should hold its own publisher.
    pub fn publisher(&self) -> EventPublisher<E> {
        EventPublisher {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl<E: 'static> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable publisher for one `EventBus`.
pub struct EventPublisher<E> {
    inner: Weak<BusInner<E>>,
}

impl<E> Clone for EventPublisher<E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<E: 'static> EventPublisher<E> {
    /// Broadcast an event to every listener, synchronously.
    ///
    /// Returns the number of listeners invoked. Listeners are snapshotted
    /// first, so a listener may subscribe or unsubscribe while running; the
    /// change takes effect from the next publish.
    ///
    /// If the bus has been dropped (app shutting down), the publish silently
    /// does nothing.
    pub fn publish(&self, event: E) -> usize {
        let Some(inner) = self.inner.upgrade() else {
            return 0;
        };
        let snapshot: Vec<Listener<E>> = inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in &snapshot {
            listener(&event);
        }
        snapshot.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording_bus() -> (EventBus<&'static str>, Rc<RefCell<Vec<&'static str>>>) {
        let bus = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        bus.subscribe(move |e: &&'static str| sink.borrow_mut().push(*e));
        (bus, seen)
    }

    #[test]
    fn test_create_bus() {
        let bus: EventBus<u8> = EventBus::new();
        assert_eq!(bus.listener_count(), 0);
        assert_eq!(bus.publisher().publish(1), 0);
    }

    #[test]
    fn test_publish_is_delivered_before_returning() {
        let (bus, seen) = recording_bus();
        let delivered = bus.publisher().publish("toggle");
        assert_eq!(delivered, 1);
        assert_eq!(*seen.borrow(), vec!["toggle"]);
    }

    #[test]
    fn test_multiple_listeners_run_in_registration_order() {
        let bus: EventBus<u8> = EventBus::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in ["first", "second", "third"] {
            let order = order.clone();
            bus.subscribe(move |_| order.borrow_mut().push(tag));
        }

        bus.publisher().publish(0);
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let bus: EventBus<u8> = EventBus::new();
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let sub = bus.subscribe(move |_| c.set(c.get() + 1));

        bus.publisher().publish(1);
        assert!(bus.unsubscribe(sub));
        assert!(!bus.unsubscribe(sub));
        bus.publisher().publish(2);

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_publisher_clone_shares_bus() {
        let (bus, seen) = recording_bus();
        let pub1 = bus.publisher();
        let pub2 = pub1.clone();

        pub1.publish("a");
        pub2.publish("b");

        assert_eq!(*seen.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn test_publish_after_bus_dropped_is_noop() {
        let (bus, seen) = recording_bus();
        let publisher = bus.publisher();
        drop(bus);

        assert_eq!(publisher.publish("late"), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_listener_may_subscribe_while_publishing() {
        let bus: Rc<EventBus<u8>> = Rc::new(EventBus::new());
        let inner_bus = Rc::downgrade(&bus);
        bus.subscribe(move |_| {
            if let Some(b) = inner_bus.upgrade() {
                b.subscribe(|_| {});
            }
        });

        assert_eq!(bus.publisher().publish(0), 1);
        assert_eq!(bus.listener_count(), 2);
    }
}
