//! Change notifications for stores.
//!
//! Stores hold no I/O. After each change they hand the full collection to
//! every subscriber; persistence is one such subscriber.

use std::fmt;

/// Receives the full collection after each change.
pub trait Subscriber<T: ?Sized> {
    fn notify(&self, snapshot: &T);
}

impl<T: ?Sized, F> Subscriber<T> for F
where
    F: Fn(&T),
{
    fn notify(&self, snapshot: &T) {
        self(snapshot);
    }
}

/// Ordered list of subscribers owned by a store.
pub struct Subscribers<T: ?Sized> {
    inner: Vec<Box<dyn Subscriber<T>>>,
}

impl<T: ?Sized> Subscribers<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { inner: Vec::new() }
    }

    pub fn push(&mut self, subscriber: impl Subscriber<T> + 'static) {
        self.inner.push(Box::new(subscriber));
    }

    /// Notify subscribers in registration order.
    pub fn publish(&self, snapshot: &T) {
        for subscriber in &self.inner {
            subscriber.notify(snapshot);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<T: ?Sized> Default for Subscribers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Subscribers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.inner.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_publish_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subs: Subscribers<[u32]> = Subscribers::new();

        let first = Rc::clone(&log);
        subs.push(move |s: &[u32]| first.borrow_mut().push(("first", s.len())));
        let second = Rc::clone(&log);
        subs.push(move |s: &[u32]| second.borrow_mut().push(("second", s.len())));

        subs.publish(&[1, 2, 3]);
        assert_eq!(*log.borrow(), vec![("first", 3), ("second", 3)]);
        assert_eq!(subs.len(), 2);
    }

    #[test]
    fn test_empty_publish_is_noop() {
        let subs: Subscribers<[u32]> = Subscribers::default();
        assert!(subs.is_empty());
        subs.publish(&[]);
    }
}
