// SPDX-License-Identifier: MPL-2.0
//! Synchronous listener registry.
//!
//! State holders own a [`Listeners`] and call [`Listeners::notify`] after each
//! mutation. Listeners run immediately, in subscription order, on the caller's
//! thread. There is no deferred re-render: whoever wants to react subscribes.

use std::fmt;

/// Identifies a registered listener so it can be removed later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener<E> = Box<dyn FnMut(&E) + Send>;

/// Ordered set of listeners for events of type `E`.
pub struct Listeners<E> {
    next_id: u64,
    entries: Vec<(ListenerId, Listener<E>)>,
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<E> fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}

impl<E> Listeners<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` and returns its id.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&E) + Send + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Calls every listener with `event`.
    pub fn notify(&mut self, event: &E) {
        for (_, listener) in &mut self.entries {
            listener(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn listeners_run_in_subscription_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut listeners = Listeners::<u32>::new();

        let first = Arc::clone(&log);
        listeners.subscribe(move |value| first.lock().unwrap().push(("first", *value)));
        let second = Arc::clone(&log);
        listeners.subscribe(move |value| second.lock().unwrap().push(("second", *value)));

        listeners.notify(&7);

        assert_eq!(*log.lock().unwrap(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let count = Arc::new(Mutex::new(0));
        let mut listeners = Listeners::<()>::new();

        let counter = Arc::clone(&count);
        let id = listeners.subscribe(move |_| *counter.lock().unwrap() += 1);

        listeners.notify(&());
        assert!(listeners.unsubscribe(id));
        listeners.notify(&());

        assert_eq!(*count.lock().unwrap(), 1);
        assert!(listeners.is_empty());
    }

    #[test]
    fn unsubscribe_unknown_id_returns_false() {
        let mut listeners = Listeners::<()>::new();
        let id = listeners.subscribe(|_| {});
        assert!(listeners.unsubscribe(id));
        assert!(!listeners.unsubscribe(id));
    }

    #[test]
    fn ids_are_not_reused() {
        let mut listeners = Listeners::<()>::new();
        let a = listeners.subscribe(|_| {});
        listeners.unsubscribe(a);
        let b = listeners.subscribe(|_| {});
        assert_ne!(a, b);
        assert_eq!(listeners.len(), 1);
    }
}
