//! Named channels that replay their latest value to new subscribers.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// A subscriber callback.
///
/// Receives `None` when the mailbox has not been sent a value yet.
/// Identity (for [`Mailbox::unsubscribe`]) is the `Rc` allocation, so keep
/// the `Rc` you subscribed with.
pub type Callback<T> = Rc<dyn Fn(Option<&T>)>;

/// Wraps a closure as a [`Callback`].
pub fn callback<T>(f: impl Fn(Option<&T>) + 'static) -> Callback<T> {
    Rc::new(f)
}

struct Channel<T> {
    value: Option<T>,
    callbacks: Vec<Callback<T>>,
}

impl<T> Default for Channel<T> {
    fn default() -> Self {
        Self {
            value: None,
            callbacks: Vec::new(),
        }
    }
}

/// Distributes values to subscribers by address.
///
/// Subscribing delivers the current value immediately, then every later
/// value sent to the same address. Subscribe and send may happen in any
/// order. Channels are created on first use and never removed.
///
/// Delivery is synchronous on the caller's stack. Callbacks may call back
/// into the mailbox; a callback that sends to its own address recurses.
pub struct Mailbox<T> {
    channels: RefCell<HashMap<String, Channel<T>>>,
}

impl<T> Default for Mailbox<T> {
    fn default() -> Self {
        Self {
            channels: RefCell::new(HashMap::new()),
        }
    }
}

impl<T: Clone> Mailbox<T> {
    /// Creates an empty mailbox.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` at `address` and calls it with the current value.
    pub fn subscribe(&self, address: &str, callback: &Callback<T>) {
        let current = {
            let mut channels = self.channels.borrow_mut();
            let channel = channels.entry(address.to_string()).or_default();
            channel.callbacks.push(Rc::clone(callback));
            channel.value.clone()
        };
        callback(current.as_ref());
    }

    /// Removes every registration of `callback` at `address`.
    pub fn unsubscribe(&self, address: &str, callback: &Callback<T>) {
        let mut channels = self.channels.borrow_mut();
        let Some(channel) = channels.get_mut(address) else {
            return;
        };
        for i in (0..channel.callbacks.len()).rev() {
            if same_callback(&channel.callbacks[i], callback) {
                channel.callbacks.remove(i);
            }
        }
    }

    /// Stores `value` at `address` and delivers it to every subscriber in
    /// subscription order.
    pub fn send(&self, address: &str, value: T) {
        let callbacks = {
            let mut channels = self.channels.borrow_mut();
            let channel = channels.entry(address.to_string()).or_default();
            channel.value = Some(value.clone());
            channel.callbacks.clone()
        };
        tracing::trace!(address, subscribers = callbacks.len(), "mailbox send");
        for callback in callbacks {
            callback(Some(&value));
        }
    }

    /// Returns a copy of the value last sent to `address`.
    #[must_use]
    pub fn value(&self, address: &str) -> Option<T> {
        self.channels
            .borrow()
            .get(address)
            .and_then(|channel| channel.value.clone())
    }

    /// Returns the number of registrations at `address`.
    #[must_use]
    pub fn subscriber_count(&self, address: &str) -> usize {
        self.channels
            .borrow()
            .get(address)
            .map_or(0, |channel| channel.callbacks.len())
    }
}

impl<T> fmt::Debug for Mailbox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let channels = self.channels.borrow();
        let mut addresses: Vec<_> = channels.keys().collect();
        addresses.sort();
        f.debug_struct("Mailbox")
            .field("addresses", &addresses)
            .finish()
    }
}

fn same_callback<T>(a: &Callback<T>, b: &Callback<T>) -> bool {
    // Compare allocations only; vtable pointers are not unique.
    Rc::as_ptr(a).cast::<()>() == Rc::as_ptr(b).cast::<()>()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<Option<i32>>>>, Callback<i32>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let cb = callback(move |value: Option<&i32>| sink.borrow_mut().push(value.copied()));
        (seen, cb)
    }

    #[test]
    fn subscribe_before_send_delivers_none() {
        let mailbox = Mailbox::new();
        let (seen, cb) = recorder();
        mailbox.subscribe("x", &cb);
        assert_eq!(*seen.borrow(), vec![None]);
    }

    #[test]
    fn subscribe_after_send_replays_value() {
        let mailbox = Mailbox::new();
        mailbox.send("x", 5);
        let (seen, cb) = recorder();
        mailbox.subscribe("x", &cb);
        assert_eq!(*seen.borrow(), vec![Some(5)]);
    }

    #[test]
    fn send_reaches_all_subscribers_in_order() {
        let mailbox = Mailbox::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        let first = {
            let order = Rc::clone(&order);
            callback(move |v: Option<&i32>| order.borrow_mut().push(("first", v.copied())))
        };
        let second = {
            let order = Rc::clone(&order);
            callback(move |v: Option<&i32>| order.borrow_mut().push(("second", v.copied())))
        };
        mailbox.subscribe("x", &first);
        mailbox.subscribe("x", &second);
        order.borrow_mut().clear();

        mailbox.send("x", 7);
        assert_eq!(
            *order.borrow(),
            vec![("first", Some(7)), ("second", Some(7))]
        );
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let mailbox = Mailbox::new();
        let (seen, cb) = recorder();
        mailbox.subscribe("x", &cb);
        mailbox.unsubscribe("x", &cb);
        mailbox.send("x", 1);
        assert_eq!(*seen.borrow(), vec![None]);
        assert_eq!(mailbox.subscriber_count("x"), 0);
    }

    #[test]
    fn unsubscribe_removes_every_registration() {
        let mailbox = Mailbox::new();
        let (seen, cb) = recorder();
        let (_, other) = recorder();
        mailbox.subscribe("x", &cb);
        mailbox.subscribe("x", &other);
        mailbox.subscribe("x", &cb);
        assert_eq!(mailbox.subscriber_count("x"), 3);

        mailbox.unsubscribe("x", &cb);
        assert_eq!(mailbox.subscriber_count("x"), 1);
        mailbox.send("x", 2);
        assert_eq!(*seen.borrow(), vec![None, None]);
    }

    #[test]
    fn unsubscribe_unknown_is_noop() {
        let mailbox: Mailbox<i32> = Mailbox::new();
        let (_, cb) = recorder();
        mailbox.unsubscribe("nowhere", &cb);
        assert_eq!(mailbox.subscriber_count("nowhere"), 0);
    }

    #[test]
    fn send_without_subscribers_keeps_value() {
        let mailbox = Mailbox::new();
        mailbox.send("x", 1);
        mailbox.send("x", 2);
        assert_eq!(mailbox.value("x"), Some(2));
        assert_eq!(mailbox.value("y"), None);
    }

    #[test]
    fn addresses_are_independent() {
        let mailbox = Mailbox::new();
        let (seen, cb) = recorder();
        mailbox.subscribe("a", &cb);
        mailbox.send("b", 9);
        assert_eq!(*seen.borrow(), vec![None]);
    }

    #[test]
    fn callback_may_reenter_mailbox() {
        let mailbox = Rc::new(Mailbox::new());
        let relay = {
            let mailbox = Rc::clone(&mailbox);
            callback(move |v: Option<&i32>| {
                if let Some(v) = v {
                    mailbox.send("doubled", v * 2);
                }
            })
        };
        mailbox.subscribe("input", &relay);
        mailbox.send("input", 21);
        assert_eq!(mailbox.value("doubled"), Some(42));
    }
}
