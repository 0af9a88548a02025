//! Navigable history: the host boundary and an in-memory stack.

use std::collections::VecDeque;
use std::num::NonZeroUsize;

/// The host's navigable history, reduced to what the reflector needs.
///
/// A browser implementation reads `location.search` and calls
/// `history.pushState`; path and origin never change.
pub trait History {
    /// Returns the query string of the current entry, without the leading `?`.
    fn query(&self) -> String;

    /// Pushes a new entry with the given query string and makes it current.
    ///
    /// Never replaces the current entry and never reloads.
    fn push(&mut self, query: &str);
}

impl<H: History + ?Sized> History for &mut H {
    fn query(&self) -> String {
        (**self).query()
    }

    fn push(&mut self, query: &str) {
        (**self).push(query);
    }
}

/// A bounded in-memory history with back/forward navigation.
///
/// Pushing discards any forward entries. When full, the oldest entry is
/// evicted. There is always a current entry.
#[derive(Debug, Clone)]
pub struct HistoryStack {
    entries: VecDeque<String>,
    current: usize,
    capacity: NonZeroUsize,
}

impl HistoryStack {
    /// Creates a history whose only entry has the given query.
    #[must_use]
    pub fn new(capacity: NonZeroUsize, initial_query: impl Into<String>) -> Self {
        let mut entries = VecDeque::with_capacity(capacity.get());
        entries.push_back(initial_query.into());
        Self {
            entries,
            current: 0,
            capacity,
        }
    }

    /// Returns the capacity of the stack.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Returns the number of entries stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; a history has at least one entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the index of the current entry, oldest first.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.current
    }

    /// Returns the current entry's query string.
    #[must_use]
    pub fn current(&self) -> &str {
        self.entries.get(self.current).map_or("", String::as_str)
    }

    /// Moves to the previous entry. Returns `false` at the oldest entry.
    pub fn back(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Moves to the next entry. Returns `false` at the newest entry.
    pub fn forward(&mut self) -> bool {
        if self.current + 1 >= self.entries.len() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Returns an iterator from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl History for HistoryStack {
    fn query(&self) -> String {
        self.current().to_string()
    }

    fn push(&mut self, query: &str) {
        self.entries.truncate(self.current + 1);
        self.entries.push_back(query.to_string());
        if self.entries.len() > self.capacity.get() {
            self.entries.pop_front();
        }
        self.current = self.entries.len() - 1;
    }
}
