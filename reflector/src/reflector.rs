//! Keeps a state object and the URL query string in step.

use std::fmt;
use std::time::Instant;

use codec::{apply_delta, decode_query, encode_query, get_delta};
use schema::{QueryObject, Schema, Value};

use crate::config::ReflectorConfig;
use crate::history::History;

type ChangeCallback = Box<dyn FnMut(&QueryObject)>;

/// Reflects a state object to and from a navigable history.
///
/// The state given to [`Reflector::new`] is the default state: its keys and
/// value kinds are the schema for every later decode, and only keys whose
/// values differ from it are written to the URL.
///
/// Local changes go out through [`tick`](Self::tick) (or the rate-limited
/// [`poll`](Self::poll)), which pushes one history entry per batch of
/// changes. URL changes come in through [`on_navigate`](Self::on_navigate)
/// and [`on_ready`](Self::on_ready), which rebuild the state and notify the
/// change callback.
pub struct Reflector<H> {
    history: H,
    config: ReflectorConfig,
    schema: Schema,
    default_state: QueryObject,
    last_state: QueryObject,
    state: QueryObject,
    on_change: Option<ChangeCallback>,
    ready: bool,
    next_poll: Instant,
}

impl<H: History> Reflector<H> {
    /// Starts reflecting `state` into `history`.
    #[must_use]
    pub fn new(state: QueryObject, history: H, config: ReflectorConfig) -> Self {
        let next_poll = Instant::now() + config.poll_interval;
        Self {
            history,
            schema: Schema::from_object(&state),
            default_state: state.clone(),
            last_state: state.clone(),
            state,
            config,
            on_change: None,
            ready: false,
            next_poll,
        }
    }

    /// Sets the callback run after the state is rebuilt from the URL.
    #[must_use]
    pub fn with_on_change(mut self, callback: impl FnMut(&QueryObject) + 'static) -> Self {
        self.set_on_change(callback);
        self
    }

    /// Replaces the callback run after the state is rebuilt from the URL.
    pub fn set_on_change(&mut self, callback: impl FnMut(&QueryObject) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    /// Returns the live state.
    #[must_use]
    pub const fn state(&self) -> &QueryObject {
        &self.state
    }

    /// Returns the live state for mutation.
    ///
    /// Changes are picked up by the next [`tick`](Self::tick).
    pub fn state_mut(&mut self) -> &mut QueryObject {
        &mut self.state
    }

    /// Sets one key of the live state, returning the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.state.insert(key, value)
    }

    /// Returns the default state captured at construction.
    #[must_use]
    pub const fn default_state(&self) -> &QueryObject {
        &self.default_state
    }

    /// Returns the schema derived from the default state.
    #[must_use]
    pub const fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ReflectorConfig {
        &self.config
    }

    /// Returns the underlying history.
    #[must_use]
    pub const fn history(&self) -> &H {
        &self.history
    }

    /// Returns the underlying history for mutation, e.g. to navigate it.
    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    /// Runs one change-detection pass.
    ///
    /// If the live state changed since the last pass, pushes a history entry
    /// whose query holds the keys that differ from the default state. A NaN
    /// that was already there does not count as a change. Returns `true` if
    /// an entry was pushed.
    pub fn tick(&mut self) -> bool {
        if self.state.same_entries(&self.last_state) {
            tracing::trace!("state unchanged");
            return false;
        }
        self.last_state = self.state.clone();
        let query = encode_query(&get_delta(&self.state, &self.default_state));
        tracing::debug!(query = %query, "reflecting state to history");
        self.history.push(&query);
        true
    }

    /// Runs [`tick`](Self::tick) if the poll interval has elapsed at `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_poll {
            return false;
        }
        self.next_poll = now + self.config.poll_interval;
        self.tick()
    }

    /// Handles a back/forward navigation.
    ///
    /// Rebuilds the live state from the current URL on top of the defaults,
    /// then runs the change callback.
    pub fn on_navigate(&mut self) {
        let query = self.history.query();
        let delta = decode_query(&query, &self.schema);
        tracing::debug!(query = %query, changed = delta.len(), "restoring state from history");
        self.state = apply_delta(&delta, &self.default_state);
        self.last_state = self.state.clone();
        if let Some(callback) = self.on_change.as_mut() {
            callback(&self.state);
        }
    }

    /// Handles the host's one-time readiness signal.
    ///
    /// The first call restores state from the initial URL like
    /// [`on_navigate`](Self::on_navigate); later calls do nothing. Returns
    /// `true` if the state was restored.
    pub fn on_ready(&mut self) -> bool {
        if self.ready {
            return false;
        }
        self.ready = true;
        self.on_navigate();
        true
    }

    /// Stops reflecting and returns the live state and the history.
    pub fn into_parts(self) -> (QueryObject, H) {
        (self.state, self.history)
    }
}

impl<H: fmt::Debug> fmt::Debug for Reflector<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reflector")
            .field("history", &self.history)
            .field("config", &self.config)
            .field("default_state", &self.default_state)
            .field("state", &self.state)
            .field("ready", &self.ready)
            .finish_non_exhaustive()
    }
}
