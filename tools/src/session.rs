//! An interactive state-reflection session over text commands.

use std::rc::Rc;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use mailbox::{ErrorAnnouncer, Mailbox};
use reflector::{History, HistoryStack, Reflector, ReflectorConfig};
use schema::QueryObject;
use serde::Serialize;

/// Address the session publishes the page state on.
pub const STATE_ADDRESS: &str = "page-state";

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// `set <key> <value>`: change one key of the live state.
    Set { key: String, raw: String },
    /// `tick`: reflect pending changes now.
    Tick,
    /// `back`: navigate to the previous history entry.
    Back,
    /// `forward`: navigate to the next history entry.
    Forward,
    /// `show`: print the live state.
    Show,
    /// `history`: print the history entries.
    History,
    /// `quit`: end the session.
    Quit,
}

impl SessionCommand {
    /// Parses one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let command = match word {
            "set" => {
                let rest = rest.trim_start();
                let Some((key, raw)) = rest.split_once(char::is_whitespace) else {
                    bail!("usage: set <key> <value>");
                };
                Self::Set {
                    key: key.to_string(),
                    raw: raw.trim_start().to_string(),
                }
            }
            "tick" => Self::Tick,
            "back" => Self::Back,
            "forward" => Self::Forward,
            "show" => Self::Show,
            "history" => Self::History,
            "quit" | "exit" => Self::Quit,
            other => bail!("unknown command {other:?}"),
        };
        Ok(Some(command))
    }
}

/// History entries as printed by the `history` command.
#[derive(Debug, Serialize)]
pub struct HistoryView<'a> {
    pub position: usize,
    pub entries: Vec<&'a str>,
}

/// A reflector over an in-memory history, publishing every URL-driven state
/// change to a mailbox.
pub struct Session {
    reflector: Reflector<HistoryStack>,
    errors: ErrorAnnouncer,
}

impl Session {
    /// Starts a session at `initial_query` and restores state from it.
    ///
    /// State changes go to `mailbox`; failed commands go to `errors`.
    pub fn new(
        defaults: QueryObject,
        initial_query: &str,
        config: ReflectorConfig,
        mailbox: &Rc<Mailbox<QueryObject>>,
        errors: ErrorAnnouncer,
    ) -> Self {
        let history = config.history_stack(initial_query);
        let publisher = Rc::clone(mailbox);
        let mut reflector = Reflector::new(defaults, history, config)
            .with_on_change(move |state| publisher.send(STATE_ADDRESS, state.clone()));
        reflector.on_ready();
        Self { reflector, errors }
    }

    /// Returns the announcer failed commands are reported to.
    pub const fn errors(&self) -> &ErrorAnnouncer {
        &self.errors
    }

    /// Returns the reflector driving this session.
    pub const fn reflector(&self) -> &Reflector<HistoryStack> {
        &self.reflector
    }

    /// Runs a command, returning text to print.
    ///
    /// Failures are announced rather than returned, and yield `None`.
    pub fn run(&mut self, command: &SessionCommand) -> Option<String> {
        match self.try_run(command) {
            Ok(output) => output,
            Err(err) => {
                self.errors.announce(format!("{err:#}"));
                None
            }
        }
    }

    /// Reflects pending changes if the poll interval has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        self.reflector
            .poll(now)
            .then(|| format!("pushed ?{}", self.reflector.history().query()))
    }

    fn try_run(&mut self, command: &SessionCommand) -> Result<Option<String>> {
        let output = match command {
            SessionCommand::Set { key, raw } => {
                if !self.reflector.default_state().contains_key(key) {
                    bail!("unknown key {key:?}");
                }
                let value = self.reflector.schema().coerce(key, raw);
                self.reflector.set(key.as_str(), value);
                None
            }
            SessionCommand::Tick => Some(if self.reflector.tick() {
                format!("pushed ?{}", self.reflector.history().query())
            } else {
                "unchanged".to_string()
            }),
            SessionCommand::Back => {
                if !self.reflector.history_mut().back() {
                    bail!("already at the oldest entry");
                }
                self.reflector.on_navigate();
                Some(format!("at ?{}", self.reflector.history().query()))
            }
            SessionCommand::Forward => {
                if !self.reflector.history_mut().forward() {
                    bail!("already at the newest entry");
                }
                self.reflector.on_navigate();
                Some(format!("at ?{}", self.reflector.history().query()))
            }
            SessionCommand::Show => Some(
                serde_json::to_string(self.reflector.state()).context("serialize state")?,
            ),
            SessionCommand::History => {
                let history = self.reflector.history();
                let view = HistoryView {
                    position: history.position(),
                    entries: history.iter().collect(),
                };
                Some(serde_json::to_string(&view).context("serialize history")?)
            }
            SessionCommand::Quit => None,
        };
        Ok(output)
    }
}
