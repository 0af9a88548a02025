use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use mailbox::{callback, Mailbox};
use reflector::{History, Reflector, ReflectorConfig};
use schema::{QueryObject, Value};

fn defaults() -> QueryObject {
    QueryObject::from_iter([("a", Value::Number(1.0)), ("b", Value::from("x"))])
}

#[test]
fn one_tick_reflects_change_and_back_restores_defaults() {
    let config = ReflectorConfig::default();
    let history = config.history_stack("");
    let mut reflector = Reflector::new(defaults(), history, config);

    reflector.set("a", 2);
    let after_one_interval = Instant::now() + Duration::from_millis(100);
    assert!(reflector.poll(after_one_interval));
    assert_eq!(reflector.history().query(), "a=2");

    assert!(reflector.history_mut().back());
    assert_eq!(reflector.history().query(), "");
    reflector.on_navigate();
    assert_eq!(reflector.state(), &defaults());
}

#[test]
fn bookmarked_url_restores_on_ready() {
    let config = ReflectorConfig::for_testing();
    let history = config.history_stack("b=saved%20view&a=0.5");
    let mut reflector = Reflector::new(defaults(), history, config);

    assert!(reflector.on_ready());
    assert_eq!(reflector.state().get("a"), Some(&Value::Number(0.5)));
    assert_eq!(reflector.state().get("b"), Some(&Value::from("saved view")));
    assert!(!reflector.tick(), "restored state must not be pushed again");
}

#[test]
fn back_and_forward_walk_through_states() {
    let config = ReflectorConfig::for_testing();
    let history = config.history_stack("");
    let mut reflector = Reflector::new(defaults(), history, config);

    for a in 2..=4 {
        reflector.set("a", a);
        assert!(reflector.tick());
    }
    assert_eq!(reflector.history().len(), 4);

    reflector.history_mut().back();
    reflector.on_navigate();
    assert_eq!(reflector.state().get("a"), Some(&Value::Number(3.0)));

    reflector.history_mut().back();
    reflector.on_navigate();
    assert_eq!(reflector.state().get("a"), Some(&Value::Number(2.0)));

    reflector.history_mut().forward();
    reflector.on_navigate();
    assert_eq!(reflector.state().get("a"), Some(&Value::Number(3.0)));

    // A new local change after navigating truncates the forward entry.
    reflector.set("b", "y");
    assert!(reflector.tick());
    assert_eq!(reflector.history().query(), "a=3&b=y");
    assert!(!reflector.history_mut().forward());
}

#[test]
fn state_changes_from_url_are_published_to_mailbox() {
    let mailbox = Rc::new(Mailbox::<QueryObject>::new());
    let received = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&received);
    let view = callback(move |state: Option<&QueryObject>| {
        if let Some(state) = state {
            sink.borrow_mut().push(state.get("a").cloned());
        }
    });
    mailbox.subscribe("page-state", &view);

    let config = ReflectorConfig::for_testing();
    let history = config.history_stack("a=8");
    let publisher = Rc::clone(&mailbox);
    let mut reflector = Reflector::new(defaults(), history, config)
        .with_on_change(move |state| publisher.send("page-state", state.clone()));

    reflector.on_ready();
    assert_eq!(*received.borrow(), vec![Some(Value::Number(8.0))]);
}

/// A history that records calls instead of storing entries.
#[derive(Debug, Default)]
struct RecordingHistory {
    location: String,
    pushes: Vec<String>,
}

impl History for RecordingHistory {
    fn query(&self) -> String {
        self.location.clone()
    }

    fn push(&mut self, query: &str) {
        self.location = query.to_string();
        self.pushes.push(query.to_string());
    }
}

#[test]
fn custom_history_sees_one_push_per_batch() {
    let mut history = RecordingHistory::default();
    {
        let mut reflector = Reflector::new(defaults(), &mut history, ReflectorConfig::for_testing());
        reflector.set("a", 5);
        reflector.set("b", "q");
        reflector.tick();
        reflector.tick();
        reflector.set("a", 1);
        reflector.tick();
    }
    assert_eq!(history.pushes, vec!["a=5&b=q".to_string(), "b=q".to_string()]);
}
