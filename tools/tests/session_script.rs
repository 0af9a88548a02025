use std::rc::Rc;

use mailbox::{ErrorAnnouncer, Mailbox};
use reflector::ReflectorConfig;
use sk_tools::{parse_object, Session, SessionCommand, STATE_ADDRESS};

fn run_script(session: &mut Session, script: &str) -> Vec<String> {
    let mut out = Vec::new();
    for line in script.lines() {
        let Some(command) = SessionCommand::parse(line).unwrap() else {
            continue;
        };
        if command == SessionCommand::Quit {
            break;
        }
        out.extend(session.run(&command));
    }
    out
}

#[test]
fn scripted_session_walks_history() {
    let defaults = parse_object(r#"{"zoom": 1, "mode": "grid", "live": false}"#).unwrap();
    let mailbox = Rc::new(Mailbox::new());
    let mut session = Session::new(
        defaults,
        "live=true",
        ReflectorConfig::for_testing(),
        &mailbox,
        ErrorAnnouncer::new(),
    );

    let output = run_script(
        &mut session,
        "# zoom in, then switch to list view
set zoom 2.5
tick
set mode list view
tick
back
back
quit
show",
    );
    assert_eq!(
        output,
        vec![
            "pushed ?zoom=2.5&live=true",
            "pushed ?zoom=2.5&mode=list%20view&live=true",
            "at ?zoom=2.5&live=true",
            "at ?live=true",
        ]
    );

    let state = mailbox.value(STATE_ADDRESS).unwrap();
    assert_eq!(state.get("zoom"), Some(&schema::Value::Number(1.0)));
    assert_eq!(state.get("live"), Some(&schema::Value::Bool(true)));
}
