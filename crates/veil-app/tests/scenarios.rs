//! End-to-end behavior scenarios for the App state machine and Runtime.

use std::{
    collections::VecDeque,
    io,
    sync::{Arc, Mutex},
};

use veil_app::{App, AppAction, AppEvent, Driver, Entry, Inbound, Peer, Runtime};
use veil_core::{Language, LocalEcho, cloak};

fn app_with_chat(seed: u64) -> App {
    let mut app = App::new(seed);
    let _ = app.handle(AppEvent::Connected { session_id: 1 });
    let _ = app.handle(AppEvent::ChatOpened { peer_id: 1, peer_name: "alice".into() });
    app
}

fn sent_payload(actions: &[AppAction]) -> &str {
    match actions.first() {
        Some(AppAction::SendMessage { payload, .. }) => payload,
        other => panic!("expected SendMessage, got {other:?}"),
    }
}

#[test]
fn scenario_plain_mode_sends_and_shows_emojified_text() {
    let mut app = app_with_chat(0);

    let actions = app.send_line("hi :smile:");

    assert_eq!(sent_payload(&actions), "hi 😊");
    assert_eq!(
        app.active_chat_state().and_then(|c| c.entries.last()),
        Some(&Entry::Outgoing(LocalEcho::Plain("hi 😊".into())))
    );
}

#[test]
fn scenario_code_mode_sends_python_block_from_catalog() {
    let mut app = app_with_chat(0);
    let _ = app.toggle_code();
    let _ = app.set_language("python");

    let actions = app.send_line("hello");
    let payload = sent_payload(&actions);

    // The block is one of the two python catalog entries with "hello"
    // substituted
    let expected: Vec<String> = Language::Python
        .templates()
        .iter()
        .map(|t| format!("```python\n{}\n```", t.replacen("{{message}}", "hello", 1)))
        .collect();
    assert!(expected.iter().any(|b| b == payload), "unexpected block: {payload}");

    // Local echo is the same block
    match app.active_chat_state().and_then(|c| c.entries.last()) {
        Some(Entry::Outgoing(LocalEcho::Code { language, block })) => {
            assert_eq!(*language, Language::Python);
            assert_eq!(block, payload);
        },
        other => panic!("expected code echo, got {other:?}"),
    }
}

#[test]
fn scenario_cloak_mode_sends_plaintext_and_shows_cloaked_echo() {
    let mut app = app_with_chat(0);
    let _ = app.toggle_cloak();

    let actions = app.send_line("hi :smile:");

    assert_eq!(sent_payload(&actions), "hi 😊");
    match app.active_chat_state().and_then(|c| c.entries.last()) {
        Some(Entry::Outgoing(LocalEcho::Cloaked(display))) => {
            assert!(!display.contains("hi 😊"));
            assert_eq!(cloak::reveal(display).as_deref(), Some("hi 😊"));
        },
        other => panic!("expected cloaked echo, got {other:?}"),
    }
}

#[test]
fn scenario_combined_mode_sends_code_and_shows_only_delivered() {
    let mut app = app_with_chat(0);
    let _ = app.toggle_code();
    let _ = app.toggle_cloak();

    let actions = app.send_line("secret");
    let payload = sent_payload(&actions);

    assert!(payload.starts_with("```c\n"));
    assert!(payload.contains("secret"));
    assert_eq!(
        app.active_chat_state().and_then(|c| c.entries.last()),
        Some(&Entry::Outgoing(LocalEcho::Delivered))
    );
}

#[test]
fn scenario_unsupported_language_keeps_state_and_lists_supported() {
    let mut app = app_with_chat(0);
    let before = app.mode();

    let _ = app.set_language("rust");

    assert_eq!(app.mode().language, before.language);
    let status = app.status_message().unwrap_or_default();
    assert!(status.contains("unsupported language 'rust'"), "status: {status}");
    assert!(status.contains("c, cpp, java, python"), "status: {status}");
}

// ---- Runtime with a scripted driver ----

type Step = fn(&mut App) -> Vec<AppAction>;

/// Scripted driver: each poll runs the next step against the App, then
/// quits. Sends are recorded through a shared handle.
struct ScriptedDriver {
    script: VecDeque<Step>,
    inbound: VecDeque<Inbound>,
    sent: Arc<Mutex<Vec<(u64, String)>>>,
    fail_sends: bool,
    connected: bool,
}

impl ScriptedDriver {
    fn new(steps: Vec<Step>) -> (Self, Arc<Mutex<Vec<(u64, String)>>>) {
        let sent = Arc::new(Mutex::new(Vec::new()));
        let driver = Self {
            script: steps.into_iter().collect(),
            inbound: VecDeque::new(),
            sent: Arc::clone(&sent),
            fail_sends: false,
            connected: false,
        };
        (driver, sent)
    }
}

impl Driver for ScriptedDriver {
    type Error = io::Error;

    async fn poll_event(&mut self, app: &mut App) -> Result<Vec<AppAction>, io::Error> {
        match self.script.pop_front() {
            Some(step) => Ok(step(app)),
            None => Ok(app.quit()),
        }
    }

    async fn connect(&mut self) -> Result<u64, io::Error> {
        self.connected = true;
        Ok(99)
    }

    async fn resolve_peer(&mut self, query: &str) -> Result<Peer, io::Error> {
        if query == "alice" {
            Ok(Peer { id: 1, name: "alice".into() })
        } else {
            Err(io::Error::new(io::ErrorKind::NotFound, format!("no peer matches '{query}'")))
        }
    }

    async fn send_text(&mut self, peer_id: u64, payload: &str) -> Result<(), io::Error> {
        if self.fail_sends {
            return Err(io::Error::new(io::ErrorKind::ConnectionReset, "peer unreachable"));
        }
        self.sent.lock().unwrap().push((peer_id, payload.to_string()));
        Ok(())
    }

    async fn send_photo(&mut self, _peer_id: u64, path: &str) -> Result<(), io::Error> {
        Err(io::Error::new(io::ErrorKind::NotFound, format!("file not found: {path}")))
    }

    async fn mark_read(&mut self, _peer_id: u64) -> Result<(), io::Error> {
        Ok(())
    }

    async fn recv_message(&mut self) -> Option<Inbound> {
        self.inbound.pop_front()
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn render(&mut self, _app: &App) -> Result<(), io::Error> {
        Ok(())
    }

    fn stop(&mut self) {
        self.connected = false;
    }
}

#[tokio::test]
async fn runtime_delivers_transformed_payload_to_transport() {
    let (driver, sent) = ScriptedDriver::new(vec![
        |app| app.open_chat("alice".into()),
        |app| app.send_line("hi :smile:"),
    ]);

    Runtime::new(driver, 0).run().await.unwrap();

    let sent = sent.lock().unwrap();
    assert_eq!(sent.as_slice(), &[(1, "hi 😊".to_string())]);
}

#[tokio::test]
async fn runtime_survives_failed_resolution() {
    let (driver, sent) = ScriptedDriver::new(vec![
        |app| app.open_chat("nobody".into()),
        |app| app.send_line("hello"),
    ]);

    Runtime::new(driver, 0).run().await.unwrap();

    // Resolution failed, so nothing was sent and the loop still exited
    // cleanly
    assert!(sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn runtime_folds_send_failure_back_into_transcript() {
    let (mut driver, sent) = ScriptedDriver::new(vec![
        |app| app.open_chat("alice".into()),
        |app| app.send_line("hello"),
    ]);
    driver.fail_sends = true;

    Runtime::new(driver, 0).run().await.unwrap();

    assert!(sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn runtime_delivers_inbound_messages() {
    let (mut driver, _sent) =
        ScriptedDriver::new(vec![|app| app.open_chat("alice".into()), |_app| vec![]]);
    driver.inbound.push_back(Inbound {
        peer_id: 1,
        peer_name: "alice".into(),
        text: "hey there".into(),
    });

    Runtime::new(driver, 0).run().await.unwrap();
}
