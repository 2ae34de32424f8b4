//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard events and ratatui for rendering. The messaging network is
//! the in-process [`crate::service`].

use std::{
    io::{self, Stdout, stdout},
    path::Path,
};

use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;
use veil_app::{App, AppAction, AppEvent, Driver, Inbound, KeyInput, Peer, PeerId};

use crate::{InputState, service::{self, ServiceHandle, ServiceStopped}, ui};

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The messaging service stopped.
    #[error(transparent)]
    Service(#[from] ServiceStopped),

    /// Operation requires an established session.
    #[error("not connected")]
    NotConnected,

    /// No peer matched a /chat query.
    #[error("no peer matches '{0}'")]
    PeerNotFound(String),

    /// /photo pointed at a missing file.
    #[error("file not found: {0}")]
    PhotoNotFound(String),
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Handles terminal I/O (crossterm), rendering (ratatui), and the
/// in-process messaging service. Owns the input state for text editing.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    service: Option<ServiceHandle>,
    input_state: InputState,
}

impl TerminalDriver {
    /// Create a new terminal driver.
    pub fn new() -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let event_stream = EventStream::new();

        Ok(Self { terminal, event_stream, service: None, input_state: InputState::new() })
    }

    /// Convert crossterm `KeyCode` to `KeyInput`.
    fn convert_key(code: KeyCode) -> Option<KeyInput> {
        match code {
            KeyCode::Char(c) => Some(KeyInput::Char(c)),
            KeyCode::Enter => Some(KeyInput::Enter),
            KeyCode::Backspace => Some(KeyInput::Backspace),
            KeyCode::Delete => Some(KeyInput::Delete),
            KeyCode::Tab => Some(KeyInput::Tab),
            KeyCode::Esc => Some(KeyInput::Esc),
            KeyCode::Left => Some(KeyInput::Left),
            KeyCode::Right => Some(KeyInput::Right),
            KeyCode::Up => Some(KeyInput::Up),
            KeyCode::Down => Some(KeyInput::Down),
            KeyCode::Home => Some(KeyInput::Home),
            KeyCode::End => Some(KeyInput::End),
            _ => None,
        }
    }

    fn service(&self) -> Result<&ServiceHandle, TerminalError> {
        self.service.as_ref().ok_or(TerminalError::NotConnected)
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    async fn poll_event(&mut self, app: &mut App) -> Result<Vec<AppAction>, Self::Error> {
        let timeout = tokio::time::Duration::from_millis(100);

        tokio::select! {
            biased;

            // Terminal events
            maybe_event = self.event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) if key_event.kind == KeyEventKind::Press => {
                        match Self::convert_key(key_event.code) {
                            Some(key_input) => Ok(self.input_state.handle_key(key_input, app)),
                            None => Ok(vec![]),
                        }
                    },
                    Some(Ok(Event::Resize(cols, rows))) => {
                        Ok(app.handle(AppEvent::Resize(cols, rows)))
                    },
                    Some(Err(e)) => Err(TerminalError::Io(e)),
                    _ => Ok(vec![]),
                }
            }

            // Tick timeout
            () = tokio::time::sleep(timeout) => {
                Ok(app.handle(AppEvent::Tick))
            }
        }
    }

    async fn connect(&mut self) -> Result<u64, Self::Error> {
        let handle = service::spawn_service();
        let session_id = handle.session_id;
        self.service = Some(handle);
        Ok(session_id)
    }

    async fn resolve_peer(&mut self, query: &str) -> Result<Peer, Self::Error> {
        self.service()?
            .resolve(query)
            .await?
            .ok_or_else(|| TerminalError::PeerNotFound(query.to_string()))
    }

    async fn send_text(&mut self, peer_id: PeerId, payload: &str) -> Result<(), Self::Error> {
        Ok(self.service()?.send_text(peer_id, payload).await?)
    }

    async fn send_photo(&mut self, peer_id: PeerId, path: &str) -> Result<(), Self::Error> {
        if !Path::new(path).is_file() {
            return Err(TerminalError::PhotoNotFound(path.to_string()));
        }
        Ok(self.service()?.send_photo(peer_id).await?)
    }

    async fn mark_read(&mut self, peer_id: PeerId) -> Result<(), Self::Error> {
        Ok(self.service()?.mark_read(peer_id).await?)
    }

    async fn recv_message(&mut self) -> Option<Inbound> {
        self.service.as_mut().and_then(|s| s.inbound.try_recv().ok())
    }

    fn is_connected(&self) -> bool {
        self.service.is_some()
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        self.terminal.draw(|frame| {
            ui::render(frame, app, &self.input_state);
        })?;
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(ref service) = self.service {
            service.stop();
        }
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        self.stop();
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}
