//! Application state machine.
//!
//! This module defines the [`App`] state machine, which manages the
//! interactive state of the client completely decoupled from I/O and
//! transport mechanics.
//!
//! This is a pure state machine: API methods and [`crate::AppEvent`]
//! inputs produce [`crate::AppAction`] instructions for the runtime to
//! execute.
//!
//! # Responsibilities
//!
//! - Tracks open chats, unread badges, and the currently active chat.
//! - Owns the per-session transformation [`SessionMode`] and the random
//!   source used for template selection.
//! - Runs the outgoing pipeline on each sent line.
//! - Tracks high-level connection state for UI feedback.

use std::collections::HashMap;

use rand::{SeedableRng, rngs::SmallRng};
use veil_core::{Language, SessionMode, transform};

use crate::{
    AppAction, AppEvent, ConnectionState,
    state::{ChatState, PeerId},
};

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable without a terminal or network.
#[derive(Debug, Clone)]
pub struct App {
    /// Connection state.
    state: ConnectionState,
    /// Per-chat state (transcript, unread).
    chats: HashMap<PeerId, ChatState>,
    /// Currently active chat. `None` if no chat is open.
    active_chat: Option<PeerId>,
    /// Per-session transformation modes.
    mode: SessionMode,
    /// Random source for template selection. Seeded for determinism.
    rng: SmallRng,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
    /// Transient status message. `None` if no message.
    status_message: Option<String>,
}

impl App {
    /// Create a new App in disconnected state.
    ///
    /// `seed` fixes the template-selection sequence; pass entropy in
    /// production and a constant in tests.
    pub fn new(seed: u64) -> Self {
        Self {
            state: ConnectionState::Disconnected,
            chats: HashMap::new(),
            active_chat: None,
            mode: SessionMode::default(),
            rng: SmallRng::seed_from_u64(seed),
            terminal_size: (80, 24),
            status_message: None,
        }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Tick => vec![],
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::Connecting => {
                self.state = ConnectionState::Connecting;
                vec![AppAction::Render]
            },
            AppEvent::Connected { session_id } => {
                self.state = ConnectionState::Connected { session_id };
                self.status_message = Some("Logged in successfully".into());
                vec![AppAction::Render]
            },
            AppEvent::ChatOpened { peer_id, peer_name } => {
                self.chats
                    .entry(peer_id)
                    .or_insert_with(|| ChatState::new(peer_id, peer_name.clone()));
                self.active_chat = Some(peer_id);
                if let Some(chat) = self.chats.get_mut(&peer_id) {
                    chat.unread = false;
                }
                self.status_message = Some(format!("Session with {peer_name}"));
                vec![AppAction::Render]
            },
            AppEvent::MessageReceived { peer_id, peer_name, text } => {
                self.receive_message(peer_id, peer_name, text)
            },
            AppEvent::SendFailed { peer_id, reason } => {
                if let Some(chat) = self.chats.get_mut(&peer_id) {
                    chat.push_notice(format!("Send failed: {reason}"));
                }
                vec![AppAction::Render]
            },
            AppEvent::Error { message } => {
                self.status_message = Some(format!("Error: {message}"));
                vec![AppAction::Render]
            },
        }
    }

    /// Fold an incoming message into the owning chat.
    ///
    /// Messages for the active chat are marked read immediately; other
    /// chats keep an unread badge and surface a notification line.
    fn receive_message(
        &mut self,
        peer_id: PeerId,
        peer_name: String,
        text: String,
    ) -> Vec<AppAction> {
        let chat = self
            .chats
            .entry(peer_id)
            .or_insert_with(|| ChatState::new(peer_id, peer_name.clone()));
        chat.push_incoming(text);

        if self.active_chat == Some(peer_id) {
            vec![AppAction::MarkRead { peer_id }, AppAction::Render]
        } else {
            chat.unread = true;
            self.status_message = Some(format!("NOTIFICATION from {peer_name}"));
            vec![AppAction::Render]
        }
    }

    /// Set a status message to display to the user.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Resolve a peer and open a chat with them.
    pub fn open_chat(&mut self, query: String) -> Vec<AppAction> {
        self.status_message = Some(format!("Resolving '{query}'..."));
        vec![AppAction::OpenChat { query }, AppAction::Render]
    }

    /// Leave the active chat and return to peer selection.
    pub fn close_chat(&mut self) -> Vec<AppAction> {
        match self.active_chat.take() {
            Some(peer_id) => {
                let name = self
                    .chats
                    .get(&peer_id)
                    .map_or_else(|| peer_id.to_string(), |c| c.peer_name.clone());
                self.status_message = Some(format!("Exited chat session with {name}"));
            },
            None => self.status_message = Some("No active chat".into()),
        }
        vec![AppAction::Render]
    }

    /// Toggle code-embedding mode.
    pub fn toggle_code(&mut self) -> Vec<AppAction> {
        let status = if self.mode.toggle_code() { "ON" } else { "OFF" };
        let lang = self.mode.language.name().to_uppercase();
        self.status_message = Some(format!("Code mode {status}. Current language: {lang}"));
        vec![AppAction::Render]
    }

    /// Toggle cloak mode.
    pub fn toggle_cloak(&mut self) -> Vec<AppAction> {
        let status = if self.mode.toggle_cloak() { "ON" } else { "OFF" };
        self.status_message = Some(format!("Cloak mode {status}"));
        vec![AppAction::Render]
    }

    /// Select the template language by name.
    ///
    /// Unknown names leave the mode unchanged and surface a diagnostic
    /// listing the supported languages.
    pub fn set_language(&mut self, name: &str) -> Vec<AppAction> {
        match name.parse::<Language>() {
            Ok(language) => {
                self.mode.language = language;
                self.status_message =
                    Some(format!("Language set to {}", language.name().to_uppercase()));
            },
            Err(e) => self.status_message = Some(e.to_string()),
        }
        vec![AppAction::Render]
    }

    /// Run the pipeline over an input line and send the result.
    ///
    /// The transformed payload goes to the transport; the pipeline's
    /// echo goes to the local transcript.
    pub fn send_line(&mut self, input: &str) -> Vec<AppAction> {
        let Some(peer_id) = self.active_chat else {
            self.status_message = Some("No active chat. Use /chat <username> first".into());
            return vec![AppAction::Render];
        };

        let outgoing = transform(self.mode, input, &mut self.rng);
        if let Some(chat) = self.chats.get_mut(&peer_id) {
            chat.push_outgoing(outgoing.echo);
        }

        vec![AppAction::SendMessage { peer_id, payload: outgoing.transmit }, AppAction::Render]
    }

    /// Send a photo from a local file to the active chat.
    pub fn send_photo(&mut self, path: String) -> Vec<AppAction> {
        let Some(peer_id) = self.active_chat else {
            self.status_message = Some("No active chat. Use /chat <username> first".into());
            return vec![AppAction::Render];
        };

        if let Some(chat) = self.chats.get_mut(&peer_id) {
            chat.push_notice("[Photo sent]");
        }

        vec![AppAction::SendPhoto { peer_id, path }, AppAction::Render]
    }

    /// Show the command summary.
    pub fn show_help(&mut self) -> Vec<AppAction> {
        let lang = self.mode.language.name().to_uppercase();
        self.status_message = Some(format!(
            "/chat /back /togglecode /togglecloak /lang /photo /quit - emoji codes like :smile: \
             expand. Current language: {lang}"
        ));
        vec![AppAction::Render]
    }

    /// Quit the application.
    pub fn quit(&self) -> Vec<AppAction> {
        vec![AppAction::Quit]
    }

    /// Switch the active chat.
    pub fn set_active_chat(&mut self, peer_id: PeerId) {
        if let Some(chat) = self.chats.get_mut(&peer_id) {
            chat.unread = false;
            self.active_chat = Some(peer_id);
        }
    }

    /// Current connection state.
    pub fn connection_state(&self) -> &ConnectionState {
        &self.state
    }

    /// All open chats.
    pub fn chats(&self) -> &HashMap<PeerId, ChatState> {
        &self.chats
    }

    /// Currently active chat. `None` if no chat is open.
    pub fn active_chat(&self) -> Option<PeerId> {
        self.active_chat
    }

    /// State of the active chat. `None` if no chat is open.
    pub fn active_chat_state(&self) -> Option<&ChatState> {
        self.active_chat.and_then(|id| self.chats.get(&id))
    }

    /// Current per-session transformation modes.
    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// Transient status message. `None` if no message.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}
