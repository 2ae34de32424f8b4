//! Input state and key handling for the TUI.
//!
//! This module owns all text input state (buffer, cursor) and handles
//! character-level key events. Command parsing happens here on Enter;
//! Tab runs context completion and falls back to cycling chats.

use veil_app::{App, AppAction, KeyInput};

use crate::commands::{self, Command};

/// Input state for the TUI.
///
/// Manages the text input buffer and cursor position.
/// Handles all character-level key events.
#[derive(Debug, Default)]
pub struct InputState {
    /// Text buffer for user input.
    buffer: String,
    /// Cursor position within the buffer.
    cursor: usize,
}

impl InputState {
    /// Create a new empty input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text in the input buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Handle a key input event.
    ///
    /// Returns actions to process (may be empty for input-only keys,
    /// or contain send/chat actions for commands).
    pub fn handle_key(&mut self, key: KeyInput, app: &mut App) -> Vec<AppAction> {
        match key {
            KeyInput::Char(c) => {
                self.buffer.insert(self.cursor, c);
                self.cursor = self.cursor.saturating_add(c.len_utf8());
                vec![AppAction::Render]
            },
            KeyInput::Backspace => {
                if let Some((idx, _)) = self.buffer[..self.cursor].char_indices().next_back() {
                    self.buffer.remove(idx);
                    self.cursor = idx;
                }
                vec![AppAction::Render]
            },
            KeyInput::Delete => {
                if self.cursor < self.buffer.len() {
                    self.buffer.remove(self.cursor);
                }
                vec![AppAction::Render]
            },
            KeyInput::Left => {
                if let Some((idx, _)) = self.buffer[..self.cursor].char_indices().next_back() {
                    self.cursor = idx;
                }
                vec![AppAction::Render]
            },
            KeyInput::Right => {
                if let Some(c) = self.buffer[self.cursor..].chars().next() {
                    self.cursor = self.cursor.saturating_add(c.len_utf8());
                }
                vec![AppAction::Render]
            },
            KeyInput::Home => {
                self.cursor = 0;
                vec![AppAction::Render]
            },
            KeyInput::End => {
                self.cursor = self.buffer.len();
                vec![AppAction::Render]
            },
            KeyInput::Enter => self.handle_enter(app),
            KeyInput::Tab => self.handle_tab(app),
            KeyInput::Esc => vec![AppAction::Quit],
            KeyInput::Up | KeyInput::Down => vec![],
        }
    }

    /// Handle Enter key - parse command and call App API.
    fn handle_enter(&mut self, app: &mut App) -> Vec<AppAction> {
        let text = std::mem::take(&mut self.buffer);
        self.cursor = 0;

        if text.trim().is_empty() {
            return vec![];
        }

        match commands::parse(&text) {
            Command::Chat { target } => app.open_chat(target),
            Command::Back => app.close_chat(),
            Command::ToggleCode => app.toggle_code(),
            Command::ToggleCloak => app.toggle_cloak(),
            Command::Lang { language } => app.set_language(&language),
            Command::Photo { path } => app.send_photo(path),
            Command::Help => app.show_help(),
            Command::Quit => app.quit(),
            Command::Message { content } => app.send_line(&content),
            Command::Unknown { input } => {
                app.set_status(format!("Invalid command: {input}. Type /help for commands"));
                vec![AppAction::Render]
            },
            Command::InvalidArgs { usage } => {
                app.set_status(format!("Usage: {usage}"));
                vec![AppAction::Render]
            },
        }
    }

    /// Handle Tab key - complete the line, or cycle chats.
    ///
    /// When the buffer has a viable completion (command names, language
    /// names, emoji codes) the buffer is replaced with it. Otherwise Tab
    /// cycles to the next open chat in sorted order, wrapping around.
    fn handle_tab(&mut self, app: &mut App) -> Vec<AppAction> {
        if let Some(completed) = commands::complete(&self.buffer) {
            self.buffer = completed;
            self.cursor = self.buffer.len();
            return vec![AppAction::Render];
        }

        let chats = app.chats();
        if chats.is_empty() {
            return vec![];
        }

        let mut peer_ids: Vec<_> = chats.keys().copied().collect();
        peer_ids.sort_unstable();

        let current_idx = app.active_chat().and_then(|id| peer_ids.iter().position(|&p| p == id));
        let len = peer_ids.len();
        let next_idx = current_idx.map_or(0, |idx| {
            let next = idx.saturating_add(1);
            if next >= len { 0 } else { next }
        });

        if let Some(&next_peer) = peer_ids.get(next_idx) {
            app.set_active_chat(next_peer);
        }

        vec![AppAction::Render]
    }
}

#[cfg(test)]
mod tests {
    use veil_app::AppEvent;

    use super::*;

    fn type_line(input: &mut InputState, app: &mut App, text: &str) {
        for c in text.chars() {
            input.handle_key(KeyInput::Char(c), app);
        }
    }

    #[test]
    fn char_input_adds_to_buffer() {
        let mut input = InputState::new();
        let mut app = App::new(0);

        input.handle_key(KeyInput::Char('h'), &mut app);
        input.handle_key(KeyInput::Char('i'), &mut app);

        assert_eq!(input.buffer(), "hi");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn backspace_removes_char() {
        let mut input = InputState::new();
        let mut app = App::new(0);

        input.handle_key(KeyInput::Char('a'), &mut app);
        input.handle_key(KeyInput::Char('b'), &mut app);
        input.handle_key(KeyInput::Backspace, &mut app);

        assert_eq!(input.buffer(), "a");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn multibyte_chars_keep_cursor_on_boundaries() {
        let mut input = InputState::new();
        let mut app = App::new(0);

        input.handle_key(KeyInput::Char('é'), &mut app);
        input.handle_key(KeyInput::Char('x'), &mut app);
        input.handle_key(KeyInput::Left, &mut app);
        input.handle_key(KeyInput::Backspace, &mut app);

        assert_eq!(input.buffer(), "x");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn enter_clears_buffer() {
        let mut input = InputState::new();
        let mut app = App::new(0);

        type_line(&mut input, &mut app, "test");
        input.handle_key(KeyInput::Enter, &mut app);

        assert!(input.buffer().is_empty());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn cursor_movement() {
        let mut input = InputState::new();
        let mut app = App::new(0);

        type_line(&mut input, &mut app, "abc");

        input.handle_key(KeyInput::Home, &mut app);
        assert_eq!(input.cursor(), 0);

        input.handle_key(KeyInput::End, &mut app);
        assert_eq!(input.cursor(), 3);

        input.handle_key(KeyInput::Left, &mut app);
        assert_eq!(input.cursor(), 2);

        input.handle_key(KeyInput::Right, &mut app);
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn enter_dispatches_toggle_command() {
        let mut input = InputState::new();
        let mut app = App::new(0);

        type_line(&mut input, &mut app, "/togglecode");
        input.handle_key(KeyInput::Enter, &mut app);

        assert!(app.mode().code);
    }

    #[test]
    fn enter_sends_message_to_active_chat() {
        let mut input = InputState::new();
        let mut app = App::new(0);
        app.handle(AppEvent::ChatOpened { peer_id: 1, peer_name: "alice".into() });

        type_line(&mut input, &mut app, "hello");
        let actions = input.handle_key(KeyInput::Enter, &mut app);

        assert_eq!(actions, vec![
            AppAction::SendMessage { peer_id: 1, payload: "hello".into() },
            AppAction::Render
        ]);
    }

    #[test]
    fn tab_completes_command_prefix() {
        let mut input = InputState::new();
        let mut app = App::new(0);

        type_line(&mut input, &mut app, "/togglecl");
        input.handle_key(KeyInput::Tab, &mut app);

        assert_eq!(input.buffer(), "/togglecloak");
        assert_eq!(input.cursor(), "/togglecloak".len());
    }

    #[test]
    fn tab_completes_emoji_code() {
        let mut input = InputState::new();
        let mut app = App::new(0);

        type_line(&mut input, &mut app, "hi :smi");
        input.handle_key(KeyInput::Tab, &mut app);

        assert_eq!(input.buffer(), "hi :smile:");
    }

    #[test]
    fn tab_cycles_chats_when_nothing_completes() {
        let mut input = InputState::new();
        let mut app = App::new(0);

        app.handle(AppEvent::ChatOpened { peer_id: 1, peer_name: "alice".into() });
        app.handle(AppEvent::ChatOpened { peer_id: 2, peer_name: "bob".into() });
        assert_eq!(app.active_chat(), Some(2));

        input.handle_key(KeyInput::Tab, &mut app);
        assert_eq!(app.active_chat(), Some(1));

        input.handle_key(KeyInput::Tab, &mut app);
        assert_eq!(app.active_chat(), Some(2));
    }

    #[test]
    fn esc_quits() {
        let mut input = InputState::new();
        let mut app = App::new(0);

        assert_eq!(input.handle_key(KeyInput::Esc, &mut app), vec![AppAction::Quit]);
    }
}
