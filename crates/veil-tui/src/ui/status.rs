//! Status bar
//!
//! Displays connection status, active chat information, and the most
//! recent status message.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use veil_app::{App, ConnectionState};

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let connection_status = match app.connection_state() {
        ConnectionState::Disconnected => {
            Span::styled("Disconnected", Style::default().fg(Color::Red))
        },
        ConnectionState::Connecting => {
            Span::styled("Connecting...", Style::default().fg(Color::Yellow))
        },
        ConnectionState::Connected { session_id } => Span::styled(
            format!("Connected ({session_id})"),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    };

    let chat_info = app.active_chat_state().map_or_else(String::new, |chat| {
        format!(" | Chat: {} | Messages: {}", chat.peer_name, chat.entries.len())
    });

    let status_message =
        app.status_message().map_or_else(String::new, |msg| format!(" | {msg}"));

    let status_line = Line::from(vec![
        Span::raw(" "),
        connection_status,
        Span::styled(chat_info, Style::default().fg(Color::DarkGray)),
        Span::raw(status_message),
    ]);

    let paragraph =
        Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
