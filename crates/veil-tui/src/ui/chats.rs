//! Chats sidebar
//!
//! Displays the list of open chats with unread indicators.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use veil_app::App;

const ACTIVE_PREFIX: &str = ">";
const INACTIVE_PREFIX: &str = " ";
const UNREAD_MARKER: &str = "*";
const EMPTY_MARKER: &str = "";

enum ChatDisplayState {
    Active,
    Unread,
    Normal,
}

/// Render the chats sidebar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut peer_ids: Vec<_> = app.chats().keys().copied().collect();
    peer_ids.sort_unstable();

    let items: Vec<ListItem> = peer_ids
        .iter()
        .filter_map(|peer_id| app.chats().get(peer_id))
        .map(|chat| {
            let state = if app.active_chat() == Some(chat.peer_id) {
                ChatDisplayState::Active
            } else if chat.unread {
                ChatDisplayState::Unread
            } else {
                ChatDisplayState::Normal
            };

            let (prefix, suffix, style) = match state {
                ChatDisplayState::Active => (
                    ACTIVE_PREFIX,
                    EMPTY_MARKER,
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
                ChatDisplayState::Unread => {
                    (INACTIVE_PREFIX, UNREAD_MARKER, Style::default().fg(Color::Cyan))
                },
                ChatDisplayState::Normal => (INACTIVE_PREFIX, EMPTY_MARKER, Style::default()),
            };

            let unread_style = Style::default().fg(Color::Red);

            ListItem::new(Line::from(vec![
                Span::raw(prefix),
                Span::styled(chat.peer_name.clone(), style),
                Span::styled(suffix, unread_style),
            ]))
        })
        .collect();

    let block = Block::default().borders(Borders::ALL).title(" Chats ");
    let list = List::new(items).block(block);

    frame.render_widget(list, area);
}
