//! Transcript area
//!
//! Displays the active chat's transcript. Outgoing entries show the
//! pipeline's local echo, so what appears here is what the session
//! modes produced, not necessarily what was typed.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem},
};
use veil_app::{App, Entry};
use veil_core::LocalEcho;

const BORDER_SIZE: u16 = 2;

/// Render the transcript area.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let title = app
        .active_chat_state()
        .map_or_else(|| " No Chat ".to_string(), |chat| format!(" {} ", chat.peer_name));

    let block = Block::default().borders(Borders::ALL).title(title);

    let mut items: Vec<ListItem> = app.active_chat_state().map_or_else(
        || {
            vec![ListItem::new(Line::from(Span::styled(
                "Use /chat <username> to start a conversation",
                Style::default().fg(Color::DarkGray),
            )))]
        },
        |chat| {
            chat.entries
                .iter()
                .map(|entry| ListItem::new(entry_text(&chat.peer_name, entry)))
                .collect()
        },
    );

    // Keep the tail visible: drop items from the front until the rest
    // fits the viewport.
    let visible_height = area.height.saturating_sub(BORDER_SIZE) as usize;
    while items.len() > 1 && items.iter().map(ListItem::height).sum::<usize>() > visible_height {
        items.remove(0);
    }

    let list = List::new(items).block(block);

    frame.render_widget(list, area);
}

/// Lay out one transcript entry, possibly spanning multiple lines.
fn entry_text(peer_name: &str, entry: &Entry) -> Text<'static> {
    let sender_style = Style::default().add_modifier(Modifier::BOLD);
    match entry {
        Entry::Incoming(text) => Text::from(Line::from(vec![
            Span::styled(format!("{peer_name}: "), sender_style.fg(Color::Cyan)),
            Span::raw(text.clone()),
        ])),
        Entry::Outgoing(echo) => echo_text(echo),
        Entry::Notice(text) => Text::from(Line::from(Span::styled(
            text.clone(),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ))),
    }
}

/// Lay out the local echo of an outgoing entry.
fn echo_text(echo: &LocalEcho) -> Text<'static> {
    let you = Span::styled("you: ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD));
    match echo {
        LocalEcho::Plain(text) => Text::from(Line::from(vec![you, Span::raw(text.clone())])),
        LocalEcho::Code { block, .. } => {
            let mut lines = vec![Line::from(you)];
            lines.extend(block.lines().map(|line| {
                let style = if line.starts_with("```") {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default().fg(Color::Yellow)
                };
                Line::from(Span::styled(line.to_string(), style))
            }));
            Text::from(lines)
        },
        LocalEcho::Cloaked(display) => Text::from(Line::from(vec![
            you,
            Span::styled(display.clone(), Style::default().fg(Color::DarkGray)),
        ])),
        LocalEcho::Delivered => Text::from(Line::from(vec![
            you,
            Span::styled("[Delivered]", Style::default().fg(Color::Green)),
        ])),
    }
}
