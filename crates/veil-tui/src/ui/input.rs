//! Input line
//!
//! Displays the mode-aware prompt and the input buffer with cursor.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use veil_app::App;

use crate::InputState;

const INPUT_LINE_OFFSET_Y: u16 = 1; // inside top border
const LEFT_PADDING: u16 = 1; // inside left border
const RIGHT_PADDING: u16 = 1; // inside right border

/// Build the prompt string from the session modes.
///
/// The active language shows in parentheses; enabled modes append their
/// badges, so the user always sees what a sent line will go through.
fn prompt(app: &App) -> String {
    let mode = app.mode();
    let mut prompt = format!("VEIL ({})", mode.language.name().to_uppercase());
    if mode.code {
        prompt.push_str(" [CODE]");
    }
    if mode.cloak {
        prompt.push_str(" [CLOAK]");
    }
    prompt.push_str(" > ");
    prompt
}

/// Render the input line.
#[allow(clippy::cast_possible_truncation)]
pub fn render(frame: &mut Frame, app: &App, input: &InputState, area: Rect) {
    let block = Block::default().borders(Borders::ALL);

    let prompt = prompt(app);
    let prompt_width = prompt.chars().count() as u16;

    let line = Line::from(vec![
        Span::styled(prompt, Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::raw(input.buffer().to_string()),
    ]);
    let paragraph = Paragraph::new(line).style(Style::default().fg(Color::White)).block(block);

    frame.render_widget(paragraph, area);

    let cursor_chars = input.buffer()[..input.cursor()].chars().count() as u16;
    let available_width = area.width.saturating_sub(LEFT_PADDING + prompt_width + RIGHT_PADDING);
    let cursor_offset = cursor_chars.min(available_width);

    let cursor_x = area
        .x
        .saturating_add(LEFT_PADDING)
        .saturating_add(prompt_width)
        .saturating_add(cursor_offset);
    let cursor_y = area.y.saturating_add(INPUT_LINE_OFFSET_Y);
    let max_x = area.x.saturating_add(area.width).saturating_sub(RIGHT_PADDING);
    let cursor_x = cursor_x.min(max_x);

    frame.set_cursor_position((cursor_x, cursor_y));
}
