//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! returning widget trees.

mod chats;
mod input;
mod status;
mod transcript;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};
use veil_app::App;

use crate::InputState;

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App, input_state: &InputState) {
    const MAIN_AREA_MIN_HEIGHT: u16 = 3;
    const INPUT_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(MAIN_AREA_MIN_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    let [main_area, input_area, status_area] = chunks.as_ref() else {
        return;
    };

    render_main_area(frame, app, *main_area);
    input::render(frame, app, input_state, *input_area);
    status::render(frame, app, *status_area);
}

/// Render the main area (chats sidebar + transcript).
fn render_main_area(frame: &mut Frame, app: &App, area: Rect) {
    const CHAT_SIDEBAR_WIDTH: u16 = 16;
    const TRANSCRIPT_MIN_WIDTH: u16 = 20;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(CHAT_SIDEBAR_WIDTH), Constraint::Min(TRANSCRIPT_MIN_WIDTH)])
        .split(area);

    let [chats_area, transcript_area] = chunks.as_ref() else {
        return;
    };

    chats::render(frame, app, *chats_area);
    transcript::render(frame, app, *transcript_area);
}
