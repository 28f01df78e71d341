//! UI rendering for the assessment client.
//!
//! Layout: conversation on the left, assessment sidebar on the right,
//! input box and keybind hints along the bottom.

mod conversation;
mod input;
mod sidebar;
mod theme;

pub use theme::{
    COLOR_ACCENT, COLOR_AGENT, COLOR_BORDER, COLOR_COMPLETED, COLOR_DIM, COLOR_ERROR,
    COLOR_IN_PROGRESS, COLOR_PENDING, COLOR_PROGRESS, COLOR_USER,
};

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;
use conversation::render_conversation;
use input::{render_input, render_keybinds};
use sidebar::render_sidebar;

/// Render the full UI.
pub fn render(frame: &mut Frame, app: &App) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Conversation and sidebar
            Constraint::Length(3), // Input box
            Constraint::Length(1), // Keybind hints
        ])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(vertical[0]);

    render_conversation(frame, columns[0], app);
    render_sidebar(frame, columns[1], app);
    render_input(frame, vertical[1], app);
    render_keybinds(frame, vertical[2], app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use ratatui::{backend::TestBackend, Terminal};
    use tokio::sync::mpsc;

    #[test]
    fn test_render_smoke() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = App::new(Config::default(), tx);
        app.messages
            .push(crate::models::Message::agent("Welcome".to_string()));

        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();
    }

    #[test]
    fn test_render_tiny_terminal_does_not_panic() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let app = App::new(Config::default(), tx);

        let backend = TestBackend::new(10, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();
    }
}
