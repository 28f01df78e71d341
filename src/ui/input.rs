//! Input box and keybind hints.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};

pub fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let title = match &app.status_line {
        Some(status) => format!(" {} ", status),
        None => " Message ".to_string(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(title, Style::default().fg(COLOR_ACCENT)));

    let content = format!("> {}", app.input);
    let paragraph = Paragraph::new(content).block(block);
    frame.render_widget(paragraph, area);
}

pub fn render_keybinds(frame: &mut Frame, area: Rect, app: &App) {
    let mut hints = vec![
        "Enter send".to_string(),
        "Alt+1..6 expand".to_string(),
        "/attach <path>".to_string(),
        "/detach <name>".to_string(),
        "Ctrl+R restart".to_string(),
        "Ctrl+C quit".to_string(),
    ];
    if !app.session.uploaded_files().is_empty() {
        hints.push(format!("{} file(s) attached", app.session.uploaded_files().len()));
    }

    let line = Line::from(Span::styled(
        hints.join("  |  "),
        Style::default().fg(COLOR_DIM),
    ));
    frame.render_widget(Paragraph::new(line), area);
}
