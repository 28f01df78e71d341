//! Conversation panel rendering.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::markdown::render_markdown;
use crate::models::Sender;

use super::theme::{COLOR_ACCENT, COLOR_AGENT, COLOR_BORDER, COLOR_ERROR, COLOR_USER};

/// Build the full transcript as lines, streaming reply included.
pub fn conversation_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();

    for message in &app.messages {
        let (label, color) = match (message.sender, message.is_error()) {
            (_, true) => ("error", COLOR_ERROR),
            (Sender::User, _) => ("you", COLOR_USER),
            (Sender::Agent, _) => ("agent", COLOR_AGENT),
        };
        lines.push(Line::from(Span::styled(
            format!("{} · {}", label, message.timestamp.format("%H:%M")),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));

        if message.markdown {
            lines.extend(render_markdown(&message.content));
        } else {
            for raw in message.content.lines() {
                lines.push(Line::from(raw.to_string()));
            }
        }
        lines.push(Line::default());
    }

    if app.is_streaming {
        lines.push(Line::from(Span::styled(
            "agent".to_string(),
            Style::default().fg(COLOR_AGENT).add_modifier(Modifier::BOLD),
        )));
        if app.streaming_content.is_empty() {
            lines.push(Line::from(Span::styled(
                "thinking...".to_string(),
                Style::default().fg(COLOR_BORDER),
            )));
        } else {
            lines.extend(render_markdown(&app.streaming_content));
        }
    }

    lines
}

/// Rows the lines occupy once wrapped to `width`. The paragraph scroll
/// offset applies after wrapping, so the bottom position has to count
/// wrapped rows, not logical lines.
fn wrapped_rows(lines: &[Line], width: u16) -> u16 {
    let width = width.max(1) as usize;
    lines
        .iter()
        .map(|line| {
            let rows = line.width().div_ceil(width).max(1);
            rows as u16
        })
        .sum()
}

pub fn render_conversation(frame: &mut Frame, area: Rect, app: &App) {
    let lines = conversation_lines(app);

    // Pin to the bottom unless the user scrolled back.
    let inner_height = area.height.saturating_sub(2);
    let inner_width = area.width.saturating_sub(2);
    let total = wrapped_rows(&lines, inner_width);
    let bottom = total.saturating_sub(inner_height);
    let scroll = bottom.saturating_sub(app.scroll_offset.min(bottom));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            " Conversation ",
            Style::default().fg(COLOR_ACCENT),
        ));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}
