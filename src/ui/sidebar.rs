//! Assessment progress sidebar.
//!
//! Shows the six categories with their derived status, expanding the
//! current category (and any the user toggled) to field level, with an
//! overall progress gauge at the bottom.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
    Frame,
};

use crate::app::App;
use crate::assessment::{category_status, field_status, overall_progress, CategoryId, CategoryStatus};

use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_COMPLETED, COLOR_DIM, COLOR_IN_PROGRESS, COLOR_PENDING,
    COLOR_PROGRESS,
};

fn status_style(status: CategoryStatus) -> Style {
    let color = match status {
        CategoryStatus::Completed => COLOR_COMPLETED,
        CategoryStatus::InProgress => COLOR_IN_PROGRESS,
        CategoryStatus::Pending => COLOR_PENDING,
    };
    Style::default().fg(color)
}

fn status_marker(status: CategoryStatus) -> &'static str {
    match status {
        CategoryStatus::Completed => "[x]",
        CategoryStatus::InProgress => "[~]",
        CategoryStatus::Pending => "[ ]",
    }
}

/// Build the sidebar lines for the current assessment state.
pub fn sidebar_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let current = app.current_category();

    for (i, id) in CategoryId::ALL.into_iter().enumerate() {
        let record = app
            .assessment
            .as_ref()
            .and_then(|s| s.information_status.get(id.as_str()));
        let status = category_status(record);

        let mut title_style = status_style(status);
        if current == Some(id) {
            title_style = title_style.add_modifier(Modifier::BOLD);
        }
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", status_marker(status)), status_style(status)),
            Span::styled(format!("{}. {}", i + 1, id.display_name()), title_style),
        ]));

        if !app.is_expanded(id) {
            continue;
        }

        if id == CategoryId::SoftwareDetails {
            // Field names here come from the interview, not the catalog.
            if let Some(record) = record {
                for field in record.summary().fields {
                    let status = match field.marker.as_str() {
                        "COMPLETE" => CategoryStatus::Completed,
                        "INCOMPLETE" => CategoryStatus::InProgress,
                        _ => CategoryStatus::Pending,
                    };
                    lines.push(Line::from(Span::styled(
                        format!("    {} {}", status_marker(status), field.name),
                        status_style(status),
                    )));
                }
            }
        } else {
            for (key, label) in id.children() {
                let status = field_status(record, key);
                lines.push(Line::from(Span::styled(
                    format!("    {} {}", status_marker(status), label),
                    status_style(status),
                )));
            }
        }
    }

    let files = app.session.uploaded_files();
    if !files.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Documents",
            Style::default().fg(COLOR_ACCENT),
        )));
        for file in files {
            lines.push(Line::from(Span::styled(
                format!("  • {} ({})", file.name, file.display_size()),
                Style::default().fg(COLOR_DIM),
            )));
        }
    }

    lines
}

/// Render the sidebar panel: category tree plus overall progress gauge.
pub fn render_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(3)])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(" Assessment ", Style::default().fg(COLOR_ACCENT)));
    let paragraph = Paragraph::new(sidebar_lines(app)).block(block);
    frame.render_widget(paragraph, chunks[0]);

    let progress = app
        .assessment
        .as_ref()
        .map(overall_progress)
        .unwrap_or(crate::assessment::OverallProgress {
            completed: 0,
            total: CategoryId::ALL.len(),
            percentage: 0,
        });

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_BORDER)),
        )
        .gauge_style(Style::default().fg(COLOR_PROGRESS))
        .percent(progress.percentage as u16)
        .label(Span::styled(
            format!("{}/{} categories", progress.completed, progress.total),
            Style::default().fg(COLOR_DIM),
        ));
    frame.render_widget(gauge, chunks[1]);
}
