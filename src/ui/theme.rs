//! Color theme constants for the assessment UI.

use ratatui::style::Color;

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights and titles
pub const COLOR_ACCENT: Color = Color::White;

/// Dim text for hints and metadata
pub const COLOR_DIM: Color = Color::DarkGray;

/// User message label color
pub const COLOR_USER: Color = Color::Cyan;

/// Agent message label color
pub const COLOR_AGENT: Color = Color::LightGreen;

/// Error message color
pub const COLOR_ERROR: Color = Color::Red;

/// Completed categories and fields
pub const COLOR_COMPLETED: Color = Color::LightGreen;

/// In-progress categories and fields
pub const COLOR_IN_PROGRESS: Color = Color::Yellow;

/// Pending categories and fields
pub const COLOR_PENDING: Color = Color::Gray;

/// Progress gauge fill
pub const COLOR_PROGRESS: Color = Color::White;
