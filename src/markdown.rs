//! Markdown rendering for agent replies.
//!
//! Converts markdown text to styled ratatui Lines. Handles code blocks,
//! inline code, bold, italic, headings, and list items. Incomplete
//! markdown mid-stream renders as-is without crashing.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const STYLE_HEADING: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const STYLE_INLINE_CODE: Style = Style::new().fg(Color::Cyan);
const STYLE_CODE_BLOCK: Style = Style::new().fg(Color::Gray);

/// Render markdown text to a vector of styled Lines.
///
/// Each newline inside a code block becomes its own Line so indentation
/// survives intact.
pub fn render_markdown(text: &str) -> Vec<Line<'static>> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(text, options);
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current_spans: Vec<Span<'static>> = Vec::new();
    let mut style_stack: Vec<Style> = vec![Style::default()];
    let mut in_code_block = false;

    let flush = |spans: &mut Vec<Span<'static>>, lines: &mut Vec<Line<'static>>| {
        if !spans.is_empty() {
            lines.push(Line::from(std::mem::take(spans)));
        }
    };

    for event in parser {
        match event {
            Event::Start(tag) => match tag {
                Tag::CodeBlock(_) => {
                    flush(&mut current_spans, &mut lines);
                    in_code_block = true;
                    style_stack.push(STYLE_CODE_BLOCK);
                }
                Tag::Heading { .. } => {
                    flush(&mut current_spans, &mut lines);
                    style_stack.push(STYLE_HEADING);
                }
                Tag::Strong => {
                    let current = *style_stack.last().unwrap_or(&Style::default());
                    style_stack.push(current.add_modifier(Modifier::BOLD));
                }
                Tag::Emphasis => {
                    let current = *style_stack.last().unwrap_or(&Style::default());
                    style_stack.push(current.add_modifier(Modifier::ITALIC));
                }
                Tag::Paragraph => {
                    flush(&mut current_spans, &mut lines);
                }
                Tag::Item => {
                    flush(&mut current_spans, &mut lines);
                    let current = *style_stack.last().unwrap_or(&Style::default());
                    current_spans.push(Span::styled("• ".to_string(), current));
                }
                _ => {}
            },
            Event::End(tag) => match tag {
                TagEnd::CodeBlock => {
                    flush(&mut current_spans, &mut lines);
                    in_code_block = false;
                    style_stack.pop();
                }
                TagEnd::Heading(_) | TagEnd::Strong | TagEnd::Emphasis => {
                    if matches!(tag, TagEnd::Heading(_)) {
                        flush(&mut current_spans, &mut lines);
                    }
                    style_stack.pop();
                }
                TagEnd::Paragraph | TagEnd::Item => {
                    flush(&mut current_spans, &mut lines);
                }
                _ => {}
            },
            Event::Text(text) => {
                let style = *style_stack.last().unwrap_or(&Style::default());
                if in_code_block {
                    // Code blocks arrive as one Text event with embedded
                    // newlines; split so each renders on its own Line.
                    for (i, part) in text.split('\n').enumerate() {
                        if i > 0 {
                            flush(&mut current_spans, &mut lines);
                        }
                        if !part.is_empty() {
                            current_spans.push(Span::styled(part.to_string(), style));
                        }
                    }
                } else {
                    current_spans.push(Span::styled(text.to_string(), style));
                }
            }
            Event::Code(code) => {
                current_spans.push(Span::styled(code.to_string(), STYLE_INLINE_CODE));
            }
            Event::SoftBreak => {
                current_spans.push(Span::raw(" "));
            }
            Event::HardBreak => {
                flush(&mut current_spans, &mut lines);
            }
            _ => {}
        }
    }

    flush(&mut current_spans, &mut lines);
    lines
}
