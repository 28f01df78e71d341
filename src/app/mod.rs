//! Application state and the message pump connecting async tasks to the UI.

mod stream;

use std::collections::HashSet;
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::agent::AgentClient;
use crate::assessment::{extract_assessment_data, AssessmentState, CategoryId};
use crate::config::Config;
use crate::models::{Message, UploadedFile, KICKOFF_PROMPT};
use crate::session::Session;

/// Messages sent from spawned tasks back to the app loop.
#[derive(Debug)]
pub enum AppMessage {
    /// One streamed token of the in-progress agent reply.
    StreamToken(String),
    /// The stream finished; `Some` carries the final summary text when the
    /// backend sent one, `None` means keep what was streamed.
    StreamComplete(Option<String>),
    /// The stream or request failed.
    StreamError {
        message: String,
        is_stream_error: bool,
        /// Set when the failed turn was the automatic kickoff, so the
        /// start guard can be released for a retry.
        kickoff: bool,
    },
    FileUploaded(UploadedFile),
    FileUploadFailed(String),
    FileDeleted(String),
    FileDeleteFailed(String),
}

pub struct App {
    pub config: Config,
    pub client: Arc<AgentClient>,
    pub session: Session,
    pub messages: Vec<Message>,
    /// Accumulated tokens of the reply currently streaming in.
    pub streaming_content: String,
    pub is_streaming: bool,
    /// Latest extracted assessment state, replaced wholesale per summary.
    pub assessment: Option<AssessmentState>,
    pub input: String,
    /// Sidebar categories the user expanded by hand.
    pub expanded: HashSet<CategoryId>,
    pub scroll_offset: u16,
    pub status_line: Option<String>,
    pub should_quit: bool,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl App {
    pub fn new(config: Config, message_tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        let client = Arc::new(AgentClient::new(config.clone()));
        Self {
            config,
            client,
            session: Session::new(),
            messages: Vec::new(),
            streaming_content: String::new(),
            is_streaming: false,
            assessment: None,
            input: String::new(),
            expanded: HashSet::new(),
            scroll_offset: 0,
            status_line: None,
            should_quit: false,
            message_tx,
        }
    }

    /// Begin a fresh assessment session. Mints the session id and sends the
    /// kickoff prompt exactly once; repeat calls while a session is live are
    /// no-ops.
    pub fn start_assessment(&mut self) {
        if !self.session.has_session() {
            self.session.start_new();
        }
        if !self.session.try_begin_assessment() {
            return;
        }
        self.send_to_agent(KICKOFF_PROMPT.to_string(), true);
    }

    /// Start over: new session id, cleared conversation and state.
    pub fn restart_assessment(&mut self) {
        if self.is_streaming {
            return;
        }
        self.session.start_new();
        self.messages.clear();
        self.streaming_content.clear();
        self.assessment = None;
        self.scroll_offset = 0;
        self.status_line = None;
        self.start_assessment();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('r') => self.restart_assessment(),
                _ => {}
            }
            return;
        }

        if key.modifiers.contains(KeyModifiers::ALT) {
            if let KeyCode::Char(c) = key.code {
                if let Some(digit) = c.to_digit(10) {
                    self.toggle_category(digit as usize);
                }
            }
            return;
        }

        match key.code {
            KeyCode::Enter => self.submit_input(),
            KeyCode::Char(c) => self.input.push(c),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Esc => self.input.clear(),
            KeyCode::Up => self.scroll_offset = self.scroll_offset.saturating_add(1),
            KeyCode::Down => self.scroll_offset = self.scroll_offset.saturating_sub(1),
            KeyCode::PageUp => self.scroll_offset = self.scroll_offset.saturating_add(10),
            KeyCode::PageDown => self.scroll_offset = self.scroll_offset.saturating_sub(10),
            _ => {}
        }
    }

    /// Toggle sidebar expansion for the 1-based category index.
    fn toggle_category(&mut self, index: usize) {
        let Some(id) = CategoryId::ALL.get(index.wrapping_sub(1)).copied() else {
            return;
        };
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    /// Apply one message from a spawned task to the app state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::StreamToken(token) => {
                self.streaming_content.push_str(&token);
                self.scroll_offset = 0;
            }
            AppMessage::StreamComplete(final_text) => {
                self.is_streaming = false;
                let streamed = std::mem::take(&mut self.streaming_content);
                // The final summary supersedes the streamed tokens when the
                // backend sent one; otherwise the streamed text stands.
                let content = match final_text {
                    Some(text) if !text.is_empty() => text,
                    _ => streamed,
                };
                if let Some(state) = extract_assessment_data(&content) {
                    self.assessment = Some(state);
                }
                if !content.is_empty() {
                    self.messages.push(Message::agent(content));
                }
                self.scroll_offset = 0;
            }
            AppMessage::StreamError {
                message,
                is_stream_error,
                kickoff,
            } => {
                self.is_streaming = false;
                self.streaming_content.clear();
                if kickoff {
                    self.session.reset_assessment_guard();
                }
                let prefix = if is_stream_error {
                    "Stream error"
                } else {
                    "Connection error"
                };
                self.messages
                    .push(Message::error(format!("{prefix}: {message}")));
            }
            AppMessage::FileUploaded(file) => {
                self.status_line = Some(format!(
                    "Attached {} ({})",
                    file.name,
                    file.display_size()
                ));
                self.session.add_file(file);
            }
            AppMessage::FileUploadFailed(err) => {
                self.status_line = Some(format!("Upload failed: {err}"));
            }
            AppMessage::FileDeleted(s3_path) => {
                if let Some(file) = self.session.remove_file(&s3_path) {
                    self.status_line = Some(format!("Removed {}", file.name));
                }
            }
            AppMessage::FileDeleteFailed(err) => {
                self.status_line = Some(format!("Delete failed: {err}"));
            }
        }
    }

    /// The category the agent says it is on, resolved against the catalog.
    pub fn current_category(&self) -> Option<CategoryId> {
        let label = self.assessment.as_ref()?.current_category.as_deref()?;
        crate::assessment::resolve_current_category(label)
    }

    /// Whether a sidebar category should render expanded.
    pub fn is_expanded(&self, id: CategoryId) -> bool {
        self.expanded.contains(&id) || self.current_category() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_app() -> (App, mpsc::UnboundedReceiver<AppMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (App::new(Config::default(), tx), rx)
    }

    #[test]
    fn test_stream_tokens_accumulate() {
        let (mut app, _rx) = make_app();
        app.handle_message(AppMessage::StreamToken("Hel".to_string()));
        app.handle_message(AppMessage::StreamToken("lo".to_string()));
        assert_eq!(app.streaming_content, "Hello");
        assert!(app.messages.is_empty());
    }

    #[test]
    fn test_complete_with_final_text_supersedes_stream() {
        let (mut app, _rx) = make_app();
        app.is_streaming = true;
        app.handle_message(AppMessage::StreamToken("partial".to_string()));
        app.handle_message(AppMessage::StreamComplete(Some("final reply".to_string())));

        assert!(!app.is_streaming);
        assert!(app.streaming_content.is_empty());
        assert_eq!(app.messages.len(), 1);
        assert_eq!(app.messages[0].content, "final reply");
    }

    #[test]
    fn test_complete_without_final_text_keeps_streamed() {
        let (mut app, _rx) = make_app();
        app.handle_message(AppMessage::StreamToken("streamed reply".to_string()));
        app.handle_message(AppMessage::StreamComplete(None));
        assert_eq!(app.messages[0].content, "streamed reply");
    }

    #[test]
    fn test_complete_with_empty_final_text_keeps_streamed() {
        let (mut app, _rx) = make_app();
        app.handle_message(AppMessage::StreamToken("streamed".to_string()));
        app.handle_message(AppMessage::StreamComplete(Some(String::new())));
        assert_eq!(app.messages[0].content, "streamed");
    }

    #[test]
    fn test_complete_extracts_assessment_state() {
        let (mut app, _rx) = make_app();
        let summary = json!({
            "category_results": {
                "information_status": {},
                "current_category": "business_environment"
            }
        })
        .to_string();
        app.handle_message(AppMessage::StreamComplete(Some(summary)));
        assert_eq!(
            app.current_category(),
            Some(CategoryId::BusinessEnvironment)
        );
    }

    #[test]
    fn test_summary_without_json_keeps_previous_state() {
        let (mut app, _rx) = make_app();
        let summary = json!({
            "category_results": { "current_category": "closing_questions" }
        })
        .to_string();
        app.handle_message(AppMessage::StreamComplete(Some(summary)));
        app.handle_message(AppMessage::StreamComplete(Some("just prose".to_string())));
        assert_eq!(app.current_category(), Some(CategoryId::ClosingQuestions));
    }

    #[test]
    fn test_kickoff_error_releases_guard() {
        let (mut app, _rx) = make_app();
        app.session.start_new();
        assert!(app.session.try_begin_assessment());

        app.handle_message(AppMessage::StreamError {
            message: "connect refused".to_string(),
            is_stream_error: false,
            kickoff: true,
        });

        assert!(app.session.try_begin_assessment());
        assert!(app.messages.iter().any(|m| m.is_error()));
    }

    #[test]
    fn test_non_kickoff_error_keeps_guard() {
        let (mut app, _rx) = make_app();
        app.session.start_new();
        assert!(app.session.try_begin_assessment());

        app.handle_message(AppMessage::StreamError {
            message: "reset".to_string(),
            is_stream_error: true,
            kickoff: false,
        });

        assert!(!app.session.try_begin_assessment());
    }

    #[test]
    fn test_toggle_category_with_alt_digits() {
        let (mut app, _rx) = make_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('1'), KeyModifiers::ALT));
        assert!(app.is_expanded(CategoryId::BusinessEnvironment));
        app.handle_key(KeyEvent::new(KeyCode::Char('1'), KeyModifiers::ALT));
        assert!(!app.is_expanded(CategoryId::BusinessEnvironment));
        // Out of range digits are ignored.
        app.handle_key(KeyEvent::new(KeyCode::Char('9'), KeyModifiers::ALT));
        app.handle_key(KeyEvent::new(KeyCode::Char('0'), KeyModifiers::ALT));
    }

    #[test]
    fn test_current_category_auto_expands() {
        let (mut app, _rx) = make_app();
        let summary = json!({
            "category_results": { "current_category": "current_technology" }
        })
        .to_string();
        app.handle_message(AppMessage::StreamComplete(Some(summary)));
        assert!(app.is_expanded(CategoryId::CurrentTechnology));
        assert!(!app.is_expanded(CategoryId::ClosingQuestions));
    }

    #[test]
    fn test_file_messages_update_session() {
        let (mut app, _rx) = make_app();
        let file = UploadedFile::new("a.pdf".to_string(), "s3://bucket/a.pdf".to_string(), 10);
        app.handle_message(AppMessage::FileUploaded(file));
        assert_eq!(app.session.uploaded_files().len(), 1);

        app.handle_message(AppMessage::FileDeleted("s3://bucket/a.pdf".to_string()));
        assert!(app.session.uploaded_files().is_empty());
    }

    #[test]
    fn test_quit_keys() {
        let (mut app, _rx) = make_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
