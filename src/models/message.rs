//! Conversation messages as the UI renders them.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Agent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Normal,
    Error,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub content: String,
    pub sender: Sender,
    pub kind: MessageKind,
    /// Agent replies render as markdown; user input stays verbatim.
    pub markdown: bool,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn user(content: String) -> Self {
        Self {
            content,
            sender: Sender::User,
            kind: MessageKind::Normal,
            markdown: false,
            timestamp: Utc::now(),
        }
    }

    pub fn agent(content: String) -> Self {
        Self {
            content,
            sender: Sender::Agent,
            kind: MessageKind::Normal,
            markdown: true,
            timestamp: Utc::now(),
        }
    }

    pub fn error(content: String) -> Self {
        Self {
            content,
            sender: Sender::Agent,
            kind: MessageKind::Error,
            markdown: false,
            timestamp: Utc::now(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }
}
