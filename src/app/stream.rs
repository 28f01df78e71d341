//! Input submission and the spawned tasks that talk to the backend.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::models::Message;
use crate::sse::{StreamCallbacks, StreamErrorEvent};

use super::{App, AppMessage};

/// Bridges stream callbacks onto the app's message channel.
struct ChannelCallbacks {
    tx: mpsc::UnboundedSender<AppMessage>,
    kickoff: bool,
}

impl StreamCallbacks for ChannelCallbacks {
    fn on_chunk(&mut self, text: &str) {
        let _ = self.tx.send(AppMessage::StreamToken(text.to_string()));
    }

    fn on_complete(&mut self, final_text: Option<String>) {
        let _ = self.tx.send(AppMessage::StreamComplete(final_text));
    }

    fn on_error(&mut self, event: StreamErrorEvent) {
        let _ = self.tx.send(AppMessage::StreamError {
            message: event.message,
            is_stream_error: event.is_stream_error,
            kickoff: self.kickoff,
        });
    }
}

impl App {
    /// Submit the input line: slash commands act locally, anything else
    /// goes to the agent as the next turn.
    pub fn submit_input(&mut self) {
        let content = self.input.trim().to_string();
        if content.is_empty() {
            return;
        }
        self.input.clear();

        if let Some(path) = content.strip_prefix("/attach ") {
            self.attach_file(path.trim().to_string());
            return;
        }
        if let Some(name) = content.strip_prefix("/detach ") {
            self.detach_file(name.trim());
            return;
        }

        if self.is_streaming {
            self.status_line =
                Some("Please wait for the current response to complete.".to_string());
            return;
        }

        self.messages.push(Message::user(content.clone()));
        self.send_to_agent(content, false);
    }

    /// Spawn the streaming request for one turn.
    pub(super) fn send_to_agent(&mut self, prompt: String, kickoff: bool) {
        if self.is_streaming {
            return;
        }
        self.is_streaming = true;
        self.streaming_content.clear();

        let client = Arc::clone(&self.client);
        let session_id = self.session.session_id().to_string();
        let associated_files = self.session.associated_files();
        let tx = self.message_tx.clone();

        tokio::spawn(async move {
            let mut callbacks = ChannelCallbacks {
                tx: tx.clone(),
                kickoff,
            };
            let result = client
                .send_message_stream(prompt, session_id, associated_files, &mut callbacks)
                .await;
            if let Err(err) = result {
                let _ = tx.send(AppMessage::StreamError {
                    message: err.to_string(),
                    is_stream_error: false,
                    kickoff,
                });
            }
        });
    }

    /// Read a local file and upload it for this session.
    fn attach_file(&mut self, path: String) {
        let client = Arc::clone(&self.client);
        let session_id = self.session.session_id().to_string();
        let tx = self.message_tx.clone();
        self.status_line = Some(format!("Uploading {path}..."));

        tokio::spawn(async move {
            let name = Path::new(&path)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.clone());

            let bytes = match tokio::fs::read(&path).await {
                Ok(bytes) => bytes,
                Err(err) => {
                    let _ = tx.send(AppMessage::FileUploadFailed(format!("{path}: {err}")));
                    return;
                }
            };

            match client.upload_file(&session_id, &name, bytes).await {
                Ok(file) => {
                    let _ = tx.send(AppMessage::FileUploaded(file));
                }
                Err(err) => {
                    let _ = tx.send(AppMessage::FileUploadFailed(err.to_string()));
                }
            }
        });
    }

    /// Delete an uploaded file, addressed by its original name.
    fn detach_file(&mut self, name: &str) {
        let Some(file) = self
            .session
            .uploaded_files()
            .iter()
            .find(|f| f.name == name)
        else {
            self.status_line = Some(format!("No attached file named '{name}'"));
            return;
        };
        let s3_path = file.s3_path.clone();
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();

        tokio::spawn(async move {
            match client.delete_file(&s3_path).await {
                Ok(()) => {
                    let _ = tx.send(AppMessage::FileDeleted(s3_path));
                }
                Err(err) => {
                    let _ = tx.send(AppMessage::FileDeleteFailed(err.to_string()));
                }
            }
        });
    }
}
