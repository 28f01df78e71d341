//! HTTP client for the assessment agent backend.
//!
//! Covers the streaming invoke endpoint plus the document endpoints
//! (upload, delete, list). Streaming responses are decoded through
//! [`crate::sse::decode_stream`] and delivered via callbacks.

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::Value;

use crate::config::Config;
use crate::models::{InvokeRequest, UploadedFile, MAX_UPLOAD_BYTES, MODULE_HEADER, MODULE_NAME};
use crate::sse::{decode_stream, StreamCallbacks};

/// Error type for agent client operations
#[derive(Debug)]
pub enum AgentError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// Server returned an error status
    Server { status: u16, message: String },
    /// File rejected before upload
    FileTooLarge { name: String, size: u64 },
}

impl std::fmt::Display for AgentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentError::Http(e) => write!(f, "HTTP error: {}", e),
            AgentError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            AgentError::FileTooLarge { name, size } => {
                write!(
                    f,
                    "File '{}' is {} bytes, over the {} byte limit",
                    name, size, MAX_UPLOAD_BYTES
                )
            }
        }
    }
}

impl std::error::Error for AgentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AgentError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AgentError {
    fn from(e: reqwest::Error) -> Self {
        AgentError::Http(e)
    }
}

/// Client for the assessment agent backend.
pub struct AgentClient {
    config: Config,
    client: Client,
}

impl AgentClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, AgentError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        // Backends wrap error text in {"detail": "..."}; unwrap it when present.
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(String::from))
            .unwrap_or(body);
        Err(AgentError::Server { status, message })
    }

    /// Send one turn to the agent and stream the reply through `callbacks`.
    ///
    /// Returns once the stream reaches a terminal event or ends. HTTP-level
    /// failures before any bytes arrive surface as an `Err`; failures
    /// mid-stream go through `callbacks.on_error`.
    pub async fn send_message_stream<C: StreamCallbacks>(
        &self,
        prompt: String,
        session_id: String,
        associated_files: Vec<String>,
        callbacks: &mut C,
    ) -> Result<(), AgentError> {
        let request = InvokeRequest::new(&self.config, prompt, session_id, associated_files);
        let url = format!("{}/invoke_strands_agent/", self.config.base_url);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Accept", "text/event-stream")
            .header(MODULE_HEADER, MODULE_NAME)
            .json(&request)
            .send()
            .await?;

        let response = Self::check_status(response).await?;

        let byte_stream = response.bytes_stream();
        decode_stream(byte_stream, callbacks).await;
        Ok(())
    }

    /// Upload a document for the session.
    ///
    /// The stored filename is prefixed with the session id so uploads from
    /// different sessions never collide in the bucket.
    pub async fn upload_file(
        &self,
        session_id: &str,
        name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedFile, AgentError> {
        let size = bytes.len() as u64;
        if size > MAX_UPLOAD_BYTES {
            return Err(AgentError::FileTooLarge {
                name: name.to_string(),
                size,
            });
        }

        let unique_name = format!("{}_{}", session_id, name);
        let form = Form::new()
            .part("file", Part::bytes(bytes).file_name(name.to_string()))
            .text("session_id", session_id.to_string())
            .text("filename", unique_name);

        let url = format!("{}/upload-file/", self.config.base_url);
        let response = self.client.post(&url).multipart(form).send().await?;
        let response = Self::check_status(response).await?;

        let body: Value = response.json().await?;
        let s3_path = body
            .get("s3_path")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        Ok(UploadedFile::new(name.to_string(), s3_path, size))
    }

    /// Delete a previously uploaded document by its storage path.
    pub async fn delete_file(&self, s3_path: &str) -> Result<(), AgentError> {
        let url = format!("{}/delete-file/", self.config.base_url);
        let response = self
            .client
            .delete(&url)
            .query(&[("s3_path", s3_path)])
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// List the files the backend holds for a session.
    ///
    /// Failures return an empty list; the file list is advisory and a
    /// listing error should not break the conversation.
    pub async fn list_session_files(&self, session_id: &str) -> Vec<Value> {
        let url = format!("{}/list-session-files/{}", self.config.base_url, session_id);

        let result: Result<Vec<Value>, AgentError> = async {
            let response = self.client.get(&url).send().await?;
            let response = Self::check_status(response).await?;
            let body: Value = response.json().await?;
            Ok(body
                .get("files")
                .and_then(|v| v.as_array())
                .cloned()
                .unwrap_or_default())
        }
        .await;

        match result {
            Ok(files) => files,
            Err(err) => {
                tracing::warn!("listing session files failed: {err}");
                Vec::new()
            }
        }
    }
}
