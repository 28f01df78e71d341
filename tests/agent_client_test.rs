//! Agent client integration tests using wiremock.
//!
//! Covers the streaming invoke endpoint end to end plus the document
//! endpoints and error surfacing.

use appraise::agent::{AgentClient, AgentError};
use appraise::config::Config;
use appraise::sse::{StreamCallbacks, StreamErrorEvent};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct Recorder {
    chunks: Vec<String>,
    completions: Vec<Option<String>>,
    errors: Vec<StreamErrorEvent>,
}

impl StreamCallbacks for Recorder {
    fn on_chunk(&mut self, text: &str) {
        self.chunks.push(text.to_string());
    }
    fn on_complete(&mut self, final_text: Option<String>) {
        self.completions.push(final_text);
    }
    fn on_error(&mut self, event: StreamErrorEvent) {
        self.errors.push(event);
    }
}

fn client_for(server: &MockServer) -> AgentClient {
    let config = Config {
        base_url: server.uri(),
        ..Config::default()
    };
    AgentClient::new(config)
}

#[tokio::test]
async fn test_stream_chunks_then_final_summary() {
    let server = MockServer::start().await;

    let body = concat!(
        "data: {\"type\": \"stream_chunk\", \"data\": \"Tell me \"}\n",
        "data: {\"type\": \"stream_chunk\", \"data\": \"about your business.\"}\n",
        "data: {\"type\": \"final_summary\", \"final_output\": \"Tell me about your business.\"}\n",
    );

    Mock::given(method("POST"))
        .and(path("/invoke_strands_agent/"))
        .and(header("x-module", "shapeconnect-assessment"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut recorder = Recorder::default();
    client
        .send_message_stream(
            "hello".to_string(),
            "session-1".to_string(),
            Vec::new(),
            &mut recorder,
        )
        .await
        .unwrap();

    assert_eq!(recorder.chunks, vec!["Tell me ", "about your business."]);
    assert_eq!(
        recorder.completions,
        vec![Some("Tell me about your business.".to_string())]
    );
    assert!(recorder.errors.is_empty());
}

#[tokio::test]
async fn test_stream_error_event_reaches_callback() {
    let server = MockServer::start().await;

    let body = concat!(
        "data: {\"type\": \"stream_chunk\", \"data\": \"partial\"}\n",
        "data: {\"type\": \"error\", \"error\": \"agent crashed\", \"status\": \"500\"}\n",
    );

    Mock::given(method("POST"))
        .and(path("/invoke_strands_agent/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut recorder = Recorder::default();
    client
        .send_message_stream(
            "hello".to_string(),
            "session-1".to_string(),
            Vec::new(),
            &mut recorder,
        )
        .await
        .unwrap();

    assert_eq!(recorder.chunks, vec!["partial"]);
    assert!(recorder.completions.is_empty());
    assert_eq!(recorder.errors.len(), 1);
    assert_eq!(recorder.errors[0].message, "agent crashed");
    assert_eq!(recorder.errors[0].status.as_deref(), Some("500"));
    assert!(recorder.errors[0].is_stream_error);
}

#[tokio::test]
async fn test_stream_without_terminal_completes_with_none() {
    let server = MockServer::start().await;

    let body = "data: {\"type\": \"stream_chunk\", \"data\": \"only chunk\"}\n";

    Mock::given(method("POST"))
        .and(path("/invoke_strands_agent/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut recorder = Recorder::default();
    client
        .send_message_stream(
            "hello".to_string(),
            "session-1".to_string(),
            Vec::new(),
            &mut recorder,
        )
        .await
        .unwrap();

    assert_eq!(recorder.chunks, vec!["only chunk"]);
    assert_eq!(recorder.completions, vec![None]);
}

#[tokio::test]
async fn test_invoke_non_success_surfaces_detail() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/invoke_strands_agent/"))
        .respond_with(
            ResponseTemplate::new(422).set_body_string("{\"detail\": \"prompt is required\"}"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut recorder = Recorder::default();
    let result = client
        .send_message_stream(
            String::new(),
            "session-1".to_string(),
            Vec::new(),
            &mut recorder,
        )
        .await;

    match result {
        Err(AgentError::Server { status, message }) => {
            assert_eq!(status, 422);
            assert_eq!(message, "prompt is required");
        }
        other => panic!("expected Server error, got {other:?}"),
    }
    assert!(recorder.chunks.is_empty());
    assert!(recorder.completions.is_empty());
}

#[tokio::test]
async fn test_upload_file_returns_storage_path() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/upload-file/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "s3_path": "s3://local-aihouse/session-1_report.pdf"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let file = client
        .upload_file("session-1", "report.pdf", b"contents".to_vec())
        .await
        .unwrap();

    assert_eq!(file.name, "report.pdf");
    assert_eq!(file.s3_path, "s3://local-aihouse/session-1_report.pdf");
    assert_eq!(file.size, 8);
}

#[tokio::test]
async fn test_upload_failure_surfaces_detail() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/upload-file/"))
        .respond_with(
            ResponseTemplate::new(500).set_body_string("{\"detail\": \"bucket unavailable\"}"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .upload_file("session-1", "report.pdf", b"contents".to_vec())
        .await;

    match result {
        Err(AgentError::Server { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "bucket unavailable");
        }
        other => panic!("expected Server error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_delete_file_sends_query_param() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/delete-file/"))
        .and(query_param("s3_path", "s3://bucket/a.pdf"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.delete_file("s3://bucket/a.pdf").await.unwrap();
}

#[tokio::test]
async fn test_list_session_files() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/list-session-files/session-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "files": [
                { "filename": "session-1_report.pdf", "size": 1024 }
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let files = client.list_session_files("session-1").await;
    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["filename"], "session-1_report.pdf");
}

#[tokio::test]
async fn test_list_session_files_error_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/list-session-files/session-1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let files = client.list_session_files("session-1").await;
    assert!(files.is_empty());
}
