//! Stream event types and frame classification.
//!
//! Each frame is a single line `data: <json>`. The JSON carries a `type`
//! discriminator (`stream_chunk`, `final_summary`, `error`) plus a legacy
//! completion shape (`isDone`/`complete`/`status`). Unrecognized shapes are
//! ignored so newer backends can add frame types without breaking older
//! clients.

use serde_json::Value;

/// Payload of a stream-level `error` frame, or of a transport failure
/// surfaced through the same callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamErrorEvent {
    pub message: String,
    /// Backend-provided status string, when the error frame carried one.
    pub status: Option<String>,
    /// True when the backend sent an explicit `error` frame; false for
    /// transport failures (connection dropped mid-stream).
    pub is_stream_error: bool,
}

impl StreamErrorEvent {
    /// Error event for a transport failure rather than a backend frame.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            is_stream_error: false,
        }
    }
}

/// A decoded stream frame.
///
/// At most one terminal event ([`FinalSummary`](StreamEvent::FinalSummary),
/// [`LegacyDone`](StreamEvent::LegacyDone), or
/// [`StreamError`](StreamEvent::StreamError)) is produced per stream; every
/// event before it is a [`Chunk`](StreamEvent::Chunk).
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    /// Incremental content fragment.
    Chunk { text: String },
    /// Terminal event carrying the complete response.
    FinalSummary { final_output: String },
    /// Terminal event using the legacy completion signal
    /// (`isDone && complete && status == "complete"`).
    LegacyDone { complete: String },
    /// Terminal event signaling failure.
    StreamError(StreamErrorEvent),
}

/// Loose truthiness, which the wire protocol leans on: the backend's
/// legacy completion check and chunk presence check both treat empty
/// strings, zero, false, and null as absent.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a frame field as response text. Strings pass through; any other
/// truthy value is serialized.
fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Classify one line from the stream.
///
/// Returns `Ok(None)` for lines that are not frames (empty, missing the
/// `data: ` prefix) and for recognized-but-ignored shapes; `Err` only when
/// the line looked like a frame but its JSON failed to parse. Callers skip
/// malformed frames without aborting the stream.
pub fn classify_frame(line: &str) -> Result<Option<StreamEvent>, serde_json::Error> {
    let trimmed = line.trim();
    let Some(json_str) = trimmed.strip_prefix("data: ") else {
        return Ok(None);
    };

    let data: Value = serde_json::from_str(json_str)?;

    if data.get("type").and_then(Value::as_str) == Some("error") {
        let message = data
            .get("error")
            .filter(|v| is_truthy(v))
            .or_else(|| data.get("message").filter(|v| is_truthy(v)))
            .map(value_to_text)
            .unwrap_or_else(|| "Stream error occurred".to_string());
        let status = data
            .get("status")
            .and_then(Value::as_str)
            .map(str::to_string);
        return Ok(Some(StreamEvent::StreamError(StreamErrorEvent {
            message,
            status,
            is_stream_error: true,
        })));
    }

    if data.get("type").and_then(Value::as_str) == Some("stream_chunk") {
        if let Some(chunk) = data.get("data").filter(|v| is_truthy(v)) {
            return Ok(Some(StreamEvent::Chunk {
                text: value_to_text(chunk),
            }));
        }
        return Ok(None);
    }

    if data.get("type").and_then(Value::as_str) == Some("final_summary") {
        if let Some(output) = data.get("final_output").filter(|v| is_truthy(v)) {
            return Ok(Some(StreamEvent::FinalSummary {
                final_output: value_to_text(output),
            }));
        }
        return Ok(None);
    }

    // Legacy completion shape predates the typed frames.
    if data.get("isDone").and_then(Value::as_bool) == Some(true)
        && data.get("complete").is_some_and(is_truthy)
        && data.get("status").and_then(Value::as_str) == Some("complete")
    {
        let complete = value_to_text(&data["complete"]);
        return Ok(Some(StreamEvent::LegacyDone { complete }));
    }

    // Unknown shape - ignore for forward compatibility.
    Ok(None)
}
