//! Streaming response decoder.
//!
//! Reads the response body incrementally, reassembles newline-delimited
//! frames across chunk boundaries, and drives [`StreamCallbacks`] in arrival
//! order. A terminal frame stops processing immediately: frames already
//! buffered behind it are dropped, never delivered.

use bytes::Bytes;
use futures_util::{Stream, StreamExt};

use super::events::{classify_frame, StreamErrorEvent, StreamEvent};

/// Callbacks driven by [`decode_stream`] as frames are decoded.
///
/// Calls arrive in byte order, synchronously within the decode loop. After
/// `on_complete` or `on_error` fires, no further calls are made for that
/// stream.
pub trait StreamCallbacks {
    /// An incremental content fragment.
    fn on_chunk(&mut self, text: &str);

    /// Terminal: `Some(text)` when the backend sent an explicit completion
    /// frame, `None` when the stream closed without one. The `None` case is
    /// deliberate signal, not an error.
    fn on_complete(&mut self, final_text: Option<String>);

    /// Terminal: an `error` frame from the backend, or a transport failure.
    fn on_error(&mut self, error: StreamErrorEvent);
}

/// Rolling line buffer over raw bytes.
///
/// Lines are split at the byte level before any UTF-8 decoding, so a
/// multi-byte character broken across two reads simply waits in the buffer
/// until its line completes.
#[derive(Debug, Default)]
pub struct LineBuffer {
    buf: Vec<u8>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk and drain every complete line it closes. The trailing
    /// partial line (if any) stays buffered for the next read.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buf.extend_from_slice(chunk);
        let mut lines = Vec::new();
        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let rest = self.buf.split_off(pos + 1);
            let mut line = std::mem::replace(&mut self.buf, rest);
            line.pop(); // the newline itself
            lines.push(String::from_utf8_lossy(&line).into_owned());
        }
        lines
    }

    /// Bytes held back as an incomplete line.
    pub fn pending(&self) -> &[u8] {
        &self.buf
    }
}

/// Decode a byte stream of `data: <json>` frames, driving `callbacks` until
/// a terminal event fires or the stream is exhausted.
///
/// Malformed frames are logged and skipped; they never abort an otherwise
/// healthy stream. Exhaustion without a terminal frame reports
/// `on_complete(None)` exactly once. The underlying stream is dropped on
/// every exit path.
pub async fn decode_stream<S, E, C>(mut byte_stream: S, callbacks: &mut C)
where
    S: Stream<Item = Result<Bytes, E>> + Unpin,
    E: std::fmt::Display,
    C: StreamCallbacks,
{
    let mut buffer = LineBuffer::new();

    while let Some(next) = byte_stream.next().await {
        let chunk = match next {
            Ok(chunk) => chunk,
            Err(e) => {
                callbacks.on_error(StreamErrorEvent::transport(e.to_string()));
                return;
            }
        };

        for line in buffer.push(&chunk) {
            match classify_frame(&line) {
                Ok(Some(StreamEvent::Chunk { text })) => callbacks.on_chunk(&text),
                Ok(Some(StreamEvent::FinalSummary { final_output })) => {
                    // Terminal: anything still buffered is dropped on purpose.
                    callbacks.on_complete(Some(final_output));
                    return;
                }
                Ok(Some(StreamEvent::LegacyDone { complete })) => {
                    callbacks.on_complete(Some(complete));
                    return;
                }
                Ok(Some(StreamEvent::StreamError(err))) => {
                    callbacks.on_error(err);
                    return;
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(error = %e, line = %line, "skipping malformed stream frame");
                }
            }
        }
    }

    // Stream closed without an explicit terminal frame.
    callbacks.on_complete(None);
}
