//! Server-sent event decoding for the agent streaming endpoint.
//!
//! The backend streams newline-delimited `data: <json>` frames. This module
//! turns the raw byte stream into typed [`StreamEvent`]s and drives the
//! chunk/complete/error callbacks the app consumes.

mod decoder;
mod events;

pub use decoder::{decode_stream, LineBuffer, StreamCallbacks};
pub use events::{classify_frame, StreamErrorEvent, StreamEvent};
