pub mod file;
pub mod message;
pub mod request;

pub use file::{format_file_size, UploadedFile, MAX_UPLOAD_BYTES};
pub use message::{Message, MessageKind, Sender};
pub use request::{InvokeRequest, ModelSettings, KICKOFF_PROMPT, MODULE_HEADER, MODULE_NAME};
