//! Uploaded document records and size formatting.

use chrono::{DateTime, Utc};

/// Upload size limit enforced before any bytes leave the client.
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Original filename as the user knows it.
    pub name: String,
    /// Storage path returned by the backend, `s3://...` once stored.
    pub s3_path: String,
    pub size: u64,
    pub uploaded_at: DateTime<Utc>,
}

impl UploadedFile {
    pub fn new(name: String, s3_path: String, size: u64) -> Self {
        Self {
            name,
            s3_path,
            size,
            uploaded_at: Utc::now(),
        }
    }

    pub fn display_size(&self) -> String {
        format_file_size(self.size)
    }
}

/// Human-readable byte counts: "0 Bytes", "1 KB", "1.5 MB".
///
/// Two decimal places with trailing zeros trimmed, unit chosen by
/// powers of 1024.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exponent = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);

    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[exponent])
}
