//! Per-run session state: the session id, uploaded files, and the
//! single-start assessment guard.

use uuid::Uuid;

use crate::models::UploadedFile;

#[derive(Debug, Default)]
pub struct Session {
    session_id: Option<String>,
    uploaded_files: Vec<UploadedFile>,
    assessment_started: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a fresh session id, replacing any previous one.
    pub fn start_new(&mut self) -> String {
        let id = Uuid::new_v4().to_string();
        self.session_id = Some(id.clone());
        self.uploaded_files.clear();
        self.assessment_started = false;
        id
    }

    /// The current session id, or a placeholder before the first start.
    pub fn session_id(&self) -> &str {
        self.session_id.as_deref().unwrap_or("no-session")
    }

    pub fn has_session(&self) -> bool {
        self.session_id.is_some()
    }

    /// Claim the right to send the kickoff message. Returns `false` if the
    /// assessment was already started for this session, so concurrent
    /// triggers collapse into one kickoff.
    pub fn try_begin_assessment(&mut self) -> bool {
        if self.assessment_started {
            return false;
        }
        self.assessment_started = true;
        true
    }

    /// Release the guard after a failed kickoff so it can be retried.
    pub fn reset_assessment_guard(&mut self) {
        self.assessment_started = false;
    }

    pub fn assessment_started(&self) -> bool {
        self.assessment_started
    }

    pub fn add_file(&mut self, file: UploadedFile) {
        self.uploaded_files.push(file);
    }

    /// Remove a file by its storage path, returning it if present.
    pub fn remove_file(&mut self, s3_path: &str) -> Option<UploadedFile> {
        let idx = self.uploaded_files.iter().position(|f| f.s3_path == s3_path)?;
        Some(self.uploaded_files.remove(idx))
    }

    pub fn uploaded_files(&self) -> &[UploadedFile] {
        &self.uploaded_files
    }

    /// Storage paths to attach to the next agent request. Only files that
    /// finished uploading carry an `s3://` path; anything else is skipped.
    pub fn associated_files(&self) -> Vec<String> {
        self.uploaded_files
            .iter()
            .filter(|f| f.s3_path.starts_with("s3://"))
            .map(|f| f.s3_path.clone())
            .collect()
    }
}
