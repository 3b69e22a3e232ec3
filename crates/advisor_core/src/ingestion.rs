use std::fmt;

use bytes::Bytes;

/// The only media type the ingestion service accepts.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";
/// Client-side pre-check; the service enforces its own limit.
pub const MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

pub const INVALID_TYPE_MESSAGE: &str = "Please select a valid PDF file";
pub const TOO_LARGE_MESSAGE: &str = "File exceeds the 16 MB limit";
pub const NO_FILE_MESSAGE: &str = "Please select a file first";
pub const UPLOAD_FALLBACK: &str = "Upload failed. Please try again.";

/// Identifies one dispatched upload; completions for other tickets are stale.
pub type UploadTicket = u64;

#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub media_type: String,
    pub size_bytes: u64,
    pub content: Bytes,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, content: Bytes) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            size_bytes: content.len() as u64,
            content,
        }
    }

    fn is_pdf(&self) -> bool {
        self.media_type.eq_ignore_ascii_case(PDF_MEDIA_TYPE)
    }
}

// File bodies can be megabytes; keep them out of logs.
impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("media_type", &self.media_type)
            .field("size_bytes", &self.size_bytes)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    pub college_name: String,
    pub college_code: String,
    pub total_branches: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Parsed(UploadResult),
    /// `message` is the service-provided error text, when it sent one.
    Failed { message: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub ticket: UploadTicket,
    pub file: SelectedFile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IngestionPhase {
    #[default]
    Empty,
    Selected,
    Uploading,
    Succeeded,
    Failed,
}

/// Single-file select/upload/result workflow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ingestion {
    phase: IngestionPhase,
    file: Option<SelectedFile>,
    result: Option<UploadResult>,
    error: Option<String>,
    in_flight: Option<UploadTicket>,
    next_ticket: UploadTicket,
}

impl Ingestion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> IngestionPhase {
        self.phase
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn result(&self) -> Option<&UploadResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn in_flight(&self) -> Option<UploadTicket> {
        self.in_flight
    }

    pub fn can_upload(&self) -> bool {
        self.file.is_some() && self.phase != IngestionPhase::Uploading
    }

    /// Offers a candidate for the file slot. Returns `true` if state changed.
    ///
    /// A rejected candidate also empties the slot, so the previous pick is
    /// not left behind to be uploaded. Ignored while an upload is in flight.
    pub fn select_file(&mut self, candidate: SelectedFile) -> bool {
        if self.phase == IngestionPhase::Uploading {
            return false;
        }
        if !candidate.is_pdf() {
            self.reject(INVALID_TYPE_MESSAGE);
            return true;
        }
        if candidate.size_bytes > MAX_UPLOAD_BYTES {
            self.reject(TOO_LARGE_MESSAGE);
            return true;
        }
        self.file = Some(candidate);
        self.error = None;
        self.result = None;
        self.phase = IngestionPhase::Selected;
        true
    }

    /// Drops the selected file without touching the last error.
    pub fn remove_file(&mut self) -> bool {
        if self.phase == IngestionPhase::Uploading || self.file.is_none() {
            return false;
        }
        self.file = None;
        if self.phase == IngestionPhase::Selected {
            self.phase = IngestionPhase::Empty;
        }
        true
    }

    /// Starts an upload of the selected file.
    ///
    /// Returns `None` when an upload is already in flight or no file is
    /// selected; the latter records [`NO_FILE_MESSAGE`].
    pub fn upload(&mut self) -> Option<UploadRequest> {
        if self.phase == IngestionPhase::Uploading {
            return None;
        }
        let Some(file) = self.file.clone() else {
            self.error = Some(NO_FILE_MESSAGE.to_owned());
            // An error and a result never coexist; a `Succeeded` with its
            // result gone has nothing left to show.
            self.result = None;
            if self.phase == IngestionPhase::Succeeded {
                self.phase = IngestionPhase::Empty;
            }
            return None;
        };
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.in_flight = Some(ticket);
        self.error = None;
        self.result = None;
        self.phase = IngestionPhase::Uploading;
        Some(UploadRequest { ticket, file })
    }

    /// Applies the resolution of upload `ticket`.
    ///
    /// Returns `false` for completions that no longer match the in-flight
    /// upload (abandoned by [`Ingestion::clear`]).
    pub fn finish(&mut self, ticket: UploadTicket, outcome: UploadOutcome) -> bool {
        if self.in_flight != Some(ticket) {
            return false;
        }
        self.in_flight = None;
        match outcome {
            UploadOutcome::Parsed(result) => {
                self.result = Some(result);
                self.error = None;
                self.file = None;
                self.phase = IngestionPhase::Succeeded;
            }
            UploadOutcome::Failed { message } => {
                let message = message
                    .filter(|text| !text.trim().is_empty())
                    .unwrap_or_else(|| UPLOAD_FALLBACK.to_owned());
                self.error = Some(message);
                self.result = None;
                self.phase = IngestionPhase::Failed;
            }
        }
        true
    }

    /// Resets to `Empty` from any phase, abandoning an in-flight upload.
    ///
    /// Returns the abandoned ticket, if any.
    pub fn clear(&mut self) -> Option<UploadTicket> {
        let abandoned = self.in_flight.take();
        self.file = None;
        self.result = None;
        self.error = None;
        self.phase = IngestionPhase::Empty;
        abandoned
    }

    fn reject(&mut self, message: &str) {
        self.file = None;
        self.result = None;
        self.error = Some(message.to_owned());
        self.phase = IngestionPhase::Empty;
    }
}
