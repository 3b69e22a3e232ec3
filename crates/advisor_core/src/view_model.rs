use crate::{IngestionPhase, Message, SelectedFile, SessionId, UploadResult};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub launcher_open: bool,
    pub chat: Option<ChatView>,
    pub ingestion: IngestionView,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatView {
    pub session: SessionId,
    pub messages: Vec<Message>,
    pub input: String,
    pub pending: bool,
    pub can_send: bool,
    pub show_welcome: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IngestionView {
    pub phase: IngestionPhase,
    pub file: Option<FileSummary>,
    pub error: Option<String>,
    pub result: Option<UploadResult>,
    pub can_upload: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub name: String,
    pub size_bytes: u64,
    /// Size in megabytes with two decimals, e.g. `"1.50 MB"`.
    pub size_label: String,
}

impl FileSummary {
    pub(crate) fn from_file(file: &SelectedFile) -> Self {
        Self {
            name: file.name.clone(),
            size_bytes: file.size_bytes,
            size_label: format_megabytes(file.size_bytes),
        }
    }
}

fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}
