//! Advisor core: pure chat and ingestion state machines plus view-model helpers.
mod conversation;
mod effect;
mod ingestion;
mod launcher;
mod msg;
mod state;
mod update;
mod view_model;

pub use conversation::{
    ChatOutcome, ChatRequest, Conversation, Message, Sender, SessionId, CHAT_FALLBACK,
};
pub use effect::Effect;
pub use ingestion::{
    Ingestion, IngestionPhase, SelectedFile, UploadOutcome, UploadRequest, UploadResult,
    UploadTicket, INVALID_TYPE_MESSAGE, MAX_UPLOAD_BYTES, NO_FILE_MESSAGE, PDF_MEDIA_TYPE,
    TOO_LARGE_MESSAGE, UPLOAD_FALLBACK,
};
pub use launcher::Launcher;
pub use msg::Msg;
pub use state::AppState;
pub use update::update;
pub use view_model::{AppViewModel, ChatView, FileSummary, IngestionView};
