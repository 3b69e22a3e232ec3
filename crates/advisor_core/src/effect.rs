use crate::{ChatRequest, SessionId, UploadRequest, UploadTicket};

/// Side effects requested by [`crate::update`]; executed outside the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SendChat(ChatRequest),
    /// The session was discarded while its request was still outstanding.
    AbandonChat { session: SessionId },
    UploadDocument(UploadRequest),
    /// The upload was cleared while still in flight.
    AbandonUpload { ticket: UploadTicket },
}
