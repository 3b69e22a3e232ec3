//! Advisor engine: service clients and request execution.
mod chat;
mod engine;
mod http;
mod ingest;
mod sink;
mod types;

pub use chat::{ChatService, ReqwestChatService};
pub use engine::{EngineError, EngineHandle};
pub use http::{ServiceSettings, DEFAULT_CHAT_BASE_URL, DEFAULT_INGEST_BASE_URL};
pub use ingest::{IngestService, ReqwestIngestService, UPLOAD_FIELD};
pub use sink::{ChannelEventSink, EventSink};
pub use types::{
    DocumentUpload, EngineEvent, FailureKind, ParsedDocument, ServiceError, SessionId,
    UploadTicket,
};
