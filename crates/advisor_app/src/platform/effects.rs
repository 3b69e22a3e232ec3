use std::sync::{mpsc, Arc};

use advisor_core::{
    ChatOutcome, ChatRequest, Effect, Msg, SelectedFile, UploadOutcome, UploadRequest,
    UploadResult,
};
use advisor_engine::{
    DocumentUpload, EngineError, EngineEvent, EngineHandle, EventSink, ServiceSettings,
};
use advisor_logging::{advisor_info, advisor_warn};

use super::event::AppEvent;

/// Executes core effects on the engine and feeds completions back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ServiceSettings, tx: mpsc::Sender<AppEvent>) -> Result<Self, EngineError> {
        let engine = EngineHandle::new(settings, Arc::new(MsgSink { tx }))?;
        Ok(Self { engine })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SendChat(ChatRequest { session, message }) => {
                    advisor_info!(
                        "SendChat session={} message_len={}",
                        session,
                        message.len()
                    );
                    self.engine.send_chat(session, message);
                }
                Effect::AbandonChat { session } => {
                    advisor_info!("AbandonChat session={}", session);
                    self.engine.abandon_chat(session);
                }
                Effect::UploadDocument(UploadRequest { ticket, file }) => {
                    advisor_info!(
                        "UploadDocument ticket={} file={} bytes={}",
                        ticket,
                        file.name,
                        file.size_bytes
                    );
                    self.engine.upload(ticket, to_document(file));
                }
                Effect::AbandonUpload { ticket } => {
                    advisor_info!("AbandonUpload ticket={}", ticket);
                    self.engine.abandon_upload(ticket);
                }
            }
        }
    }
}

struct MsgSink {
    tx: mpsc::Sender<AppEvent>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(AppEvent::Msg(map_event(event)));
    }
}

fn to_document(file: SelectedFile) -> DocumentUpload {
    DocumentUpload {
        file_name: file.name,
        media_type: file.media_type,
        content: file.content,
    }
}

/// Maps engine completions to core messages.
///
/// Failure details are logged here; the chat controller only ever learns
/// that the request failed.
fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ChatCompleted { session, result } => {
            let outcome = match result {
                Ok(reply) => ChatOutcome::Reply(reply),
                Err(err) => {
                    advisor_warn!("Chat session {} failed: {}", session, err);
                    ChatOutcome::Failed
                }
            };
            Msg::ChatReplied { session, outcome }
        }
        EngineEvent::UploadCompleted { ticket, result } => {
            let outcome = match result {
                Ok(parsed) => UploadOutcome::Parsed(UploadResult {
                    college_name: parsed.college_name,
                    college_code: parsed.college_code,
                    total_branches: parsed.total_branches,
                }),
                Err(err) => {
                    advisor_warn!("Upload {} failed: {}", ticket, err);
                    UploadOutcome::Failed {
                        message: err.detail,
                    }
                }
            };
            Msg::UploadFinished { ticket, outcome }
        }
    }
}
