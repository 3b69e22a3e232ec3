use std::collections::HashMap;
use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use advisor_logging::{advisor_debug, advisor_error, REQUEST_TARGET};
use thiserror::Error;
use tokio::task::JoinHandle;

use crate::{
    ChatService, DocumentUpload, EngineEvent, EventSink, IngestService, ReqwestChatService,
    ReqwestIngestService, ServiceError, ServiceSettings, SessionId, UploadTicket,
};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] io::Error),
    #[error("failed to configure service client: {0}")]
    Service(#[from] ServiceError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum RequestKey {
    Chat(SessionId),
    Upload(UploadTicket),
}

enum EngineCommand {
    Chat { session: SessionId, message: String },
    Upload { ticket: UploadTicket, document: DocumentUpload },
    Abandon(RequestKey),
}

/// Front door to the background worker that performs service requests.
///
/// Each command is run as its own task on a tokio runtime owned by the
/// worker thread; results are reported through the [`EventSink`]. Abandoned
/// requests are aborted and report nothing.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: ServiceSettings, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let chat = Arc::new(ReqwestChatService::new(settings.clone())?);
        let ingest = Arc::new(ReqwestIngestService::new(settings)?);
        Self::with_services(chat, ingest, sink)
    }

    pub fn with_services(
        chat: Arc<dyn ChatService>,
        ingest: Arc<dyn IngestService>,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .thread_name("advisor-engine")
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();

        thread::spawn(move || {
            let mut in_flight: HashMap<RequestKey, JoinHandle<()>> = HashMap::new();
            while let Ok(command) = cmd_rx.recv() {
                in_flight.retain(|_, task| !task.is_finished());
                match command {
                    EngineCommand::Chat { session, message } => {
                        let task = runtime.spawn(run_chat(
                            chat.clone(),
                            sink.clone(),
                            session,
                            message,
                        ));
                        in_flight.insert(RequestKey::Chat(session), task);
                    }
                    EngineCommand::Upload { ticket, document } => {
                        let task = runtime.spawn(run_upload(
                            ingest.clone(),
                            sink.clone(),
                            ticket,
                            document,
                        ));
                        in_flight.insert(RequestKey::Upload(ticket), task);
                    }
                    EngineCommand::Abandon(key) => {
                        if let Some(task) = in_flight.remove(&key) {
                            advisor_debug!(target: REQUEST_TARGET, "abandoning {:?}", key);
                            task.abort();
                        }
                    }
                }
            }
            runtime.shutdown_background();
        });

        Ok(Self { cmd_tx })
    }

    pub fn send_chat(&self, session: SessionId, message: impl Into<String>) {
        self.send(EngineCommand::Chat {
            session,
            message: message.into(),
        });
    }

    pub fn upload(&self, ticket: UploadTicket, document: DocumentUpload) {
        self.send(EngineCommand::Upload { ticket, document });
    }

    pub fn abandon_chat(&self, session: SessionId) {
        self.send(EngineCommand::Abandon(RequestKey::Chat(session)));
    }

    pub fn abandon_upload(&self, ticket: UploadTicket) {
        self.send(EngineCommand::Abandon(RequestKey::Upload(ticket)));
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            advisor_error!("engine worker is gone; request dropped");
        }
    }
}

async fn run_chat(
    service: Arc<dyn ChatService>,
    sink: Arc<dyn EventSink>,
    session: SessionId,
    message: String,
) {
    advisor_debug!(
        target: REQUEST_TARGET,
        "chat dispatch session={} message_len={}",
        session,
        message.len()
    );
    let result = service.ask(&message).await;
    advisor_debug!(
        target: REQUEST_TARGET,
        "chat resolved session={} ok={}",
        session,
        result.is_ok()
    );
    sink.emit(EngineEvent::ChatCompleted { session, result });
}

async fn run_upload(
    service: Arc<dyn IngestService>,
    sink: Arc<dyn EventSink>,
    ticket: UploadTicket,
    document: DocumentUpload,
) {
    advisor_debug!(
        target: REQUEST_TARGET,
        "upload dispatch ticket={} file={} bytes={}",
        ticket,
        document.file_name,
        document.content.len()
    );
    let result = service.upload(&document).await;
    advisor_debug!(
        target: REQUEST_TARGET,
        "upload resolved ticket={} ok={}",
        ticket,
        result.is_ok()
    );
    sink.emit(EngineEvent::UploadCompleted { ticket, result });
}
