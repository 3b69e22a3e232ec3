use crate::view_model::{AppViewModel, ChatView, FileSummary, IngestionView};
use crate::{Ingestion, Launcher};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    launcher: Launcher,
    ingestion: Ingestion,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn launcher(&self) -> &Launcher {
        &self.launcher
    }

    pub fn ingestion(&self) -> &Ingestion {
        &self.ingestion
    }

    pub(crate) fn launcher_mut(&mut self) -> &mut Launcher {
        &mut self.launcher
    }

    pub(crate) fn ingestion_mut(&mut self) -> &mut Ingestion {
        &mut self.ingestion
    }

    pub fn view(&self) -> AppViewModel {
        let chat = self.launcher.conversation().map(|chat| ChatView {
            session: chat.session(),
            messages: chat.messages().to_vec(),
            input: chat.input().to_owned(),
            pending: chat.is_pending(),
            can_send: chat.can_send(),
            show_welcome: chat.messages().is_empty(),
        });

        let ingestion = IngestionView {
            phase: self.ingestion.phase(),
            file: self.ingestion.file().map(FileSummary::from_file),
            error: self.ingestion.error().map(ToOwned::to_owned),
            result: self.ingestion.result().cloned(),
            can_upload: self.ingestion.can_upload(),
        };

        AppViewModel {
            launcher_open: self.launcher.is_open(),
            chat,
            ingestion,
            dirty: self.dirty,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether a render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
