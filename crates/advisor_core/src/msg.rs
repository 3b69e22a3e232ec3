#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User clicked the floating chat button.
    LauncherOpened,
    /// User dismissed the chat overlay.
    LauncherClosed,
    /// User edited the chat input box.
    ChatInputChanged(String),
    /// User submitted the current chat input.
    ChatSubmitted,
    /// Chat service resolution for a session.
    ChatReplied {
        session: crate::SessionId,
        outcome: crate::ChatOutcome,
    },
    /// User picked a file for ingestion.
    FileSelected(crate::SelectedFile),
    /// User removed the picked file.
    FileRemoved,
    /// User clicked Parse PDF.
    UploadClicked,
    /// User clicked Clear.
    ClearClicked,
    /// Ingestion service resolution for an upload.
    UploadFinished {
        ticket: crate::UploadTicket,
        outcome: crate::UploadOutcome,
    },
}
