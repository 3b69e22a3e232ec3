use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::LauncherOpened => {
            if state.launcher_mut().open() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::LauncherClosed => match state.launcher_mut().close() {
            Some(chat) => {
                state.mark_dirty();
                if chat.is_pending() {
                    vec![Effect::AbandonChat {
                        session: chat.session(),
                    }]
                } else {
                    Vec::new()
                }
            }
            None => Vec::new(),
        },
        Msg::ChatInputChanged(text) => {
            if let Some(chat) = state.launcher_mut().conversation_mut() {
                chat.set_input(text);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ChatSubmitted => {
            let request = state.launcher_mut().conversation_mut().and_then(|chat| {
                let text = chat.input().to_owned();
                chat.submit(&text)
            });
            match request {
                Some(request) => {
                    state.mark_dirty();
                    vec![Effect::SendChat(request)]
                }
                None => Vec::new(),
            }
        }
        Msg::ChatReplied { session, outcome } => {
            if state.launcher_mut().deliver(session, outcome) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::FileSelected(file) => {
            if state.ingestion_mut().select_file(file) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::FileRemoved => {
            if state.ingestion_mut().remove_file() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::UploadClicked => {
            let before = state.ingestion().clone();
            let request = state.ingestion_mut().upload();
            if *state.ingestion() != before {
                state.mark_dirty();
            }
            request
                .map(|request| vec![Effect::UploadDocument(request)])
                .unwrap_or_default()
        }
        Msg::ClearClicked => {
            let abandoned = state.ingestion_mut().clear();
            state.mark_dirty();
            abandoned
                .map(|ticket| vec![Effect::AbandonUpload { ticket }])
                .unwrap_or_default()
        }
        Msg::UploadFinished { ticket, outcome } => {
            if state.ingestion_mut().finish(ticket, outcome) {
                state.mark_dirty();
            }
            Vec::new()
        }
    };

    (state, effects)
}
