use std::sync::Once;

use advisor_core::{update, AppState, ChatOutcome, Effect, Message, Msg};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(advisor_logging::initialize_for_tests);
}

fn submit(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::ChatInputChanged(input.to_string()));
    update(state, Msg::ChatSubmitted)
}

#[test]
fn opening_starts_an_empty_session() {
    init_logging();
    let (mut state, _) = update(AppState::new(), Msg::LauncherOpened);
    let view = state.view();

    assert!(view.launcher_open);
    let chat = view.chat.expect("chat view");
    assert!(chat.messages.is_empty());
    assert!(chat.show_welcome);
    assert!(!chat.pending);
    assert!(state.consume_dirty());
}

#[test]
fn open_twice_keeps_the_same_session() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::LauncherOpened);
    let (state, _) = submit(state, "hello");
    let session = state.launcher().conversation().unwrap().session();

    let (mut state, _) = update(state, Msg::LauncherOpened);
    state.consume_dirty();
    let chat = state.launcher().conversation().unwrap();
    assert_eq!(chat.session(), session);
    assert_eq!(chat.messages().len(), 1);
}

#[test]
fn close_discards_history_and_reopen_is_fresh() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::LauncherOpened);
    let first = state.launcher().conversation().unwrap().session();
    let (state, _) = submit(state, "hello");
    let (state, _) = update(
        state,
        Msg::ChatReplied {
            session: first,
            outcome: ChatOutcome::Reply("hi".to_string()),
        },
    );

    let (state, effects) = update(state, Msg::LauncherClosed);
    assert!(effects.is_empty(), "nothing was pending");
    assert!(!state.view().launcher_open);
    assert!(state.view().chat.is_none());

    let (state, _) = update(state, Msg::LauncherOpened);
    let chat = state.launcher().conversation().unwrap();
    assert_ne!(chat.session(), first);
    assert!(chat.messages().is_empty());
}

#[test]
fn closing_with_pending_request_abandons_it() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::LauncherOpened);
    let session = state.launcher().conversation().unwrap().session();
    let (state, _) = submit(state, "hello");

    let (_state, effects) = update(state, Msg::LauncherClosed);
    assert_eq!(effects, vec![Effect::AbandonChat { session }]);
}

#[test]
fn stale_reply_after_reopen_is_dropped() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::LauncherOpened);
    let stale = state.launcher().conversation().unwrap().session();
    let (state, _) = submit(state, "old question");
    let (state, _) = update(state, Msg::LauncherClosed);
    let (state, _) = update(state, Msg::LauncherOpened);
    let (mut state, _) = submit(state, "new question");
    state.consume_dirty();

    let (mut state, effects) = update(
        state,
        Msg::ChatReplied {
            session: stale,
            outcome: ChatOutcome::Reply("old answer".to_string()),
        },
    );

    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    let chat = state.launcher().conversation().unwrap();
    assert!(chat.is_pending());
    assert_eq!(chat.messages(), &[Message::user("new question")]);
}

#[test]
fn reply_while_closed_is_dropped() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::LauncherOpened);
    let session = state.launcher().conversation().unwrap().session();
    let (state, _) = submit(state, "hello");
    let (mut state, _) = update(state, Msg::LauncherClosed);
    state.consume_dirty();

    let (mut state, _) = update(
        state,
        Msg::ChatReplied {
            session,
            outcome: ChatOutcome::Failed,
        },
    );
    assert!(!state.launcher().is_open());
    assert!(!state.consume_dirty());
}

#[test]
fn close_while_closed_is_noop() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::LauncherClosed);
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}
