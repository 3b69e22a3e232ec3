use std::sync::Once;

use advisor_core::{
    update, AppState, ChatOutcome, ChatRequest, Effect, Message, Msg, Sender, CHAT_FALLBACK,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(advisor_logging::initialize_for_tests);
}

fn open_chat() -> AppState {
    let (state, effects) = update(AppState::new(), Msg::LauncherOpened);
    assert!(effects.is_empty());
    state
}

fn submit(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::ChatInputChanged(input.to_string()));
    update(state, Msg::ChatSubmitted)
}

fn session_of(state: &AppState) -> u64 {
    state.launcher().conversation().expect("open chat").session()
}

#[test]
fn blank_input_is_ignored() {
    init_logging();
    for blank in ["", " ", "\t", "  \n  "] {
        let (state, effects) = submit(open_chat(), blank);
        let chat = state.launcher().conversation().unwrap();
        assert!(chat.messages().is_empty(), "input {blank:?}");
        assert!(!chat.is_pending());
        assert!(effects.is_empty());
    }
}

#[test]
fn submit_appends_user_message_and_dispatches_raw_text() {
    init_logging();
    let state = open_chat();
    let session = session_of(&state);

    let (mut state, effects) = submit(state, "  Fees for CSE?  ");
    let view = state.view();
    let chat = view.chat.expect("chat view");

    assert_eq!(chat.messages, vec![Message::user("  Fees for CSE?  ")]);
    assert!(chat.pending);
    assert_eq!(chat.input, "");
    assert!(!chat.can_send);
    assert!(!chat.show_welcome);
    assert!(state.consume_dirty());
    assert_eq!(
        effects,
        vec![Effect::SendChat(ChatRequest {
            session,
            message: "  Fees for CSE?  ".to_string(),
        })]
    );
}

#[test]
fn reply_is_appended_verbatim() {
    init_logging();
    let state = open_chat();
    let session = session_of(&state);

    let (state, _) = submit(state, "What is the cutoff for Branch X?");
    let (state, effects) = update(
        state,
        Msg::ChatReplied {
            session,
            outcome: ChatOutcome::Reply("It is 95 percentile".to_string()),
        },
    );

    let chat = state.launcher().conversation().unwrap();
    assert!(effects.is_empty());
    assert!(!chat.is_pending());
    assert_eq!(
        chat.messages(),
        &[
            Message::user("What is the cutoff for Branch X?"),
            Message::agent("It is 95 percentile"),
        ]
    );
}

#[test]
fn failure_appends_fallback_notice() {
    init_logging();
    let state = open_chat();
    let session = session_of(&state);

    let (state, _) = submit(state, "anything");
    let (state, _) = update(
        state,
        Msg::ChatReplied {
            session,
            outcome: ChatOutcome::Failed,
        },
    );

    let chat = state.launcher().conversation().unwrap();
    assert!(!chat.is_pending());
    assert_eq!(chat.messages().len(), 2);
    assert_eq!(chat.messages()[1].sender, Sender::Agent);
    assert_eq!(chat.messages()[1].text, CHAT_FALLBACK);
}

#[test]
fn blank_reply_is_replaced_by_fallback() {
    init_logging();
    let state = open_chat();
    let session = session_of(&state);

    let (state, _) = submit(state, "hello");
    let (state, _) = update(
        state,
        Msg::ChatReplied {
            session,
            outcome: ChatOutcome::Reply("   ".to_string()),
        },
    );

    let chat = state.launcher().conversation().unwrap();
    assert_eq!(chat.messages()[1], Message::agent(CHAT_FALLBACK));
}

#[test]
fn submit_while_pending_is_ignored() {
    init_logging();
    let state = open_chat();
    let session = session_of(&state);

    let (state, first) = submit(state, "first");
    assert_eq!(first.len(), 1);

    let (state, second) = submit(state, "second");
    assert!(second.is_empty());
    let chat = state.launcher().conversation().unwrap();
    assert_eq!(chat.messages(), &[Message::user("first")]);
    // The typed text stays in the buffer for after the reply.
    assert_eq!(chat.input(), "second");

    let (state, _) = update(
        state,
        Msg::ChatReplied {
            session,
            outcome: ChatOutcome::Reply("one".to_string()),
        },
    );
    let (state, third) = update(state, Msg::ChatSubmitted);
    assert_eq!(third.len(), 1);
    assert_eq!(
        state.launcher().conversation().unwrap().messages(),
        &[
            Message::user("first"),
            Message::agent("one"),
            Message::user("second"),
        ]
    );
}

#[test]
fn exactly_one_agent_message_per_accepted_submit() {
    init_logging();
    let mut state = open_chat();
    let session = session_of(&state);
    let outcomes = [
        ChatOutcome::Reply("a".to_string()),
        ChatOutcome::Failed,
        ChatOutcome::Reply("c".to_string()),
    ];

    for (turn, outcome) in outcomes.into_iter().enumerate() {
        let (next, effects) = submit(state, &format!("question {turn}"));
        assert_eq!(effects.len(), 1);
        let (next, _) = update(next, Msg::ChatReplied { session, outcome });
        // A duplicate resolution must not append a second agent message.
        let (next, _) = update(
            next,
            Msg::ChatReplied {
                session,
                outcome: ChatOutcome::Reply("dup".to_string()),
            },
        );
        state = next;
    }

    let senders: Vec<Sender> = state
        .launcher()
        .conversation()
        .unwrap()
        .messages()
        .iter()
        .map(|m| m.sender)
        .collect();
    assert_eq!(
        senders,
        vec![
            Sender::User,
            Sender::Agent,
            Sender::User,
            Sender::Agent,
            Sender::User,
            Sender::Agent,
        ]
    );
}

#[test]
fn chat_messages_are_ignored_while_closed() {
    init_logging();
    let (mut state, effects) = submit(AppState::new(), "hello");

    assert!(effects.is_empty());
    assert!(state.launcher().conversation().is_none());
    assert!(!state.consume_dirty());
}
