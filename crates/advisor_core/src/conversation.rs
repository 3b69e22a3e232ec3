/// Agent text appended whenever the chat service cannot produce a reply.
pub const CHAT_FALLBACK: &str =
    "Sorry, I'm having trouble connecting to the server. Please try again later.";

/// Identifies one launcher session; replies stamped with an older id are stale.
pub type SessionId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Agent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn agent(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Agent,
            text: text.into(),
        }
    }
}

/// How a dispatched chat request resolved, as seen by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOutcome {
    Reply(String),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub session: SessionId,
    pub message: String,
}

/// Message history and turn-taking for one chat session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    session: SessionId,
    messages: Vec<Message>,
    input: String,
    pending: bool,
}

impl Conversation {
    pub fn new(session: SessionId) -> Self {
        Self {
            session,
            messages: Vec::new(),
            input: String::new(),
            pending: false,
        }
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn can_send(&self) -> bool {
        !self.pending && !self.input.trim().is_empty()
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Accepts a user turn and returns the request to dispatch.
    ///
    /// Blank text and submissions while a reply is outstanding are ignored.
    pub fn submit(&mut self, text: &str) -> Option<ChatRequest> {
        if text.trim().is_empty() || self.pending {
            return None;
        }
        self.messages.push(Message::user(text));
        self.pending = true;
        self.input.clear();
        Some(ChatRequest {
            session: self.session,
            message: text.to_owned(),
        })
    }

    /// Applies the resolution of the outstanding request.
    ///
    /// Returns `false` when nothing was pending.
    pub fn resolve(&mut self, outcome: ChatOutcome) -> bool {
        if !self.pending {
            return false;
        }
        let text = match outcome {
            ChatOutcome::Reply(reply) if !reply.trim().is_empty() => reply,
            ChatOutcome::Reply(_) | ChatOutcome::Failed => CHAT_FALLBACK.to_owned(),
        };
        self.messages.push(Message::agent(text));
        self.pending = false;
        true
    }
}
