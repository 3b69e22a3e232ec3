use crate::{ChatOutcome, Conversation, SessionId};

/// Floating chat launcher: `Closed` or `Open` with a live session.
///
/// Every open starts a fresh [`Conversation`]; closing drops it along with
/// its history.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Launcher {
    chat: Option<Conversation>,
    last_session: SessionId,
}

impl Launcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.chat.is_some()
    }

    pub fn conversation(&self) -> Option<&Conversation> {
        self.chat.as_ref()
    }

    pub fn conversation_mut(&mut self) -> Option<&mut Conversation> {
        self.chat.as_mut()
    }

    /// Opens a new session. No-op when already open.
    pub fn open(&mut self) -> bool {
        if self.chat.is_some() {
            return false;
        }
        self.last_session += 1;
        self.chat = Some(Conversation::new(self.last_session));
        true
    }

    /// Closes and discards the session.
    ///
    /// Returns the discarded conversation so the caller can abandon its
    /// outstanding request.
    pub fn close(&mut self) -> Option<Conversation> {
        self.chat.take()
    }

    /// Routes a reply to the session it was issued for.
    ///
    /// Replies for a discarded session are dropped and `false` is returned.
    pub fn deliver(&mut self, session: SessionId, outcome: ChatOutcome) -> bool {
        match self.chat.as_mut() {
            Some(chat) if chat.session() == session => chat.resolve(outcome),
            _ => false,
        }
    }
}
