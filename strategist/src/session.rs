//! Per-session conversation state.

use gemini_client::{ChatSession, GenerativeModel};
use std::sync::Arc;

/// Holds at most one open conversation handle for a user session, created
/// lazily on first use and reused for every generation afterwards.
/// Independent contexts hold independent conversations.
#[derive(Default)]
pub struct SessionContext {
    chat: Option<ChatSession>,
}

impl SessionContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the session's chat handle, creating it with an empty history
    /// on first use.
    pub fn get_or_create(&mut self, model: &Arc<dyn GenerativeModel>) -> &mut ChatSession {
        self.chat
            .get_or_insert_with(|| ChatSession::new(Arc::clone(model)))
    }

    /// Whether a conversation handle has been created yet.
    #[must_use]
    pub fn has_chat(&self) -> bool {
        self.chat.is_some()
    }

    /// The open handle, if one exists.
    #[must_use]
    pub fn chat(&self) -> Option<&ChatSession> {
        self.chat.as_ref()
    }
}
