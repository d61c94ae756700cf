use crate::{
    api::Content,
    errors::GeminiResult,
    generative::{GenerativeModel, ModelReply},
};
use std::sync::Arc;

/// One continuous exchange with the model: the ordered turn history plus
/// the model it accumulates against.
///
/// A failed exchange leaves the history untouched; the user turn and the
/// model turn are committed together once the reply arrives.
pub struct ChatSession {
    model: Arc<dyn GenerativeModel>,
    history: Vec<Content>,
}

impl ChatSession {
    /// Start a session with an empty history.
    #[must_use]
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self {
            model,
            history: Vec::new(),
        }
    }

    /// Send one user message and await the full reply.
    pub async fn send_message(&mut self, text: impl Into<String> + Send) -> GeminiResult<ModelReply> {
        let mut turns = self.history.clone();
        turns.push(Content::user(text));

        let reply = self.model.generate(&turns).await?;

        turns.push(Content::model(reply.text.clone()));
        self.history = turns;
        Ok(reply)
    }

    /// The recorded turns, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Content] {
        &self.history
    }

    /// Number of turns (user and model) recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
