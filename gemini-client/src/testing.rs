//! Test support: a mock [`GenerativeModel`] that yields queued replies and
//! tracks the histories it was asked to complete.

use crate::{
    api::Content,
    errors::{GeminiError, GeminiResult},
    generative::{GenerativeModel, ModelReply},
};
use std::{collections::VecDeque, sync::Mutex};

#[derive(Default)]
struct MockModelState {
    queued: VecDeque<GeminiResult<ModelReply>>,
    calls: Vec<Vec<Content>>,
}

/// A mock model for tests: yields predefined results in order and records
/// every history passed to `generate`.
pub struct MockModel {
    model_id: String,
    state: Mutex<MockModelState>,
}

impl Default for MockModel {
    fn default() -> Self {
        Self {
            model_id: "mock-model".to_string(),
            state: Mutex::new(MockModelState::default()),
        }
    }
}

impl MockModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply with the given text.
    pub fn enqueue_reply(&self, text: &str) -> &Self {
        self.enqueue(Ok(ModelReply {
            text: text.to_string(),
            usage: None,
        }))
    }

    /// Queue an error result.
    pub fn enqueue_error(&self, error: GeminiError) -> &Self {
        self.enqueue(Err(error))
    }

    fn enqueue(&self, result: GeminiResult<ModelReply>) -> &Self {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.queued.push_back(result);
        drop(state);
        self
    }

    /// Every history `generate` was called with, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<Vec<Content>> {
        let state = self.state.lock().expect("mock state poisoned");
        state.calls.clone()
    }
}

#[async_trait::async_trait]
impl GenerativeModel for MockModel {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn generate(&self, history: &[Content]) -> GeminiResult<ModelReply> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.calls.push(history.to_vec());

        state.queued.pop_front().unwrap_or_else(|| {
            Err(GeminiError::Invariant(
                "no queued results in mock".to_string(),
            ))
        })
    }
}
