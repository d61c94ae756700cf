use crate::{api::Content, errors::GeminiResult};

/// Token accounting reported by the provider for one exchange.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub output_tokens: u32,
    pub total_tokens: u32,
}

/// One full (non-streaming) reply from the model.
#[derive(Debug, Clone)]
pub struct ModelReply {
    /// The generated text.
    pub text: String,
    pub usage: Option<TokenUsage>,
}

#[async_trait::async_trait]
pub trait GenerativeModel: Send + Sync {
    fn model_id(&self) -> &str;

    /// Generate a reply for the conversation so far. `history` is ordered
    /// oldest first and ends with the user turn awaiting a reply.
    async fn generate(&self, history: &[Content]) -> GeminiResult<ModelReply>;
}
