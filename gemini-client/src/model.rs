use crate::{
    api::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig},
    errors::{GeminiError, GeminiResult},
    generative::{GenerativeModel, ModelReply, TokenUsage},
    http,
};
use reqwest::Client;

/// Immutable binding to one hosted model: which model to call, how to
/// decode, and the instruction every exchange is prefixed with. Created
/// once at startup; never mutated.
#[derive(Debug, Clone, Default)]
pub struct ModelConfig {
    pub model_id: String,
    pub generation: GenerationConfig,
    pub system_instruction: Option<String>,
}

/// Options accepted when constructing a [`GeminiModel`].
#[derive(Clone, Default)]
pub struct GeminiOptions {
    pub api_key: String,
    pub base_url: Option<String>,
    pub client: Option<Client>,
}

/// Client for the Gemini `generateContent` endpoint. Construction performs
/// no network call.
pub struct GeminiModel {
    config: ModelConfig,
    api_key: String,
    base_url: String,
    client: Client,
}

impl GeminiModel {
    #[must_use]
    pub fn new(config: ModelConfig, options: GeminiOptions) -> Self {
        let GeminiOptions {
            api_key,
            base_url,
            client,
        } = options;

        let base_url = base_url
            .unwrap_or_else(|| "https://generativelanguage.googleapis.com/v1beta".to_string())
            .trim_end_matches('/')
            .to_string();
        let client = client.unwrap_or_else(Client::new);

        Self {
            config,
            api_key,
            base_url,
            client,
        }
    }

    fn request_body(&self, history: &[Content]) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: history.to_vec(),
            system_instruction: self
                .config
                .system_instruction
                .as_ref()
                .map(|instruction| Content::system(instruction.clone())),
            generation_config: Some(self.config.generation.clone()),
        }
    }
}

#[async_trait::async_trait]
impl GenerativeModel for GeminiModel {
    fn model_id(&self) -> &str {
        &self.config.model_id
    }

    async fn generate(&self, history: &[Content]) -> GeminiResult<ModelReply> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.config.model_id, self.api_key
        );

        tracing::debug!(
            model = %self.config.model_id,
            turns = history.len(),
            "sending generateContent request"
        );

        let response: GenerateContentResponse =
            http::send_json(&self.client, &url, &self.request_body(history)).await?;

        let candidate = response
            .candidates
            .and_then(|candidates| candidates.into_iter().next())
            .ok_or_else(|| GeminiError::Invariant("no candidate in response".to_string()))?;

        let text = candidate
            .content
            .and_then(|content| content.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|part| part.text)
            .collect::<String>();
        if text.is_empty() {
            return Err(GeminiError::Invariant(
                "candidate contained no text parts".to_string(),
            ));
        }

        let usage = response.usage_metadata.map(|usage| TokenUsage {
            prompt_tokens: usage.prompt_token_count.unwrap_or(0),
            output_tokens: usage.candidates_token_count.unwrap_or(0),
            total_tokens: usage.total_token_count.unwrap_or(0),
        });

        tracing::debug!(
            model = %self.config.model_id,
            output_chars = text.len(),
            "received generateContent response"
        );

        Ok(ModelReply { text, usage })
    }
}
