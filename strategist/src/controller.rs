//! Orchestrates one generation: prompt construction, the remote call, and
//! shaping the result for rendering and export.

use crate::{export, prompt::GenerationRequest, session::SessionContext};
use gemini_client::{GeminiError, GenerativeModel, TokenUsage};
use std::sync::Arc;
use thiserror::Error;

/// Controller phases. The remote call is awaited in full, so Generating is
/// only observable from within a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerState {
    #[default]
    Idle,
    Generating,
}

/// The outcome of one successful generation, held only long enough to
/// render and optionally export.
#[derive(Debug, Clone)]
pub struct GeneratedContent {
    /// Raw text returned by the model.
    pub body: String,
    /// Name for the downloadable artifact.
    pub file_name: String,
    /// Mime type the artifact is offered with.
    pub mime_type: &'static str,
    /// Token accounting reported by the provider, when present.
    pub usage: Option<TokenUsage>,
}

/// Failure during one generation attempt. Surfaced inline; the controller
/// is back to idle and the process continues.
#[derive(Debug, Error)]
#[error("Error generating content: {0}")]
pub struct GenerateError(#[from] GeminiError);

pub struct Controller {
    model: Arc<dyn GenerativeModel>,
    state: ControllerState,
}

impl Controller {
    #[must_use]
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self {
            model,
            state: ControllerState::Idle,
        }
    }

    #[must_use]
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Run one generation against the session's conversation handle. A
    /// failed call returns an error value and yields no artifact.
    pub async fn generate(
        &mut self,
        session: &mut SessionContext,
        request: &GenerationRequest,
    ) -> Result<GeneratedContent, GenerateError> {
        self.state = ControllerState::Generating;
        let result = self.generate_inner(session, request).await;
        self.state = ControllerState::Idle;
        result
    }

    async fn generate_inner(
        &self,
        session: &mut SessionContext,
        request: &GenerationRequest,
    ) -> Result<GeneratedContent, GenerateError> {
        tracing::info!(
            content_type = %request.content_type(),
            topic = request.topic(),
            "generating content"
        );

        let prompt = request.prompt();
        let chat = session.get_or_create(&self.model);
        let reply = chat.send_message(prompt).await?;

        if let Some(usage) = reply.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                output_tokens = usage.output_tokens,
                total_tokens = usage.total_tokens,
                "generation finished"
            );
        }

        Ok(GeneratedContent {
            file_name: export::file_name(request.content_type(), request.topic()),
            mime_type: export::MARKDOWN_MIME,
            usage: reply.usage,
            body: reply.text,
        })
    }
}
