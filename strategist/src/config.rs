//! Startup configuration: the API credential and the fixed model binding.

use gemini_client::{GenerationConfig, ModelConfig};
use std::env;
use thiserror::Error;

/// Environment variable holding the Gemini API credential.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// The hosted model every generation is bound to.
pub const MODEL_ID: &str = "gemini-2.0-flash-exp";

/// Persona prefixed to every exchange.
pub const SYSTEM_INSTRUCTION: &str = "Act as an expert technical content strategist specializing in [TECHNOLOGY/FIELD: Artificial Intelligence, LLMs, Generative AI and Web Technology]. Create engaging, educational content that builds authority while maintaining reader engagement across both blog posts and newsletters.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Absence of the credential is a configuration error, not a transient
    /// failure. Startup halts before any form is usable.
    #[error("Please set your GEMINI_API_KEY in the environment or .env file")]
    MissingApiKey,
}

/// Read the API credential from the process environment.
pub fn api_key() -> Result<String, ConfigError> {
    match env::var(API_KEY_VAR) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(ConfigError::MissingApiKey),
    }
}

/// Decoding parameters and persona for the content strategist, fixed at
/// startup.
#[must_use]
pub fn model_config() -> ModelConfig {
    ModelConfig {
        model_id: MODEL_ID.to_string(),
        generation: GenerationConfig {
            temperature: Some(1.0),
            top_p: Some(0.95),
            top_k: Some(40),
            max_output_tokens: Some(8192),
            response_mime_type: Some("text/plain".to_string()),
        },
        system_instruction: Some(SYSTEM_INSTRUCTION.to_string()),
    }
}
