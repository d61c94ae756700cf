//! Wire types for the `models.generate_content` endpoint.

use serde::{Deserialize, Serialize};

/// Body of a `models.generate_content` call.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Content of the request: the conversation turns, oldest first.
    pub contents: Vec<Content>,
    /// Instructions for the model to steer it toward better performance.
    /// Applied to every exchange in the conversation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// Contains the multi-part content of a message.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// List of parts that constitute a single message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<Part>>,
    /// The producer of the content. Must be either 'user' or 'model' for
    /// conversation turns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Content {
    /// A single-part user turn.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self::with_role("user", text)
    }

    /// A single-part model turn.
    #[must_use]
    pub fn model(text: impl Into<String>) -> Self {
        Self::with_role("model", text)
    }

    /// A system instruction content. The API ignores the role here, but it
    /// is set for symmetry with conversation turns.
    #[must_use]
    pub fn system(text: impl Into<String>) -> Self {
        Self::with_role("system", text)
    }

    fn with_role(role: &str, text: impl Into<String>) -> Self {
        Self {
            parts: Some(vec![Part::text(text)]),
            role: Some(role.to_string()),
        }
    }

    /// Concatenated text of every part.
    #[must_use]
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .flatten()
            .filter_map(|part| part.text.as_deref())
            .collect()
    }
}

/// A datatype containing media content. This client only exchanges text
/// parts.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Text part (can be code).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// Optional model configuration parameters, fixed per model binding.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Value that controls the degree of randomness in token selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Tokens are selected from the most to least probable until the sum of
    /// their probabilities equals this value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    /// For each token selection step, the `top_k` tokens with the highest
    /// probabilities are sampled. Must be a non-negative integer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<i32>,
    /// Maximum number of tokens that can be generated in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    /// Output response mimetype of the generated candidate text. Supported:
    /// `text/plain` (default) and `application/json`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
}

/// Response from `models.generate_content`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidate responses from the model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<Candidate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<UsageMetadata>,
}

/// A response candidate generated from the model.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    /// The reason the model stopped generating tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// Token accounting for the request and response.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_token_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates_token_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_token_count: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_camel_case_and_omits_none() {
        let request = GenerateContentRequest {
            contents: vec![Content::user("hello")],
            system_instruction: None,
            generation_config: Some(GenerationConfig {
                temperature: Some(1.0),
                top_p: Some(0.95),
                top_k: Some(40),
                max_output_tokens: Some(8192),
                response_mime_type: Some("text/plain".to_string()),
            }),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "contents": [
                    { "role": "user", "parts": [{ "text": "hello" }] }
                ],
                "generationConfig": {
                    "temperature": 1.0,
                    "topP": 0.95,
                    "topK": 40,
                    "maxOutputTokens": 8192,
                    "responseMimeType": "text/plain"
                }
            })
        );
    }

    #[test]
    fn response_deserializes_candidates_and_usage() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {
                    "content": {
                        "role": "model",
                        "parts": [{ "text": "Generated " }, { "text": "text" }]
                    },
                    "finishReason": "STOP"
                }
            ],
            "usageMetadata": {
                "promptTokenCount": 12,
                "candidatesTokenCount": 345,
                "totalTokenCount": 357
            }
        }))
        .unwrap();

        let candidates = response.candidates.unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].content.as_ref().unwrap().text(), "Generated text");
        let usage = response.usage_metadata.unwrap();
        assert_eq!(usage.prompt_token_count, Some(12));
        assert_eq!(usage.total_token_count, Some(357));
    }
}
