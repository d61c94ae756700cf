use crate::errors::GeminiError;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Create a JSON request, parse the response.
/// Throws error on non OK status code.
pub(crate) async fn send_json<T: Serialize, R: DeserializeOwned>(
    client: &Client,
    url: &str,
    data: &T,
) -> Result<R, GeminiError> {
    let response = client.post(url).json(data).send().await?;
    if response.status().is_success() {
        Ok(response.json::<R>().await?)
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(GeminiError::Status(status, error_message(&body)))
    }
}

/// The API wraps failures as `{"error": {"message": ...}}`; fall back to
/// the raw body when the shape differs.
fn error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: ErrorDetail,
    }

    #[derive(Deserialize)]
    struct ErrorDetail {
        message: String,
    }

    serde_json::from_str::<ErrorBody>(body)
        .map(|body| body.error.message)
        .unwrap_or_else(|_| body.to_string())
}
