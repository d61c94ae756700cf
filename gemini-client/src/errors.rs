use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeminiError {
    /// The request to the API failed or the parsing of the response failed.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The request returned a non-OK status code.
    #[error("Status error: {1} (Status {0})")]
    Status(reqwest::StatusCode, String),
    /// The response violated the API contract (e.g. no candidates returned).
    #[error("Invariant: {0}")]
    Invariant(String),
}

pub type GeminiResult<T> = Result<T, GeminiError>;
