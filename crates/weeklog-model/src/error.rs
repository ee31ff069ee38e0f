//! Model-call errors. Every variant is absorbed by the heuristic
//! fallback; none is ever surfaced to an HTTP caller.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("No model provider configured")]
    Unconfigured,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
