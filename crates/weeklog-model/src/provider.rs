//! Structured-summary requests against OpenAI-compatible chat APIs.

use std::time::Duration;

use reqwest::Client;
use serde_json::json;
use tracing::debug;

use crate::config::ModelProvider;
use crate::error::{ModelError, Result};
use crate::report::ModelSummary;

const OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
const GROQ_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const SYSTEM_PROMPT: &str = "You write weekly style updates from raw dev logs. Be concise and \
                             practical. Return JSON that exactly matches the requested format.";

fn endpoint(provider: ModelProvider) -> &'static str {
    match provider {
        ModelProvider::OpenAI => OPENAI_URL,
        ModelProvider::Groq => GROQ_URL,
    }
}

fn user_prompt(logs: &str) -> String {
    format!(
        "Logs:\n{}\n\nFormat strictly as a JSON object with keys: \
         \"summary\" (short paragraph string), \"bullets\" (array of strings), \
         \"blockers\" (array of strings), \"nextSteps\" (array of strings), \
         \"themes\" (array of strings).",
        logs
    )
}

/// Request a structured weekly summary from the configured provider.
///
/// Non-streaming; the reply's message content must itself be the JSON
/// object. Any transport, status, or decode problem is an error the
/// caller absorbs into the heuristic fallback.
pub async fn request_summary(
    client: &Client,
    provider: ModelProvider,
    model: &str,
    api_key: &str,
    logs: &str,
) -> Result<ModelSummary> {
    let body = json!({
        "model": model,
        "messages": [
            {"role": "system", "content": SYSTEM_PROMPT},
            {"role": "user", "content": user_prompt(logs)},
        ],
        "temperature": 0.2,
        "response_format": {"type": "json_object"},
    });

    debug!("Requesting summary from {} with model {}", provider, model);

    let response = client
        .post(endpoint(provider))
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .timeout(REQUEST_TIMEOUT)
        .json(&body)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        return Err(ModelError::Api { status, body });
    }

    let reply: serde_json::Value = response.json().await?;
    let content = reply["choices"][0]["message"]["content"]
        .as_str()
        .ok_or_else(|| ModelError::MalformedResponse("missing message content".into()))?;

    Ok(serde_json::from_str(content)?)
}
