//! Shared application state.

use weeklog_model::ModelConfig;

/// State shared across route handlers. The model config is resolved once
/// at startup; handlers never consult the environment themselves.
pub struct AppState {
    pub model_config: ModelConfig,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(model_config: ModelConfig) -> Self {
        Self {
            model_config,
            http: reqwest::Client::new(),
        }
    }
}
