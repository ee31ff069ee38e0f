//! weeklog-model — the external-model collaborator around the heuristic
//! engine: provider configuration, the structured-summary request, and
//! the merge/fallback policy. Model failures never escape this crate;
//! callers always get a well-formed report.

pub mod config;
pub mod error;
pub mod provider;
pub mod report;

use tracing::warn;

pub use config::{ModelConfig, ModelProvider};
pub use error::{ModelError, Result};
pub use report::{ModelSummary, Provenance, WeeklyReport};

use weeklog_analyze::analyze;

/// Summarize raw logs: heuristic analysis first, then a model pass when a
/// provider is configured. Any model failure (rate limits included)
/// degrades silently to the heuristic-only report.
pub async fn summarize_logs(
    client: &reqwest::Client,
    config: &ModelConfig,
    logs: &str,
) -> WeeklyReport {
    let analysis = analyze(logs);

    let Some((provider, model, api_key)) = config.resolve() else {
        return WeeklyReport::heuristic(analysis);
    };

    match provider::request_summary(client, provider, &model, &api_key, logs).await {
        Ok(summary) => WeeklyReport::merged(summary, analysis),
        Err(e) => {
            warn!("Model summary failed, using heuristic result: {}", e);
            WeeklyReport::heuristic(analysis)
        }
    }
}
