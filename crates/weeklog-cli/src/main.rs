//! Minimal harness: POST log text to the summarize API and print the JSON.
//!
//! Usage:
//!   weeklog-post                 # uses the built-in sample text
//!   weeklog-post ./logs.txt      # reads logs from a file
//!   echo "2025-01-13 Did stuff" | weeklog-post   # reads from stdin

use std::io::{IsTerminal, Read};

use anyhow::{bail, Context};

const DEFAULT_URL: &str = "http://localhost:8787/api/summarize";

const SAMPLE_LOGS: &str = "\
2025-01-13 09:44  Refactored auth middleware and cleaned up token handling on API gateway.
2025-01-13 15:02  Fixed flaky integration test in billing pipeline.
2025-01-14 10:17  Added lazy loading on table view and reduced initial payload by ~40 percent.
2025-01-14 14:30  Investigated slow query in reporting service.
2025-01-15 09:10  Improved empty state copy on the dashboard.
2025-01-15 16:20  Started experiment branch for streaming updates into activity feed.";

fn read_input() -> anyhow::Result<String> {
    // File path argument wins
    if let Some(path) = std::env::args().nth(1) {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("Could not read file: {}", path));
    }

    // Piped input
    let mut stdin = std::io::stdin();
    if !stdin.is_terminal() {
        let mut buf = String::new();
        stdin.read_to_string(&mut buf)?;
        return Ok(buf);
    }

    // Fallback: sample logs
    Ok(SAMPLE_LOGS.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let logs = read_input()?;
    if logs.trim().is_empty() {
        bail!("No logs provided.");
    }

    let url = std::env::var("URL").unwrap_or_else(|_| DEFAULT_URL.to_string());

    let response = reqwest::Client::new()
        .post(&url)
        .json(&serde_json::json!({ "logs": logs }))
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        bail!("Request failed ({}): {}", status, body);
    }

    let json: serde_json::Value = response.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);

    Ok(())
}
