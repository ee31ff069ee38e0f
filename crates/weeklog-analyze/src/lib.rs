//! weeklog-analyze — deterministic heuristic analysis of raw developer logs.
//!
//! Converts free-form daily log text into a structured weekly report:
//! themes, progress bullets, blockers, next steps, and calendar coverage.
//! Fully offline and total over its input: any string, including empty,
//! produces a well-formed result, and identical input always produces
//! identical output. Used as the baseline for (and fallback of) the
//! external-model summarizer.

pub mod classify;
pub mod compose;
pub mod coverage;
pub mod extract;
pub mod normalize;

use serde::{Deserialize, Serialize};

pub use compose::{compose_summary, FALLBACK_SUMMARY};

/// Structured analysis of one log corpus. Field names serialize in
/// camelCase to match the summarize API surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Up to five cleaned progress lines.
    pub bullets: Vec<String>,
    /// Up to three cleaned blocker lines.
    pub blockers: Vec<String>,
    /// Up to three rewritten suggestions.
    pub next_steps: Vec<String>,
    /// Corpus-level theme tags, fixed evaluation order, no duplicates.
    pub themes: Vec<String>,
    /// Distinct dated days; 1 for an undated non-empty corpus, 0 when empty.
    pub days_covered: usize,
    /// Weekday range, e.g. "Mon – Wed". Empty when no entry carries a date.
    pub day_range_label: String,
    /// Count of non-empty input lines.
    pub entries_parsed: usize,
}

/// Run the full pipeline: normalize, classify, extract, compute coverage.
pub fn analyze(raw: &str) -> AnalysisResult {
    let entries = normalize::split_entries(raw);

    let themes = classify::detect_themes(&entries);
    let buckets = classify::bucket_entries(&entries);
    let coverage = coverage::compute(&entries);

    AnalysisResult {
        bullets: extract::bullets(&buckets),
        blockers: extract::blockers(&buckets),
        next_steps: extract::next_steps(&buckets),
        themes,
        days_covered: coverage.days_covered,
        day_range_label: coverage.day_range_label,
        entries_parsed: entries.len(),
    }
}
