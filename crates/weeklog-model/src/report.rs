//! The weekly-report payload and the model/heuristic merge policy.

use serde::{Deserialize, Serialize};

use weeklog_analyze::{compose_summary, AnalysisResult};

/// Where a report's text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provenance {
    #[serde(rename = "heuristic-only")]
    HeuristicOnly,
    #[serde(rename = "model-assisted")]
    ModelAssisted,
}

/// Structured object requested from the external model. Every field
/// defaults to empty so a partial reply still deserializes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSummary {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub bullets: Vec<String>,
    #[serde(default)]
    pub blockers: Vec<String>,
    #[serde(default)]
    pub next_steps: Vec<String>,
    #[serde(default)]
    pub themes: Vec<String>,
}

/// The summarize API response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReport {
    pub summary: String,
    pub bullets: Vec<String>,
    pub blockers: Vec<String>,
    pub next_steps: Vec<String>,
    pub themes: Vec<String>,
    pub days_covered: usize,
    pub day_range_label: String,
    pub entries_parsed: usize,
    pub source: Provenance,
    pub fallback: bool,
}

fn prefer_non_empty(model: Vec<String>, heuristic: Vec<String>) -> Vec<String> {
    if model.is_empty() {
        heuristic
    } else {
        model
    }
}

impl WeeklyReport {
    /// Report built entirely from the heuristic engine.
    pub fn heuristic(analysis: AnalysisResult) -> Self {
        Self {
            summary: compose_summary(&analysis),
            bullets: analysis.bullets,
            blockers: analysis.blockers,
            next_steps: analysis.next_steps,
            themes: analysis.themes,
            days_covered: analysis.days_covered,
            day_range_label: analysis.day_range_label,
            entries_parsed: analysis.entries_parsed,
            source: Provenance::HeuristicOnly,
            fallback: true,
        }
    }

    /// Merge a model reply over the heuristic analysis. The model's field
    /// wins when non-empty; coverage figures always come from the
    /// heuristic engine, which the model is never asked to compute.
    pub fn merged(model: ModelSummary, analysis: AnalysisResult) -> Self {
        let summary = if model.summary.trim().is_empty() {
            compose_summary(&analysis)
        } else {
            model.summary
        };
        Self {
            summary,
            bullets: prefer_non_empty(model.bullets, analysis.bullets),
            blockers: prefer_non_empty(model.blockers, analysis.blockers),
            next_steps: prefer_non_empty(model.next_steps, analysis.next_steps),
            themes: prefer_non_empty(model.themes, analysis.themes),
            days_covered: analysis.days_covered,
            day_range_label: analysis.day_range_label,
            entries_parsed: analysis.entries_parsed,
            source: Provenance::ModelAssisted,
            fallback: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weeklog_analyze::analyze;

    const LOGS: &str = "2025-01-13 09:44  Refactored auth middleware\n\
                        2025-01-14 14:30  Investigated slow query in reporting service";

    #[test]
    fn test_heuristic_report_is_tagged_fallback() {
        let report = WeeklyReport::heuristic(analyze(LOGS));
        assert_eq!(report.source, Provenance::HeuristicOnly);
        assert!(report.fallback);
        assert_eq!(report.entries_parsed, 2);
        assert_eq!(report.day_range_label, "Mon – Tue");
    }

    #[test]
    fn test_merge_prefers_non_empty_model_fields() {
        let model = ModelSummary {
            summary: "A tight week.".into(),
            bullets: vec!["Shipped the gateway refactor".into()],
            ..Default::default()
        };
        let analysis = analyze(LOGS);
        let heuristic_blockers = analysis.blockers.clone();

        let report = WeeklyReport::merged(model, analysis);
        assert_eq!(report.source, Provenance::ModelAssisted);
        assert_eq!(report.summary, "A tight week.");
        assert_eq!(report.bullets, vec!["Shipped the gateway refactor"]);
        // Empty model fields fall back to the heuristic values.
        assert_eq!(report.blockers, heuristic_blockers);
        assert!(!report.blockers.is_empty());
    }

    #[test]
    fn test_merge_keeps_coverage_from_heuristics() {
        let model = ModelSummary::default();
        let report = WeeklyReport::merged(model, analyze(LOGS));
        assert_eq!(report.days_covered, 2);
        assert_eq!(report.day_range_label, "Mon – Tue");
        assert_eq!(report.entries_parsed, 2);
    }

    #[test]
    fn test_provenance_serializes_as_marker_strings() {
        let report = WeeklyReport::heuristic(analyze(LOGS));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["source"], "heuristic-only");
        assert!(json["nextSteps"].is_array());
        assert!(json["daysCovered"].is_number());
    }
}
