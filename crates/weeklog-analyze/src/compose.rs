//! Templated summary composition. No text generation: every sentence is
//! built from strings already extracted upstream.

use crate::AnalysisResult;

/// Emitted when every extracted list is empty.
pub const FALLBACK_SUMMARY: &str = "Parsed logs and prepared a concise weekly summary based on \
                                    detected progress, blockers, and experiments.";

fn join_first(items: &[String], n: usize) -> String {
    items
        .iter()
        .take(n)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Concatenate the fixed-order sentences for each non-empty list.
pub fn compose_summary(analysis: &AnalysisResult) -> String {
    let mut parts = Vec::new();
    if !analysis.themes.is_empty() {
        parts.push(format!("Focus on {}.", analysis.themes.join(" & ")));
    }
    if !analysis.bullets.is_empty() {
        parts.push(format!("Key progress: {}.", join_first(&analysis.bullets, 3)));
    }
    if !analysis.blockers.is_empty() {
        parts.push(format!("Blockers: {}.", join_first(&analysis.blockers, 2)));
    }
    if !analysis.next_steps.is_empty() {
        parts.push(format!("Next: {}.", join_first(&analysis.next_steps, 2)));
    }

    if parts.is_empty() {
        FALLBACK_SUMMARY.to_string()
    } else {
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentences_in_fixed_order() {
        let analysis = AnalysisResult {
            bullets: vec!["shipped a".into(), "shipped b".into()],
            blockers: vec!["waiting on infra".into()],
            next_steps: vec!["Finish rollout".into()],
            themes: vec!["performance".into(), "auth".into()],
            ..Default::default()
        };
        assert_eq!(
            compose_summary(&analysis),
            "Focus on performance & auth. Key progress: shipped a; shipped b. \
             Blockers: waiting on infra. Next: Finish rollout."
        );
    }

    #[test]
    fn test_summary_truncates_long_lists() {
        let analysis = AnalysisResult {
            bullets: (1..=5).map(|i| format!("b{}", i)).collect(),
            blockers: (1..=3).map(|i| format!("x{}", i)).collect(),
            ..Default::default()
        };
        let summary = compose_summary(&analysis);
        assert!(summary.contains("Key progress: b1; b2; b3."));
        assert!(summary.contains("Blockers: x1; x2."));
        assert!(!summary.contains("b4"));
        assert!(!summary.contains("x3"));
    }

    #[test]
    fn test_all_empty_yields_fallback() {
        assert_eq!(compose_summary(&AnalysisResult::default()), FALLBACK_SUMMARY);
    }
}
