//! Keyword-trigger classification of log entries.
//!
//! Themes describe the whole corpus; buckets classify individual lines.
//! Triggers are substrings, not whole words, so a stem like "index" also
//! matches "reindexed". That is intentional.

/// Theme tags with their trigger stems, evaluated in this fixed order.
pub const THEME_TRIGGERS: &[(&str, &[&str])] = &[
    (
        "performance",
        &["perf", "lazy", "payload", "latency", "index", "slow", "cache", "optim"],
    ),
    ("ux polish", &["ux", "design", "copy", "empty state", "ui"]),
    ("auth", &["auth", "token", "security"]),
];

const PROGRESS_TRIGGERS: &[&str] = &[
    "added", "refactor", "fixed", "improv", "cleaned", "implemented", "index", "tweak",
];

const BLOCKER_TRIGGERS: &[&str] = &[
    "blocked", "waiting", "error", "slow", "issue", "investigat", "bug",
];

const EXPERIMENT_TRIGGERS: &[&str] = &["experiment", "prototype", "spike", "try", "explor"];

/// Per-line classification buckets. Not mutually exclusive: a line may
/// land in several buckets or in none. Original order and casing are
/// preserved.
#[derive(Debug, Default)]
pub struct Buckets<'a> {
    pub progress: Vec<&'a str>,
    pub blockers: Vec<&'a str>,
    pub experiments: Vec<&'a str>,
}

fn contains_any(lowered: &str, triggers: &[&str]) -> bool {
    triggers.iter().any(|t| lowered.contains(t))
}

/// Detect corpus-level themes from the joined, lowercased entries.
///
/// Joining before matching means a trigger can span adjacent lines; that
/// cross-line false positive is an accepted precision tradeoff, kept
/// rather than tightened to per-line matching.
pub fn detect_themes(entries: &[&str]) -> Vec<String> {
    let joined = entries.join(" ").to_lowercase();
    THEME_TRIGGERS
        .iter()
        .filter(|(_, triggers)| contains_any(&joined, triggers))
        .map(|(tag, _)| tag.to_string())
        .collect()
}

/// Assign each entry to zero or more buckets.
pub fn bucket_entries<'a>(entries: &[&'a str]) -> Buckets<'a> {
    let mut buckets = Buckets::default();
    for &line in entries {
        let lowered = line.to_lowercase();
        if contains_any(&lowered, PROGRESS_TRIGGERS) {
            buckets.progress.push(line);
        }
        if contains_any(&lowered, BLOCKER_TRIGGERS) {
            buckets.blockers.push(line);
        }
        if contains_any(&lowered, EXPERIMENT_TRIGGERS) {
            buckets.experiments.push(line);
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_order_is_fixed() {
        let entries = ["auth token rotation", "empty state copy pass", "cache warmup"];
        let themes = detect_themes(&entries);
        assert_eq!(themes, vec!["performance", "ux polish", "auth"]);
    }

    #[test]
    fn test_theme_performance_from_cache_line() {
        let themes = detect_themes(&["Slow query, added cache layer"]);
        assert!(themes.contains(&"performance".to_string()));
    }

    #[test]
    fn test_theme_no_duplicates() {
        let themes = detect_themes(&["slow slow cache latency perf"]);
        assert_eq!(themes, vec!["performance"]);
    }

    #[test]
    fn test_stem_matches_inside_longer_words() {
        let buckets = bucket_entries(&["Reindexed the search table overnight"]);
        assert_eq!(buckets.progress.len(), 1);
    }

    #[test]
    fn test_line_can_land_in_multiple_buckets() {
        let buckets = bucket_entries(&["Fixed slow query in billing"]);
        assert_eq!(buckets.progress, vec!["Fixed slow query in billing"]);
        assert_eq!(buckets.blockers, vec!["Fixed slow query in billing"]);
    }

    #[test]
    fn test_buckets_preserve_input_order() {
        let buckets = bucket_entries(&[
            "Started experiment branch",
            "Prototype for the new feed",
        ]);
        assert_eq!(
            buckets.experiments,
            vec!["Started experiment branch", "Prototype for the new feed"]
        );
    }

    #[test]
    fn test_unclassified_line_lands_nowhere() {
        let buckets = bucket_entries(&["Lunch with the platform team"]);
        assert!(buckets.progress.is_empty());
        assert!(buckets.blockers.is_empty());
        assert!(buckets.experiments.is_empty());
    }
}
