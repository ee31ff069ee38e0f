//! Bullet/blocker selection and next-step rewriting.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::classify::Buckets;
use crate::normalize::clean_entry;

pub const MAX_BULLETS: usize = 5;
pub const MAX_BLOCKERS: usize = 3;
pub const MAX_NEXT_STEPS: usize = 3;

/// "started" before "start" so the full token is replaced when present.
static START_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)started|start").unwrap());

/// Investigat- stem plus whatever suffix follows it.
static INVESTIGATE_STEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)investigat\w*").unwrap());

const ROLL_OUT_TRIGGERS: &[&str] = &["added", "refactor", "fixed", "improv", "implemented"];

/// One next-step rewrite rule. Rules are evaluated in order; the first
/// whose predicate matches wins and no later rule runs.
struct RewriteRule {
    applies: fn(&str) -> bool,
    apply: fn(&str) -> String,
}

const REWRITE_RULES: &[RewriteRule] = &[
    // Started work should be finished.
    RewriteRule {
        applies: |s| START_TOKEN.is_match(s),
        apply: |s| START_TOKEN.replace(s, "Finish").trim().to_string(),
    },
    // Investigations become writeups.
    RewriteRule {
        applies: |s| INVESTIGATE_STEM.is_match(s),
        apply: |s| INVESTIGATE_STEM.replace(s, "Document findings and fix").into_owned(),
    },
    // Landed changes get rolled out.
    RewriteRule {
        applies: |s| {
            let lowered = s.to_lowercase();
            ROLL_OUT_TRIGGERS.iter().any(|t| lowered.contains(t))
        },
        apply: |s| format!("Roll out: {}", s),
    },
];

fn rewrite_next_step(cleaned: &str) -> String {
    for rule in REWRITE_RULES {
        if (rule.applies)(cleaned) {
            return (rule.apply)(cleaned);
        }
    }
    cleaned.to_string()
}

/// First five progress lines, cleaned for display.
pub fn bullets(buckets: &Buckets<'_>) -> Vec<String> {
    buckets
        .progress
        .iter()
        .take(MAX_BULLETS)
        .map(|line| clean_entry(line))
        .collect()
}

/// First three blocker lines, cleaned for display.
pub fn blockers(buckets: &Buckets<'_>) -> Vec<String> {
    buckets
        .blockers
        .iter()
        .take(MAX_BLOCKERS)
        .map(|line| clean_entry(line))
        .collect()
}

/// Suggested next steps: seeded from the experiments bucket when it has
/// entries, otherwise from progress; cleaned, then rewritten. Rules are
/// line-local, so duplicate phrasing across lines can survive.
pub fn next_steps(buckets: &Buckets<'_>) -> Vec<String> {
    let seed = if buckets.experiments.is_empty() {
        &buckets.progress
    } else {
        &buckets.experiments
    };
    seed.iter()
        .take(MAX_NEXT_STEPS)
        .map(|line| rewrite_next_step(&clean_entry(line)))
        .collect()
}
