//! Calendar coverage: distinct dated days and a weekday range label.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// `YYYY-MM-DD` anchored at the start of the line.
static DATE_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4}-\d{2}-\d{2})").unwrap());

/// Coverage figures for a normalized entry list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coverage {
    pub days_covered: usize,
    pub day_range_label: String,
}

fn weekday_abbrev(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%a").to_string())
        .unwrap_or_default()
}

/// Compute coverage from the normalized entries (original line text, so
/// date prefixes are still present).
///
/// A corpus with entries but no parseable date still counts as covering
/// one unspecified day. ISO dates sort lexicographically in calendar
/// order, so the BTreeSet bounds are the earliest and latest days.
pub fn compute(entries: &[&str]) -> Coverage {
    let mut dates: BTreeSet<&str> = BTreeSet::new();
    for line in entries {
        if let Some(caps) = DATE_PREFIX.captures(line) {
            dates.insert(caps.get(1).map(|m| m.as_str()).unwrap_or_default());
        }
    }

    let days_covered = if dates.is_empty() {
        usize::from(!entries.is_empty())
    } else {
        dates.len()
    };

    let day_range_label = match (dates.iter().next(), dates.iter().next_back()) {
        (Some(first), Some(last)) if first == last => weekday_abbrev(first),
        (Some(first), Some(last)) => {
            format!("{} – {}", weekday_abbrev(first), weekday_abbrev(last))
        }
        _ => String::new(),
    };

    Coverage {
        days_covered,
        day_range_label,
    }
}
