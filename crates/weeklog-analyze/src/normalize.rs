//! Line normalization and display cleaning for raw log text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Leading timestamp prefix: `YYYY-MM-DD`, any non-alphanumeric separator,
/// `HH:MM`, then at least one whitespace character.
static TIMESTAMP_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}[^A-Za-z0-9]*\d{2}:\d{2}\s+").unwrap()
});

/// Split raw text into trimmed, non-empty entries.
///
/// Handles both `\n` and `\r\n` separators. Whitespace-only lines never
/// reach any downstream bucket or count.
pub fn split_entries(raw: &str) -> Vec<&str> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Clean an entry for display: strip the leading timestamp prefix, drop
/// literal `\n` escape sequences, trim surrounding whitespace.
///
/// Operates on the original casing; classification uses its own
/// lowercased view of the line.
pub fn clean_entry(line: &str) -> String {
    TIMESTAMP_PREFIX
        .replace(line, "")
        .replace("\\n", "")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_drops_blank_lines() {
        let entries = split_entries("first\r\n\r\n   \nsecond\n");
        assert_eq!(entries, vec!["first", "second"]);
    }

    #[test]
    fn test_split_empty_input() {
        assert!(split_entries("").is_empty());
        assert!(split_entries("  \n \r\n").is_empty());
    }

    #[test]
    fn test_clean_strips_timestamp() {
        assert_eq!(
            clean_entry("2025-01-14 10:17  Added lazy loading on table view"),
            "Added lazy loading on table view"
        );
    }

    #[test]
    fn test_clean_keeps_date_without_time() {
        // Date with no HH:MM is not a timestamp prefix.
        assert_eq!(clean_entry("2025-01-14 shipped the fix"), "2025-01-14 shipped the fix");
    }

    #[test]
    fn test_clean_removes_escape_sequences() {
        assert_eq!(clean_entry("fixed the bug\\n"), "fixed the bug");
    }
}
