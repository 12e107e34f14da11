//! Free-text helpers for list-valued fields.

/// Split multi-line text into list items.
///
/// Each line is trimmed; blank lines are dropped; order is preserved.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
