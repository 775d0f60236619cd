//! Numbered-list parsing for follow-up suggestions.
//!
//! A line is a candidate when, trimmed, it starts with any numeric character
//! or `-`. Only ASCII list markers are stripped; empty leftovers are dropped.

/// Characters stripped from the front of a candidate line.
fn is_list_marker(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | ')' | ' ')
}

/// Extracts every list item from a raw provider reply, in order.
pub fn parse_list_items(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| line.starts_with(char::is_numeric) || line.starts_with('-'))
        .map(|line| line.trim_start_matches(is_list_marker).trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Returns exactly two suggestions, or `None` when the reply holds fewer.
/// Extra items beyond the first two are discarded.
pub fn parse_suggestions(raw: &str) -> Option<[String; 2]> {
    let mut items = parse_list_items(raw).into_iter();
    match (items.next(), items.next()) {
        (Some(first), Some(second)) => Some([first, second]),
        _ => None,
    }
}
