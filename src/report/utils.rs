//! Shared utilities for report formatting

use anyhow::{Context, Result};
use serde::Serialize;

/// Default route width before a path is shortened
pub const DEFAULT_ROUTE_WIDTH: usize = 60;

const ELLIPSIS: &str = "...";
const KEEP_START: usize = 20;
const KEEP_END: usize = 20;

/// Shorten a string in the middle, keeping its start and end
///
/// Keeps 20 leading and 20 trailing characters around `...`. When
/// `max_len` leaves no room for both, the kept halves shrink to fit.
/// Counts characters, so multi-byte text is never split.
///
/// # Examples
///
/// ```
/// use next_build_parser::report::truncate_middle;
///
/// assert_eq!(truncate_middle("/about", 60), "/about");
///
/// let long = "/[locale]/organizations/[orgId]/projects/[projectId]/settings/members";
/// assert_eq!(truncate_middle(long, 60), "/[locale]/organizati...Id]/settings/members");
/// ```
pub fn truncate_middle(s: &str, max_len: usize) -> String {
    let len = s.chars().count();
    if len <= max_len {
        return s.to_string();
    }

    let (start_len, end_len) = if max_len < KEEP_START + KEEP_END + ELLIPSIS.len() {
        let available = max_len.saturating_sub(ELLIPSIS.len());
        let start = available / 2;
        (start, available - start)
    } else {
        (KEEP_START, KEEP_END)
    };

    if max_len < ELLIPSIS.len() {
        return s.chars().take(max_len).collect();
    }

    let start: String = s.chars().take(start_len).collect();
    let end: String = s.chars().skip(len - end_len).collect();
    format!("{}{}{}", start, ELLIPSIS, end)
}

/// Serialize a value as pretty-printed JSON
pub fn to_json_string<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize JSON output")
}
