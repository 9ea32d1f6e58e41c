//! Markdown table rendering

use super::utils::{truncate_middle, DEFAULT_ROUTE_WIDTH};
use crate::parser::RouteRecord;

const HEADER: &str = "| # | Route | First Load JS | Page Size |\n|---|-------|---------------|----------|";

/// Render routes as a markdown table
///
/// Rows are numbered from 1 and show the size strings exactly as they
/// appeared in the build output. Paths longer than 60 characters are
/// shortened in the middle.
///
/// # Examples
///
/// ```
/// use next_build_parser::parser::parse_build_table;
/// use next_build_parser::report::rows_to_markdown_table;
///
/// let routes = parse_build_table("┌ ○ /_not-found  880 B  89.6 kB");
/// let table = rows_to_markdown_table(&routes);
/// assert!(table.ends_with("| 1 | `/_not-found` | 89.6 kB | 880 B |"));
/// ```
pub fn rows_to_markdown_table(records: &[RouteRecord]) -> String {
    rows_to_markdown_table_with_width(records, DEFAULT_ROUTE_WIDTH)
}

/// Render routes as a markdown table with a custom route width
pub fn rows_to_markdown_table_with_width(records: &[RouteRecord], route_width: usize) -> String {
    let body = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            format!(
                "| {} | `{}` | {} | {} |",
                i + 1,
                truncate_middle(&record.path, route_width),
                record.first_load_size_display,
                record.page_size_display
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\n{}", HEADER, body)
}
