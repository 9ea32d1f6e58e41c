//! Report rendering
//!
//! Markdown tables, colored console reports and JSON output for parsed
//! build reports.

pub mod json;
pub mod markdown;
pub mod terminal;
pub mod utils;

pub use json::{BudgetInfo, JsonOutput};
pub use markdown::{rows_to_markdown_table, rows_to_markdown_table_with_width};
pub use terminal::{format_comparison_report, format_dashboard_report, ConsoleOptions};
pub use utils::{to_json_string, truncate_middle, DEFAULT_ROUTE_WIDTH};
