//! Compare command implementation
//!
//! Handles the `next-build-parser compare` command which compares the
//! First Load JS of two build reports.

use anyhow::{Context, Result};
use std::env;

use super::input::read_input;
use crate::analyzer::compare_reports;
use crate::config::{ConfigFile, ConfigLoader};
use crate::parser::parse_build_table;
use crate::report::{format_comparison_report, to_json_string};

/// Compare two saved `next build` reports
///
/// # Examples
///
/// ```no_run
/// use next_build_parser::cmd::compare::cmd_compare;
///
/// // Compare the baseline build with the current one
/// cmd_compare("baseline.txt", "current.txt", false)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if either report cannot be read.
pub fn cmd_compare(before: &str, after: &str, json: bool) -> Result<()> {
    if before == "-" && after == "-" {
        anyhow::bail!("Only one of the reports can be read from stdin");
    }

    let before_input = read_input(Some(before)).context("Failed to read baseline report")?;
    let after_input = read_input(Some(after)).context("Failed to read comparison report")?;

    let before_routes = parse_build_table(&before_input.text);
    let after_routes = parse_build_table(&after_input.text);
    log::debug!(
        "Comparing {} routes from {} with {} routes from {}",
        before_routes.len(),
        before_input.source_name,
        after_routes.len(),
        after_input.source_name
    );

    let results = compare_reports(&before_routes, &after_routes);

    if json {
        println!("{}", to_json_string(&results)?);
    } else {
        let route_width = env::current_dir()
            .ok()
            .and_then(|root| ConfigLoader::load(&root).ok())
            .unwrap_or_else(ConfigFile::default)
            .display
            .route_width;
        print!("{}", format_comparison_report(&results, route_width)?);
    }

    Ok(())
}
