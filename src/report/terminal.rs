//! Console report formatting
//!
//! Provides colored console output for dashboard metrics, recommendations and
//! report comparisons.

use super::utils::truncate_middle;
use crate::analyzer::{
    ChangeStatus, ComparisonResults, DashboardMetrics, PerformanceScore, Recommendation, Severity,
    TypeShare,
};
use crate::fmt::{format_kb, format_percent, CHART, INFO, MICROSCOPE, SPARKLES, WARNING};
use crate::parser::RouteRecord;
use console::style;
use std::fmt::{self, Write as _};

/// Number of changed routes listed in a comparison report
const MAX_LISTED_CHANGES: usize = 15;

/// Options for the dashboard console report
#[derive(Debug, Clone, Copy)]
pub struct ConsoleOptions {
    /// Hide the top-route tables
    pub compact: bool,
    /// Longest route path shown before it is shortened
    pub route_width: usize,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            compact: false,
            route_width: super::DEFAULT_ROUTE_WIDTH,
        }
    }
}

/// Format dashboard metrics and recommendations for console output
pub fn format_dashboard_report(
    metrics: &DashboardMetrics,
    recommendations: &[Recommendation],
    options: &ConsoleOptions,
) -> Result<String, fmt::Error> {
    let mut output = String::new();
    let overview = &metrics.overview;

    writeln!(output, "\n{} {}", CHART, style("Build Overview").bold().underlined())?;
    writeln!(
        output,
        "   Routes: {}",
        style(overview.total_routes).cyan().bold()
    )?;
    writeln!(
        output,
        "   Average First Load JS: {}  (total {})",
        style(format_kb(overview.avg_first_load_kb)).cyan(),
        format_kb(overview.total_first_load_kb)
    )?;
    writeln!(
        output,
        "   Average Page Size: {}  (total {})",
        style(format_kb(overview.avg_page_size_kb)).cyan(),
        format_kb(overview.total_page_size_kb)
    )?;

    let score = match metrics.performance.score {
        PerformanceScore::Excellent | PerformanceScore::Good => {
            style(metrics.performance.score).green().bold()
        }
        PerformanceScore::Fair => style(metrics.performance.score).yellow().bold(),
        PerformanceScore::Poor => style(metrics.performance.score).red().bold(),
    };
    writeln!(output, "   Performance: {}", score)?;

    writeln!(output, "\n{} Route Types", style(INFO).bold())?;
    let types = &metrics.route_types;
    write_type_share(&mut output, "Static", &types.static_routes)?;
    write_type_share(&mut output, "SSG", &types.incremental_static)?;
    write_type_share(&mut output, "Dynamic", &types.dynamic)?;

    let dist = &metrics.size_distribution;
    writeln!(output, "\n{} First Load JS Distribution", style(CHART).bold())?;
    writeln!(output, "   {:<16} {}", "< 200 kB", style(dist.small).green())?;
    writeln!(output, "   {:<16} {}", "200-500 kB", style(dist.medium).cyan())?;
    writeln!(output, "   {:<16} {}", "500 kB-1 MB", style(dist.large).yellow())?;
    writeln!(output, "   {:<16} {}", ">= 1 MB", style(dist.very_large).red())?;

    if !options.compact {
        write_route_table(
            &mut output,
            "Heaviest First Load JS",
            &metrics.top_routes.by_first_load,
            |r| r.first_load_size_kb,
            options.route_width,
        )?;
        write_route_table(
            &mut output,
            "Largest Page Size",
            &metrics.top_routes.by_page_size,
            |r| r.page_size_kb,
            options.route_width,
        )?;
    }

    let issues = &metrics.issues;
    if issues.critical > 0 || issues.warnings > 0 {
        writeln!(output, "\n{} Issues", style(WARNING).bold())?;
        if issues.critical > 0 {
            writeln!(output, "   {} critical", style(issues.critical).red().bold())?;
        }
        if issues.warnings > 0 {
            writeln!(output, "   {} warnings", style(issues.warnings).yellow().bold())?;
        }
    }
    for hint in &issues.optimizations {
        writeln!(output, "   {} {}", style("→").dim(), hint)?;
    }

    if !recommendations.is_empty() {
        writeln!(output, "\n{} Recommendations", style(SPARKLES).bold())?;
        for rec in recommendations {
            let title = match rec.severity {
                Severity::Critical => style(rec.title).red().bold(),
                Severity::Warning => style(rec.title).yellow().bold(),
                Severity::Positive => style(rec.title).green().bold(),
                Severity::Info => style(rec.title).bold(),
            };
            writeln!(output, "   {} {}: {}", rec.icon(), title, rec.message)?;
        }
    }

    Ok(output)
}

fn write_type_share(output: &mut String, label: &str, share: &TypeShare) -> fmt::Result {
    writeln!(
        output,
        "   {:<8} {:>4}  ({})",
        label,
        style(share.count).cyan(),
        format_percent(share.ratio)
    )
}

fn write_route_table(
    output: &mut String,
    title: &str,
    routes: &[RouteRecord],
    size_of: impl Fn(&RouteRecord) -> f64,
    route_width: usize,
) -> fmt::Result {
    if routes.is_empty() {
        return Ok(());
    }

    writeln!(output, "\n{} {}", style(MICROSCOPE).bold(), title)?;
    output.push_str("   ─────────────────────────────────────────────────────────\n");
    for (i, route) in routes.iter().enumerate() {
        writeln!(
            output,
            "   {:2}. {:>10}  {} {}",
            i + 1,
            style(format_kb(size_of(route))).cyan().bold(),
            style(route.route_type.label()).dim(),
            truncate_middle(&route.path, route_width)
        )?;
    }
    Ok(())
}

/// Format a report comparison for console output
pub fn format_comparison_report(
    results: &ComparisonResults,
    route_width: usize,
) -> Result<String, fmt::Error> {
    let mut output = String::new();

    writeln!(
        output,
        "\n{} {}",
        CHART,
        style("Build Report Comparison").bold().underlined()
    )?;
    writeln!(output, "   Before: {}", format_kb(results.before_total_kb))?;
    writeln!(output, "   After:  {}", format_kb(results.after_total_kb))?;

    let delta = format!(
        "{}{} ({:+.1}%)",
        if results.delta_kb < 0.0 { "-" } else { "+" },
        format_kb(results.delta_kb.abs()),
        results.delta_percent
    );
    let delta = if results.delta_kb > 0.0 {
        style(delta).red().bold()
    } else {
        style(delta).green().bold()
    };
    writeln!(output, "   Delta:  {}", delta)?;

    let changed: Vec<_> = results.changed().collect();
    if changed.is_empty() {
        writeln!(output, "\n   {}", style("No route changes").dim())?;
        return Ok(output);
    }

    writeln!(output, "\n{} Route Changes", style(MICROSCOPE).bold())?;
    output.push_str("   ─────────────────────────────────────────────────────────\n");
    for change in changed.iter().take(MAX_LISTED_CHANGES) {
        let tag = match change.status {
            ChangeStatus::Added => style("added  ").cyan(),
            ChangeStatus::Removed => style("removed").dim(),
            ChangeStatus::Changed | ChangeStatus::Unchanged => style("changed").yellow(),
        };
        let delta = format!(
            "{}{}",
            if change.delta_kb < 0.0 { "-" } else { "+" },
            format_kb(change.delta_kb.abs())
        );
        let delta = if change.delta_kb > 0.0 {
            style(delta).red()
        } else {
            style(delta).green()
        };
        writeln!(
            output,
            "   {} {:>11}  {}",
            tag,
            delta,
            truncate_middle(&change.path, route_width)
        )?;
    }

    if changed.len() > MAX_LISTED_CHANGES {
        writeln!(
            output,
            "\n   {} {} more changes...",
            style("...").dim(),
            changed.len() - MAX_LISTED_CHANGES
        )?;
    }

    Ok(output)
}
