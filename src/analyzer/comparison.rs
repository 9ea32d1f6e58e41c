//! Before/after comparison of two build reports

use super::distribution::{finite_sum, percent_of_kb};
use crate::parser::RouteRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How a route changed between two builds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeStatus {
    /// Only present in the after report
    Added,
    /// Only present in the before report
    Removed,
    /// Present in both with a different First Load JS size
    Changed,
    /// Present in both with the same size
    Unchanged,
}

/// First Load JS change of a single route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteChange {
    /// Route path
    pub path: String,
    /// First Load JS in the before report, kB
    pub before_kb: Option<f64>,
    /// First Load JS in the after report, kB
    pub after_kb: Option<f64>,
    /// Size delta in kB (negative = reduction)
    pub delta_kb: f64,
    /// Kind of change
    pub status: ChangeStatus,
}

/// Comparison results between two build reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResults {
    /// Total First Load JS before, kB
    pub before_total_kb: f64,
    /// Total First Load JS after, kB
    pub after_total_kb: f64,
    /// Delta in kB (negative = reduction)
    pub delta_kb: f64,
    /// Delta percentage relative to the before total
    pub delta_percent: f64,
    /// Per-route changes, largest absolute delta first
    pub changes: Vec<RouteChange>,
}

impl ComparisonResults {
    /// Routes whose size or presence changed
    pub fn changed(&self) -> impl Iterator<Item = &RouteChange> {
        self.changes
            .iter()
            .filter(|c| c.status != ChangeStatus::Unchanged)
    }
}

/// Compare the First Load JS of two parsed reports
///
/// Routes are matched by path; when a report lists a path twice the first
/// row wins. Unparseable sizes count as zero in deltas and totals.
///
/// # Examples
///
/// ```
/// use next_build_parser::analyzer::{compare_reports, ChangeStatus};
/// use next_build_parser::parser::parse_build_table;
///
/// let before = parse_build_table("┌ ○ /  1 kB  100 kB");
/// let after = parse_build_table("┌ ○ /  1 kB  80 kB");
/// let results = compare_reports(&before, &after);
/// assert_eq!(results.delta_kb, -20.0);
/// assert_eq!(results.changes[0].status, ChangeStatus::Changed);
/// ```
pub fn compare_reports(before: &[RouteRecord], after: &[RouteRecord]) -> ComparisonResults {
    let before_total_kb = finite_sum(before.iter().map(|r| r.first_load_size_kb));
    let after_total_kb = finite_sum(after.iter().map(|r| r.first_load_size_kb));
    let delta_kb = after_total_kb - before_total_kb;

    let before_by_path = first_by_path(before);
    let after_by_path = first_by_path(after);

    let mut changes = Vec::new();
    for (path, before_kb) in unique_paths(before) {
        let after_kb = after_by_path.get(path).copied();
        changes.push(route_change(path, Some(before_kb), after_kb));
    }
    for (path, after_kb) in unique_paths(after) {
        if !before_by_path.contains_key(path) {
            changes.push(route_change(path, None, Some(after_kb)));
        }
    }

    // sort_by is stable: ties keep report order
    changes.sort_by(|a, b| b.delta_kb.abs().total_cmp(&a.delta_kb.abs()));

    ComparisonResults {
        before_total_kb,
        after_total_kb,
        delta_kb,
        delta_percent: percent_of_kb(delta_kb, before_total_kb),
        changes,
    }
}

fn first_by_path(records: &[RouteRecord]) -> HashMap<&str, f64> {
    let mut map = HashMap::new();
    for record in records {
        map.entry(record.path.as_str())
            .or_insert(record.first_load_size_kb);
    }
    map
}

/// Paths in report order, first occurrence only
fn unique_paths(records: &[RouteRecord]) -> impl Iterator<Item = (&str, f64)> + '_ {
    let mut seen = std::collections::HashSet::new();
    records
        .iter()
        .filter(move |r| seen.insert(r.path.as_str()))
        .map(|r| (r.path.as_str(), r.first_load_size_kb))
}

fn route_change(path: &str, before_kb: Option<f64>, after_kb: Option<f64>) -> RouteChange {
    let finite = |kb: Option<f64>| kb.filter(|v| v.is_finite()).unwrap_or(0.0);
    let delta_kb = finite(after_kb) - finite(before_kb);

    let status = match (before_kb, after_kb) {
        (None, _) => ChangeStatus::Added,
        (_, None) => ChangeStatus::Removed,
        _ if delta_kb != 0.0 => ChangeStatus::Changed,
        _ => ChangeStatus::Unchanged,
    };

    RouteChange {
        path: path.to_string(),
        before_kb,
        after_kb,
        delta_kb,
        status,
    }
}
