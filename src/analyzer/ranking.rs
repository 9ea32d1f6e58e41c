//! Route ranking by size
//!
//! Both rankings are stable descending sorts on a copy of the input. Routes
//! whose size is `NaN` rank after every measurable route and keep their
//! report order among themselves.

use crate::parser::RouteRecord;
use std::cmp::Ordering;

/// Default number of routes returned by the rankings
pub const DEFAULT_TOP_LIMIT: usize = 10;

/// Heaviest routes by First Load JS
///
/// # Examples
///
/// ```
/// use next_build_parser::analyzer::top_by_first_load;
/// use next_build_parser::parser::parse_build_table;
///
/// let routes = parse_build_table("├ ○ /a  1 kB  90 kB\n├ ƒ /b  2 kB  300 kB");
/// let top = top_by_first_load(&routes, 1);
/// assert_eq!(top[0].path, "/b");
/// ```
pub fn top_by_first_load(records: &[RouteRecord], limit: usize) -> Vec<RouteRecord> {
    top_by(records, limit, |r| r.first_load_size_kb)
}

/// Heaviest routes by page size
pub fn top_by_page_size(records: &[RouteRecord], limit: usize) -> Vec<RouteRecord> {
    top_by(records, limit, |r| r.page_size_kb)
}

fn top_by<F>(records: &[RouteRecord], limit: usize, key: F) -> Vec<RouteRecord>
where
    F: Fn(&RouteRecord) -> f64,
{
    let mut ranked = records.to_vec();
    // sort_by is stable, ties keep report order
    ranked.sort_by(|a, b| descending_nan_last(key(a), key(b)));
    ranked.truncate(limit);
    ranked
}

/// Descending order with `NaN` after all numbers
pub(crate) fn descending_nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
