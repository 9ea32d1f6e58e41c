//! Route records and route-type classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a route's HTML is produced at build time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteType {
    /// Prerendered as static content (`○`)
    Static,
    /// Prerendered with generated params, SSG (`●`)
    IncrementalStatic,
    /// Rendered on demand per request (`ƒ`)
    Dynamic,
    /// Marker not recognized
    Unknown,
}

impl RouteType {
    /// Short label used in human-readable output
    pub fn label(self) -> &'static str {
        match self {
            Self::Static => "Static",
            Self::IncrementalStatic => "SSG",
            Self::Dynamic => "Dynamic",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a route marker to its [`RouteType`]
///
/// Total over all strings: anything other than the three known markers,
/// including the empty string, is [`RouteType::Unknown`].
///
/// # Examples
///
/// ```
/// use next_build_parser::parser::{classify, RouteType};
///
/// assert_eq!(classify("○"), RouteType::Static);
/// assert_eq!(classify("●"), RouteType::IncrementalStatic);
/// assert_eq!(classify("ƒ"), RouteType::Dynamic);
/// assert_eq!(classify("λ"), RouteType::Unknown);
/// ```
pub fn classify(symbol: &str) -> RouteType {
    match symbol {
        "○" => RouteType::Static,
        "●" => RouteType::IncrementalStatic,
        "ƒ" => RouteType::Dynamic,
        _ => RouteType::Unknown,
    }
}

/// One row of the build report route table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    /// Marker character as printed (`○`, `●`, `ƒ`)
    pub symbol: String,
    /// Category derived from `symbol`
    pub route_type: RouteType,
    /// Route path exactly as printed
    pub path: String,
    /// "Size" column text, verbatim
    pub page_size_display: String,
    /// "Size" column in kB, `NaN` if the text was not a valid size
    pub page_size_kb: f64,
    /// "First Load JS" column text, verbatim
    pub first_load_size_display: String,
    /// "First Load JS" column in kB, `NaN` if the text was not a valid size
    pub first_load_size_kb: f64,
}

impl RouteRecord {
    /// Build a record from the raw cells of a table row
    pub fn from_cells(symbol: &str, path: &str, page_size: &str, first_load_size: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            route_type: classify(symbol),
            path: path.to_string(),
            page_size_display: page_size.to_string(),
            page_size_kb: super::parse_size_to_kb(page_size),
            first_load_size_display: first_load_size.to_string(),
            first_load_size_kb: super::parse_size_to_kb(first_load_size),
        }
    }

    /// Number of `/`-separated segments that are bracketed params (`[id]`)
    pub fn dynamic_segment_count(&self) -> usize {
        self.path
            .split('/')
            .filter(|segment| segment.starts_with('['))
            .count()
    }

    /// Whether this is an API route (`/api/` anywhere in the path)
    pub fn is_api_route(&self) -> bool {
        self.path.contains("/api/")
    }
}
